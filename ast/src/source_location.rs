use std::cmp::{Ord, Ordering, PartialOrd};
use std::fmt;

/// A line/column pair as produced by the parser.
///
/// Lines start at 1, columns start at 0.
#[derive(PartialEq, Eq, Clone, Copy, Hash)]
pub struct Coordinate {
    pub line: usize,
    pub column: usize,
}

impl Coordinate {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Debug for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

// The span of a single statement or expression.
#[derive(PartialEq, Eq, Clone, Hash)]
pub struct SourceLocation {
    pub start: Coordinate,
    pub end: Coordinate,
}

impl SourceLocation {
    pub fn new(start: Coordinate, end: Coordinate) -> Self {
        Self { start, end }
    }

    /// Returns a location covering a range of columns on a single line.
    pub fn line(line: usize, start_column: usize, end_column: usize) -> Self {
        Self {
            start: Coordinate::new(line, start_column),
            end: Coordinate::new(line, end_column),
        }
    }

    pub fn start_end(start: &Self, end: &Self) -> Self {
        Self { start: start.start, end: end.end }
    }
}

impl fmt::Debug for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}..{:?}", self.start, self.end)
    }
}

impl PartialOrd for SourceLocation {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SourceLocation {
    fn cmp(&self, other: &Self) -> Ordering {
        let ord = self.start.line.cmp(&other.start.line);

        if ord == Ordering::Equal {
            return self.start.column.cmp(&other.start.column);
        }

        ord
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_end() {
        let a = SourceLocation::line(1, 0, 4);
        let b = SourceLocation::line(3, 2, 9);

        assert_eq!(
            SourceLocation::start_end(&a, &b),
            SourceLocation::new(Coordinate::new(1, 0), Coordinate::new(3, 9))
        );
    }

    #[test]
    fn test_ordering() {
        assert!(SourceLocation::line(1, 4, 5) < SourceLocation::line(2, 0, 1));
        assert!(SourceLocation::line(2, 0, 9) < SourceLocation::line(2, 1, 2));
    }
}
