//! Source locations attached to IR nodes.
use std::cmp::{Ord, Ordering, PartialOrd};
use std::fmt;
use std::path::{Path, PathBuf};

/// A single line/column pair.
///
/// Both the line and the column start at 1.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub fn new(line: u32, column: u32) -> Position {
        Position { line, column }
    }
}

impl Default for Position {
    fn default() -> Position {
        Position { line: 1, column: 1 }
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Position) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Position {
    fn cmp(&self, other: &Position) -> Ordering {
        let ord = self.line.cmp(&other.line);

        if ord == Ordering::Equal {
            return self.column.cmp(&other.column);
        }

        ord
    }
}

/// The location of an IR node in the file it originates from.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Location {
    pub file: PathBuf,
    pub start: Position,
    pub end: Position,
}

impl Location {
    pub fn new<P: Into<PathBuf>>(
        file: P,
        start: Position,
        end: Position,
    ) -> Location {
        Location { file: file.into(), start, end }
    }

    /// Returns a location starting at `start` and ending where `end` ends.
    ///
    /// The file is taken from `start`.
    pub fn start_end(start: &Location, end: &Location) -> Location {
        Location {
            file: start.file.clone(),
            start: start.start,
            end: end.end,
        }
    }

    pub fn file(&self) -> &Path {
        &self.file
    }
}

impl fmt::Debug for Location {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {:?}..{:?}", self.file.display(), self.start, self.end)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}:{}", self.file.display(), self.start)
    }
}

impl PartialOrd for Location {
    fn partial_cmp(&self, other: &Location) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Location {
    fn cmp(&self, other: &Location) -> Ordering {
        self.file
            .cmp(&other.file)
            .then_with(|| self.start.cmp(&other.start))
            .then_with(|| self.end.cmp(&other.end))
    }
}
