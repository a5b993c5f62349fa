//! Errors produced while resolving descriptors and lowering modules.
use location::Location;
use std::error;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// A structural rule broken by the input program.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Violation {
    /// Two modules with the same name were added to a package.
    DuplicateModule(String),

    /// Two members of a module share the same name.
    DuplicateMember(String),

    /// A global variable has the same name as an explicitly defined member.
    GlobalCollision(String),

    /// An assignment has more than one target, such as `a = b = 1`.
    MultipleAssignTargets(usize),

    /// A comparison with more than one operator, such as `a < b < c`.
    ChainedComparison(usize),

    /// A name or attribute is used in a context it can't be used in.
    InvalidContext { construct: &'static str, context: &'static str },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Violation::DuplicateModule(name) => {
                write!(f, "the module '{}' is already defined", name)
            }
            Violation::DuplicateMember(name) => {
                write!(f, "the member '{}' is already defined", name)
            }
            Violation::GlobalCollision(name) => write!(
                f,
                "the global variable '{}' conflicts with a member of the \
                same name",
                name
            ),
            Violation::MultipleAssignTargets(n) => write!(
                f,
                "assignments must have exactly one target, found {}",
                n
            ),
            Violation::ChainedComparison(n) => write!(
                f,
                "comparisons must have exactly one operator, found {}",
                n
            ),
            Violation::InvalidContext { construct, context } => write!(
                f,
                "'{}' can't be used in a {} context here",
                construct, context
            ),
        }
    }
}

#[derive(Debug)]
pub enum Error {
    /// A construct that is recognized but not supported.
    Unsupported { construct: &'static str, location: Option<Location> },

    /// The input program is structurally invalid.
    Violation { violation: Violation, location: Option<Location> },

    /// No descriptor could be found, starting at the given directory.
    DescriptorNotFound { root: PathBuf },

    /// A descriptor was found but is invalid.
    DescriptorInvalid { path: PathBuf, reason: String },

    /// A descriptor exists but couldn't be read.
    DescriptorUnreadable { path: PathBuf, error: io::Error },
}

impl Error {
    pub fn unsupported(
        construct: &'static str,
        location: Option<Location>,
    ) -> Error {
        Error::Unsupported { construct, location }
    }

    pub fn violation(
        violation: Violation,
        location: Option<Location>,
    ) -> Error {
        Error::Violation { violation, location }
    }

    /// Returns the source location the error originates from, if known.
    pub fn location(&self) -> Option<&Location> {
        match self {
            Error::Unsupported { location, .. } => location.as_ref(),
            Error::Violation { location, .. } => location.as_ref(),
            _ => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Unsupported { construct, location: Some(loc) } => {
                write!(f, "{}: '{}' isn't supported", loc, construct)
            }
            Error::Unsupported { construct, location: None } => {
                write!(f, "'{}' isn't supported", construct)
            }
            Error::Violation { violation, location: Some(loc) } => {
                write!(f, "{}: {}", loc, violation)
            }
            Error::Violation { violation, location: None } => {
                write!(f, "{}", violation)
            }
            Error::DescriptorNotFound { root } => write!(
                f,
                "no package descriptor could be found in '{}'",
                root.display()
            ),
            Error::DescriptorInvalid { path, reason } => write!(
                f,
                "the package descriptor '{}' is invalid: {}",
                path.display(),
                reason
            ),
            Error::DescriptorUnreadable { path, error } => write!(
                f,
                "the package descriptor '{}' couldn't be read: {}",
                path.display(),
                error
            ),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::DescriptorUnreadable { error, .. } => Some(error),
            _ => None,
        }
    }
}
