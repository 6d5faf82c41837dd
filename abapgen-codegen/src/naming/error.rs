//! Errors raised by the naming engine.

use std::fmt;

use thiserror::Error;

/// Errors from identifier editing.
///
/// Editing itself is total; only pattern input such as path templates can be
/// rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NamingError {
    #[error("malformed path template '{path}' at byte {offset}: {defect}")]
    MalformedPath {
        path: String,
        offset: usize,
        defect: PathDefect,
    },
}

/// What is wrong with a path template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathDefect {
    /// A `{` is never closed
    Unterminated,
    /// A `{` appears inside an open placeholder
    Nested,
    /// A `}` appears without an open placeholder
    UnmatchedClose,
    /// `{}` names nothing
    Empty,
}

impl fmt::Display for PathDefect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathDefect::Unterminated => write!(f, "unterminated '{{'"),
            PathDefect::Nested => write!(f, "nested '{{' inside a placeholder"),
            PathDefect::UnmatchedClose => write!(f, "'}}' without a matching '{{'"),
            PathDefect::Empty => write!(f, "empty placeholder"),
        }
    }
}
