//! Failures a tool reports back to the host as an error result.

use std::fmt;

use crate::reader::ReaderError;

/// Why a tool invocation did not produce a value.
#[derive(Debug)]
pub enum ToolFailure {
    /// An argument was missing or had the wrong type.
    InvalidArguments(String),

    /// The arguments were well-formed but not acceptable (e.g. a zero divisor).
    InvalidValue(String),

    /// The file reader failed.
    Reader(ReaderError),
}

impl fmt::Display for ToolFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArguments(msg) => write!(f, "Invalid arguments: {}", msg),
            Self::InvalidValue(msg) => write!(f, "{}", msg),
            Self::Reader(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for ToolFailure {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Reader(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ReaderError> for ToolFailure {
    fn from(e: ReaderError) -> Self {
        Self::Reader(e)
    }
}
