//! Error types for file reading operations.

use std::fmt;
use std::io;

/// Errors that can occur while resolving or reading a data file.
#[derive(Debug)]
pub enum ReaderError {
    /// The requested file does not exist in the data directory.
    NotFound(String),

    /// The filename is absolute or tries to leave the data directory.
    InvalidPath(String),

    /// The file contains no header row to take columns from.
    EmptyData,

    /// Underlying filesystem error.
    Io(io::Error),

    /// The CSV reader rejected the file.
    Csv(csv::Error),

    /// A CSV row has more fields than the header.
    TooManyFields {
        /// 1-based line number, counting the header line
        line: u64,
        expected: usize,
        found: usize,
    },

    /// The Parquet reader rejected the file.
    Parquet(parquet::errors::ParquetError),

    /// Loading or extracting text from a PDF failed.
    Pdf {
        /// Filename as given by the caller
        filename: String,
        /// Message from the PDF library
        message: String,
    },
}

impl ReaderError {
    /// Returns `true` if this error means the file was not there.
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::NotFound(_) => true,
            Self::Io(e) => e.kind() == io::ErrorKind::NotFound,
            Self::Csv(e) => matches!(e.kind(), csv::ErrorKind::Io(inner) if inner.kind() == io::ErrorKind::NotFound),
            _ => false,
        }
    }
}

impl fmt::Display for ReaderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound(filename) => {
                write!(f, "PDF file '{}' not found in data directory", filename)
            }
            Self::InvalidPath(filename) => {
                write!(f, "Invalid filename '{}': must be relative to the data directory", filename)
            }
            Self::EmptyData => write!(f, "No columns to parse from file"),
            Self::Io(e) => write!(f, "{}", e),
            Self::Csv(e) => write!(f, "{}", e),
            Self::TooManyFields { line, expected, found } => write!(
                f,
                "Error tokenizing data. Expected {} fields in line {}, saw {}",
                expected, line, found
            ),
            Self::Parquet(e) => write!(f, "{}", e),
            Self::Pdf { filename, message } => {
                write!(f, "Error reading PDF file '{}': {}", filename, message)
            }
        }
    }
}

impl std::error::Error for ReaderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Csv(e) => Some(e),
            Self::Parquet(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for ReaderError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<csv::Error> for ReaderError {
    fn from(e: csv::Error) -> Self {
        Self::Csv(e)
    }
}

impl From<parquet::errors::ParquetError> for ReaderError {
    fn from(e: parquet::errors::ParquetError) -> Self {
        Self::Parquet(e)
    }
}
