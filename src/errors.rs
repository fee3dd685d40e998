//! Custom error types for coordinate conversion

use std::fmt;
use std::io;

/// Conversion-specific error types
#[derive(Debug)]
pub enum ConvertError {
    /// I/O error
    IoError(io::Error),
    /// Text that should have been a number
    InvalidNumber {
        /// Name of the field being read (e.g. "distance")
        field: String,
        /// The rejected input text
        input: String,
    },
    /// A line that is not a pair of numbers
    InvalidPair(String),
    /// A coordinate count that is not a non-negative integer
    InvalidCount(String),
    /// Input text that is not valid UTF-8
    InvalidEncoding,
    /// Unrecognised coordinate system name
    UnknownCoordinateSystem(String),
    /// Data arrived before any coordinate system was selected
    MissingCoordinateSystem,
    /// Input ended while a value was still expected
    UnexpectedEndOfInput,
    /// Generic error with message
    GenericError(String),
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::IoError(e) => write!(f, "I/O error: {}", e),
            ConvertError::InvalidNumber { field, input } => {
                write!(f, "Invalid {} value: '{}' is not a finite number", field, input)
            },
            ConvertError::InvalidPair(line) => {
                write!(f, "Expected two numbers separated by ',', ';' or whitespace, got '{}'", line)
            },
            ConvertError::InvalidCount(input) => {
                write!(f, "Invalid coordinate count: '{}'", input)
            },
            ConvertError::InvalidEncoding => write!(f, "Input is not valid UTF-8 text"),
            ConvertError::UnknownCoordinateSystem(name) => {
                write!(f, "Unknown coordinate system '{}' (expected Polar or Rectangular)", name)
            },
            ConvertError::MissingCoordinateSystem => {
                write!(f, "No coordinate system selected; use --system or start the input with 'polar' or 'rectangular'")
            },
            ConvertError::UnexpectedEndOfInput => write!(f, "Unexpected end of input"),
            ConvertError::GenericError(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for ConvertError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConvertError::IoError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for ConvertError {
    fn from(error: io::Error) -> Self {
        ConvertError::IoError(error)
    }
}

/// Result type for conversion operations
pub type ConvertResult<T> = Result<T, ConvertError>;
