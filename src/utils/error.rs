//! Error handling for Typsmith builders
//!
//! This module provides a unified error type and result type for all
//! builder operations. Every error is raised synchronously at the call
//! that caused it; `render()` methods never fail.

use std::fmt;

/// Builder error type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A styling attribute received a value of the wrong shape, or a
    /// count that does not match the table's grid dimensions
    InvalidAttribute { message: String },
    /// A value could not be rendered as a Typst argument literal
    InvalidArgumentType { message: String },
    /// A data source handed to `Table::from_source` is inconsistent
    MalformedSource { message: String },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidAttribute { message } => {
                write!(f, "Invalid attribute: {}", message)
            }
            Error::InvalidArgumentType { message } => {
                write!(f, "Invalid argument type: {}", message)
            }
            Error::MalformedSource { message } => {
                write!(f, "Malformed data source: {}", message)
            }
        }
    }
}

impl std::error::Error for Error {}

/// Result type for builder operations
pub type Result<T> = std::result::Result<T, Error>;

// Convenience constructors
impl Error {
    pub fn attribute(message: impl Into<String>) -> Self {
        Error::InvalidAttribute {
            message: message.into(),
        }
    }

    pub fn argument(message: impl Into<String>) -> Self {
        Error::InvalidArgumentType {
            message: message.into(),
        }
    }

    pub fn source(message: impl Into<String>) -> Self {
        Error::MalformedSource {
            message: message.into(),
        }
    }
}
