//! Error types for the LGL sandbox
//!
//! This module defines the error types used throughout the crate,
//! including file access, image decoding, hierarchy edits and configuration.

use std::fmt;

/// Result type for sandbox operations
pub type Result<T> = std::result::Result<T, Error>;

/// Sandbox errors
#[derive(Debug, Clone)]
pub enum Error {
    /// A path that was expected to exist does not
    FileNotFound(String),

    /// A path exists but is not a regular file
    InvalidPath(String),

    /// Underlying I/O failure
    Io(String),

    /// File signature does not match any supported format
    UnsupportedFormat(String),

    /// The decoder rejected the data
    DecodeFailed(String),

    /// Pixel buffer does not match its declared dimensions
    InvalidImage(String),

    /// Parent/child edit would corrupt the transform tree
    InvalidHierarchy(String),

    /// Configuration could not be parsed or is out of range
    InvalidConfig(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::FileNotFound(path) => write!(f, "File does not exist: {}", path),
            Error::InvalidPath(path) => write!(f, "Path is not a regular file: {}", path),
            Error::Io(msg) => write!(f, "I/O error: {}", msg),
            Error::UnsupportedFormat(msg) => write!(f, "Unsupported format: {}", msg),
            Error::DecodeFailed(msg) => write!(f, "Decode failed: {}", msg),
            Error::InvalidImage(msg) => write!(f, "Invalid image: {}", msg),
            Error::InvalidHierarchy(msg) => write!(f, "Invalid hierarchy: {}", msg),
            Error::InvalidConfig(msg) => write!(f, "Invalid configuration: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<image::ImageError> for Error {
    fn from(err: image::ImageError) -> Self {
        match err {
            image::ImageError::Unsupported(e) => Error::UnsupportedFormat(e.to_string()),
            image::ImageError::IoError(e) => Error::Io(e.to_string()),
            other => Error::DecodeFailed(other.to_string()),
        }
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::InvalidConfig(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::InvalidConfig(err.to_string())
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
