//! Error types for the media-type crate.

use std::io;
use thiserror::Error;

/// The main error type for the media-type crate.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error while reading a media type database
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// A media type string was empty
    #[error("Media type may not be empty")]
    EmptyMediaType,

    /// A file extension did not start with a dot
    #[error("Invalid extension: {0:?} missing leading dot")]
    InvalidExtension(String),
}

/// Specialized Result type for media-type operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::EmptyMediaType;
        assert_eq!(err.to_string(), "Media type may not be empty");

        let err = Error::InvalidExtension("txt".to_string());
        assert_eq!(err.to_string(), "Invalid extension: \"txt\" missing leading dot");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_error_debug() {
        let err = Error::InvalidExtension("x".to_string());
        let debug_str = format!("{:?}", err);
        assert!(debug_str.contains("InvalidExtension"));
    }
}
