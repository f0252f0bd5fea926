//! Error handling for the mathtext outer surfaces
//!
//! The converter itself is total and never fails. These errors cover the
//! fallible edges around it: file and stream I/O in the CLI, JSON
//! serialization of segments and reports, and option objects handed in
//! from JavaScript.

use std::fmt;

/// Mathtext error type
#[derive(Debug, Clone)]
pub enum MathTextError {
    /// IO error (for file operations)
    IoError { message: String },
    /// Serialization error - output could not be encoded
    SerializationError { message: String },
    /// Invalid options - an options object could not be decoded
    InvalidOptions { message: String },
}

impl fmt::Display for MathTextError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MathTextError::IoError { message } => {
                write!(f, "IO error: {}", message)
            }
            MathTextError::SerializationError { message } => {
                write!(f, "Serialization error: {}", message)
            }
            MathTextError::InvalidOptions { message } => {
                write!(f, "Invalid options: {}", message)
            }
        }
    }
}

impl std::error::Error for MathTextError {}

impl From<std::io::Error> for MathTextError {
    fn from(err: std::io::Error) -> Self {
        MathTextError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for MathTextError {
    fn from(err: serde_json::Error) -> Self {
        MathTextError::SerializationError {
            message: err.to_string(),
        }
    }
}

impl From<MathTextError> for std::io::Error {
    fn from(err: MathTextError) -> Self {
        match err {
            MathTextError::IoError { message } => {
                std::io::Error::new(std::io::ErrorKind::Other, message)
            }
            other => std::io::Error::new(std::io::ErrorKind::InvalidData, other.to_string()),
        }
    }
}

/// Result type for mathtext operations
pub type MathTextResult<T> = Result<T, MathTextError>;

// Convenience constructors for errors
impl MathTextError {
    pub fn invalid_options(message: impl Into<String>) -> Self {
        MathTextError::InvalidOptions {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_options_display() {
        let err = MathTextError::invalid_options("bracePasses must be a number");
        let msg = err.to_string();
        assert!(msg.contains("Invalid options"));
        assert!(msg.contains("bracePasses"));
    }

    #[test]
    fn test_from_serde_json_error() {
        let parse_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err = MathTextError::from(parse_err);
        assert!(matches!(err, MathTextError::SerializationError { .. }));
    }

    #[test]
    fn test_into_io_error() {
        let err: std::io::Error = MathTextError::invalid_options("bad").into();
        assert_eq!(err.kind(), std::io::ErrorKind::InvalidData);
        assert!(err.to_string().contains("bad"));
    }
}
