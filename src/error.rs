//! Error types for the contract checker
//!
//! Provides structured error types for snapshot parsing, file access, and
//! output serialization. Contract violations are not errors: they are carried
//! inside a `CheckResult` and reported through the CLI exit code.

use thiserror::Error;

/// Main error type for checker operations
#[derive(Error, Debug)]
pub enum CheckerError {
    /// Invalid input data or arguments
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// File access or I/O error
    #[error("File error: {0}")]
    FileError(String),

    /// Configuration snapshot parsing error
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Internal error
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl CheckerError {
    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        CheckerError::InvalidInput(msg.into())
    }

    /// Create a file error
    pub fn file_error(msg: impl Into<String>) -> Self {
        CheckerError::FileError(msg.into())
    }

    /// Create a parse error
    pub fn parse_error(msg: impl Into<String>) -> Self {
        CheckerError::ParseError(msg.into())
    }

    /// Check if this is a user-facing error (vs internal)
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            CheckerError::InvalidInput(_)
                | CheckerError::FileError(_)
                | CheckerError::ParseError(_)
        )
    }
}

impl From<std::io::Error> for CheckerError {
    fn from(err: std::io::Error) -> Self {
        CheckerError::FileError(err.to_string())
    }
}

impl From<serde_json::Error> for CheckerError {
    fn from(err: serde_json::Error) -> Self {
        CheckerError::SerializationError(format!("JSON error: {}", err))
    }
}

impl From<serde_yaml::Error> for CheckerError {
    fn from(err: serde_yaml::Error) -> Self {
        CheckerError::SerializationError(format!("YAML error: {}", err))
    }
}

/// Result type alias for checker operations
pub type Result<T> = std::result::Result<T, CheckerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CheckerError::InvalidInput("test error".to_string());
        assert_eq!(err.to_string(), "Invalid input: test error");
    }

    #[test]
    fn test_is_user_error() {
        assert!(CheckerError::InvalidInput("test".to_string()).is_user_error());
        assert!(CheckerError::FileError("test".to_string()).is_user_error());
        assert!(CheckerError::ParseError("test".to_string()).is_user_error());
        assert!(!CheckerError::InternalError("test".to_string()).is_user_error());
    }

    #[test]
    fn test_error_constructors() {
        let err = CheckerError::invalid_input("test");
        assert!(matches!(err, CheckerError::InvalidInput(_)));

        let err = CheckerError::file_error("test");
        assert!(matches!(err, CheckerError::FileError(_)));

        let err = CheckerError::parse_error("test");
        assert!(matches!(err, CheckerError::ParseError(_)));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err: CheckerError = io_err.into();
        assert!(matches!(err, CheckerError::FileError(_)));
    }
}
