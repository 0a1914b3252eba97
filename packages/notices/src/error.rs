//! Error types for the notice parser.
//!
//! Parsing itself never fails: missing fields, missing timestamps and blocks
//! without a location are recovered locally. `NoticeError` covers the
//! operations around parsing that can fail (date canonicalization, reading
//! input, serializing output).

use thiserror::Error;

/// Main error type for the notice parser library.
#[derive(Debug, Error)]
pub enum NoticeError {
    /// Timestamp could not be converted to the canonical form.
    #[error("Malformed timestamp: '{0}'. Expected dd.mm.yyyy hh:mm (e.g., 27.12.2025 13:25)")]
    MalformedTimestamp(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML serialization error.
    #[error("YAML serialization failed: {0}")]
    YamlSerialization(#[from] serde_yaml_ng::Error),

    /// JSON serialization error.
    #[error("JSON serialization failed: {0}")]
    JsonSerialization(#[from] serde_json::Error),
}

/// Result type alias for notice parser operations.
pub type Result<T> = std::result::Result<T, NoticeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = NoticeError::MalformedTimestamp("31.02.2025 xx".to_string());
        assert!(err.to_string().contains("31.02.2025 xx"));
        assert!(err.to_string().contains("dd.mm.yyyy hh:mm"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.txt");
        let err = NoticeError::from(io);
        assert_eq!(err.to_string(), "IO error: missing.txt");
    }
}
