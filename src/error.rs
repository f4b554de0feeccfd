//! Unified library error types
//!
//! Provides a single error type for the crate. Only snapshot loading is
//! fallible; the aggregation functions never raise and instead treat
//! absent or malformed values as missing data.

use thiserror::Error;

/// Library-level error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Snapshot JSON deserialization error
    #[error("snapshot parse error: {0}")]
    Snapshot(#[from] serde_json::Error),

    /// File operation error
    #[error("file operation error: {0}")]
    Io(#[from] std::io::Error),

    /// Internal error
    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AppError::internal("something went wrong");
        assert_eq!(err.to_string(), "internal error: something went wrong");
    }

    #[test]
    fn test_snapshot_error_from_serde() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err = AppError::from(parse_err);
        assert!(err.to_string().starts_with("snapshot parse error"));
    }
}
