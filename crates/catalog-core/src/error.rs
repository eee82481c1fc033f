//! Error types and result handling for catalog storage operations.
//!
//! Storage failures carry the raw driver message through to the caller;
//! the HTTP layer surfaces it verbatim rather than classifying further.

use thiserror::Error;

/// Result type alias using `CoreError`.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Core error type for storage operations.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Database operation failed. Carries the raw driver message.
    #[error("{0}")]
    Database(String),

    /// A product id could not be interpreted as a store key.
    #[error("invalid product id: {0}")]
    InvalidId(String),
}

impl From<sqlx::Error> for CoreError {
    fn from(err: sqlx::Error) -> Self {
        Self::Database(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn database_error_preserves_driver_message() {
        let err = CoreError::from(sqlx::Error::PoolClosed);
        let CoreError::Database(msg) = &err else {
            panic!("expected Database variant");
        };
        assert_eq!(msg, &sqlx::Error::PoolClosed.to_string());
        assert_eq!(err.to_string(), sqlx::Error::PoolClosed.to_string());
    }

    #[test]
    fn invalid_id_names_the_offending_value() {
        let err = CoreError::InvalidId("abc".to_string());
        assert_eq!(err.to_string(), "invalid product id: abc");
    }
}
