use std::io;

use crate::types::Operator;

/// Errors that can occur during opcalc operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid character: {0}")]
    UnknownOperator(char),

    #[error("Division by zero: {a} / 0")]
    DivisionByZero { a: i64 },

    #[error("Arithmetic overflow: {a} {operator} {b}")]
    Overflow { a: i64, b: i64, operator: Operator },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl Error {
    /// Whether this error came out of evaluating a request, as opposed to
    /// loading or saving configuration.
    pub fn is_evaluation_error(&self) -> bool {
        matches!(
            self,
            Error::UnknownOperator(_) | Error::DivisionByZero { .. } | Error::Overflow { .. }
        )
    }
}

/// Result type alias for opcalc operations
pub type Result<T> = std::result::Result<T, Error>;
