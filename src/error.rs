//! Error type shared by the input, report and config layers
//!
//! The projection engine and the formatters never fail; everything here
//! belongs to the layers that sit around them.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CalculatorError {
    #[error("invalid input: {field} {reason}")]
    InvalidInput {
        field: &'static str,
        reason: String,
    },

    #[error("invalid email address: {0:?}")]
    InvalidEmail(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CalculatorError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CalculatorError>;
