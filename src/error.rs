//! Error types for loan validation, loading and report output

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MortgageError {
    #[error("Invalid input: {field} - {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Loan record {index}: {source}")]
    Record {
        index: usize,
        #[source]
        source: Box<MortgageError>,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl MortgageError {
    pub(crate) fn invalid(field: &str, reason: impl Into<String>) -> Self {
        MortgageError::InvalidInput {
            field: field.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn in_record(self, index: usize) -> Self {
        MortgageError::Record {
            index,
            source: Box::new(self),
        }
    }
}

pub type Result<T> = std::result::Result<T, MortgageError>;
