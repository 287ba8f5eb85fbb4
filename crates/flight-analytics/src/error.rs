//! Analytics error types.

use thiserror::Error;

/// Analytics errors.
///
/// Only hard conditions live here. An airport or year without data is not
/// an error; queries answer it with empty results.
#[derive(Error, Debug)]
pub enum AnalyticsError {
    /// Invalid query argument
    #[error("Invalid parameter `{name}`: {reason}")]
    InvalidParameter {
        /// Name of the offending argument
        name: &'static str,
        /// What was wrong with it
        reason: String,
    },

    /// Record with an unparseable flight date
    #[error("Malformed flight date {value:?} on line {line}")]
    MalformedDate {
        /// 1-based line in the source file
        line: u64,
        /// Raw field content
        value: String,
    },

    /// CSV decoding error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Data conversion error
    #[error("Data conversion error: {0}")]
    Conversion(String),
}

impl AnalyticsError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}

/// Result type for analytics operations.
pub type Result<T> = std::result::Result<T, AnalyticsError>;
