use thiserror::Error;

/// Validation errors exposed by `ferrochain-core`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("instrument key cannot be empty")]
    EmptyInstrumentKey,
    #[error("instrument key must look like SEGMENT|name: '{value}'")]
    InvalidInstrumentKey { value: String },

    #[error("expiry date must be YYYY-MM-DD: '{value}'")]
    InvalidExpiryDate { value: String },
    #[error("expiry month must be YYYY-MM: '{value}'")]
    InvalidExpiryMonth { value: String },
    #[error("no monthly expiry schedule for instrument '{instrument_key}'")]
    UnknownExpirySchedule { instrument_key: String },

    #[error("invalid base url '{value}': {reason}")]
    InvalidBaseUrl { value: String, reason: String },
}
