use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum EloError {
    #[error("{field} must not be zero")]
    ZeroDenominator { field: &'static str },

    #[error("{field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: f64 },

    #[error("{field} must be a finite number")]
    NotFinite { field: &'static str },

    #[error("{field} must be within [{min}, {max}], got {value}")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64
    },

    #[error("place_finished must be at least 1")]
    InvalidPlacement,

    #[error("Unknown outcome: {0}")]
    UnknownOutcome(String)
}
