//! Error types for sizing calculations.

use lre_core::CoreError;
use lre_fluids::FluidError;
use thiserror::Error;

/// Errors raised by the sizing formulas.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SizingError {
    /// A supplied or intermediate value violates a domain precondition.
    #[error("Invalid input: {what} = {value} ({constraint})")]
    InvalidInput {
        what: &'static str,
        value: f64,
        constraint: String,
    },

    /// The density lookup failed or returned a non-physical density.
    #[error("External computation failed: {0}")]
    ExternalComputation(#[from] FluidError),
}

pub type SizingResult<T> = Result<T, SizingError>;

impl SizingError {
    pub(crate) fn invalid(what: &'static str, value: f64, constraint: impl Into<String>) -> Self {
        SizingError::InvalidInput {
            what,
            value,
            constraint: constraint.into(),
        }
    }
}

impl From<CoreError> for SizingError {
    fn from(e: CoreError) -> Self {
        let constraint = match &e {
            CoreError::NonFinite { .. } => "must be finite".to_string(),
            CoreError::NotPositive { .. } => "must be positive".to_string(),
            CoreError::Negative { .. } => "must not be negative".to_string(),
            CoreError::NotAbove { bound, .. } => format!("must be greater than {bound}"),
        };
        SizingError::InvalidInput {
            what: e.what(),
            value: e.value(),
            constraint,
        }
    }
}
