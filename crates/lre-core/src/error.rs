use thiserror::Error;

pub type CoreResult<T> = Result<T, CoreError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("{what} must be positive, got {value}")]
    NotPositive { what: &'static str, value: f64 },

    #[error("{what} must not be negative, got {value}")]
    Negative { what: &'static str, value: f64 },

    #[error("{what} must be greater than {bound}, got {value}")]
    NotAbove {
        what: &'static str,
        value: f64,
        bound: f64,
    },
}

impl CoreError {
    /// Name of the quantity that failed the check.
    pub fn what(&self) -> &'static str {
        match self {
            CoreError::NonFinite { what, .. }
            | CoreError::NotPositive { what, .. }
            | CoreError::Negative { what, .. }
            | CoreError::NotAbove { what, .. } => what,
        }
    }

    /// Offending value.
    pub fn value(&self) -> f64 {
        match self {
            CoreError::NonFinite { value, .. }
            | CoreError::NotPositive { value, .. }
            | CoreError::Negative { value, .. }
            | CoreError::NotAbove { value, .. } => *value,
        }
    }
}
