//! Fluid property errors.

use thiserror::Error;

/// Result type for fluid operations.
pub type FluidResult<T> = Result<T, FluidError>;

/// Errors that can occur during fluid property calculations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FluidError {
    /// Non-physical values (negative density, pressure, etc.).
    #[error("Non-physical value for {what}")]
    NonPhysical { what: &'static str },

    /// Invalid argument.
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    /// Species name that does not map to a known species.
    #[error("Unknown species '{name}'")]
    UnknownSpecies { name: String },

    /// Operation not supported (e.g., mixtures, unsupported species).
    #[error("Not supported: {what}")]
    NotSupported { what: &'static str },

    /// Backend (CoolProp) error.
    #[error("Backend error: {message}")]
    Backend { message: String },

    /// Equation-of-state root finding failed.
    #[error("Convergence failed for {what}")]
    ConvergenceFailed { what: &'static str },
}
