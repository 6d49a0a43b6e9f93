//! Precondition guards shared by the sizing formulas.

use crate::error::SizingResult;
use lre_core::numeric::{ensure_above, ensure_finite, ensure_non_negative, ensure_positive};

/// Finite and > 0.
pub(crate) fn positive(value: f64, what: &'static str) -> SizingResult<f64> {
    Ok(ensure_positive(value, what)?)
}

/// Finite and ≥ 0.
pub(crate) fn non_negative(value: f64, what: &'static str) -> SizingResult<f64> {
    Ok(ensure_non_negative(value, what)?)
}

/// Ratio of specific heats: finite and > 1.
pub(crate) fn gamma(value: f64) -> SizingResult<f64> {
    Ok(ensure_above(value, 1.0, "ratio of specific heats")?)
}

/// Intermediate results must stay finite.
pub(crate) fn finite(value: f64, what: &'static str) -> SizingResult<f64> {
    Ok(ensure_finite(value, what)?)
}
