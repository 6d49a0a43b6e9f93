use crate::{CoreError, CoreResult};

/// Floating point type used throughout the workspace
pub type Real = f64;

/// Absolute + relative tolerance pair for float comparisons.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Tolerances {
    /// Purely relative tolerance (abs = 0).
    pub const fn relative(rel: Real) -> Self {
        Self { abs: 0.0, rel }
    }
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

/// |a - reference| / |reference|, or |a| when the reference is zero.
pub fn relative_difference(a: Real, reference: Real) -> Real {
    if reference == 0.0 {
        a.abs()
    } else {
        ((a - reference) / reference).abs()
    }
}

pub fn ensure_finite(v: Real, what: &'static str) -> CoreResult<Real> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(CoreError::NonFinite { what, value: v })
    }
}

/// Finite and strictly greater than zero.
pub fn ensure_positive(v: Real, what: &'static str) -> CoreResult<Real> {
    ensure_finite(v, what)?;
    if v > 0.0 {
        Ok(v)
    } else {
        Err(CoreError::NotPositive { what, value: v })
    }
}

/// Finite and zero or greater.
pub fn ensure_non_negative(v: Real, what: &'static str) -> CoreResult<Real> {
    ensure_finite(v, what)?;
    if v >= 0.0 {
        Ok(v)
    } else {
        Err(CoreError::Negative { what, value: v })
    }
}

/// Finite and strictly greater than `bound`.
pub fn ensure_above(v: Real, bound: Real, what: &'static str) -> CoreResult<Real> {
    ensure_finite(v, what)?;
    if v > bound {
        Ok(v)
    } else {
        Err(CoreError::NotAbove {
            what,
            value: v,
            bound,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn nearly_equal_basic() {
        let tol = Tolerances::default();
        assert!(nearly_equal(1.0, 1.0 + 1e-12, tol));
        assert!(nearly_equal(0.0, 1e-13, tol));
        assert!(!nearly_equal(1.0, 1.0 + 1e-6, tol));
    }

    #[test]
    fn relative_tolerance_ignores_absolute_floor() {
        let tol = Tolerances::relative(1e-9);
        assert!(!nearly_equal(0.0, 1e-13, tol));
        assert!(nearly_equal(2.5e-7, 2.5e-7 * (1.0 + 1e-10), tol));
    }

    #[test]
    fn relative_difference_scales_by_reference() {
        assert!((relative_difference(101.0, 100.0) - 0.01).abs() < 1e-15);
        assert_eq!(relative_difference(0.5, 0.0), 0.5);
    }

    #[test]
    fn ensure_finite_detects_nan() {
        let err = ensure_finite(Real::NAN, "test").unwrap_err();
        let msg = format!("{err}");
        assert!(msg.contains("Non-finite"));
    }

    #[test]
    fn ensure_positive_rejects_zero_and_negative() {
        assert_eq!(ensure_positive(2.0, "p").unwrap(), 2.0);
        assert!(matches!(
            ensure_positive(0.0, "p"),
            Err(CoreError::NotPositive { what: "p", .. })
        ));
        assert!(ensure_positive(-1.0, "p").is_err());
        assert!(matches!(
            ensure_positive(Real::INFINITY, "p"),
            Err(CoreError::NonFinite { .. })
        ));
    }

    #[test]
    fn ensure_non_negative_accepts_zero() {
        assert_eq!(ensure_non_negative(0.0, "a").unwrap(), 0.0);
        assert!(matches!(
            ensure_non_negative(-1e-30, "a"),
            Err(CoreError::Negative { .. })
        ));
    }

    #[test]
    fn ensure_above_is_strict() {
        assert!(ensure_above(1.2, 1.0, "gamma").is_ok());
        let err = ensure_above(1.0, 1.0, "gamma").unwrap_err();
        assert_eq!(err.what(), "gamma");
        assert_eq!(err.value(), 1.0);
    }

    proptest! {
        #[test]
        fn prop_nearly_equal_is_symmetric(a in -1e6f64..1e6, b in -1e6f64..1e6) {
            let tol = Tolerances::default();
            prop_assert_eq!(nearly_equal(a, b, tol), nearly_equal(b, a, tol));
        }

        #[test]
        fn prop_guards_follow_sign(v in -1e9f64..1e9, bound in -1e3f64..1e3) {
            prop_assert_eq!(ensure_positive(v, "v").is_ok(), v > 0.0);
            prop_assert_eq!(ensure_non_negative(v, "v").is_ok(), v >= 0.0);
            prop_assert_eq!(ensure_above(v, bound, "v").is_ok(), v > bound);
        }
    }
}
