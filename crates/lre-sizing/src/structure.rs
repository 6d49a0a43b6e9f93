//! Thin-wall hoop-stress check.

use crate::common::{non_negative, positive};
use crate::error::SizingResult;
use lre_core::units::{Length, Pressure, m, pa};

/// Material limits for the chamber wall.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallInputs {
    pub yield_strength: Pressure,
    pub safety_factor: f64,
}

/// Yield strength derated by the safety factor.
pub fn allowable_stress(yield_strength: Pressure, safety_factor: f64) -> SizingResult<Pressure> {
    let sy = positive(yield_strength.value, "yield strength")?;
    let sf = positive(safety_factor, "safety factor")?;
    Ok(pa(sy / sf))
}

/// t = P_c · D_c / (2 · σ_y / SF)
pub fn wall_thickness(
    chamber_pressure: Pressure,
    chamber_diameter: Length,
    yield_strength: Pressure,
    safety_factor: f64,
) -> SizingResult<Length> {
    let allowable = allowable_stress(yield_strength, safety_factor)?.value;
    let pc = positive(chamber_pressure.value, "chamber pressure")?;
    let dc = non_negative(chamber_diameter.value, "chamber diameter")?;
    Ok(m(pc * dc / (2.0 * allowable)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SizingError;

    #[test]
    fn hand_computed_thickness() {
        // 2.068 MPa in a 30 mm chamber, 55.2 MPa yield, SF 3: t = 1.6858 mm
        let t = wall_thickness(pa(2.068e6), m(0.03), pa(55.2e6), 3.0).unwrap();
        assert!((t.value - 2.068e6 * 0.03 / (2.0 * 55.2e6 / 3.0)).abs() < 1e-15);
        assert!((t.value - 1.685_87e-3).abs() < 1e-8);
    }

    #[test]
    fn thickness_scales_with_safety_factor() {
        let t1 = wall_thickness(pa(2e6), m(0.05), pa(250e6), 1.0).unwrap();
        let t2 = wall_thickness(pa(2e6), m(0.05), pa(250e6), 2.0).unwrap();
        assert!((t2.value / t1.value - 2.0).abs() < 1e-12);
    }

    #[test]
    fn material_limits_must_be_positive() {
        for (sy, sf, what) in [
            (0.0, 3.0, "yield strength"),
            (-1.0, 3.0, "yield strength"),
            (55.2e6, 0.0, "safety factor"),
            (55.2e6, -1.0, "safety factor"),
        ] {
            let err = wall_thickness(pa(2e6), m(0.03), pa(sy), sf).unwrap_err();
            assert!(
                matches!(err, SizingError::InvalidInput { what: w, .. } if w == what),
                "{err}"
            );
        }
    }
}
