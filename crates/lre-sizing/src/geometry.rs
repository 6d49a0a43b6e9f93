//! Circular cross-section conversions.

use crate::common::non_negative;
use crate::error::SizingResult;
use lre_core::units::{Area, Length, m, m2};
use std::f64::consts::PI;

/// Diameter of a circle with the given area: d = 2·sqrt(A/π).
pub fn area_to_diameter(area: Area) -> SizingResult<Length> {
    let a = non_negative(area.value, "area")?;
    Ok(m(2.0 * (a / PI).sqrt()))
}

/// Area of a circle with the given diameter: A = π·(d/2)².
pub fn diameter_to_area(diameter: Length) -> SizingResult<Area> {
    let d = non_negative(diameter.value, "diameter")?;
    Ok(m2(PI * (d / 2.0).powi(2)))
}
