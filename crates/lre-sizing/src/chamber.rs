//! Combustion chamber sizing from characteristic length.

use crate::common::{finite, non_negative, positive};
use crate::error::{SizingError, SizingResult};
use crate::geometry::diameter_to_area;
use lre_core::units::{Area, Length, Volume, m, m3};

#[cfg(feature = "serde")]
use serde::Serialize;

/// Heuristic linking chamber geometry to the throat.
///
/// The chamber diameter is `contraction_diameter_ratio` throat diameters and
/// the cylindrical length is shortened by `convergent_volume_factor` to
/// account for the convergent section's volume.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ChamberPolicy {
    pub contraction_diameter_ratio: f64,
    pub convergent_volume_factor: f64,
}

impl Default for ChamberPolicy {
    fn default() -> Self {
        Self {
            contraction_diameter_ratio: 5.0,
            convergent_volume_factor: 1.1,
        }
    }
}

impl ChamberPolicy {
    pub fn new(contraction_diameter_ratio: f64, convergent_volume_factor: f64) -> SizingResult<Self> {
        let policy = Self {
            contraction_diameter_ratio,
            convergent_volume_factor,
        };
        policy.validate()?;
        Ok(policy)
    }

    /// Ratio must exceed 1 (a real contraction); factor must be positive.
    pub fn validate(&self) -> SizingResult<()> {
        let ratio = positive(self.contraction_diameter_ratio, "contraction diameter ratio")?;
        if ratio <= 1.0 {
            return Err(SizingError::invalid(
                "contraction diameter ratio",
                ratio,
                "must be greater than 1",
            ));
        }
        positive(self.convergent_volume_factor, "convergent volume factor")?;
        Ok(())
    }

    /// Chamber-to-throat area ratio (25 for the default policy).
    pub fn contraction_area_ratio(&self) -> f64 {
        self.contraction_diameter_ratio.powi(2)
    }
}

/// V_c = L* · A_t
pub fn chamber_volume(l_star: Length, throat_area: Area) -> SizingResult<Volume> {
    let l = positive(l_star.value, "characteristic length")?;
    let at = non_negative(throat_area.value, "throat area")?;
    Ok(m3(l * at))
}

pub fn chamber_diameter(throat_diameter: Length, policy: &ChamberPolicy) -> SizingResult<Length> {
    policy.validate()?;
    let dt = non_negative(throat_diameter.value, "throat diameter")?;
    Ok(m(dt * policy.contraction_diameter_ratio))
}

/// Cylindrical length from V = L · A(D_c) · factor.
pub fn chamber_length(
    volume: Volume,
    chamber_diameter: Length,
    policy: &ChamberPolicy,
) -> SizingResult<Length> {
    policy.validate()?;
    let v = non_negative(volume.value, "chamber volume")?;
    positive(chamber_diameter.value, "chamber diameter")?;
    let section = diameter_to_area(chamber_diameter)?.value;
    Ok(m(finite(
        v / (section * policy.convergent_volume_factor),
        "chamber length",
    )?))
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ChamberGeometry {
    pub volume: Volume,
    pub diameter: Length,
    pub length: Length,
}

/// Volume, diameter and length of the chamber for a sized throat.
pub fn size_chamber(
    l_star: Length,
    throat_area: Area,
    throat_diameter: Length,
    policy: &ChamberPolicy,
) -> SizingResult<ChamberGeometry> {
    let volume = chamber_volume(l_star, throat_area)?;
    let diameter = chamber_diameter(throat_diameter, policy)?;
    let length = chamber_length(volume, diameter, policy)?;
    Ok(ChamberGeometry {
        volume,
        diameter,
        length,
    })
}
