//! Thermodynamic state definitions.

use crate::composition::Composition;
use crate::error::FluidResult;
use crate::model::validation;
use lre_core::units::{Pressure, Temperature};

/// Thermodynamic state: pressure, temperature, and composition.
///
/// This is the minimal set of independent properties. Density is computed
/// on demand via the `FluidModel` trait.
#[derive(Debug, Clone, PartialEq)]
pub struct ThermoState {
    p: Pressure,
    t: Temperature,
    comp: Composition,
}

impl ThermoState {
    /// Create a state from pressure, temperature, and composition.
    ///
    /// Validates that pressure and temperature are positive and finite.
    pub fn from_pt(p: Pressure, t: Temperature, comp: Composition) -> FluidResult<Self> {
        validation::validate_pressure(p)?;
        validation::validate_temperature(t)?;
        Ok(Self { p, t, comp })
    }

    /// Get pressure.
    pub fn pressure(&self) -> Pressure {
        self.p
    }

    /// Get temperature.
    pub fn temperature(&self) -> Temperature {
        self.t
    }

    /// Get composition.
    pub fn composition(&self) -> &Composition {
        &self.comp
    }
}
