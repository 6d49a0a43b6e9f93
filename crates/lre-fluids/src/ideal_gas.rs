//! Ideal gas density model: `ρ = P·M / (R·T)`.
//!
//! Accurate for permanent gases well above their critical temperature and well
//! below their critical pressure. Supports mixtures through the mole-fraction
//! weighted molar mass.

use crate::composition::Composition;
use crate::error::FluidResult;
use crate::model::FluidModel;
use crate::state::ThermoState;
use lre_core::units::constants::R_UNIVERSAL;
use lre_core::units::{Density, kg_per_m3};

/// Ideal gas backend.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdealGasModel;

impl IdealGasModel {
    pub fn new() -> Self {
        Self
    }
}

impl FluidModel for IdealGasModel {
    fn name(&self) -> &str {
        "IdealGas"
    }

    fn supports_composition(&self, _comp: &Composition) -> bool {
        true
    }

    fn rho(&self, state: &ThermoState) -> FluidResult<Density> {
        let molar_mass = state.composition().molar_mass_kg_per_mol();
        let rho = state.pressure().value * molar_mass / (R_UNIVERSAL * state.temperature().value);
        Ok(kg_per_m3(rho))
    }
}
