//! CoolProp-based density model.

use crate::composition::Composition;
use crate::error::{FluidError, FluidResult};
use crate::model::FluidModel;
use crate::state::ThermoState;
use lre_core::units::{Density, kg_per_m3};
use rfluids::prelude::*;

/// CoolProp backend for fluid properties.
///
/// Supports pure fluids only.
///
/// Thread-safe: rfluids Fluid instances are stateless and can be created/used from multiple threads.
#[derive(Debug, Default)]
pub struct CoolPropModel {}

impl CoolPropModel {
    /// Create a new CoolProp model.
    pub fn new() -> Self {
        Self {}
    }

    /// Create a Fluid instance at given P,T state.
    fn fluid_at_pt(&self, pure: Pure, p_pa: f64, t_k: f64) -> FluidResult<Fluid> {
        Fluid::from(pure)
            .in_state(FluidInput::pressure(p_pa), FluidInput::temperature(t_k))
            .map_err(|e| FluidError::Backend {
                message: format!("rfluids error at P={} Pa, T={} K: {}", p_pa, t_k, e),
            })
    }
}

impl FluidModel for CoolPropModel {
    fn name(&self) -> &str {
        "CoolProp"
    }

    fn supports_composition(&self, comp: &Composition) -> bool {
        comp.is_pure()
            .and_then(|species| species.rfluids_pure())
            .is_some()
    }

    fn rho(&self, state: &ThermoState) -> FluidResult<Density> {
        let species = state
            .composition()
            .is_pure()
            .ok_or(FluidError::NotSupported {
                what: "mixtures not supported",
            })?;

        let pure = species.rfluids_pure().ok_or(FluidError::NotSupported {
            what: "species not supported by rfluids",
        })?;

        let mut fluid = self.fluid_at_pt(pure, state.pressure().value, state.temperature().value)?;
        let rho = fluid.density().map_err(|e| FluidError::Backend {
            message: format!("rfluids error getting density: {}", e),
        })?;

        Ok(kg_per_m3(rho))
    }
}
