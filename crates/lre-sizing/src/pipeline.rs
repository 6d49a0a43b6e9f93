//! Forward sizing pipeline.

use crate::chamber::size_chamber;
use crate::common::positive;
use crate::design::{DesignInputs, DesignOutputs};
use crate::error::{SizingError, SizingResult};
use crate::flow::partition_flow;
use crate::injector::{InjectorSizing, fuel_spray_injector_area, size_oxidizer_injector};
use crate::nozzle::{size_exit, size_throat};
use crate::structure;
use lre_fluids::FluidModel;
use std::fmt;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Pipeline stage, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SizingStage {
    FlowPartition,
    Throat,
    Nozzle,
    Chamber,
    Wall,
    FuelInjector,
    OxidizerInjector,
}

impl fmt::Display for SizingStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SizingStage::FlowPartition => "flow partitioning",
            SizingStage::Throat => "throat sizing",
            SizingStage::Nozzle => "nozzle exit sizing",
            SizingStage::Chamber => "chamber sizing",
            SizingStage::Wall => "wall thickness",
            SizingStage::FuelInjector => "fuel injector sizing",
            SizingStage::OxidizerInjector => "oxidizer injector sizing",
        };
        f.write_str(name)
    }
}

/// First failure of a run and the stage that raised it.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{stage} failed: {source}")]
pub struct PipelineError {
    pub stage: SizingStage,
    pub source: SizingError,
}

fn run<T>(stage: SizingStage, f: impl FnOnce() -> SizingResult<T>) -> Result<T, PipelineError> {
    f().map_err(|source| {
        warn!(%stage, error = %source, "sizing stage failed");
        PipelineError { stage, source }
    })
}

/// Run every enabled stage on `inputs`.
///
/// Thrust must be positive: a zero-flow engine has no chamber length.
/// `fluids` is consulted once, for the oxidizer entrance density, and only
/// when injector inputs are present. Either every enabled output is produced
/// or the first failure is returned.
pub fn size_engine(
    inputs: &DesignInputs,
    fluids: &dyn FluidModel,
) -> Result<DesignOutputs, PipelineError> {
    info!(
        thrust_n = inputs.thrust.value,
        chamber_pressure_pa = inputs.chamber_pressure.value,
        fluid_model = fluids.name(),
        "sizing engine"
    );

    let flow = run(SizingStage::FlowPartition, || {
        positive(inputs.thrust.value, "thrust")?;
        partition_flow(inputs.thrust, inputs.specific_impulse, inputs.of_ratio)
    })?;
    debug!(
        total_kgps = flow.total.value,
        fuel_kgps = flow.fuel.value,
        oxidizer_kgps = flow.oxidizer.value,
        "flow partitioned"
    );

    let throat = run(SizingStage::Throat, || {
        size_throat(
            flow.total,
            inputs.chamber_pressure,
            inputs.chamber_temperature,
            inputs.gamma,
            inputs.molar_mass,
        )
    })?;
    debug!(
        t_k = throat.temperature.value,
        p_pa = throat.pressure.value,
        area_m2 = throat.area.value,
        diameter_m = throat.diameter.value,
        "throat sized"
    );

    let exit = run(SizingStage::Nozzle, || {
        size_exit(
            throat.area,
            inputs.chamber_pressure,
            inputs.atmospheric_pressure,
            inputs.gamma,
        )
    })?;
    debug!(
        expansion_ratio = exit.expansion_ratio,
        area_m2 = exit.area.value,
        "nozzle exit sized"
    );

    let chamber = run(SizingStage::Chamber, || {
        size_chamber(
            inputs.l_star,
            throat.area,
            throat.diameter,
            &inputs.chamber_policy,
        )
    })?;
    debug!(
        volume_m3 = chamber.volume.value,
        diameter_m = chamber.diameter.value,
        length_m = chamber.length.value,
        "chamber sized"
    );

    let wall_thickness = match &inputs.wall {
        Some(wall) => {
            let t = run(SizingStage::Wall, || {
                structure::wall_thickness(
                    inputs.chamber_pressure,
                    chamber.diameter,
                    wall.yield_strength,
                    wall.safety_factor,
                )
            })?;
            debug!(thickness_m = t.value, "wall thickness");
            Some(t)
        }
        None => None,
    };

    let injector = match &inputs.injector {
        Some(inj) => {
            let fuel_area = run(SizingStage::FuelInjector, || {
                fuel_spray_injector_area(
                    flow.fuel,
                    inj.discharge_coefficient,
                    inj.fuel_density,
                    inj.fuel_pressure_drop,
                )
            })?;
            debug!(area_m2 = fuel_area.value, "fuel injector sized");

            let oxidizer = run(SizingStage::OxidizerInjector, || {
                size_oxidizer_injector(fluids, inj, inputs.chamber_pressure, flow.oxidizer)
            })?;
            debug!(area_m2 = oxidizer.area.value, "oxidizer injector sized");

            Some(InjectorSizing {
                fuel_area,
                oxidizer,
            })
        }
        None => None,
    };

    info!(
        throat_diameter_m = throat.diameter.value,
        exit_diameter_m = exit.diameter.value,
        "engine sized"
    );

    Ok(DesignOutputs {
        flow,
        of_ratio: inputs.of_ratio,
        throat,
        exit,
        chamber,
        wall_thickness,
        injector,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stage_names() {
        assert_eq!(SizingStage::FlowPartition.to_string(), "flow partitioning");
        assert_eq!(SizingStage::OxidizerInjector.to_string(), "oxidizer injector sizing");
    }

    #[test]
    fn error_names_stage_and_cause() {
        let err = PipelineError {
            stage: SizingStage::Nozzle,
            source: SizingError::invalid(
                "atmospheric-to-chamber pressure ratio",
                1.2,
                "must be less than 1",
            ),
        };
        let msg = err.to_string();
        assert!(msg.starts_with("nozzle exit sizing failed"));
        assert!(msg.contains("must be less than 1"));
    }
}
