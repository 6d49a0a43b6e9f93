//! Pipeline input and output records.

use crate::chamber::{ChamberGeometry, ChamberPolicy};
use crate::flow::FlowSplit;
use crate::injector::{InjectorInputs, InjectorSizing};
use crate::nozzle::{NozzleExit, ThroatConditions};
use crate::pipeline::SizingStage;
use crate::structure::WallInputs;
use lre_core::units::{Force, Length, MolarMass, Pressure, Temperature, Time};

#[cfg(feature = "serde")]
use serde::Serialize;

/// Validated engine design parameters.
///
/// The wall and injector stages run only when their sections are present.
#[derive(Debug, Clone, PartialEq)]
pub struct DesignInputs {
    pub thrust: Force,
    pub chamber_pressure: Pressure,
    /// Characteristic chamber length L*.
    pub l_star: Length,
    pub specific_impulse: Time,
    /// Ratio of specific heats of the combustion products.
    pub gamma: f64,
    pub molar_mass: MolarMass,
    pub atmospheric_pressure: Pressure,
    /// Oxidizer-to-fuel mass ratio.
    pub of_ratio: f64,
    pub chamber_temperature: Temperature,
    pub chamber_policy: ChamberPolicy,
    pub wall: Option<WallInputs>,
    pub injector: Option<InjectorInputs>,
}

impl DesignInputs {
    /// Stages [`crate::size_engine`] will run for these inputs, in order.
    pub fn stages(&self) -> Vec<SizingStage> {
        let mut stages = vec![
            SizingStage::FlowPartition,
            SizingStage::Throat,
            SizingStage::Nozzle,
            SizingStage::Chamber,
        ];
        if self.wall.is_some() {
            stages.push(SizingStage::Wall);
        }
        if self.injector.is_some() {
            stages.push(SizingStage::FuelInjector);
            stages.push(SizingStage::OxidizerInjector);
        }
        stages
    }
}

/// Everything derived by one pipeline run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct DesignOutputs {
    pub flow: FlowSplit,
    /// O/F ratio recovered from the partitioned flows.
    pub of_ratio: f64,
    pub throat: ThroatConditions,
    pub exit: NozzleExit,
    pub chamber: ChamberGeometry,
    pub wall_thickness: Option<Length>,
    pub injector: Option<InjectorSizing>,
}
