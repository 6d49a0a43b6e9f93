//! Design file schema.

use crate::ProjectResult;
use crate::validate::validate_design;
use lre_sizing::DesignInputs;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

pub const LATEST_VERSION: u32 = 1;

/// A field value: a bare SI number or text with a unit (or a species name).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ValueDef {
    Number(f64),
    Text(String),
}

impl From<f64> for ValueDef {
    fn from(v: f64) -> Self {
        ValueDef::Number(v)
    }
}

impl From<&str> for ValueDef {
    fn from(s: &str) -> Self {
        ValueDef::Text(s.to_string())
    }
}

impl fmt::Display for ValueDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueDef::Number(v) => write!(f, "{v}"),
            ValueDef::Text(s) => write!(f, "'{s}'"),
        }
    }
}

/// Field name → value. Field sets and bounds live in [`crate::rules`].
pub type SectionDef = BTreeMap<String, ValueDef>;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DesignFile {
    pub version: u32,
    pub name: String,
    pub engine: SectionDef,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub structure: Option<SectionDef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub injector: Option<SectionDef>,
    /// Overrides for the chamber contraction heuristic.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chamber: Option<SectionDef>,
}

fn section<const N: usize>(fields: [(&str, ValueDef); N]) -> SectionDef {
    fields
        .into_iter()
        .map(|(name, value)| (name.to_string(), value))
        .collect()
}

impl DesignFile {
    /// The 89 N pressure-fed preliminary design.
    pub fn reference() -> Self {
        Self {
            version: LATEST_VERSION,
            name: "preliminary_design".to_string(),
            engine: section([
                ("thrust_desired", 89.0.into()),
                ("chamber_pressure", "2.068 MPa".into()),
                ("l_star", "1.52 m".into()),
                ("i_sp", "260 s".into()),
                ("gamma", 1.2.into()),
                ("molar_mass_propellant", "23 g/mol".into()),
                ("atmospheric_pressure", "1 atm".into()),
                ("of_ratio", 2.5.into()),
                ("chamber_temp", "3445 K".into()),
            ]),
            structure: Some(section([
                ("chamber_yield_strength", "55.2 MPa".into()),
                ("safety_factor", 3.0.into()),
            ])),
            injector: Some(section([
                ("injector_orifice_discharge_coefficient", 0.7.into()),
                ("fuel_density", "742.9 kg/m^3".into()),
                ("fuel_pressure_drop", "0.689 MPa".into()),
                ("ox_pressure_drop", "0.689 MPa".into()),
                ("ox_velocity", "50 m/s".into()),
                ("ox_name", "O2".into()),
                ("ambient_temperature", "298.15 K".into()),
            ])),
            chamber: None,
        }
    }

    /// Validate against the field tables and convert to SI sizing inputs.
    pub fn resolve(&self) -> ProjectResult<DesignInputs> {
        Ok(validate_design(self)?)
    }
}
