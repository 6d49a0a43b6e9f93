//! Design file validation and resolution into sizing inputs.

use crate::rules::{
    CHAMBER_FIELDS, ENGINE_FIELDS, FieldRule, INJECTOR_FIELDS, OXIDIZER_NAME_FIELD,
    STRUCTURE_FIELDS,
};
use crate::schema::{DesignFile, LATEST_VERSION, SectionDef, ValueDef};
use crate::units::UnitError;
use lre_core::units::{k, kg_per_m3, kg_per_mol, m, mps, n, pa, s};
use lre_fluids::Species;
use lre_sizing::{ChamberPolicy, DesignInputs, InjectorInputs, WallInputs};
use std::collections::BTreeMap;
use tracing::debug;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Missing field: {section}.{field}")]
    MissingField {
        section: &'static str,
        field: &'static str,
    },

    #[error("Unknown field: {section}.{field}")]
    UnknownField { section: &'static str, field: String },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Invalid units for {field}: {source}")]
    Unit {
        field: String,
        #[source]
        source: UnitError,
    },

    #[error("Unknown species '{name}'")]
    UnknownSpecies { name: String },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

/// SI values of one section, keyed by field name.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedSection {
    section: &'static str,
    values: BTreeMap<&'static str, f64>,
}

impl ResolvedSection {
    pub fn get(&self, field: &str) -> Option<f64> {
        self.values.get(field).copied()
    }

    fn require(&self, field: &'static str) -> Result<f64, ValidationError> {
        self.get(field).ok_or(ValidationError::MissingField {
            section: self.section,
            field,
        })
    }
}

/// Evaluate `def` against `rules`.
///
/// Keys that are neither in `rules` nor in `extra` are rejected, required
/// fields must be present, and every present field must satisfy its bound.
pub fn evaluate_section(
    section: &'static str,
    def: &SectionDef,
    rules: &[FieldRule],
    extra: &[&str],
) -> Result<ResolvedSection, ValidationError> {
    if let Some(unknown) = def
        .keys()
        .find(|key| !rules.iter().any(|r| r.name == key.as_str()) && !extra.contains(&key.as_str()))
    {
        return Err(ValidationError::UnknownField {
            section,
            field: unknown.clone(),
        });
    }

    let mut values = BTreeMap::new();
    for rule in rules {
        match def.get(rule.name) {
            Some(value) => {
                values.insert(rule.name, rule.evaluate(value)?);
            }
            None if rule.required => {
                return Err(ValidationError::MissingField {
                    section,
                    field: rule.name,
                });
            }
            None => {}
        }
    }

    Ok(ResolvedSection { section, values })
}

fn oxidizer_species(def: &SectionDef) -> Result<Species, ValidationError> {
    match def.get(OXIDIZER_NAME_FIELD) {
        Some(ValueDef::Text(name)) => name
            .parse()
            .map_err(|_| ValidationError::UnknownSpecies { name: name.clone() }),
        Some(other) => Err(ValidationError::InvalidValue {
            field: OXIDIZER_NAME_FIELD.to_string(),
            value: other.to_string(),
            reason: "expected a species name".to_string(),
        }),
        None => Err(ValidationError::MissingField {
            section: "injector",
            field: OXIDIZER_NAME_FIELD,
        }),
    }
}

fn resolve_wall(def: &SectionDef) -> Result<WallInputs, ValidationError> {
    let sec = evaluate_section("structure", def, STRUCTURE_FIELDS, &[])?;
    Ok(WallInputs {
        yield_strength: pa(sec.require("chamber_yield_strength")?),
        safety_factor: sec.require("safety_factor")?,
    })
}

fn resolve_injector(def: &SectionDef) -> Result<InjectorInputs, ValidationError> {
    let sec = evaluate_section("injector", def, INJECTOR_FIELDS, &[OXIDIZER_NAME_FIELD])?;
    Ok(InjectorInputs {
        discharge_coefficient: sec.require("injector_orifice_discharge_coefficient")?,
        fuel_density: kg_per_m3(sec.require("fuel_density")?),
        fuel_pressure_drop: pa(sec.require("fuel_pressure_drop")?),
        oxidizer_pressure_drop: pa(sec.require("ox_pressure_drop")?),
        oxidizer_velocity: mps(sec.require("ox_velocity")?),
        oxidizer: oxidizer_species(def)?,
        ambient_temperature: k(sec.require("ambient_temperature")?),
    })
}

fn resolve_chamber_policy(def: Option<&SectionDef>) -> Result<ChamberPolicy, ValidationError> {
    let defaults = ChamberPolicy::default();
    let Some(def) = def else {
        return Ok(defaults);
    };
    let sec = evaluate_section("chamber", def, CHAMBER_FIELDS, &[])?;
    Ok(ChamberPolicy {
        contraction_diameter_ratio: sec
            .get("contraction_diameter_ratio")
            .unwrap_or(defaults.contraction_diameter_ratio),
        convergent_volume_factor: sec
            .get("convergent_volume_factor")
            .unwrap_or(defaults.convergent_volume_factor),
    })
}

/// Check every section of `file` and build the sizing inputs.
pub fn validate_design(file: &DesignFile) -> Result<DesignInputs, ValidationError> {
    if file.version == 0 || file.version > LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: file.version,
        });
    }

    let engine = evaluate_section("engine", &file.engine, ENGINE_FIELDS, &[])?;
    let chamber_pressure = engine.require("chamber_pressure")?;
    let atmospheric_pressure = engine.require("atmospheric_pressure")?;
    if atmospheric_pressure >= chamber_pressure {
        return Err(ValidationError::InvalidValue {
            field: "atmospheric_pressure".to_string(),
            value: atmospheric_pressure.to_string(),
            reason: format!("must be below chamber_pressure ({chamber_pressure} Pa)"),
        });
    }

    let chamber_policy = resolve_chamber_policy(file.chamber.as_ref())?;
    let wall = file.structure.as_ref().map(resolve_wall).transpose()?;
    let injector = file.injector.as_ref().map(resolve_injector).transpose()?;

    debug!(
        design = %file.name,
        wall = wall.is_some(),
        injector = injector.is_some(),
        contraction_diameter_ratio = chamber_policy.contraction_diameter_ratio,
        "design resolved"
    );

    Ok(DesignInputs {
        thrust: n(engine.require("thrust_desired")?),
        chamber_pressure: pa(chamber_pressure),
        l_star: m(engine.require("l_star")?),
        specific_impulse: s(engine.require("i_sp")?),
        gamma: engine.require("gamma")?,
        molar_mass: kg_per_mol(engine.require("molar_mass_propellant")?),
        atmospheric_pressure: pa(atmospheric_pressure),
        of_ratio: engine.require("of_ratio")?,
        chamber_temperature: k(engine.require("chamber_temp")?),
        chamber_policy,
        wall,
        injector,
    })
}
