//! Declarative field tables for design file sections.

use crate::schema::ValueDef;
use crate::units::{Quantity, parse_quantity};
use crate::validate::ValidationError;
use std::fmt;

/// Admissible range of a field's SI value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bound {
    Positive,
    GreaterThan(f64),
    AtLeast(f64),
    /// 0 < x ≤ 1
    UnitIntervalLowerOpen,
}

impl Bound {
    pub fn admits(&self, value: f64) -> bool {
        value.is_finite()
            && match *self {
                Bound::Positive => value > 0.0,
                Bound::GreaterThan(b) => value > b,
                Bound::AtLeast(b) => value >= b,
                Bound::UnitIntervalLowerOpen => value > 0.0 && value <= 1.0,
            }
    }
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bound::Positive => write!(f, "must be positive"),
            Bound::GreaterThan(b) => write!(f, "must be greater than {b}"),
            Bound::AtLeast(b) => write!(f, "must be at least {b}"),
            Bound::UnitIntervalLowerOpen => write!(f, "must be in (0, 1]"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldRule {
    pub name: &'static str,
    pub quantity: Quantity,
    pub bound: Bound,
    pub required: bool,
}

impl FieldRule {
    pub const fn required(name: &'static str, quantity: Quantity, bound: Bound) -> Self {
        Self {
            name,
            quantity,
            bound,
            required: true,
        }
    }

    pub const fn optional(name: &'static str, quantity: Quantity, bound: Bound) -> Self {
        Self {
            name,
            quantity,
            bound,
            required: false,
        }
    }

    /// Convert `value` to SI and check it against the bound.
    pub fn evaluate(&self, value: &ValueDef) -> Result<f64, ValidationError> {
        let si = match value {
            ValueDef::Number(v) => *v,
            ValueDef::Text(text) => {
                parse_quantity(text, self.quantity).map_err(|source| ValidationError::Unit {
                    field: self.name.to_string(),
                    source,
                })?
            }
        };

        if !self.bound.admits(si) {
            return Err(ValidationError::InvalidValue {
                field: self.name.to_string(),
                value: value.to_string(),
                reason: self.bound.to_string(),
            });
        }
        Ok(si)
    }
}

pub const ENGINE_FIELDS: &[FieldRule] = &[
    FieldRule::required("thrust_desired", Quantity::Force, Bound::Positive),
    FieldRule::required("chamber_pressure", Quantity::Pressure, Bound::Positive),
    FieldRule::required("l_star", Quantity::Length, Bound::Positive),
    FieldRule::required("i_sp", Quantity::Time, Bound::Positive),
    FieldRule::required("gamma", Quantity::Dimensionless, Bound::GreaterThan(1.0)),
    FieldRule::required("molar_mass_propellant", Quantity::MolarMass, Bound::Positive),
    FieldRule::required("atmospheric_pressure", Quantity::Pressure, Bound::Positive),
    FieldRule::required("of_ratio", Quantity::Dimensionless, Bound::Positive),
    FieldRule::required("chamber_temp", Quantity::Temperature, Bound::Positive),
];

pub const STRUCTURE_FIELDS: &[FieldRule] = &[
    FieldRule::required("chamber_yield_strength", Quantity::Stress, Bound::Positive),
    FieldRule::required("safety_factor", Quantity::Dimensionless, Bound::AtLeast(1.0)),
];

/// Species name of the oxidizer; not a quantity.
pub const OXIDIZER_NAME_FIELD: &str = "ox_name";

pub const INJECTOR_FIELDS: &[FieldRule] = &[
    FieldRule::required(
        "injector_orifice_discharge_coefficient",
        Quantity::Dimensionless,
        Bound::UnitIntervalLowerOpen,
    ),
    FieldRule::required("fuel_density", Quantity::Density, Bound::Positive),
    FieldRule::required("fuel_pressure_drop", Quantity::Pressure, Bound::Positive),
    FieldRule::required("ox_pressure_drop", Quantity::Pressure, Bound::Positive),
    FieldRule::required("ox_velocity", Quantity::Velocity, Bound::Positive),
    FieldRule::required("ambient_temperature", Quantity::Temperature, Bound::Positive),
];

pub const CHAMBER_FIELDS: &[FieldRule] = &[
    FieldRule::optional(
        "contraction_diameter_ratio",
        Quantity::Dimensionless,
        Bound::GreaterThan(1.0),
    ),
    FieldRule::optional("convergent_volume_factor", Quantity::Dimensionless, Bound::Positive),
];
