//! Unit-aware numeric values in design files.
//!
//! A value is either a bare number, taken as SI, or text such as
//! `"2.068 MPa"`, `"300 psia"` or `"25 C"`, converted to SI by
//! [`parse_quantity`] according to the expected [`Quantity`].

use std::fmt;
use thiserror::Error;

/// Dimension family of a design field (canonical SI unit in brackets).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantity {
    /// [N]
    Force,
    /// Absolute pressure [Pa]
    Pressure,
    /// Material stress [Pa]; no absolute or gauge form
    Stress,
    /// [K]
    Temperature,
    /// [m]
    Length,
    /// [s]
    Time,
    /// [kg/m³]
    Density,
    /// [m/s]
    Velocity,
    /// [kg/mol]
    MolarMass,
    /// Plain number, percent accepted
    Dimensionless,
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Force => write!(f, "Force"),
            Self::Pressure => write!(f, "Absolute Pressure"),
            Self::Stress => write!(f, "Stress"),
            Self::Temperature => write!(f, "Temperature"),
            Self::Length => write!(f, "Length"),
            Self::Time => write!(f, "Time"),
            Self::Density => write!(f, "Density"),
            Self::Velocity => write!(f, "Velocity"),
            Self::MolarMass => write!(f, "Molar Mass"),
            Self::Dimensionless => write!(f, "Dimensionless"),
        }
    }
}

/// Error in unit parsing or conversion.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UnitError {
    /// Input text did not parse to a number + optional unit
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Unit not recognized for this quantity
    #[error("Unknown unit '{unit}' for {quantity}")]
    UnknownUnit { unit: String, quantity: Quantity },

    /// Unit not allowed for this quantity (e.g., plain "psi" requires "psia" or "psig")
    #[error("Ambiguous unit '{unit}': {reason}")]
    AmbiguousUnit { unit: String, reason: String },

    /// Value out of physical range (e.g., negative absolute temperature)
    #[error("Value {value} out of range: {reason}")]
    OutOfRange { value: f64, reason: String },
}

pub type UnitResult<T> = Result<T, UnitError>;

/// Parse `raw_text` as a `quantity` and return its SI value.
///
/// A missing unit means SI.
pub fn parse_quantity(raw_text: &str, quantity: Quantity) -> UnitResult<f64> {
    let trimmed = raw_text.trim();

    match quantity {
        Quantity::Force => parse_force(trimmed),
        Quantity::Pressure => parse_pressure(trimmed),
        Quantity::Stress => parse_stress(trimmed),
        Quantity::Temperature => parse_temperature(trimmed),
        Quantity::Length => parse_length(trimmed),
        Quantity::Time => parse_time(trimmed),
        Quantity::Density => parse_density(trimmed),
        Quantity::Velocity => parse_velocity(trimmed),
        Quantity::MolarMass => parse_molar_mass(trimmed),
        Quantity::Dimensionless => parse_dimensionless(trimmed),
    }
}

fn unknown(unit: &str, quantity: Quantity) -> UnitError {
    UnitError::UnknownUnit {
        unit: unit.to_string(),
        quantity,
    }
}

fn parse_force(input: &str) -> UnitResult<f64> {
    let (value, unit) = split_value_and_unit(input)?;

    let n = match unit.to_lowercase().as_str() {
        "" | "n" | "newton" => value,
        "kn" => value * 1e3,
        "lbf" => value * 4.448_222,
        "kgf" => value * 9.806_65,
        "lb" => {
            return Err(UnitError::AmbiguousUnit {
                unit: "lb".to_string(),
                reason: "Use 'lbf' for force".to_string(),
            });
        }
        _ => return Err(unknown(&unit, Quantity::Force)),
    };

    Ok(n)
}

/// Absolute pressure in Pa; gauge units are referenced to 1 atm.
fn parse_pressure(input: &str) -> UnitResult<f64> {
    let (value, unit) = split_value_and_unit(input)?;

    let pa = match unit.to_lowercase().as_str() {
        "" | "pa" | "pascal" => value,
        "kpa" => value * 1e3,
        "mpa" => value * 1e6,
        "gpa" => value * 1e9,
        "bar" => value * 1e5,
        "atm" => value * 101_325.0,
        "psia" => value * 6_894.757,
        "psig" => (value + 14.695_95) * 6_894.757,
        "ksia" => value * 6.894_757e6,
        "barg" => (value + 1.013_25) * 1e5,
        "psi" => {
            return Err(UnitError::AmbiguousUnit {
                unit: "psi".to_string(),
                reason: "Use 'psia' (absolute) or 'psig' (gauge)".to_string(),
            });
        }
        "ksi" => {
            return Err(UnitError::AmbiguousUnit {
                unit: "ksi".to_string(),
                reason: "Use 'ksia' (absolute)".to_string(),
            });
        }
        _ => return Err(unknown(&unit, Quantity::Pressure)),
    };

    if pa < 0.0 {
        return Err(UnitError::OutOfRange {
            value: pa,
            reason: "Absolute pressure cannot be negative".to_string(),
        });
    }

    Ok(pa)
}

fn parse_stress(input: &str) -> UnitResult<f64> {
    let (value, unit) = split_value_and_unit(input)?;

    let pa = match unit.to_lowercase().as_str() {
        "" | "pa" | "pascal" => value,
        "kpa" => value * 1e3,
        "mpa" => value * 1e6,
        "gpa" => value * 1e9,
        "bar" => value * 1e5,
        "psi" => value * 6_894.757,
        "ksi" => value * 6.894_757e6,
        _ => return Err(unknown(&unit, Quantity::Stress)),
    };

    Ok(pa)
}

fn parse_temperature(input: &str) -> UnitResult<f64> {
    let (value, unit) = split_value_and_unit(input)?;

    let kelvin = match unit.to_lowercase().as_str() {
        "" | "k" | "kelvin" => value,
        "c" | "°c" | "celsius" => value + 273.15,
        "f" | "°f" | "fahrenheit" => (value + 459.67) * 5.0 / 9.0,
        "r" | "°r" | "rankine" => value * 5.0 / 9.0,
        _ => return Err(unknown(&unit, Quantity::Temperature)),
    };

    if kelvin <= 0.0 {
        return Err(UnitError::OutOfRange {
            value: kelvin,
            reason: "Absolute temperature must be > 0 K".to_string(),
        });
    }

    Ok(kelvin)
}

fn parse_length(input: &str) -> UnitResult<f64> {
    let (value, unit) = split_value_and_unit(input)?;

    let m = match unit.to_lowercase().as_str() {
        "" | "m" => value,
        "cm" => value * 1e-2,
        "mm" => value * 1e-3,
        "in" => value * 0.0254,
        "ft" => value * 0.3048,
        _ => return Err(unknown(&unit, Quantity::Length)),
    };

    Ok(m)
}

fn parse_time(input: &str) -> UnitResult<f64> {
    let (value, unit) = split_value_and_unit(input)?;

    match unit.to_lowercase().as_str() {
        "" | "s" | "sec" => Ok(value),
        "ms" => Ok(value * 1e-3),
        _ => Err(unknown(&unit, Quantity::Time)),
    }
}

fn parse_density(input: &str) -> UnitResult<f64> {
    let (value, unit) = split_value_and_unit(input)?;

    let kg_m3 = match unit.to_lowercase().as_str() {
        "" | "kg/m^3" | "kg/m³" | "kg/m3" => value,
        "g/cm^3" | "g/cm³" | "g/cm3" | "g/ml" => value * 1e3,
        "lbm/ft^3" | "lbm/ft3" => value * 16.018_46,
        _ => return Err(unknown(&unit, Quantity::Density)),
    };

    Ok(kg_m3)
}

fn parse_velocity(input: &str) -> UnitResult<f64> {
    let (value, unit) = split_value_and_unit(input)?;

    match unit.to_lowercase().as_str() {
        "" | "m/s" => Ok(value),
        "km/s" => Ok(value * 1e3),
        "ft/s" => Ok(value * 0.3048),
        _ => Err(unknown(&unit, Quantity::Velocity)),
    }
}

fn parse_molar_mass(input: &str) -> UnitResult<f64> {
    let (value, unit) = split_value_and_unit(input)?;

    match unit.to_lowercase().as_str() {
        "" | "kg/mol" => Ok(value),
        "g/mol" | "kg/kmol" | "lbm/lbmol" => Ok(value * 1e-3),
        _ => Err(unknown(&unit, Quantity::MolarMass)),
    }
}

/// Plain number or percent.
fn parse_dimensionless(input: &str) -> UnitResult<f64> {
    let parse = |s: &str| {
        s.trim().parse::<f64>().map_err(|_| {
            UnitError::ParseError(format!("Could not parse dimensionless value from '{}'", input))
        })
    };

    match input.strip_suffix('%') {
        Some(percent) => Ok(parse(percent)? / 100.0),
        None => parse(input),
    }
}

/// Split a value+unit string into (numeric_value, unit_string).
///
/// Examples:
/// - "70F" -> (70.0, "F")
/// - "2.068e6 Pa" -> (2.068e6, "Pa")
/// - "300" -> (300.0, "")
fn split_value_and_unit(input: &str) -> UnitResult<(f64, String)> {
    let trimmed = input.trim();
    let bytes = trimmed.as_bytes();

    // An exponent marker only counts when a digit or sign follows it
    let mut split_idx = trimmed.len();
    for (i, c) in trimmed.char_indices() {
        let numeric = match c {
            '0'..='9' | '.' | '+' | '-' => true,
            'e' | 'E' => matches!(bytes.get(i + 1), Some(b'0'..=b'9' | b'+' | b'-')),
            _ => false,
        };
        if !numeric {
            split_idx = i;
            break;
        }
    }

    let (num_part, unit_part) = trimmed.split_at(split_idx);
    let value: f64 = num_part.trim().parse().map_err(|_| {
        UnitError::ParseError(format!("Could not parse numeric value from '{}'", input))
    })?;

    if !value.is_finite() {
        return Err(UnitError::OutOfRange {
            value,
            reason: "Value must be finite".to_string(),
        });
    }

    Ok((value, unit_part.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-9 * b.abs().max(1.0)
    }

    #[test]
    fn parse_kelvin_and_celsius() {
        assert_eq!(parse_quantity("300 K", Quantity::Temperature).unwrap(), 300.0);
        assert_eq!(parse_quantity("300K", Quantity::Temperature).unwrap(), 300.0);
        assert!(close(parse_quantity("25 C", Quantity::Temperature).unwrap(), 298.15));
    }

    #[test]
    fn reject_non_positive_temperature() {
        assert!(matches!(
            parse_quantity("-300 C", Quantity::Temperature),
            Err(UnitError::OutOfRange { .. })
        ));
    }

    #[test]
    fn parse_pressures() {
        assert_eq!(parse_quantity("2.068 MPa", Quantity::Pressure).unwrap(), 2.068e6);
        assert_eq!(parse_quantity("2.068e6", Quantity::Pressure).unwrap(), 2.068e6);
        assert_eq!(parse_quantity("2.068E6 Pa", Quantity::Pressure).unwrap(), 2.068e6);
        assert_eq!(parse_quantity("1 atm", Quantity::Pressure).unwrap(), 101_325.0);
        let psia = parse_quantity("300 psia", Quantity::Pressure).unwrap();
        assert!((psia - 2.068e6).abs() < 1e3);
        let psig = parse_quantity("0 psig", Quantity::Pressure).unwrap();
        assert!((psig - 101_325.0).abs() < 1.0);
    }

    #[test]
    fn reject_plain_psi() {
        assert!(matches!(
            parse_quantity("14.7 psi", Quantity::Pressure),
            Err(UnitError::AmbiguousUnit { unit, .. }) if unit == "psi"
        ));
    }

    #[test]
    fn stress_accepts_psi_and_ksi() {
        assert!(close(parse_quantity("8 ksi", Quantity::Stress).unwrap(), 55.158_056e6));
        assert!(close(parse_quantity("8000 psi", Quantity::Stress).unwrap(), 55.158_056e6));
        assert_eq!(parse_quantity("55.2 MPa", Quantity::Stress).unwrap(), 55.2e6);
        assert!(matches!(
            parse_quantity("8 ksia", Quantity::Stress),
            Err(UnitError::UnknownUnit { quantity: Quantity::Stress, .. })
        ));
    }

    #[test]
    fn parse_force_units() {
        assert!(close(parse_quantity("20 lbf", Quantity::Force).unwrap(), 88.964_44));
        assert!(matches!(
            parse_quantity("20 lb", Quantity::Force),
            Err(UnitError::AmbiguousUnit { .. })
        ));
    }

    #[test]
    fn parse_other_families() {
        assert!(close(parse_quantity("1520 mm", Quantity::Length).unwrap(), 1.52));
        assert!(close(parse_quantity("23 g/mol", Quantity::MolarMass).unwrap(), 0.023));
        assert_eq!(parse_quantity("742.9 kg/m^3", Quantity::Density).unwrap(), 742.9);
        assert!(close(parse_quantity("0.7429 g/cm3", Quantity::Density).unwrap(), 742.9));
        assert_eq!(parse_quantity("260 s", Quantity::Time).unwrap(), 260.0);
        assert_eq!(parse_quantity("50 m/s", Quantity::Velocity).unwrap(), 50.0);
        assert_eq!(parse_quantity("70%", Quantity::Dimensionless).unwrap(), 0.7);
        assert_eq!(parse_quantity("1.2", Quantity::Dimensionless).unwrap(), 1.2);
    }

    #[test]
    fn unknown_unit_names_quantity() {
        let err = parse_quantity("3 furlongs", Quantity::Length).unwrap_err();
        assert_eq!(
            err,
            UnitError::UnknownUnit {
                unit: "furlongs".into(),
                quantity: Quantity::Length
            }
        );
        assert!(err.to_string().contains("Length"));
    }

    #[test]
    fn garbage_is_parse_error() {
        assert!(matches!(
            parse_quantity("fast", Quantity::Velocity),
            Err(UnitError::ParseError(_))
        ));
        assert!(matches!(
            parse_quantity("", Quantity::Length),
            Err(UnitError::ParseError(_))
        ));
    }
}
