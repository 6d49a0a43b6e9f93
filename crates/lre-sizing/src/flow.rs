//! Propellant mass-flow partitioning.

use crate::common::{finite, non_negative, positive};
use crate::error::{SizingError, SizingResult};
use lre_core::units::constants::G0_MPS2;
use lre_core::units::{Force, MassRate, Time, kgps};

#[cfg(feature = "serde")]
use serde::Serialize;

/// Total propellant mass flow required for `thrust` at `specific_impulse`.
///
/// ṁ = F / (Isp · g0)
pub fn total_flow(thrust: Force, specific_impulse: Time) -> SizingResult<MassRate> {
    let isp = positive(specific_impulse.value, "specific impulse")?;
    let f = non_negative(thrust.value, "thrust")?;
    Ok(kgps(finite(f / (isp * G0_MPS2), "total mass flow")?))
}

/// Fuel share of `total`: ṁ / (O/F + 1).
pub fn fuel_flow(of_ratio: f64, total: MassRate) -> SizingResult<MassRate> {
    let of = of_ratio_checked(of_ratio)?;
    let total = non_negative(total.value, "total mass flow")?;
    Ok(kgps(total / (of + 1.0)))
}

/// Oxidizer share of `total`: ṁ · O/F / (O/F + 1).
pub fn oxidizer_flow(of_ratio: f64, total: MassRate) -> SizingResult<MassRate> {
    let of = of_ratio_checked(of_ratio)?;
    let total = non_negative(total.value, "total mass flow")?;
    Ok(kgps(total * of / (of + 1.0)))
}

fn of_ratio_checked(of_ratio: f64) -> SizingResult<f64> {
    positive(of_ratio, "oxidizer-to-fuel ratio")
}

/// Oxidizer and fuel mass fractions of a propellant mixture.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct MassFractions {
    pub oxidizer: f64,
    pub fuel: f64,
}

/// Split an O/F mass ratio into mass fractions summing to one.
pub fn ratio_to_mass_fraction(of_ratio: f64) -> SizingResult<MassFractions> {
    let of = of_ratio_checked(of_ratio)?;
    Ok(MassFractions {
        oxidizer: of / (of + 1.0),
        fuel: 1.0 / (of + 1.0),
    })
}

/// Inverse of [`ratio_to_mass_fraction`]: O/F = oxidizer / fuel.
pub fn mass_fraction_to_ratio(oxidizer: f64, fuel: f64) -> SizingResult<f64> {
    if fuel == 0.0 {
        return Err(SizingError::invalid(
            "fuel mass fraction",
            fuel,
            "must be non-zero",
        ));
    }
    let fuel = positive(fuel, "fuel mass fraction")?;
    let oxidizer = non_negative(oxidizer, "oxidizer mass fraction")?;
    Ok(oxidizer / fuel)
}

/// Result of partitioning the total propellant flow.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct FlowSplit {
    pub total: MassRate,
    pub fuel: MassRate,
    pub oxidizer: MassRate,
}

impl FlowSplit {
    /// O/F ratio recovered from the split flows.
    pub fn of_ratio(&self) -> SizingResult<f64> {
        mass_fraction_to_ratio(self.oxidizer.value, self.fuel.value)
    }
}

/// Total, fuel and oxidizer flow for a thrust target.
pub fn partition_flow(
    thrust: Force,
    specific_impulse: Time,
    of_ratio: f64,
) -> SizingResult<FlowSplit> {
    let total = total_flow(thrust, specific_impulse)?;
    Ok(FlowSplit {
        total,
        fuel: fuel_flow(of_ratio, total)?,
        oxidizer: oxidizer_flow(of_ratio, total)?,
    })
}
