//! Isentropic throat conditions and pressure-matched expansion ratio.

use crate::common::{finite, gamma as checked_gamma, positive};
use crate::error::{SizingError, SizingResult};
use lre_core::units::{Pressure, Temperature, k, pa};

/// Static-to-stagnation temperature ratio at Mach 1: 2/(γ+1).
pub fn critical_temperature_ratio(gamma: f64) -> SizingResult<f64> {
    let g = checked_gamma(gamma)?;
    Ok(2.0 / (g + 1.0))
}

/// Static-to-stagnation pressure ratio at Mach 1: (2/(γ+1))^(γ/(γ−1)).
pub fn critical_pressure_ratio(gamma: f64) -> SizingResult<f64> {
    let g = checked_gamma(gamma)?;
    Ok((2.0 / (g + 1.0)).powf(g / (g - 1.0)))
}

/// Throat static temperature for choked flow from chamber temperature.
pub fn throat_temperature(chamber_temperature: Temperature, gamma: f64) -> SizingResult<Temperature> {
    let tc = positive(chamber_temperature.value, "chamber temperature")?;
    Ok(k(tc * critical_temperature_ratio(gamma)?))
}

/// Throat static pressure for choked flow from chamber pressure.
pub fn throat_pressure(chamber_pressure: Pressure, gamma: f64) -> SizingResult<Pressure> {
    let pc = positive(chamber_pressure.value, "chamber pressure")?;
    Ok(pa(pc * critical_pressure_ratio(gamma)?))
}

/// Area ratio A_exit/A_throat that expands the flow to `atmospheric_pressure`.
///
/// With pr = Pa/Pc:
///
/// ε = 1 / [ ((γ+1)/2)^(1/(γ−1)) · pr^(1/γ) · sqrt((γ+1)/(γ−1) · (1 − pr^((γ−1)/γ))) ]
///
/// Fails when pr ≥ 1, since no expansion is possible.
pub fn optimal_expansion_ratio(
    chamber_pressure: Pressure,
    atmospheric_pressure: Pressure,
    gamma: f64,
) -> SizingResult<f64> {
    let g = checked_gamma(gamma)?;
    let pc = positive(chamber_pressure.value, "chamber pressure")?;
    let p_atm = positive(atmospheric_pressure.value, "atmospheric pressure")?;

    let pr = p_atm / pc;
    if pr >= 1.0 {
        return Err(SizingError::invalid(
            "atmospheric-to-chamber pressure ratio",
            pr,
            "must be less than 1",
        ));
    }

    let radicand = (g + 1.0) / (g - 1.0) * (1.0 - pr.powf((g - 1.0) / g));
    if radicand <= 0.0 {
        return Err(SizingError::invalid(
            "expansion ratio radicand",
            radicand,
            "must be positive",
        ));
    }

    let denom = ((g + 1.0) / 2.0).powf(1.0 / (g - 1.0)) * pr.powf(1.0 / g) * radicand.sqrt();
    finite(1.0 / denom, "expansion ratio")
}
