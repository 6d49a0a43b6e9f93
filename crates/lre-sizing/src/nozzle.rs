//! Choked throat and exit sizing.

use crate::common::{finite, non_negative, positive};
use crate::error::SizingResult;
use crate::geometry::area_to_diameter;
use crate::isentropic::{optimal_expansion_ratio, throat_pressure, throat_temperature};
use lre_core::units::constants::R_UNIVERSAL;
use lre_core::units::{Area, Length, MassRate, MolarMass, Pressure, Temperature, m2};

#[cfg(feature = "serde")]
use serde::Serialize;

/// Throat area that passes `mass_flow` at Mach 1.
///
/// A* = (ṁ / P) · sqrt(R·T / (γ·M)), with P and T the throat static state
/// and M the propellant molar mass.
pub fn throat_area_from_mass_flow(
    mass_flow: MassRate,
    pressure: Pressure,
    temperature: Temperature,
    gamma: f64,
    molar_mass: MolarMass,
) -> SizingResult<Area> {
    let mdot = non_negative(mass_flow.value, "mass flow")?;
    let p = positive(pressure.value, "throat pressure")?;
    let t = positive(temperature.value, "throat temperature")?;
    let g = positive(gamma, "ratio of specific heats")?;
    let mw = positive(molar_mass.value, "propellant molar mass")?;

    let area = (mdot / p) * (R_UNIVERSAL * t / g / mw).sqrt();
    Ok(m2(finite(area, "throat area")?))
}

/// Exit area for a given expansion ratio.
pub fn exit_area(throat_area: Area, expansion_ratio: f64) -> SizingResult<Area> {
    let at = non_negative(throat_area.value, "throat area")?;
    let eps = positive(expansion_ratio, "expansion ratio")?;
    Ok(m2(at * eps))
}

/// Static state and size of the throat.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ThroatConditions {
    pub temperature: Temperature,
    pub pressure: Pressure,
    pub area: Area,
    pub diameter: Length,
}

/// Throat temperature, pressure and size for a chamber state and flow.
pub fn size_throat(
    mass_flow: MassRate,
    chamber_pressure: Pressure,
    chamber_temperature: Temperature,
    gamma: f64,
    molar_mass: MolarMass,
) -> SizingResult<ThroatConditions> {
    let temperature = throat_temperature(chamber_temperature, gamma)?;
    let pressure = throat_pressure(chamber_pressure, gamma)?;
    let area = throat_area_from_mass_flow(mass_flow, pressure, temperature, gamma, molar_mass)?;
    Ok(ThroatConditions {
        temperature,
        pressure,
        area,
        diameter: area_to_diameter(area)?,
    })
}

/// Nozzle exit matched to ambient pressure.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct NozzleExit {
    pub expansion_ratio: f64,
    pub area: Area,
    pub diameter: Length,
}

pub fn size_exit(
    throat_area: Area,
    chamber_pressure: Pressure,
    atmospheric_pressure: Pressure,
    gamma: f64,
) -> SizingResult<NozzleExit> {
    let expansion_ratio = optimal_expansion_ratio(chamber_pressure, atmospheric_pressure, gamma)?;
    let area = exit_area(throat_area, expansion_ratio)?;
    Ok(NozzleExit {
        expansion_ratio,
        area,
        diameter: area_to_diameter(area)?,
    })
}
