//! Chemical species definitions.

use crate::error::FluidError;

/// Chemical species relevant for propellant feed and injector sizing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Species {
    /// Oxygen (O₂)
    O2,
    /// Nitrogen (N₂)
    N2,
    /// Air (pseudo-pure fluid)
    Air,
    /// Hydrogen (H₂)
    H2,
    /// Methane (CH₄)
    CH4,
    /// Helium (He)
    He,
    /// Argon (Ar)
    Ar,
    /// Carbon dioxide (CO₂)
    CO2,
    /// Carbon monoxide (CO)
    CO,
    /// Water (H₂O)
    H2O,
    /// Nitrous oxide (N₂O)
    NitrousOxide,
    /// Ammonia (NH₃)
    Ammonia,
    /// Propane
    Propane,
    /// RP-1 kerosene (n-dodecane surrogate constants)
    RP1,
}

/// Critical-point data used by cubic equations of state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CriticalPoint {
    /// Critical temperature [K]
    pub temperature_k: f64,
    /// Critical pressure [Pa]
    pub pressure_pa: f64,
    /// Pitzer acentric factor [-]
    pub acentric_factor: f64,
}

impl Species {
    pub const ALL: [Species; 14] = [
        Species::O2,
        Species::N2,
        Species::Air,
        Species::H2,
        Species::CH4,
        Species::He,
        Species::Ar,
        Species::CO2,
        Species::CO,
        Species::H2O,
        Species::NitrousOxide,
        Species::Ammonia,
        Species::Propane,
        Species::RP1,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Species::O2 => "O2",
            Species::N2 => "N2",
            Species::Air => "Air",
            Species::H2 => "H2",
            Species::CH4 => "CH4",
            Species::He => "He",
            Species::Ar => "Ar",
            Species::CO2 => "CO2",
            Species::CO => "CO",
            Species::H2O => "H2O",
            Species::NitrousOxide => "N2O",
            Species::Ammonia => "NH3",
            Species::Propane => "Propane",
            Species::RP1 => "RP1",
        }
    }

    /// Get human-readable name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Species::O2 => "Oxygen",
            Species::N2 => "Nitrogen",
            Species::Air => "Air",
            Species::H2 => "Hydrogen",
            Species::CH4 => "Methane",
            Species::He => "Helium",
            Species::Ar => "Argon",
            Species::CO2 => "Carbon Dioxide",
            Species::CO => "Carbon Monoxide",
            Species::H2O => "Water",
            Species::NitrousOxide => "Nitrous Oxide",
            Species::Ammonia => "Ammonia",
            Species::Propane => "Propane",
            Species::RP1 => "RP-1",
        }
    }

    /// Get molar mass [kg/kmol] for this species.
    pub fn molar_mass(&self) -> f64 {
        match self {
            Species::O2 => 31.999,
            Species::N2 => 28.014,
            Species::Air => 28.965,
            Species::H2 => 2.016,
            Species::CH4 => 16.043,
            Species::He => 4.003,
            Species::Ar => 39.948,
            Species::CO2 => 44.010,
            Species::CO => 28.010,
            Species::H2O => 18.015,
            Species::NitrousOxide => 44.013,
            Species::Ammonia => 17.031,
            Species::Propane => 44.097,
            Species::RP1 => 170.0,
        }
    }

    /// Critical constants (NIST webbook / CoolProp reference values).
    ///
    /// Air uses pseudo-critical values; RP-1 borrows n-dodecane's.
    pub fn critical_point(&self) -> CriticalPoint {
        let (temperature_k, pressure_pa, acentric_factor) = match self {
            Species::O2 => (154.581, 5.043e6, 0.0222),
            Species::N2 => (126.192, 3.3958e6, 0.0372),
            Species::Air => (132.5306, 3.786e6, 0.0335),
            Species::H2 => (33.145, 1.2964e6, -0.219),
            Species::CH4 => (190.564, 4.5992e6, 0.011_42),
            Species::He => (5.1953, 2.2832e5, -0.382),
            Species::Ar => (150.687, 4.863e6, -0.002_19),
            Species::CO2 => (304.1282, 7.3773e6, 0.223_94),
            Species::CO => (132.86, 3.494e6, 0.0497),
            Species::H2O => (647.096, 22.064e6, 0.3443),
            Species::NitrousOxide => (309.52, 7.245e6, 0.1613),
            Species::Ammonia => (405.4, 11.333e6, 0.256_01),
            Species::Propane => (369.89, 4.2512e6, 0.1521),
            Species::RP1 => (658.1, 1.817e6, 0.574),
        };
        CriticalPoint {
            temperature_k,
            pressure_pa,
            acentric_factor,
        }
    }

    /// Map to rfluids Pure enum (internal use for CoolProp backend).
    ///
    /// Returns `None` for species not available in rfluids.
    #[cfg(feature = "coolprop")]
    pub(crate) fn rfluids_pure(&self) -> Option<rfluids::substance::Pure> {
        use rfluids::substance::Pure;
        match self {
            Species::O2 => Some(Pure::Oxygen),
            Species::N2 => Some(Pure::Nitrogen),
            Species::Air => Some(Pure::Air),
            Species::H2 => Some(Pure::Hydrogen),
            Species::CH4 => Some(Pure::Methane),
            Species::He => Some(Pure::Helium),
            Species::Ar => Some(Pure::Argon),
            Species::CO2 => Some(Pure::CarbonDioxide),
            Species::CO => Some(Pure::CarbonMonoxide),
            Species::H2O => Some(Pure::Water),
            Species::NitrousOxide => Some(Pure::NitrousOxide),
            Species::Ammonia => Some(Pure::Ammonia),
            Species::Propane => Some(Pure::nPropane),
            Species::RP1 => None,
        }
    }
}

impl std::fmt::Display for Species {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

impl std::str::FromStr for Species {
    type Err = FluidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "O2" | "OXYGEN" | "LOX" | "GOX" => Ok(Species::O2),
            "N2" | "NITROGEN" => Ok(Species::N2),
            "AIR" => Ok(Species::Air),
            "H2" | "HYDROGEN" => Ok(Species::H2),
            "CH4" | "METHANE" => Ok(Species::CH4),
            "HE" | "HELIUM" => Ok(Species::He),
            "AR" | "ARGON" => Ok(Species::Ar),
            "CO2" | "CARBONDIOXIDE" | "CARBON DIOXIDE" => Ok(Species::CO2),
            "CO" | "CARBONMONOXIDE" | "CARBON MONOXIDE" => Ok(Species::CO),
            "H2O" | "WATER" => Ok(Species::H2O),
            "N2O" | "NITROUSOXIDE" | "NITROUS OXIDE" => Ok(Species::NitrousOxide),
            "NH3" | "AMMONIA" => Ok(Species::Ammonia),
            "PROPANE" | "C3H8" => Ok(Species::Propane),
            "RP1" | "RP-1" | "KEROSENE" => Ok(Species::RP1),
            _ => Err(FluidError::UnknownSpecies {
                name: s.trim().to_string(),
            }),
        }
    }
}
