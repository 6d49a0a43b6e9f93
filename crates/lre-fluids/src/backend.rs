//! Runtime selection of a density backend.

use crate::error::{FluidError, FluidResult};
use crate::ideal_gas::IdealGasModel;
use crate::model::FluidModel;
use crate::peng_robinson::PengRobinsonModel;

/// Available fluid property backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FluidBackend {
    IdealGas,
    #[default]
    PengRobinson,
    /// Requires the `coolprop` cargo feature.
    CoolProp,
}

impl FluidBackend {
    pub const ALL: [FluidBackend; 3] = [
        FluidBackend::IdealGas,
        FluidBackend::PengRobinson,
        FluidBackend::CoolProp,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            FluidBackend::IdealGas => "ideal-gas",
            FluidBackend::PengRobinson => "peng-robinson",
            FluidBackend::CoolProp => "coolprop",
        }
    }

    /// Whether this build can construct the backend.
    pub fn is_available(&self) -> bool {
        match self {
            FluidBackend::IdealGas | FluidBackend::PengRobinson => true,
            FluidBackend::CoolProp => cfg!(feature = "coolprop"),
        }
    }

    /// Construct the model.
    pub fn build(&self) -> FluidResult<Box<dyn FluidModel>> {
        match self {
            FluidBackend::IdealGas => Ok(Box::new(IdealGasModel::new())),
            FluidBackend::PengRobinson => Ok(Box::new(PengRobinsonModel::new())),
            #[cfg(feature = "coolprop")]
            FluidBackend::CoolProp => Ok(Box::new(crate::coolprop::CoolPropModel::new())),
            #[cfg(not(feature = "coolprop"))]
            FluidBackend::CoolProp => Err(FluidError::NotSupported {
                what: "CoolProp backend (build with the `coolprop` feature)",
            }),
        }
    }
}

impl std::fmt::Display for FluidBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

impl std::str::FromStr for FluidBackend {
    type Err = FluidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "ideal-gas" | "ideal" => Ok(FluidBackend::IdealGas),
            "peng-robinson" | "pr" => Ok(FluidBackend::PengRobinson),
            "coolprop" => Ok(FluidBackend::CoolProp),
            _ => Err(FluidError::InvalidArg {
                what: "unknown fluid backend (expected ideal-gas, peng-robinson or coolprop)",
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_keys_and_aliases() {
        for backend in FluidBackend::ALL {
            assert_eq!(backend.key().parse::<FluidBackend>().unwrap(), backend);
        }
        assert_eq!(
            "Peng_Robinson".parse::<FluidBackend>().unwrap(),
            FluidBackend::PengRobinson
        );
        assert!("refprop".parse::<FluidBackend>().is_err());
    }

    #[test]
    fn default_is_peng_robinson() {
        let model = FluidBackend::default().build().unwrap();
        assert_eq!(model.name(), "PengRobinson");
    }

    #[test]
    fn built_in_backends_are_available() {
        assert!(FluidBackend::IdealGas.build().is_ok());
        assert!(FluidBackend::PengRobinson.is_available());
    }

    #[cfg(not(feature = "coolprop"))]
    #[test]
    fn coolprop_requires_feature() {
        assert!(!FluidBackend::CoolProp.is_available());
        assert!(matches!(
            FluidBackend::CoolProp.build(),
            Err(FluidError::NotSupported { .. })
        ));
    }
}
