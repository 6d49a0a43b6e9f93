//! Fluid property model trait and validation helpers.

use crate::composition::Composition;
use crate::error::{FluidError, FluidResult};
use crate::state::ThermoState;
use lre_core::units::{Density, Pressure, Temperature};

/// Density lookup consumed by the sizing core.
///
/// Implementations must be thread-safe (Send + Sync) and deterministic.
/// All methods should validate inputs and outputs for physical plausibility.
pub trait FluidModel: Send + Sync {
    /// Get the model name (for debugging/logging).
    fn name(&self) -> &str;

    /// Check if this model supports the given composition.
    fn supports_composition(&self, comp: &Composition) -> bool;

    /// Compute density [kg/m³] at the given state.
    fn rho(&self, state: &ThermoState) -> FluidResult<Density>;

    /// Density at (T, P, composition).
    ///
    /// Validates the state, rejects unsupported compositions, and guarantees a
    /// finite, strictly positive result.
    fn density(
        &self,
        temperature: Temperature,
        pressure: Pressure,
        comp: &Composition,
    ) -> FluidResult<Density> {
        if !self.supports_composition(comp) {
            return Err(FluidError::NotSupported {
                what: "composition not supported by this fluid model",
            });
        }
        let state = ThermoState::from_pt(pressure, temperature, comp.clone())?;
        let rho = self.rho(&state)?;
        validation::validate_density(rho)?;
        tracing::trace!(
            model = self.name(),
            t_k = temperature.value,
            p_pa = pressure.value,
            rho_kg_m3 = rho.value,
            "density lookup"
        );
        Ok(rho)
    }
}

/// Validation helpers for fluid properties.
pub(crate) mod validation {
    use super::*;

    /// Ensure pressure is positive and finite.
    pub fn validate_pressure(p: Pressure) -> FluidResult<()> {
        if !p.value.is_finite() || p.value <= 0.0 {
            return Err(FluidError::NonPhysical {
                what: "pressure must be positive and finite",
            });
        }
        Ok(())
    }

    /// Ensure temperature is positive and finite.
    pub fn validate_temperature(t: Temperature) -> FluidResult<()> {
        if !t.value.is_finite() || t.value <= 0.0 {
            return Err(FluidError::NonPhysical {
                what: "temperature must be positive and finite",
            });
        }
        Ok(())
    }

    /// Ensure density is positive and finite.
    pub fn validate_density(rho: Density) -> FluidResult<()> {
        if !rho.value.is_finite() || rho.value <= 0.0 {
            return Err(FluidError::NonPhysical {
                what: "density must be positive and finite",
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::validation::*;
    use super::*;
    use crate::species::Species;
    use lre_core::units::{k, kg_per_m3, pa};

    /// Returns a fixed density regardless of state.
    struct FixedDensity(f64);

    impl FluidModel for FixedDensity {
        fn name(&self) -> &str {
            "fixed"
        }

        fn supports_composition(&self, comp: &Composition) -> bool {
            comp.is_pure().is_some()
        }

        fn rho(&self, _state: &ThermoState) -> FluidResult<Density> {
            Ok(kg_per_m3(self.0))
        }
    }

    #[test]
    fn validate_positive_pressure() {
        assert!(validate_pressure(pa(101325.0)).is_ok());
        assert!(validate_pressure(pa(-100.0)).is_err());
        assert!(validate_pressure(pa(0.0)).is_err());
        assert!(validate_pressure(pa(f64::NAN)).is_err());
    }

    #[test]
    fn validate_positive_temperature() {
        assert!(validate_temperature(k(300.0)).is_ok());
        assert!(validate_temperature(k(-10.0)).is_err());
        assert!(validate_temperature(k(0.0)).is_err());
    }

    #[test]
    fn validate_density_positive() {
        assert!(validate_density(kg_per_m3(1000.0)).is_ok());
        assert!(validate_density(kg_per_m3(-1.0)).is_err());
        assert!(validate_density(kg_per_m3(0.0)).is_err());
    }

    #[test]
    fn density_passes_through_valid_result() {
        let model = FixedDensity(42.0);
        let rho = model
            .density(k(300.0), pa(1e5), &Composition::pure(Species::O2))
            .unwrap();
        assert_eq!(rho.value, 42.0);
    }

    #[test]
    fn density_rejects_non_physical_backend_result() {
        let model = FixedDensity(f64::NAN);
        let err = model
            .density(k(300.0), pa(1e5), &Composition::pure(Species::O2))
            .unwrap_err();
        assert!(matches!(err, FluidError::NonPhysical { .. }));
    }

    #[test]
    fn density_rejects_unsupported_composition() {
        let model = FixedDensity(1.0);
        let mix =
            Composition::new_mole_fractions(vec![(Species::O2, 0.5), (Species::N2, 0.5)]).unwrap();
        let err = model.density(k(300.0), pa(1e5), &mix).unwrap_err();
        assert!(matches!(err, FluidError::NotSupported { .. }));
    }

    #[test]
    fn density_rejects_invalid_state() {
        let model = FixedDensity(1.0);
        let err = model
            .density(k(300.0), pa(0.0), &Composition::pure(Species::O2))
            .unwrap_err();
        assert!(matches!(err, FluidError::NonPhysical { .. }));
    }
}
