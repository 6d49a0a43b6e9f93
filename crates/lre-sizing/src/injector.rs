//! Injector orifice sizing.
//!
//! Fuel is treated as an incompressible liquid through a sharp-edged
//! orifice. The oxidizer area follows from continuity at the injection
//! velocity, using the oxidizer density at the injector entrance from a
//! [`FluidModel`].

use crate::common::{non_negative, positive};
use crate::error::{SizingError, SizingResult};
use lre_core::units::{Area, Density, MassRate, Pressure, Temperature, Velocity, m2, pa};
use lre_fluids::{Composition, FluidError, FluidModel, Species};

#[cfg(feature = "serde")]
use serde::Serialize;

/// Injector design parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct InjectorInputs {
    /// Orifice discharge coefficient, 0 < Cd ≤ 1.
    pub discharge_coefficient: f64,
    pub fuel_density: Density,
    pub fuel_pressure_drop: Pressure,
    pub oxidizer_pressure_drop: Pressure,
    pub oxidizer_velocity: Velocity,
    pub oxidizer: Species,
    /// Oxidizer temperature at the injector entrance.
    pub ambient_temperature: Temperature,
}

/// A = ṁ / (Cd · sqrt(2 · ρ · Δp))
pub fn fuel_spray_injector_area(
    flow: MassRate,
    discharge_coefficient: f64,
    density: Density,
    pressure_drop: Pressure,
) -> SizingResult<Area> {
    let mdot = non_negative(flow.value, "fuel mass flow")?;
    let cd = positive(discharge_coefficient, "discharge coefficient")?;
    let rho = positive(density.value, "fuel density")?;
    let dp = positive(pressure_drop.value, "fuel pressure drop")?;
    Ok(m2(mdot / (cd * (2.0 * rho * dp).sqrt())))
}

/// Oxidizer feed pressure upstream of the injector: P_c + Δp_ox.
pub fn oxidizer_entrance_pressure(
    chamber_pressure: Pressure,
    pressure_drop: Pressure,
) -> SizingResult<Pressure> {
    let pc = positive(chamber_pressure.value, "chamber pressure")?;
    let dp = non_negative(pressure_drop.value, "oxidizer pressure drop")?;
    Ok(pa(pc + dp))
}

/// A = ṁ / (ρ · v)
pub fn oxidizer_injector_area(
    flow: MassRate,
    density: Density,
    velocity: Velocity,
) -> SizingResult<Area> {
    let mdot = non_negative(flow.value, "oxidizer mass flow")?;
    let v = positive(velocity.value, "oxidizer injection velocity")?;
    let rho = positive(density.value, "oxidizer density")?;
    Ok(m2(mdot / (rho * v)))
}

/// Oxidizer injector state and area.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct OxidizerInjector {
    pub entrance_pressure: Pressure,
    pub entrance_density: Density,
    pub area: Area,
}

/// Look up the entrance density of the pure oxidizer and size its injector.
///
/// Failures from the density lookup, including a non-physical density, are
/// returned as [`SizingError::ExternalComputation`].
pub fn size_oxidizer_injector(
    fluids: &dyn FluidModel,
    inputs: &InjectorInputs,
    chamber_pressure: Pressure,
    oxidizer_flow: MassRate,
) -> SizingResult<OxidizerInjector> {
    positive(inputs.oxidizer_velocity.value, "oxidizer injection velocity")?;
    let entrance_pressure = oxidizer_entrance_pressure(chamber_pressure, inputs.oxidizer_pressure_drop)?;

    let comp = Composition::pure(inputs.oxidizer);
    let entrance_density = fluids.density(inputs.ambient_temperature, entrance_pressure, &comp)?;
    if !entrance_density.value.is_finite() || entrance_density.value <= 0.0 {
        return Err(SizingError::ExternalComputation(FluidError::NonPhysical {
            what: "oxidizer density must be positive and finite",
        }));
    }
    tracing::debug!(
        model = fluids.name(),
        oxidizer = %inputs.oxidizer,
        p_pa = entrance_pressure.value,
        rho_kg_m3 = entrance_density.value,
        "oxidizer entrance density"
    );

    let area = oxidizer_injector_area(oxidizer_flow, entrance_density, inputs.oxidizer_velocity)?;
    Ok(OxidizerInjector {
        entrance_pressure,
        entrance_density,
        area,
    })
}

/// Both injector areas.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct InjectorSizing {
    pub fuel_area: Area,
    pub oxidizer: OxidizerInjector,
}

#[cfg(test)]
mod tests {
    use super::*;
    use lre_core::numeric::{Tolerances, nearly_equal};
    use lre_core::units::{k, kg_per_m3, kgps, mps};
    use lre_fluids::{FluidResult, PengRobinsonModel, ThermoState};
    use std::sync::atomic::{AtomicUsize, Ordering};

    const REL: Tolerances = Tolerances::relative(1e-9);

    fn inputs() -> InjectorInputs {
        InjectorInputs {
            discharge_coefficient: 0.7,
            fuel_density: kg_per_m3(742.9),
            fuel_pressure_drop: pa(0.689e6),
            oxidizer_pressure_drop: pa(0.689e6),
            oxidizer_velocity: mps(50.0),
            oxidizer: Species::O2,
            ambient_temperature: k(298.15),
        }
    }

    /// Constant-density stub that counts lookups.
    struct Counting {
        rho: f64,
        calls: AtomicUsize,
    }

    impl FluidModel for Counting {
        fn name(&self) -> &str {
            "counting"
        }
        fn supports_composition(&self, _comp: &Composition) -> bool {
            true
        }
        fn rho(&self, _state: &ThermoState) -> FluidResult<Density> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(kg_per_m3(self.rho))
        }
    }

    #[test]
    fn fuel_area_matches_closed_form() {
        let area = fuel_spray_injector_area(kgps(0.00997), 0.7, kg_per_m3(742.9), pa(0.689e6))
            .unwrap();
        let expected = 0.00997 / (0.7 * (2.0_f64 * 742.9 * 0.689e6).sqrt());
        assert!(nearly_equal(area.value, expected, REL));
        assert!(nearly_equal(area.value, 4.451_509_764e-7, Tolerances::relative(1e-8)));
    }

    #[test]
    fn fuel_area_preconditions() {
        let f = |cd: f64, rho: f64, dp: f64| {
            fuel_spray_injector_area(kgps(0.01), cd, kg_per_m3(rho), pa(dp))
        };
        assert!(f(0.0, 742.9, 0.689e6).is_err());
        assert!(f(0.7, 0.0, 0.689e6).is_err());
        assert!(f(0.7, 742.9, 0.0).is_err());
        assert!(f(0.7, 742.9, -1.0).is_err());
    }

    #[test]
    fn entrance_pressure_adds_drop() {
        let p = oxidizer_entrance_pressure(pa(2.068e6), pa(0.689e6)).unwrap();
        assert!(nearly_equal(p.value, 2.757e6, REL));
        assert!(oxidizer_entrance_pressure(pa(2.068e6), pa(-1.0)).is_err());
    }

    #[test]
    fn oxidizer_area_by_continuity() {
        let stub = Counting {
            rho: 40.0,
            calls: AtomicUsize::new(0),
        };
        let ox = size_oxidizer_injector(&stub, &inputs(), pa(2.068e6), kgps(0.02)).unwrap();
        assert!(nearly_equal(ox.area.value, 0.02 / (40.0 * 50.0), REL));
        assert!(nearly_equal(ox.entrance_pressure.value, 2.757e6, REL));
        assert_eq!(stub.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn velocity_checked_before_lookup() {
        let stub = Counting {
            rho: 40.0,
            calls: AtomicUsize::new(0),
        };
        let mut inp = inputs();
        inp.oxidizer_velocity = mps(0.0);
        let err = size_oxidizer_injector(&stub, &inp, pa(2.068e6), kgps(0.02)).unwrap_err();
        assert!(matches!(err, SizingError::InvalidInput { .. }));
        assert_eq!(stub.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn non_physical_density_is_external_failure() {
        let stub = Counting {
            rho: 0.0,
            calls: AtomicUsize::new(0),
        };
        let err = size_oxidizer_injector(&stub, &inputs(), pa(2.068e6), kgps(0.02)).unwrap_err();
        assert!(matches!(err, SizingError::ExternalComputation(_)));
    }

    #[test]
    fn real_gas_oxygen_entrance_density() {
        let ox = size_oxidizer_injector(&PengRobinsonModel::new(), &inputs(), pa(2.068e6), kgps(0.0249))
            .unwrap();
        assert!((ox.entrance_density.value - 36.44).abs() < 0.2);
    }
}
