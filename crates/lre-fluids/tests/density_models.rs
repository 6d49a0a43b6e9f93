//! Density backend integration tests.
//!
//! Broad tolerances; these check physical plausibility and agreement between
//! backends in the regimes where they should agree.

use lre_core::numeric::relative_difference;
use lre_core::units::{k, pa};
use lre_fluids::{Composition, FluidBackend, FluidError, FluidModel, Species};

fn rho(model: &dyn FluidModel, t: f64, p: f64, comp: &Composition) -> f64 {
    model.density(k(t), pa(p), comp).unwrap().value
}

#[test]
fn backends_agree_for_dilute_gases() {
    let ideal = FluidBackend::IdealGas.build().unwrap();
    let real = FluidBackend::PengRobinson.build().unwrap();

    for species in [Species::O2, Species::N2, Species::He, Species::Ar] {
        let comp = Composition::pure(species);
        let rho_ideal = rho(ideal.as_ref(), 300.0, 101_325.0, &comp);
        let rho_real = rho(real.as_ref(), 300.0, 101_325.0, &comp);
        assert!(
            relative_difference(rho_real, rho_ideal) < 5e-3,
            "{species}: ideal {rho_ideal} vs PR {rho_real}"
        );
    }
}

#[test]
fn real_gas_correction_grows_with_pressure() {
    let ideal = FluidBackend::IdealGas.build().unwrap();
    let real = FluidBackend::PengRobinson.build().unwrap();
    let comp = Composition::pure(Species::NitrousOxide);

    let deviation = |p: f64| {
        let a = rho(ideal.as_ref(), 320.0, p, &comp);
        let b = rho(real.as_ref(), 320.0, p, &comp);
        relative_difference(b, a)
    };

    assert!(deviation(1e5) < deviation(1e6));
    assert!(deviation(1e6) < deviation(4e6));
}

#[test]
fn single_species_mapping_contract() {
    // {oxidizerName: 1.0}
    let comp = Composition::from_names([("O2", 1.0)]).unwrap();
    let model = FluidBackend::default().build().unwrap();
    let rho = model.density(k(298.15), pa(2.757e6), &comp).unwrap();
    assert!(rho.value.is_finite() && rho.value > 0.0);
}

#[test]
fn invalid_state_is_rejected_before_backend() {
    let model = FluidBackend::PengRobinson.build().unwrap();
    let comp = Composition::pure(Species::O2);
    assert!(matches!(
        model.density(k(-1.0), pa(1e6), &comp),
        Err(FluidError::NonPhysical { .. })
    ));
    assert!(matches!(
        model.density(k(300.0), pa(f64::INFINITY), &comp),
        Err(FluidError::NonPhysical { .. })
    ));
}
