use lre_core::numeric::relative_difference;
use lre_fluids::PengRobinsonModel;
use lre_sizing::size_engine;
use std::path::{Path, PathBuf};

fn designs_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../designs")
}

#[test]
fn bundled_designs_load_and_resolve() {
    for name in ["preliminary_design.yaml", "engine_only.json"] {
        let path = designs_dir().join(name);
        let design = lre_project::load(&path)
            .unwrap_or_else(|e| panic!("Failed to load {}: {}", name, e));
        design
            .resolve()
            .unwrap_or_else(|e| panic!("Failed to resolve {}: {}", name, e));
    }
}

#[test]
fn preliminary_design_matches_reference() {
    let loaded = lre_project::load(&designs_dir().join("preliminary_design.yaml"))
        .unwrap()
        .resolve()
        .unwrap();
    let reference = lre_project::DesignFile::reference().resolve().unwrap();

    assert_eq!(loaded.thrust, reference.thrust);
    assert_eq!(loaded.chamber_pressure, reference.chamber_pressure);
    assert_eq!(loaded.injector, reference.injector);
    assert_eq!(loaded.wall, reference.wall);
    assert!(relative_difference(loaded.molar_mass.value, reference.molar_mass.value) < 1e-12);
}

#[test]
fn preliminary_design_sizes_end_to_end() {
    let inputs = lre_project::load(&designs_dir().join("preliminary_design.yaml"))
        .unwrap()
        .resolve()
        .unwrap();
    let out = size_engine(&inputs, &PengRobinsonModel::new()).unwrap();

    assert!(relative_difference(out.flow.total.value, 0.0349) < 5e-3);
    assert!(relative_difference(out.throat.temperature.value, 3131.8) < 5e-3);
    assert!(relative_difference(out.wall_thickness.unwrap().value, 1.708_67e-3) < 1e-5);
    assert!(out.injector.is_some());
}

#[test]
fn engine_only_design_skips_optional_stages() {
    let inputs = lre_project::load(&designs_dir().join("engine_only.json"))
        .unwrap()
        .resolve()
        .unwrap();
    assert!(inputs.wall.is_none());
    assert!(inputs.injector.is_none());
    assert_eq!(inputs.chamber_policy.contraction_diameter_ratio, 4.0);
    assert_eq!(inputs.chamber_policy.convergent_volume_factor, 1.1);
    assert!((inputs.thrust.value - 88.964).abs() < 1e-2);
    assert!((inputs.l_star.value - 1.524).abs() < 1e-9);

    let out = size_engine(&inputs, &PengRobinsonModel::new()).unwrap();
    assert!(out.wall_thickness.is_none());
    assert!(relative_difference(out.chamber.length.value, 1.524 / (16.0 * 1.1)) < 1e-9);
}
