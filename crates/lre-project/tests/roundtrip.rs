use lre_project::{DesignFile, ProjectError, load, load_json, load_yaml, save, save_json, save_yaml};
use lre_project::{Quantity, parse_quantity};
use proptest::prelude::*;

#[test]
fn roundtrip_yaml_reference() {
    let design = DesignFile::reference();
    let path = std::env::temp_dir().join("lre_project_roundtrip_reference.yaml");

    save_yaml(&path, &design).unwrap();
    let loaded = load_yaml(&path).unwrap();

    assert_eq!(design, loaded);
}

#[test]
fn roundtrip_json_reference() {
    let design = DesignFile::reference();
    let path = std::env::temp_dir().join("lre_project_roundtrip_reference.json");

    save_json(&path, &design).unwrap();
    let loaded = load_json(&path).unwrap();

    assert_eq!(design, loaded);
}

#[test]
fn save_and_load_dispatch_on_extension() {
    let design = DesignFile::reference();
    let path = std::env::temp_dir().join("lre_project_dispatch.yml");
    save(&path, &design).unwrap();
    assert_eq!(load(&path).unwrap(), design);

    let bad = std::env::temp_dir().join("lre_project_dispatch.txt");
    assert!(matches!(
        save(&bad, &design),
        Err(ProjectError::UnsupportedFormat { .. })
    ));
}

#[test]
fn invalid_design_is_not_saved() {
    let mut design = DesignFile::reference();
    design.engine.remove("gamma");
    let path = std::env::temp_dir().join("lre_project_invalid_not_saved.yaml");
    let _ = std::fs::remove_file(&path);

    assert!(matches!(
        save_yaml(&path, &design),
        Err(ProjectError::Validation(_))
    ));
    assert!(!path.exists());
}

#[test]
fn malformed_yaml_is_reported() {
    let path = std::env::temp_dir().join("lre_project_malformed.yaml");
    std::fs::write(&path, "version: one\nname: [\n").unwrap();
    assert!(matches!(load_yaml(&path), Err(ProjectError::Yaml(_))));
}

#[test]
fn missing_file_is_io_error() {
    let path = std::env::temp_dir().join("lre_project_does_not_exist.yaml");
    assert!(matches!(load(&path), Err(ProjectError::Io(_))));
}

proptest! {
    #[test]
    fn prop_prefixed_pressure_units_scale(v in 1e-3f64..1e4) {
        let text = format!("{v} kPa");
        let pa = parse_quantity(&text, Quantity::Pressure).unwrap();
        prop_assert!((pa - v * 1e3).abs() <= 1e-9 * pa);
    }
}
