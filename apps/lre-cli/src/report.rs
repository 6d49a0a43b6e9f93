//! Console and JSON rendering of sizing results.

use lre_sizing::{DesignInputs, DesignOutputs};
use serde::Serialize;
use uom::si::area::{square_centimeter, square_millimeter};
use uom::si::length::millimeter;
use uom::si::mass_density::kilogram_per_cubic_meter;
use uom::si::mass_rate::kilogram_per_second;
use uom::si::pressure::megapascal;
use uom::si::thermodynamic_temperature::kelvin;
use uom::si::volume::cubic_centimeter;

#[derive(Serialize)]
struct SizingReport<'a> {
    design: &'a str,
    fluid_model: &'a str,
    outputs: &'a DesignOutputs,
}

pub fn render_json(design: &str, fluid_model: &str, outputs: &DesignOutputs) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&SizingReport {
        design,
        fluid_model,
        outputs,
    })
}

/// Human-readable report in engineering units.
pub fn render_text(
    design: &str,
    fluid_model: &str,
    inputs: &DesignInputs,
    out: &DesignOutputs,
) -> String {
    let mut lines = vec![
        format!("Design: {design} (fluid model: {fluid_model})"),
        String::new(),
    ];

    lines.push(format!("Total mass flow: {:.4} kg/s", out.flow.total.get::<kilogram_per_second>()));
    lines.push(format!("Fuel flow: {:.4} kg/s", out.flow.fuel.get::<kilogram_per_second>()));
    lines.push(format!("Oxidizer flow: {:.4} kg/s", out.flow.oxidizer.get::<kilogram_per_second>()));
    lines.push(format!("Oxidizer to fuel ratio: {:.4}", out.of_ratio));

    lines.push(format!("Chamber temperature: {:.4} K", inputs.chamber_temperature.get::<kelvin>()));
    lines.push(format!("Gas temperature at throat: {:.4} K", out.throat.temperature.get::<kelvin>()));
    lines.push(format!("Pressure at throat: {:.4} MPa", out.throat.pressure.get::<megapascal>()));
    lines.push(format!("Throat area: {:.4} cm^2", out.throat.area.get::<square_centimeter>()));
    lines.push(format!("Throat diameter: {:.4} mm", out.throat.diameter.get::<millimeter>()));

    lines.push(format!("Optimal expansion ratio: {:.4}", out.exit.expansion_ratio));
    lines.push(format!("Exit area: {:.4} cm^2", out.exit.area.get::<square_centimeter>()));
    lines.push(format!("Exit diameter: {:.4} mm", out.exit.diameter.get::<millimeter>()));

    lines.push(format!("Chamber volume: {:.4} cm^3", out.chamber.volume.get::<cubic_centimeter>()));
    lines.push(format!("Chamber diameter: {:.4} mm", out.chamber.diameter.get::<millimeter>()));
    lines.push(format!("Chamber length: {:.4} mm", out.chamber.length.get::<millimeter>()));

    if let Some(t) = out.wall_thickness {
        lines.push(format!("Chamber wall thickness: {:.4} mm", t.get::<millimeter>()));
    }

    if let Some(inj) = &out.injector {
        lines.push(format!("Fuel injector area: {:.4} mm^2", inj.fuel_area.get::<square_millimeter>()));
        lines.push(format!(
            "Oxidizer pressure at entrance: {:.4} MPa",
            inj.oxidizer.entrance_pressure.get::<megapascal>()
        ));
        lines.push(format!(
            "Oxidizer density at entrance: {:.4} kg/m^3",
            inj.oxidizer.entrance_density.get::<kilogram_per_cubic_meter>()
        ));
        lines.push(format!(
            "Oxidizer injector area: {:.4} mm^2",
            inj.oxidizer.area.get::<square_millimeter>()
        ));
    }

    lines.push(String::new());
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use lre_fluids::PengRobinsonModel;
    use lre_project::DesignFile;
    use lre_sizing::size_engine;

    fn reference() -> (DesignInputs, DesignOutputs) {
        let inputs = DesignFile::reference().resolve().unwrap();
        let outputs = size_engine(&inputs, &PengRobinsonModel::new()).unwrap();
        (inputs, outputs)
    }

    #[test]
    fn text_report_uses_engineering_units() {
        let (inputs, outputs) = reference();
        let text = render_text("preliminary_design", "peng-robinson", &inputs, &outputs);

        assert!(text.contains("Total mass flow: 0.0349 kg/s"));
        assert!(text.contains("Gas temperature at throat: 3131.8182 K"));
        assert!(text.contains("Pressure at throat: 1.1673 MPa"));
        assert!(text.contains("Throat area: 0.2904 cm^2"));
        assert!(text.contains("Throat diameter: 6.0812 mm"));
        assert!(text.contains("Chamber volume: 44.1475 cm^3"));
        assert!(text.contains("Chamber length: 55.2727 mm"));
        assert!(text.contains("Chamber wall thickness: 1.7087 mm"));
        assert!(text.contains("Oxidizer pressure at entrance: 2.7570 MPa"));
    }

    #[test]
    fn text_report_layout() {
        let (inputs, outputs) = reference();
        let text = render_text("preliminary_design", "peng-robinson", &inputs, &outputs);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Design: preliminary_design (fluid model: peng-robinson)");
        assert_eq!(lines[1], "");
        assert_eq!(lines[2], "Total mass flow: 0.0349 kg/s");
        assert_eq!(lines[5], "Oxidizer to fuel ratio: 2.5000");
        assert!(text.ends_with("mm^2\n"));
    }

    #[test]
    fn optional_lines_follow_outputs() {
        let (mut inputs, _) = reference();
        inputs.wall = None;
        inputs.injector = None;
        let outputs = size_engine(&inputs, &PengRobinsonModel::new()).unwrap();
        let text = render_text("engine", "ideal-gas", &inputs, &outputs);

        assert!(!text.contains("wall thickness"));
        assert!(!text.contains("injector"));
        assert!(text.contains("Chamber length"));
    }

    #[test]
    fn json_report_is_si() {
        let (_, outputs) = reference();
        let json = render_json("preliminary_design", "peng-robinson", &outputs).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["design"], "preliminary_design");
        let diameter = value["outputs"]["throat"]["diameter"].as_f64().unwrap();
        assert!((diameter - 6.081_157_5e-3).abs() < 1e-9);
        assert!(value["outputs"]["injector"]["oxidizer"]["area"].is_number());
        assert!(value["outputs"]["wall_thickness"].is_number());
    }
}
