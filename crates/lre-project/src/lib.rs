//! lre-project: engine design files, unit-aware values and validation.
//!
//! A design file (YAML or JSON) is loaded into a [`DesignFile`], checked
//! against the declarative field tables in [`rules`] and resolved into
//! [`lre_sizing::DesignInputs`].

pub mod rules;
pub mod schema;
pub mod units;
pub mod validate;

pub use rules::{Bound, FieldRule};
pub use schema::*;
pub use units::{Quantity, UnitError, parse_quantity};
pub use validate::{ValidationError, validate_design};

use std::path::Path;
use tracing::info;

pub type ProjectResult<T> = Result<T, ProjectError>;

#[derive(thiserror::Error, Debug)]
pub enum ProjectError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unsupported design file format: {path} (expected .yaml, .yml or .json)")]
    UnsupportedFormat { path: String },
}

/// On-disk encoding, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DesignFormat {
    Yaml,
    Json,
}

impl DesignFormat {
    pub fn from_path(path: &Path) -> ProjectResult<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match ext.as_deref() {
            Some("yaml" | "yml") => Ok(DesignFormat::Yaml),
            Some("json") => Ok(DesignFormat::Json),
            _ => Err(ProjectError::UnsupportedFormat {
                path: path.display().to_string(),
            }),
        }
    }
}

/// Load and validate a design file of either format.
pub fn load(path: &Path) -> ProjectResult<DesignFile> {
    match DesignFormat::from_path(path)? {
        DesignFormat::Yaml => load_yaml(path),
        DesignFormat::Json => load_json(path),
    }
}

/// Write a validated design file in the format implied by `path`.
pub fn save(path: &Path, design: &DesignFile) -> ProjectResult<()> {
    match DesignFormat::from_path(path)? {
        DesignFormat::Yaml => save_yaml(path, design),
        DesignFormat::Json => save_json(path, design),
    }
}

pub fn load_yaml(path: &Path) -> ProjectResult<DesignFile> {
    info!(path = %path.display(), "loading design file");
    let content = std::fs::read_to_string(path)?;
    let design: DesignFile = serde_yaml::from_str(&content)?;
    validate_design(&design)?;
    Ok(design)
}

pub fn save_yaml(path: &Path, design: &DesignFile) -> ProjectResult<()> {
    validate_design(design)?;
    let content = serde_yaml::to_string(design)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn load_json(path: &Path) -> ProjectResult<DesignFile> {
    info!(path = %path.display(), "loading design file");
    let content = std::fs::read_to_string(path)?;
    let design: DesignFile = serde_json::from_str(&content)?;
    validate_design(&design)?;
    Ok(design)
}

pub fn save_json(path: &Path, design: &DesignFile) -> ProjectResult<()> {
    validate_design(design)?;
    let content = serde_json::to_string_pretty(design)?;
    std::fs::write(path, content)?;
    Ok(())
}
