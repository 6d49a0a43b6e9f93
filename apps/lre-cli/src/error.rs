use lre_fluids::FluidError;
use lre_project::ProjectError;
use lre_sizing::PipelineError;
use std::path::PathBuf;
use thiserror::Error;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Project(#[from] ProjectError),

    #[error("Fluid model unavailable: {0}")]
    Fluid(#[from] FluidError),

    #[error("Sizing error: {0}")]
    Sizing(#[from] PipelineError),

    #[error("Report serialization failed: {0}")]
    Report(#[from] serde_json::Error),

    #[error("Refusing to overwrite {path} (use --force)")]
    Exists { path: PathBuf },
}
