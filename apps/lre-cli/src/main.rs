mod error;
mod report;

use clap::{Parser, Subcommand, ValueEnum};
use error::{CliError, CliResult};
use lre_fluids::FluidBackend;
use lre_project::DesignFile;
use lre_sizing::size_engine;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "lre-cli")]
#[command(about = "Preliminary liquid rocket engine sizing", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a design file and list the stages it enables
    Validate {
        /// Path to the design file (.yaml, .yml or .json)
        design_path: PathBuf,
    },
    /// Size an engine from a design file
    Size {
        /// Path to the design file (.yaml, .yml or .json)
        design_path: PathBuf,
        /// Density model for the oxidizer lookup
        #[arg(long, default_value_t = FluidBackend::PengRobinson)]
        fluid_model: FluidBackend,
        /// Report format
        #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
        format: ReportFormat,
    },
    /// Write the reference design file
    Init {
        /// Output path (.yaml, .yml or .json)
        path: PathBuf,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ReportFormat {
    Text,
    Json,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Validate { design_path } => cmd_validate(&design_path),
        Commands::Size {
            design_path,
            fluid_model,
            format,
        } => cmd_size(&design_path, fluid_model, format),
        Commands::Init { path, force } => cmd_init(&path, force),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn cmd_validate(design_path: &Path) -> CliResult<()> {
    println!("Validating design: {}", design_path.display());
    let design = lre_project::load(design_path)?;
    let inputs = design.resolve()?;
    println!("✓ Design '{}' is valid", design.name);
    println!("Stages:");
    for stage in inputs.stages() {
        println!("  {stage}");
    }
    Ok(())
}

fn cmd_size(design_path: &Path, backend: FluidBackend, format: ReportFormat) -> CliResult<()> {
    let design = lre_project::load(design_path)?;
    let inputs = design.resolve()?;
    let fluids = backend.build()?;
    info!(design = %design.name, fluid_model = backend.key(), "sizing design");
    let outputs = size_engine(&inputs, fluids.as_ref())?;

    let rendered = match format {
        ReportFormat::Text => report::render_text(&design.name, backend.key(), &inputs, &outputs),
        ReportFormat::Json => report::render_json(&design.name, backend.key(), &outputs)?,
    };
    println!("{rendered}");
    Ok(())
}

fn cmd_init(path: &Path, force: bool) -> CliResult<()> {
    if path.exists() && !force {
        return Err(CliError::Exists {
            path: path.to_path_buf(),
        });
    }
    lre_project::save(path, &DesignFile::reference())?;
    println!("✓ Wrote reference design to {}", path.display());
    Ok(())
}
