//! Kongen CLI
//!
//! Command-line interface for generating Kong gateway configuration from
//! API specifications.

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use kongen_converter::KongConverter;
use kongen_pipeline::{generate_config, GenerateConfigRequest};
use kongen_store::DirStore;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Default specification store directory, relative to the working directory
const DEFAULT_APP_DATA_DIR: &str = ".kongen";

#[derive(Parser)]
#[command(name = "kongen")]
#[command(version, about = "Generate Kong gateway configuration from API specifications", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Directory specification identifiers and relative paths resolve against
    #[arg(short = 'w', long, global = true, default_value = ".")]
    working_dir: PathBuf,

    /// Specification store directory (defaults to .kongen under the working directory)
    #[arg(long, global = true)]
    app_data_dir: Option<PathBuf>,

    /// Run non-interactively, e.g. in CI pipelines
    #[arg(long, global = true)]
    ci: bool,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate deployment configuration from an API specification
    #[command(after_help = "EXAMPLES:\n  \
        # Generate declarative config from a stored specification\n  \
        kongen generate-config petstore --type declarative\n\n  \
        # Generate Kubernetes manifests from a file, written to kong.yaml\n  \
        kongen generate-config specs/petstore.yaml --type kubernetes --output kong.yaml\n\n  \
        # Choose a stored specification interactively\n  \
        kongen generate-config")]
    GenerateConfig {
        /// Specification identifier: a store entry or a file path (prompts when omitted)
        identifier: Option<String>,

        /// Output kind to generate
        #[arg(short = 't', long = "type", default_value = "declarative")]
        kind: String,

        /// File to write the configuration to (stdout if not specified)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    match cli.command {
        Commands::GenerateConfig {
            identifier,
            kind,
            output,
        } => {
            let app_data_dir = cli
                .app_data_dir
                .unwrap_or_else(|| cli.working_dir.join(DEFAULT_APP_DATA_DIR));
            let store = DirStore::new(app_data_dir);
            let converter = KongConverter::new();

            let request = GenerateConfigRequest {
                identifier,
                output_kind: kind,
                output,
                working_dir: cli.working_dir,
                ci: cli.ci,
            };

            // The pipeline reports its own failures; only the outcome is
            // mapped here.
            if generate_config(&request, &store, &converter) {
                Ok(ExitCode::SUCCESS)
            } else {
                Ok(ExitCode::FAILURE)
            }
        }
    }
}

/// Install the diagnostic subscriber; `--verbose` raises the filter to trace
fn init_tracing(verbose: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("trace")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow!("failed to install tracing subscriber: {e}"))
}
