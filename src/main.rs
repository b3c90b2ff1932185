//! adtkit - workload runner.
//!
//! Loads the configuration, drives the configured containers through an
//! insert/overwrite/remove workload and prints a JSON report.

use adtkit::config::{AdtKitConfig, ConfigLoader, LogConfig, ENV_PREFIX};
use adtkit::error::{AdtKitError, AdtKitResult, ErrorContext, ErrorReporter, TracingErrorReporter};
use adtkit::workload::run_workload;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Command line arguments for adtkit.
#[derive(Parser, Debug)]
#[clap(name = "adtkit", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Option<Command>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Run the workload and print a JSON report
    Run,

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// Initialize the logging system.
///
/// `RUST_LOG` wins over the configured level when it is set.
fn init_logging(log: &LogConfig) -> AdtKitResult<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_file(log.source_location)
        .with_line_number(log.source_location);

    let result = if log.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    };
    result.map_err(|e| AdtKitError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

fn fail(component: &str, error: AdtKitError) -> ! {
    TracingErrorReporter.report(ErrorContext::new(error, component));
    process::exit(1);
}

/// Main entry point for the application.
fn main() -> AdtKitResult<()> {
    let args = Args::parse();
    let loader = ConfigLoader::new(args.config.as_deref(), ENV_PREFIX);

    // Logging depends on the configuration, so a broken configuration is
    // reported with the default log settings.
    let loaded = loader.load();
    let log = loaded
        .as_ref()
        .map(|config| config.log.clone())
        .unwrap_or_default();
    init_logging(&log)?;

    match args.command.unwrap_or(Command::Run) {
        Command::Run => {
            let config = loaded.unwrap_or_else(|e| fail("config", e.into()));
            let report = run_workload(&config).unwrap_or_else(|e| fail("workload", e));
            println!("{}", serde_json::to_string_pretty(&report)?);

            if !report.verified {
                fail(
                    "workload",
                    AdtKitError::Custom(format!("{} failed verification", report.implementation)),
                );
            }
            Ok(())
        }
        Command::Validate => {
            info!("Validating configuration");
            match loaded {
                Ok(_) => {
                    info!("Configuration validated successfully");
                    Ok(())
                }
                Err(e) => fail("config", e.into()),
            }
        }
        Command::GenConfig { output } => {
            info!("Generating default configuration");

            if let Some(parent) = output.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&output, AdtKitConfig::default().to_toml()?)?;

            info!("Default configuration written to {:?}", output);
            Ok(())
        }
    }
}
