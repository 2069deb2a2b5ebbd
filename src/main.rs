//! hirewatch - emails a digest of new job postings near a postal code.
//!
//! Main entry point for the hirewatch CLI.

mod adapters;
mod cli;
mod cmd_cache;
mod cmd_run;
mod cmd_validate;
mod cmd_watch;

use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, error, warn};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use hirewatch_config::{Config, ConfigLoader, ConfigValidator};

use crate::cli::{Cli, Commands};

/// Run failed after the configuration was accepted.
const EXIT_RUN_FAILURE: u8 = 1;
/// Configuration could not be loaded or is invalid.
const EXIT_CONFIG_ERROR: u8 = 2;

/// Initialize tracing with console and optional file output.
///
/// Log files are written to `<log_dir>` with daily rotation, keeping 30 files.
fn init_tracing(log_dir: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let file_layer = match log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)?;

            let file_appender = RollingFileAppender::builder()
                .rotation(Rotation::DAILY)
                .filename_prefix("hirewatch")
                .filename_suffix("log")
                .max_log_files(30)
                .build(dir)?;

            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

            // Keep the writer alive for the program duration
            static GUARD: std::sync::OnceLock<tracing_appender::non_blocking::WorkerGuard> =
                std::sync::OnceLock::new();
            let _ = GUARD.set(guard);

            Some(fmt::layer().with_writer(non_blocking).with_ansi(false))
        }
        None => None,
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(true).with_ansi(true))
        .with(file_layer)
        .try_init()?;

    Ok(())
}

fn fail(code: u8, message: impl std::fmt::Display) -> ExitCode {
    eprintln!("hirewatch: {}", message);
    ExitCode::from(code)
}

/// Log validation findings; an exit code when the run must not start.
fn check_config(config: &Config) -> Option<ExitCode> {
    let result = match ConfigValidator::validate(config) {
        Ok(result) => result,
        Err(e) => return Some(fail(EXIT_CONFIG_ERROR, e)),
    };
    for warning in &result.warnings {
        warn!("{}: {}", warning.path, warning.message);
    }
    for err in &result.errors {
        error!("{}: {}", err.path, err.message);
    }
    if result.is_valid() {
        None
    } else {
        Some(fail(EXIT_CONFIG_ERROR, "invalid configuration"))
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let dotenv = match ConfigLoader::load_dotenv(cli.env_file.as_deref()) {
        Ok(loaded) => loaded,
        Err(e) => return fail(EXIT_CONFIG_ERROR, e),
    };

    let (config_path, required) = cli.config_source();
    let config = match ConfigLoader::resolve(&config_path, required) {
        Ok(config) => config,
        Err(e) => return fail(EXIT_CONFIG_ERROR, e),
    };

    let command = cli.command.unwrap_or(Commands::Run);

    if let Commands::Validate = command {
        return match cmd_validate::validate(&config) {
            Ok(result) if result.is_valid() => ExitCode::SUCCESS,
            Ok(result) => fail(
                EXIT_CONFIG_ERROR,
                format!("{} configuration error(s)", result.errors.len()),
            ),
            Err(e) => fail(EXIT_CONFIG_ERROR, e),
        };
    }

    let log_dir = config
        .storage
        .log_to_file
        .then(|| config.storage.log_dir());
    if let Err(e) = init_tracing(log_dir.as_deref()) {
        eprintln!("hirewatch: file logging disabled: {}", e);
        let _ = init_tracing(None);
    }

    match &dotenv {
        Some(path) => debug!("Loaded environment from {}", path.display()),
        None => debug!("No .env file found"),
    }

    let outcome = match command {
        Commands::Run => {
            if let Some(code) = check_config(&config) {
                return code;
            }
            cmd_run::run_once(&config).await
        }
        Commands::Watch { schedule } => {
            if let Some(code) = check_config(&config) {
                return code;
            }
            let expr = schedule.unwrap_or_else(|| config.watch.schedule.clone());
            let schedule = match cmd_watch::parse_schedule(&expr) {
                Ok(schedule) => schedule,
                Err(e) => {
                    return fail(EXIT_CONFIG_ERROR, format!("invalid schedule '{}': {}", expr, e));
                }
            };
            cmd_watch::watch(&config, schedule).await
        }
        Commands::Cache { action } => cmd_cache::handle_cache_command(action, &config).await,
        Commands::Validate => Ok(()),
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => fail(EXIT_RUN_FAILURE, e),
    }
}
