// Standard library
use std::process::ExitCode;
use uuid::Uuid;

// External crates
use clap::Parser;
use colored::Colorize;
use tracing::{debug, info_span};

// Internal imports
use helicone_core::{hc_error, hc_error_hint, hc_warning};
use helicone_logging::{init_subscriber, LogSettings};
use helicone_messages::{msg, MESSAGES};
use helicone_scaffold::ScaffoldError;

// Local modules
mod cli;
mod commands;
mod config;
mod error;
mod progress;

use cli::Args;
use commands::execute_command;
use config::{AppConfig, TEST_MODE_ENV};
use error::AppError;

fn main() -> ExitCode {
    let args = Args::parse();

    // Tests read stderr, so logging stays off in test mode
    let _log_guard = if std::env::var_os(TEST_MODE_ENV).is_none() {
        let filter = if args.debug { "debug" } else { "warn" };
        match init_subscriber(&LogSettings::from_env(filter)) {
            Ok(guard) => guard,
            Err(e) => {
                hc_warning!("Failed to initialize logging: {}", e);
                None
            }
        }
    } else {
        None
    };

    let run_id = Uuid::new_v4();
    let span = info_span!("create_helicone", run_id = %run_id);
    let _enter = span.enter();
    debug!(?args, "Starting create-helicone");

    let result = AppConfig::from_env()
        .map_err(AppError::from)
        .and_then(|config| execute_command(args, &config));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report_error(&e);
            ExitCode::FAILURE
        }
    }
}

fn report_error(err: &AppError) {
    match err {
        AppError::MissingProjectDirectory => {
            hc_error!("{}", MESSAGES.error_missing_directory.red());
            hc_error!(
                "{}",
                msg!(
                    MESSAGES.error_missing_directory_usage,
                    command = "create-helicone".cyan().to_string(),
                    example = "my-app".green().to_string()
                )
            );
        }
        AppError::Cancelled => {
            hc_error!("{}", MESSAGES.error_cancelled.red());
        }
        AppError::Scaffold(ScaffoldError::TargetNotEmpty { .. }) => {
            hc_error!("{}", msg!(MESSAGES.error_generic, error = err.to_string()).red());
            hc_error_hint!("{}", MESSAGES.error_target_not_empty_hint);
        }
        AppError::Scaffold(ScaffoldError::TemplateFetchFailed { .. }) => {
            hc_error!("{}", msg!(MESSAGES.error_generic, error = err.to_string()).red());
            hc_error_hint!("{}", MESSAGES.error_fetch_hint);
        }
        _ => {
            hc_error!("{}", msg!(MESSAGES.error_generic, error = err.to_string()).red());
        }
    }
}
