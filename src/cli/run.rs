//! CLI entry point and dispatch logic
//!
//! This module owns the `run()` function which:
//! - Parses CLI arguments
//! - Builds CliArgs and discovers Config
//! - Installs logging
//! - Dispatches to command handlers
//! - Handles all error output

use clap::Parser;

use super::args::{Cli, Commands};
use super::commands;

use crate::{CliArgs, Config, EspcoError, ExitCode, OutputFormat};
use espco_utils::logging::init_tracing;

/// Main CLI execution function.
///
/// Handles ALL output including errors and returns `Err(ExitCode)` on
/// failure. main.rs only maps the code to a process exit.
pub fn run() -> Result<(), ExitCode> {
    let cli = Cli::parse();

    let cli_args = CliArgs {
        config_path: cli.config.clone(),
        output_format: cli.json.then(|| OutputFormat::Json.to_string()),
        verbose: cli.verbose.then_some(true),
        show_items: cli.no_items.then_some(false),
    };

    let config = match Config::discover(&cli_args) {
        Ok(config) => config,
        Err(err) => {
            let err = EspcoError::from(err);
            eprintln!("{}", err.display_for_user());
            return Err(err.to_exit_code());
        }
    };

    // A second subscriber only happens when embedded; keep going without logs.
    if let Err(e) = init_tracing(config.verbose()) {
        eprintln!("Warning: logging not initialized: {e}");
    }

    let result = match cli.command {
        Commands::Catalog => commands::execute_catalog_command(&config),
        Commands::Quote { tokens } => commands::execute_quote_command(&tokens, &config),
        Commands::Session => commands::execute_session_command(&config),
        Commands::Config => commands::execute_config_command(&config),
    };

    if let Err(error) = result {
        if let Some(espco_error) = error.downcast_ref::<EspcoError>() {
            eprintln!("{}", espco_error.display_for_user());
            return Err(espco_error.to_exit_code());
        }

        eprintln!("✗ Unexpected error: {error:#}");
        return Err(ExitCode::INTERNAL);
    }

    Ok(())
}
