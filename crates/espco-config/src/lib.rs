//! Configuration management for espco
//!
//! Hierarchical configuration with discovery and precedence:
//! CLI > file > defaults. The TOML file has a single `[defaults]` section:
//!
//! ```toml
//! [defaults]
//! output_format = "json"
//! verbose = false
//! show_items = true
//! ```

mod builder;
mod cli_args;
mod discovery;
mod model;
mod sources;
mod validation;

pub use builder::ConfigBuilder;
pub use cli_args::CliArgs;
pub use discovery::{CONFIG_DIR_NAME, CONFIG_ENV_VAR, CONFIG_FILE_NAME};
pub use model::*;

use std::str::FromStr;

impl Config {
    /// Output format after validation. Falls back to text if unset.
    #[must_use]
    pub fn output_format(&self) -> OutputFormat {
        self.defaults
            .output_format
            .as_deref()
            .and_then(|format| OutputFormat::from_str(format).ok())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn verbose(&self) -> bool {
        self.defaults.verbose.unwrap_or(false)
    }

    #[must_use]
    pub fn show_items(&self) -> bool {
        self.defaults.show_items.unwrap_or(true)
    }
}
