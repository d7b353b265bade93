use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// How quotes and listings are written to stdout.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Deserialize,
    Serialize,
    strum::Display,
    strum::EnumString,
    strum::VariantNames,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Where a configuration value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfigSource {
    /// Value provided via CLI argument (highest precedence).
    Cli,
    /// Value loaded from a configuration file.
    Config,
    /// Value provided through `Config::builder()`.
    Programmatic,
    /// Built-in default value (lowest precedence).
    Default,
}

/// Main configuration structure
#[derive(Debug, Clone)]
pub struct Config {
    pub defaults: Defaults,
    /// File the values marked [`ConfigSource::Config`] were read from.
    pub config_path: Option<std::path::PathBuf>,
    /// Source attribution for each setting (for `espco config`).
    pub source_attribution: HashMap<String, ConfigSource>,
}

/// `[defaults]` section of `config.toml`.
///
/// Every field is optional in the file. `Defaults::default()` fills them in.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Defaults {
    /// `"text"` or `"json"`. Kept as a string so validation can name a bad value.
    pub output_format: Option<String>,
    pub verbose: Option<bool>,
    /// Print the item log above each quote.
    pub show_items: Option<bool>,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            output_format: Some(OutputFormat::Text.to_string()),
            verbose: Some(false),
            show_items: Some(true),
        }
    }
}

/// Keys reported by `effective_config`, in display order.
pub const CONFIG_KEYS: [&str; 3] = ["output_format", "verbose", "show_items"];
