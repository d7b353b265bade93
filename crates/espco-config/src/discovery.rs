use espco_utils::error::ConfigError;
use serde::Deserialize;
use std::collections::HashMap;
use std::env;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::{CONFIG_KEYS, CliArgs, Config, ConfigSource, Defaults};

/// Environment variable naming a config file to use instead of discovery.
pub const CONFIG_ENV_VAR: &str = "ESPCO_CONFIG";

/// Directory searched for upward from the working directory.
pub const CONFIG_DIR_NAME: &str = ".espco";

pub const CONFIG_FILE_NAME: &str = "config.toml";

/// TOML configuration file structure
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlConfig {
    defaults: Option<Defaults>,
}

impl Config {
    /// Discover and load configuration with precedence: CLI > file > defaults
    ///
    /// Uses the current working directory as the starting point for the
    /// upward search.
    pub fn discover(cli_args: &CliArgs) -> Result<Self, ConfigError> {
        let start_dir = env::current_dir().map_err(|e| ConfigError::DiscoveryFailed {
            reason: format!("cannot read current directory: {e}"),
        })?;
        Self::discover_from(&start_dir, cli_args)
    }

    /// Discover and load configuration starting from a specific directory
    ///
    /// The file is chosen in this order:
    /// 1. `--config <path>`
    /// 2. `ESPCO_CONFIG`
    /// 3. `.espco/config.toml` in `start_dir` or the nearest ancestor
    /// 4. `espco/config.toml` under the user's config directory
    pub fn discover_from(start_dir: &Path, cli_args: &CliArgs) -> Result<Self, ConfigError> {
        let mut source_attribution: HashMap<String, ConfigSource> = CONFIG_KEYS
            .iter()
            .map(|key| (key.to_string(), ConfigSource::Default))
            .collect();

        let mut defaults = Defaults::default();

        let config_path = Self::locate_config_file(start_dir, cli_args);

        if let Some(path) = &config_path {
            let file_config = Self::load_config_file(path)?;

            if let Some(file_defaults) = file_config.defaults {
                if file_defaults.output_format.is_some() {
                    defaults.output_format = file_defaults.output_format;
                    source_attribution.insert("output_format".to_string(), ConfigSource::Config);
                }
                if file_defaults.verbose.is_some() {
                    defaults.verbose = file_defaults.verbose;
                    source_attribution.insert("verbose".to_string(), ConfigSource::Config);
                }
                if file_defaults.show_items.is_some() {
                    defaults.show_items = file_defaults.show_items;
                    source_attribution.insert("show_items".to_string(), ConfigSource::Config);
                }
            }
        }

        // Apply CLI overrides (highest priority)
        if let Some(output_format) = &cli_args.output_format {
            defaults.output_format = Some(output_format.clone());
            source_attribution.insert("output_format".to_string(), ConfigSource::Cli);
        }
        if let Some(verbose) = cli_args.verbose {
            defaults.verbose = Some(verbose);
            source_attribution.insert("verbose".to_string(), ConfigSource::Cli);
        }
        if let Some(show_items) = cli_args.show_items {
            defaults.show_items = Some(show_items);
            source_attribution.insert("show_items".to_string(), ConfigSource::Cli);
        }

        let config = Self {
            defaults,
            config_path,
            source_attribution,
        };

        config.validate()?;

        Ok(config)
    }

    fn locate_config_file(start_dir: &Path, cli_args: &CliArgs) -> Option<PathBuf> {
        if let Some(explicit_path) = &cli_args.config_path {
            return Some(explicit_path.clone());
        }

        if let Some(env_path) = env::var_os(CONFIG_ENV_VAR).filter(|v| !v.is_empty()) {
            debug!(var = CONFIG_ENV_VAR, "Using config file from environment");
            return Some(PathBuf::from(env_path));
        }

        Self::discover_config_file_from(start_dir)
            .or_else(|| Self::user_config_file().filter(|path| path.is_file()))
    }

    /// Search upward from `start_dir` for `.espco/config.toml`
    ///
    /// Stops at repository root markers (.git, .hg, .svn) or the filesystem
    /// root.
    pub fn discover_config_file_from(start_dir: &Path) -> Option<PathBuf> {
        let mut current_dir = Some(start_dir);

        while let Some(dir) = current_dir {
            let config_path = dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME);
            if config_path.is_file() {
                return Some(config_path);
            }

            if dir.join(".git").exists() || dir.join(".hg").exists() || dir.join(".svn").exists()
            {
                break;
            }

            current_dir = dir.parent();
        }

        None
    }

    /// Per-user config file location, e.g. `~/.config/espco/config.toml`.
    pub fn user_config_file() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("espco").join(CONFIG_FILE_NAME))
    }

    /// Load configuration from TOML file
    fn load_config_file(path: &Path) -> Result<TomlConfig, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ConfigError::NotFound {
                    path: path.display().to_string(),
                }
            } else {
                ConfigError::InvalidFile(format!("{}: {e}", path.display()))
            }
        })?;

        let config: TomlConfig = toml::from_str(&content)
            .map_err(|e| ConfigError::InvalidFile(format!("{}: {e}", path.display())))?;

        debug!(path = %path.display(), "Loaded config file");
        Ok(config)
    }
}
