use espco_utils::error::ConfigError;
use std::collections::HashMap;

use super::{CONFIG_KEYS, Config, ConfigSource, Defaults, OutputFormat};

impl Config {
    /// Create a builder for programmatic configuration.
    ///
    /// No file is read and no environment variable is consulted.
    ///
    /// # Example
    ///
    /// ```rust
    /// use espco_config::{Config, OutputFormat};
    ///
    /// let config = Config::builder()
    ///     .output_format(OutputFormat::Json)
    ///     .show_items(false)
    ///     .build()
    ///     .expect("Failed to build config");
    ///
    /// assert_eq!(config.output_format(), OutputFormat::Json);
    /// ```
    #[must_use]
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }
}

/// Builder for programmatic configuration of espco.
///
/// All values set via the builder are attributed to
/// `ConfigSource::Programmatic`.
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    output_format: Option<OutputFormat>,
    verbose: Option<bool>,
    show_items: Option<bool>,
}

impl ConfigBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = Some(format);
        self
    }

    #[must_use]
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = Some(verbose);
        self
    }

    #[must_use]
    pub fn show_items(mut self, show_items: bool) -> Self {
        self.show_items = Some(show_items);
        self
    }

    /// Build the `Config` from the builder values.
    ///
    /// Unset values fall back to `Defaults::default()`. The result is
    /// validated before being returned.
    pub fn build(self) -> Result<Config, ConfigError> {
        let mut source_attribution: HashMap<String, ConfigSource> = CONFIG_KEYS
            .iter()
            .map(|key| (key.to_string(), ConfigSource::Default))
            .collect();

        let mut defaults = Defaults::default();

        if let Some(format) = self.output_format {
            defaults.output_format = Some(format.to_string());
            source_attribution.insert("output_format".to_string(), ConfigSource::Programmatic);
        }

        if let Some(verbose) = self.verbose {
            defaults.verbose = Some(verbose);
            source_attribution.insert("verbose".to_string(), ConfigSource::Programmatic);
        }

        if let Some(show_items) = self.show_items {
            defaults.show_items = Some(show_items);
            source_attribution.insert("show_items".to_string(), ConfigSource::Programmatic);
        }

        let config = Config {
            defaults,
            config_path: None,
            source_attribution,
        };

        config.validate()?;

        Ok(config)
    }
}
