use std::collections::HashMap;

use super::{Config, ConfigSource};

fn stable_source_label(source: ConfigSource) -> &'static str {
    match source {
        ConfigSource::Cli => "cli",
        ConfigSource::Config => "config",
        ConfigSource::Programmatic => "programmatic",
        ConfigSource::Default => "default",
    }
}

fn source_label(source: Option<&ConfigSource>) -> String {
    stable_source_label(source.copied().unwrap_or(ConfigSource::Default)).to_string()
}

impl Config {
    /// Get effective configuration as key-value pairs with source attribution
    #[must_use]
    pub fn effective_config(&self) -> HashMap<String, (String, String)> {
        let mut config = HashMap::new();

        let mut add_config = |key: &str, value: Option<String>| {
            if let Some(val) = value {
                let source = source_label(self.source_attribution.get(key));
                config.insert(key.to_string(), (val, source));
            }
        };

        add_config("output_format", self.defaults.output_format.clone());
        add_config("verbose", self.defaults.verbose.map(|v| v.to_string()));
        add_config("show_items", self.defaults.show_items.map(|v| v.to_string()));

        config
    }
}
