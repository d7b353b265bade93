use espco_utils::error::ConfigError;
use std::str::FromStr;
use strum::VariantNames;

use super::{Config, OutputFormat};

impl Config {
    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(format) = &self.defaults.output_format
            && OutputFormat::from_str(format).is_err()
        {
            return Err(ConfigError::InvalidValue {
                key: "output_format".to_string(),
                value: format!(
                    "'{format}' is not one of: {}",
                    OutputFormat::VARIANTS.join(", ")
                ),
            });
        }

        Ok(())
    }
}
