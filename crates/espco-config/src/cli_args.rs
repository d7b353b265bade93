use std::path::PathBuf;

/// CLI arguments that feed configuration.
///
/// Every field is optional so that an unset flag leaves the config file or
/// default in place.
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    pub config_path: Option<PathBuf>,
    pub output_format: Option<String>,
    pub verbose: Option<bool>,
    pub show_items: Option<bool>,
}
