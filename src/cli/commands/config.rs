//! `espco config`

use anyhow::Result;

use super::output::render_config;
use crate::Config;

pub fn execute_config_command(config: &Config) -> Result<()> {
    println!("{}", render_config(config)?);
    Ok(())
}
