//! `espco catalog`

use anyhow::Result;

use super::output::render_catalog;
use crate::{Config, ItemCatalog};

/// List every catalog item and preset pack.
pub fn execute_catalog_command(config: &Config) -> Result<()> {
    let catalog = ItemCatalog::standard();
    println!(
        "{}",
        render_catalog(catalog.entries(), catalog.packs(), config.output_format())?
    );
    Ok(())
}
