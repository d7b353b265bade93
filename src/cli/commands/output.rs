//! Text and canonical JSON rendering shared by the commands

use anyhow::{Context, Result};
use serde::Serialize;
use std::collections::BTreeMap;

use crate::{CatalogEntry, Config, OutputFormat, Pack, Quote, emit_jcs};

/// JSON shape of a quote, with the item log when enabled.
#[derive(Serialize)]
struct QuoteOutput<'a> {
    #[serde(flatten)]
    quote: &'a Quote,
    #[serde(skip_serializing_if = "Option::is_none")]
    items: Option<&'a [String]>,
}

#[derive(Serialize)]
struct CatalogOutput {
    entries: &'static [CatalogEntry],
    packs: &'static [Pack],
}

#[derive(Serialize)]
struct ConfigValue {
    value: String,
    source: String,
}

#[derive(Serialize)]
struct ConfigOutput {
    config_path: Option<String>,
    values: BTreeMap<String, ConfigValue>,
}

/// Render a finalized order the way `config` asks for.
pub fn render_quote(quote: &Quote, items: &[String], config: &Config) -> Result<String> {
    let items = config.show_items().then_some(items);

    match config.output_format() {
        OutputFormat::Json => {
            emit_jcs(&QuoteOutput { quote, items }).context("Failed to emit quote JSON")
        }
        OutputFormat::Text => {
            let mut out = String::new();
            if let Some(items) = items.filter(|items| !items.is_empty()) {
                out.push_str("Items:\n");
                for item in items {
                    out.push_str(&format!("  {item}\n"));
                }
            }
            out.push_str(&quote.to_string());
            Ok(out)
        }
    }
}

pub fn render_catalog(
    entries: &'static [CatalogEntry],
    packs: &'static [Pack],
    format: OutputFormat,
) -> Result<String> {
    match format {
        OutputFormat::Json => {
            emit_jcs(&CatalogOutput { entries, packs }).context("Failed to emit catalog JSON")
        }
        OutputFormat::Text => {
            let id_width = entries
                .iter()
                .map(|e| e.id.len())
                .chain(packs.iter().map(|p| p.id.len()))
                .max()
                .unwrap_or(0);

            let mut out = String::from("Items:\n");
            for entry in entries {
                out.push_str(&format!(
                    "  {:<id_width$}  {:<9}  {}\n",
                    entry.id,
                    entry.kind.to_string(),
                    entry.name
                ));
            }
            out.push_str("\nPacks:\n");
            for pack in packs {
                out.push_str(&format!("  {:<id_width$}  {}\n", pack.id, pack.description));
            }
            Ok(out.trim_end().to_string())
        }
    }
}

pub fn render_config(config: &Config) -> Result<String> {
    let effective = config.effective_config();
    let config_path = config
        .config_path
        .as_ref()
        .map(|path| path.display().to_string());

    match config.output_format() {
        OutputFormat::Json => {
            let values = effective
                .into_iter()
                .map(|(key, (value, source))| (key, ConfigValue { value, source }))
                .collect();
            emit_jcs(&ConfigOutput {
                config_path,
                values,
            })
            .context("Failed to emit config JSON")
        }
        OutputFormat::Text => {
            let mut out = format!(
                "Config file: {}\n",
                config_path.as_deref().unwrap_or("(none)")
            );
            for key in espco_config::CONFIG_KEYS {
                if let Some((value, source)) = effective.get(key) {
                    out.push_str(&format!("  {key} = {value} ({source})\n"));
                }
            }
            Ok(out.trim_end().to_string())
        }
    }
}
