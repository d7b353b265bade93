//! CLI argument definitions and parsing structures

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// espco - shipping container and weight calculator
#[derive(Parser, Debug)]
#[command(name = "espco")]
#[command(about = "Pick a shipping container and weigh an order from the item catalog")]
#[command(long_about = r#"
espco turns a list of catalog items into a shipping container label and a
packed weight in pounds and ounces.

EXAMPLES:
  # List item and pack ids
  espco catalog

  # Quote one order: two gift boxes and a dozen wheelhouse
  espco quote love saucy-single wheelhouse-12

  # Give an exact item count instead of a pack
  espco quote wheelhouse:8 sauce

  # Packing-station loop on stdin
  espco session

CONFIGURATION:
  Configuration is loaded with precedence: CLI flags > config file > defaults
  Config file is discovered by searching upward from CWD for .espco/config.toml
  ESPCO_CONFIG or --config name an explicit file
"#)]
#[command(version)]
pub struct Cli {
    /// Path to configuration file (overrides discovery)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Emit canonical JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Leave the item list out of quotes
    #[arg(long, global = true)]
    pub no_items: bool,

    /// Enable verbose logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List catalog items and preset packs
    Catalog,

    /// Quote a single order
    ///
    /// Each token is a pack id (e.g. `bites-4`, `love`) or `item-id[:qty]`.
    ///
    /// EXAMPLES:
    ///   espco quote wheelhouse-24 sauce-combo
    ///   espco quote true-love topknot:3
    Quote {
        /// Pack ids or item-id[:qty] tokens
        #[arg(required = true, value_name = "TOKEN")]
        tokens: Vec<String>,
    },

    /// Read packer commands from stdin, one order after another
    ///
    /// Commands: add <token>..., calc, new, list, help, quit.
    /// A line that starts with a token is treated as `add`.
    Session,

    /// Show the effective configuration and where each value came from
    Config,
}

/// Build the clap command (used for help output and completion generation)
#[must_use]
pub fn build_cli() -> clap::Command {
    <Cli as clap::CommandFactory>::command()
}
