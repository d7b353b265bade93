//! espco - shipping container and weight calculator for order fulfillment
//!
//! A packer adds items from a fixed catalog to an order, then asks for a
//! determination: which shipping container to use and what the packed order
//! weighs, in whole pounds and ounces.
//!
//! espco can be used in two ways:
//! - **CLI**: `espco quote love saucy-single`, or `espco session` for the
//!   interactive packing-station loop
//! - **Library**: drive an [`Order`] directly
//!
//! # Quick Start (Library)
//!
//! ```rust
//! use espco::{ItemCatalog, Order};
//!
//! let catalog = ItemCatalog::standard();
//! let mut order = Order::new();
//! order.add_pack(catalog.pack("love")?)?;
//! order.add_pack(catalog.pack("saucy-single")?)?;
//!
//! let quote = order.finalize()?;
//! assert_eq!(quote.label, "12×12×10 Box");
//! assert_eq!(quote.weight_display(), "5 lb., 3 oz.");
//! # Ok::<(), espco::EspcoError>(())
//! ```
//!
//! # JSON Contracts
//!
//! espco emits JSON in JCS (RFC 8785) canonical form so that identical
//! orders print byte-identical output. Use [`emit_jcs`] for your own
//! integrations.
//!
//! # Stable Public API
//!
//! - [`Order`], [`Quote`], [`OrderState`] - order accumulation and results
//! - [`ItemCatalog`], [`CatalogEntry`], [`Pack`] - the built-in catalog
//! - [`Container`], [`select_container`] - container selection
//! - [`Config`] and [`ConfigBuilder`] - configuration management
//! - [`EspcoError`] - library error type
//! - [`ExitCode`] - CLI exit codes

// ============================================================================
// Stable Public API - covered by semver guarantees for 1.x
// ============================================================================

pub use espco_catalog::{CatalogEntry, ItemCatalog, ItemKind, LineItem, Pack};

pub use espco_engine::{
    Container, ItemLog, Order, OrderState, Quote, Selection, SelectionPath, select_container,
    to_pounds_ounces,
};

pub use espco_config::{CliArgs, Config, ConfigBuilder, ConfigSource, OutputFormat};

pub use espco_utils::canonicalization::emit_jcs;
pub use espco_utils::error::{EspcoError, UserFriendlyError};
pub use espco_utils::exit_codes::ExitCode;

// ============================================================================
// Internal modules - accessible but not covered by semver guarantees
// ============================================================================

#[doc(hidden)]
pub mod error {
    pub use espco_utils::error::*;
}

#[doc(hidden)]
pub mod logging {
    pub use espco_utils::logging::*;
}

pub mod cli;
