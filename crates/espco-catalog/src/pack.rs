//! Pack presets and resolved order lines

use rust_decimal::Decimal;
use serde::Serialize;

use crate::entry::CatalogEntry;

/// A preset selection the packer picks in one step, e.g. "12 Turnbuckle".
///
/// `quantity` counts catalog units, not pieces: turnbuckle and sliders are
/// catalogued per six pieces, fourseam per two.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pack {
    pub id: &'static str,
    pub description: &'static str,
    pub item_id: &'static str,
    pub quantity: u32,
    /// Packaging added for larger counts (bag reinforcement, dividers).
    pub extra_weight_oz: Decimal,
}

impl Pack {
    pub const fn new(
        id: &'static str,
        description: &'static str,
        item_id: &'static str,
        quantity: u32,
        extra_weight_oz: Decimal,
    ) -> Self {
        Self {
            id,
            description,
            item_id,
            quantity,
            extra_weight_oz,
        }
    }
}

/// A catalog entry with everything `add_item` needs, ready to accumulate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineItem {
    pub entry: &'static CatalogEntry,
    pub quantity: u32,
    pub extra_weight_oz: Decimal,
    /// Text for the display log.
    pub description: String,
}

impl LineItem {
    /// Line for `quantity` units of `entry` with no packaging extra.
    #[must_use]
    pub fn of(entry: &'static CatalogEntry, quantity: u32) -> Self {
        Self {
            entry,
            quantity,
            extra_weight_oz: Decimal::ZERO,
            description: describe(entry, quantity),
        }
    }
}

/// Log text used when items are added by id rather than by pack.
#[must_use]
pub fn describe(entry: &CatalogEntry, quantity: u32) -> String {
    format!("{quantity} x {} added", entry.name)
}
