//! Catalog entry types

use rust_decimal::Decimal;
use serde::Serialize;

/// Whether an entry ships loose in the order container or as a gift box.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, strum::Display, strum::EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum ItemKind {
    Loose,
    GiftBox,
}

/// One immutable catalog row.
///
/// Space is a dimensionless packing-volume unit calibrated by hand per item.
/// For gift boxes `space_cost` is the space of the box contents: it counts
/// towards the order like any other item while the box ships alone, and is
/// subtracted again once two or more boxes ship as separate units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    pub id: &'static str,
    pub name: &'static str,
    pub kind: ItemKind,
    pub space_cost: Decimal,
    pub weight_cost_oz: Decimal,
    /// Stacking height of the gift box in vertical inches (0 for loose items).
    pub gift_box_inches: Decimal,
    /// Physical box weight code, 9 to 12 for gift boxes (0 for loose items).
    /// Summed across an order it flags more than one separate box.
    pub gift_box_physical_weight_oz: Decimal,
}

impl CatalogEntry {
    pub const fn loose(
        id: &'static str,
        name: &'static str,
        space_cost: Decimal,
        weight_cost_oz: Decimal,
    ) -> Self {
        Self {
            id,
            name,
            kind: ItemKind::Loose,
            space_cost,
            weight_cost_oz,
            gift_box_inches: Decimal::ZERO,
            gift_box_physical_weight_oz: Decimal::ZERO,
        }
    }

    pub const fn gift_box(
        id: &'static str,
        name: &'static str,
        space_cost: Decimal,
        weight_cost_oz: Decimal,
        gift_box_inches: Decimal,
        gift_box_physical_weight_oz: Decimal,
    ) -> Self {
        Self {
            id,
            name,
            kind: ItemKind::GiftBox,
            space_cost,
            weight_cost_oz,
            gift_box_inches,
            gift_box_physical_weight_oz,
        }
    }

    #[must_use]
    pub fn is_gift_box(&self) -> bool {
        self.kind == ItemKind::GiftBox
    }
}
