//! Running totals for one in-progress order

use espco_catalog::CatalogEntry;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::container::Container;

/// Accumulated totals for one order.
///
/// Every accumulator only grows between resets. `Default` is the zero state
/// a new or reset order starts from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OrderState {
    pub(crate) total_space: Decimal,
    pub(crate) gift_box_item_space: Decimal,
    pub(crate) gift_box_inches: Decimal,
    pub(crate) gift_box_weight_flag: Decimal,
    pub(crate) weight_oz: Decimal,
    pub(crate) container: Option<Container>,
    pub(crate) container_weight_oz: Decimal,
    pub(crate) finalized: bool,
}

impl OrderState {
    /// Space of every item added, gift-box contents included.
    pub fn total_space(&self) -> Decimal {
        self.total_space
    }

    /// Space taken by gift-box contents alone.
    pub fn gift_box_item_space(&self) -> Decimal {
        self.gift_box_item_space
    }

    /// Summed stacking height of the gift boxes in the order.
    pub fn gift_box_inches(&self) -> Decimal {
        self.gift_box_inches
    }

    /// Summed physical-box codes. Above 12 means two or more separate boxes.
    pub fn gift_box_weight_flag(&self) -> Decimal {
        self.gift_box_weight_flag
    }

    /// Running weight in ounces; includes the container once finalized.
    pub fn weight_oz(&self) -> Decimal {
        self.weight_oz
    }

    /// Container chosen at finalization.
    pub fn container(&self) -> Option<Container> {
        self.container
    }

    /// Weight the chosen container added at finalization.
    pub fn container_weight_oz(&self) -> Decimal {
        self.container_weight_oz
    }

    pub fn is_finalized(&self) -> bool {
        self.finalized
    }

    /// Add `quantity` units of `entry` plus an order-level packaging extra.
    ///
    /// Gift-box codes scale with quantity: each unit is its own physical box.
    pub(crate) fn accumulate(
        &mut self,
        entry: &CatalogEntry,
        quantity: u32,
        extra_weight_oz: Decimal,
    ) {
        let units = Decimal::from(quantity);
        let space = entry.space_cost * units;

        self.total_space += space;
        self.weight_oz += entry.weight_cost_oz * units + extra_weight_oz;

        if entry.is_gift_box() {
            self.gift_box_item_space += space;
            self.gift_box_inches += entry.gift_box_inches * units;
            self.gift_box_weight_flag += entry.gift_box_physical_weight_oz * units;
        }
    }

    /// Record the chosen container and fold its weight into the running total.
    pub(crate) fn seal(&mut self, container: Container, weight_add_oz: Decimal) {
        self.container = Some(container);
        self.container_weight_oz = weight_add_oz;
        self.weight_oz += weight_add_oz;
        self.finalized = true;
    }
}
