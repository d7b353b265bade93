//! Order accumulation
//!
//! [`Order`] owns the state of the one order being packed. Items are added
//! until [`Order::finalize`] picks a container; after that the order only
//! accepts [`Order::reset`].

use espco_catalog::{CatalogEntry, ItemCatalog, LineItem, Pack, describe};
use espco_utils::error::OrderError;
use espco_utils::logging::order_span;
use rust_decimal::Decimal;
use tracing::{debug, info, warn};

use crate::log::ItemLog;
use crate::quote::Quote;
use crate::selector::select_container;
use crate::state::OrderState;

/// A single in-progress order.
#[derive(Debug)]
pub struct Order {
    catalog: &'static ItemCatalog,
    state: OrderState,
    log: ItemLog,
    /// Starts at 1 and advances on each reset. Used only for log context.
    order_no: u64,
}

impl Default for Order {
    fn default() -> Self {
        Self::new()
    }
}

impl Order {
    /// Start an empty order against the built-in catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::with_catalog(ItemCatalog::standard())
    }

    #[must_use]
    pub fn with_catalog(catalog: &'static ItemCatalog) -> Self {
        Self {
            catalog,
            state: OrderState::default(),
            log: ItemLog::default(),
            order_no: 1,
        }
    }

    pub fn catalog(&self) -> &'static ItemCatalog {
        self.catalog
    }

    pub fn state(&self) -> &OrderState {
        &self.state
    }

    /// Lines added since the last reset, oldest first.
    pub fn display_log(&self) -> &[String] {
        self.log.lines()
    }

    pub fn order_no(&self) -> u64 {
        self.order_no
    }

    /// Add `quantity` units of `entry`.
    ///
    /// `extra_weight_oz` is packaging charged once for the whole line rather
    /// than per unit. Nothing changes if an error is returned.
    ///
    /// # Errors
    ///
    /// * [`OrderError::InvalidSequence`] if the order is already finalized.
    /// * [`OrderError::InvalidQuantity`] if `quantity` is zero.
    /// * [`OrderError::NegativeExtraWeight`] if `extra_weight_oz` is below zero.
    pub fn add_item(
        &mut self,
        entry: &CatalogEntry,
        quantity: u32,
        extra_weight_oz: Decimal,
    ) -> Result<(), OrderError> {
        let description = describe(entry, quantity);
        self.accumulate(entry, quantity, extra_weight_oz, description)
    }

    /// Look up `catalog_id` and add it as [`Order::add_item`] would.
    ///
    /// # Errors
    ///
    /// [`OrderError::Catalog`] for an unknown id, otherwise as `add_item`.
    pub fn add_by_id(
        &mut self,
        catalog_id: &str,
        quantity: u32,
        extra_weight_oz: Decimal,
    ) -> Result<(), OrderError> {
        self.ensure_open("add items to")?;
        let entry = self.catalog.entry(catalog_id)?;
        self.add_item(entry, quantity, extra_weight_oz)
    }

    /// Add a preset pack, logging the pack's own description.
    ///
    /// # Errors
    ///
    /// As [`Order::add_item`], or [`OrderError::Catalog`] if the pack names an
    /// item the catalog does not hold.
    pub fn add_pack(&mut self, pack: &Pack) -> Result<(), OrderError> {
        self.ensure_open("add items to")?;
        let line = self.catalog.pack_line(pack)?;
        self.add_line(&line)
    }

    /// Add a resolved line, e.g. from [`ItemCatalog::resolve`].
    ///
    /// # Errors
    ///
    /// As [`Order::add_item`].
    pub fn add_line(&mut self, line: &LineItem) -> Result<(), OrderError> {
        self.accumulate(
            line.entry,
            line.quantity,
            line.extra_weight_oz,
            line.description.clone(),
        )
    }

    /// Choose the container, fold its weight into the total, and report.
    ///
    /// # Errors
    ///
    /// * [`OrderError::InvalidSequence`] if called twice without a reset;
    ///   the container weight is never counted twice.
    /// * [`OrderError::WeightOutOfRange`] if the packed weight is too large
    ///   to report. The order stays open.
    pub fn finalize(&mut self) -> Result<Quote, OrderError> {
        let span = order_span(self.order_no);
        let _enter = span.enter();

        self.ensure_open("finalize")?;

        let selection = select_container(&self.state);
        let total_weight_oz = self.state.weight_oz + selection.weight_add_oz;
        let Some(quote) = Quote::new(selection, total_weight_oz, self.log.len()) else {
            warn!(weight_oz = %total_weight_oz, "Rejected weight outside reportable range");
            return Err(OrderError::WeightOutOfRange {
                weight_oz: total_weight_oz.to_string(),
            });
        };
        self.state.seal(selection.container, selection.weight_add_oz);

        info!(
            path = %quote.path,
            container = quote.container.id(),
            weight_oz = %quote.total_weight_oz,
            pounds = quote.pounds,
            ounces = quote.ounces,
            "Order finalized"
        );

        Ok(quote)
    }

    /// Clear every total and the display log. Safe to call repeatedly.
    pub fn reset(&mut self) {
        let dirty = self.state != OrderState::default() || !self.log.is_empty();
        self.state = OrderState::default();
        self.log.clear();
        if dirty {
            self.order_no += 1;
        }
        debug!(order_no = self.order_no, "Order reset");
    }

    fn accumulate(
        &mut self,
        entry: &CatalogEntry,
        quantity: u32,
        extra_weight_oz: Decimal,
        description: String,
    ) -> Result<(), OrderError> {
        self.ensure_open("add items to")?;

        if quantity == 0 {
            warn!(item = entry.id, "Rejected zero quantity");
            return Err(OrderError::InvalidQuantity { quantity });
        }
        if extra_weight_oz < Decimal::ZERO {
            warn!(
                item = entry.id,
                extra_weight_oz = %extra_weight_oz,
                "Rejected negative extra weight"
            );
            return Err(OrderError::NegativeExtraWeight {
                extra_weight_oz: extra_weight_oz.to_string(),
            });
        }

        self.state.accumulate(entry, quantity, extra_weight_oz);
        self.log.push(description);

        debug!(
            order_no = self.order_no,
            item = entry.id,
            quantity = quantity,
            total_space = %self.state.total_space,
            gift_box_inches = %self.state.gift_box_inches,
            gift_box_weight_flag = %self.state.gift_box_weight_flag,
            weight_oz = %self.state.weight_oz,
            "Item added"
        );
        Ok(())
    }

    fn ensure_open(&self, operation: &str) -> Result<(), OrderError> {
        if self.state.finalized {
            warn!(
                order_no = self.order_no,
                operation = operation,
                "Rejected operation on finalized order"
            );
            return Err(OrderError::InvalidSequence {
                operation: operation.to_string(),
            });
        }
        Ok(())
    }
}
