//! Finalized order result

use std::fmt;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::container::Container;
use crate::selector::{Selection, SelectionPath};
use crate::weight::to_pounds_ounces;

/// What the packer needs to ship an order: a box label and a weight.
///
/// `label`, `pounds` and `ounces` are the result proper. The remaining
/// fields explain how it was reached and show up in JSON output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Quote {
    pub label: String,
    pub pounds: u64,
    pub ounces: u32,
    pub container: Container,
    pub path: SelectionPath,
    pub total_weight_oz: Decimal,
    pub container_weight_oz: Decimal,
    pub item_count: usize,
}

impl Quote {
    /// `None` when `total_weight_oz` has no pounds-and-ounces form.
    pub(crate) fn new(
        selection: Selection,
        total_weight_oz: Decimal,
        item_count: usize,
    ) -> Option<Self> {
        let (pounds, ounces) = to_pounds_ounces(total_weight_oz)?;
        Some(Self {
            label: selection.container.label().to_string(),
            pounds,
            ounces,
            container: selection.container,
            path: selection.path,
            total_weight_oz,
            container_weight_oz: selection.weight_add_oz,
            item_count,
        })
    }

    /// `X lb., Y oz.` as printed on the packing slip.
    #[must_use]
    pub fn weight_display(&self) -> String {
        format!("{} lb., {} oz.", self.pounds, self.ounces)
    }
}

impl fmt::Display for Quote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Package: {}", self.label)?;
        write!(f, "Package weight: {}", self.weight_display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_display_matches_packing_slip() {
        let selection = Selection {
            path: SelectionPath::MultiBox,
            container: Container::TwelveByTen,
            weight_add_oz: dec!(32),
        };
        let quote = Quote::new(selection, dec!(83.5), 2).unwrap();

        assert_eq!(quote.label, "12×12×10 Box");
        assert_eq!((quote.pounds, quote.ounces), (5, 3));
        assert_eq!(
            quote.to_string(),
            "Package: 12×12×10 Box\nPackage weight: 5 lb., 3 oz."
        );
    }
}
