//! Shipping containers and their empty weights

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

/// Every label the engine can produce.
///
/// `NeedsMultiplePackaging` is an ordinary outcome: no single container in
/// the stockroom holds the order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, strum::EnumIter, strum::IntoStaticStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Container {
    SaltEnvelope,
    MustardBox,
    SmallBox,
    MediumBox,
    LargeBox,
    TwelveByTen,
    ExtraLargeBox,
    Case1,
    Case3,
    NeedsMultiplePackaging,
}

impl Container {
    /// Human-readable label shown to the packer.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::SaltEnvelope => "Salt Envelope",
            Self::MustardBox => "Mustard Box (6×6×4)",
            Self::SmallBox => "Small Box (12×12×4)",
            Self::MediumBox => "Medium Box (12×12×6)",
            Self::LargeBox => "Large Box (12×12×8)",
            Self::TwelveByTen => "12×12×10 Box",
            Self::ExtraLargeBox => "Extra Large Box (12×12×12)",
            Self::Case1 => "Case 1 (16×13×10)",
            Self::Case3 => "Case 3 (12×12×24)",
            Self::NeedsMultiplePackaging => "Needs multiple packaging",
        }
    }

    /// Weight of the empty container with its packaging, in ounces.
    #[must_use]
    pub const fn box_weight_oz(self) -> Decimal {
        match self {
            Self::SaltEnvelope => dec!(2),
            Self::MustardBox => dec!(4),
            Self::SmallBox => dec!(9),
            Self::MediumBox => dec!(10),
            Self::LargeBox => dec!(12),
            Self::TwelveByTen => dec!(14),
            Self::ExtraLargeBox => dec!(18),
            Self::Case1 => dec!(17),
            Self::Case3 => dec!(22),
            Self::NeedsMultiplePackaging => Decimal::ZERO,
        }
    }

    /// Short id used in JSON output and logs.
    #[must_use]
    pub fn id(self) -> &'static str {
        self.into()
    }
}

impl std::fmt::Display for Container {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_every_container_has_a_label() {
        for container in Container::iter() {
            assert!(!container.label().is_empty(), "{container:?}");
        }
    }

    #[test]
    fn test_only_the_sentinel_weighs_nothing() {
        for container in Container::iter() {
            let weightless = container.box_weight_oz().is_zero();
            assert_eq!(
                weightless,
                container == Container::NeedsMultiplePackaging,
                "{container:?}"
            );
        }
    }

    #[test]
    fn test_ids_are_kebab_case() {
        assert_eq!(Container::TwelveByTen.id(), "twelve-by-ten");
        assert_eq!(Container::NeedsMultiplePackaging.id(), "needs-multiple-packaging");
    }

    #[test]
    fn test_serializes_as_id() {
        let json = serde_json::to_string(&Container::ExtraLargeBox).unwrap();
        assert_eq!(json, "\"extra-large-box\"");
    }
}
