//! Container selection
//!
//! Two tables decide the container. The standard table sizes a single box
//! from the order's total space. The multi-box table applies once an order
//! holds two or more separately shipped gift boxes: it sizes one outer case
//! from their stacked height and whatever loose items remain, and charges
//! the gift boxes' own packaging on top.
//!
//! The multi-box predicate is checked first. An order that satisfies
//! neither predicate resolves to [`Container::NeedsMultiplePackaging`] so a
//! finalized order always carries a label.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

use crate::container::Container;
use crate::state::OrderState;

/// Largest stacked height, in inches, that still shares a single box with
/// the rest of the order.
pub const SINGLE_BOX_MAX_INCHES: Decimal = dec!(8.00);

/// Summed physical-box codes above this mean two or more gift boxes.
pub const SINGLE_BOX_MAX_FLAG: Decimal = dec!(12.00);

/// Which table produced a selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, strum::Display)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum SelectionPath {
    Standard,
    MultiBox,
    /// Neither table applies. Unreachable with the built-in catalog.
    Unresolved,
}

/// Outcome of [`select_container`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Selection {
    pub path: SelectionPath,
    pub container: Container,
    /// Ounces to add to the order's running weight.
    pub weight_add_oz: Decimal,
}

impl Selection {
    fn needs_multiple(path: SelectionPath) -> Self {
        Self {
            path,
            container: Container::NeedsMultiplePackaging,
            weight_add_oz: Decimal::ZERO,
        }
    }
}

/// Upper bound (inclusive) of total space for each standard container.
/// Zero space is handled before this table.
const STANDARD_TABLE: &[(Decimal, Container)] = &[
    (dec!(0.72), Container::MustardBox),
    (dec!(2.42), Container::SmallBox),
    (dec!(4.00), Container::MediumBox),
    (dec!(6.00), Container::LargeBox),
    (dec!(8.00), Container::TwelveByTen),
    (dec!(10.10), Container::ExtraLargeBox),
    (dec!(12.00), Container::Case1),
];

/// Containers for one stacked height, indexed by remaining-space band.
/// Bands past the end of `bands` need multiple packaging.
struct MultiBoxRow {
    inches: Decimal,
    bands: &'static [Container],
}

const MULTI_BOX_TABLE: &[MultiBoxRow] = &[
    MultiBoxRow {
        inches: dec!(8),
        bands: &[
            Container::TwelveByTen,
            Container::ExtraLargeBox,
            Container::Case3,
            Container::Case3,
            Container::Case3,
            Container::Case3,
        ],
    },
    MultiBoxRow {
        inches: dec!(10),
        bands: &[
            Container::TwelveByTen,
            Container::Case3,
            Container::Case3,
            Container::Case3,
            Container::Case3,
            Container::Case3,
        ],
    },
    MultiBoxRow {
        inches: dec!(12),
        bands: &[
            Container::ExtraLargeBox,
            Container::Case3,
            Container::Case3,
            Container::Case3,
            Container::Case3,
            Container::Case3,
        ],
    },
    MultiBoxRow {
        inches: dec!(14),
        bands: &[
            Container::Case3,
            Container::Case3,
            Container::Case3,
            Container::Case3,
            Container::Case3,
        ],
    },
    MultiBoxRow {
        inches: dec!(16),
        bands: &[
            Container::Case3,
            Container::Case3,
            Container::Case3,
            Container::Case3,
        ],
    },
    MultiBoxRow {
        inches: dec!(18),
        bands: &[Container::Case3, Container::Case3, Container::Case3],
    },
    MultiBoxRow {
        inches: dec!(20),
        bands: &[Container::Case3, Container::Case3],
    },
    MultiBoxRow {
        inches: dec!(22),
        bands: &[Container::Case3],
    },
    MultiBoxRow {
        inches: dec!(24),
        bands: &[Container::Case3],
    },
];

/// Band index for space left over after gift-box contents.
///
/// Band 0 is below 1.00 and band 1 is `[1.00, 2.42]`. The rest are
/// left-open: `(2.42, 4.00]`, `(4.00, 6.00]`, `(6.00, 8.00]`, `(8.00, 10.10]`.
/// `None` above 10.10.
fn remaining_space_band(remaining: Decimal) -> Option<usize> {
    if remaining < dec!(1.00) {
        return Some(0);
    }
    const UPPER: [Decimal; 5] = [dec!(2.42), dec!(4.00), dec!(6.00), dec!(8.00), dec!(10.10)];
    UPPER
        .iter()
        .position(|&upper| remaining <= upper)
        .map(|i| i + 1)
}

/// Whether the order's gift boxes ship as separate boxes inside one case.
#[must_use]
pub fn is_multi_box(state: &OrderState) -> bool {
    state.gift_box_inches >= SINGLE_BOX_MAX_INCHES
        && state.gift_box_weight_flag > SINGLE_BOX_MAX_FLAG
}

/// Whether the whole order, gift box included, fits one standard container.
#[must_use]
pub fn is_standard(state: &OrderState) -> bool {
    state.gift_box_inches <= SINGLE_BOX_MAX_INCHES
        && state.gift_box_weight_flag <= SINGLE_BOX_MAX_FLAG
}

/// Pick the container for an order and the weight it adds.
#[must_use]
pub fn select_container(state: &OrderState) -> Selection {
    if is_multi_box(state) {
        select_multi_box(state)
    } else if is_standard(state) {
        select_standard(state.total_space)
    } else {
        Selection::needs_multiple(SelectionPath::Unresolved)
    }
}

fn select_standard(total_space: Decimal) -> Selection {
    let container = if total_space <= Decimal::ZERO {
        Some(Container::SaltEnvelope)
    } else {
        STANDARD_TABLE
            .iter()
            .find(|(upper, _)| total_space <= *upper)
            .map(|&(_, container)| container)
    };

    match container {
        Some(container) => Selection {
            path: SelectionPath::Standard,
            container,
            weight_add_oz: container.box_weight_oz(),
        },
        None => Selection::needs_multiple(SelectionPath::Standard),
    }
}

fn select_multi_box(state: &OrderState) -> Selection {
    let remaining = state.total_space - state.gift_box_item_space;

    let container = MULTI_BOX_TABLE
        .iter()
        .find(|row| row.inches == state.gift_box_inches)
        .zip(remaining_space_band(remaining))
        .and_then(|(row, band)| row.bands.get(band).copied());

    match container {
        Some(container) => Selection {
            path: SelectionPath::MultiBox,
            container,
            weight_add_oz: state.gift_box_weight_flag + container.box_weight_oz(),
        },
        None => Selection::needs_multiple(SelectionPath::MultiBox),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn standard(space: Decimal) -> OrderState {
        OrderState {
            total_space: space,
            ..OrderState::default()
        }
    }

    fn multi(
        inches: Decimal,
        flag: Decimal,
        gift_space: Decimal,
        loose_space: Decimal,
    ) -> OrderState {
        OrderState {
            total_space: gift_space + loose_space,
            gift_box_item_space: gift_space,
            gift_box_inches: inches,
            gift_box_weight_flag: flag,
            ..OrderState::default()
        }
    }

    #[test]
    fn test_empty_order_ships_in_salt_envelope() {
        let selection = select_container(&OrderState::default());
        assert_eq!(selection.path, SelectionPath::Standard);
        assert_eq!(selection.container, Container::SaltEnvelope);
        assert_eq!(selection.weight_add_oz, dec!(2));
    }

    #[test]
    fn test_standard_boundaries_are_inclusive_above() {
        let cases = [
            (dec!(0.01), Container::MustardBox),
            (dec!(0.72), Container::MustardBox),
            (dec!(0.73), Container::SmallBox),
            (dec!(2.42), Container::SmallBox),
            (dec!(2.43), Container::MediumBox),
            (dec!(4.00), Container::MediumBox),
            (dec!(4.01), Container::LargeBox),
            (dec!(6.00), Container::LargeBox),
            (dec!(8.00), Container::TwelveByTen),
            (dec!(10.10), Container::ExtraLargeBox),
            (dec!(10.11), Container::Case1),
            (dec!(12.00), Container::Case1),
        ];
        for (space, expected) in cases {
            let selection = select_container(&standard(space));
            assert_eq!(selection.container, expected, "space {space}");
            assert_eq!(selection.weight_add_oz, expected.box_weight_oz(), "space {space}");
        }
    }

    #[test]
    fn test_standard_overflow_needs_multiple_packaging() {
        let selection = select_container(&standard(dec!(12.01)));
        assert_eq!(selection.path, SelectionPath::Standard);
        assert_eq!(selection.container, Container::NeedsMultiplePackaging);
        assert_eq!(selection.weight_add_oz, Decimal::ZERO);
    }

    #[test]
    fn test_single_gift_box_takes_standard_path() {
        let state = multi(dec!(4), dec!(9), dec!(1.40), Decimal::ZERO);
        let selection = select_container(&state);
        assert_eq!(selection.path, SelectionPath::Standard);
        assert_eq!(selection.container, Container::SmallBox);
    }

    #[test]
    fn test_flag_of_exactly_twelve_stays_standard() {
        let state = multi(dec!(8), dec!(12), dec!(4.91), Decimal::ZERO);
        let selection = select_container(&state);
        assert_eq!(selection.path, SelectionPath::Standard);
        assert_eq!(selection.container, Container::LargeBox);
    }

    #[test]
    fn test_two_small_gift_boxes_share_a_twelve_by_ten() {
        let state = multi(dec!(8), dec!(18), dec!(2.64), Decimal::ZERO);
        let selection = select_container(&state);
        assert_eq!(selection.path, SelectionPath::MultiBox);
        assert_eq!(selection.container, Container::TwelveByTen);
        assert_eq!(selection.weight_add_oz, dec!(32));
    }

    #[test]
    fn test_multi_box_bands_for_eight_inches() {
        let cases = [
            (dec!(0.99), Container::TwelveByTen),
            (dec!(1.00), Container::ExtraLargeBox),
            (dec!(2.42), Container::ExtraLargeBox),
            (dec!(2.43), Container::Case3),
            (dec!(10.10), Container::Case3),
            (dec!(10.11), Container::NeedsMultiplePackaging),
        ];
        for (loose, expected) in cases {
            let state = multi(dec!(8), dec!(18), dec!(2.80), loose);
            assert_eq!(select_container(&state).container, expected, "loose {loose}");
        }
    }

    #[test]
    fn test_taller_stacks_leave_less_room() {
        let cases = [
            (dec!(10), dec!(0.5), Container::TwelveByTen),
            (dec!(10), dec!(1.5), Container::Case3),
            (dec!(12), dec!(0.5), Container::ExtraLargeBox),
            (dec!(12), dec!(9.0), Container::Case3),
            (dec!(14), dec!(8.00), Container::Case3),
            (dec!(14), dec!(8.01), Container::NeedsMultiplePackaging),
            (dec!(16), dec!(6.00), Container::Case3),
            (dec!(16), dec!(6.01), Container::NeedsMultiplePackaging),
            (dec!(18), dec!(4.00), Container::Case3),
            (dec!(18), dec!(4.01), Container::NeedsMultiplePackaging),
            (dec!(20), dec!(2.42), Container::Case3),
            (dec!(20), dec!(2.43), Container::NeedsMultiplePackaging),
            (dec!(22), dec!(0.99), Container::Case3),
            (dec!(22), dec!(1.00), Container::NeedsMultiplePackaging),
            (dec!(24), Decimal::ZERO, Container::Case3),
            (dec!(24), dec!(1.00), Container::NeedsMultiplePackaging),
            (dec!(26), Decimal::ZERO, Container::NeedsMultiplePackaging),
        ];
        for (inches, loose, expected) in cases {
            let state = multi(inches, dec!(27), dec!(3), loose);
            assert_eq!(
                select_container(&state).container,
                expected,
                "inches {inches}, loose {loose}"
            );
        }
    }

    #[test]
    fn test_case3_charges_gift_box_flags_plus_case() {
        let state = multi(dec!(14), dec!(28), dec!(6.5), dec!(3));
        let selection = select_container(&state);
        assert_eq!(selection.container, Container::Case3);
        assert_eq!(selection.weight_add_oz, dec!(50));
    }

    #[test]
    fn test_unknown_inch_key_needs_multiple_packaging() {
        let state = multi(dec!(9), dec!(19), dec!(2), Decimal::ZERO);
        let selection = select_container(&state);
        assert_eq!(selection.path, SelectionPath::MultiBox);
        assert_eq!(selection.container, Container::NeedsMultiplePackaging);
        assert_eq!(selection.weight_add_oz, Decimal::ZERO);
    }

    #[test]
    fn test_neither_predicate_is_unresolved() {
        // Tall but only one box's worth of flag.
        let state = multi(dec!(10), dec!(12), dec!(3), Decimal::ZERO);
        let selection = select_container(&state);
        assert_eq!(selection.path, SelectionPath::Unresolved);
        assert_eq!(selection.container, Container::NeedsMultiplePackaging);

        // Short but flagged as several boxes.
        let state = multi(dec!(6), dec!(18), dec!(3), Decimal::ZERO);
        assert_eq!(select_container(&state).path, SelectionPath::Unresolved);
    }

    #[test]
    fn test_every_row_covers_band_zero() {
        for row in MULTI_BOX_TABLE {
            assert!(!row.bands.is_empty(), "row {}", row.inches);
            assert!(row.bands.len() <= 6, "row {}", row.inches);
        }
    }

    mod prop {
        use super::*;
        use proptest::prelude::*;

        fn hundredths(max: i64) -> impl Strategy<Value = Decimal> {
            (0..=max).prop_map(|n| Decimal::new(n, 2))
        }

        proptest! {
            #[test]
            fn prop_selection_always_has_a_label(
                inches in (0i64..=15).prop_map(|n| Decimal::from(n * 2)),
                flag in (0i64..=60).prop_map(Decimal::from),
                gift_space in hundredths(2000),
                loose_space in hundredths(2000),
            ) {
                let state = multi(inches, flag, gift_space, loose_space);
                let selection = select_container(&state);

                prop_assert!(!selection.container.label().is_empty());
                if selection.container == Container::NeedsMultiplePackaging {
                    prop_assert_eq!(selection.weight_add_oz, Decimal::ZERO);
                } else if selection.path == SelectionPath::MultiBox {
                    prop_assert_eq!(
                        selection.weight_add_oz,
                        flag + selection.container.box_weight_oz()
                    );
                } else {
                    prop_assert_eq!(selection.weight_add_oz, selection.container.box_weight_oz());
                }
            }
        }
    }
}
