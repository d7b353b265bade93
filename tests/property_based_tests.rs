//! Property-Based Tests for espco
//!
//! Invariants of order accumulation and container selection, checked over
//! random orders drawn from the built-in catalog.
//!
//! ## Configuration
//!
//! Property test case counts can be configured via environment variables:
//!
//! - `PROPTEST_CASES`: Number of test cases per property (default: 64)
//! - `PROPTEST_MAX_SHRINK_ITERS`: Max shrinking iterations on failure (default: 1000)
//!
//! ```bash
//! PROPTEST_CASES=1000 cargo test --test property_based_tests
//! ```

use espco::{Container, ItemCatalog, Order, OrderState, SelectionPath, to_pounds_ounces};
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::env;

/// Default number of test cases per property.
const DEFAULT_PROPTEST_CASES: u32 = 64;

/// Default max shrink iterations.
const DEFAULT_MAX_SHRINK_ITERS: u32 = 1000;

/// Creates a ProptestConfig that respects environment variables.
///
/// `max_cases` caps the case count for slow properties even when
/// `PROPTEST_CASES` asks for more.
fn proptest_config(max_cases: Option<u32>) -> ProptestConfig {
    let env_cases = env::var("PROPTEST_CASES")
        .ok()
        .and_then(|s| s.parse::<u32>().ok())
        .unwrap_or(DEFAULT_PROPTEST_CASES);

    let env_shrink_iters = env::var("PROPTEST_MAX_SHRINK_ITERS")
        .ok()
        .and_then(|s| s.parse::<u32>().ok())
        .unwrap_or(DEFAULT_MAX_SHRINK_ITERS);

    let cases = match max_cases {
        Some(max) => env_cases.min(max),
        None => env_cases,
    };

    ProptestConfig {
        cases,
        max_shrink_iters: env_shrink_iters,
        max_shrink_time: 30000,
        ..ProptestConfig::default()
    }
}

/// One order line: catalog index, quantity, extra packaging in half ounces.
fn arb_line() -> impl Strategy<Value = (usize, u32, u32)> {
    let entries = ItemCatalog::standard().entries().len();
    (0..entries, 1u32..=24, 0u32..=8)
}

fn arb_order() -> impl Strategy<Value = Vec<(usize, u32, u32)>> {
    prop::collection::vec(arb_line(), 0..12)
}

fn half_ounces(n: u32) -> Decimal {
    Decimal::from(n) / dec!(2)
}

fn build_order(lines: &[(usize, u32, u32)]) -> Order {
    let entries = ItemCatalog::standard().entries();
    let mut order = Order::new();
    for &(index, quantity, extra) in lines {
        order
            .add_item(&entries[index], quantity, half_ounces(extra))
            .unwrap();
    }
    order
}

fn assert_not_below(after: &OrderState, before: &OrderState) -> Result<(), TestCaseError> {
    prop_assert!(after.total_space() >= before.total_space());
    prop_assert!(after.gift_box_item_space() >= before.gift_box_item_space());
    prop_assert!(after.gift_box_inches() >= before.gift_box_inches());
    prop_assert!(after.gift_box_weight_flag() >= before.gift_box_weight_flag());
    prop_assert!(after.weight_oz() >= before.weight_oz());
    Ok(())
}

/// Property test: the reported pounds and ounces always add back up to the
/// truncated total weight.
#[test]
fn prop_pounds_and_ounces_match_total_weight() {
    let config = proptest_config(None);

    proptest!(config, |(lines in arb_order())| {
        let mut order = build_order(&lines);
        let quote = order.finalize().unwrap();

        prop_assert!(quote.ounces < 16);
        let whole = Decimal::from(quote.pounds) * dec!(16) + Decimal::from(quote.ounces);
        prop_assert_eq!(whole, quote.total_weight_oz.floor());
        prop_assert_eq!(quote.total_weight_oz, order.state().weight_oz());
    });
}

/// Property test: no add ever lowers an accumulator.
#[test]
fn prop_accumulators_never_decrease() {
    let config = proptest_config(None);

    proptest!(config, |(lines in arb_order())| {
        let entries = ItemCatalog::standard().entries();
        let mut order = Order::new();

        for (index, quantity, extra) in lines {
            let before = order.state().clone();
            order.add_item(&entries[index], quantity, half_ounces(extra)).unwrap();
            assert_not_below(order.state(), &before)?;
        }
    });
}

/// Property test: every order gets a label, and only an unsatisfiable order
/// gets the multiple-packaging sentinel with no added weight.
#[test]
fn prop_every_order_gets_a_label() {
    let config = proptest_config(None);

    proptest!(config, |(lines in arb_order())| {
        let mut order = build_order(&lines);
        let before = order.state().weight_oz();
        let quote = order.finalize().unwrap();

        prop_assert!(!quote.label.is_empty());
        prop_assert_eq!(quote.total_weight_oz - before, quote.container_weight_oz);

        if quote.container == Container::NeedsMultiplePackaging {
            prop_assert_eq!(quote.container_weight_oz, Decimal::ZERO);
        } else {
            prop_assert!(quote.container_weight_oz > Decimal::ZERO);
        }
    });
}

/// Property test: two or more gift boxes always take the multi-box path.
#[test]
fn prop_two_gift_boxes_take_multi_box_path() {
    let config = proptest_config(None);
    let gift_boxes: Vec<usize> = ItemCatalog::standard()
        .entries()
        .iter()
        .enumerate()
        .filter(|(_, e)| e.is_gift_box())
        .map(|(i, _)| i)
        .collect();

    let arb_picks = prop::collection::vec(prop::sample::select(gift_boxes), 2..5);

    proptest!(config, |(picks in arb_picks)| {
        let lines: Vec<_> = picks.into_iter().map(|i| (i, 1, 0)).collect();
        let mut order = build_order(&lines);
        let quote = order.finalize().unwrap();

        prop_assert_eq!(quote.path, SelectionPath::MultiBox);
    });
}

/// Property test: a lone gift box ships in a standard container.
#[test]
fn prop_single_gift_box_takes_standard_path() {
    let config = proptest_config(None);
    let gift_boxes: Vec<usize> = ItemCatalog::standard()
        .entries()
        .iter()
        .enumerate()
        .filter(|(_, e)| e.is_gift_box())
        .map(|(i, _)| i)
        .collect();

    proptest!(config, |(pick in prop::sample::select(gift_boxes.clone()))| {
        let mut order = build_order(&[(pick, 1, 0)]);
        let quote = order.finalize().unwrap();

        prop_assert_eq!(quote.path, SelectionPath::Standard);
        prop_assert_ne!(quote.container, Container::NeedsMultiplePackaging);
    });
}

/// Property test: reset is idempotent and always returns to the zero state.
#[test]
fn prop_reset_is_idempotent() {
    let config = proptest_config(None);

    proptest!(config, |(lines in arb_order(), finalize in any::<bool>())| {
        let mut order = build_order(&lines);
        if finalize {
            order.finalize().unwrap();
        }

        order.reset();
        let once = order.state().clone();
        order.reset();

        prop_assert_eq!(order.state(), &once);
        prop_assert_eq!(order.state(), &OrderState::default());
        prop_assert!(order.display_log().is_empty());
    });
}

/// Property test: the same order always produces the same quote.
#[test]
fn prop_quotes_are_deterministic() {
    let config = proptest_config(Some(32));

    proptest!(config, |(lines in arb_order())| {
        let first = build_order(&lines).finalize().unwrap();
        let second = build_order(&lines).finalize().unwrap();
        prop_assert_eq!(first, second);
    });
}

/// Property test: conversion truncates fractions below an ounce.
#[test]
fn prop_weight_conversion_truncates() {
    let config = proptest_config(None);

    proptest!(config, |(hundredths in 0u64..10_000_000)| {
        let weight = Decimal::from(hundredths) / dec!(100);
        let (pounds, ounces) = to_pounds_ounces(weight).unwrap();

        prop_assert!(ounces < 16);
        prop_assert_eq!(pounds * 16 + u64::from(ounces), hundredths / 100);
    });
}
