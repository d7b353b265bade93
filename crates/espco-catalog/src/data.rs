//! The built-in catalog.
//!
//! Space values were found by packing items into each box size by hand;
//! weights were measured on the shipping scale. Eight wheelhouse (0.28) and
//! one sauce (0.18) fill a small box exactly, which is where its 2.42 limit
//! comes from.

use rust_decimal_macros::dec;

use crate::entry::CatalogEntry;
use crate::pack::Pack;

pub(crate) static ENTRIES: &[CatalogEntry] = &[
    // Pretzels and toppings
    CatalogEntry::loose("wheelhouse", "Wheelhouse", dec!(0.28), dec!(4.00)),
    CatalogEntry::loose("turnbuckle", "Turnbuckle (6)", dec!(0.50), dec!(9.00)),
    CatalogEntry::loose("bites", "Bites", dec!(0.50), dec!(12.50)),
    CatalogEntry::loose("sliders", "Sliders (6)", dec!(0.50), dec!(9.00)),
    CatalogEntry::loose("topknot", "Topknot", dec!(0.37), dec!(6.50)),
    CatalogEntry::loose("fourseam", "Fourseam (2)", dec!(0.57), dec!(8.50)),
    CatalogEntry::loose("ribbon", "Ribbon", dec!(0.37), dec!(4.00)),
    CatalogEntry::loose("salt", "Salt / Sugar / Topper", dec!(0.00), dec!(1.00)),
    CatalogEntry::loose("sauce", "Sauce / Mustard", dec!(0.18), dec!(9.00)),
    CatalogEntry::loose("waffle", "Waffle", dec!(0.134), dec!(3.20)),
    // Gift boxes, first shelf
    CatalogEntry::gift_box(
        "saucy-single",
        "Saucy Box (Single Sauce)",
        dec!(1.24),
        dec!(30.50),
        dec!(4.00),
        dec!(9),
    ),
    CatalogEntry::gift_box(
        "saucy-combo",
        "Saucy Box (Combo Pack)",
        dec!(1.60),
        dec!(48.50),
        dec!(4.00),
        dec!(9),
    ),
    CatalogEntry::gift_box(
        "you-lucked-out",
        "You Lucked Out Box",
        dec!(2.12),
        dec!(36.00),
        dec!(4.00),
        dec!(9),
    ),
    CatalogEntry::gift_box(
        "love-you-to-pieces",
        "Love You to Pieces Box",
        dec!(1.50),
        dec!(39.50),
        dec!(4.00),
        dec!(9),
    ),
    CatalogEntry::gift_box(
        "everyday-holiday-super",
        "Everyday Holiday Super Box",
        dec!(1.56),
        dec!(30.50),
        dec!(4.00),
        dec!(9),
    ),
    CatalogEntry::gift_box(
        "everyday-holiday-ultra",
        "Everyday Holiday Ultra Box",
        dec!(2.74),
        dec!(63.00),
        dec!(6.00),
        dec!(10),
    ),
    CatalogEntry::gift_box(
        "everyday-holiday-mega",
        "Everyday Holiday Mega Box",
        dec!(4.91),
        dec!(113.50),
        dec!(8.00),
        dec!(12),
    ),
    // Second shelf
    CatalogEntry::gift_box("love", "Love Box", dec!(1.40), dec!(21.00), dec!(4.00), dec!(9)),
    CatalogEntry::gift_box(
        "true-love",
        "True Love Box",
        dec!(2.68),
        dec!(44.00),
        dec!(6.00),
        dec!(10),
    ),
    CatalogEntry::gift_box(
        "gourmet-pretzel",
        "Gourmet Pretzel Box",
        dec!(2.06),
        dec!(41.00),
        dec!(4.00),
        dec!(9),
    ),
    CatalogEntry::gift_box(
        "gourmet-belgian-waffle",
        "Gourmet Belgian Waffle Box",
        dec!(1.43),
        dec!(45.60),
        dec!(4.00),
        dec!(9),
    ),
    CatalogEntry::gift_box(
        "gourmet-pretzel-waffle",
        "Gourmet Pretzel & Waffle Box",
        dec!(2.02),
        dec!(49.80),
        dec!(4.00),
        dec!(9),
    ),
    CatalogEntry::gift_box(
        "holly-jolly",
        "Holly & Jolly Box",
        dec!(1.56),
        dec!(30.50),
        dec!(4.00),
        dec!(9),
    ),
    CatalogEntry::gift_box(
        "comfort-joy",
        "Comfort & Joy Box",
        dec!(2.74),
        dec!(62.00),
        dec!(6.00),
        dec!(10),
    ),
    CatalogEntry::gift_box(
        "more-the-merrier",
        "More the Merrier Box",
        dec!(4.97),
        dec!(113.50),
        dec!(8.00),
        dec!(12),
    ),
    // Third shelf
    CatalogEntry::gift_box(
        "all-you-knead-is-love",
        "All You Knead is Love Box",
        dec!(2.62),
        dec!(51.00),
        dec!(6.00),
        dec!(10),
    ),
    CatalogEntry::gift_box(
        "lets-brunch",
        "Let's Brunch Box",
        dec!(1.85),
        dec!(33.50),
        dec!(4.00),
        dec!(9),
    ),
    CatalogEntry::gift_box(
        "movie-night",
        "Movie Night Box",
        dec!(1.74),
        dec!(39.50),
        dec!(4.00),
        dec!(9),
    ),
    CatalogEntry::gift_box("bbq", "BBQ Box", dec!(2.14), dec!(37.00), dec!(4.00), dec!(9)),
    CatalogEntry::gift_box("st-jude", "St. Jude Box", dec!(2.06), dec!(40.50), dec!(4.00), dec!(9)),
    CatalogEntry::gift_box(
        "game-day",
        "Game Day Box",
        dec!(1.56),
        dec!(36.00),
        dec!(4.00),
        dec!(9),
    ),
    CatalogEntry::gift_box(
        "cancer-awareness",
        "Cancer Awareness Box",
        dec!(2.06),
        dec!(40.50),
        dec!(4.00),
        dec!(9),
    ),
];

pub(crate) static PACKS: &[Pack] = &[
    Pack::new("wheelhouse-6", "6 Wheelhouse added", "wheelhouse", 6, dec!(1)),
    Pack::new("wheelhouse-12", "12 Wheelhouse added", "wheelhouse", 12, dec!(2)),
    Pack::new("wheelhouse-18", "18 Wheelhouse added", "wheelhouse", 18, dec!(3)),
    Pack::new("wheelhouse-24", "24 Wheelhouse added", "wheelhouse", 24, dec!(4)),
    Pack::new("turnbuckle-12", "12 Turnbuckle added", "turnbuckle", 2, dec!(1)),
    Pack::new("turnbuckle-24", "24 Turnbuckle added", "turnbuckle", 4, dec!(2)),
    Pack::new("turnbuckle-36", "36 Turnbuckle added", "turnbuckle", 6, dec!(3)),
    Pack::new("turnbuckle-48", "48 Turnbuckle added", "turnbuckle", 8, dec!(4)),
    Pack::new("bites-2", "2 Bites added", "bites", 2, dec!(1)),
    Pack::new("bites-4", "4 Bites added", "bites", 4, dec!(2)),
    Pack::new("bites-6", "6 Bites added", "bites", 6, dec!(3)),
    Pack::new("bites-8", "8 Bites added", "bites", 8, dec!(4)),
    Pack::new("sliders-12", "12 Sliders added", "sliders", 2, dec!(1)),
    Pack::new("sliders-24", "24 Sliders added", "sliders", 4, dec!(2)),
    Pack::new("sliders-36", "36 Sliders added", "sliders", 6, dec!(3)),
    Pack::new("topknot-4", "4 Topknot added", "topknot", 4, dec!(1)),
    Pack::new("topknot-8", "8 Topknot added", "topknot", 8, dec!(2)),
    Pack::new("topknot-12", "12 Topknot added", "topknot", 12, dec!(3)),
    Pack::new("topknot-16", "16 Topknot added", "topknot", 16, dec!(4)),
    Pack::new("fourseam-6", "6 Fourseam added", "fourseam", 3, dec!(1)),
    Pack::new("fourseam-12", "12 Fourseam added", "fourseam", 6, dec!(2)),
    Pack::new("fourseam-18", "18 Fourseam added", "fourseam", 9, dec!(3)),
    Pack::new("salt", "Salt / Sugar / Topper added", "salt", 1, dec!(0)),
    Pack::new("salt-combo", "Gourmet Salt Combo added", "salt", 5, dec!(0)),
    Pack::new("sugar-combo", "Gourmet Sugar Combo added", "salt", 3, dec!(0)),
    Pack::new("sauce", "Sauce / Mustard added", "sauce", 1, dec!(0)),
    Pack::new("sauce-combo", "Gourmet Sauce Combo added", "sauce", 3, dec!(0)),
    Pack::new("waffle-1", "1 Waffle added", "waffle", 1, dec!(0)),
    Pack::new("waffle-6", "6 Waffles added", "waffle", 6, dec!(0)),
    Pack::new("waffle-12", "12 Waffles added", "waffle", 12, dec!(0)),
    Pack::new("saucy-single", "Saucy Box (Single Sauce) added", "saucy-single", 1, dec!(0)),
    Pack::new("saucy-combo", "Saucy Box (Combo Pack) added", "saucy-combo", 1, dec!(0)),
    Pack::new("you-lucked-out", "You Lucked Out Box added", "you-lucked-out", 1, dec!(0)),
    Pack::new(
        "love-you-to-pieces",
        "Love You to Pieces Box added",
        "love-you-to-pieces",
        1,
        dec!(0),
    ),
    Pack::new(
        "everyday-holiday-super",
        "Everyday Holiday Super Box added",
        "everyday-holiday-super",
        1,
        dec!(0),
    ),
    Pack::new(
        "everyday-holiday-ultra",
        "Everyday Holiday Ultra Box added",
        "everyday-holiday-ultra",
        1,
        dec!(0),
    ),
    Pack::new(
        "everyday-holiday-mega",
        "Everyday Holiday Mega Box added",
        "everyday-holiday-mega",
        1,
        dec!(0),
    ),
    Pack::new("love", "Love Box added", "love", 1, dec!(0)),
    Pack::new("true-love", "True Love Box added", "true-love", 1, dec!(0)),
    Pack::new("gourmet-pretzel", "Gourmet Pretzel Box added", "gourmet-pretzel", 1, dec!(0)),
    Pack::new(
        "gourmet-belgian-waffle",
        "Gourmet Belgian Waffle Box added",
        "gourmet-belgian-waffle",
        1,
        dec!(0),
    ),
    Pack::new(
        "gourmet-pretzel-waffle",
        "Gourmet Pretzel & Waffle Box added",
        "gourmet-pretzel-waffle",
        1,
        dec!(0),
    ),
    Pack::new("holly-jolly", "Holly & Jolly Box added", "holly-jolly", 1, dec!(0)),
    Pack::new("comfort-joy", "Comfort & Joy Box added", "comfort-joy", 1, dec!(0)),
    Pack::new("more-the-merrier", "More the Merrier Box added", "more-the-merrier", 1, dec!(0)),
    Pack::new(
        "all-you-knead-is-love",
        "All You Knead is Love Box added",
        "all-you-knead-is-love",
        1,
        dec!(0),
    ),
    Pack::new("lets-brunch", "Let's Brunch Box added", "lets-brunch", 1, dec!(0)),
    Pack::new("movie-night", "Movie Night Box added", "movie-night", 1, dec!(0)),
    Pack::new("bbq", "BBQ Box added", "bbq", 1, dec!(0)),
    Pack::new("st-jude", "St. Jude Box added", "st-jude", 1, dec!(0)),
    Pack::new("game-day", "Game Day Box added", "game-day", 1, dec!(0)),
    Pack::new("cancer-awareness", "Cancer Awareness Box added", "cancer-awareness", 1, dec!(0)),
];
