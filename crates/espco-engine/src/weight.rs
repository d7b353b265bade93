//! Ounces to pounds-and-ounces conversion

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

pub const OUNCES_PER_POUND: u64 = 16;

/// Split a weight in ounces into whole pounds and remaining whole ounces.
///
/// Fractions below one ounce are truncated, never rounded. Returns `None`
/// for a negative weight or one whose whole ounces do not fit in a `u64`.
///
/// ```rust
/// use espco_engine::weight::to_pounds_ounces;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(to_pounds_ounces(dec!(83.5)), Some((5, 3)));
/// assert_eq!(to_pounds_ounces(dec!(15.99)), Some((0, 15)));
/// assert_eq!(to_pounds_ounces(dec!(-1)), None);
/// ```
#[must_use]
pub fn to_pounds_ounces(weight_oz: Decimal) -> Option<(u64, u32)> {
    let whole = weight_oz.floor().to_u64()?;
    let ounces = u32::try_from(whole % OUNCES_PER_POUND).ok()?;
    Some((whole / OUNCES_PER_POUND, ounces))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_exact_pounds() {
        assert_eq!(to_pounds_ounces(dec!(0)), Some((0, 0)));
        assert_eq!(to_pounds_ounces(dec!(16)), Some((1, 0)));
        assert_eq!(to_pounds_ounces(dec!(32.0)), Some((2, 0)));
    }

    #[test]
    fn test_fractions_truncate() {
        assert_eq!(to_pounds_ounces(dec!(2)), Some((0, 2)));
        assert_eq!(to_pounds_ounces(dec!(15.9)), Some((0, 15)));
        assert_eq!(to_pounds_ounces(dec!(16.5)), Some((1, 0)));
        assert_eq!(to_pounds_ounces(dec!(125.5)), Some((7, 13)));
    }

    #[test]
    fn test_pounds_past_u32_stay_exact() {
        let weight = dec!(161061273562.50);
        let (pounds, ounces) = to_pounds_ounces(weight).unwrap();
        assert_eq!(pounds, 10_066_329_597);
        assert_eq!(ounces, 10);
        assert_eq!(pounds * 16 + u64::from(ounces), 161_061_273_562);
    }

    #[test]
    fn test_out_of_range_weights_are_rejected() {
        assert_eq!(to_pounds_ounces(dec!(-3)), None);
        assert_eq!(to_pounds_ounces(Decimal::MAX), None);
        let just_past = Decimal::from(u64::MAX) + Decimal::ONE;
        assert_eq!(to_pounds_ounces(just_past), None);
        assert_eq!(
            to_pounds_ounces(Decimal::from(u64::MAX)),
            Some((u64::MAX / 16, 15))
        );
    }
}
