//! Shared amount helpers
//!
//! All range math in the workspace runs on signed integer minor currency
//! units (hundredths), so conversions to and from decimal text live here.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

/// The "no upper bound" sentinel for amount ranges
pub const AMOUNT_MAX: i64 = i64::MAX;

/// Convert a decimal amount in whole currency units to minor units,
/// discarding any precision beyond two places
pub fn decimal_to_minor(amount: Decimal) -> Option<i64> {
    (amount * Decimal::from(100)).trunc().to_i64()
}

/// Format minor units back as a plain decimal string (e.g. -500 -> "-5.00")
pub fn format_minor(minor: i64) -> String {
    let sign = if minor < 0 { "-" } else { "" };
    let abs = minor.unsigned_abs();
    format!("{}{}.{:02}", sign, abs / 100, abs % 100)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_decimal_to_minor() {
        assert_eq!(decimal_to_minor(Decimal::from_str("5").unwrap()), Some(500));
        assert_eq!(decimal_to_minor(Decimal::from_str("12.5").unwrap()), Some(1250));
        assert_eq!(decimal_to_minor(Decimal::from_str("-2.34").unwrap()), Some(-234));
    }

    #[test]
    fn test_decimal_to_minor_truncates() {
        assert_eq!(decimal_to_minor(Decimal::from_str("1.999").unwrap()), Some(199));
        assert_eq!(decimal_to_minor(Decimal::from_str("0.009").unwrap()), Some(0));
    }

    #[test]
    fn test_format_minor() {
        assert_eq!(format_minor(500), "5.00");
        assert_eq!(format_minor(-500), "-5.00");
        assert_eq!(format_minor(25000), "250.00");
        assert_eq!(format_minor(7), "0.07");
        assert_eq!(format_minor(0), "0.00");
    }
}
