//! Shared helpers for database model conversions.

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Parses a TEXT column into a Decimal, with a fallback through f64 for
/// scientific notation. Unparseable values log an error and become zero so
/// one corrupt row cannot poison a whole listing.
pub fn parse_decimal_column(value_str: &str, field_name: &str) -> Decimal {
    match Decimal::from_str(value_str) {
        Ok(d) => d,
        Err(e_decimal) => match f64::from_str(value_str) {
            Ok(f_val) => match Decimal::from_f64(f_val) {
                Some(dec_val) => dec_val,
                None => {
                    log::error!(
                        "Failed to convert {} '{}' (parsed as f64: {}) to Decimal.",
                        field_name,
                        value_str,
                        f_val
                    );
                    Decimal::ZERO
                }
            },
            Err(e_f64) => {
                log::error!(
                    "Failed to parse {} '{}': as Decimal (err: {}), and as f64 (err: {}). Falling back to ZERO.",
                    field_name,
                    value_str,
                    e_decimal,
                    e_f64
                );
                Decimal::ZERO
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_decimal_column() {
        assert_eq!(parse_decimal_column("12.34", "amount"), dec!(12.34));
        assert_eq!(parse_decimal_column("-0.5", "amount"), dec!(-0.5));
        assert_eq!(parse_decimal_column("1e2", "amount"), dec!(100));
        assert_eq!(parse_decimal_column("junk", "amount"), Decimal::ZERO);
    }
}
