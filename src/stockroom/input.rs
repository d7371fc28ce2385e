//! Parsing of raw text typed at a prompt into the typed values the API takes.
//!
//! Any UI collecting free text goes through here, so bounds checks live in
//! one place: counts and prices may not be negative, ids must be positive.

use crate::error::{Result, StockError};
use crate::model::ProductId;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Largest accepted unit price, in whole currency units.
pub const MAX_PRICE: i64 = 1_000_000_000_000;

fn parse_error(field: &str, raw: &str) -> StockError {
    StockError::Parse {
        field: field.to_string(),
        input: raw.trim().to_string(),
    }
}

/// Any integer, sign allowed. Used for menu and category selections.
pub fn parse_int(raw: &str, field: &str) -> Result<i64> {
    raw.trim().parse().map_err(|_| parse_error(field, raw))
}

/// A non-negative count such as a quantity, amount or lead time.
pub fn parse_count(raw: &str, field: &str) -> Result<u32> {
    let value = parse_int(raw, field)?;
    if value < 0 {
        return Err(StockError::InvalidArgument(format!(
            "{} cannot be negative",
            field
        )));
    }
    u32::try_from(value)
        .map_err(|_| StockError::InvalidArgument(format!("{} is too large", field)))
}

pub fn parse_id(raw: &str) -> Result<ProductId> {
    let value = parse_count(raw, "product ID")?;
    if value == 0 {
        return Err(StockError::InvalidArgument(
            "product ID must be positive".to_string(),
        ));
    }
    Ok(ProductId(value))
}

/// A non-negative decimal price. An optional leading currency symbol is
/// tolerated, so pasting a rendered price back in works.
pub fn parse_price(raw: &str, symbol: &str) -> Result<Decimal> {
    let trimmed = raw.trim();
    let digits = if symbol.is_empty() {
        trimmed
    } else {
        trimmed.strip_prefix(symbol).unwrap_or(trimmed).trim_start()
    };
    let price = Decimal::from_str(digits).map_err(|_| parse_error("price", raw))?;
    if price.is_zero() {
        // "-0" would otherwise render with a sign
        return Ok(Decimal::ZERO);
    }
    if price.is_sign_negative() {
        return Err(StockError::InvalidArgument(
            "price cannot be negative".to_string(),
        ));
    }
    if price > Decimal::from(MAX_PRICE) {
        return Err(StockError::InvalidArgument(format!(
            "price cannot exceed {}",
            MAX_PRICE
        )));
    }
    Ok(price)
}

/// Yes/no answer; anything other than y/yes counts as no.
pub fn parse_confirmation(raw: &str) -> bool {
    matches!(raw.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_accept_zero_and_positive() {
        assert_eq!(parse_count("0", "quantity").unwrap(), 0);
        assert_eq!(parse_count(" 42\n", "quantity").unwrap(), 42);
    }

    #[test]
    fn negative_counts_are_invalid_arguments() {
        let err = parse_count("-5", "amount").unwrap_err();
        assert!(matches!(err, StockError::InvalidArgument(ref m) if m.contains("amount")));
    }

    #[test]
    fn garbage_is_a_parse_error() {
        let err = parse_count("ten", "quantity").unwrap_err();
        match err {
            StockError::Parse { field, input } => {
                assert_eq!(field, "quantity");
                assert_eq!(input, "ten");
            }
            other => panic!("expected parse error, got {:?}", other),
        }
        assert!(parse_int("", "choice").is_err());
        assert!(parse_count("1.5", "quantity").is_err());
    }

    #[test]
    fn counts_above_u32_are_rejected() {
        assert!(matches!(
            parse_count("4294967296", "quantity"),
            Err(StockError::InvalidArgument(_))
        ));
    }

    #[test]
    fn ids_must_be_positive() {
        assert_eq!(parse_id("3").unwrap(), ProductId(3));
        assert!(parse_id("0").is_err());
        assert!(parse_id("-1").is_err());
    }

    #[test]
    fn prices_parse_as_decimals() {
        assert_eq!(parse_price("5", "₹").unwrap(), Decimal::new(5, 0));
        assert_eq!(parse_price("19.99", "₹").unwrap(), Decimal::new(1999, 2));
        assert_eq!(parse_price("₹ 0.10", "₹").unwrap(), Decimal::new(10, 2));
        assert_eq!(parse_price("$3.50", "$").unwrap(), Decimal::new(350, 2));
    }

    #[test]
    fn negative_or_bad_prices_are_rejected() {
        assert!(matches!(
            parse_price("-1.00", "₹"),
            Err(StockError::InvalidArgument(_))
        ));
        assert!(matches!(
            parse_price("abc", "₹"),
            Err(StockError::Parse { .. })
        ));
        assert_eq!(parse_price("-0", "₹").unwrap(), Decimal::ZERO);
    }

    #[test]
    fn prices_above_the_ceiling_are_rejected() {
        assert_eq!(
            parse_price("1000000000000", "₹").unwrap(),
            Decimal::from(MAX_PRICE)
        );
        assert!(matches!(
            parse_price("1000000000000.01", "₹"),
            Err(StockError::InvalidArgument(ref m)) if m.contains("exceed")
        ));
        assert!(matches!(
            parse_price("79228162514264337593543950335", "₹"),
            Err(StockError::InvalidArgument(_))
        ));
    }

    #[test]
    fn confirmation_is_case_insensitive() {
        assert!(parse_confirmation("Y"));
        assert!(parse_confirmation("yes"));
        assert!(!parse_confirmation("n"));
        assert!(!parse_confirmation(""));
    }
}
