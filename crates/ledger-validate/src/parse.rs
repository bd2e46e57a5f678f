//! Numeric field parsing.

use ledger_model::Quantity;

/// Parses a quantity as a non-negative integer of any size.
///
/// Surrounding whitespace is ignored; signs other than a leading `+`, decimal
/// points and exponents are rejected.
pub fn parse_quantity(value: &str) -> Option<Quantity> {
    value.trim().parse().ok()
}

/// Parses a unit price as a finite, non-negative real number.
///
/// `-0` is accepted and normalized to `0.0`.
pub fn parse_price(value: &str) -> Option<f64> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    let price = value.parse::<f64>().ok()?;
    if !price.is_finite() || price < 0.0 {
        return None;
    }
    Some(price.abs())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_quantity() {
        let digits = |value: &str| parse_quantity(value).map(|q| q.to_string());
        assert_eq!(digits("3").as_deref(), Some("3"));
        assert_eq!(digits(" 12 ").as_deref(), Some("12"));
        assert_eq!(digits("0").as_deref(), Some("0"));
        assert_eq!(digits("+5").as_deref(), Some("5"));
        assert_eq!(
            digits("18446744073709551616").as_deref(),
            Some("18446744073709551616")
        );
        assert_eq!(parse_quantity("-1"), None);
        assert_eq!(parse_quantity("2.5"), None);
        assert_eq!(parse_quantity("1e3"), None);
        assert_eq!(parse_quantity("x"), None);
        assert_eq!(parse_quantity(""), None);
    }

    #[test]
    fn test_parse_price() {
        assert_eq!(parse_price("2.50"), Some(2.5));
        assert_eq!(parse_price(" 5 "), Some(5.0));
        assert_eq!(parse_price("1e2"), Some(100.0));
        assert_eq!(parse_price(".5"), Some(0.5));
        assert_eq!(parse_price("-0"), Some(0.0));
        assert_eq!(parse_price("-0.01"), None);
        assert_eq!(parse_price("NaN"), None);
        assert_eq!(parse_price("inf"), None);
        assert_eq!(parse_price("$2.50"), None);
        assert_eq!(parse_price(""), None);
    }
}
