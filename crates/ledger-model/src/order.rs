use std::fmt;
use std::str::FromStr;

use crate::field::OrderField;

/// One data row of an order source.
///
/// Each column is populated once when the row is read; a field is `None` when
/// its column is absent from the header or the row is too short to reach it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderRecord {
    /// 1-based line number of the row in the source, counting the header.
    pub row: u64,
    pub order_id: Option<String>,
    pub item: Option<String>,
    pub quantity: Option<String>,
    pub price_per_item: Option<String>,
}

impl OrderRecord {
    pub fn new(row: u64) -> Self {
        Self {
            row,
            ..Self::default()
        }
    }

    /// Sets a field, consuming and returning the record.
    #[must_use]
    pub fn with(mut self, field: OrderField, value: impl Into<String>) -> Self {
        self.set(field, value.into());
        self
    }

    pub fn set(&mut self, field: OrderField, value: String) {
        *self.slot_mut(field) = Some(value);
    }

    /// Raw text of a field, if present.
    pub fn get(&self, field: OrderField) -> Option<&str> {
        match field {
            OrderField::OrderId => self.order_id.as_deref(),
            OrderField::Item => self.item.as_deref(),
            OrderField::Quantity => self.quantity.as_deref(),
            OrderField::PricePerItem => self.price_per_item.as_deref(),
        }
    }

    fn slot_mut(&mut self, field: OrderField) -> &mut Option<String> {
        match field {
            OrderField::OrderId => &mut self.order_id,
            OrderField::Item => &mut self.item,
            OrderField::Quantity => &mut self.quantity,
            OrderField::PricePerItem => &mut self.price_per_item,
        }
    }
}

/// A non-negative whole quantity of any magnitude.
///
/// Kept as its canonical digit string (no sign, no leading zeros) so values
/// beyond any fixed-width integer still display exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quantity {
    digits: String,
}

impl Quantity {
    pub fn as_str(&self) -> &str {
        &self.digits
    }

    /// Quantity as a float, for multiplying with a unit price.
    pub fn as_f64(&self) -> f64 {
        // An all-digit string always parses; very long ones round to infinity.
        self.digits.parse().unwrap_or(f64::INFINITY)
    }
}

impl FromStr for Quantity {
    type Err = String;

    /// Accepts ASCII digits with an optional leading `+`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix('+').unwrap_or(s);
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(format!("not a non-negative integer: {s}"));
        }
        let trimmed = digits.trim_start_matches('0');
        let digits = if trimmed.is_empty() { "0" } else { trimmed };
        Ok(Self {
            digits: digits.to_string(),
        })
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.digits)
    }
}

/// An order whose quantity and unit price passed validation.
///
/// Identifier and item are carried through as trimmed text; an absent value
/// is empty.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidOrder {
    pub order_id: String,
    pub item: String,
    pub quantity: Quantity,
    pub price_per_item: f64,
}

impl ValidOrder {
    /// Quantity times unit price, unrounded.
    pub fn total(&self) -> f64 {
        self.quantity.as_f64() * self.price_per_item
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_builder_sets_fields() {
        let record = OrderRecord::new(2)
            .with(OrderField::OrderId, "O1")
            .with(OrderField::Quantity, "3");

        assert_eq!(record.row, 2);
        assert_eq!(record.get(OrderField::OrderId), Some("O1"));
        assert_eq!(record.get(OrderField::Quantity), Some("3"));
        assert_eq!(record.get(OrderField::Item), None);
        assert_eq!(record.get(OrderField::PricePerItem), None);
    }

    #[test]
    fn valid_order_total_multiplies() {
        let order = ValidOrder {
            order_id: "O1".to_string(),
            item: "Pen".to_string(),
            quantity: "3".parse().unwrap(),
            price_per_item: 2.5,
        };
        assert_eq!(order.total(), 7.5);
    }

    #[test]
    fn zero_quantity_totals_zero() {
        let order = ValidOrder {
            order_id: "O9".to_string(),
            item: "Sample".to_string(),
            quantity: "0".parse().unwrap(),
            price_per_item: 12.0,
        };
        assert_eq!(order.total(), 0.0);
    }

    #[test]
    fn quantity_parses_canonical_digits() {
        assert_eq!("3".parse::<Quantity>().unwrap().as_str(), "3");
        assert_eq!("+007".parse::<Quantity>().unwrap().as_str(), "7");
        assert_eq!("000".parse::<Quantity>().unwrap().as_str(), "0");
        assert!("".parse::<Quantity>().is_err());
        assert!("+".parse::<Quantity>().is_err());
        assert!("-1".parse::<Quantity>().is_err());
        assert!("1.5".parse::<Quantity>().is_err());
        assert!("1e3".parse::<Quantity>().is_err());
    }

    #[test]
    fn quantity_beyond_u64_keeps_digits() {
        let quantity: Quantity = "18446744073709551616".parse().unwrap();
        assert_eq!(quantity.to_string(), "18446744073709551616");
        assert_eq!(quantity.as_f64(), 18_446_744_073_709_551_616.0);
    }
}
