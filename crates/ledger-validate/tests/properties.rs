//! Property tests for order validation.

use ledger_model::{OrderField, OrderRecord};
use ledger_validate::{ValidationError, validate_order};
use proptest::prelude::*;

fn record(quantity: &str, price: &str) -> OrderRecord {
    OrderRecord::new(2)
        .with(OrderField::OrderId, "O1")
        .with(OrderField::Item, "Widget")
        .with(OrderField::Quantity, quantity)
        .with(OrderField::PricePerItem, price)
}

proptest! {
    #[test]
    fn total_is_quantity_times_price(quantity in 0u64..1_000_000, cents in 0u64..10_000_000) {
        let price = cents as f64 / 100.0;
        let order = validate_order(&record(&quantity.to_string(), &price.to_string())).unwrap();

        let expected = quantity as f64 * price;
        prop_assert!((order.total() - expected).abs() <= f64::EPSILON * expected.abs().max(1.0));
        prop_assert_eq!(order.quantity.to_string(), quantity.to_string());
    }

    #[test]
    fn negative_quantity_is_invalid_format(quantity in 1i64..1_000_000) {
        let raw = format!("-{quantity}");
        let err = validate_order(&record(&raw, "1.00")).unwrap_err();
        let expected = ValidationError::InvalidFormat {
            field: OrderField::Quantity,
            value: raw,
        };
        prop_assert_eq!(err, expected);
    }

    #[test]
    fn alphabetic_price_is_invalid_format(price in "[a-zA-Z]{1,8}") {
        let err = validate_order(&record("1", &price)).unwrap_err();
        prop_assert_eq!(err.field(), OrderField::PricePerItem);
        prop_assert_eq!(err.value(), Some(price.as_str()));
    }

    #[test]
    fn large_quantity_digits_are_kept(digits in "[1-9][0-9]{19,40}") {
        let order = validate_order(&record(&digits, "1")).unwrap();
        prop_assert_eq!(order.quantity.as_str(), digits.as_str());
        prop_assert!(order.total() >= 1e19);
    }

    #[test]
    fn validation_is_deterministic(quantity in "[0-9x-]{0,4}", price in "[0-9.]{0,5}") {
        let row = record(&quantity, &price);
        prop_assert_eq!(validate_order(&row), validate_order(&row));
    }
}
