//! Order record validation.
//!
//! Turns a raw [`OrderRecord`] into a typed [`ValidOrder`], or reports the
//! first field that does not conform. Validation is pure: it never logs and
//! never touches I/O.

mod error;
mod parse;

pub use error::ValidationError;
pub use parse::{parse_price, parse_quantity};

use ledger_model::{OrderField, OrderRecord, ValidOrder};

/// Validates the quantity and unit price of a record.
///
/// Quantity is checked before price and the first failure is returned: a
/// required field that is absent or blank is [`ValidationError::MissingField`],
/// one that is present but does not parse is [`ValidationError::InvalidFormat`].
/// Identifier and item are not validated; they are trimmed and an absent value
/// becomes empty.
pub fn validate_order(record: &OrderRecord) -> Result<ValidOrder, ValidationError> {
    let quantity = required(record, OrderField::Quantity, parse_quantity)?;
    let price_per_item = required(record, OrderField::PricePerItem, parse_price)?;
    Ok(ValidOrder {
        order_id: text(record, OrderField::OrderId),
        item: text(record, OrderField::Item),
        quantity,
        price_per_item,
    })
}

fn text(record: &OrderRecord, field: OrderField) -> String {
    record.get(field).map(str::trim).unwrap_or_default().to_string()
}

fn required<T>(
    record: &OrderRecord,
    field: OrderField,
    parse: fn(&str) -> Option<T>,
) -> Result<T, ValidationError> {
    let value = record
        .get(field)
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .ok_or(ValidationError::MissingField { field })?;
    parse(value).ok_or_else(|| ValidationError::InvalidFormat {
        field,
        value: value.to_string(),
    })
}
