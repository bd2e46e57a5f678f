//! Header row mapping.

use ledger_model::{OrderField, OrderRecord};

/// Maps CSV column positions to order fields.
///
/// Built once from the header row; every data row is then read through it so
/// records are populated by position rather than looked up by name.
#[derive(Debug, Clone, Default)]
pub struct ColumnMap {
    /// One entry per header column; `None` for columns that are not order fields.
    slots: Vec<Option<OrderField>>,
}

impl ColumnMap {
    /// Builds the map from header names.
    ///
    /// When a field name appears more than once, the first column wins.
    pub fn from_headers<'a>(headers: impl IntoIterator<Item = &'a str>) -> Self {
        let mut slots: Vec<Option<OrderField>> = Vec::new();
        for name in headers {
            let field = OrderField::from_column(name).filter(|field| {
                let duplicate = slots.contains(&Some(*field));
                if duplicate {
                    tracing::warn!(column = name, "duplicate column ignored");
                }
                !duplicate
            });
            slots.push(field);
        }
        Self { slots }
    }

    /// Number of header columns.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Position of a field's column, if the header names it.
    pub fn position(&self, field: OrderField) -> Option<usize> {
        self.slots.iter().position(|slot| *slot == Some(field))
    }

    /// Order fields the header does not name.
    pub fn missing_fields(&self) -> Vec<OrderField> {
        OrderField::ALL
            .into_iter()
            .filter(|field| self.position(*field).is_none())
            .collect()
    }

    /// Builds a record from one row of values.
    ///
    /// Values beyond the header width are ignored; fields whose column lies
    /// beyond the end of a short row stay absent.
    pub fn build_record<'a>(
        &self,
        row: u64,
        values: impl IntoIterator<Item = &'a str>,
    ) -> OrderRecord {
        let mut record = OrderRecord::new(row);
        for (slot, value) in self.slots.iter().zip(values) {
            if let Some(field) = slot {
                record.set(*field, value.to_string());
            }
        }
        record
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_maps_known_columns() {
        let map = ColumnMap::from_headers(["order_id", "item", "quantity", "price_per_item"]);
        assert_eq!(map.len(), 4);
        assert_eq!(map.position(OrderField::Quantity), Some(2));
        assert!(map.missing_fields().is_empty());
    }

    #[test]
    fn test_ignores_unknown_columns() {
        let map = ColumnMap::from_headers(["note", "Quantity", "order_id"]);
        assert_eq!(map.position(OrderField::Quantity), Some(1));
        assert_eq!(map.position(OrderField::OrderId), Some(2));
        assert_eq!(
            map.missing_fields(),
            vec![OrderField::Item, OrderField::PricePerItem]
        );
    }

    #[test]
    fn test_duplicate_column_first_wins() {
        let map = ColumnMap::from_headers(["item", "item"]);
        assert_eq!(map.position(OrderField::Item), Some(0));
        let record = map.build_record(2, ["Pen", "Mug"]);
        assert_eq!(record.get(OrderField::Item), Some("Pen"));
    }

    #[test]
    fn test_short_row_leaves_trailing_fields_absent() {
        let map = ColumnMap::from_headers(["order_id", "item", "quantity", "price_per_item"]);
        let record = map.build_record(3, ["O1", "Pen"]);
        assert_eq!(record.row, 3);
        assert_eq!(record.get(OrderField::OrderId), Some("O1"));
        assert_eq!(record.get(OrderField::Item), Some("Pen"));
        assert_eq!(record.get(OrderField::Quantity), None);
        assert_eq!(record.get(OrderField::PricePerItem), None);
    }

    #[test]
    fn test_long_row_ignores_surplus() {
        let map = ColumnMap::from_headers(["order_id", "quantity"]);
        let record = map.build_record(2, ["O1", "3", "extra", "more"]);
        assert_eq!(record.get(OrderField::Quantity), Some("3"));
    }
}
