use std::fmt;

/// A named column of the order ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum OrderField {
    OrderId,
    Item,
    Quantity,
    PricePerItem,
}

/// Value type a column must hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    /// Free text.
    Text,
    /// Non-negative integer.
    Count,
    /// Finite, non-negative real number.
    Amount,
}

impl OrderField {
    /// All columns in ledger order.
    pub const ALL: [OrderField; 4] = [
        OrderField::OrderId,
        OrderField::Item,
        OrderField::Quantity,
        OrderField::PricePerItem,
    ];

    /// Column name as it appears in the header row.
    pub fn column_name(&self) -> &'static str {
        match self {
            OrderField::OrderId => "order_id",
            OrderField::Item => "item",
            OrderField::Quantity => "quantity",
            OrderField::PricePerItem => "price_per_item",
        }
    }

    /// Human-readable label used in report output.
    pub fn label(&self) -> &'static str {
        match self {
            OrderField::OrderId => "Order ID",
            OrderField::Item => "Item",
            OrderField::Quantity => "Quantity",
            OrderField::PricePerItem => "Price per item",
        }
    }

    /// Whether a row is rejected when this field is absent or blank.
    ///
    /// Identifier and item are reported as given, empty when missing.
    pub fn is_required(&self) -> bool {
        matches!(self, OrderField::Quantity | OrderField::PricePerItem)
    }

    pub fn field_type(&self) -> FieldType {
        match self {
            OrderField::OrderId | OrderField::Item => FieldType::Text,
            OrderField::Quantity => FieldType::Count,
            OrderField::PricePerItem => FieldType::Amount,
        }
    }

    /// Looks up a field by header name.
    ///
    /// Surrounding whitespace and a leading byte-order mark are ignored, and
    /// the comparison is case-insensitive.
    pub fn from_column(name: &str) -> Option<Self> {
        let cleaned = name.strip_prefix('\u{feff}').unwrap_or(name).trim();
        Self::ALL
            .into_iter()
            .find(|field| field.column_name().eq_ignore_ascii_case(cleaned))
    }
}

impl fmt::Display for OrderField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column_name())
    }
}

impl FieldType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::Text => "text",
            FieldType::Count => "non-negative integer",
            FieldType::Amount => "non-negative number",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
