use ledger_model::OrderField;
use thiserror::Error;

/// Why a single order record was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is absent or blank.
    #[error("missing field '{field}'")]
    MissingField { field: OrderField },

    /// A field is present but its value does not parse.
    #[error("invalid {kind} '{value}' for field '{field}'", kind = .field.field_type())]
    InvalidFormat { field: OrderField, value: String },
}

impl ValidationError {
    /// Field that failed validation.
    pub fn field(&self) -> OrderField {
        match self {
            Self::MissingField { field } | Self::InvalidFormat { field, .. } => *field,
        }
    }

    /// Offending raw value, when one was present.
    pub fn value(&self) -> Option<&str> {
        match self {
            Self::MissingField { .. } => None,
            Self::InvalidFormat { value, .. } => Some(value),
        }
    }
}
