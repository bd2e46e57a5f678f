//! Order ledger data model.
//!
//! Fixed-shape order records as read from a tabular source, the typed form a
//! record takes once validated, and the counters accumulated over one run.

pub mod field;
pub mod order;
pub mod summary;

pub use field::{FieldType, OrderField};
pub use order::{OrderRecord, Quantity, ValidOrder};
pub use summary::RunSummary;
