//! Order ledger ingestion.
//!
//! Reads order rows from a CSV source into fixed-shape [`OrderRecord`]s.
//!
//! # Features
//!
//! - **Lazy reading**: rows are parsed one at a time as the source is iterated
//! - **Header mapping**: columns are matched by name, case-insensitively
//! - **Short rows**: trailing fields missing from a row are left absent
//!
//! # Example
//!
//! ```ignore
//! use ledger_ingest::OrderSource;
//!
//! let source = OrderSource::open("orders.csv")?;
//! for record in source {
//!     let record = record?;
//!     println!("{:?}", record.order_id);
//! }
//! ```
//!
//! [`OrderRecord`]: ledger_model::OrderRecord

mod error;
mod source;

// === Error Types ===
pub use error::{Result, SourceError};

// === Order Sources ===
pub use source::{ColumnMap, OrderSource, STDIN_SOURCE_NAME, SourceOptions};
