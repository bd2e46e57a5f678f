//! Order ledger report rendering.
//!
//! [`ReportEmitter`] writes one block per order in input order; the table
//! helpers render the run summary and the recognised field list.

pub mod emitter;
pub mod table;

pub use emitter::{
    INVALID_ORDER_PREFIX, ReportEmitter, SEPARATOR, format_amount, render_failure, render_order,
    render_source_error,
};
pub use table::{fields_table, summary_json, summary_table};
