//! Line-oriented order report.

use std::fmt::Display;
use std::io::{self, Write};

use ledger_model::{OrderRecord, ValidOrder};
use ledger_validate::ValidationError;

/// Line closing every accepted order block.
pub const SEPARATOR: &str = "------------------------------";

/// Prefix of the line reported for a rejected order.
pub const INVALID_ORDER_PREFIX: &str = "Invalid order data:";

/// Formats a currency amount with two decimals.
pub fn format_amount(amount: f64) -> String {
    format!("${amount:.2}")
}

/// Renders the block for an accepted order, including the trailing newline.
pub fn render_order(order: &ValidOrder) -> String {
    format!(
        "Order ID: {}\nItem: {}\nQuantity: {}\nTotal Cost: {}\n{SEPARATOR}\n",
        order.order_id,
        order.item,
        order.quantity,
        format_amount(order.total()),
    )
}

/// Renders the diagnostic line for a rejected order.
pub fn render_failure(record: &OrderRecord, error: &ValidationError) -> String {
    format!("{INVALID_ORDER_PREFIX} {error} (row {})\n", record.row)
}

/// Renders the diagnostic line for a source that could not be read.
pub fn render_source_error(error: &dyn Display) -> String {
    format!("Error: {error}\n")
}

/// Writes report lines to an output stream.
///
/// Each call writes one complete block, so the output order is exactly the
/// call order.
pub struct ReportEmitter<W: Write> {
    out: W,
}

impl<W: Write> ReportEmitter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Reports one record and its validation outcome.
    pub fn emit(
        &mut self,
        record: &OrderRecord,
        outcome: &Result<ValidOrder, ValidationError>,
    ) -> io::Result<()> {
        let text = match outcome {
            Ok(order) => render_order(order),
            Err(error) => render_failure(record, error),
        };
        self.write_block(&text)
    }

    /// Reports a source-level failure.
    pub fn emit_source_error(&mut self, error: &dyn Display) -> io::Result<()> {
        self.write_block(&render_source_error(error))
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    fn write_block(&mut self, text: &str) -> io::Result<()> {
        self.out.write_all(text.as_bytes())
    }
}
