//! Tabular renderings of run summaries and the field list.

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use ledger_model::{OrderField, RunSummary};

use crate::emitter::format_amount;

/// Builds the end-of-run summary table.
pub fn summary_table(summary: &RunSummary) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Source"),
        header_cell("Records"),
        header_cell("Accepted"),
        header_cell("Rejected"),
        header_cell("Grand Total"),
        header_cell("Source Error"),
    ]);
    apply_summary_table_style(&mut table);
    for index in 1..=4 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    table.add_row(vec![
        Cell::new(&summary.source)
            .fg(Color::Blue)
            .add_attribute(Attribute::Bold),
        Cell::new(summary.records),
        count_cell(summary.accepted, Color::Green),
        count_cell(summary.rejected, Color::Red),
        Cell::new(format_amount(summary.grand_total)).add_attribute(Attribute::Bold),
        match &summary.source_error {
            Some(message) => Cell::new(message).fg(Color::Red),
            None => dim_cell("-"),
        },
    ]);
    table
}

/// Serializes the summary as pretty-printed JSON.
pub fn summary_json(summary: &RunSummary) -> serde_json::Result<String> {
    serde_json::to_string_pretty(summary)
}

/// Builds the table of recognised order columns.
pub fn fields_table() -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Label"),
        header_cell("Type"),
        header_cell("Required"),
    ]);
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    align_column(&mut table, 3, CellAlignment::Center);
    for field in OrderField::ALL {
        table.add_row(vec![
            Cell::new(field.column_name())
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(field.label()),
            Cell::new(field.field_type()),
            if field.is_required() {
                Cell::new("✓").fg(Color::Green)
            } else {
                dim_cell("-")
            },
        ]);
    }
    table
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
