//! CSV order sources.

mod header;
mod reader;

pub use header::ColumnMap;
pub use reader::{OrderSource, STDIN_SOURCE_NAME, SourceOptions};
