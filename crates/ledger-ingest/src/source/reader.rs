//! Lazy CSV order source.

use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord};
use ledger_model::OrderRecord;
use tracing::{debug, warn};

use crate::error::{Result, SourceError};

use super::header::ColumnMap;

/// Display name used for sources read from standard input.
pub const STDIN_SOURCE_NAME: &str = "<stdin>";

/// Parsing options for an order source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceOptions {
    /// Field separator byte.
    pub delimiter: u8,
}

impl Default for SourceOptions {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}

impl SourceOptions {
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }
}

/// A finite, non-restartable sequence of order records read from CSV.
///
/// The header row is read when the source is opened; data rows are parsed one
/// per call to [`Iterator::next`]. After the first read error the iterator
/// yields that error once and then ends.
pub struct OrderSource<R> {
    path: PathBuf,
    reader: csv::Reader<R>,
    columns: ColumnMap,
    buffer: StringRecord,
    finished: bool,
}

impl OrderSource<File> {
    /// Opens a CSV file with default options.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Self::open_with_options(path, SourceOptions::default())
    }

    /// Opens a CSV file.
    ///
    /// A missing file is [`SourceError::SourceNotFound`]; any other failure to
    /// open the file or read its header is [`SourceError::SourceUnreadable`].
    pub fn open_with_options(path: impl AsRef<Path>, options: SourceOptions) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| SourceError::from_io(path, &e))?;
        Self::from_reader(file, path, options)
    }
}

impl OrderSource<io::Stdin> {
    /// Reads CSV from standard input.
    pub fn stdin(options: SourceOptions) -> Result<Self> {
        Self::from_reader(io::stdin(), STDIN_SOURCE_NAME, options)
    }
}

impl<R: Read> OrderSource<R> {
    /// Wraps any reader. `name` is only used in diagnostics.
    pub fn from_reader(reader: R, name: impl AsRef<Path>, options: SourceOptions) -> Result<Self> {
        let path = name.as_ref().to_path_buf();
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .delimiter(options.delimiter)
            .from_reader(reader);

        let headers = reader
            .headers()
            .map_err(|e| SourceError::unreadable(&path, e))?;
        let columns = ColumnMap::from_headers(headers.iter());

        if columns.is_empty() {
            warn!(source = %path.display(), "source has no header row");
        } else {
            let missing = columns.missing_fields();
            if !missing.is_empty() {
                let names: Vec<&str> = missing.iter().map(|field| field.column_name()).collect();
                warn!(
                    source = %path.display(),
                    missing = ?names,
                    "header is missing order columns"
                );
            }
        }
        debug!(source = %path.display(), columns = columns.len(), "opened order source");

        Ok(Self {
            path,
            reader,
            columns,
            buffer: StringRecord::new(),
            finished: false,
        })
    }

    /// Source path or display name.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Header column mapping.
    pub fn columns(&self) -> &ColumnMap {
        &self.columns
    }
}

impl<R: Read> Iterator for OrderSource<R> {
    type Item = Result<OrderRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        match self.reader.read_record(&mut self.buffer) {
            Ok(true) => {
                let row = self.buffer.position().map_or(0, csv::Position::line);
                if self.buffer.len() > self.columns.len() {
                    debug!(
                        row,
                        fields = self.buffer.len(),
                        columns = self.columns.len(),
                        "row has more fields than header"
                    );
                }
                Some(Ok(self.columns.build_record(row, self.buffer.iter())))
            }
            Ok(false) => {
                self.finished = true;
                None
            }
            Err(e) => {
                self.finished = true;
                Some(Err(SourceError::unreadable(&self.path, e)))
            }
        }
    }
}

impl<R: Read> std::iter::FusedIterator for OrderSource<R> {}

#[cfg(test)]
mod tests {
    use super::*;
    use ledger_model::OrderField;

    fn source(content: &str) -> OrderSource<&[u8]> {
        OrderSource::from_reader(content.as_bytes(), "test.csv", SourceOptions::default())
            .unwrap()
    }

    #[test]
    fn test_reads_rows_in_order() {
        let records: Vec<OrderRecord> = source(
            "order_id,item,quantity,price_per_item\nO1,Pen,3,2.50\nO2,Mug,x,5.00\n",
        )
        .collect::<Result<_>>()
        .unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].row, 2);
        assert_eq!(records[0].get(OrderField::OrderId), Some("O1"));
        assert_eq!(records[1].row, 3);
        assert_eq!(records[1].get(OrderField::Quantity), Some("x"));
    }

    #[test]
    fn test_header_only_yields_nothing() {
        let mut src = source("order_id,item,quantity,price_per_item\n");
        assert!(src.next().is_none());
    }

    #[test]
    fn test_empty_input_yields_nothing() {
        let mut src = source("");
        assert!(src.columns().is_empty());
        assert!(src.next().is_none());
    }

    #[test]
    fn test_short_row_is_not_an_error() {
        let records: Vec<OrderRecord> = source("order_id,item,quantity,price_per_item\nO1,Pen\n")
            .collect::<Result<_>>()
            .unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].get(OrderField::Quantity), None);
    }

    #[test]
    fn test_quoted_fields() {
        let records: Vec<OrderRecord> =
            source("order_id,item,quantity,price_per_item\nO1,\"Pen, blue\",3,2.50\n")
                .collect::<Result<_>>()
                .unwrap();
        assert_eq!(records[0].get(OrderField::Item), Some("Pen, blue"));
    }

    #[test]
    fn test_custom_delimiter() {
        let src = OrderSource::from_reader(
            "order_id;item;quantity;price_per_item\nO1;Pen;3;2.50\n".as_bytes(),
            "test.csv",
            SourceOptions::default().with_delimiter(b';'),
        )
        .unwrap();
        let records: Vec<OrderRecord> = src.collect::<Result<_>>().unwrap();
        assert_eq!(records[0].get(OrderField::PricePerItem), Some("2.50"));
    }

    #[test]
    fn test_invalid_utf8_row_ends_sequence() {
        let mut bytes = b"order_id,item,quantity,price_per_item\nO1,Pen,3,2.50\nO2,".to_vec();
        bytes.extend_from_slice(&[0xff, 0xfe]);
        bytes.extend_from_slice(b",1,1.00\nO3,Cup,1,1.00\n");

        let mut src =
            OrderSource::from_reader(bytes.as_slice(), "bad.csv", SourceOptions::default())
                .unwrap();
        assert!(matches!(src.next(), Some(Ok(_))));
        assert!(matches!(
            src.next(),
            Some(Err(SourceError::SourceUnreadable { .. }))
        ));
        assert!(src.next().is_none());
    }
}
