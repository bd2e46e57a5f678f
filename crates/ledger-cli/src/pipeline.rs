//! Order processing pipeline: read, validate, report.
//!
//! Records flow strictly one at a time: each row is read, validated and
//! reported before the next row is read. Source failures end the record
//! sequence with a single diagnostic; record failures only affect their row.

use std::fmt;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::time::Instant;

use ledger_ingest::{OrderSource, STDIN_SOURCE_NAME, SourceError, SourceOptions};
use ledger_model::RunSummary;
use ledger_report::ReportEmitter;
use ledger_validate::validate_order;
use tracing::{debug, info, info_span};

use crate::logging::redact_value;

/// Source argument value that selects standard input.
pub const STDIN_ARG: &str = "-";

/// Where orders are read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceSpec {
    Path(PathBuf),
    Stdin,
}

impl SourceSpec {
    /// Interprets a command-line source argument; `-` selects stdin.
    pub fn from_arg(arg: &str) -> Self {
        if arg == STDIN_ARG {
            Self::Stdin
        } else {
            Self::Path(PathBuf::from(arg))
        }
    }
}

impl fmt::Display for SourceSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Path(path) => write!(f, "{}", path.display()),
            Self::Stdin => f.write_str(STDIN_SOURCE_NAME),
        }
    }
}

/// Settings for one processing run.
#[derive(Debug, Clone)]
pub struct ProcessOptions {
    pub source: SourceSpec,
    pub source_options: SourceOptions,
}

impl ProcessOptions {
    pub fn new(source: SourceSpec) -> Self {
        Self {
            source,
            source_options: SourceOptions::default(),
        }
    }

    #[must_use]
    pub fn with_source_options(mut self, source_options: SourceOptions) -> Self {
        self.source_options = source_options;
        self
    }
}

/// Opens the configured source and reports every order to `out`.
///
/// # Errors
///
/// Only failures writing to `out` are returned; source and record failures
/// are reported inline and counted in the summary.
pub fn process<W: Write>(options: &ProcessOptions, out: W) -> io::Result<RunSummary> {
    let name = options.source.to_string();
    match &options.source {
        SourceSpec::Path(path) => process_source(
            OrderSource::open_with_options(path, options.source_options),
            &name,
            out,
        ),
        SourceSpec::Stdin => process_source(OrderSource::stdin(options.source_options), &name, out),
    }
}

/// Reports every order of an already opened (or failed) source.
///
/// # Errors
///
/// Only failures writing to `out` are returned.
pub fn process_source<R: Read, W: Write>(
    opened: Result<OrderSource<R>, SourceError>,
    name: &str,
    out: W,
) -> io::Result<RunSummary> {
    let span = info_span!("process", source = %name);
    let _guard = span.enter();
    let start = Instant::now();
    let mut emitter = ReportEmitter::new(out);
    let mut summary = RunSummary::new(name);

    match opened {
        Ok(source) => {
            for item in source {
                match item {
                    Ok(record) => {
                        let outcome = validate_order(&record);
                        match &outcome {
                            Ok(order) => {
                                debug!(
                                    row = record.row,
                                    order_id = redact_value(&order.order_id),
                                    total = order.total(),
                                    "order accepted"
                                );
                                summary.record_accepted(order.total());
                            }
                            Err(error) => {
                                debug!(
                                    row = record.row,
                                    field = %error.field(),
                                    value = error.value().map(redact_value),
                                    "order rejected"
                                );
                                summary.record_rejected();
                            }
                        }
                        emitter.emit(&record, &outcome)?;
                    }
                    Err(error) => report_source_error(&mut emitter, &mut summary, &error)?,
                }
            }
        }
        Err(error) => report_source_error(&mut emitter, &mut summary, &error)?,
    }

    emitter.flush()?;
    info!(
        records = summary.records,
        accepted = summary.accepted,
        rejected = summary.rejected,
        source_failed = summary.source_error.is_some(),
        duration_ms = start.elapsed().as_millis(),
        "processing complete"
    );
    Ok(summary)
}

fn report_source_error<W: Write>(
    emitter: &mut ReportEmitter<W>,
    summary: &mut RunSummary,
    error: &SourceError,
) -> io::Result<()> {
    info!(source = %error.path().display(), error = %error, "source failed");
    summary.record_source_error(error.to_string());
    emitter.emit_source_error(error)
}
