use serde::Serialize;

/// Counters accumulated over one processing run.
///
/// Only counts and the running grand total are kept; records themselves are
/// dropped as soon as they are reported.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RunSummary {
    /// Display name of the source (path or `<stdin>`).
    pub source: String,
    /// Data rows read from the source.
    pub records: usize,
    /// Rows that passed validation.
    pub accepted: usize,
    /// Rows rejected by validation.
    pub rejected: usize,
    /// Sum of the totals of accepted rows.
    pub grand_total: f64,
    /// Message of the source-level failure, if the source could not be read.
    pub source_error: Option<String>,
}

impl RunSummary {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            ..Self::default()
        }
    }

    pub fn record_accepted(&mut self, total: f64) {
        self.records += 1;
        self.accepted += 1;
        self.grand_total += total;
    }

    pub fn record_rejected(&mut self) {
        self.records += 1;
        self.rejected += 1;
    }

    pub fn record_source_error(&mut self, message: impl Into<String>) {
        self.source_error = Some(message.into());
    }

    /// True when any row was rejected or the source failed.
    pub fn has_failures(&self) -> bool {
        self.rejected > 0 || self.source_error.is_some()
    }
}
