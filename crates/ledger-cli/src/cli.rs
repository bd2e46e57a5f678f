//! CLI argument definitions for the order ledger.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "order-ledger",
    version,
    about = "Order ledger - total CSV orders line by line",
    long_about = "Read orders from a CSV file and report the total cost of each one.\n\n\
                  Rows that fail validation are reported inline and never stop the run.\n\
                  Expected columns: order_id, item, quantity, price_per_item."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Include order values (identifiers, raw fields) in debug logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Process an order file and print one report block per order.
    Process(ProcessArgs),

    /// List the order columns and the values they accept.
    Fields,
}

#[derive(Parser)]
pub struct ProcessArgs {
    /// Path to the order CSV file, or `-` for standard input.
    #[arg(value_name = "SOURCE", default_value = "orders.csv")]
    pub source: String,

    /// Field delimiter: a single ASCII character, or `tab`.
    #[arg(
        long = "delimiter",
        value_name = "CHAR",
        default_value = ",",
        value_parser = parse_delimiter
    )]
    pub delimiter: u8,

    /// Print a run summary after the report (table or json).
    #[arg(
        long = "summary",
        value_enum,
        value_name = "FORMAT",
        num_args = 0..=1,
        default_missing_value = "table"
    )]
    pub summary: Option<SummaryFormatArg>,

    /// Exit with status 1 when any order is rejected or the source fails.
    ///
    /// By default the run always exits successfully once the report has been
    /// written, regardless of rejected orders.
    #[arg(long = "fail-on-invalid")]
    pub fail_on_invalid: bool,
}

/// Run summary formats.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum SummaryFormatArg {
    Table,
    Json,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

fn parse_delimiter(value: &str) -> Result<u8, String> {
    if value.eq_ignore_ascii_case("tab") || value == "\\t" {
        return Ok(b'\t');
    }
    match value.as_bytes() {
        [byte] if byte.is_ascii() && *byte != b'"' && *byte != b'\n' && *byte != b'\r' => {
            Ok(*byte)
        }
        _ => Err(format!(
            "delimiter must be a single ASCII character other than a quote or newline, \
             got '{value}'"
        )),
    }
}
