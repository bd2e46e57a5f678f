use std::io;

use anyhow::{Context, Result};
use ledger_cli::pipeline::{ProcessOptions, SourceSpec, process};
use ledger_ingest::SourceOptions;
use ledger_model::RunSummary;
use ledger_report::fields_table;
use tracing::info;

use crate::cli::ProcessArgs;

pub fn run_fields() -> Result<()> {
    println!("{}", fields_table());
    Ok(())
}

pub fn run_process(args: &ProcessArgs) -> Result<RunSummary> {
    let options = ProcessOptions::new(SourceSpec::from_arg(&args.source))
        .with_source_options(SourceOptions::default().with_delimiter(args.delimiter));
    info!(source = %options.source, "processing orders");

    let stdout = io::stdout();
    let summary = process(&options, stdout.lock())
        .with_context(|| format!("write order report for {}", options.source))?;
    Ok(summary)
}
