use anyhow::{Context, Result};
use ledger_model::RunSummary;
use ledger_report::{summary_json, summary_table};

use crate::cli::SummaryFormatArg;

pub fn print_summary(summary: &RunSummary, format: SummaryFormatArg) -> Result<()> {
    match format {
        SummaryFormatArg::Table => {
            println!("{}", summary_table(summary));
        }
        SummaryFormatArg::Json => {
            let json = summary_json(summary).context("serialize run summary")?;
            println!("{json}");
        }
    }
    Ok(())
}
