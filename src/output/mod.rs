//! Rendering of the final report.
mod json;
mod summary;


use crate::args::OutputFormat;
use crate::error::AppResult;
use crate::metrics::Report;

pub use json::report_json;
pub use summary::{status_label, summary_lines};

/// Writes the report to stdout in the requested format.
///
/// # Errors
///
/// Returns an error when the JSON payload cannot be serialized.
pub fn print_report(report: &Report, format: OutputFormat) -> AppResult<()> {
    match format {
        OutputFormat::Text => {
            for line in summary_lines(report) {
                println!("{}", line);
            }
        }
        OutputFormat::Json => {
            let payload = serde_json::to_string_pretty(&report_json(report))?;
            println!("{}", payload);
        }
    }
    Ok(())
}
