pub mod csv_out;
pub mod json;
pub mod labels;
pub mod minimal;
pub mod table;

use property_roi_core::property_roi::{InvestmentAnalysis, InvestmentParams};
use property_roi_core::ComputationOutput;

use crate::OutputFormat;
use labels::Locale;

/// A finished calculation together with the parameters that produced it.
pub struct Report {
    pub params: InvestmentParams,
    pub output: ComputationOutput<InvestmentAnalysis>,
}

/// Dispatch output to the appropriate formatter.
pub fn format_output(format: &OutputFormat, locale: Locale, report: &Report) {
    match format {
        OutputFormat::Table => table::print_report(report, locale),
        OutputFormat::Json => json::print_json(&report.output),
        OutputFormat::Csv => csv_out::print_csv(&report.output.result.schedule.rows),
        OutputFormat::Minimal => minimal::print_minimal(&report.output.result),
    }
}
