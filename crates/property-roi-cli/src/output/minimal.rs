use property_roi_core::formatting::format_percent;
use property_roi_core::property_roi::InvestmentAnalysis;

/// Print just the annualized combined ROI.
pub fn print_minimal(analysis: &InvestmentAnalysis) {
    println!("{}", format_percent(analysis.summary.combined_roi));
}
