pub mod analysis;
pub mod params;
pub mod schedule;
pub mod summary;

pub use analysis::{analyze_investment, InvestmentAnalysis};
pub use params::InvestmentParams;
pub use schedule::{build_schedule, LedgerRow, Schedule};
pub use summary::{compute_summary, SummaryMetrics};
