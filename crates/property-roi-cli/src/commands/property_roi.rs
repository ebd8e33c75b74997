use clap::Args;

use property_roi_core::property_roi::analyze_investment;

use crate::input;
use crate::output::Report;

/// Arguments for the amortization and ROI calculation
#[derive(Args)]
pub struct CalArgs {
    /// JSON parameter file (`-` for stdin); fields it omits keep their defaults
    #[arg(long)]
    pub input: Option<String>,
}

pub fn run_cal(args: CalArgs) -> Result<Report, Box<dyn std::error::Error>> {
    let params = input::load_params(args.input.as_deref())?;
    let output = analyze_investment(&params)?;
    Ok(Report { params, output })
}
