use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::types::{with_metadata, ComputationOutput, Money};
use crate::RoiResult;

use super::params::InvestmentParams;
use super::schedule::{build_schedule, Schedule};
use super::summary::{compute_summary, SummaryMetrics};

/// Ledger and return metrics for one investment scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestmentAnalysis {
    pub loan_principal: Money,
    pub down_payment: Money,
    pub schedule: Schedule,
    pub summary: SummaryMetrics,
}

/// Run the amortization ledger and ROI summary for `params`.
///
/// Returns a `ComputationOutput<InvestmentAnalysis>` with the inputs echoed as
/// assumptions and warnings for balances the flat schedule leaves behind.
pub fn analyze_investment(
    params: &InvestmentParams,
) -> RoiResult<ComputationOutput<InvestmentAnalysis>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    let schedule = build_schedule(params)?;
    let summary = compute_summary(params, schedule.total_interest)?;

    collect_warnings(params, &schedule, &summary, &mut warnings);

    let output = InvestmentAnalysis {
        loan_principal: params.loan_principal(),
        down_payment: params.down_payment(),
        schedule,
        summary,
    };

    let elapsed = start.elapsed().as_micros() as u64;

    Ok(with_metadata(
        "Flat-Principal Amortization with Annualized Property ROI",
        params,
        warnings,
        elapsed,
        output,
    ))
}

fn collect_warnings(
    params: &InvestmentParams,
    schedule: &Schedule,
    summary: &SummaryMetrics,
    warnings: &mut Vec<String>,
) {
    let balance = schedule.outstanding_balance;

    if params.holding_months < params.loan_term_months {
        warnings.push(format!(
            "Holding period of {} months ends before the {}-month loan term; \
             {} of principal is still outstanding",
            params.holding_months,
            params.loan_term_months,
            balance.normalize()
        ));
    } else if !balance.is_zero() {
        warnings.push(format!(
            "Flat principal of {} per month leaves a residual balance of {} \
             after the {}-month loan term",
            schedule.average_principal_repayment,
            balance.normalize(),
            params.loan_term_months
        ));
    }

    if summary.appreciation_roi < Decimal::ZERO {
        warnings.push(format!(
            "Resale price {} is below total cost {}; appreciation return is negative",
            params.resale_price.normalize(),
            summary.total_cost.normalize()
        ));
    }
}
