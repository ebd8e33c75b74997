use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::RoiError;
use crate::rounding::round_half_up;
use crate::types::{Money, Rate, Years};
use crate::RoiResult;

use super::params::InvestmentParams;

/// Aggregate return figures for the whole holding period.
///
/// Every ROI is a percentage of total cost (price plus interest), annualized
/// by dividing by the holding period in years and rounded to two places.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryMetrics {
    pub own_years: Years,
    pub total_interest: Money,
    /// Purchase price plus total interest
    pub total_cost: Money,
    /// Annual rent return on total cost
    pub rental_yield_roi: Rate,
    /// Annual resale gain (or loss) on total cost
    pub appreciation_roi: Rate,
    /// Rent and resale gain together
    pub combined_roi: Rate,
}

pub fn compute_summary(
    params: &InvestmentParams,
    total_interest: Money,
) -> RoiResult<SummaryMetrics> {
    let own_years = params.own_years();
    if own_years.is_zero() {
        return Err(RoiError::DivisionUndefined {
            context: "annualizing ROI over a zero-length holding period".into(),
        });
    }

    let total_cost = params
        .purchase_price
        .checked_add(total_interest)
        .ok_or_else(|| overflow("total_cost"))?;
    if total_cost.is_zero() {
        return Err(RoiError::DivisionUndefined {
            context: "ROI on a zero total cost".into(),
        });
    }

    let total_rent = params
        .annual_rent
        .checked_mul(own_years)
        .ok_or_else(|| overflow("annual_rent"))?;
    let capital_gain = params
        .resale_price
        .checked_sub(total_cost)
        .ok_or_else(|| overflow("resale_price"))?;
    let combined_gain = total_rent
        .checked_add(capital_gain)
        .ok_or_else(|| overflow("combined_roi"))?;

    let annualized = |gain: Money, field: &str| -> RoiResult<Rate> {
        gain.checked_div(total_cost)
            .and_then(|share| share.checked_mul(dec!(100)))
            .and_then(|pct| pct.checked_div(own_years))
            .map(|pct| round_half_up(pct, 2))
            .ok_or_else(|| overflow(field))
    };

    Ok(SummaryMetrics {
        own_years,
        total_interest,
        total_cost,
        rental_yield_roi: annualized(total_rent, "rental_yield_roi")?,
        appreciation_roi: annualized(capital_gain, "appreciation_roi")?,
        combined_roi: annualized(combined_gain, "combined_roi")?,
    })
}

fn overflow(field: &str) -> RoiError {
    RoiError::InvalidParameter {
        field: field.into(),
        reason: "Value exceeds the range of decimal arithmetic".into(),
    }
}
