use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::rounding::round_half_up;
use crate::types::{Money, Months};
use crate::RoiResult;

use super::params::InvestmentParams;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// One month of the holding period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerRow {
    /// 1-based month index
    pub month: Months,
    /// Scheduled principal repayment (zero after the loan term)
    pub principal_repayment: Money,
    /// Scheduled interest on the balance at the start of the month
    pub interest: Money,
    /// Principal plus interest
    pub total_payment: Money,
    /// Rent collected this month
    pub rent: Money,
    /// Rent less total payment
    pub net_cash_flow: Money,
    /// Rent as a percentage of interest; `None` when no interest is due
    pub rent_to_interest_ratio: Option<Decimal>,
}

impl LedgerRow {
    fn new(month: Months, principal_repayment: Money, interest: Money, rent: Money) -> Self {
        let total_payment = principal_repayment + interest;
        Self {
            month,
            principal_repayment,
            interest,
            total_payment,
            rent,
            net_cash_flow: rent - total_payment,
            rent_to_interest_ratio: rent_to_interest_ratio(rent, interest),
        }
    }
}

/// Month-by-month ledger for the holding period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    /// Exactly `holding_months` rows, in month order
    pub rows: Vec<LedgerRow>,
    /// Sum of interest over every row
    pub total_interest: Money,
    /// Flat principal repaid each month of the loan term
    pub average_principal_repayment: Money,
    /// Loan balance left when the holding period ends
    pub outstanding_balance: Money,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Build the flat-principal amortization ledger over the holding period.
///
/// Each month of the loan term repays `round(principal / term)` and pays
/// interest on the balance outstanding at the start of the month. Months past
/// the loan term carry rent only. The last loan month is not adjusted for
/// rounding drift, so `outstanding_balance` may be a few units away from
/// zero even when the holding period covers the whole term.
pub fn build_schedule(params: &InvestmentParams) -> RoiResult<Schedule> {
    params.validate()?;

    let loan_principal = params.loan_principal();
    let average_principal_repayment = round_half_up(
        loan_principal / Decimal::from(params.loan_term_months),
        0,
    );
    let annual_rate = params.loan_rate / dec!(100);
    let monthly_rent = round_half_up(params.annual_rent / dec!(12), 0);

    let mut balance = loan_principal;
    let mut total_interest = Decimal::ZERO;
    let mut rows = Vec::with_capacity(params.holding_months as usize);

    for month in 1..=params.holding_months {
        let (principal_repayment, interest) = if month <= params.loan_term_months {
            let interest = round_half_up(balance * annual_rate / dec!(12), 0);
            balance -= average_principal_repayment;
            (average_principal_repayment, interest)
        } else {
            (Decimal::ZERO, Decimal::ZERO)
        };

        total_interest += interest;
        rows.push(LedgerRow::new(month, principal_repayment, interest, monthly_rent));
    }

    Ok(Schedule {
        rows,
        total_interest,
        average_principal_repayment,
        outstanding_balance: balance,
    })
}

fn rent_to_interest_ratio(rent: Money, interest: Money) -> Option<Decimal> {
    if interest > Decimal::ZERO {
        Some(round_half_up(rent / interest * dec!(100), 0))
    } else {
        None
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
