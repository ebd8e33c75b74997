use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::RoiError;
use crate::types::{Money, Months, Rate, Years};
use crate::RoiResult;

/// Longest loan term or holding period accepted (100 years).
pub const MAX_MONTHS: Months = 1200;

/// Largest purchase price, rent or resale price accepted.
pub const MAX_AMOUNT: Money = dec!(1_000_000_000_000_000);

/// Parameters of a leveraged property purchase held for a fixed period.
///
/// Missing fields deserialize to the reference scenario in [`Default`], so a
/// partial JSON document only overrides what it names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InvestmentParams {
    /// Purchase price of the property
    pub purchase_price: Money,
    /// Down payment as a percentage of the purchase price (20 = 20%)
    pub down_payment_rate: Rate,
    /// Scheduled loan term in months
    pub loan_term_months: Months,
    /// Annual loan interest rate as a percentage (1.9 = 1.9%)
    pub loan_rate: Rate,
    /// Gross rent collected per year
    pub annual_rent: Money,
    /// Months the property is held before resale
    pub holding_months: Months,
    /// Expected resale price at the end of the holding period
    pub resale_price: Money,
}

impl Default for InvestmentParams {
    fn default() -> Self {
        Self {
            purchase_price: dec!(10_000_000),
            down_payment_rate: dec!(20),
            loan_term_months: 360,
            loan_rate: dec!(1.9),
            annual_rent: dec!(300_000),
            holding_months: 240,
            resale_price: dec!(12_000_000),
        }
    }
}

impl InvestmentParams {
    /// Amount borrowed: purchase price less the down payment.
    pub fn loan_principal(&self) -> Money {
        self.purchase_price * (Decimal::ONE - self.down_payment_rate / dec!(100))
    }

    pub fn down_payment(&self) -> Money {
        self.purchase_price * self.down_payment_rate / dec!(100)
    }

    /// Holding period in (possibly fractional) years.
    pub fn own_years(&self) -> Years {
        Decimal::from(self.holding_months) / dec!(12)
    }

    pub fn validate(&self) -> RoiResult<()> {
        if self.purchase_price <= Decimal::ZERO {
            return Err(invalid("purchase_price", "Purchase price must be positive"));
        }
        if self.down_payment_rate < Decimal::ZERO || self.down_payment_rate >= dec!(100) {
            return Err(invalid(
                "down_payment_rate",
                "Down payment rate must be a percentage in [0, 100)",
            ));
        }
        if self.loan_rate < Decimal::ZERO || self.loan_rate >= dec!(100) {
            return Err(invalid(
                "loan_rate",
                "Loan rate must be a percentage in [0, 100)",
            ));
        }
        if self.loan_term_months == 0 {
            return Err(invalid("loan_term_months", "Loan term must be at least 1 month"));
        }
        if self.holding_months == 0 {
            return Err(invalid(
                "holding_months",
                "Holding period must be at least 1 month",
            ));
        }
        if self.annual_rent < Decimal::ZERO {
            return Err(invalid("annual_rent", "Annual rent cannot be negative"));
        }
        if self.resale_price < Decimal::ZERO {
            return Err(invalid("resale_price", "Resale price cannot be negative"));
        }

        for (field, months) in [
            ("loan_term_months", self.loan_term_months),
            ("holding_months", self.holding_months),
        ] {
            if months > MAX_MONTHS {
                return Err(invalid(
                    field,
                    &format!("Must not exceed {MAX_MONTHS} months"),
                ));
            }
        }
        for (field, amount) in [
            ("purchase_price", self.purchase_price),
            ("annual_rent", self.annual_rent),
            ("resale_price", self.resale_price),
        ] {
            if amount > MAX_AMOUNT {
                return Err(invalid(field, &format!("Must not exceed {MAX_AMOUNT}")));
            }
        }
        Ok(())
    }
}

fn invalid(field: &str, reason: &str) -> RoiError {
    RoiError::InvalidParameter {
        field: field.into(),
        reason: reason.into(),
    }
}
