//! Loan amortization types

use serde::{Deserialize, Serialize};

use crate::models::Money;

/// Parameters of an annuity loan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanTerm {
    /// Amount borrowed
    pub principal: Money,
    /// Nominal annual interest rate, in percent (e.g. 36 for 36%)
    pub annual_rate_pct: Money,
    /// Term in months; must be positive
    pub term_months: u32,
}

impl LoanTerm {
    /// Create a loan term
    pub fn new(principal: Money, annual_rate_pct: Money, term_months: u32) -> Self {
        Self {
            principal,
            annual_rate_pct,
            term_months,
        }
    }
}

/// One period of an amortization schedule
///
/// `payment == interest + principal_component` holds for every row except
/// for the rounding residue allowed on the final row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleRow {
    /// Period number, 1-based
    pub period: u32,
    /// Constant annuity payment
    pub payment: Money,
    /// Interest portion of the payment
    pub interest: Money,
    /// Principal portion of the payment
    pub principal_component: Money,
    /// Balance after this payment (clamped to zero below epsilon)
    pub remaining_balance: Money,
}

/// Column sums over a full schedule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleTotals {
    /// Sum of all payments
    pub total_payment: Money,
    /// Sum of all interest portions
    pub total_interest: Money,
}
