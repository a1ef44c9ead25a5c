//! Gross-to-net payroll calculation
//!
//! The deduction order is fixed: social security first, income tax on the
//! base net of social security, stamp tax on the gross (not net-of-SS),
//! then the net wage. Reordering changes the result, so the sequence is
//! kept exactly as the source calculator computes it.

use serde::{Deserialize, Serialize};

use crate::models::Money;

/// Payroll deduction breakdown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollResult {
    /// Gross wage the deductions start from
    pub gross: Money,
    /// Employee social security contribution
    pub social_security: Money,
    /// Income tax base (gross minus social security)
    pub taxable_base: Money,
    /// Income tax on the taxable base
    pub income_tax: Money,
    /// Stamp tax on the gross
    pub stamp_tax: Money,
    /// Net wage after all deductions
    pub net: Money,
}

/// Compute the deduction sequence for one gross wage
///
/// Rates are percentages (14 means 14%).
pub fn payroll(
    gross: Money,
    ss_rate_pct: Money,
    income_tax_rate_pct: Money,
    stamp_rate_pct: Money,
) -> PayrollResult {
    let hundred = Money::from_int(100);
    let social_security = gross * (ss_rate_pct / hundred);
    let taxable_base = gross - social_security;
    let income_tax = taxable_base * (income_tax_rate_pct / hundred);
    let stamp_tax = gross * (stamp_rate_pct / hundred);
    let net = gross - social_security - income_tax - stamp_tax;

    PayrollResult {
        gross,
        social_security,
        taxable_base,
        income_tax,
        stamp_tax,
        net,
    }
}
