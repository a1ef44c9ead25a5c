//! Formatting for the single-result calculators (VAT, break-even, payroll)

use crate::engines::{BreakEvenResult, PayrollResult, VatBreakdown};

/// Format a VAT breakdown
pub fn format_vat_breakdown(breakdown: &VatBreakdown, fraction_digits: u32) -> String {
    format!(
        "Net: {}\nVAT: {}\nGross (incl. VAT): {}\n",
        breakdown.net.format(fraction_digits),
        breakdown.vat.format(fraction_digits),
        breakdown.gross.format(fraction_digits),
    )
}

/// Format a break-even analysis
pub fn format_break_even(result: &BreakEvenResult, fraction_digits: u32) -> String {
    format!(
        "Contribution margin: {}\nBreak-even units: {}\nBreak-even revenue: {}\nUnits for target profit: {}\n",
        result.contribution_margin.format(fraction_digits),
        result.break_even_units.format(fraction_digits),
        result.break_even_revenue.format(fraction_digits),
        result.target_units.format(fraction_digits),
    )
}

/// Format a payroll deduction breakdown
pub fn format_payroll(result: &PayrollResult, fraction_digits: u32) -> String {
    format!(
        "Gross: {}\nSocial security: {}\nIncome tax: {}\nStamp tax: {}\nNet: {}\n",
        result.gross.format(fraction_digits),
        result.social_security.format(fraction_digits),
        result.income_tax.format(fraction_digits),
        result.stamp_tax.format(fraction_digits),
        result.net.format(fraction_digits),
    )
}
