//! CLI command handlers
//!
//! Bridges clap argument parsing with the calculation engines. Numeric
//! arguments arrive as free-form strings and go through the same lenient
//! or strict decimal parsing the engines use, so the forgiving-calculator
//! policy applies at the command line too.

pub mod breakeven;
pub mod depreciation;
pub mod inventory;
pub mod loan;
pub mod payroll;
pub mod vat;

pub use breakeven::{handle_breakeven_command, BreakEvenArgs};
pub use depreciation::{handle_depreciation_command, DepreciationArgs};
pub use inventory::{handle_inventory_command, InventoryArgs};
pub use loan::{handle_loan_command, LoanArgs};
pub use payroll::{handle_payroll_command, PayrollArgs};
pub use vat::{handle_vat_command, VatArgs};

use clap::ValueEnum;

use crate::error::FincalcResult;
use crate::models::{Money, Strictness};

/// How a command renders its result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Aligned terminal table / summary text
    #[default]
    Table,
    /// Pretty JSON on stdout
    Json,
}

/// Parse a numeric command-line argument
///
/// Lenient mode substitutes zero and notes the substitution on stderr so
/// it is visible without failing the command; strict mode errors.
pub fn read_amount(label: &str, text: &str, strictness: Strictness) -> FincalcResult<Money> {
    if strictness.is_strict() {
        return Money::parse_strict(text);
    }
    let outcome = Money::parse_lenient(text);
    if outcome.is_defaulted() {
        eprintln!("warning: could not read {} '{}', using 0", label, text);
    }
    Ok(outcome.value())
}
