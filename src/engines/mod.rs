//! Calculation engines for fincalc
//!
//! Every engine is a pure function over value types: no I/O, no global
//! state, no hidden time or randomness. Calling an engine twice with the
//! same inputs yields bit-identical results, and independent calls may run
//! on separate threads because every working structure is freshly built
//! and exclusively owned per call.

pub mod amortization;
pub mod breakeven;
pub mod depreciation;
pub mod inventory;
pub mod payroll;
pub mod vat;

pub use amortization::{annuity_payment, build_schedule, monthly_rate, schedule_totals};
pub use breakeven::{break_even, BreakEvenResult};
pub use depreciation::build_depreciation_schedule;
pub use inventory::{parse_transactions, run_costing};
pub use payroll::{payroll, PayrollResult};
pub use vat::{add_vat, extract_vat, VatBreakdown};
