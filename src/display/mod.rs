//! Display formatting for terminal output
//!
//! Pure string builders; nothing here prints or touches the engines'
//! computation.

pub mod depreciation;
pub mod inventory;
pub mod schedule;
pub mod summary;

pub use depreciation::format_depreciation_table;
pub use inventory::{format_costing_summary, format_transactions_table};
pub use schedule::{format_schedule_summary, format_schedule_table};
pub use summary::{format_break_even, format_payroll, format_vat_breakdown};
