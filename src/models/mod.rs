//! Core data models for fincalc
//!
//! This module contains the value types shared by the calculation engines:
//! the decimal money type with its lenient parsing policy, inventory ledger
//! types, and the row types produced by the schedule builders.

pub mod depreciation;
pub mod inventory;
pub mod loan;
pub mod money;
pub mod transaction;

pub use depreciation::{DepreciationMethod, DepreciationRow};
pub use inventory::{CostingPolicy, CostingResult, InventoryLayer, InventoryLedger};
pub use loan::{LoanTerm, ScheduleRow, ScheduleTotals};
pub use money::{Money, ParseOutcome, Strictness};
pub use transaction::{Transaction, TransactionKind};
