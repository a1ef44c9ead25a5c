//! fincalc - Desktop financial calculators for the terminal
//!
//! This library provides the calculation engines behind the `fincalc`
//! command-line tool: inventory costing (FIFO, LIFO, weighted average),
//! annuity loan amortization, depreciation schedules, VAT, break-even
//! analysis, and gross-to-net payroll.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core value types (money, transactions, inventory layers)
//! - `engines`: Pure calculation functions
//! - `display`: Terminal table and summary formatting
//! - `export`: CSV and JSON serialization of results
//! - `cli`: Command handlers
//!
//! All arithmetic runs on exact decimals; rounding happens once, at
//! format time.
//!
//! # Example
//!
//! ```rust,ignore
//! use fincalc::engines::{build_schedule, schedule_totals};
//! use fincalc::models::{LoanTerm, Money};
//!
//! let term = LoanTerm::new(Money::from_int(100_000), Money::from_int(36), 24);
//! let rows = build_schedule(&term)?;
//! let totals = schedule_totals(&rows);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod engines;
pub mod error;
pub mod export;
pub mod models;

pub use error::FincalcError;
