//! Export module for fincalc
//!
//! Serializes computed schedules and results:
//! - CSV: spreadsheet-compatible, with the original calculator's headers
//! - JSON: machine-readable, full precision

pub mod csv;
pub mod json;

pub use csv::{
    export_depreciation_csv, export_schedule_csv, DEPRECIATION_CSV_HEADER, SCHEDULE_CSV_HEADER,
};
pub use json::{export_costing_json, export_depreciation_json, export_schedule_json};
