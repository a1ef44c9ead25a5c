//! CSV export
//!
//! Serializes schedule rows with locale-formatted cells. The loan schedule
//! header `Donem,Taksit,Faiz,Anapara,Bakiye` is the exact header the
//! original desktop calculator wrote; files produced here stay
//! drop-in-compatible with consumers of that artifact.

use std::io::Write;

use crate::error::FincalcResult;
use crate::models::{DepreciationRow, ScheduleRow};

/// Loan schedule CSV header (kept byte-identical to the original export)
pub const SCHEDULE_CSV_HEADER: [&str; 5] = ["Donem", "Taksit", "Faiz", "Anapara", "Bakiye"];

/// Depreciation schedule CSV header
pub const DEPRECIATION_CSV_HEADER: [&str; 4] = ["Yil", "Amortisman", "Birikmis", "NetDefterDegeri"];

/// Write an amortization schedule as CSV
pub fn export_schedule_csv<W: Write>(
    rows: &[ScheduleRow],
    fraction_digits: u32,
    writer: W,
) -> FincalcResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(SCHEDULE_CSV_HEADER)?;
    for row in rows {
        csv_writer.write_record([
            row.period.to_string(),
            row.payment.format(fraction_digits),
            row.interest.format(fraction_digits),
            row.principal_component.format(fraction_digits),
            row.remaining_balance.format(fraction_digits),
        ])?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Write a depreciation schedule as CSV
pub fn export_depreciation_csv<W: Write>(
    rows: &[DepreciationRow],
    fraction_digits: u32,
    writer: W,
) -> FincalcResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(DEPRECIATION_CSV_HEADER)?;
    for row in rows {
        csv_writer.write_record([
            row.year.to_string(),
            row.depreciation.format(fraction_digits),
            row.accumulated.format(fraction_digits),
            row.net_book_value.format(fraction_digits),
        ])?;
    }
    csv_writer.flush()?;
    Ok(())
}
