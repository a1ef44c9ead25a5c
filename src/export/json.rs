//! JSON export
//!
//! Machine-readable serialization of engine results. Values are emitted at
//! full precision (serde renders the underlying decimal), not the rounded
//! locale strings the CSV export uses.

use serde::Serialize;
use std::io::Write;

use crate::error::FincalcResult;
use crate::models::{CostingResult, DepreciationRow, ScheduleRow, ScheduleTotals};

/// A schedule plus its column totals, as one JSON document
#[derive(Serialize)]
struct ScheduleExport<'a> {
    rows: &'a [ScheduleRow],
    totals: &'a ScheduleTotals,
}

/// Write an amortization schedule with totals as pretty JSON
pub fn export_schedule_json<W: Write>(
    rows: &[ScheduleRow],
    totals: &ScheduleTotals,
    writer: W,
) -> FincalcResult<()> {
    serde_json::to_writer_pretty(writer, &ScheduleExport { rows, totals })?;
    Ok(())
}

/// Write a depreciation schedule as pretty JSON
pub fn export_depreciation_json<W: Write>(rows: &[DepreciationRow], writer: W) -> FincalcResult<()> {
    serde_json::to_writer_pretty(writer, &rows)?;
    Ok(())
}

/// Write a costing result as pretty JSON
pub fn export_costing_json<W: Write>(result: &CostingResult, writer: W) -> FincalcResult<()> {
    serde_json::to_writer_pretty(writer, result)?;
    Ok(())
}
