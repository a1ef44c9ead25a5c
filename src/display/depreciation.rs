//! Depreciation schedule display formatting

use crate::models::DepreciationRow;

/// Format a depreciation schedule as an aligned table
pub fn format_depreciation_table(rows: &[DepreciationRow], fraction_digits: u32) -> String {
    if rows.is_empty() {
        return "No depreciation rows.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:>4} {:>14} {:>14} {:>16}\n",
        "Year", "Depreciation", "Accumulated", "Net Book Value"
    ));
    output.push_str(&"-".repeat(51));
    output.push('\n');

    for row in rows {
        output.push_str(&format!(
            "{:>4} {:>14} {:>14} {:>16}\n",
            row.year,
            row.depreciation.format(fraction_digits),
            row.accumulated.format(fraction_digits),
            row.net_book_value.format(fraction_digits),
        ));
    }

    output
}
