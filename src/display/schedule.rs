//! Amortization schedule display formatting

use crate::models::{ScheduleRow, ScheduleTotals};

/// Format a schedule as an aligned table
pub fn format_schedule_table(rows: &[ScheduleRow], fraction_digits: u32) -> String {
    if rows.is_empty() {
        return "No schedule rows.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:>6} {:>14} {:>14} {:>14} {:>14}\n",
        "Period", "Payment", "Interest", "Principal", "Balance"
    ));
    output.push_str(&"-".repeat(66));
    output.push('\n');

    for row in rows {
        output.push_str(&format!(
            "{:>6} {:>14} {:>14} {:>14} {:>14}\n",
            row.period,
            row.payment.format(fraction_digits),
            row.interest.format(fraction_digits),
            row.principal_component.format(fraction_digits),
            row.remaining_balance.format(fraction_digits),
        ));
    }

    output
}

/// One-line summary shown above the table
pub fn format_schedule_summary(
    rows: &[ScheduleRow],
    totals: &ScheduleTotals,
    fraction_digits: u32,
) -> String {
    let monthly = rows
        .first()
        .map(|r| r.payment.format(fraction_digits))
        .unwrap_or_else(|| "0".to_string());
    format!(
        "Monthly payment: {} | Total paid: {} | Total interest: {}\n",
        monthly,
        totals.total_payment.format(fraction_digits),
        totals.total_interest.format(fraction_digits),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engines::{build_schedule, schedule_totals};
    use crate::models::{LoanTerm, Money};
    use rust_decimal_macros::dec;

    #[test]
    fn test_table_contains_all_periods() {
        let term = LoanTerm::new(
            Money::from_decimal(dec!(12000)),
            Money::ZERO,
            12,
        );
        let rows = build_schedule(&term).unwrap();
        let table = format_schedule_table(&rows, 2);
        assert!(table.contains("Period"));
        assert!(table.lines().count() >= 14); // header + separator + 12 rows
        assert!(table.contains("1.000,00"));
    }

    #[test]
    fn test_summary() {
        let term = LoanTerm::new(
            Money::from_decimal(dec!(12000)),
            Money::ZERO,
            12,
        );
        let rows = build_schedule(&term).unwrap();
        let totals = schedule_totals(&rows);
        let summary = format_schedule_summary(&rows, &totals, 2);
        assert!(summary.contains("Monthly payment: 1.000,00"));
        assert!(summary.contains("Total paid: 12.000,00"));
        assert!(summary.contains("Total interest: 0,00"));
    }
}
