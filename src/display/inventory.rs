//! Inventory costing display formatting

use crate::models::{CostingResult, Transaction};

/// Format the parsed transaction list as an aligned table
pub fn format_transactions_table(transactions: &[Transaction], fraction_digits: u32) -> String {
    if transactions.is_empty() {
        return "No transactions.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:<8} {:>12} {:>12}\n",
        "Kind", "Quantity", "Unit Price"
    ));
    output.push_str(&"-".repeat(34));
    output.push('\n');

    for txn in transactions {
        output.push_str(&format!(
            "{:<8} {:>12} {:>12}\n",
            txn.kind.to_string(),
            txn.quantity.format(fraction_digits),
            txn.unit_price.format(fraction_digits),
        ));
    }

    output
}

/// Format the run summary: COGS, ending stock, and remaining layers
pub fn format_costing_summary(result: &CostingResult, fraction_digits: u32) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "Cost of goods sold (COGS): {}\n",
        result.cogs_total.format(fraction_digits)
    ));
    output.push_str(&format!(
        "Ending stock: {} units | Value: {}\n",
        result.ending_quantity.format(fraction_digits),
        result.ending_value.format(fraction_digits),
    ));

    if result.unfilled_quantity.is_positive() {
        output.push_str(&format!(
            "Warning: {} units of issue demand could not be met (ledger exhausted)\n",
            result.unfilled_quantity.format(fraction_digits)
        ));
    }

    if !result.ledger.is_empty() {
        output.push_str("Remaining layers (oldest first):\n");
        for layer in result.ledger.layers() {
            output.push_str(&format!(
                "  {} units @ {}\n",
                layer.quantity.format(fraction_digits),
                layer.unit_cost.format(fraction_digits),
            ));
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engines::{parse_transactions, run_costing};
    use crate::models::{CostingPolicy, Strictness};

    #[test]
    fn test_summary_mentions_cogs_and_layers() {
        let txns =
            parse_transactions("ALIS;100;10\nALIS;50;12\nSATIS;120;0", Strictness::Lenient)
                .unwrap();
        let result = run_costing(&txns, CostingPolicy::Fifo, Strictness::Lenient).unwrap();
        let summary = format_costing_summary(&result, 2);
        assert!(summary.contains("COGS"));
        assert!(summary.contains("1.240,00"));
        assert!(summary.contains("30,00 units @ 12,00"));
        assert!(!summary.contains("Warning"));
    }

    #[test]
    fn test_summary_warns_on_unmet_demand() {
        let txns = parse_transactions("RECEIVE;100;10\nISSUE;150;0", Strictness::Lenient).unwrap();
        let result = run_costing(&txns, CostingPolicy::Fifo, Strictness::Lenient).unwrap();
        let summary = format_costing_summary(&result, 2);
        assert!(summary.contains("Warning"));
        assert!(summary.contains("50,00"));
    }

    #[test]
    fn test_transactions_table() {
        let txns = parse_transactions("RECEIVE;100;10\nISSUE;20;0", Strictness::Lenient).unwrap();
        let table = format_transactions_table(&txns, 2);
        assert!(table.contains("RECEIVE"));
        assert!(table.contains("ISSUE"));
        assert!(table.contains("100,00"));
    }
}
