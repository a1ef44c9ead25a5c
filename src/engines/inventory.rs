//! Inventory costing engine
//!
//! Applies an ordered list of transactions to a fresh ledger under a fixed
//! costing policy and accumulates cost of goods sold. The ledger always
//! stores layers in acquisition order; the policy only decides the order in
//! which issues consume them and how the ledger is rebuilt afterwards.
//!
//! The consumption/rebuild asymmetry for LIFO is deliberate: issues consume
//! newest-first, but the surviving stock is re-expressed as the oldest
//! layers truncated to the remaining total, matching the source calculator.

use crate::error::{FincalcError, FincalcResult};
use crate::models::{
    CostingPolicy, CostingResult, InventoryLayer, InventoryLedger, Money, Strictness, Transaction,
    TransactionKind,
};

/// Parse raw transaction text, one `KIND;QUANTITY;PRICE` record per line
///
/// Lenient mode skips blank, short, and unknown-kind lines (the original
/// permissive-skip policy); strict mode reports the first offending line.
pub fn parse_transactions(raw: &str, strictness: Strictness) -> FincalcResult<Vec<Transaction>> {
    let mut transactions = Vec::new();
    for (index, line) in raw.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match parse_line(line, strictness) {
            Ok(Some(txn)) => transactions.push(txn),
            Ok(None) => {
                if strictness.is_strict() {
                    return Err(FincalcError::MalformedLine {
                        line: index + 1,
                        content: line.trim().to_string(),
                    });
                }
            }
            Err(err) => return Err(err),
        }
    }
    Ok(transactions)
}

/// Parse one record; `Ok(None)` marks a skippable line in lenient mode
fn parse_line(line: &str, strictness: Strictness) -> FincalcResult<Option<Transaction>> {
    let parts: Vec<&str> = line.split(';').map(str::trim).collect();
    if parts.len() < 3 {
        return Ok(None);
    }
    let Some(kind) = TransactionKind::from_token(parts[0]) else {
        return Ok(None);
    };
    let quantity = Money::parse(parts[1], strictness)?;
    let unit_price = Money::parse(parts[2], strictness)?;
    Ok(Some(Transaction {
        kind,
        quantity,
        unit_price,
    }))
}

/// Run the costing engine over a transaction list
///
/// The ledger is created empty, owned by this call, and returned inside the
/// result; repeated runs over the same input are bit-identical.
pub fn run_costing(
    transactions: &[Transaction],
    policy: CostingPolicy,
    strictness: Strictness,
) -> FincalcResult<CostingResult> {
    let mut ledger = InventoryLedger::new();
    let mut cogs_total = Money::ZERO;
    let mut unfilled_quantity = Money::ZERO;

    for txn in transactions {
        match txn.kind {
            TransactionKind::Receive => policy.receive(&mut ledger, txn.quantity, txn.unit_price),
            TransactionKind::Issue => {
                let issue = policy.issue(&mut ledger, txn.quantity, strictness)?;
                cogs_total += issue.cogs;
                unfilled_quantity += issue.unfilled;
            }
        }
    }

    let ending_quantity = ledger.total_quantity();
    let ending_value = ledger.total_value();
    Ok(CostingResult {
        cogs_total,
        ledger,
        ending_quantity,
        ending_value,
        unfilled_quantity,
    })
}

/// What one issue produced: accrued cost and any unmet demand
struct IssueOutcome {
    cogs: Money,
    unfilled: Money,
}

impl CostingPolicy {
    /// Apply a receipt
    ///
    /// FIFO/LIFO append a layer; weighted average collapses the whole
    /// ledger into a single layer at the blended unit cost.
    fn receive(self, ledger: &mut InventoryLedger, quantity: Money, unit_price: Money) {
        match self {
            CostingPolicy::Fifo | CostingPolicy::Lifo => {
                ledger.push(InventoryLayer::new(quantity, unit_price));
            }
            CostingPolicy::WeightedAverage => {
                let total_quantity = ledger.total_quantity() + quantity;
                let total_cost = ledger.total_value() + quantity * unit_price;
                let avg_cost = if total_quantity.is_zero() {
                    Money::ZERO
                } else {
                    total_cost / total_quantity
                };
                ledger.replace(vec![InventoryLayer::new(total_quantity, avg_cost)]);
            }
        }
    }

    /// Apply an issue of `quantity` units
    fn issue(
        self,
        ledger: &mut InventoryLedger,
        quantity: Money,
        strictness: Strictness,
    ) -> FincalcResult<IssueOutcome> {
        let available = ledger.total_quantity();
        if strictness.is_strict() && quantity > available {
            return Err(FincalcError::InsufficientStock {
                requested: quantity,
                available,
            });
        }

        let outcome = match self {
            CostingPolicy::Fifo => issue_fifo(ledger, quantity),
            CostingPolicy::Lifo => issue_lifo(ledger, quantity),
            CostingPolicy::WeightedAverage => issue_weighted_average(ledger, quantity),
        };
        Ok(outcome)
    }
}

/// FIFO: consume oldest-first; the rebuilt ledger is the partially-consumed
/// remainder plus the untouched newer layers, in original relative order
fn issue_fifo(ledger: &mut InventoryLedger, quantity: Money) -> IssueOutcome {
    let mut cogs = Money::ZERO;
    let mut remaining = quantity;
    let mut survivors = Vec::new();

    for layer in ledger.layers() {
        if !remaining.is_positive() {
            survivors.push(*layer);
            continue;
        }
        let use_qty = layer.quantity.min(remaining);
        cogs += use_qty * layer.unit_cost;
        remaining -= use_qty;
        let left = layer.quantity - use_qty;
        if left.is_positive() {
            survivors.push(InventoryLayer::new(left, layer.unit_cost));
        }
    }

    ledger.replace(survivors);
    IssueOutcome {
        cogs,
        unfilled: remaining.max(Money::ZERO),
    }
}

/// LIFO: consume newest-first, then redistribute the remaining total across
/// the original layers oldest-first (the opposite traversal from the
/// consumption walk)
fn issue_lifo(ledger: &mut InventoryLedger, quantity: Money) -> IssueOutcome {
    let mut cogs = Money::ZERO;
    let mut remaining = quantity;

    for layer in ledger.layers().iter().rev() {
        if !remaining.is_positive() {
            break;
        }
        let use_qty = layer.quantity.min(remaining);
        cogs += use_qty * layer.unit_cost;
        remaining -= use_qty;
    }

    // Rebuild: oldest layers, in original order, truncated to the new total
    let mut to_keep = ledger.total_quantity() - quantity;
    let mut survivors = Vec::new();
    for layer in ledger.layers() {
        if !to_keep.is_positive() {
            break;
        }
        let keep_qty = layer.quantity.min(to_keep);
        survivors.push(InventoryLayer::new(keep_qty, layer.unit_cost));
        to_keep -= keep_qty;
    }

    ledger.replace(survivors);
    IssueOutcome {
        cogs,
        unfilled: remaining.max(Money::ZERO),
    }
}

/// Weighted average: a single blended layer shrinks by the issued quantity
/// at the current average cost, clamped at zero
fn issue_weighted_average(ledger: &mut InventoryLedger, quantity: Money) -> IssueOutcome {
    let current_quantity = ledger.total_quantity();
    let avg_cost = ledger
        .layers()
        .first()
        .map(|l| l.unit_cost)
        .unwrap_or(Money::ZERO);

    let filled = quantity.min(current_quantity).max(Money::ZERO);
    let cogs = filled * avg_cost;
    let left = (current_quantity - quantity).max(Money::ZERO);

    ledger.replace(vec![InventoryLayer::new(left, avg_cost)]);
    IssueOutcome {
        cogs,
        unfilled: quantity - filled,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn money(d: rust_decimal::Decimal) -> Money {
        Money::from_decimal(d)
    }

    fn receive(qty: rust_decimal::Decimal, price: rust_decimal::Decimal) -> Transaction {
        Transaction::receive(money(qty), money(price))
    }

    fn issue(qty: rust_decimal::Decimal) -> Transaction {
        Transaction::issue(money(qty))
    }

    fn layer(qty: rust_decimal::Decimal, cost: rust_decimal::Decimal) -> InventoryLayer {
        InventoryLayer::new(money(qty), money(cost))
    }

    #[test]
    fn test_parse_transactions_lenient_skips_bad_lines() {
        let raw = "ALIS;100;10\n\nnot a line\nSATIS;120;0\nRECEIVE;5\n";
        let txns = parse_transactions(raw, Strictness::Lenient).unwrap();
        assert_eq!(txns.len(), 2);
        assert_eq!(txns[0].kind, TransactionKind::Receive);
        assert_eq!(txns[0].quantity, money(dec!(100)));
        assert_eq!(txns[1].kind, TransactionKind::Issue);
    }

    #[test]
    fn test_parse_transactions_strict_reports_line() {
        let raw = "RECEIVE;100;10\nRECEIVE;5\n";
        let err = parse_transactions(raw, Strictness::Strict).unwrap_err();
        match err {
            FincalcError::MalformedLine { line, .. } => assert_eq!(line, 2),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_parse_transactions_strict_bad_number() {
        let raw = "RECEIVE;abc;10\n";
        assert!(parse_transactions(raw, Strictness::Strict).is_err());
        // Lenient substitutes zero instead
        let txns = parse_transactions(raw, Strictness::Lenient).unwrap();
        assert!(txns[0].quantity.is_zero());
    }

    #[test]
    fn test_receives_only_accumulate() {
        for policy in [
            CostingPolicy::Fifo,
            CostingPolicy::Lifo,
            CostingPolicy::WeightedAverage,
        ] {
            let txns = vec![receive(dec!(100), dec!(10)), receive(dec!(50), dec!(12))];
            let result = run_costing(&txns, policy, Strictness::Lenient).unwrap();
            assert!(result.cogs_total.is_zero(), "{policy}");
            assert_eq!(result.ending_quantity, money(dec!(150)), "{policy}");
            assert!(result.unfilled_quantity.is_zero());
        }
    }

    #[test]
    fn test_fifo_scenario() {
        // Receive 100@10, Receive 50@12, Issue 120 -> 100@10 + 20@12
        let txns = vec![
            receive(dec!(100), dec!(10)),
            receive(dec!(50), dec!(12)),
            issue(dec!(120)),
        ];
        let result = run_costing(&txns, CostingPolicy::Fifo, Strictness::Lenient).unwrap();
        assert_eq!(result.cogs_total, money(dec!(1240)));
        assert_eq!(result.ledger.layers(), &[layer(dec!(30), dec!(12))]);
        assert_eq!(result.ending_quantity, money(dec!(30)));
        assert_eq!(result.ending_value, money(dec!(360)));
    }

    #[test]
    fn test_lifo_scenario() {
        // Same input, newest-first consumption: 50@12 + 70@10
        let txns = vec![
            receive(dec!(100), dec!(10)),
            receive(dec!(50), dec!(12)),
            issue(dec!(120)),
        ];
        let result = run_costing(&txns, CostingPolicy::Lifo, Strictness::Lenient).unwrap();
        assert_eq!(result.cogs_total, money(dec!(1300)));
        // Rebuild walks oldest-first up to the remaining 30 units
        assert_eq!(result.ledger.layers(), &[layer(dec!(30), dec!(10))]);
        assert_eq!(result.ending_value, money(dec!(300)));
    }

    #[test]
    fn test_weighted_average_scenario() {
        // avg = (1000 + 600) / 150 = 10.6667; COGS = 120 * avg = 1280
        let txns = vec![
            receive(dec!(100), dec!(10)),
            receive(dec!(50), dec!(12)),
            issue(dec!(120)),
        ];
        let result =
            run_costing(&txns, CostingPolicy::WeightedAverage, Strictness::Lenient).unwrap();
        assert_eq!(result.cogs_total.format(2), "1.280,00");
        assert_eq!(result.ending_quantity, money(dec!(30)));
        let remaining = result.ledger.layers();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].unit_cost.format(4), "10,6667");
    }

    #[test]
    fn test_fifo_partial_layer_consumption() {
        let txns = vec![
            receive(dec!(10), dec!(5)),
            receive(dec!(10), dec!(6)),
            receive(dec!(10), dec!(7)),
            issue(dec!(5)),
        ];
        let result = run_costing(&txns, CostingPolicy::Fifo, Strictness::Lenient).unwrap();
        assert_eq!(result.cogs_total, money(dec!(25)));
        assert_eq!(
            result.ledger.layers(),
            &[
                layer(dec!(5), dec!(5)),
                layer(dec!(10), dec!(6)),
                layer(dec!(10), dec!(7)),
            ]
        );
    }

    #[test]
    fn test_lifo_rebuild_order_is_oldest_first() {
        // Three layers, issue eats the newest entirely and part of the middle;
        // the rebuilt ledger is the oldest layers truncated to the new total.
        let txns = vec![
            receive(dec!(10), dec!(5)),
            receive(dec!(10), dec!(6)),
            receive(dec!(10), dec!(7)),
            issue(dec!(15)),
        ];
        let result = run_costing(&txns, CostingPolicy::Lifo, Strictness::Lenient).unwrap();
        // COGS: 10@7 + 5@6 = 100
        assert_eq!(result.cogs_total, money(dec!(100)));
        // Remaining 15 units re-expressed oldest-first: 10@5 + 5@6
        assert_eq!(
            result.ledger.layers(),
            &[layer(dec!(10), dec!(5)), layer(dec!(5), dec!(6))]
        );
    }

    #[test]
    fn test_over_issue_lenient_truncates() {
        let txns = vec![receive(dec!(100), dec!(10)), issue(dec!(150))];
        for policy in [
            CostingPolicy::Fifo,
            CostingPolicy::Lifo,
            CostingPolicy::WeightedAverage,
        ] {
            let result = run_costing(&txns, policy, Strictness::Lenient).unwrap();
            assert_eq!(result.cogs_total, money(dec!(1000)), "{policy}");
            assert!(result.ending_quantity.is_zero(), "{policy}");
            assert_eq!(result.unfilled_quantity, money(dec!(50)), "{policy}");
        }
    }

    #[test]
    fn test_over_issue_strict_errors() {
        let txns = vec![receive(dec!(100), dec!(10)), issue(dec!(150))];
        let err = run_costing(&txns, CostingPolicy::Fifo, Strictness::Strict).unwrap_err();
        match err {
            FincalcError::InsufficientStock {
                requested,
                available,
            } => {
                assert_eq!(requested, money(dec!(150)));
                assert_eq!(available, money(dec!(100)));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_weighted_average_empty_ledger_receive() {
        let txns = vec![receive(dec!(0), dec!(10))];
        let result =
            run_costing(&txns, CostingPolicy::WeightedAverage, Strictness::Lenient).unwrap();
        assert!(result.ending_quantity.is_zero());
        assert!(result.ending_value.is_zero());
    }

    #[test]
    fn test_runs_are_deterministic() {
        let txns = vec![
            receive(dec!(100), dec!(10)),
            issue(dec!(40)),
            receive(dec!(50), dec!(12)),
            issue(dec!(80)),
        ];
        let a = run_costing(&txns, CostingPolicy::Lifo, Strictness::Lenient).unwrap();
        let b = run_costing(&txns, CostingPolicy::Lifo, Strictness::Lenient).unwrap();
        assert_eq!(a, b);
    }
}
