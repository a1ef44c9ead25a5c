//! Inventory ledger types
//!
//! The ledger is an ordered sequence of cost layers, oldest acquisition
//! first. It is created empty at the start of a costing run, mutated
//! transaction by transaction, and discarded with the run; nothing persists
//! across runs. Storage order is always acquisition order — the costing
//! policy only changes the order in which layers are *consumed*.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::Money;

/// Costing policy for a whole run (fixed, never re-selected mid-run)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CostingPolicy {
    /// First in, first out: oldest layers are consumed first
    Fifo,
    /// Last in, first out: newest layers are consumed first
    Lifo,
    /// Weighted average: every receipt blends the ledger into one layer
    WeightedAverage,
}

impl fmt::Display for CostingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fifo => write!(f, "FIFO"),
            Self::Lifo => write!(f, "LIFO"),
            Self::WeightedAverage => write!(f, "Weighted Average"),
        }
    }
}

/// One surviving acquisition batch: a quantity held at a single unit cost
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryLayer {
    /// Units remaining in this batch (always positive in a stored ledger)
    pub quantity: Money,
    /// Acquisition cost per unit
    pub unit_cost: Money,
}

impl InventoryLayer {
    /// Create a layer
    pub fn new(quantity: Money, unit_cost: Money) -> Self {
        Self {
            quantity,
            unit_cost,
        }
    }

    /// Total value of the batch
    pub fn value(&self) -> Money {
        self.quantity * self.unit_cost
    }
}

/// Ordered collection of layers, oldest first
///
/// Layers whose quantity falls to zero are dropped, never retained as
/// placeholders.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryLedger(Vec<InventoryLayer>);

impl InventoryLedger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a layer at the newest position; zero-quantity layers are
    /// silently discarded
    pub fn push(&mut self, layer: InventoryLayer) {
        if layer.quantity.is_positive() {
            self.0.push(layer);
        }
    }

    /// Replace the entire contents (used by the per-policy rebuild steps)
    pub fn replace(&mut self, layers: Vec<InventoryLayer>) {
        self.0 = layers
            .into_iter()
            .filter(|l| l.quantity.is_positive())
            .collect();
    }

    /// The layers, oldest first
    pub fn layers(&self) -> &[InventoryLayer] {
        &self.0
    }

    /// Whether any stock is held
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Units held across all layers
    pub fn total_quantity(&self) -> Money {
        self.0.iter().map(|l| l.quantity).sum()
    }

    /// Value held across all layers (quantity times unit cost per layer)
    pub fn total_value(&self) -> Money {
        self.0.iter().map(|l| l.value()).sum()
    }
}

/// Aggregate result of a costing run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostingResult {
    /// Cost of goods sold accumulated over all issues
    pub cogs_total: Money,
    /// The surviving ledger at end of run
    pub ledger: InventoryLedger,
    /// Units remaining
    pub ending_quantity: Money,
    /// Value remaining
    pub ending_value: Money,
    /// Issue demand that could not be met because the ledger ran dry
    /// (always zero in strict mode, which errors instead)
    pub unfilled_quantity: Money,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn money(d: rust_decimal::Decimal) -> Money {
        Money::from_decimal(d)
    }

    #[test]
    fn test_zero_layers_are_dropped() {
        let mut ledger = InventoryLedger::new();
        ledger.push(InventoryLayer::new(money(dec!(0)), money(dec!(10))));
        assert!(ledger.is_empty());

        ledger.replace(vec![
            InventoryLayer::new(money(dec!(5)), money(dec!(10))),
            InventoryLayer::new(money(dec!(0)), money(dec!(12))),
        ]);
        assert_eq!(ledger.layers().len(), 1);
    }

    #[test]
    fn test_totals() {
        let mut ledger = InventoryLedger::new();
        ledger.push(InventoryLayer::new(money(dec!(100)), money(dec!(10))));
        ledger.push(InventoryLayer::new(money(dec!(50)), money(dec!(12))));
        assert_eq!(ledger.total_quantity(), money(dec!(150)));
        assert_eq!(ledger.total_value(), money(dec!(1600)));
    }
}
