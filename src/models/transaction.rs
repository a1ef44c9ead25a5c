//! Inventory transaction records
//!
//! A costing run consumes an ordered list of transactions, each either a
//! receipt into stock or an issue out of it.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::Money;

/// Direction of an inventory transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Goods received into stock at a unit price
    Receive,
    /// Goods issued out of stock (cost derived from the ledger)
    Issue,
}

impl TransactionKind {
    /// Recognize a kind token from an input line
    ///
    /// The Turkish tokens are accepted so input files written for the
    /// original calculator keep working.
    pub fn from_token(token: &str) -> Option<Self> {
        match token.trim().to_uppercase().as_str() {
            "RECEIVE" | "ALIS" => Some(Self::Receive),
            "ISSUE" | "SATIS" => Some(Self::Issue),
            _ => None,
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Receive => write!(f, "RECEIVE"),
            Self::Issue => write!(f, "ISSUE"),
        }
    }
}

/// One inventory movement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Receive or issue
    pub kind: TransactionKind,
    /// Quantity moved
    pub quantity: Money,
    /// Unit price; meaningful for receipts only, ignored for issues
    pub unit_price: Money,
}

impl Transaction {
    /// Create a receipt
    pub fn receive(quantity: Money, unit_price: Money) -> Self {
        Self {
            kind: TransactionKind::Receive,
            quantity,
            unit_price,
        }
    }

    /// Create an issue (the unit price field is irrelevant and kept zero)
    pub fn issue(quantity: Money) -> Self {
        Self {
            kind: TransactionKind::Issue,
            quantity,
            unit_price: Money::ZERO,
        }
    }
}
