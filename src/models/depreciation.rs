//! Depreciation schedule types

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::Money;

/// Depreciation method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DepreciationMethod {
    /// Equal depreciation every year over the asset's life
    StraightLine,
    /// Double-declining balance: rate `2/life` on the shrinking book value
    DecliningBalance,
}

impl fmt::Display for DepreciationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StraightLine => write!(f, "straight-line"),
            Self::DecliningBalance => write!(f, "declining-balance"),
        }
    }
}

/// One year of a depreciation schedule
///
/// `net_book_value >= salvage` holds for every row; the declining-balance
/// method clamps the final year so book value lands exactly on salvage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepreciationRow {
    /// Year number, 1-based
    pub year: u32,
    /// Depreciation charged this year
    pub depreciation: Money,
    /// Running sum of depreciation
    pub accumulated: Money,
    /// Cost minus accumulated depreciation
    pub net_book_value: Money,
}
