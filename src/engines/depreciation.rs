//! Depreciation engine
//!
//! Straight-line and double-declining-balance schedule builders. Exactly
//! `life` rows either way. `salvage <= cost` is the caller's responsibility
//! and is deliberately not enforced, matching the source calculator.

use crate::error::{FincalcError, FincalcResult};
use crate::models::{DepreciationMethod, DepreciationRow, Money};

/// Build a depreciation schedule over the asset's life in years
pub fn build_depreciation_schedule(
    cost: Money,
    salvage: Money,
    life_years: u32,
    method: DepreciationMethod,
) -> FincalcResult<Vec<DepreciationRow>> {
    if life_years == 0 {
        return Err(FincalcError::validation(
            "asset life must be at least one year",
        ));
    }
    let rows = match method {
        DepreciationMethod::StraightLine => straight_line(cost, salvage, life_years),
        DepreciationMethod::DecliningBalance => declining_balance(cost, salvage, life_years),
    };
    Ok(rows)
}

/// Constant charge `(cost - salvage) / life`; book value never reported
/// below salvage
fn straight_line(cost: Money, salvage: Money, life_years: u32) -> Vec<DepreciationRow> {
    let depreciation = (cost - salvage) / life_years;
    let mut rows = Vec::with_capacity(life_years as usize);
    let mut accumulated = Money::ZERO;
    for year in 1..=life_years {
        accumulated += depreciation;
        let net_book_value = (cost - accumulated).max(salvage);
        rows.push(DepreciationRow {
            year,
            depreciation,
            accumulated,
            net_book_value,
        });
    }
    rows
}

/// Rate `2 / life` on the shrinking book value. Any year that would push
/// book value below salvage is clamped, and the final year always charges
/// the remaining gap, so the schedule converges exactly to salvage.
fn declining_balance(cost: Money, salvage: Money, life_years: u32) -> Vec<DepreciationRow> {
    let rate = Money::from_int(2) / life_years;
    let mut rows = Vec::with_capacity(life_years as usize);
    let mut accumulated = Money::ZERO;
    let mut net_book_value = cost;
    for year in 1..=life_years {
        let mut depreciation = net_book_value * rate;
        if year == life_years {
            depreciation = net_book_value - salvage;
        } else if net_book_value - depreciation < salvage {
            depreciation = net_book_value - salvage;
        }
        accumulated += depreciation;
        net_book_value -= depreciation;
        rows.push(DepreciationRow {
            year,
            depreciation,
            accumulated,
            net_book_value,
        });
    }
    rows
}
