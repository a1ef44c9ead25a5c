//! Break-even analysis
//!
//! Single-pass contribution-margin arithmetic. A zero contribution margin
//! yields zero outputs instead of dividing by zero.

use serde::{Deserialize, Serialize};

use crate::models::Money;

/// Break-even analysis outputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakEvenResult {
    /// Unit price minus unit variable cost
    pub contribution_margin: Money,
    /// Units needed to cover fixed costs
    pub break_even_units: Money,
    /// Revenue at the break-even point
    pub break_even_revenue: Money,
    /// Units needed to reach the target profit on top of fixed costs
    pub target_units: Money,
}

/// Compute break-even units, revenue, and the units needed for a target
/// profit
pub fn break_even(
    price: Money,
    variable_cost: Money,
    fixed_costs: Money,
    target_profit: Money,
) -> BreakEvenResult {
    let contribution_margin = price - variable_cost;
    let (break_even_units, target_units) = if contribution_margin.is_zero() {
        (Money::ZERO, Money::ZERO)
    } else {
        (
            fixed_costs / contribution_margin,
            (fixed_costs + target_profit) / contribution_margin,
        )
    };
    let break_even_revenue = break_even_units * price;

    BreakEvenResult {
        contribution_margin,
        break_even_units,
        break_even_revenue,
        target_units,
    }
}
