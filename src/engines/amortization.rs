//! Loan amortization engine
//!
//! Builds an equal-installment (annuity) payment schedule. Pure: no I/O,
//! no shared state; two calls with the same term produce identical rows.

use rust_decimal::{Decimal, MathematicalOps};

use crate::error::{FincalcError, FincalcResult};
use crate::models::{LoanTerm, Money, ScheduleRow, ScheduleTotals};

/// Balance below this is considered paid off and clamped to zero, so the
/// final row never carries a dangling fractional residue.
fn balance_epsilon() -> Money {
    Money::from_decimal(Decimal::new(1, 5)) // 0.00001
}

/// Monthly rate from a nominal annual percentage: `pct / 100 / 12`
pub fn monthly_rate(annual_rate_pct: Money) -> Money {
    annual_rate_pct / 100u32 / 12u32
}

/// Constant annuity payment that amortizes the loan over its term
///
/// A zero rate falls back to straight division, avoiding the zero
/// denominator in the exponential formula.
pub fn annuity_payment(term: &LoanTerm) -> FincalcResult<Money> {
    if term.term_months == 0 {
        return Err(FincalcError::validation("loan term must be at least one month"));
    }
    let r = monthly_rate(term.annual_rate_pct);
    if r.is_zero() {
        return Ok(term.principal / term.term_months);
    }
    let one = Decimal::ONE;
    let growth = (one + r.amount()).powi(i64::from(term.term_months));
    let denom = one - one / growth;
    Ok(Money::from_decimal(
        term.principal.amount() * r.amount() / denom,
    ))
}

/// Build the full schedule: exactly `term_months` rows
///
/// Each period charges interest on the open balance, the rest of the
/// payment reduces principal, and the closing balance is clamped to zero
/// once it drops below epsilon.
pub fn build_schedule(term: &LoanTerm) -> FincalcResult<Vec<ScheduleRow>> {
    let payment = annuity_payment(term)?;
    let r = monthly_rate(term.annual_rate_pct);

    let mut rows = Vec::with_capacity(term.term_months as usize);
    let mut balance = term.principal;
    for period in 1..=term.term_months {
        let interest = balance * r;
        let principal_component = payment - interest;
        balance -= principal_component;
        if balance < balance_epsilon() {
            balance = Money::ZERO;
        }
        rows.push(ScheduleRow {
            period,
            payment,
            interest,
            principal_component,
            remaining_balance: balance,
        });
    }
    Ok(rows)
}

/// Column sums callers display next to the schedule
pub fn schedule_totals(rows: &[ScheduleRow]) -> ScheduleTotals {
    ScheduleTotals {
        total_payment: rows.iter().map(|r| r.payment).sum(),
        total_interest: rows.iter().map(|r| r.interest).sum(),
    }
}
