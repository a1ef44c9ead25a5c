//! Money type and lenient decimal parsing
//!
//! Wraps `rust_decimal::Decimal` so every monetary value keeps full precision
//! internally. Rounding happens exactly once, at the formatting boundary,
//! using half-up rounding. Parsing follows the forgiving-calculator policy:
//! unparseable text substitutes zero, surfaced to the caller as an explicit
//! [`ParseOutcome`] instead of being swallowed.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};
use std::str::FromStr;

use crate::error::{FincalcError, FincalcResult};

/// A monetary (or quantity) value with full decimal precision
///
/// Also used for rates and quantities; the engines treat all numeric inputs
/// uniformly, exactly as the source calculator does.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(Decimal);

/// Outcome of a lenient parse: either the parsed value, or the documented
/// zero substitution for text that could not be read as a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseOutcome {
    /// The text parsed cleanly
    Parsed(Money),
    /// The text was unreadable; zero was substituted
    Defaulted,
}

impl ParseOutcome {
    /// The effective value (zero when defaulted)
    pub fn value(&self) -> Money {
        match self {
            Self::Parsed(m) => *m,
            Self::Defaulted => Money::ZERO,
        }
    }

    /// Whether the zero substitution was applied
    pub fn is_defaulted(&self) -> bool {
        matches!(self, Self::Defaulted)
    }
}

/// How input errors are handled across the calculators
///
/// Lenient reproduces the original degrade-to-zero / skip-bad-lines behavior;
/// Strict turns every recovery point into a hard error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strictness {
    /// Substitute zero for bad numbers, skip malformed lines (default)
    #[default]
    Lenient,
    /// Fail on any unparseable input or unmet stock demand
    Strict,
}

impl Strictness {
    /// True for [`Strictness::Strict`]
    pub fn is_strict(&self) -> bool {
        matches!(self, Self::Strict)
    }
}

impl Money {
    /// Zero value
    pub const ZERO: Money = Money(Decimal::ZERO);

    /// Wrap a raw decimal
    pub const fn from_decimal(value: Decimal) -> Self {
        Self(value)
    }

    /// Create from an integer amount
    pub fn from_int(value: i64) -> Self {
        Self(Decimal::from(value))
    }

    /// The underlying decimal
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Check if the value is zero
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Check if the value is strictly positive
    pub fn is_positive(&self) -> bool {
        self.0.is_sign_positive() && !self.0.is_zero()
    }

    /// Check if the value is negative
    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    /// Parse text leniently: `.` or `,` accepted as the decimal mark,
    /// surrounding whitespace trimmed, grouping separators stripped.
    /// Unreadable text yields [`ParseOutcome::Defaulted`].
    pub fn parse_lenient(text: &str) -> ParseOutcome {
        match normalize(text).and_then(|s| Decimal::from_str(&s).ok()) {
            Some(d) => ParseOutcome::Parsed(Self(d)),
            None => ParseOutcome::Defaulted,
        }
    }

    /// Parse text strictly, erroring instead of substituting zero
    pub fn parse_strict(text: &str) -> FincalcResult<Self> {
        normalize(text)
            .and_then(|s| Decimal::from_str(&s).ok())
            .map(Self)
            .ok_or_else(|| FincalcError::Parse(format!("'{}' is not a valid number", text.trim())))
    }

    /// Parse with the given strictness; in lenient mode defaulted values
    /// come back as `Ok(zero)` and the substitution is reported through
    /// [`Money::parse_lenient`] when the caller wants it.
    pub fn parse(text: &str, strictness: Strictness) -> FincalcResult<Self> {
        match strictness {
            Strictness::Lenient => Ok(Self::parse_lenient(text).value()),
            Strictness::Strict => Self::parse_strict(text),
        }
    }

    /// Round half-up to the given number of fraction digits
    ///
    /// The only rounding point in the crate; engines never call this
    /// mid-computation.
    pub fn round_half_up(&self, fraction_digits: u32) -> Self {
        Self(
            self.0
                .round_dp_with_strategy(fraction_digits, RoundingStrategy::MidpointAwayFromZero),
        )
    }

    /// Format with half-up rounding, `.` thousands grouping and `,` decimal
    /// mark (the locale style the source calculator renders and its CSV
    /// artifact embeds)
    pub fn format(&self, fraction_digits: u32) -> String {
        let rounded = self.round_half_up(fraction_digits).0;
        let fixed = format!("{:.*}", fraction_digits as usize, rounded);

        let (sign, body) = match fixed.strip_prefix('-') {
            Some(rest) => ("-", rest),
            None => ("", fixed.as_str()),
        };
        let (int_part, frac_part) = match body.split_once('.') {
            Some((i, f)) => (i, Some(f)),
            None => (body, None),
        };

        let grouped = group_thousands(int_part);
        match frac_part {
            Some(f) => format!("{}{},{}", sign, grouped, f),
            None => format!("{}{}", sign, grouped),
        }
    }
}

/// Insert `.` grouping separators every three digits, right to left
fn group_thousands(digits: &str) -> String {
    let chars: Vec<char> = digits.chars().collect();
    let mut out = String::with_capacity(chars.len() + chars.len() / 3);
    for (i, c) in chars.iter().enumerate() {
        let remaining = chars.len() - i;
        if i > 0 && remaining % 3 == 0 {
            out.push('.');
        }
        out.push(*c);
    }
    out
}

/// Normalize user text into a canonical `1234.56` form, or `None` when the
/// text is hopeless. When both marks appear, the rightmost is the decimal
/// mark and the other is treated as grouping; a repeated single mark is
/// grouping only.
fn normalize(text: &str) -> Option<String> {
    let t = text.trim();
    if t.is_empty() {
        return None;
    }
    let dots = t.matches('.').count();
    let commas = t.matches(',').count();
    let normalized = match (dots, commas) {
        (0, 0) => t.to_string(),
        (1, 0) => t.to_string(),
        (_, 0) => t.replace('.', ""),
        (0, 1) => t.replace(',', "."),
        (0, _) => t.replace(',', ""),
        (_, _) => {
            // Both present: rightmost mark wins as the decimal point
            let last_dot = t.rfind('.').unwrap_or(0);
            let last_comma = t.rfind(',').unwrap_or(0);
            if last_dot > last_comma {
                t.replace(',', "")
            } else {
                t.replace('.', "").replace(',', ".")
            }
        }
    };
    Some(normalized)
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format(2))
    }
}

impl FromStr for Money {
    type Err = FincalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_strict(s)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Mul for Money {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        Self(self.0 * other.0)
    }
}

impl Div for Money {
    type Output = Self;

    /// Callers branch on a zero divisor before dividing; the engines never
    /// reach this with zero.
    fn div(self, other: Self) -> Self {
        Self(self.0 / other.0)
    }
}

impl Div<u32> for Money {
    type Output = Self;

    fn div(self, divisor: u32) -> Self {
        Self(self.0 / Decimal::from(divisor))
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::ZERO, |acc, m| acc + m)
    }
}
