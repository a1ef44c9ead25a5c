//! VAT calculation
//!
//! Adds VAT to a net amount, or extracts it from a gross (VAT-inclusive)
//! amount. Extraction at a zero rate returns the amount unchanged instead
//! of dividing by zero.

use serde::{Deserialize, Serialize};

use crate::models::Money;

/// A net / VAT / gross decomposition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VatBreakdown {
    /// Amount excluding VAT
    pub net: Money,
    /// The VAT itself
    pub vat: Money,
    /// Amount including VAT
    pub gross: Money,
}

/// Add VAT at `rate_pct` percent to a net amount
pub fn add_vat(net: Money, rate_pct: Money) -> VatBreakdown {
    let vat = net * (rate_pct / 100u32);
    VatBreakdown {
        net,
        vat,
        gross: net + vat,
    }
}

/// Extract VAT at `rate_pct` percent from a VAT-inclusive amount
pub fn extract_vat(gross: Money, rate_pct: Money) -> VatBreakdown {
    let rate = rate_pct / 100u32;
    let net = if rate.is_zero() {
        gross
    } else {
        gross / (Money::from_int(1) + rate)
    };
    VatBreakdown {
        net,
        vat: gross - net,
        gross,
    }
}
