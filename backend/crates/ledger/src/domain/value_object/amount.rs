//! Amount Value Object
//!
//! Fixed-point money. All amount arithmetic goes through
//! `rust_decimal::Decimal`; floating point never appears in the ledger.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use std::fmt;
use std::ops::Add;

// ============================================================================
// Amount - Signed money value, canonicalized to 2 decimal places
// ============================================================================

/// Signed money amount with exactly two fractional digits
///
/// Sign convention: credits (deposit, earning, referral) are positive,
/// withdrawals are stored negative. Construction canonicalizes to scale 2
/// (half-away-from-zero), so `Display` always prints like `50.00`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Amount(Decimal);

impl Amount {
    /// Create an amount, rounding to 2 decimal places
    pub fn new(value: Decimal) -> Self {
        let mut canonical = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        canonical.rescale(2);
        Self(canonical)
    }

    /// Zero amount
    pub fn zero() -> Self {
        Self::new(Decimal::ZERO)
    }

    /// Get the underlying decimal value
    #[inline]
    pub const fn get(&self) -> Decimal {
        self.0
    }

    /// Absolute value
    pub fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Check if the amount is negative (withdrawal convention)
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }
}

impl Add for Amount {
    type Output = Amount;

    fn add(self, rhs: Amount) -> Amount {
        Amount::new(self.0 + rhs.0)
    }
}

impl From<Decimal> for Amount {
    fn from(value: Decimal) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Tests
// ============================================================================
