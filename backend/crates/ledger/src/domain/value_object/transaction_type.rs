//! Transaction Type Value Object

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// TransactionType - Closed set of ledger transaction kinds
// ============================================================================

/// Kind of ledger transaction
///
/// The type decides what an approval does to the owner's balance:
/// - **Deposit / Earning / Referral**: credit `available_balance` by the
///   (positive) amount
/// - **Withdrawal**: amount is stored negative; approval debits
///   `available_balance` and grows `total_withdrawn`
/// - **Purchase**: approval changes the status only, the purchase flow
///   already moved the funds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(i16)]
pub enum TransactionType {
    Deposit = 0,
    Withdrawal = 1,
    Purchase = 2,
    Earning = 3,
    Referral = 4,
}

impl TransactionType {
    /// Get numeric ID for database storage
    #[inline]
    pub const fn id(&self) -> i16 {
        *self as i16
    }

    /// Get string code for serialization/API
    #[inline]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Deposit => "deposit",
            Self::Withdrawal => "withdrawal",
            Self::Purchase => "purchase",
            Self::Earning => "earning",
            Self::Referral => "referral",
        }
    }

    /// Check if this is a withdrawal (funds pre-check + total_withdrawn)
    #[inline]
    pub const fn is_withdrawal(&self) -> bool {
        matches!(self, Self::Withdrawal)
    }

    /// Check if approval moves the owner's balance
    #[inline]
    pub const fn moves_balance_on_approval(&self) -> bool {
        !matches!(self, Self::Purchase)
    }

    /// Create from numeric ID
    #[inline]
    pub fn from_id(id: i16) -> Option<Self> {
        match id {
            0 => Some(Self::Deposit),
            1 => Some(Self::Withdrawal),
            2 => Some(Self::Purchase),
            3 => Some(Self::Earning),
            4 => Some(Self::Referral),
            _ => None,
        }
    }

    /// Create from string code
    #[inline]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "deposit" => Some(Self::Deposit),
            "withdrawal" => Some(Self::Withdrawal),
            "purchase" => Some(Self::Purchase),
            "earning" => Some(Self::Earning),
            "referral" => Some(Self::Referral),
            _ => None,
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

// ============================================================================
// Tests
// ============================================================================
