//! Settlement Decision Value Object

use crate::domain::value_object::transaction_status::TransactionStatus;
use std::fmt;

// ============================================================================
// Decision - Closed set of settlement actions
// ============================================================================

/// Admin decision on a pending transaction
///
/// Presentation layers validate the raw action token into this enum before
/// anything touches the store. An unrecognized token is an error, never
/// "treated as reject".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Approve,
    Reject,
}

impl Decision {
    /// Get string code for serialization/API
    #[inline]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Approve => "approve",
            Self::Reject => "reject",
        }
    }

    /// Past-tense form for user-facing messages ("approved" / "rejected")
    #[inline]
    pub const fn past_tense(&self) -> &'static str {
        match self {
            Self::Approve => "approved",
            Self::Reject => "rejected",
        }
    }

    /// The terminal status this decision settles the transaction into
    #[inline]
    pub const fn settled_status(&self) -> TransactionStatus {
        match self {
            Self::Approve => TransactionStatus::Completed,
            Self::Reject => TransactionStatus::Failed,
        }
    }

    /// Check if this decision applies the transaction's effects
    #[inline]
    pub const fn is_approve(&self) -> bool {
        matches!(self, Self::Approve)
    }

    /// Create from string code
    #[inline]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "approve" => Some(Self::Approve),
            "reject" => Some(Self::Reject),
            _ => None,
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

// ============================================================================
// Tests
// ============================================================================
