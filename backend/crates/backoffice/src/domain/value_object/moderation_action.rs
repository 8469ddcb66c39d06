//! Moderation Action Value Object

use crate::domain::value_object::AccountStatus;
use std::fmt;

// ============================================================================
// ModerationAction - Admin operations on a user account
// ============================================================================

/// An admin's decision on a user account
///
/// The action token is validated at the boundary; an unrecognized token
/// never reaches the store. Not persisted, so there is no numeric ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModerationAction {
    /// Activate a pending (or suspended) account
    Verify,
    /// Suspend an account
    Suspend,
    /// Lift a suspension
    Reinstate,
}

impl ModerationAction {
    /// Get string code for the API boundary
    #[inline]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Verify => "verify",
            Self::Suspend => "suspend",
            Self::Reinstate => "reinstate",
        }
    }

    /// Past-tense form for messages ("verified", not "verifyd")
    #[inline]
    pub const fn past_tense(&self) -> &'static str {
        match self {
            Self::Verify => "verified",
            Self::Suspend => "suspended",
            Self::Reinstate => "reinstated",
        }
    }

    /// The account status this action moves the user to
    #[inline]
    pub const fn target_status(&self) -> AccountStatus {
        match self {
            Self::Verify | Self::Reinstate => AccountStatus::Active,
            Self::Suspend => AccountStatus::Suspended,
        }
    }

    /// Check if the action is a no-op for the given current status
    ///
    /// A conflicting action must be rejected, not silently repeated.
    #[inline]
    pub const fn conflicts_with(&self, current: AccountStatus) -> bool {
        matches!(
            (self, current),
            (Self::Verify, AccountStatus::Active)
                | (Self::Suspend, AccountStatus::Suspended)
                | (Self::Reinstate, AccountStatus::Active)
        )
    }

    /// Create from string code; only the three known tokens are accepted
    #[inline]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "verify" => Some(Self::Verify),
            "suspend" => Some(Self::Suspend),
            "reinstate" => Some(Self::Reinstate),
            _ => None,
        }
    }
}

impl fmt::Display for ModerationAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

// ============================================================================
// Tests
// ============================================================================
