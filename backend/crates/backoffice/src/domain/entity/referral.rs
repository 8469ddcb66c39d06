//! Referral Entity

use crate::domain::value_object::ReferralStatus;
use chrono::{DateTime, Utc};
use kernel::id::{ReferralId, UserId};
use rust_decimal::Decimal;

/// A referral relation between two users
///
/// Created by the user-facing signup flow; the back office toggles the
/// status to control commission eligibility.
#[derive(Debug, Clone)]
pub struct Referral {
    pub referral_id: ReferralId,
    pub referrer_id: UserId,
    pub referred_user_id: UserId,
    pub commission_earned: Decimal,
    pub status: ReferralStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
