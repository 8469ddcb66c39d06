//! User Account Entity

use crate::domain::value_object::AccountStatus;
use chrono::{DateTime, Utc};
use kernel::id::UserId;

/// A platform user as the back office sees them
///
/// Registration happens in the user-facing flows; the back office reads
/// accounts and moves them between moderation states.
#[derive(Debug, Clone)]
pub struct UserAccount {
    pub user_id: UserId,
    pub full_name: String,
    pub email: String,
    pub account_status: AccountStatus,
    pub created_at: DateTime<Utc>,
}
