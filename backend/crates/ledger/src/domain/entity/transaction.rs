//! Transaction Entity

use crate::domain::value_object::{Amount, TransactionStatus, TransactionType};
use chrono::{DateTime, Utc};
use kernel::id::{TransactionId, UserId};

/// A ledger transaction submitted by a user, awaiting or past settlement
///
/// Transactions are created by the user-facing flows; the back office only
/// ever reads and settles them. Withdrawals carry a negative amount.
#[derive(Debug, Clone)]
pub struct Transaction {
    pub id: TransactionId,
    pub user_id: UserId,
    pub transaction_type: TransactionType,
    pub amount: Amount,
    pub status: TransactionStatus,
    pub method: Option<String>,
    pub transaction_hash: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Transaction {
    /// Check if this transaction can still be settled
    #[inline]
    pub fn can_settle(&self) -> bool {
        self.status.is_pending()
    }

    /// Unsigned amount, for funds checks and user-facing messages
    pub fn absolute_amount(&self) -> Amount {
        self.amount.abs()
    }
}
