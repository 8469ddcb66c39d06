//! Balance Entity

use crate::domain::entity::transaction::Transaction;
use crate::domain::value_object::Amount;
use kernel::id::UserId;

/// A user's funds: exactly one row per user
///
/// `available_balance` must never go negative through an approved
/// withdrawal; `total_withdrawn` only ever grows. A user without a stored
/// row is treated as [`Balance::zero`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Balance {
    pub user_id: UserId,
    pub available_balance: Amount,
    pub total_withdrawn: Amount,
}

impl Balance {
    /// The balance of a user with no stored row yet
    pub fn zero(user_id: UserId) -> Self {
        Self {
            user_id,
            available_balance: Amount::zero(),
            total_withdrawn: Amount::zero(),
        }
    }

    /// Check if the available funds cover an unsigned amount
    pub fn can_cover(&self, amount_abs: Amount) -> bool {
        self.available_balance >= amount_abs
    }

    /// The balance after approving a transaction
    ///
    /// Deposit, earning and referral credit the (positive) amount;
    /// withdrawal adds the (negative) amount and grows `total_withdrawn`;
    /// purchase leaves the balance untouched. Rejection never reaches this
    /// method.
    pub fn apply_approval(&self, transaction: &Transaction) -> Self {
        if !transaction.transaction_type.moves_balance_on_approval() {
            return self.clone();
        }

        let total_withdrawn = if transaction.transaction_type.is_withdrawal() {
            self.total_withdrawn + transaction.absolute_amount()
        } else {
            self.total_withdrawn
        };

        Self {
            user_id: self.user_id,
            available_balance: self.available_balance + transaction.amount,
            total_withdrawn,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_object::{TransactionStatus, TransactionType};
    use chrono::Utc;
    use kernel::id::TransactionId;
    use rust_decimal::Decimal;

    fn amount(s: &str) -> Amount {
        Amount::new(s.parse::<Decimal>().unwrap())
    }

    fn transaction(transaction_type: TransactionType, amount_str: &str) -> Transaction {
        let now = Utc::now();
        Transaction {
            id: TransactionId::from_i64(1),
            user_id: UserId::from_i64(7),
            transaction_type,
            amount: amount(amount_str),
            status: TransactionStatus::Pending,
            method: None,
            transaction_hash: None,
            created_at: now,
            updated_at: now,
        }
    }

    fn balance(available: &str, withdrawn: &str) -> Balance {
        Balance {
            user_id: UserId::from_i64(7),
            available_balance: amount(available),
            total_withdrawn: amount(withdrawn),
        }
    }

    #[test]
    fn test_deposit_credits_available_balance() {
        let after = balance("100.00", "0.00")
            .apply_approval(&transaction(TransactionType::Deposit, "25.00"));
        assert_eq!(after.available_balance, amount("125.00"));
        assert_eq!(after.total_withdrawn, amount("0.00"));
    }

    #[test]
    fn test_withdrawal_debits_and_grows_total_withdrawn() {
        let after = balance("100.00", "10.00")
            .apply_approval(&transaction(TransactionType::Withdrawal, "-50.00"));
        assert_eq!(after.available_balance, amount("50.00"));
        assert_eq!(after.total_withdrawn, amount("60.00"));
    }

    #[test]
    fn test_purchase_leaves_balance_untouched() {
        let before = balance("100.00", "10.00");
        let after = before.apply_approval(&transaction(TransactionType::Purchase, "30.00"));
        assert_eq!(after, before);
    }

    #[test]
    fn test_earning_and_referral_credit() {
        let after = balance("0.00", "0.00")
            .apply_approval(&transaction(TransactionType::Earning, "5.00"))
            .apply_approval(&transaction(TransactionType::Referral, "2.50"));
        assert_eq!(after.available_balance, amount("7.50"));
    }

    #[test]
    fn test_can_cover() {
        let b = balance("100.00", "0.00");
        assert!(b.can_cover(amount("50.00")));
        assert!(b.can_cover(amount("100.00")));
        assert!(!b.can_cover(amount("100.01")));
    }

    #[test]
    fn test_zero_balance() {
        let b = Balance::zero(UserId::from_i64(9));
        assert_eq!(b.available_balance, Amount::zero());
        assert!(!b.can_cover(amount("0.01")));
        assert!(b.can_cover(amount("0.00")));
    }
}
