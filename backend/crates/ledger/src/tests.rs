//! Unit tests for the ledger crate
//!
//! Settlement scenarios run against in-memory doubles implementing the
//! repository and notifier traits; the doubles share the domain entities'
//! rules with the PostgreSQL implementation.

#[cfg(test)]
mod support {
    use crate::domain::entity::{Balance, EmailNotification, Transaction};
    use crate::domain::notifier::SettlementNotifier;
    use crate::domain::repository::{
        OutboxRepository, SettlementOutcome, SettlementRepository, TransactionFilter,
        TransactionListing, TransactionRepository,
    };
    use crate::domain::services;
    use crate::domain::value_object::{Amount, Decision, TransactionStatus, TransactionType};
    use crate::error::{LedgerError, LedgerResult};
    use chrono::Utc;
    use kernel::id::{TransactionId, UserId};
    use rust_decimal::Decimal;
    use std::collections::HashMap;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;
    use uuid::Uuid;

    pub fn amount(s: &str) -> Amount {
        Amount::new(s.parse::<Decimal>().unwrap())
    }

    /// In-memory ledger store; mirrors the PostgreSQL settlement sequence
    /// using the same entity rules
    #[derive(Default)]
    pub struct InMemoryLedger {
        pub transactions: Mutex<HashMap<i64, Transaction>>,
        pub balances: Mutex<HashMap<i64, Balance>>,
        pub contacts: Mutex<HashMap<i64, (String, String)>>,
        pub outbox: Mutex<Vec<EmailNotification>>,
        pub store_calls: AtomicUsize,
    }

    impl InMemoryLedger {
        pub fn seed_user(&self, user_id: i64, full_name: &str, email: &str) {
            self.contacts
                .lock()
                .unwrap()
                .insert(user_id, (full_name.to_string(), email.to_string()));
        }

        pub fn seed_balance(&self, user_id: i64, available: &str, withdrawn: &str) {
            self.balances.lock().unwrap().insert(
                user_id,
                Balance {
                    user_id: UserId::from_i64(user_id),
                    available_balance: amount(available),
                    total_withdrawn: amount(withdrawn),
                },
            );
        }

        pub fn seed_transaction_aged(
            &self,
            id: i64,
            user_id: i64,
            transaction_type: TransactionType,
            amount_str: &str,
            age_secs: i64,
        ) {
            let at = Utc::now() - chrono::Duration::seconds(age_secs);
            self.transactions.lock().unwrap().insert(
                id,
                Transaction {
                    id: TransactionId::from_i64(id),
                    user_id: UserId::from_i64(user_id),
                    transaction_type,
                    amount: amount(amount_str),
                    status: TransactionStatus::Pending,
                    method: None,
                    transaction_hash: None,
                    created_at: at,
                    updated_at: at,
                },
            );
        }

        pub fn seed_transaction(
            &self,
            id: i64,
            user_id: i64,
            transaction_type: TransactionType,
            amount_str: &str,
        ) {
            self.seed_transaction_aged(id, user_id, transaction_type, amount_str, 0);
        }

        pub fn balance_of(&self, user_id: i64) -> Option<Balance> {
            self.balances.lock().unwrap().get(&user_id).cloned()
        }

        pub fn transaction_status(&self, id: i64) -> TransactionStatus {
            self.transactions.lock().unwrap().get(&id).unwrap().status
        }

        pub fn outbox_rows(&self) -> Vec<EmailNotification> {
            self.outbox.lock().unwrap().clone()
        }

        pub fn push_outbox(&self, notification: EmailNotification) {
            self.outbox.lock().unwrap().push(notification);
        }
    }

    impl TransactionRepository for InMemoryLedger {
        async fn list(
            &self,
            filter: &TransactionFilter,
            limit: i64,
            offset: i64,
        ) -> LedgerResult<Vec<TransactionListing>> {
            let transactions = self.transactions.lock().unwrap();
            let contacts = self.contacts.lock().unwrap();

            let mut matching: Vec<&Transaction> = transactions
                .values()
                .filter(|t| {
                    filter
                        .transaction_type
                        .is_none_or(|ty| t.transaction_type == ty)
                })
                .filter(|t| filter.status.is_none_or(|s| t.status == s))
                .filter(|t| filter.user_id.is_none_or(|u| t.user_id == u))
                .collect();
            matching.sort_by(|a, b| {
                b.created_at
                    .cmp(&a.created_at)
                    .then(b.id.get().cmp(&a.id.get()))
            });

            Ok(matching
                .into_iter()
                .skip(offset as usize)
                .take(limit as usize)
                .map(|t| {
                    let (name, email) = contacts
                        .get(&t.user_id.get())
                        .cloned()
                        .unwrap_or_default();
                    TransactionListing {
                        transaction: t.clone(),
                        user_full_name: name,
                        user_email: email,
                    }
                })
                .collect())
        }

        async fn count(&self, filter: &TransactionFilter) -> LedgerResult<i64> {
            let transactions = self.transactions.lock().unwrap();
            Ok(transactions
                .values()
                .filter(|t| {
                    filter
                        .transaction_type
                        .is_none_or(|ty| t.transaction_type == ty)
                })
                .filter(|t| filter.status.is_none_or(|s| t.status == s))
                .filter(|t| filter.user_id.is_none_or(|u| t.user_id == u))
                .count() as i64)
        }
    }

    impl SettlementRepository for InMemoryLedger {
        async fn apply(
            &self,
            transaction_id: TransactionId,
            decision: Decision,
        ) -> LedgerResult<SettlementOutcome> {
            self.store_calls.fetch_add(1, Ordering::SeqCst);

            let mut transactions = self.transactions.lock().unwrap();
            let Some(existing) = transactions.get(&transaction_id.get()).cloned() else {
                return Err(LedgerError::NotFound);
            };

            if !existing.can_settle() {
                return Err(LedgerError::AlreadySettled(existing.status));
            }

            let mut balances = self.balances.lock().unwrap();
            let balance = balances
                .get(&existing.user_id.get())
                .cloned()
                .unwrap_or_else(|| Balance::zero(existing.user_id));

            if decision.is_approve()
                && existing.transaction_type.is_withdrawal()
                && !balance.can_cover(existing.absolute_amount())
            {
                return Err(LedgerError::InsufficientFunds);
            }

            let settled = Transaction {
                status: decision.settled_status(),
                updated_at: Utc::now(),
                ..existing
            };

            if decision.is_approve() && settled.transaction_type.moves_balance_on_approval() {
                balances.insert(settled.user_id.get(), balance.apply_approval(&settled));
            }

            transactions.insert(settled.id.get(), settled.clone());

            let (name, email) = self
                .contacts
                .lock()
                .unwrap()
                .get(&settled.user_id.get())
                .cloned()
                .unwrap_or_default();
            let notification =
                services::compose_settlement_email(&settled, &name, &email, decision);
            self.outbox.lock().unwrap().push(notification.clone());

            Ok(SettlementOutcome {
                transaction: settled,
                notification,
            })
        }
    }

    impl OutboxRepository for InMemoryLedger {
        async fn find_pending(&self, limit: i64) -> LedgerResult<Vec<EmailNotification>> {
            Ok(self
                .outbox
                .lock()
                .unwrap()
                .iter()
                .filter(|n| !n.is_sent())
                .take(limit as usize)
                .cloned()
                .collect())
        }

        async fn mark_sent(&self, outbox_id: Uuid) -> LedgerResult<()> {
            if let Some(n) = self
                .outbox
                .lock()
                .unwrap()
                .iter_mut()
                .find(|n| n.id == outbox_id && !n.is_sent())
            {
                n.sent_at = Some(Utc::now());
                n.attempts += 1;
            }
            Ok(())
        }

        async fn record_attempt(&self, outbox_id: Uuid) -> LedgerResult<()> {
            if let Some(n) = self
                .outbox
                .lock()
                .unwrap()
                .iter_mut()
                .find(|n| n.id == outbox_id)
            {
                n.attempts += 1;
            }
            Ok(())
        }

        async fn purge_delivered(&self, older_than: Duration) -> LedgerResult<u64> {
            let cutoff = Utc::now()
                - chrono::Duration::from_std(older_than)
                    .map_err(|_| LedgerError::Internal("retention overflows".to_string()))?;
            let mut outbox = self.outbox.lock().unwrap();
            let before = outbox.len();
            outbox.retain(|n| match n.sent_at {
                Some(at) => at >= cutoff,
                None => true,
            });
            Ok((before - outbox.len()) as u64)
        }
    }

    /// Notifier double that records deliveries and succeeds or fails on demand
    #[derive(Clone)]
    pub struct RecordingNotifier {
        succeed: bool,
        pub delivered: std::sync::Arc<Mutex<Vec<EmailNotification>>>,
    }

    impl RecordingNotifier {
        pub fn succeeding() -> Self {
            Self {
                succeed: true,
                delivered: std::sync::Arc::new(Mutex::new(Vec::new())),
            }
        }

        pub fn failing() -> Self {
            Self {
                succeed: false,
                delivered: std::sync::Arc::new(Mutex::new(Vec::new())),
            }
        }

        pub fn delivery_count(&self) -> usize {
            self.delivered.lock().unwrap().len()
        }
    }

    impl SettlementNotifier for RecordingNotifier {
        async fn deliver(&self, notification: &EmailNotification) -> bool {
            self.delivered.lock().unwrap().push(notification.clone());
            self.succeed
        }
    }
}

#[cfg(test)]
mod settlement_tests {
    use super::support::{InMemoryLedger, RecordingNotifier, amount};
    use crate::application::settle_transaction::{SettleTransactionInput, SettleTransactionUseCase};
    use crate::domain::value_object::{TransactionStatus, TransactionType};
    use crate::error::LedgerError;
    use platform::context::RequestContext;
    use std::sync::Arc;
    use std::sync::atomic::Ordering;

    fn ctx() -> RequestContext {
        RequestContext::background(1)
    }

    fn settle_input(transaction_id: i64, decision: &str) -> SettleTransactionInput {
        SettleTransactionInput {
            transaction_id,
            decision: decision.to_string(),
        }
    }

    #[tokio::test]
    async fn approve_withdrawal_with_sufficient_funds() {
        let ledger = Arc::new(InMemoryLedger::default());
        ledger.seed_user(7, "Alice Example", "alice@example.com");
        ledger.seed_balance(7, "100.00", "0.00");
        ledger.seed_transaction(1, 7, TransactionType::Withdrawal, "-50.00");

        let notifier = RecordingNotifier::succeeding();
        let use_case = SettleTransactionUseCase::new(ledger.clone(), Arc::new(notifier.clone()));

        let output = use_case.execute(settle_input(1, "approve"), ctx()).await.unwrap();

        assert_eq!(output.status, TransactionStatus::Completed);
        assert!(output.notification_sent);
        assert_eq!(
            output.message,
            "Transaction approved successfully and notification sent!"
        );

        assert_eq!(ledger.transaction_status(1), TransactionStatus::Completed);
        let balance = ledger.balance_of(7).unwrap();
        assert_eq!(balance.available_balance, amount("50.00"));
        assert_eq!(balance.total_withdrawn, amount("50.00"));

        let outbox = ledger.outbox_rows();
        assert_eq!(outbox.len(), 1);
        assert!(outbox[0].is_sent());
        assert_eq!(notifier.delivery_count(), 1);
    }

    #[tokio::test]
    async fn approve_withdrawal_with_insufficient_funds() {
        let ledger = Arc::new(InMemoryLedger::default());
        ledger.seed_user(7, "Alice Example", "alice@example.com");
        ledger.seed_balance(7, "10.00", "0.00");
        ledger.seed_transaction(1, 7, TransactionType::Withdrawal, "-50.00");

        let notifier = RecordingNotifier::succeeding();
        let use_case = SettleTransactionUseCase::new(ledger.clone(), Arc::new(notifier.clone()));

        let err = use_case
            .execute(settle_input(1, "approve"), ctx())
            .await
            .unwrap_err();

        assert!(matches!(err, LedgerError::InsufficientFunds));
        assert_eq!(err.to_string(), "Insufficient user balance for withdrawal.");

        // Nothing mutated, nothing queued, nothing delivered
        assert_eq!(ledger.transaction_status(1), TransactionStatus::Pending);
        let balance = ledger.balance_of(7).unwrap();
        assert_eq!(balance.available_balance, amount("10.00"));
        assert_eq!(balance.total_withdrawn, amount("0.00"));
        assert!(ledger.outbox_rows().is_empty());
        assert_eq!(notifier.delivery_count(), 0);
    }

    #[tokio::test]
    async fn reject_deposit_touches_no_balance() {
        let ledger = Arc::new(InMemoryLedger::default());
        ledger.seed_user(7, "Alice Example", "alice@example.com");
        ledger.seed_balance(7, "40.00", "0.00");
        ledger.seed_transaction(1, 7, TransactionType::Deposit, "25.00");

        let notifier = RecordingNotifier::succeeding();
        let use_case = SettleTransactionUseCase::new(ledger.clone(), Arc::new(notifier));

        let output = use_case.execute(settle_input(1, "reject"), ctx()).await.unwrap();

        assert_eq!(output.status, TransactionStatus::Failed);
        assert_eq!(
            output.message,
            "Transaction rejected successfully and notification sent!"
        );
        assert_eq!(ledger.transaction_status(1), TransactionStatus::Failed);

        let balance = ledger.balance_of(7).unwrap();
        assert_eq!(balance.available_balance, amount("40.00"));
        assert_eq!(balance.total_withdrawn, amount("0.00"));
    }

    #[tokio::test]
    async fn reject_withdrawal_skips_funds_check() {
        let ledger = Arc::new(InMemoryLedger::default());
        ledger.seed_user(7, "Alice Example", "alice@example.com");
        ledger.seed_balance(7, "10.00", "0.00");
        ledger.seed_transaction(1, 7, TransactionType::Withdrawal, "-50.00");

        let use_case = SettleTransactionUseCase::new(
            ledger.clone(),
            Arc::new(RecordingNotifier::succeeding()),
        );

        let output = use_case.execute(settle_input(1, "reject"), ctx()).await.unwrap();

        assert_eq!(output.status, TransactionStatus::Failed);
        let balance = ledger.balance_of(7).unwrap();
        assert_eq!(balance.available_balance, amount("10.00"));
    }

    #[tokio::test]
    async fn notification_failure_keeps_settlement() {
        let ledger = Arc::new(InMemoryLedger::default());
        ledger.seed_user(7, "Alice Example", "alice@example.com");
        ledger.seed_transaction(1, 7, TransactionType::Deposit, "25.00");

        let notifier = RecordingNotifier::failing();
        let use_case = SettleTransactionUseCase::new(ledger.clone(), Arc::new(notifier.clone()));

        let output = use_case.execute(settle_input(1, "approve"), ctx()).await.unwrap();

        assert_eq!(output.status, TransactionStatus::Completed);
        assert!(!output.notification_sent);
        assert_eq!(
            output.message,
            "Transaction approved, but failed to send notification email."
        );

        // Settlement stands; the outbox row stays pending with one counted
        // attempt, ready for redelivery
        assert_eq!(ledger.transaction_status(1), TransactionStatus::Completed);
        assert_eq!(
            ledger.balance_of(7).unwrap().available_balance,
            amount("25.00")
        );
        let outbox = ledger.outbox_rows();
        assert_eq!(outbox.len(), 1);
        assert!(!outbox[0].is_sent());
        assert_eq!(outbox[0].attempts, 1);
        assert_eq!(notifier.delivery_count(), 1);
    }

    #[tokio::test]
    async fn settle_twice_conflicts() {
        let ledger = Arc::new(InMemoryLedger::default());
        ledger.seed_user(7, "Alice Example", "alice@example.com");
        ledger.seed_transaction(1, 7, TransactionType::Deposit, "25.00");

        let use_case = SettleTransactionUseCase::new(
            ledger.clone(),
            Arc::new(RecordingNotifier::succeeding()),
        );

        use_case.execute(settle_input(1, "approve"), ctx()).await.unwrap();
        let err = use_case
            .execute(settle_input(1, "approve"), ctx())
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            LedgerError::AlreadySettled(TransactionStatus::Completed)
        ));
        assert_eq!(err.to_string(), "Transaction is already completed.");

        // Effects applied exactly once
        assert_eq!(
            ledger.balance_of(7).unwrap().available_balance,
            amount("25.00")
        );
        assert_eq!(ledger.outbox_rows().len(), 1);
    }

    #[tokio::test]
    async fn rejected_transaction_reports_failed_status() {
        let ledger = Arc::new(InMemoryLedger::default());
        ledger.seed_user(7, "Alice Example", "alice@example.com");
        ledger.seed_transaction(1, 7, TransactionType::Earning, "5.00");

        let use_case = SettleTransactionUseCase::new(
            ledger.clone(),
            Arc::new(RecordingNotifier::succeeding()),
        );

        use_case.execute(settle_input(1, "reject"), ctx()).await.unwrap();
        let err = use_case
            .execute(settle_input(1, "approve"), ctx())
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Transaction is already failed.");
    }

    #[tokio::test]
    async fn unknown_decision_rejected_before_store() {
        let ledger = Arc::new(InMemoryLedger::default());
        ledger.seed_user(7, "Alice Example", "alice@example.com");
        ledger.seed_transaction(1, 7, TransactionType::Deposit, "25.00");

        let use_case = SettleTransactionUseCase::new(
            ledger.clone(),
            Arc::new(RecordingNotifier::succeeding()),
        );

        let err = use_case
            .execute(settle_input(1, "cancel"), ctx())
            .await
            .unwrap_err();

        assert!(matches!(err, LedgerError::InvalidDecision(_)));
        assert_eq!(err.to_string(), "Invalid action or transaction ID.");
        assert_eq!(ledger.store_calls.load(Ordering::SeqCst), 0);
        assert_eq!(ledger.transaction_status(1), TransactionStatus::Pending);
    }

    #[tokio::test]
    async fn missing_transaction_not_found() {
        let ledger = Arc::new(InMemoryLedger::default());

        let use_case = SettleTransactionUseCase::new(
            ledger.clone(),
            Arc::new(RecordingNotifier::succeeding()),
        );

        let err = use_case
            .execute(settle_input(999, "approve"), ctx())
            .await
            .unwrap_err();

        assert!(matches!(err, LedgerError::NotFound));
        assert_eq!(err.to_string(), "Invalid transaction ID.");
    }

    #[tokio::test]
    async fn approve_deposit_creates_balance_row() {
        let ledger = Arc::new(InMemoryLedger::default());
        ledger.seed_user(7, "Alice Example", "alice@example.com");
        ledger.seed_transaction(1, 7, TransactionType::Deposit, "25.00");
        assert!(ledger.balance_of(7).is_none());

        let use_case = SettleTransactionUseCase::new(
            ledger.clone(),
            Arc::new(RecordingNotifier::succeeding()),
        );

        use_case.execute(settle_input(1, "approve"), ctx()).await.unwrap();

        let balance = ledger.balance_of(7).unwrap();
        assert_eq!(balance.available_balance, amount("25.00"));
        assert_eq!(balance.total_withdrawn, amount("0.00"));
    }

    #[tokio::test]
    async fn approve_purchase_changes_status_only() {
        let ledger = Arc::new(InMemoryLedger::default());
        ledger.seed_user(7, "Alice Example", "alice@example.com");
        ledger.seed_balance(7, "100.00", "0.00");
        ledger.seed_transaction(1, 7, TransactionType::Purchase, "30.00");

        let use_case = SettleTransactionUseCase::new(
            ledger.clone(),
            Arc::new(RecordingNotifier::succeeding()),
        );

        let output = use_case.execute(settle_input(1, "approve"), ctx()).await.unwrap();

        assert_eq!(output.status, TransactionStatus::Completed);
        let balance = ledger.balance_of(7).unwrap();
        assert_eq!(balance.available_balance, amount("100.00"));
        assert_eq!(balance.total_withdrawn, amount("0.00"));
    }
}

#[cfg(test)]
mod listing_tests {
    use super::support::InMemoryLedger;
    use crate::application::config::LedgerConfig;
    use crate::application::list_transactions::{ListTransactionsInput, ListTransactionsUseCase};
    use crate::domain::value_object::TransactionType;
    use crate::error::LedgerError;
    use std::sync::Arc;

    fn seeded_ledger() -> Arc<InMemoryLedger> {
        let ledger = Arc::new(InMemoryLedger::default());
        ledger.seed_user(7, "Alice Example", "alice@example.com");
        ledger.seed_user(8, "Bob Example", "bob@example.com");
        ledger.seed_transaction_aged(1, 7, TransactionType::Deposit, "25.00", 30);
        ledger.seed_transaction_aged(2, 8, TransactionType::Withdrawal, "-50.00", 20);
        ledger.seed_transaction_aged(3, 7, TransactionType::Earning, "5.00", 10);
        ledger
    }

    fn use_case(ledger: &Arc<InMemoryLedger>) -> ListTransactionsUseCase<InMemoryLedger> {
        ListTransactionsUseCase::new(ledger.clone(), Arc::new(LedgerConfig::default()))
    }

    #[tokio::test]
    async fn lists_newest_first() {
        let ledger = seeded_ledger();
        let output = use_case(&ledger)
            .execute(ListTransactionsInput::default())
            .await
            .unwrap();

        assert_eq!(output.total, 3);
        let ids: Vec<i64> = output
            .items
            .iter()
            .map(|l| l.transaction.id.get())
            .collect();
        assert_eq!(ids, vec![3, 2, 1]);
        assert_eq!(output.items[0].user_full_name, "Alice Example");
    }

    #[tokio::test]
    async fn filters_by_type_and_status() {
        let ledger = seeded_ledger();

        let output = use_case(&ledger)
            .execute(ListTransactionsInput {
                transaction_type: Some("withdrawal".to_string()),
                status: Some("pending".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(output.total, 1);
        assert_eq!(output.items[0].transaction.id.get(), 2);
        assert_eq!(output.items[0].user_email, "bob@example.com");
    }

    #[tokio::test]
    async fn filters_by_user() {
        let ledger = seeded_ledger();

        let output = use_case(&ledger)
            .execute(ListTransactionsInput {
                user_id: Some(7),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(output.total, 2);
        assert!(output.items.iter().all(|l| l.transaction.user_id.get() == 7));
    }

    #[tokio::test]
    async fn rejects_unknown_filter_tokens() {
        let ledger = seeded_ledger();

        let err = use_case(&ledger)
            .execute(ListTransactionsInput {
                transaction_type: Some("transfer".to_string()),
                ..Default::default()
            })
            .await
            .unwrap_err();
        assert!(matches!(err, LedgerError::InvalidFilter(_)));

        let err = use_case(&ledger)
            .execute(ListTransactionsInput {
                status: Some("approved".to_string()),
                ..Default::default()
            })
            .await
            .unwrap_err();
        assert!(matches!(err, LedgerError::InvalidFilter(_)));
    }

    #[tokio::test]
    async fn paginates_with_total_for_page_math() {
        let ledger = seeded_ledger();

        let output = use_case(&ledger)
            .execute(ListTransactionsInput {
                page: Some(2),
                per_page: Some(1),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(output.total, 3);
        assert_eq!(output.page, 2);
        assert_eq!(output.per_page, 1);
        assert_eq!(output.items.len(), 1);
        assert_eq!(output.items[0].transaction.id.get(), 2);
    }

    #[tokio::test]
    async fn clamps_page_inputs() {
        let ledger = seeded_ledger();

        let output = use_case(&ledger)
            .execute(ListTransactionsInput {
                page: Some(0),
                per_page: Some(10_000),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(output.page, 1);
        assert_eq!(output.per_page, LedgerConfig::default().max_page_size);
    }
}

#[cfg(test)]
mod outbox_tests {
    use super::support::{InMemoryLedger, RecordingNotifier};
    use crate::application::config::LedgerConfig;
    use crate::application::drain_outbox::DrainOutboxUseCase;
    use crate::domain::entity::EmailNotification;
    use crate::domain::repository::OutboxRepository;
    use chrono::Utc;
    use std::sync::Arc;
    use std::time::Duration;

    fn notification(subject: &str) -> EmailNotification {
        EmailNotification::new(
            "alice@example.com".to_string(),
            "Alice Example".to_string(),
            subject.to_string(),
            "<p>body</p>".to_string(),
            "body".to_string(),
        )
    }

    #[tokio::test]
    async fn drain_delivers_pending_rows() {
        let ledger = Arc::new(InMemoryLedger::default());
        ledger.push_outbox(notification("first"));
        ledger.push_outbox(notification("second"));
        let mut sent = notification("already sent");
        sent.sent_at = Some(Utc::now());
        ledger.push_outbox(sent);

        let notifier = RecordingNotifier::succeeding();
        let use_case = DrainOutboxUseCase::new(
            ledger.clone(),
            Arc::new(notifier.clone()),
            Arc::new(LedgerConfig::default()),
        );

        let output = use_case.execute().await.unwrap();

        assert_eq!(output.delivered, 2);
        assert_eq!(output.failed, 0);
        assert_eq!(notifier.delivery_count(), 2);
        assert!(ledger.outbox_rows().iter().all(|n| n.is_sent()));
    }

    #[tokio::test]
    async fn drain_records_failed_attempts() {
        let ledger = Arc::new(InMemoryLedger::default());
        ledger.push_outbox(notification("first"));

        let use_case = DrainOutboxUseCase::new(
            ledger.clone(),
            Arc::new(RecordingNotifier::failing()),
            Arc::new(LedgerConfig::default()),
        );

        let output = use_case.execute().await.unwrap();

        assert_eq!(output.delivered, 0);
        assert_eq!(output.failed, 1);
        let rows = ledger.outbox_rows();
        assert!(!rows[0].is_sent());
        assert_eq!(rows[0].attempts, 1);
    }

    #[tokio::test]
    async fn purge_removes_only_old_delivered_rows() {
        let ledger = Arc::new(InMemoryLedger::default());

        let mut old_sent = notification("old sent");
        old_sent.sent_at = Some(Utc::now() - chrono::Duration::days(8));
        ledger.push_outbox(old_sent);

        let mut fresh_sent = notification("fresh sent");
        fresh_sent.sent_at = Some(Utc::now());
        ledger.push_outbox(fresh_sent);

        ledger.push_outbox(notification("old pending"));

        let purged = ledger
            .purge_delivered(Duration::from_secs(7 * 24 * 3600))
            .await
            .unwrap();

        assert_eq!(purged, 1);
        let remaining = ledger.outbox_rows();
        assert_eq!(remaining.len(), 2);
        assert!(remaining.iter().any(|n| n.subject == "fresh sent"));
        assert!(remaining.iter().any(|n| n.subject == "old pending"));
    }
}

#[cfg(test)]
mod services_tests {
    use super::support::amount;
    use crate::domain::entity::Transaction;
    use crate::domain::services::{
        compose_settlement_email, settled_message, settled_notification_failed_message,
    };
    use crate::domain::value_object::{Decision, TransactionStatus, TransactionType};
    use chrono::Utc;
    use kernel::id::{TransactionId, UserId};

    fn transaction(transaction_type: TransactionType, amount_str: &str) -> Transaction {
        let now = Utc::now();
        Transaction {
            id: TransactionId::from_i64(1),
            user_id: UserId::from_i64(7),
            transaction_type,
            amount: amount(amount_str),
            status: TransactionStatus::Completed,
            method: None,
            transaction_hash: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn approval_email_wording() {
        let mail = compose_settlement_email(
            &transaction(TransactionType::Deposit, "250.00"),
            "Alice Example",
            "alice@example.com",
            Decision::Approve,
        );

        assert_eq!(mail.subject, "Your Transaction Has Been Approved");
        assert_eq!(mail.recipient_email, "alice@example.com");
        assert!(mail.text_body.starts_with("Hello Alice Example,"));
        assert!(
            mail.text_body
                .contains("Your deposit transaction of $250.00 has been approved by an admin.")
        );
        assert!(mail.text_body.contains("The funds have been processed."));
        assert!(mail.html_body.contains("<strong>$250.00</strong>"));
        assert!(!mail.is_sent());
    }

    #[test]
    fn rejection_email_wording() {
        let mail = compose_settlement_email(
            &transaction(TransactionType::Withdrawal, "-50.00"),
            "Bob Example",
            "bob@example.com",
            Decision::Reject,
        );

        assert_eq!(mail.subject, "Your Transaction Has Been Rejected");
        // Amount is shown unsigned even for withdrawals
        assert!(
            mail.text_body
                .contains("Your withdrawal transaction of $50.00 has been rejected by an admin.")
        );
        assert!(
            mail.text_body
                .contains("Please contact support for more information.")
        );
    }

    #[test]
    fn operator_messages() {
        assert_eq!(
            settled_message(Decision::Approve),
            "Transaction approved successfully and notification sent!"
        );
        assert_eq!(
            settled_message(Decision::Reject),
            "Transaction rejected successfully and notification sent!"
        );
        assert_eq!(
            settled_notification_failed_message(Decision::Approve),
            "Transaction approved, but failed to send notification email."
        );
        assert_eq!(
            settled_notification_failed_message(Decision::Reject),
            "Transaction rejected, but failed to send notification email."
        );
    }
}

#[cfg(test)]
mod dto_tests {
    use crate::presentation::dto::{ListTransactionsQuery, SettleRequest, SettleResponse};
    use crate::domain::value_object::TransactionStatus;

    #[test]
    fn settle_request_deserialization() {
        let request: SettleRequest = serde_json::from_str(r#"{"decision":"approve"}"#).unwrap();
        assert_eq!(request.decision, "approve");
    }

    #[test]
    fn settle_response_serialization() {
        let response = SettleResponse {
            transaction_id: 42,
            status: TransactionStatus::Completed,
            notification_sent: true,
            message: "Transaction approved successfully and notification sent!".to_string(),
        };

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains(r#""transactionId":42"#));
        assert!(json.contains(r#""status":"completed""#));
        assert!(json.contains(r#""notificationSent":true"#));
    }

    #[test]
    fn list_query_deserialization() {
        let query: ListTransactionsQuery = serde_json::from_str(
            r#"{"transactionType":"withdrawal","status":"pending","userId":7,"page":2,"perPage":25}"#,
        )
        .unwrap();

        assert_eq!(query.transaction_type.as_deref(), Some("withdrawal"));
        assert_eq!(query.status.as_deref(), Some("pending"));
        assert_eq!(query.user_id, Some(7));
        assert_eq!(query.page, Some(2));
        assert_eq!(query.per_page, Some(25));

        let empty: ListTransactionsQuery = serde_json::from_str("{}").unwrap();
        assert!(empty.transaction_type.is_none());
        assert!(empty.page.is_none());
    }
}

#[cfg(test)]
mod config_tests {
    use crate::application::config::LedgerConfig;
    use std::time::Duration;

    #[test]
    fn test_default_config() {
        let config = LedgerConfig::default();

        assert_eq!(config.default_page_size, 10);
        assert_eq!(config.max_page_size, 100);
        assert_eq!(config.outbox_drain_limit, 50);
        assert_eq!(config.outbox_retention, Duration::from_secs(7 * 24 * 3600));
    }
}

#[cfg(test)]
mod error_tests {
    use crate::domain::value_object::TransactionStatus;
    use crate::error::LedgerError;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use kernel::error::kind::ErrorKind;

    #[test]
    fn test_error_into_response_status_codes() {
        let test_cases: Vec<(LedgerError, StatusCode)> = vec![
            (LedgerError::NotFound, StatusCode::NOT_FOUND),
            (
                LedgerError::AlreadySettled(TransactionStatus::Completed),
                StatusCode::CONFLICT,
            ),
            (
                LedgerError::InsufficientFunds,
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
            (
                LedgerError::InvalidDecision("cancel".to_string()),
                StatusCode::BAD_REQUEST,
            ),
            (
                LedgerError::InvalidFilter("transfer".to_string()),
                StatusCode::BAD_REQUEST,
            ),
            (
                LedgerError::Internal("test".to_string()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, expected_status) in test_cases {
            assert_eq!(error.status_code(), expected_status);
            let response = error.into_response();
            assert_eq!(
                response.status(),
                expected_status,
                "Error should return correct status code"
            );
        }
    }

    #[test]
    fn test_error_kinds() {
        assert_eq!(LedgerError::NotFound.kind(), ErrorKind::NotFound);
        assert_eq!(
            LedgerError::AlreadySettled(TransactionStatus::Failed).kind(),
            ErrorKind::Conflict
        );
        assert_eq!(
            LedgerError::InsufficientFunds.kind(),
            ErrorKind::UnprocessableEntity
        );
        assert_eq!(
            LedgerError::InvalidDecision("x".to_string()).kind(),
            ErrorKind::BadRequest
        );
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            LedgerError::NotFound.to_string(),
            "Invalid transaction ID."
        );
        assert_eq!(
            LedgerError::AlreadySettled(TransactionStatus::Completed).to_string(),
            "Transaction is already completed."
        );
        assert_eq!(
            LedgerError::AlreadySettled(TransactionStatus::Failed).to_string(),
            "Transaction is already failed."
        );
        assert_eq!(
            LedgerError::InvalidDecision("cancel".to_string()).to_string(),
            "Invalid action or transaction ID."
        );
    }
}
