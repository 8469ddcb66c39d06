//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::entity::{EmailNotification, Transaction};
use crate::domain::value_object::{Decision, TransactionStatus, TransactionType};
use crate::error::LedgerResult;
use kernel::id::{TransactionId, UserId};
use std::time::Duration;
use uuid::Uuid;

/// Optional listing filters; `None` means "any"
#[derive(Debug, Clone, Copy, Default)]
pub struct TransactionFilter {
    pub transaction_type: Option<TransactionType>,
    pub status: Option<TransactionStatus>,
    pub user_id: Option<UserId>,
}

/// A transaction joined with its owner's contact details (read model)
#[derive(Debug, Clone)]
pub struct TransactionListing {
    pub transaction: Transaction,
    pub user_full_name: String,
    pub user_email: String,
}

/// Result of one applied settlement
#[derive(Debug, Clone)]
pub struct SettlementOutcome {
    /// The transaction as committed (terminal status, refreshed timestamp)
    pub transaction: Transaction,
    /// The outbox row committed alongside it, awaiting delivery
    pub notification: EmailNotification,
}

/// Transaction read access
#[trait_variant::make(TransactionRepository: Send)]
pub trait LocalTransactionRepository {
    /// List transactions newest first, joined with owner contact details
    async fn list(
        &self,
        filter: &TransactionFilter,
        limit: i64,
        offset: i64,
    ) -> LedgerResult<Vec<TransactionListing>>;

    /// Count transactions matching the filter (for page math)
    async fn count(&self, filter: &TransactionFilter) -> LedgerResult<i64>;
}

/// Settlement write access
#[trait_variant::make(SettlementRepository: Send)]
pub trait LocalSettlementRepository {
    /// Apply one settlement atomically
    ///
    /// One serializable unit: lock the transaction row, check the
    /// preconditions in order (existence, pending status, funds for an
    /// approved withdrawal), write the terminal status, mutate the balance,
    /// insert the outbox row, commit. Precondition failures surface as
    /// `NotFound` / `AlreadySettled` / `InsufficientFunds` with nothing
    /// written. Concurrent calls for the same ID serialize; exactly one
    /// succeeds.
    async fn apply(
        &self,
        transaction_id: TransactionId,
        decision: Decision,
    ) -> LedgerResult<SettlementOutcome>;
}

/// Notification outbox access
#[trait_variant::make(OutboxRepository: Send)]
pub trait LocalOutboxRepository {
    /// Fetch undelivered notifications, oldest first
    async fn find_pending(&self, limit: i64) -> LedgerResult<Vec<EmailNotification>>;

    /// Stamp a notification as delivered (also counts the attempt)
    async fn mark_sent(&self, outbox_id: Uuid) -> LedgerResult<()>;

    /// Count a failed delivery attempt
    async fn record_attempt(&self, outbox_id: Uuid) -> LedgerResult<()>;

    /// Delete delivered notifications older than the cutoff
    async fn purge_delivered(&self, older_than: Duration) -> LedgerResult<u64>;
}
