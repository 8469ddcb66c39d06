//! Settle Transaction Use Case
//!
//! The core back-office operation: an admin approves or rejects one
//! pending transaction. The store applies the settlement atomically; the
//! owner notification is delivered afterwards, best effort.

use crate::domain::notifier::SettlementNotifier;
use crate::domain::repository::{OutboxRepository, SettlementRepository};
use crate::domain::services;
use crate::domain::value_object::{Decision, TransactionStatus};
use crate::error::{LedgerError, LedgerResult};
use kernel::id::TransactionId;
use platform::context::RequestContext;
use std::sync::Arc;

/// Input DTO for settle transaction
#[derive(Debug, Clone)]
pub struct SettleTransactionInput {
    pub transaction_id: i64,
    /// Raw decision token; validated here, before any store call
    pub decision: String,
}

/// Output DTO for settle transaction
#[derive(Debug, Clone)]
pub struct SettleTransactionOutput {
    pub transaction_id: TransactionId,
    pub status: TransactionStatus,
    /// false = settled, but the notification email could not be sent
    pub notification_sent: bool,
    pub message: String,
}

/// Settle Transaction Use Case
pub struct SettleTransactionUseCase<R, N>
where
    R: SettlementRepository + OutboxRepository,
    N: SettlementNotifier,
{
    repo: Arc<R>,
    notifier: Arc<N>,
}

impl<R, N> SettleTransactionUseCase<R, N>
where
    R: SettlementRepository + OutboxRepository,
    N: SettlementNotifier,
{
    pub fn new(repo: Arc<R>, notifier: Arc<N>) -> Self {
        Self { repo, notifier }
    }

    pub async fn execute(
        &self,
        input: SettleTransactionInput,
        ctx: RequestContext,
    ) -> LedgerResult<SettleTransactionOutput> {
        let decision = Decision::from_code(&input.decision)
            .ok_or_else(|| LedgerError::InvalidDecision(input.decision.clone()))?;

        let transaction_id = TransactionId::from(input.transaction_id);

        let outcome = self.repo.apply(transaction_id, decision).await?;

        tracing::info!(
            transaction_id = %transaction_id,
            user_id = %outcome.transaction.user_id,
            decision = %decision,
            status = %outcome.transaction.status,
            admin_id = ctx.admin_id,
            correlation_id = %ctx.correlation_id,
            "Transaction settled"
        );

        // Post-commit delivery. A failure here never unwinds the
        // settlement; the outbox row stays pending for redelivery.
        let notification_sent = self.notifier.deliver(&outcome.notification).await;

        let bookkeeping = if notification_sent {
            self.repo.mark_sent(outcome.notification.id).await
        } else {
            self.repo.record_attempt(outcome.notification.id).await
        };
        if let Err(e) = bookkeeping {
            tracing::warn!(
                outbox_id = %outcome.notification.id,
                error = %e,
                "Failed to update outbox after delivery attempt"
            );
        }

        let message = if notification_sent {
            services::settled_message(decision)
        } else {
            tracing::warn!(
                transaction_id = %transaction_id,
                outbox_id = %outcome.notification.id,
                "Transaction settled but notification not delivered"
            );
            services::settled_notification_failed_message(decision)
        };

        Ok(SettleTransactionOutput {
            transaction_id,
            status: outcome.transaction.status,
            notification_sent,
            message,
        })
    }
}
