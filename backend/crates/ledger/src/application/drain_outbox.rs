//! Drain Outbox Use Case
//!
//! Redelivers notifications whose original post-commit delivery failed
//! (or never ran, after a crash). Runs at startup; safe to run any time.
//! Delivery is at-least-once: a crash between transport accept and
//! `mark_sent` means the owner can receive a duplicate email.

use crate::application::config::LedgerConfig;
use crate::domain::notifier::SettlementNotifier;
use crate::domain::repository::OutboxRepository;
use crate::error::LedgerResult;
use std::sync::Arc;

/// Output DTO for one drain pass
#[derive(Debug, Clone, Copy, Default)]
pub struct DrainOutboxOutput {
    pub delivered: u64,
    pub failed: u64,
}

/// Drain Outbox Use Case
pub struct DrainOutboxUseCase<R, N>
where
    R: OutboxRepository,
    N: SettlementNotifier,
{
    repo: Arc<R>,
    notifier: Arc<N>,
    config: Arc<LedgerConfig>,
}

impl<R, N> DrainOutboxUseCase<R, N>
where
    R: OutboxRepository,
    N: SettlementNotifier,
{
    pub fn new(repo: Arc<R>, notifier: Arc<N>, config: Arc<LedgerConfig>) -> Self {
        Self {
            repo,
            notifier,
            config,
        }
    }

    pub async fn execute(&self) -> LedgerResult<DrainOutboxOutput> {
        let pending = self
            .repo
            .find_pending(self.config.outbox_drain_limit)
            .await?;

        let mut output = DrainOutboxOutput::default();

        for notification in &pending {
            if self.notifier.deliver(notification).await {
                self.repo.mark_sent(notification.id).await?;
                output.delivered += 1;
            } else {
                self.repo.record_attempt(notification.id).await?;
                output.failed += 1;
            }
        }

        if output.delivered > 0 || output.failed > 0 {
            tracing::info!(
                delivered = output.delivered,
                failed = output.failed,
                "Outbox drain pass finished"
            );
        }

        Ok(output)
    }
}
