//! Moderate User Use Case
//!
//! An admin verifies, suspends or reinstates a user account. The status
//! change and audit entry commit together; the owner email is delivered
//! afterwards, best effort.

use crate::application::config::BackofficeConfig;
use crate::domain::entity::AuditEntry;
use crate::domain::notifier::BackofficeNotifier;
use crate::domain::repository::ModerationRepository;
use crate::domain::services;
use crate::domain::value_object::{AccountStatus, ModerationAction};
use crate::error::{BackofficeError, BackofficeResult};
use kernel::id::UserId;
use platform::client::ClientFingerprint;
use platform::context::RequestContext;
use std::sync::Arc;

/// Input DTO for moderate user
#[derive(Debug, Clone)]
pub struct ModerateUserInput {
    pub user_id: i64,
    /// Raw action token; validated here, before any store call
    pub action: String,
}

/// Output DTO for moderate user
#[derive(Debug, Clone)]
pub struct ModerateUserOutput {
    pub user_id: UserId,
    pub account_status: AccountStatus,
    /// false = status changed, but the notification email could not be sent
    pub notification_sent: bool,
    pub message: String,
}

/// Moderate User Use Case
pub struct ModerateUserUseCase<R, N>
where
    R: ModerationRepository,
    N: BackofficeNotifier,
{
    repo: Arc<R>,
    notifier: Arc<N>,
    config: Arc<BackofficeConfig>,
}

impl<R, N> ModerateUserUseCase<R, N>
where
    R: ModerationRepository,
    N: BackofficeNotifier,
{
    pub fn new(repo: Arc<R>, notifier: Arc<N>, config: Arc<BackofficeConfig>) -> Self {
        Self {
            repo,
            notifier,
            config,
        }
    }

    pub async fn execute(
        &self,
        input: ModerateUserInput,
        ctx: RequestContext,
        client: &ClientFingerprint,
    ) -> BackofficeResult<ModerateUserOutput> {
        let action = ModerationAction::from_code(&input.action)
            .ok_or_else(|| BackofficeError::InvalidAction(input.action.clone()))?;

        let user_id = UserId::from(input.user_id);
        let audit = AuditEntry::record(
            &ctx,
            client,
            services::moderation_audit_action(action, user_id),
        );

        let user = self.repo.moderate(user_id, action, &audit).await?;

        tracing::info!(
            user_id = %user_id,
            action = %action,
            account_status = %user.account_status,
            admin_id = ctx.admin_id,
            correlation_id = %ctx.correlation_id,
            "User moderated"
        );

        let email = services::compose_moderation_email(
            action,
            &user,
            &self.config.app_name,
            &self.config.login_url,
        );
        let notification_sent = self.notifier.deliver(&email).await;
        if !notification_sent {
            tracing::warn!(
                user_id = %user_id,
                action = %action,
                "User moderated but notification not delivered"
            );
        }

        Ok(ModerateUserOutput {
            user_id,
            account_status: user.account_status,
            notification_sent,
            message: services::moderated_message(action, notification_sent),
        })
    }
}
