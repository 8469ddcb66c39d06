//! Set Referral Status Use Case
//!
//! An admin toggles a referral between active and inactive. The status
//! write and audit entry commit together; the referrer is emailed about
//! the change afterwards, best effort.

use crate::domain::entity::AuditEntry;
use crate::domain::notifier::BackofficeNotifier;
use crate::domain::repository::ReferralRepository;
use crate::domain::services;
use crate::domain::value_object::ReferralStatus;
use crate::error::{BackofficeError, BackofficeResult};
use kernel::id::ReferralId;
use platform::client::ClientFingerprint;
use platform::context::RequestContext;
use std::sync::Arc;

/// Input DTO for set referral status
#[derive(Debug, Clone)]
pub struct SetReferralStatusInput {
    pub referral_id: i64,
    /// Raw status token; validated here, before any store call
    pub status: String,
}

/// Output DTO for set referral status
#[derive(Debug, Clone)]
pub struct SetReferralStatusOutput {
    pub referral_id: ReferralId,
    pub status: ReferralStatus,
    pub message: String,
}

/// Set Referral Status Use Case
pub struct SetReferralStatusUseCase<R, N>
where
    R: ReferralRepository,
    N: BackofficeNotifier,
{
    repo: Arc<R>,
    notifier: Arc<N>,
}

impl<R, N> SetReferralStatusUseCase<R, N>
where
    R: ReferralRepository,
    N: BackofficeNotifier,
{
    pub fn new(repo: Arc<R>, notifier: Arc<N>) -> Self {
        Self { repo, notifier }
    }

    pub async fn execute(
        &self,
        input: SetReferralStatusInput,
        ctx: RequestContext,
        client: &ClientFingerprint,
    ) -> BackofficeResult<SetReferralStatusOutput> {
        let status = ReferralStatus::from_code(&input.status)
            .ok_or_else(|| BackofficeError::InvalidStatusToken(input.status.clone()))?;

        let referral_id = ReferralId::from(input.referral_id);
        let audit = AuditEntry::record(
            &ctx,
            client,
            services::referral_audit_action(referral_id, status),
        );

        let update = self
            .repo
            .set_referral_status(referral_id, status, &audit)
            .await?;

        tracing::info!(
            referral_id = %referral_id,
            status = %status,
            admin_id = ctx.admin_id,
            correlation_id = %ctx.correlation_id,
            "Referral status updated"
        );

        let email = services::compose_referral_email(
            &update.referrer_name,
            &update.referrer_email,
            &update.referred_name,
            status,
        );
        if !self.notifier.deliver(&email).await {
            tracing::warn!(
                referral_id = %referral_id,
                referrer = %update.referrer_email,
                "Referral updated but notification not delivered"
            );
        }

        Ok(SetReferralStatusOutput {
            referral_id,
            status,
            message: services::referral_updated_message(status),
        })
    }
}
