//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::entity::{AuditEntry, MiningPackage, NewPackage, Referral, UserAccount};
use crate::domain::value_object::{ModerationAction, ReferralStatus};
use crate::error::BackofficeResult;
use kernel::id::{ReferralId, UserId};
use rust_decimal::Decimal;

/// A referral joined with both parties' contact details (read model)
#[derive(Debug, Clone)]
pub struct ReferralUpdate {
    /// The referral as committed (new status, refreshed timestamp)
    pub referral: Referral,
    pub referrer_name: String,
    pub referrer_email: String,
    pub referred_name: String,
}

/// The dashboard aggregates (read model)
#[derive(Debug, Clone)]
pub struct DashboardSummary {
    pub total_users: i64,
    pub total_admins: i64,
    /// SUM of package price over all active miners; 0.00 when none
    pub total_investment: Decimal,
    /// ABS(SUM(amount)) over pending withdrawals; 0.00 when none
    pub pending_withdrawals: Decimal,
    pub recent_users: Vec<UserAccount>,
}

/// User moderation write access
#[trait_variant::make(ModerationRepository: Send)]
pub trait LocalModerationRepository {
    /// Apply one moderation action atomically
    ///
    /// One unit: lock the user row, reject a missing user or a conflicting
    /// action with nothing written, update the status, insert the audit
    /// entry, commit. Returns the account in its new state.
    async fn moderate(
        &self,
        user_id: UserId,
        action: ModerationAction,
        audit: &AuditEntry,
    ) -> BackofficeResult<UserAccount>;
}

/// Mining package catalog access
#[trait_variant::make(PackageRepository: Send)]
pub trait LocalPackageRepository {
    /// Store a validated package; created active
    async fn insert_package(&self, package: &NewPackage) -> BackofficeResult<MiningPackage>;

    /// List active packages, cheapest first
    async fn list_active_packages(&self) -> BackofficeResult<Vec<MiningPackage>>;
}

/// Referral write access
#[trait_variant::make(ReferralRepository: Send)]
pub trait LocalReferralRepository {
    /// Set a referral's status atomically, with the audit entry
    ///
    /// Setting the current status again succeeds (idempotent set). A
    /// missing referral is rejected with nothing written.
    async fn set_referral_status(
        &self,
        referral_id: ReferralId,
        status: ReferralStatus,
        audit: &AuditEntry,
    ) -> BackofficeResult<ReferralUpdate>;
}

/// Dashboard read access
#[trait_variant::make(DashboardRepository: Send)]
pub trait LocalDashboardRepository {
    /// Compute the dashboard aggregates in one pass
    async fn dashboard_summary(&self, recent_users: i64) -> BackofficeResult<DashboardSummary>;
}
