//! Domain Layer
//!
//! Contains entities, value objects, moderation and wording rules, and the
//! repository/notifier traits.

pub mod entity;
pub mod notifier;
pub mod repository;
pub mod services;
pub mod value_object;

// Re-exports
pub use entity::{AuditEntry, MiningPackage, NewPackage, PackageDraft, Referral, UserAccount};
pub use notifier::{BackofficeNotifier, OutgoingEmail};
pub use repository::{
    DashboardRepository, DashboardSummary, ModerationRepository, PackageRepository,
    ReferralRepository, ReferralUpdate,
};
pub use value_object::{AccountStatus, ModerationAction, ReferralStatus};
