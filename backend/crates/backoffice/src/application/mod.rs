//! Application Layer
//!
//! Use cases and application services.

pub mod config;
pub mod create_package;
pub mod dashboard_summary;
pub mod list_packages;
pub mod moderate_user;
pub mod set_referral_status;

// Re-exports
pub use config::BackofficeConfig;
pub use create_package::{CreatePackageInput, CreatePackageOutput, CreatePackageUseCase};
pub use dashboard_summary::DashboardSummaryUseCase;
pub use list_packages::{ListPackagesOutput, ListPackagesUseCase};
pub use moderate_user::{ModerateUserInput, ModerateUserOutput, ModerateUserUseCase};
pub use set_referral_status::{
    SetReferralStatusInput, SetReferralStatusOutput, SetReferralStatusUseCase,
};
