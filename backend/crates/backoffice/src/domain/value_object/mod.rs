//! Value Object Module

pub mod account_status;
pub mod moderation_action;
pub mod referral_status;

pub use account_status::AccountStatus;
pub use moderation_action::ModerationAction;
pub use referral_status::ReferralStatus;
