//! Entity Module

pub mod audit;
pub mod mining_package;
pub mod referral;
pub mod user_account;

pub use audit::AuditEntry;
pub use mining_package::{MiningPackage, NewPackage, PackageDraft};
pub use referral::Referral;
pub use user_account::UserAccount;
