//! Domain Layer
//!
//! Contains entities, value objects, settlement wording, and the
//! repository/notifier traits.

pub mod entity;
pub mod notifier;
pub mod repository;
pub mod services;
pub mod value_object;

// Re-exports
pub use entity::{Balance, EmailNotification, Transaction};
pub use notifier::SettlementNotifier;
pub use repository::{OutboxRepository, SettlementRepository, TransactionRepository};
pub use value_object::{Amount, Decision, TransactionStatus, TransactionType};
