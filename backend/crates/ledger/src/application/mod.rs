//! Application Layer
//!
//! Use cases and application services.

pub mod config;
pub mod drain_outbox;
pub mod list_transactions;
pub mod settle_transaction;

// Re-exports
pub use config::LedgerConfig;
pub use drain_outbox::{DrainOutboxOutput, DrainOutboxUseCase};
pub use list_transactions::{ListTransactionsInput, ListTransactionsOutput, ListTransactionsUseCase};
pub use settle_transaction::{
    SettleTransactionInput, SettleTransactionOutput, SettleTransactionUseCase,
};
