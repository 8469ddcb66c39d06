//! Ledger Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, settlement wording, repository traits
//! - `application/` - Use cases
//! - `infra/` - Database and mail relay implementations
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Settlement Model
//! - Only pending transactions can be settled; settled ones are immutable
//! - Each settlement is one serializable unit: row lock + status CAS + balance
//!   mutation + outbox insert, committed together
//! - An approved withdrawal never drives the owner's balance below zero
//! - The owner notification is delivered after commit, best effort; a failed
//!   delivery stays in the outbox for redelivery

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::LedgerConfig;
pub use error::{LedgerError, LedgerResult};
pub use infra::mail::RelayNotifier;
pub use infra::postgres::PgLedgerRepository;
pub use presentation::router::ledger_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

// Convenience re-exports
pub mod config {
    pub use crate::application::config::*;
}

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}

pub mod handlers {
    pub use crate::presentation::handlers::*;
}

pub mod store {
    pub use crate::infra::postgres::PgLedgerRepository as LedgerStore;
}

pub mod router {
    pub use crate::presentation::router::*;
}

pub mod middleware {
    pub use crate::presentation::middleware::*;
}

#[cfg(test)]
mod tests;
