//! Back Office Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, email wording, repository traits
//! - `application/` - Use cases
//! - `infra/` - Database and mail relay implementations
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Administration Model
//! - Moderation and referral writes commit together with their audit entry;
//!   an audited action either fully happened or left no trace
//! - Moderation rejects no-op actions (verify on an active account, suspend
//!   on a suspended one); referral status writes are idempotent
//! - Owner and referrer emails are delivered after commit, best effort
//! - Package totals are computed server side, never client-supplied

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::BackofficeConfig;
pub use error::{BackofficeError, BackofficeResult};
pub use infra::mail::RelayNotifier;
pub use infra::postgres::PgBackofficeRepository;
pub use presentation::router::backoffice_router;

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
    pub use crate::infra::postgres::PgBackofficeRepository as BackofficeStore;
}

pub mod router {
    pub use crate::presentation::router::*;
}

pub mod middleware {
    pub use crate::presentation::middleware::*;
}
