//! Presentation Layer
//!
//! HTTP handlers, DTOs, router, and middleware.

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod router;

pub use handlers::LedgerAppState;
pub use middleware::require_admin_context;
pub use router::{ledger_router, ledger_router_generic};
