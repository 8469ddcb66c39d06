//! Presentation Layer
//!
//! HTTP handlers, DTOs, router, and middleware.

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod router;

pub use handlers::BackofficeAppState;
pub use middleware::require_admin_context;
pub use router::{backoffice_router, backoffice_router_generic};
