//! Request-scoped operator context
//!
//! Every admin operation runs on behalf of an identified operator. The
//! fronting identity layer authenticates the admin and forwards the
//! numeric admin ID in a trusted header; this module turns those headers
//! into a [`RequestContext`] value that travels with the request instead
//! of living in ambient global state.

use axum::http::HeaderMap;
use uuid::Uuid;

/// Header carrying the authenticated admin's numeric ID
pub const ADMIN_ID_HEADER: &str = "x-admin-id";

/// Header carrying the request correlation ID (optional)
pub const CORRELATION_ID_HEADER: &str = "x-correlation-id";

/// Identity and tracing context for a single admin request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestContext {
    /// Authenticated admin performing the operation
    pub admin_id: i64,
    /// Correlation ID tying log lines and audit rows to this request
    pub correlation_id: Uuid,
}

impl RequestContext {
    /// Create a new context
    pub fn new(admin_id: i64, correlation_id: Uuid) -> Self {
        Self {
            admin_id,
            correlation_id,
        }
    }

    /// Create a context with a fresh correlation ID (for background jobs)
    pub fn background(admin_id: i64) -> Self {
        Self::new(admin_id, Uuid::new_v4())
    }
}

/// Error when extracting the operator context
#[derive(Debug, Clone, thiserror::Error)]
pub enum ContextError {
    #[error("Missing required header: {0}")]
    MissingHeader(&'static str),
    #[error("Malformed header: {0}")]
    MalformedHeader(&'static str),
}

/// Extract the operator context from request headers
///
/// The admin ID header is required; a missing or non-numeric value is an
/// error. The correlation ID header is optional and a fresh UUID is
/// generated when it is absent or unparseable.
///
/// ## Returns
/// * `Ok(RequestContext)` - Context for the authenticated admin
/// * `Err(ContextError)` - Admin ID header missing or malformed
pub fn extract_context(headers: &HeaderMap) -> Result<RequestContext, ContextError> {
    let admin_id = headers
        .get(ADMIN_ID_HEADER)
        .ok_or(ContextError::MissingHeader(ADMIN_ID_HEADER))?
        .to_str()
        .map_err(|_| ContextError::MalformedHeader(ADMIN_ID_HEADER))?
        .parse::<i64>()
        .map_err(|_| ContextError::MalformedHeader(ADMIN_ID_HEADER))?;

    let correlation_id = headers
        .get(CORRELATION_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| Uuid::parse_str(s).ok())
        .unwrap_or_else(Uuid::new_v4);

    Ok(RequestContext::new(admin_id, correlation_id))
}
