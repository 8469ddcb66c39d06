//! Ledger Middleware

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use platform::context::extract_context;

/// Middleware that requires an authenticated admin context
///
/// The fronting identity layer authenticates the admin and forwards the
/// identity headers; requests without them are turned away with 401 and
/// an `X-Auth-Required` marker header. On success the extracted
/// [`platform::context::RequestContext`] is inserted into the request
/// extensions for the handlers.
pub async fn require_admin_context(
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, Response> {
    match extract_context(req.headers()) {
        Ok(ctx) => {
            req.extensions_mut().insert(ctx);
            Ok(next.run(req).await)
        }
        Err(e) => {
            tracing::debug!(error = %e, "Request rejected: no admin context");
            Err((StatusCode::UNAUTHORIZED, [("X-Auth-Required", "true")]).into_response())
        }
    }
}
