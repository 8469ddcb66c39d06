//! Back Office Router

use crate::application::config::BackofficeConfig;
use crate::domain::notifier::BackofficeNotifier;
use crate::domain::repository::{
    DashboardRepository, ModerationRepository, PackageRepository, ReferralRepository,
};
use crate::infra::mail::RelayNotifier;
use crate::infra::postgres::PgBackofficeRepository;
use crate::presentation::handlers::{self, BackofficeAppState};
use crate::presentation::middleware::require_admin_context;
use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

/// Create the back office router with PostgreSQL repository and relay notifier
pub fn backoffice_router(
    repo: PgBackofficeRepository,
    notifier: RelayNotifier,
    config: BackofficeConfig,
) -> Router {
    let state = BackofficeAppState {
        repo: Arc::new(repo),
        notifier: Arc::new(notifier),
        config: Arc::new(config),
    };

    Router::new()
        .route(
            "/dashboard",
            get(handlers::dashboard_summary::<PgBackofficeRepository, RelayNotifier>),
        )
        .route(
            "/users/{user_id}/moderation",
            post(handlers::moderate_user::<PgBackofficeRepository, RelayNotifier>),
        )
        .route(
            "/packages",
            get(handlers::list_packages::<PgBackofficeRepository, RelayNotifier>)
                .post(handlers::create_package::<PgBackofficeRepository, RelayNotifier>),
        )
        .route(
            "/referrals/{referral_id}/status",
            post(handlers::set_referral_status::<PgBackofficeRepository, RelayNotifier>),
        )
        .layer(axum::middleware::from_fn(require_admin_context))
        .with_state(state)
}

/// Create a generic back office router for any repository/notifier implementation
pub fn backoffice_router_generic<R, N>(repo: R, notifier: N, config: BackofficeConfig) -> Router
where
    R: ModerationRepository
        + PackageRepository
        + ReferralRepository
        + DashboardRepository
        + Clone
        + Send
        + Sync
        + 'static,
    N: BackofficeNotifier + Clone + Send + Sync + 'static,
{
    let state = BackofficeAppState {
        repo: Arc::new(repo),
        notifier: Arc::new(notifier),
        config: Arc::new(config),
    };

    Router::new()
        .route("/dashboard", get(handlers::dashboard_summary::<R, N>))
        .route(
            "/users/{user_id}/moderation",
            post(handlers::moderate_user::<R, N>),
        )
        .route(
            "/packages",
            get(handlers::list_packages::<R, N>).post(handlers::create_package::<R, N>),
        )
        .route(
            "/referrals/{referral_id}/status",
            post(handlers::set_referral_status::<R, N>),
        )
        .layer(axum::middleware::from_fn(require_admin_context))
        .with_state(state)
}
