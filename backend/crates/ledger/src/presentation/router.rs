//! Ledger Router

use crate::application::config::LedgerConfig;
use crate::domain::notifier::SettlementNotifier;
use crate::domain::repository::{OutboxRepository, SettlementRepository, TransactionRepository};
use crate::infra::mail::RelayNotifier;
use crate::infra::postgres::PgLedgerRepository;
use crate::presentation::handlers::{self, LedgerAppState};
use crate::presentation::middleware::require_admin_context;
use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

/// Create the ledger router with PostgreSQL repository and relay notifier
pub fn ledger_router(
    repo: PgLedgerRepository,
    notifier: RelayNotifier,
    config: LedgerConfig,
) -> Router {
    let state = LedgerAppState {
        repo: Arc::new(repo),
        notifier: Arc::new(notifier),
        config: Arc::new(config),
    };

    Router::new()
        .route(
            "/transactions",
            get(handlers::list_transactions::<PgLedgerRepository, RelayNotifier>),
        )
        .route(
            "/transactions/{transaction_id}/settlement",
            post(handlers::settle_transaction::<PgLedgerRepository, RelayNotifier>),
        )
        .layer(axum::middleware::from_fn(require_admin_context))
        .with_state(state)
}

/// Create a generic ledger router for any repository/notifier implementation
pub fn ledger_router_generic<R, N>(repo: R, notifier: N, config: LedgerConfig) -> Router
where
    R: TransactionRepository
        + SettlementRepository
        + OutboxRepository
        + Clone
        + Send
        + Sync
        + 'static,
    N: SettlementNotifier + Clone + Send + Sync + 'static,
{
    let state = LedgerAppState {
        repo: Arc::new(repo),
        notifier: Arc::new(notifier),
        config: Arc::new(config),
    };

    Router::new()
        .route("/transactions", get(handlers::list_transactions::<R, N>))
        .route(
            "/transactions/{transaction_id}/settlement",
            post(handlers::settle_transaction::<R, N>),
        )
        .layer(axum::middleware::from_fn(require_admin_context))
        .with_state(state)
}
