//! HTTP Handlers

use crate::application::config::LedgerConfig;
use crate::application::list_transactions::{ListTransactionsInput, ListTransactionsUseCase};
use crate::application::settle_transaction::{SettleTransactionInput, SettleTransactionUseCase};
use crate::domain::notifier::SettlementNotifier;
use crate::domain::repository::{OutboxRepository, SettlementRepository, TransactionRepository};
use crate::error::LedgerResult;
use crate::presentation::dto::{
    ListTransactionsQuery, ListTransactionsResponse, SettleRequest, SettleResponse, TransactionDto,
};
use axum::{Extension, Json};
use axum::extract::{Path, Query, State};
use platform::context::RequestContext;
use std::sync::Arc;

/// Shared state for ledger handlers
#[derive(Clone)]
pub struct LedgerAppState<R, N>
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
    pub repo: Arc<R>,
    pub notifier: Arc<N>,
    pub config: Arc<LedgerConfig>,
}

/// POST /api/ledger/transactions/{transaction_id}/settlement
pub async fn settle_transaction<R, N>(
    State(state): State<LedgerAppState<R, N>>,
    Extension(ctx): Extension<RequestContext>,
    Path(transaction_id): Path<i64>,
    Json(req): Json<SettleRequest>,
) -> LedgerResult<Json<SettleResponse>>
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
    let use_case = SettleTransactionUseCase::new(state.repo.clone(), state.notifier.clone());

    let input = SettleTransactionInput {
        transaction_id,
        decision: req.decision,
    };

    let output = use_case.execute(input, ctx).await?;

    Ok(Json(SettleResponse {
        transaction_id: output.transaction_id.get(),
        status: output.status,
        notification_sent: output.notification_sent,
        message: output.message,
    }))
}

/// GET /api/ledger/transactions
pub async fn list_transactions<R, N>(
    State(state): State<LedgerAppState<R, N>>,
    Extension(ctx): Extension<RequestContext>,
    Query(query): Query<ListTransactionsQuery>,
) -> LedgerResult<Json<ListTransactionsResponse>>
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
    tracing::debug!(admin_id = ctx.admin_id, "Listing transactions");

    let use_case = ListTransactionsUseCase::new(state.repo.clone(), state.config.clone());

    let input = ListTransactionsInput {
        transaction_type: query.transaction_type,
        status: query.status,
        user_id: query.user_id,
        page: query.page,
        per_page: query.per_page,
    };

    let output = use_case.execute(input).await?;

    Ok(Json(ListTransactionsResponse {
        items: output.items.into_iter().map(TransactionDto::from).collect(),
        total: output.total,
        page: output.page,
        per_page: output.per_page,
    }))
}
