//! List Transactions Use Case

use crate::application::config::LedgerConfig;
use crate::domain::repository::{TransactionFilter, TransactionListing, TransactionRepository};
use crate::domain::value_object::{TransactionStatus, TransactionType};
use crate::error::{LedgerError, LedgerResult};
use kernel::id::UserId;
use std::sync::Arc;

/// Input DTO for list transactions
///
/// Filter tokens arrive raw and are validated into the closed enums here;
/// an unknown token is an error, not an ignored filter.
#[derive(Debug, Clone, Default)]
pub struct ListTransactionsInput {
    pub transaction_type: Option<String>,
    pub status: Option<String>,
    pub user_id: Option<i64>,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

/// Output DTO for list transactions
#[derive(Debug, Clone)]
pub struct ListTransactionsOutput {
    pub items: Vec<TransactionListing>,
    pub total: i64,
    pub page: u32,
    pub per_page: u32,
}

/// List Transactions Use Case
pub struct ListTransactionsUseCase<R>
where
    R: TransactionRepository,
{
    repo: Arc<R>,
    config: Arc<LedgerConfig>,
}

impl<R> ListTransactionsUseCase<R>
where
    R: TransactionRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<LedgerConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(&self, input: ListTransactionsInput) -> LedgerResult<ListTransactionsOutput> {
        let transaction_type = match input.transaction_type.as_deref() {
            Some(token) => Some(
                TransactionType::from_code(token)
                    .ok_or_else(|| LedgerError::InvalidFilter(token.to_string()))?,
            ),
            None => None,
        };

        let status = match input.status.as_deref() {
            Some(token) => Some(
                TransactionStatus::from_code(token)
                    .ok_or_else(|| LedgerError::InvalidFilter(token.to_string()))?,
            ),
            None => None,
        };

        let filter = TransactionFilter {
            transaction_type,
            status,
            user_id: input.user_id.map(UserId::from),
        };

        let page = input.page.unwrap_or(1).max(1);
        let per_page = input
            .per_page
            .unwrap_or(self.config.default_page_size)
            .clamp(1, self.config.max_page_size);
        let offset = i64::from(page - 1) * i64::from(per_page);

        let items = self.repo.list(&filter, i64::from(per_page), offset).await?;
        let total = self.repo.count(&filter).await?;

        Ok(ListTransactionsOutput {
            items,
            total,
            page,
            per_page,
        })
    }
}
