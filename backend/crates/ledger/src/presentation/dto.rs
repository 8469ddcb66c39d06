//! API DTOs (Data Transfer Objects)

use crate::domain::repository::TransactionListing;
use crate::domain::value_object::{Amount, TransactionStatus, TransactionType};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Request for POST /api/ledger/transactions/{transaction_id}/settlement
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettleRequest {
    /// "approve" or "reject"; anything else is rejected
    pub decision: String,
}

/// Response for POST /api/ledger/transactions/{transaction_id}/settlement
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SettleResponse {
    pub transaction_id: i64,
    pub status: TransactionStatus,
    pub notification_sent: bool,
    pub message: String,
}

/// Query parameters for GET /api/ledger/transactions
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListTransactionsQuery {
    #[serde(default)]
    pub transaction_type: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub per_page: Option<u32>,
}

/// One listed transaction with owner contact details
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionDto {
    pub transaction_id: i64,
    pub user_id: i64,
    pub user_full_name: String,
    pub user_email: String,
    pub transaction_type: TransactionType,
    pub amount: Amount,
    pub status: TransactionStatus,
    pub method: Option<String>,
    pub transaction_hash: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<TransactionListing> for TransactionDto {
    fn from(listing: TransactionListing) -> Self {
        let t = listing.transaction;
        Self {
            transaction_id: t.id.get(),
            user_id: t.user_id.get(),
            user_full_name: listing.user_full_name,
            user_email: listing.user_email,
            transaction_type: t.transaction_type,
            amount: t.amount,
            status: t.status,
            method: t.method,
            transaction_hash: t.transaction_hash,
            created_at: t.created_at,
            updated_at: t.updated_at,
        }
    }
}

/// Response for GET /api/ledger/transactions
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListTransactionsResponse {
    pub items: Vec<TransactionDto>,
    pub total: i64,
    pub page: u32,
    pub per_page: u32,
}
