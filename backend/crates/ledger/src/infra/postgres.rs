//! PostgreSQL Repository Implementations

use crate::domain::entity::{Balance, EmailNotification, Transaction};
use crate::domain::repository::{
    OutboxRepository, SettlementOutcome, SettlementRepository, TransactionFilter,
    TransactionListing, TransactionRepository,
};
use crate::domain::services;
use crate::domain::value_object::{Amount, Decision, TransactionStatus, TransactionType};
use crate::error::{LedgerError, LedgerResult};
use chrono::{DateTime, Utc};
use kernel::id::{TransactionId, UserId};
use rust_decimal::Decimal;
use sqlx::PgPool;
use std::time::Duration;
use uuid::Uuid;

/// PostgreSQL-backed repository
#[derive(Clone)]
pub struct PgLedgerRepository {
    pool: PgPool,
}

impl PgLedgerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl TransactionRepository for PgLedgerRepository {
    async fn list(
        &self,
        filter: &TransactionFilter,
        limit: i64,
        offset: i64,
    ) -> LedgerResult<Vec<TransactionListing>> {
        let rows = sqlx::query_as::<_, TransactionListingRow>(
            r#"
            SELECT
                t.transaction_id,
                t.user_id,
                t.transaction_type,
                t.amount,
                t.status,
                t.method,
                t.transaction_hash,
                t.created_at,
                t.updated_at,
                u.full_name,
                u.email
            FROM transactions t
            JOIN users u ON u.user_id = t.user_id
            WHERE ($1::SMALLINT IS NULL OR t.transaction_type = $1)
              AND ($2::SMALLINT IS NULL OR t.status = $2)
              AND ($3::BIGINT IS NULL OR t.user_id = $3)
            ORDER BY t.created_at DESC, t.transaction_id DESC
            LIMIT $4 OFFSET $5
            "#,
        )
        .bind(filter.transaction_type.map(|t| t.id()))
        .bind(filter.status.map(|s| s.id()))
        .bind(filter.user_id.map(|u| u.get()))
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter()
            .map(TransactionListingRow::into_listing)
            .collect()
    }

    async fn count(&self, filter: &TransactionFilter) -> LedgerResult<i64> {
        let total = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*)
            FROM transactions t
            WHERE ($1::SMALLINT IS NULL OR t.transaction_type = $1)
              AND ($2::SMALLINT IS NULL OR t.status = $2)
              AND ($3::BIGINT IS NULL OR t.user_id = $3)
            "#,
        )
        .bind(filter.transaction_type.map(|t| t.id()))
        .bind(filter.status.map(|s| s.id()))
        .bind(filter.user_id.map(|u| u.get()))
        .fetch_one(&self.pool)
        .await?;

        Ok(total)
    }
}

impl SettlementRepository for PgLedgerRepository {
    async fn apply(
        &self,
        transaction_id: TransactionId,
        decision: Decision,
    ) -> LedgerResult<SettlementOutcome> {
        let mut tx = self.pool.begin().await?;

        // Lock the transaction row; the owner's contact details come along
        // for the notification. FOR UPDATE OF t leaves the users row free.
        let row = sqlx::query_as::<_, TransactionListingRow>(
            r#"
            SELECT
                t.transaction_id,
                t.user_id,
                t.transaction_type,
                t.amount,
                t.status,
                t.method,
                t.transaction_hash,
                t.created_at,
                t.updated_at,
                u.full_name,
                u.email
            FROM transactions t
            JOIN users u ON u.user_id = t.user_id
            WHERE t.transaction_id = $1
            FOR UPDATE OF t
            "#,
        )
        .bind(transaction_id.get())
        .fetch_optional(&mut *tx)
        .await?;

        let Some(row) = row else {
            return Err(LedgerError::NotFound);
        };
        let TransactionListing {
            transaction: pending,
            user_full_name,
            user_email,
        } = row.into_listing()?;

        if !pending.can_settle() {
            return Err(LedgerError::AlreadySettled(pending.status));
        }

        if decision.is_approve() && pending.transaction_type.is_withdrawal() {
            // Funds pre-check under lock; a user without a balance row
            // reads as 0.00.
            let balance = sqlx::query_as::<_, BalanceRow>(
                r#"
                SELECT user_id, available_balance, total_withdrawn
                FROM user_balances
                WHERE user_id = $1
                FOR UPDATE
                "#,
            )
            .bind(pending.user_id.get())
            .fetch_optional(&mut *tx)
            .await?
            .map(BalanceRow::into_balance)
            .unwrap_or_else(|| Balance::zero(pending.user_id));

            if !balance.can_cover(pending.absolute_amount()) {
                return Err(LedgerError::InsufficientFunds);
            }
        }

        let new_status = decision.settled_status();

        // The status write keeps a pending guard in addition to the row lock.
        let updated_at = sqlx::query_scalar::<_, DateTime<Utc>>(
            r#"
            UPDATE transactions
            SET status = $1, updated_at = NOW()
            WHERE transaction_id = $2 AND status = $3
            RETURNING updated_at
            "#,
        )
        .bind(new_status.id())
        .bind(transaction_id.get())
        .bind(TransactionStatus::Pending.id())
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| {
            LedgerError::Internal("transaction status changed under row lock".to_string())
        })?;

        if decision.is_approve() && pending.transaction_type.moves_balance_on_approval() {
            let withdrawn_delta = if pending.transaction_type.is_withdrawal() {
                pending.absolute_amount()
            } else {
                Amount::zero()
            };

            // Upsert keeps the one-balance-per-user invariant: the first
            // credit creates the row, later settlements accumulate on it.
            sqlx::query(
                r#"
                INSERT INTO user_balances (user_id, available_balance, total_withdrawn)
                VALUES ($1, $2, $3)
                ON CONFLICT (user_id) DO UPDATE SET
                    available_balance = user_balances.available_balance + EXCLUDED.available_balance,
                    total_withdrawn = user_balances.total_withdrawn + EXCLUDED.total_withdrawn
                "#,
            )
            .bind(pending.user_id.get())
            .bind(pending.amount.get())
            .bind(withdrawn_delta.get())
            .execute(&mut *tx)
            .await?;
        }

        let notification_body = Transaction {
            status: new_status,
            updated_at,
            ..pending
        };

        let notification = services::compose_settlement_email(
            &notification_body,
            &user_full_name,
            &user_email,
            decision,
        );

        sqlx::query(
            r#"
            INSERT INTO notification_outbox (
                outbox_id,
                recipient_email,
                recipient_name,
                subject,
                html_body,
                text_body,
                created_at,
                attempts
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(notification.id)
        .bind(&notification.recipient_email)
        .bind(&notification.recipient_name)
        .bind(&notification.subject)
        .bind(&notification.html_body)
        .bind(&notification.text_body)
        .bind(notification.created_at)
        .bind(notification.attempts)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        tracing::info!(
            transaction_id = %transaction_id,
            status = %new_status,
            "Settlement committed"
        );

        Ok(SettlementOutcome {
            transaction: notification_body,
            notification,
        })
    }
}

impl OutboxRepository for PgLedgerRepository {
    async fn find_pending(&self, limit: i64) -> LedgerResult<Vec<EmailNotification>> {
        let rows = sqlx::query_as::<_, OutboxRow>(
            r#"
            SELECT
                outbox_id,
                recipient_email,
                recipient_name,
                subject,
                html_body,
                text_body,
                created_at,
                sent_at,
                attempts
            FROM notification_outbox
            WHERE sent_at IS NULL
            ORDER BY created_at ASC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(OutboxRow::into_notification).collect())
    }

    async fn mark_sent(&self, outbox_id: Uuid) -> LedgerResult<()> {
        sqlx::query(
            r#"
            UPDATE notification_outbox
            SET sent_at = NOW(), attempts = attempts + 1
            WHERE outbox_id = $1 AND sent_at IS NULL
            "#,
        )
        .bind(outbox_id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn record_attempt(&self, outbox_id: Uuid) -> LedgerResult<()> {
        sqlx::query(
            r#"
            UPDATE notification_outbox
            SET attempts = attempts + 1
            WHERE outbox_id = $1
            "#,
        )
        .bind(outbox_id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn purge_delivered(&self, older_than: Duration) -> LedgerResult<u64> {
        let retention = chrono::Duration::from_std(older_than)
            .map_err(|_| LedgerError::Internal("outbox retention overflows".to_string()))?;
        let cutoff = Utc::now() - retention;

        let purged = sqlx::query(
            r#"
            DELETE FROM notification_outbox
            WHERE sent_at IS NOT NULL AND sent_at < $1
            "#,
        )
        .bind(cutoff)
        .execute(&self.pool)
        .await?
        .rows_affected();

        if purged > 0 {
            tracing::info!(purged = purged, "Purged delivered outbox rows");
        }

        Ok(purged)
    }
}

// Internal row types for sqlx mapping
#[derive(sqlx::FromRow)]
struct TransactionListingRow {
    transaction_id: i64,
    user_id: i64,
    transaction_type: i16,
    amount: Decimal,
    status: i16,
    method: Option<String>,
    transaction_hash: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    full_name: String,
    email: String,
}

impl TransactionListingRow {
    fn into_listing(self) -> LedgerResult<TransactionListing> {
        let transaction_type = TransactionType::from_id(self.transaction_type).ok_or_else(|| {
            LedgerError::Internal(format!(
                "unknown transaction type id {}",
                self.transaction_type
            ))
        })?;
        let status = TransactionStatus::from_id(self.status).ok_or_else(|| {
            LedgerError::Internal(format!("unknown transaction status id {}", self.status))
        })?;

        Ok(TransactionListing {
            transaction: Transaction {
                id: TransactionId::from(self.transaction_id),
                user_id: UserId::from(self.user_id),
                transaction_type,
                amount: Amount::new(self.amount),
                status,
                method: self.method,
                transaction_hash: self.transaction_hash,
                created_at: self.created_at,
                updated_at: self.updated_at,
            },
            user_full_name: self.full_name,
            user_email: self.email,
        })
    }
}

#[derive(sqlx::FromRow)]
struct BalanceRow {
    user_id: i64,
    available_balance: Decimal,
    total_withdrawn: Decimal,
}

impl BalanceRow {
    fn into_balance(self) -> Balance {
        Balance {
            user_id: UserId::from(self.user_id),
            available_balance: Amount::new(self.available_balance),
            total_withdrawn: Amount::new(self.total_withdrawn),
        }
    }
}

#[derive(sqlx::FromRow)]
struct OutboxRow {
    outbox_id: Uuid,
    recipient_email: String,
    recipient_name: String,
    subject: String,
    html_body: String,
    text_body: String,
    created_at: DateTime<Utc>,
    sent_at: Option<DateTime<Utc>>,
    attempts: i32,
}

impl OutboxRow {
    fn into_notification(self) -> EmailNotification {
        EmailNotification {
            id: self.outbox_id,
            recipient_email: self.recipient_email,
            recipient_name: self.recipient_name,
            subject: self.subject,
            html_body: self.html_body,
            text_body: self.text_body,
            created_at: self.created_at,
            sent_at: self.sent_at,
            attempts: self.attempts,
        }
    }
}
