//! PostgreSQL Repository Implementations

use crate::domain::entity::{AuditEntry, MiningPackage, NewPackage, Referral, UserAccount};
use crate::domain::repository::{
    DashboardRepository, DashboardSummary, ModerationRepository, PackageRepository,
    ReferralRepository, ReferralUpdate,
};
use crate::domain::services;
use crate::domain::value_object::{AccountStatus, ModerationAction, ReferralStatus};
use crate::error::{BackofficeError, BackofficeResult};
use chrono::{DateTime, Utc};
use kernel::id::{PackageId, ReferralId, UserId};
use ledger::domain::value_object::{TransactionStatus, TransactionType};
use rust_decimal::Decimal;
use sqlx::PgPool;

/// PostgreSQL-backed repository
#[derive(Clone)]
pub struct PgBackofficeRepository {
    pool: PgPool,
}

impl PgBackofficeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl ModerationRepository for PgBackofficeRepository {
    async fn moderate(
        &self,
        user_id: UserId,
        action: ModerationAction,
        audit: &AuditEntry,
    ) -> BackofficeResult<UserAccount> {
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query_as::<_, UserAccountRow>(
            r#"
            SELECT user_id, full_name, email, account_status, created_at
            FROM users
            WHERE user_id = $1
            FOR UPDATE
            "#,
        )
        .bind(user_id.get())
        .fetch_optional(&mut *tx)
        .await?;

        let Some(row) = row else {
            return Err(BackofficeError::UserNotFound);
        };
        let account = row.into_account()?;

        if let Some(conflict) = services::moderation_conflict(action, account.account_status) {
            return Err(conflict);
        }

        let new_status = action.target_status();

        sqlx::query(
            r#"
            UPDATE users
            SET account_status = $1
            WHERE user_id = $2
            "#,
        )
        .bind(new_status.id())
        .bind(user_id.get())
        .execute(&mut *tx)
        .await?;

        insert_activity(&mut tx, audit).await?;

        tx.commit().await?;

        tracing::info!(
            user_id = %user_id,
            account_status = %new_status,
            "Moderation committed"
        );

        Ok(UserAccount {
            account_status: new_status,
            ..account
        })
    }
}

impl PackageRepository for PgBackofficeRepository {
    async fn insert_package(&self, package: &NewPackage) -> BackofficeResult<MiningPackage> {
        let row = sqlx::query_as::<_, InsertedPackageRow>(
            r#"
            INSERT INTO mining_packages (
                name,
                price,
                daily_profit,
                daily_return_percentage,
                duration_days,
                total_return,
                is_popular,
                is_active
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, TRUE)
            RETURNING package_id, created_at
            "#,
        )
        .bind(&package.name)
        .bind(package.price)
        .bind(package.daily_profit)
        .bind(package.daily_return_percentage)
        .bind(package.duration_days)
        .bind(package.total_return)
        .bind(package.is_popular)
        .fetch_one(&self.pool)
        .await?;

        Ok(MiningPackage {
            package_id: PackageId::from(row.package_id),
            name: package.name.clone(),
            price: package.price,
            daily_profit: package.daily_profit,
            daily_return_percentage: package.daily_return_percentage,
            duration_days: package.duration_days,
            total_return: package.total_return,
            is_popular: package.is_popular,
            is_active: true,
            created_at: row.created_at,
        })
    }

    async fn list_active_packages(&self) -> BackofficeResult<Vec<MiningPackage>> {
        let rows = sqlx::query_as::<_, PackageRow>(
            r#"
            SELECT
                package_id,
                name,
                price,
                daily_profit,
                daily_return_percentage,
                duration_days,
                total_return,
                is_popular,
                is_active,
                created_at
            FROM mining_packages
            WHERE is_active
            ORDER BY price ASC, package_id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(PackageRow::into_package).collect())
    }
}

impl ReferralRepository for PgBackofficeRepository {
    async fn set_referral_status(
        &self,
        referral_id: ReferralId,
        status: ReferralStatus,
        audit: &AuditEntry,
    ) -> BackofficeResult<ReferralUpdate> {
        let mut tx = self.pool.begin().await?;

        // Both parties' contact details come along for the referrer email.
        // FOR UPDATE OF r leaves the users rows free.
        let row = sqlx::query_as::<_, ReferralJoinRow>(
            r#"
            SELECT
                r.referral_id,
                r.referrer_id,
                r.referred_user_id,
                r.commission_earned,
                r.status,
                r.created_at,
                r.updated_at,
                referrer.full_name AS referrer_name,
                referrer.email AS referrer_email,
                referred.full_name AS referred_name
            FROM referrals r
            JOIN users referrer ON referrer.user_id = r.referrer_id
            JOIN users referred ON referred.user_id = r.referred_user_id
            WHERE r.referral_id = $1
            FOR UPDATE OF r
            "#,
        )
        .bind(referral_id.get())
        .fetch_optional(&mut *tx)
        .await?;

        let Some(row) = row else {
            return Err(BackofficeError::ReferralNotFound);
        };
        let mut update = row.into_update()?;

        // Setting the current status again is allowed; the timestamp still
        // refreshes and the action is still audited.
        let updated_at = sqlx::query_scalar::<_, DateTime<Utc>>(
            r#"
            UPDATE referrals
            SET status = $1, updated_at = NOW()
            WHERE referral_id = $2
            RETURNING updated_at
            "#,
        )
        .bind(status.id())
        .bind(referral_id.get())
        .fetch_one(&mut *tx)
        .await?;

        insert_activity(&mut tx, audit).await?;

        tx.commit().await?;

        tracing::info!(
            referral_id = %referral_id,
            status = %status,
            "Referral update committed"
        );

        update.referral.status = status;
        update.referral.updated_at = updated_at;
        Ok(update)
    }
}

impl DashboardRepository for PgBackofficeRepository {
    async fn dashboard_summary(&self, recent_users: i64) -> BackofficeResult<DashboardSummary> {
        let total_users = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await?;

        let total_admins =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM admins WHERE is_active")
                .fetch_one(&self.pool)
                .await?;

        let total_investment = sqlx::query_scalar::<_, Decimal>(
            r#"
            SELECT COALESCE(SUM(p.price), 0)
            FROM user_miners m
            JOIN mining_packages p ON p.package_id = m.package_id
            "#,
        )
        .fetch_one(&self.pool)
        .await?;

        let pending_withdrawals = sqlx::query_scalar::<_, Decimal>(
            r#"
            SELECT COALESCE(ABS(SUM(amount)), 0)
            FROM transactions
            WHERE transaction_type = $1 AND status = $2
            "#,
        )
        .bind(TransactionType::Withdrawal.id())
        .bind(TransactionStatus::Pending.id())
        .fetch_one(&self.pool)
        .await?;

        let recent = sqlx::query_as::<_, UserAccountRow>(
            r#"
            SELECT user_id, full_name, email, account_status, created_at
            FROM users
            ORDER BY created_at DESC, user_id DESC
            LIMIT $1
            "#,
        )
        .bind(recent_users)
        .fetch_all(&self.pool)
        .await?;

        Ok(DashboardSummary {
            total_users,
            total_admins,
            total_investment,
            pending_withdrawals,
            recent_users: recent
                .into_iter()
                .map(UserAccountRow::into_account)
                .collect::<BackofficeResult<Vec<_>>>()?,
        })
    }
}

/// Insert one audit row inside the caller's transaction
async fn insert_activity(
    tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
    audit: &AuditEntry,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO admin_activity (
            admin_id,
            action,
            device_class,
            browser,
            ip_address,
            correlation_id
        ) VALUES ($1, $2, $3, $4, $5, $6)
        "#,
    )
    .bind(audit.admin_id)
    .bind(&audit.action)
    .bind(audit.device_class.id())
    .bind(&audit.browser)
    .bind(&audit.ip_address)
    .bind(audit.correlation_id)
    .execute(&mut **tx)
    .await?;

    Ok(())
}

// Internal row types for sqlx mapping
#[derive(sqlx::FromRow)]
struct UserAccountRow {
    user_id: i64,
    full_name: String,
    email: String,
    account_status: i16,
    created_at: DateTime<Utc>,
}

impl UserAccountRow {
    fn into_account(self) -> BackofficeResult<UserAccount> {
        let account_status = AccountStatus::from_id(self.account_status).ok_or_else(|| {
            BackofficeError::Internal(format!("unknown account status id {}", self.account_status))
        })?;

        Ok(UserAccount {
            user_id: UserId::from(self.user_id),
            full_name: self.full_name,
            email: self.email,
            account_status,
            created_at: self.created_at,
        })
    }
}

#[derive(sqlx::FromRow)]
struct InsertedPackageRow {
    package_id: i64,
    created_at: DateTime<Utc>,
}

#[derive(sqlx::FromRow)]
struct PackageRow {
    package_id: i64,
    name: String,
    price: Decimal,
    daily_profit: Decimal,
    daily_return_percentage: Decimal,
    duration_days: i32,
    total_return: Decimal,
    is_popular: bool,
    is_active: bool,
    created_at: DateTime<Utc>,
}

impl PackageRow {
    fn into_package(self) -> MiningPackage {
        MiningPackage {
            package_id: PackageId::from(self.package_id),
            name: self.name,
            price: self.price,
            daily_profit: self.daily_profit,
            daily_return_percentage: self.daily_return_percentage,
            duration_days: self.duration_days,
            total_return: self.total_return,
            is_popular: self.is_popular,
            is_active: self.is_active,
            created_at: self.created_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct ReferralJoinRow {
    referral_id: i64,
    referrer_id: i64,
    referred_user_id: i64,
    commission_earned: Decimal,
    status: i16,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    referrer_name: String,
    referrer_email: String,
    referred_name: String,
}

impl ReferralJoinRow {
    fn into_update(self) -> BackofficeResult<ReferralUpdate> {
        let status = ReferralStatus::from_id(self.status).ok_or_else(|| {
            BackofficeError::Internal(format!("unknown referral status id {}", self.status))
        })?;

        Ok(ReferralUpdate {
            referral: Referral {
                referral_id: ReferralId::from(self.referral_id),
                referrer_id: UserId::from(self.referrer_id),
                referred_user_id: UserId::from(self.referred_user_id),
                commission_earned: self.commission_earned,
                status,
                created_at: self.created_at,
                updated_at: self.updated_at,
            },
            referrer_name: self.referrer_name,
            referrer_email: self.referrer_email,
            referred_name: self.referred_name,
        })
    }
}
