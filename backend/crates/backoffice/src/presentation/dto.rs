//! API DTOs (Data Transfer Objects)

use crate::domain::entity::{MiningPackage, UserAccount};
use crate::domain::repository::DashboardSummary;
use crate::domain::value_object::{AccountStatus, ReferralStatus};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Request for POST /api/admin/users/{user_id}/moderation
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModerateUserRequest {
    /// "verify", "suspend" or "reinstate"; anything else is rejected
    pub action: String,
}

/// Response for POST /api/admin/users/{user_id}/moderation
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModerateUserResponse {
    pub user_id: i64,
    pub account_status: AccountStatus,
    pub notification_sent: bool,
    pub message: String,
}

/// Request for POST /api/admin/packages
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePackageRequest {
    pub name: String,
    pub price: Decimal,
    pub daily_profit: Decimal,
    pub daily_return_percentage: Decimal,
    pub duration_days: i32,
    #[serde(default)]
    pub is_popular: bool,
}

/// One mining package in catalog order
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageDto {
    pub package_id: i64,
    pub name: String,
    pub price: Decimal,
    pub daily_profit: Decimal,
    pub daily_return_percentage: Decimal,
    pub duration_days: i32,
    pub total_return: Decimal,
    pub is_popular: bool,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<MiningPackage> for PackageDto {
    fn from(package: MiningPackage) -> Self {
        Self {
            package_id: package.package_id.get(),
            name: package.name,
            price: package.price,
            daily_profit: package.daily_profit,
            daily_return_percentage: package.daily_return_percentage,
            duration_days: package.duration_days,
            total_return: package.total_return,
            is_popular: package.is_popular,
            is_active: package.is_active,
            created_at: package.created_at,
        }
    }
}

/// Response for POST /api/admin/packages
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePackageResponse {
    pub package: PackageDto,
    pub message: String,
}

/// Response for GET /api/admin/packages
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListPackagesResponse {
    pub items: Vec<PackageDto>,
}

/// Request for POST /api/admin/referrals/{referral_id}/status
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetReferralStatusRequest {
    /// "active" or "inactive"; anything else is rejected
    pub status: String,
}

/// Response for POST /api/admin/referrals/{referral_id}/status
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SetReferralStatusResponse {
    pub referral_id: i64,
    pub status: ReferralStatus,
    pub message: String,
}

/// One user in the dashboard's recent signups list
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub user_id: i64,
    pub full_name: String,
    pub email: String,
    pub account_status: AccountStatus,
    pub created_at: DateTime<Utc>,
}

impl From<UserAccount> for UserDto {
    fn from(user: UserAccount) -> Self {
        Self {
            user_id: user.user_id.get(),
            full_name: user.full_name,
            email: user.email,
            account_status: user.account_status,
            created_at: user.created_at,
        }
    }
}

/// Response for GET /api/admin/dashboard
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummaryResponse {
    pub total_users: i64,
    pub total_admins: i64,
    pub total_investment: Decimal,
    pub pending_withdrawals: Decimal,
    pub recent_users: Vec<UserDto>,
}

impl From<DashboardSummary> for DashboardSummaryResponse {
    fn from(summary: DashboardSummary) -> Self {
        Self {
            total_users: summary.total_users,
            total_admins: summary.total_admins,
            total_investment: summary.total_investment,
            pending_withdrawals: summary.pending_withdrawals,
            recent_users: summary.recent_users.into_iter().map(UserDto::from).collect(),
        }
    }
}
