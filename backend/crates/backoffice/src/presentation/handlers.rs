//! HTTP Handlers

use crate::application::config::BackofficeConfig;
use crate::application::create_package::{CreatePackageInput, CreatePackageUseCase};
use crate::application::dashboard_summary::DashboardSummaryUseCase;
use crate::application::list_packages::ListPackagesUseCase;
use crate::application::moderate_user::{ModerateUserInput, ModerateUserUseCase};
use crate::application::set_referral_status::{SetReferralStatusInput, SetReferralStatusUseCase};
use crate::domain::notifier::BackofficeNotifier;
use crate::domain::repository::{
    DashboardRepository, ModerationRepository, PackageRepository, ReferralRepository,
};
use crate::error::BackofficeResult;
use crate::presentation::dto::{
    CreatePackageRequest, CreatePackageResponse, DashboardSummaryResponse, ListPackagesResponse,
    ModerateUserRequest, ModerateUserResponse, PackageDto, SetReferralStatusRequest,
    SetReferralStatusResponse,
};
use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::{Extension, Json};
use platform::client::{ClientFingerprint, extract_client_ip, extract_fingerprint};
use platform::context::RequestContext;
use std::sync::Arc;

/// Shared state for back office handlers
#[derive(Clone)]
pub struct BackofficeAppState<R, N>
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
    pub repo: Arc<R>,
    pub notifier: Arc<N>,
    pub config: Arc<BackofficeConfig>,
}

/// Fingerprint of the calling admin's client for the audit trail
///
/// Audit rows must always be written, so a request without a User-Agent
/// still yields a usable (anonymous) fingerprint instead of an error.
fn client_fingerprint(headers: &HeaderMap) -> ClientFingerprint {
    let ip = extract_client_ip(headers, None);
    extract_fingerprint(headers, ip).unwrap_or_else(|_| ClientFingerprint::anonymous(ip))
}

/// GET /api/admin/dashboard
pub async fn dashboard_summary<R, N>(
    State(state): State<BackofficeAppState<R, N>>,
    Extension(ctx): Extension<RequestContext>,
) -> BackofficeResult<Json<DashboardSummaryResponse>>
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
    tracing::debug!(admin_id = ctx.admin_id, "Loading dashboard summary");

    let use_case = DashboardSummaryUseCase::new(state.repo.clone(), state.config.clone());
    let summary = use_case.execute().await?;

    Ok(Json(DashboardSummaryResponse::from(summary)))
}

/// POST /api/admin/users/{user_id}/moderation
pub async fn moderate_user<R, N>(
    State(state): State<BackofficeAppState<R, N>>,
    Extension(ctx): Extension<RequestContext>,
    Path(user_id): Path<i64>,
    headers: HeaderMap,
    Json(req): Json<ModerateUserRequest>,
) -> BackofficeResult<Json<ModerateUserResponse>>
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
    let client = client_fingerprint(&headers);
    let use_case = ModerateUserUseCase::new(
        state.repo.clone(),
        state.notifier.clone(),
        state.config.clone(),
    );

    let input = ModerateUserInput {
        user_id,
        action: req.action,
    };

    let output = use_case.execute(input, ctx, &client).await?;

    Ok(Json(ModerateUserResponse {
        user_id: output.user_id.get(),
        account_status: output.account_status,
        notification_sent: output.notification_sent,
        message: output.message,
    }))
}

/// GET /api/admin/packages
pub async fn list_packages<R, N>(
    State(state): State<BackofficeAppState<R, N>>,
    Extension(ctx): Extension<RequestContext>,
) -> BackofficeResult<Json<ListPackagesResponse>>
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
    tracing::debug!(admin_id = ctx.admin_id, "Listing mining packages");

    let use_case = ListPackagesUseCase::new(state.repo.clone());
    let output = use_case.execute().await?;

    Ok(Json(ListPackagesResponse {
        items: output.items.into_iter().map(PackageDto::from).collect(),
    }))
}

/// POST /api/admin/packages
pub async fn create_package<R, N>(
    State(state): State<BackofficeAppState<R, N>>,
    Extension(ctx): Extension<RequestContext>,
    Json(req): Json<CreatePackageRequest>,
) -> BackofficeResult<Json<CreatePackageResponse>>
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
    let use_case = CreatePackageUseCase::new(state.repo.clone());

    let input = CreatePackageInput {
        name: req.name,
        price: req.price,
        daily_profit: req.daily_profit,
        daily_return_percentage: req.daily_return_percentage,
        duration_days: req.duration_days,
        is_popular: req.is_popular,
    };

    let output = use_case.execute(input, ctx).await?;

    Ok(Json(CreatePackageResponse {
        package: PackageDto::from(output.package),
        message: output.message,
    }))
}

/// POST /api/admin/referrals/{referral_id}/status
pub async fn set_referral_status<R, N>(
    State(state): State<BackofficeAppState<R, N>>,
    Extension(ctx): Extension<RequestContext>,
    Path(referral_id): Path<i64>,
    headers: HeaderMap,
    Json(req): Json<SetReferralStatusRequest>,
) -> BackofficeResult<Json<SetReferralStatusResponse>>
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
    let client = client_fingerprint(&headers);
    let use_case = SetReferralStatusUseCase::new(state.repo.clone(), state.notifier.clone());

    let input = SetReferralStatusInput {
        referral_id,
        status: req.status,
    };

    let output = use_case.execute(input, ctx, &client).await?;

    Ok(Json(SetReferralStatusResponse {
        referral_id: output.referral_id.get(),
        status: output.status,
        message: output.message,
    }))
}
