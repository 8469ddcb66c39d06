//! Dashboard Summary Use Case

use crate::application::config::BackofficeConfig;
use crate::domain::repository::{DashboardRepository, DashboardSummary};
use crate::error::BackofficeResult;
use std::sync::Arc;

/// Dashboard Summary Use Case
pub struct DashboardSummaryUseCase<R>
where
    R: DashboardRepository,
{
    repo: Arc<R>,
    config: Arc<BackofficeConfig>,
}

impl<R> DashboardSummaryUseCase<R>
where
    R: DashboardRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<BackofficeConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(&self) -> BackofficeResult<DashboardSummary> {
        self.repo
            .dashboard_summary(self.config.dashboard_recent_users)
            .await
    }
}
