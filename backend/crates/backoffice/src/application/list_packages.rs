//! List Packages Use Case

use crate::domain::entity::MiningPackage;
use crate::domain::repository::PackageRepository;
use crate::error::BackofficeResult;
use std::sync::Arc;

/// Output DTO for list packages
#[derive(Debug, Clone)]
pub struct ListPackagesOutput {
    pub items: Vec<MiningPackage>,
}

/// List Packages Use Case
pub struct ListPackagesUseCase<R>
where
    R: PackageRepository,
{
    repo: Arc<R>,
}

impl<R> ListPackagesUseCase<R>
where
    R: PackageRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self) -> BackofficeResult<ListPackagesOutput> {
        let items = self.repo.list_active_packages().await?;
        Ok(ListPackagesOutput { items })
    }
}
