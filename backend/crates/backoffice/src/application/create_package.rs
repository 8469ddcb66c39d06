//! Create Package Use Case

use crate::domain::entity::{MiningPackage, PackageDraft};
use crate::domain::repository::PackageRepository;
use crate::domain::services;
use crate::error::{BackofficeError, BackofficeResult};
use platform::context::RequestContext;
use rust_decimal::Decimal;
use std::sync::Arc;

/// Input DTO for create package
#[derive(Debug, Clone)]
pub struct CreatePackageInput {
    pub name: String,
    pub price: Decimal,
    pub daily_profit: Decimal,
    pub daily_return_percentage: Decimal,
    pub duration_days: i32,
    pub is_popular: bool,
}

/// Output DTO for create package
#[derive(Debug, Clone)]
pub struct CreatePackageOutput {
    pub package: MiningPackage,
    pub message: String,
}

/// Create Package Use Case
pub struct CreatePackageUseCase<R>
where
    R: PackageRepository,
{
    repo: Arc<R>,
}

impl<R> CreatePackageUseCase<R>
where
    R: PackageRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(
        &self,
        input: CreatePackageInput,
        ctx: RequestContext,
    ) -> BackofficeResult<CreatePackageOutput> {
        let draft = PackageDraft {
            name: input.name,
            price: input.price,
            daily_profit: input.daily_profit,
            daily_return_percentage: input.daily_return_percentage,
            duration_days: input.duration_days,
            is_popular: input.is_popular,
        };

        let new_package = draft.build().ok_or(BackofficeError::PackageValidation)?;
        let package = self.repo.insert_package(&new_package).await?;

        tracing::info!(
            package_id = %package.package_id,
            name = %package.name,
            total_return = %package.total_return,
            admin_id = ctx.admin_id,
            correlation_id = %ctx.correlation_id,
            "Mining package created"
        );

        Ok(CreatePackageOutput {
            package,
            message: services::package_added_message().to_string(),
        })
    }
}
