//! Analytics Summary Use Case

use std::sync::Arc;

use kernel::error::api_error::ApiResult;

use crate::domain::entity::analytics::{AnalyticsRange, AnalyticsSummary};
use crate::domain::repository::AnalyticsRepository;

/// Recognition activity summary use case
pub struct AnalyticsSummaryUseCase<R>
where
    R: AnalyticsRepository,
{
    repo: Arc<R>,
}

impl<R> AnalyticsSummaryUseCase<R>
where
    R: AnalyticsRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, range: AnalyticsRange) -> ApiResult<AnalyticsSummary> {
        self.repo.summary(range).await
    }
}
