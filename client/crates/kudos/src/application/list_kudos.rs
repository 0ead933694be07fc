//! List Kudos Use Case

use std::sync::Arc;

use kernel::error::api_error::ApiResult;
use kernel::page::Page;

use crate::domain::entity::kudos::Kudos;
use crate::domain::repository::{KudosFilter, KudosRepository};

/// Paginated kudos listing use case
pub struct ListKudosUseCase<K>
where
    K: KudosRepository,
{
    repo: Arc<K>,
}

impl<K> ListKudosUseCase<K>
where
    K: KudosRepository,
{
    pub fn new(repo: Arc<K>) -> Self {
        Self { repo }
    }

    pub async fn execute(
        &self,
        page: u32,
        limit: u32,
        filter: &KudosFilter,
    ) -> ApiResult<Page<Kudos>> {
        self.repo.list(page, limit, filter).await
    }
}
