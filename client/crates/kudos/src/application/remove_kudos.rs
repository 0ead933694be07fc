//! Remove Kudos Use Case

use std::sync::Arc;

use kernel::error::api_error::ApiResult;

use crate::domain::repository::KudosRepository;

/// Kudos removal use case
pub struct RemoveKudosUseCase<K>
where
    K: KudosRepository,
{
    repo: Arc<K>,
}

impl<K> RemoveKudosUseCase<K>
where
    K: KudosRepository,
{
    pub fn new(repo: Arc<K>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, id: &str) -> ApiResult<()> {
        self.repo.delete(id).await
    }
}
