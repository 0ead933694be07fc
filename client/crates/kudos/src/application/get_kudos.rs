//! Get Kudos Use Case

use std::sync::Arc;

use kernel::error::api_error::ApiResult;

use crate::domain::entity::kudos::Kudos;
use crate::domain::repository::KudosRepository;

/// Single kudos lookup use case
pub struct GetKudosUseCase<K>
where
    K: KudosRepository,
{
    repo: Arc<K>,
}

impl<K> GetKudosUseCase<K>
where
    K: KudosRepository,
{
    pub fn new(repo: Arc<K>) -> Self {
        Self { repo }
    }

    /// `Ok(None)` when the kudos does not exist
    pub async fn execute(&self, id: &str) -> ApiResult<Option<Kudos>> {
        self.repo.find_by_id(id).await
    }
}
