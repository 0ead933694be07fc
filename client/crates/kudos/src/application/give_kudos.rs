//! Give Kudos Use Case

use std::sync::Arc;

use kernel::error::api_error::ApiResult;

use crate::domain::entity::kudos::Kudos;
use crate::domain::repository::{KudosDraft, KudosRepository};

/// Kudos creation use case
pub struct GiveKudosUseCase<K>
where
    K: KudosRepository,
{
    repo: Arc<K>,
}

impl<K> GiveKudosUseCase<K>
where
    K: KudosRepository,
{
    pub fn new(repo: Arc<K>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, draft: &KudosDraft) -> ApiResult<Kudos> {
        self.repo.create(draft).await
    }
}
