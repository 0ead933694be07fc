//! Remove User Use Case

use std::sync::Arc;

use kernel::error::api_error::ApiResult;

use crate::domain::repository::UserRepository;

/// User removal use case
pub struct RemoveUserUseCase<U>
where
    U: UserRepository,
{
    repo: Arc<U>,
}

impl<U> RemoveUserUseCase<U>
where
    U: UserRepository,
{
    pub fn new(repo: Arc<U>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, id: &str) -> ApiResult<()> {
        self.repo.delete(id).await
    }
}
