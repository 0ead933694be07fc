//! Get User Use Case

use std::sync::Arc;

use kernel::error::api_error::ApiResult;

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;

/// Single user lookup use case
pub struct GetUserUseCase<U>
where
    U: UserRepository,
{
    repo: Arc<U>,
}

impl<U> GetUserUseCase<U>
where
    U: UserRepository,
{
    pub fn new(repo: Arc<U>) -> Self {
        Self { repo }
    }

    /// `Ok(None)` when the user does not exist
    pub async fn execute(&self, id: &str) -> ApiResult<Option<User>> {
        self.repo.find_by_id(id).await
    }
}
