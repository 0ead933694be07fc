//! Update User Use Case

use std::sync::Arc;

use kernel::error::api_error::ApiResult;

use crate::domain::entity::user::User;
use crate::domain::repository::{UserRepository, UserUpdate};

/// User profile update use case
pub struct UpdateUserUseCase<U>
where
    U: UserRepository,
{
    repo: Arc<U>,
}

impl<U> UpdateUserUseCase<U>
where
    U: UserRepository,
{
    pub fn new(repo: Arc<U>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, id: &str, changes: &UserUpdate) -> ApiResult<User> {
        self.repo.update(id, changes).await
    }
}
