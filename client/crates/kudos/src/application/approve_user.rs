//! Approve User Use Case

use std::sync::Arc;

use kernel::error::api_error::ApiResult;

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;

/// Approval-queue use case: admit a pending account
pub struct ApproveUserUseCase<U>
where
    U: UserRepository,
{
    repo: Arc<U>,
}

impl<U> ApproveUserUseCase<U>
where
    U: UserRepository,
{
    pub fn new(repo: Arc<U>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, id: &str) -> ApiResult<User> {
        self.repo.approve(id).await
    }
}
