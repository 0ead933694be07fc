//! List Users Use Case

use std::sync::Arc;

use kernel::error::api_error::ApiResult;
use kernel::page::Page;

use crate::domain::entity::user::User;
use crate::domain::repository::{UserFilter, UserRepository};

/// Paginated user listing use case
pub struct ListUsersUseCase<U>
where
    U: UserRepository,
{
    repo: Arc<U>,
}

impl<U> ListUsersUseCase<U>
where
    U: UserRepository,
{
    pub fn new(repo: Arc<U>) -> Self {
        Self { repo }
    }

    pub async fn execute(
        &self,
        page: u32,
        limit: u32,
        filter: &UserFilter,
    ) -> ApiResult<Page<User>> {
        self.repo.list(page, limit, filter).await
    }
}
