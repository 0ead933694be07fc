//! Directory Use Cases
//!
//! Reference-data listings backing selection widgets: teams and categories.

use std::sync::Arc;

use kernel::error::api_error::ApiResult;

use crate::domain::repository::DirectoryRepository;
use crate::domain::value_object::{Category, Team};

/// Team listing use case
pub struct ListTeamsUseCase<D>
where
    D: DirectoryRepository,
{
    repo: Arc<D>,
}

impl<D> ListTeamsUseCase<D>
where
    D: DirectoryRepository,
{
    pub fn new(repo: Arc<D>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self) -> ApiResult<Vec<Team>> {
        self.repo.teams().await
    }
}

/// Category listing use case
pub struct ListCategoriesUseCase<D>
where
    D: DirectoryRepository,
{
    repo: Arc<D>,
}

impl<D> ListCategoriesUseCase<D>
where
    D: DirectoryRepository,
{
    pub fn new(repo: Arc<D>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self) -> ApiResult<Vec<Category>> {
        self.repo.categories().await
    }
}
