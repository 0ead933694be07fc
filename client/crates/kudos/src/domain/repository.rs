//! Repository Traits
//!
//! Interfaces translating domain operations into backend calls.
//! Implementation is in the infrastructure layer. All inputs are
//! domain-shaped; wire formats never cross this boundary.

use kernel::error::api_error::ApiResult;
use kernel::page::Page;
use serde::Serialize;

use crate::domain::entity::{
    analytics::{AnalyticsRange, AnalyticsSummary},
    kudos::Kudos,
    session::LoginData,
    user::User,
};
use crate::domain::value_object::{Category, Team};

/// New-account registration input
#[derive(Debug, Clone, Serialize)]
pub struct RegisterInput {
    pub email: String,
    pub name: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_id: Option<String>,
}

/// Optional filters for user listings
#[derive(Debug, Clone, Default)]
pub struct UserFilter {
    pub search: Option<String>,
    pub approved: Option<bool>,
    pub team_id: Option<String>,
}

/// Partial update to a user profile; `None` fields are left untouched
#[derive(Debug, Clone, Default, Serialize)]
pub struct UserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_id: Option<String>,
}

/// Optional filters for kudos listings
#[derive(Debug, Clone, Default)]
pub struct KudosFilter {
    pub recipient_id: Option<String>,
    pub category_id: Option<String>,
    pub team_id: Option<String>,
}

/// A kudos message to be created
#[derive(Debug, Clone, Serialize)]
pub struct KudosDraft {
    pub message: String,
    pub recipient_ids: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    /// Send without revealing the sender
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub anonymous: bool,
}

/// Authentication repository trait
#[trait_variant::make(AuthRepository: Send)]
pub trait LocalAuthRepository {
    /// Exchange credentials for a bearer token and profile
    async fn login(&self, email: &str, password: &str) -> ApiResult<LoginData>;

    /// Invalidate the current session on the backend
    async fn logout(&self) -> ApiResult<()>;

    /// Create a new account (lands in the approval queue)
    async fn register(&self, input: &RegisterInput) -> ApiResult<User>;

    /// Request a password-reset email
    async fn request_password_reset(&self, email: &str) -> ApiResult<()>;

    /// Fetch the profile the current token belongs to
    async fn current_user(&self) -> ApiResult<User>;
}

/// User management repository trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// List users, paginated
    async fn list(&self, page: u32, limit: u32, filter: &UserFilter) -> ApiResult<Page<User>>;

    /// Find a user by ID; `None` when absent
    async fn find_by_id(&self, id: &str) -> ApiResult<Option<User>>;

    /// Apply a partial update
    async fn update(&self, id: &str, changes: &UserUpdate) -> ApiResult<User>;

    /// Approve a pending account
    async fn approve(&self, id: &str) -> ApiResult<User>;

    /// Remove a user
    async fn delete(&self, id: &str) -> ApiResult<()>;
}

/// Kudos repository trait
#[trait_variant::make(KudosRepository: Send)]
pub trait LocalKudosRepository {
    /// List kudos, paginated
    async fn list(&self, page: u32, limit: u32, filter: &KudosFilter) -> ApiResult<Page<Kudos>>;

    /// Find a kudos by ID; `None` when absent
    async fn find_by_id(&self, id: &str) -> ApiResult<Option<Kudos>>;

    /// Create a new kudos message
    async fn create(&self, draft: &KudosDraft) -> ApiResult<Kudos>;

    /// Remove a kudos message
    async fn delete(&self, id: &str) -> ApiResult<()>;
}

/// Reference-data repository trait (teams and categories)
#[trait_variant::make(DirectoryRepository: Send)]
pub trait LocalDirectoryRepository {
    async fn teams(&self) -> ApiResult<Vec<Team>>;

    async fn categories(&self) -> ApiResult<Vec<Category>>;
}

/// Analytics repository trait
#[trait_variant::make(AnalyticsRepository: Send)]
pub trait LocalAnalyticsRepository {
    /// Recognition activity summary for one reporting window
    async fn summary(&self, range: AnalyticsRange) -> ApiResult<AnalyticsSummary>;
}
