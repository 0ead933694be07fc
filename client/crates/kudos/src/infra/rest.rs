//! REST Repository
//!
//! One struct implements every domain repository trait over the shared
//! [`ApiClient`]. Paths come from the configured [`PathTable`]; sub-resource
//! segments (`login`, `me`, `approve`, ...) are appended here. Responses
//! arrive as wire DTOs and leave as domain entities.

use std::sync::Arc;

use kernel::error::api_error::{ApiError, ApiResult};
use kernel::page::Page;
use platform::client::ApiClient;
use serde_json::{Value, json};

use crate::application::config::{ApiConfig, Resource};
use crate::domain::entity::{
    analytics::{AnalyticsRange, AnalyticsSummary},
    kudos::Kudos,
    session::LoginData,
    user::User,
};
use crate::domain::repository::{
    AnalyticsRepository, AuthRepository, DirectoryRepository, KudosDraft, KudosFilter,
    KudosRepository, RegisterInput, UserFilter, UserRepository, UserUpdate,
};
use crate::domain::value_object::{Category, Team};
use crate::infra::dto::{
    AnalyticsSummaryDto, CategoryDto, Envelope, KudosDto, LoginPayloadDto, TeamDto, UserDto,
    resolve_page_meta,
};

/// Tracing target for repository operations
pub const TRACING_TARGET: &str = "kudos::rest";

/// Map a not-found rejection to `Ok(None)`; everything else propagates
fn none_when_absent<T>(result: ApiResult<T>) -> ApiResult<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(err) if err.is_not_found() => Ok(None),
        Err(err) => Err(err),
    }
}

/// REST-backed implementation of every domain repository trait
#[derive(Debug, Clone)]
pub struct RestRepository {
    client: Arc<ApiClient>,
    config: Arc<ApiConfig>,
}

impl RestRepository {
    pub fn new(client: Arc<ApiClient>, config: Arc<ApiConfig>) -> Self {
        Self { client, config }
    }

    fn base(&self, resource: Resource) -> &str {
        self.config.paths.base(resource)
    }

    fn item(&self, resource: Resource, id: &str) -> String {
        self.config.paths.item(resource, id)
    }
}

impl AuthRepository for RestRepository {
    async fn login(&self, email: &str, password: &str) -> ApiResult<LoginData> {
        let path = format!("{}/login", self.base(Resource::Auth));
        let body = json!({ "email": email, "password": password });
        let envelope: Envelope<LoginPayloadDto> = self.client.post(&path, &body).await?;

        let payload = envelope.data;
        let user = payload.user.map(UserDto::into_user).ok_or_else(|| {
            ApiError::invalid_response("Login response did not include a user profile")
        })?;

        tracing::info!(
            target: TRACING_TARGET,
            user_id = %user.id,
            "Login accepted by backend"
        );

        Ok(LoginData {
            token: payload.token,
            user,
        })
    }

    async fn logout(&self) -> ApiResult<()> {
        let path = format!("{}/logout", self.base(Resource::Auth));
        let _: Value = self.client.post(&path, &json!({})).await?;
        Ok(())
    }

    async fn register(&self, input: &RegisterInput) -> ApiResult<User> {
        let path = format!("{}/register", self.base(Resource::Auth));
        let envelope: Envelope<UserDto> = self.client.post(&path, input).await?;
        Ok(envelope.data.into_user())
    }

    async fn request_password_reset(&self, email: &str) -> ApiResult<()> {
        let path = format!("{}/password-reset", self.base(Resource::Auth));
        let _: Value = self.client.post(&path, &json!({ "email": email })).await?;
        Ok(())
    }

    async fn current_user(&self) -> ApiResult<User> {
        let path = format!("{}/me", self.base(Resource::Auth));
        let envelope: Envelope<UserDto> = self.client.get(&path, &[]).await?;
        Ok(envelope.data.into_user())
    }
}

impl UserRepository for RestRepository {
    async fn list(&self, page: u32, limit: u32, filter: &UserFilter) -> ApiResult<Page<User>> {
        let query = [
            ("page", Some(page.to_string())),
            ("limit", Some(limit.to_string())),
            ("search", filter.search.clone()),
            ("approved", filter.approved.map(|v| v.to_string())),
            ("team_id", filter.team_id.clone()),
        ];
        let envelope: Envelope<Vec<UserDto>> =
            self.client.get(self.base(Resource::Users), &query).await?;

        let count = envelope.data.len();
        let meta = resolve_page_meta(envelope.pagination, page, limit, count);
        let users = envelope.data.into_iter().map(UserDto::into_user).collect();
        Ok(Page::new(users, meta))
    }

    async fn find_by_id(&self, id: &str) -> ApiResult<Option<User>> {
        let result: ApiResult<Envelope<UserDto>> =
            self.client.get(&self.item(Resource::Users, id), &[]).await;
        Ok(none_when_absent(result)?.map(|envelope| envelope.data.into_user()))
    }

    async fn update(&self, id: &str, changes: &UserUpdate) -> ApiResult<User> {
        let envelope: Envelope<UserDto> = self
            .client
            .patch(&self.item(Resource::Users, id), changes)
            .await?;
        Ok(envelope.data.into_user())
    }

    async fn approve(&self, id: &str) -> ApiResult<User> {
        let path = format!("{}/approve", self.item(Resource::Users, id));
        let envelope: Envelope<UserDto> = self.client.post(&path, &json!({})).await?;

        tracing::info!(target: TRACING_TARGET, user_id = id, "User approved");
        Ok(envelope.data.into_user())
    }

    async fn delete(&self, id: &str) -> ApiResult<()> {
        let _: Value = self.client.delete(&self.item(Resource::Users, id)).await?;
        Ok(())
    }
}

impl KudosRepository for RestRepository {
    async fn list(&self, page: u32, limit: u32, filter: &KudosFilter) -> ApiResult<Page<Kudos>> {
        let query = [
            ("page", Some(page.to_string())),
            ("limit", Some(limit.to_string())),
            ("recipient_id", filter.recipient_id.clone()),
            ("category_id", filter.category_id.clone()),
            ("team_id", filter.team_id.clone()),
        ];
        let envelope: Envelope<Vec<KudosDto>> =
            self.client.get(self.base(Resource::Kudos), &query).await?;

        let count = envelope.data.len();
        let meta = resolve_page_meta(envelope.pagination, page, limit, count);
        let kudos = envelope.data.into_iter().map(KudosDto::into_kudos).collect();
        Ok(Page::new(kudos, meta))
    }

    async fn find_by_id(&self, id: &str) -> ApiResult<Option<Kudos>> {
        let result: ApiResult<Envelope<KudosDto>> =
            self.client.get(&self.item(Resource::Kudos, id), &[]).await;
        Ok(none_when_absent(result)?.map(|envelope| envelope.data.into_kudos()))
    }

    async fn create(&self, draft: &KudosDraft) -> ApiResult<Kudos> {
        let envelope: Envelope<KudosDto> = self
            .client
            .post(self.base(Resource::Kudos), draft)
            .await?;

        tracing::info!(
            target: TRACING_TARGET,
            kudos_id = %envelope.data.id,
            "Kudos created"
        );
        Ok(envelope.data.into_kudos())
    }

    async fn delete(&self, id: &str) -> ApiResult<()> {
        let _: Value = self.client.delete(&self.item(Resource::Kudos, id)).await?;
        Ok(())
    }
}

impl DirectoryRepository for RestRepository {
    async fn teams(&self) -> ApiResult<Vec<Team>> {
        let envelope: Envelope<Vec<TeamDto>> =
            self.client.get(self.base(Resource::Teams), &[]).await?;
        Ok(envelope.data.into_iter().map(TeamDto::into_team).collect())
    }

    async fn categories(&self) -> ApiResult<Vec<Category>> {
        let envelope: Envelope<Vec<CategoryDto>> = self
            .client
            .get(self.base(Resource::Categories), &[])
            .await?;
        Ok(envelope
            .data
            .into_iter()
            .map(CategoryDto::into_category)
            .collect())
    }
}

impl AnalyticsRepository for RestRepository {
    async fn summary(&self, range: AnalyticsRange) -> ApiResult<AnalyticsSummary> {
        let path = format!("{}/summary", self.base(Resource::Analytics));
        let query = [("range", Some(range.as_str().to_string()))];
        let envelope: Envelope<AnalyticsSummaryDto> = self.client.get(&path, &query).await?;
        Ok(envelope.data.into_summary())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_none_when_absent_maps_not_found() {
        let result: ApiResult<u32> = Err(ApiError::not_found("User not found"));
        assert_eq!(none_when_absent(result).unwrap(), None);
    }

    #[test]
    fn test_none_when_absent_passes_values_through() {
        let result: ApiResult<u32> = Ok(7);
        assert_eq!(none_when_absent(result).unwrap(), Some(7));
    }

    #[test]
    fn test_none_when_absent_propagates_other_errors() {
        let result: ApiResult<u32> = Err(ApiError::unauthorized("Token expired"));
        assert!(none_when_absent(result).is_err());
    }
}
