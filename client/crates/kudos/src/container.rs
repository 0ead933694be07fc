//! Composition Root
//!
//! Wires storage, HTTP client, repositories, session service, and use
//! cases into one graph. Two construction modes:
//!
//! - [`Container::client`]: one process-wide singleton sharing a cookie jar
//!   and persistent store, for long-lived interactive sessions.
//! - [`Container::for_request`]: a fresh graph per server-side request,
//!   scoped to that request's cookies and token so concurrent requests
//!   never observe each other's credentials.

use std::sync::{Arc, OnceLock};

use platform::client::ApiClient;
use platform::storage::{AUTH_TOKEN_KEY, HybridStorage, RequestCookies};

use crate::application::analytics::AnalyticsSummaryUseCase;
use crate::application::approve_user::ApproveUserUseCase;
use crate::application::config::ApiConfig;
use crate::application::current_user::CurrentUserUseCase;
use crate::application::directory::{ListCategoriesUseCase, ListTeamsUseCase};
use crate::application::get_kudos::GetKudosUseCase;
use crate::application::get_user::GetUserUseCase;
use crate::application::give_kudos::GiveKudosUseCase;
use crate::application::list_kudos::ListKudosUseCase;
use crate::application::list_users::ListUsersUseCase;
use crate::application::login::LoginUseCase;
use crate::application::logout::LogoutUseCase;
use crate::application::register::RegisterUseCase;
use crate::application::remove_kudos::RemoveKudosUseCase;
use crate::application::remove_user::RemoveUserUseCase;
use crate::application::reset_password::ResetPasswordUseCase;
use crate::application::session::AuthService;
use crate::application::update_user::UpdateUserUseCase;
use crate::infra::rest::RestRepository;

/// Tracing target for container wiring
pub const TRACING_TARGET: &str = "kudos::container";

static CLIENT_CONTAINER: OnceLock<Arc<Container>> = OnceLock::new();

/// Fully wired use-case graph over the REST repository
pub struct Container {
    config: Arc<ApiConfig>,
    storage: HybridStorage,

    pub login: LoginUseCase<RestRepository>,
    pub logout: LogoutUseCase<RestRepository>,
    pub current_user: CurrentUserUseCase<RestRepository>,
    pub register: RegisterUseCase<RestRepository>,
    pub reset_password: ResetPasswordUseCase<RestRepository>,

    pub list_users: ListUsersUseCase<RestRepository>,
    pub get_user: GetUserUseCase<RestRepository>,
    pub update_user: UpdateUserUseCase<RestRepository>,
    pub approve_user: ApproveUserUseCase<RestRepository>,
    pub remove_user: RemoveUserUseCase<RestRepository>,

    pub list_kudos: ListKudosUseCase<RestRepository>,
    pub get_kudos: GetKudosUseCase<RestRepository>,
    pub give_kudos: GiveKudosUseCase<RestRepository>,
    pub remove_kudos: RemoveKudosUseCase<RestRepository>,

    pub list_teams: ListTeamsUseCase<RestRepository>,
    pub list_categories: ListCategoriesUseCase<RestRepository>,

    pub analytics_summary: AnalyticsSummaryUseCase<RestRepository>,
}

impl Container {
    /// The process-wide client-mode container
    ///
    /// Built on first call and shared from then on; the config passed to
    /// later calls is ignored. Uses the process cookie jar and the live
    /// persistent store.
    pub fn client(config: ApiConfig) -> Arc<Self> {
        CLIENT_CONTAINER
            .get_or_init(|| {
                tracing::debug!(
                    target: TRACING_TARGET,
                    base_url = %config.base_url,
                    "Building client container"
                );
                Arc::new(Self::build(config, HybridStorage::client()))
            })
            .clone()
    }

    /// A fresh graph scoped to one server-side request
    ///
    /// `cookies` is the request's cookie context; when the caller has none
    /// an empty context is created so token writes still stick for the
    /// graph's lifetime. A `token` is written into the scoped storage
    /// before any repository call can read it.
    pub fn for_request(
        config: ApiConfig,
        token: Option<&str>,
        cookies: Option<Arc<RequestCookies>>,
    ) -> Self {
        let cookies = cookies.unwrap_or_else(|| Arc::new(RequestCookies::default()));
        let storage = HybridStorage::for_request(cookies);

        if let Some(token) = token {
            storage.set(AUTH_TOKEN_KEY, token);
        }

        Self::build(config, storage)
    }

    fn build(config: ApiConfig, storage: HybridStorage) -> Self {
        let config = Arc::new(config);
        let client = Arc::new(ApiClient::new(config.base_url.clone(), storage.clone()));
        let repo = Arc::new(RestRepository::new(client, config.clone()));
        let auth = Arc::new(AuthService::new(repo.clone(), storage.clone()));

        Self {
            config,
            storage,

            login: LoginUseCase::new(auth.clone()),
            logout: LogoutUseCase::new(auth.clone()),
            current_user: CurrentUserUseCase::new(auth.clone()),
            register: RegisterUseCase::new(auth.clone()),
            reset_password: ResetPasswordUseCase::new(auth),

            list_users: ListUsersUseCase::new(repo.clone()),
            get_user: GetUserUseCase::new(repo.clone()),
            update_user: UpdateUserUseCase::new(repo.clone()),
            approve_user: ApproveUserUseCase::new(repo.clone()),
            remove_user: RemoveUserUseCase::new(repo.clone()),

            list_kudos: ListKudosUseCase::new(repo.clone()),
            get_kudos: GetKudosUseCase::new(repo.clone()),
            give_kudos: GiveKudosUseCase::new(repo.clone()),
            remove_kudos: RemoveKudosUseCase::new(repo.clone()),

            list_teams: ListTeamsUseCase::new(repo.clone()),
            list_categories: ListCategoriesUseCase::new(repo.clone()),

            analytics_summary: AnalyticsSummaryUseCase::new(repo),
        }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// The storage graph this container was wired with
    pub fn storage(&self) -> &HybridStorage {
        &self.storage
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_container_is_a_singleton() {
        let first = Container::client(ApiConfig::new("http://one.example.com"));
        let second = Container::client(ApiConfig::new("http://two.example.com"));
        assert!(Arc::ptr_eq(&first, &second));
        // First call wins
        assert_eq!(second.config().base_url, first.config().base_url);
    }

    #[test]
    fn test_request_containers_isolate_tokens() {
        let config = ApiConfig::new("http://localhost:4000");
        let a = Container::for_request(config.clone(), Some("token-a"), None);
        let b = Container::for_request(config, Some("token-b"), None);

        assert_eq!(a.storage().get(AUTH_TOKEN_KEY).as_deref(), Some("token-a"));
        assert_eq!(b.storage().get(AUTH_TOKEN_KEY).as_deref(), Some("token-b"));
    }

    #[test]
    fn test_request_container_reads_incoming_cookie_token() {
        let cookies = Arc::new(RequestCookies::from_pairs([(
            AUTH_TOKEN_KEY.to_string(),
            "cookie-token".to_string(),
        )]));
        let container =
            Container::for_request(ApiConfig::new("http://localhost:4000"), None, Some(cookies));

        assert_eq!(
            container.storage().get(AUTH_TOKEN_KEY).as_deref(),
            Some("cookie-token")
        );
    }

    #[test]
    fn test_request_container_without_token_or_cookies() {
        let container = Container::for_request(ApiConfig::new("http://localhost:4000"), None, None);
        assert_eq!(container.storage().get(AUTH_TOKEN_KEY), None);
    }
}
