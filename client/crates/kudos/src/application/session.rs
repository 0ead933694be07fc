//! Auth Session Service
//!
//! The only component allowed to read or write the bearer token and the
//! cached user snapshot. Wraps the auth repository with persistence side
//! effects and absorbs every failure into a value: no method here returns
//! an `ApiError`, so the presentation layer treats all auth operations as
//! always-resolving.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use platform::storage::{AUTH_TOKEN_KEY, HybridStorage, USER_DATA_KEY};

use crate::domain::entity::{session::LoginData, user::User};
use crate::domain::repository::{AuthRepository, RegisterInput};
use crate::domain::value_object::{Role, Team};
use crate::error::AuthFailure;

/// Outcome of a logout; produced even when the backend call fails
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogoutSummary {
    pub message: String,
}

/// Auth session service
pub struct AuthService<A>
where
    A: AuthRepository,
{
    repo: Arc<A>,
    storage: HybridStorage,
}

impl<A> AuthService<A>
where
    A: AuthRepository,
{
    pub fn new(repo: Arc<A>, storage: HybridStorage) -> Self {
        Self { repo, storage }
    }

    /// Sign in with email and password
    ///
    /// On success the token is persisted first, then the user snapshot.
    /// Repository errors become [`AuthFailure`] values; bad credentials are
    /// an expected outcome, not an exception.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginData, AuthFailure> {
        match self.repo.login(email, password).await {
            Ok(data) => {
                self.storage.set(AUTH_TOKEN_KEY, &data.token);
                self.cache_snapshot(&data.user);

                tracing::info!(user = %data.user.id, "User signed in");
                Ok(data)
            }
            Err(err) => {
                tracing::warn!(error = %err, "Sign-in rejected");
                Err(AuthFailure::from(err))
            }
        }
    }

    /// Sign out
    ///
    /// Local state is cleared before the backend call, so the client is
    /// logged out even when the network call fails.
    pub async fn logout(&self) -> LogoutSummary {
        self.storage.remove(AUTH_TOKEN_KEY);
        self.storage.remove(USER_DATA_KEY);

        match self.repo.logout().await {
            Ok(()) => {
                tracing::info!("User signed out");
                LogoutSummary {
                    message: "Signed out".to_string(),
                }
            }
            Err(err) => {
                tracing::warn!(error = %err, "Server sign-out failed after local sign-out");
                LogoutSummary {
                    message: format!(
                        "Signed out locally; the server could not be notified: {}",
                        err.message()
                    ),
                }
            }
        }
    }

    /// The authenticated user, or `None` when there is no usable session
    ///
    /// No token: resolves immediately without a network call. A valid
    /// cached snapshot also avoids the network. Only when the snapshot is
    /// absent or corrupt does this fall back to a fetch, refreshing the
    /// cache on success. Any failure resolves to `None` — "unable to
    /// determine identity" is modeled as "not authenticated".
    pub async fn current_user(&self) -> Option<User> {
        let token = self.storage.get(AUTH_TOKEN_KEY)?;
        if token.is_empty() {
            return None;
        }

        if let Some(user) = self.read_snapshot() {
            return Some(user);
        }

        match self.repo.current_user().await {
            Ok(user) => {
                self.cache_snapshot(&user);
                Some(user)
            }
            Err(err) => {
                if err.is_auth_failure() {
                    // The token was rejected: treat as signed out
                    self.storage.remove(AUTH_TOKEN_KEY);
                    self.storage.remove(USER_DATA_KEY);
                }
                tracing::debug!(error = %err, "Could not resolve current user");
                None
            }
        }
    }

    /// Create a new account
    pub async fn register(&self, input: &RegisterInput) -> Result<User, AuthFailure> {
        self.repo.register(input).await.map_err(AuthFailure::from)
    }

    /// Request a password-reset email
    pub async fn request_password_reset(&self, email: &str) -> Result<(), AuthFailure> {
        self.repo
            .request_password_reset(email)
            .await
            .map_err(AuthFailure::from)
    }

    fn cache_snapshot(&self, user: &User) {
        match serde_json::to_string(&UserSnapshot::from(user)) {
            Ok(raw) => self.storage.set(USER_DATA_KEY, &raw),
            Err(err) => {
                tracing::warn!(error = %err, "Failed to serialize user snapshot");
            }
        }
    }

    fn read_snapshot(&self) -> Option<User> {
        let raw = self.storage.get(USER_DATA_KEY)?;
        match serde_json::from_str::<UserSnapshot>(&raw) {
            Ok(snapshot) => Some(snapshot.into_user()),
            Err(err) => {
                tracing::debug!(error = %err, "Discarding corrupt user snapshot");
                self.storage.remove(USER_DATA_KEY);
                None
            }
        }
    }
}

// ============================================================================
// Snapshot wire format
// ============================================================================

/// Serialized user profile kept in persistent storage
///
/// Every field defaults, so a snapshot written by an older client version
/// still deserializes; missing timestamps reconstruct as "now".
#[derive(Debug, Serialize, Deserialize)]
struct UserSnapshot {
    #[serde(default)]
    id: String,
    #[serde(default)]
    email: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    roles: Vec<RoleSnapshot>,
    #[serde(default)]
    approved: bool,
    #[serde(default)]
    team: Option<TeamSnapshot>,
    #[serde(default)]
    created_at: String,
    #[serde(default)]
    updated_at: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct RoleSnapshot {
    #[serde(default)]
    id: String,
    #[serde(default)]
    name: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct TeamSnapshot {
    #[serde(default)]
    id: String,
    #[serde(default)]
    name: String,
}

impl From<&User> for UserSnapshot {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            email: user.email.clone(),
            name: user.name.clone(),
            roles: user
                .roles
                .iter()
                .map(|role| RoleSnapshot {
                    id: role.id.clone(),
                    name: role.name.clone(),
                })
                .collect(),
            approved: user.approved,
            team: user.team.as_ref().map(|team| TeamSnapshot {
                id: team.id.clone(),
                name: team.name.clone(),
            }),
            created_at: user.created_at.to_rfc3339(),
            updated_at: user.updated_at.to_rfc3339(),
        }
    }
}

impl UserSnapshot {
    fn into_user(self) -> User {
        User {
            id: self.id,
            email: self.email,
            name: self.name,
            roles: self
                .roles
                .into_iter()
                .map(|role| Role::new(role.id, role.name))
                .collect(),
            approved: self.approved,
            team: self.team.map(|team| Team::new(team.id, team.name)),
            created_at: parse_timestamp(&self.created_at),
            updated_at: parse_timestamp(&self.updated_at),
        }
    }
}

/// Missing or corrupt timestamps reconstruct as "now"
fn parse_timestamp(value: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|_| Utc::now())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use kernel::error::api_error::{ApiError, ApiResult};
    use platform::storage::HybridStorage;

    use crate::error::UNKNOWN_ERROR_MESSAGE;

    fn sample_user() -> User {
        let created = DateTime::parse_from_rfc3339("2025-02-01T12:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        User {
            id: "u1".to_string(),
            email: "ada@example.com".to_string(),
            name: "Ada".to_string(),
            roles: vec![Role::new("r1", "member")],
            approved: true,
            team: Some(Team::new("t1", "Platform")),
            created_at: created,
            updated_at: created,
        }
    }

    /// Stub repository; `None` responses become errors
    struct StubAuthRepo {
        login_response: Option<LoginData>,
        fail_logout: bool,
        current_user_response: Option<User>,
        current_user_calls: AtomicUsize,
    }

    impl Default for StubAuthRepo {
        fn default() -> Self {
            Self {
                login_response: None,
                fail_logout: false,
                current_user_response: None,
                current_user_calls: AtomicUsize::new(0),
            }
        }
    }

    impl AuthRepository for StubAuthRepo {
        async fn login(&self, _email: &str, _password: &str) -> ApiResult<LoginData> {
            self.login_response
                .clone()
                .ok_or_else(|| ApiError::unauthorized("Invalid credentials"))
        }

        async fn logout(&self) -> ApiResult<()> {
            if self.fail_logout {
                Err(ApiError::network("Connection failed"))
            } else {
                Ok(())
            }
        }

        async fn register(&self, _input: &RegisterInput) -> ApiResult<User> {
            Err(ApiError::new(kernel::error::kind::ErrorKind::ServerError, ""))
        }

        async fn request_password_reset(&self, _email: &str) -> ApiResult<()> {
            Ok(())
        }

        async fn current_user(&self) -> ApiResult<User> {
            self.current_user_calls.fetch_add(1, Ordering::SeqCst);
            self.current_user_response
                .clone()
                .ok_or_else(|| ApiError::network("Connection failed"))
        }
    }

    fn service_with(repo: StubAuthRepo) -> (AuthService<StubAuthRepo>, HybridStorage) {
        let storage = HybridStorage::client();
        let service = AuthService::new(Arc::new(repo), storage.clone());
        (service, storage)
    }

    #[tokio::test]
    async fn test_login_persists_token_and_snapshot() {
        let user = sample_user();
        let (service, storage) = service_with(StubAuthRepo {
            login_response: Some(LoginData {
                token: "abc".to_string(),
                user: user.clone(),
            }),
            ..Default::default()
        });

        let data = service.login("ada@example.com", "hunter22").await.unwrap();
        assert_eq!(data.token, "abc");
        assert_eq!(storage.get(AUTH_TOKEN_KEY), Some("abc".to_string()));

        // Served from the snapshot: the stub's current_user would fail
        let cached = service.current_user().await.unwrap();
        assert_eq!(cached, user);
        assert_eq!(
            service.repo.current_user_calls.load(Ordering::SeqCst),
            0
        );
    }

    #[tokio::test]
    async fn test_login_failure_resolves_to_value() {
        let (service, storage) = service_with(StubAuthRepo::default());

        let failure = service.login("ada@example.com", "wrong").await.unwrap_err();
        assert_eq!(failure.message, "Invalid credentials");
        assert_eq!(storage.get(AUTH_TOKEN_KEY), None);
    }

    #[tokio::test]
    async fn test_logout_clears_state_even_when_backend_fails() {
        let user = sample_user();
        let (service, storage) = service_with(StubAuthRepo {
            login_response: Some(LoginData {
                token: "abc".to_string(),
                user,
            }),
            fail_logout: true,
            ..Default::default()
        });

        service.login("ada@example.com", "hunter22").await.unwrap();
        let summary = service.logout().await;

        assert_eq!(storage.get(AUTH_TOKEN_KEY), None);
        assert_eq!(storage.get(USER_DATA_KEY), None);
        assert!(summary.message.contains("Signed out locally"));
        assert!(summary.message.contains("Connection failed"));
    }

    #[tokio::test]
    async fn test_current_user_without_token_skips_network() {
        let (service, _storage) = service_with(StubAuthRepo::default());

        assert_eq!(service.current_user().await, None);
        assert_eq!(
            service.repo.current_user_calls.load(Ordering::SeqCst),
            0
        );
    }

    #[tokio::test]
    async fn test_current_user_fetches_and_refreshes_cache() {
        let user = sample_user();
        let (service, storage) = service_with(StubAuthRepo {
            current_user_response: Some(user.clone()),
            ..Default::default()
        });
        storage.set(AUTH_TOKEN_KEY, "abc");

        assert_eq!(service.current_user().await, Some(user.clone()));
        assert_eq!(
            service.repo.current_user_calls.load(Ordering::SeqCst),
            1
        );

        // Second call hits the refreshed cache
        assert_eq!(service.current_user().await, Some(user));
        assert_eq!(
            service.repo.current_user_calls.load(Ordering::SeqCst),
            1
        );
    }

    #[tokio::test]
    async fn test_current_user_network_failure_is_none() {
        let (service, storage) = service_with(StubAuthRepo::default());
        storage.set(AUTH_TOKEN_KEY, "abc");

        assert_eq!(service.current_user().await, None);
        // A transport failure does not invalidate the token
        assert_eq!(storage.get(AUTH_TOKEN_KEY), Some("abc".to_string()));
    }

    #[tokio::test]
    async fn test_corrupt_snapshot_falls_back_to_network() {
        let user = sample_user();
        let (service, storage) = service_with(StubAuthRepo {
            current_user_response: Some(user.clone()),
            ..Default::default()
        });
        storage.set(AUTH_TOKEN_KEY, "abc");
        storage.set(USER_DATA_KEY, "{not json");

        assert_eq!(service.current_user().await, Some(user));
        assert_eq!(
            service.repo.current_user_calls.load(Ordering::SeqCst),
            1
        );
    }

    #[tokio::test]
    async fn test_register_failure_uses_fallback_message() {
        let (service, _storage) = service_with(StubAuthRepo::default());

        let failure = service
            .register(&RegisterInput {
                email: "ada@example.com".to_string(),
                name: "Ada".to_string(),
                password: "hunter22".to_string(),
                team_id: None,
            })
            .await
            .unwrap_err();
        assert_eq!(failure.message, UNKNOWN_ERROR_MESSAGE);
    }

    #[test]
    fn test_snapshot_defaults_are_defensive() {
        let snapshot: UserSnapshot = serde_json::from_str(r#"{"id":"u9"}"#).unwrap();
        let user = snapshot.into_user();
        assert_eq!(user.id, "u9");
        assert!(user.roles.is_empty());
        assert!(!user.approved);
        assert!(user.team.is_none());
        // Corrupt timestamps reconstruct as "now" rather than failing
        assert!(user.created_at <= Utc::now());
    }
}
