//! Application Configuration
//!
//! The API base URL, cookie policy, and the path table that is the single
//! source of truth for primary resource paths. Repositories consult the
//! table instead of inlining URL strings.

use platform::cookie::CookieConfig;

/// Logical backend resources
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Auth,
    Users,
    Kudos,
    Teams,
    Categories,
    Analytics,
}

/// Static map from logical resource to its primary path
#[derive(Debug, Clone)]
pub struct PathTable {
    auth: String,
    users: String,
    kudos: String,
    teams: String,
    categories: String,
    analytics: String,
}

impl Default for PathTable {
    fn default() -> Self {
        Self {
            auth: "auth".to_string(),
            users: "users".to_string(),
            kudos: "kudos".to_string(),
            teams: "teams".to_string(),
            categories: "categories".to_string(),
            analytics: "analytics".to_string(),
        }
    }
}

impl PathTable {
    /// Collection path for a resource
    pub fn base(&self, resource: Resource) -> &str {
        match resource {
            Resource::Auth => &self.auth,
            Resource::Users => &self.users,
            Resource::Kudos => &self.kudos,
            Resource::Teams => &self.teams,
            Resource::Categories => &self.categories,
            Resource::Analytics => &self.analytics,
        }
    }

    /// Path for one item of a resource
    pub fn item(&self, resource: Resource, id: &str) -> String {
        format!("{}/{}", self.base(resource), id)
    }
}

/// Data-access layer configuration
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Absolute backend base URL (no trailing slash required)
    pub base_url: String,
    pub cookies: CookieConfig,
    pub paths: PathTable,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.kudos.example.com/api/v1".to_string(),
            cookies: CookieConfig::default(),
            paths: PathTable::default(),
        }
    }
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Config for development (insecure cookies)
    pub fn development(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            cookies: CookieConfig::development(),
            ..Default::default()
        }
    }

    /// Build from the environment
    ///
    /// Reads `API_BASE_URL`; cookies are insecure only when `APP_ENV` is
    /// `development`.
    pub fn from_env() -> Self {
        let base_url = std::env::var("API_BASE_URL")
            .unwrap_or_else(|_| Self::default().base_url);
        let development = std::env::var("APP_ENV")
            .map(|env| env == "development")
            .unwrap_or(false);

        if development {
            Self::development(base_url)
        } else {
            Self::new(base_url)
        }
    }
}
