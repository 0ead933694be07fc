//! Cookie Management Infrastructure
//!
//! Cookie attribute policy and Cookie/Set-Cookie header handling shared by
//! the request-scoped and process-scoped cookie stores.

use http::{HeaderMap, header};

/// Thirty days, the default lifetime of the session cookie
pub const DEFAULT_MAX_AGE_SECS: i64 = 30 * 24 * 3600;

/// SameSite policy for cookies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SameSite {
    #[default]
    Strict,
    Lax,
    None,
}

impl SameSite {
    pub fn as_str(&self) -> &'static str {
        match self {
            SameSite::Strict => "Strict",
            SameSite::Lax => "Lax",
            SameSite::None => "None",
        }
    }
}

/// Cookie attribute policy
///
/// Applied uniformly to every cookie the storage layer writes. The session
/// cookie is deliberately not HttpOnly: the client-side code must be able to
/// read its own token back.
#[derive(Debug, Clone)]
pub struct CookieConfig {
    pub secure: bool,
    pub http_only: bool,
    pub same_site: SameSite,
    pub path: String,
    pub max_age_secs: Option<i64>,
}

impl Default for CookieConfig {
    fn default() -> Self {
        Self {
            secure: true,
            http_only: false,
            same_site: SameSite::Strict,
            path: "/".to_string(),
            max_age_secs: Some(DEFAULT_MAX_AGE_SECS),
        }
    }
}

impl CookieConfig {
    /// Config for development (insecure transport)
    pub fn development() -> Self {
        Self {
            secure: false,
            ..Default::default()
        }
    }

    /// Build a Set-Cookie header value
    pub fn build_set_cookie(&self, name: &str, value: &str) -> String {
        let mut cookie = format!("{}={}", name, value);

        if self.http_only {
            cookie.push_str("; HttpOnly");
        }
        if self.secure {
            cookie.push_str("; Secure");
        }
        cookie.push_str(&format!("; SameSite={}", self.same_site.as_str()));
        cookie.push_str(&format!("; Path={}", self.path));

        if let Some(max_age) = self.max_age_secs {
            cookie.push_str(&format!("; Max-Age={}", max_age));
        }

        cookie
    }

    /// Build a Set-Cookie header value that deletes the cookie
    pub fn build_delete_cookie(&self, name: &str) -> String {
        format!("{}=; Path={}; Max-Age=0", name, self.path)
    }
}

/// Extract a cookie value from request headers
pub fn extract_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(header::COOKIE)?
        .to_str()
        .ok()?
        .split(';')
        .find_map(|cookie| {
            let (key, value) = cookie.trim().split_once('=')?;

            if key == name {
                Some(value.to_string())
            } else {
                None
            }
        })
}

/// Extract every cookie pair from request headers
pub fn extract_all_cookies(headers: &HeaderMap) -> Vec<(String, String)> {
    let Some(raw) = headers.get(header::COOKIE).and_then(|v| v.to_str().ok()) else {
        return Vec::new();
    };

    raw.split(';')
        .filter_map(|cookie| {
            let (key, value) = cookie.trim().split_once('=')?;
            Some((key.to_string(), value.to_string()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::HeaderValue;

    #[test]
    fn test_cookie_config_build() {
        let config = CookieConfig {
            secure: true,
            http_only: false,
            same_site: SameSite::Strict,
            path: "/".to_string(),
            max_age_secs: Some(DEFAULT_MAX_AGE_SECS),
        };

        let cookie = config.build_set_cookie("auth_token", "value123");
        assert!(cookie.contains("auth_token=value123"));
        assert!(!cookie.contains("HttpOnly"));
        assert!(cookie.contains("Secure"));
        assert!(cookie.contains("SameSite=Strict"));
        assert!(cookie.contains("Path=/"));
        assert!(cookie.contains("Max-Age=2592000"));
    }

    #[test]
    fn test_development_config_is_insecure() {
        let cookie = CookieConfig::development().build_set_cookie("auth_token", "t");
        assert!(!cookie.contains("Secure"));
    }

    #[test]
    fn test_delete_cookie() {
        let cookie = CookieConfig::default().build_delete_cookie("auth_token");
        assert!(cookie.starts_with("auth_token=;"));
        assert!(cookie.contains("Max-Age=0"));
    }

    #[test]
    fn test_extract_cookie() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_static("foo=bar; auth_token=abc123; other=xyz"),
        );

        assert_eq!(
            extract_cookie(&headers, "auth_token"),
            Some("abc123".to_string())
        );
        assert_eq!(extract_cookie(&headers, "foo"), Some("bar".to_string()));
        assert_eq!(extract_cookie(&headers, "missing"), None);
    }

    #[test]
    fn test_extract_all_cookies() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_static("a=1; b=2"),
        );

        let pairs = extract_all_cookies(&headers);
        assert_eq!(
            pairs,
            vec![
                ("a".to_string(), "1".to_string()),
                ("b".to_string(), "2".to_string())
            ]
        );
        assert!(extract_all_cookies(&HeaderMap::new()).is_empty());
    }
}
