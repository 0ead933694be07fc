//! Bearer-authenticated JSON HTTP client
//!
//! One client instance is shared by every repository in a graph. It builds
//! URLs against the configured base, re-reads the session token from the
//! storage façade immediately before each call, and normalizes both
//! transport failures and application-level error envelopes into a single
//! [`ApiError`] shape. It performs no entity mapping; that is the
//! repository layer's job.

use kernel::error::api_error::{ApiError, ApiResult};
use kernel::error::kind::ErrorKind;
use reqwest::Method;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::storage::{AUTH_TOKEN_KEY, HybridStorage};

/// Tracing target for HTTP client operations
pub const TRACING_TARGET: &str = "platform::client";

/// A query parameter pair; `None` values are skipped entirely
pub type QueryPair<'a> = (&'a str, Option<String>);

/// JSON HTTP client bound to one API base URL and one storage graph
///
/// Holds no mutable per-call state: the token is looked up per call, so
/// concurrent calls sharing a clone are safe.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    storage: HybridStorage,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, storage: HybridStorage) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            storage,
        }
    }

    /// GET with query parameters
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[QueryPair<'_>],
    ) -> ApiResult<T> {
        self.request(Method::GET, path, query, None, &[]).await
    }

    /// POST with a JSON body
    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        let body = serde_json::to_value(body)?;
        self.request(Method::POST, path, &[], Some(body), &[]).await
    }

    /// PUT with a JSON body
    pub async fn put<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        let body = serde_json::to_value(body)?;
        self.request(Method::PUT, path, &[], Some(body), &[]).await
    }

    /// PATCH with a JSON body
    pub async fn patch<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        let body = serde_json::to_value(body)?;
        self.request(Method::PATCH, path, &[], Some(body), &[])
            .await
    }

    /// DELETE without a body
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        self.request(Method::DELETE, path, &[], None, &[]).await
    }

    /// DELETE carrying a JSON body
    pub async fn delete_with_body<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        let body = serde_json::to_value(body)?;
        self.request(Method::DELETE, path, &[], Some(body), &[])
            .await
    }

    /// Full request path shared by every verb helper
    ///
    /// Caller-supplied `headers` are inserted after the defaults, so they
    /// take precedence over `Content-Type` and `Authorization`.
    pub async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        query: &[QueryPair<'_>],
        body: Option<Value>,
        headers: &[(&str, &str)],
    ) -> ApiResult<T> {
        let url = self.build_url(path);

        tracing::debug!(
            target: TRACING_TARGET,
            method = %method,
            path,
            "Sending API request"
        );

        let mut request = self.http.request(method.clone(), &url);

        let pairs: Vec<(&str, &str)> = query
            .iter()
            .filter_map(|(key, value)| value.as_deref().map(|v| (*key, v)))
            .collect();
        if !pairs.is_empty() {
            request = request.query(&pairs);
        }

        request = request.headers(self.build_headers(headers)?);

        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = request.send().await.map_err(|err| {
            let message = if err.is_timeout() {
                "Request timed out".to_string()
            } else if err.is_connect() {
                "Connection failed".to_string()
            } else {
                err.to_string()
            };
            tracing::warn!(
                target: TRACING_TARGET,
                %method,
                path,
                error = %message,
                "API request failed in transit"
            );
            ApiError::network(message).with_source(err)
        })?;

        let status = response.status().as_u16();
        let text = response.text().await.map_err(|err| {
            ApiError::network("Failed to read response body").with_source(err)
        })?;

        if !(200..300).contains(&status) {
            let error = normalize_error(status, &text);
            tracing::debug!(
                target: TRACING_TARGET,
                %method,
                path,
                status,
                kind = %error.kind(),
                "API request rejected"
            );
            return Err(error);
        }

        // Empty bodies (204, logout-style endpoints) decode as JSON null
        if text.trim().is_empty() {
            return Ok(serde_json::from_value(Value::Null)?);
        }
        Ok(serde_json::from_str(&text)?)
    }

    fn build_url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    fn build_headers(&self, extra: &[(&str, &str)]) -> ApiResult<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        // Token is re-read on every call, never cached in the client. A
        // missing token means the Authorization header is omitted entirely.
        if let Some(token) = self.storage.get(AUTH_TOKEN_KEY)
            && !token.is_empty()
        {
            match HeaderValue::from_str(&format!("Bearer {token}")) {
                Ok(value) => {
                    headers.insert(AUTHORIZATION, value);
                }
                Err(_) => {
                    tracing::warn!(
                        target: TRACING_TARGET,
                        "Stored token is not a valid header value; sending unauthenticated"
                    );
                }
            }
        }

        for (name, value) in extra {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| ApiError::bad_request("Invalid header name").with_source(e))?;
            let value = HeaderValue::from_str(value)
                .map_err(|e| ApiError::bad_request("Invalid header value").with_source(e))?;
            headers.insert(name, value);
        }

        Ok(headers)
    }
}

// ============================================================================
// Error normalization
// ============================================================================

#[derive(serde::Deserialize)]
struct WireErrorBody {
    code: Option<String>,
    message: Option<String>,
}

#[derive(serde::Deserialize)]
struct WireErrorEnvelope {
    error: Option<WireErrorBody>,
    message: Option<String>,
}

/// Normalize a non-success response into a single [`ApiError`]
///
/// Recognizes `{ error: { code, message } }` and bare `{ message }`
/// envelopes. The kind comes from the backend error code when recognized,
/// else from the HTTP status; an empty message only downgrades the text to
/// the generic status fallback, never the kind. Unparseable bodies fall
/// back entirely; raw parse errors never escape.
fn normalize_error(status: u16, body: &str) -> ApiError {
    let Ok(envelope) = serde_json::from_str::<WireErrorEnvelope>(body) else {
        return ApiError::status_fallback(status);
    };

    let code = envelope
        .error
        .as_ref()
        .and_then(|e| e.code.clone());
    let message = envelope
        .error
        .and_then(|e| e.message)
        .or(envelope.message)
        .filter(|m| !m.trim().is_empty());

    let kind = code
        .as_deref()
        .and_then(ErrorKind::from_code)
        .unwrap_or_else(|| ErrorKind::from_status(status));

    match message {
        Some(message) => ApiError::new(kind, message),
        None => ApiError::new(kind, format!("Request failed with status {status}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_structured_envelope() {
        let body = r#"{"error":{"code":"NOT_FOUND","message":"User not found"}}"#;
        let err = normalize_error(400, body);
        // Backend code wins over the status
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(err.message(), "User not found");
    }

    #[test]
    fn test_normalize_bare_message() {
        let err = normalize_error(401, r#"{"message":"Invalid credentials"}"#);
        assert_eq!(err.kind(), ErrorKind::Unauthorized);
        assert_eq!(err.message(), "Invalid credentials");
    }

    #[test]
    fn test_normalize_non_json_body_falls_back() {
        let err = normalize_error(500, "<html>Internal Server Error</html>");
        assert_eq!(err.kind(), ErrorKind::ServerError);
        assert_eq!(err.message(), "Request failed with status 500");
    }

    #[test]
    fn test_normalize_empty_message_falls_back() {
        let err = normalize_error(404, r#"{"error":{"code":"NOT_FOUND","message":""}}"#);
        assert_eq!(err.message(), "Request failed with status 404");
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn test_normalize_keeps_code_kind_on_messageless_body() {
        // The recognized code still classifies the error even when the
        // status disagrees and the body carries no message
        let err = normalize_error(400, r#"{"error":{"code":"NOT_FOUND"}}"#);
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert!(err.is_not_found());
        assert_eq!(err.message(), "Request failed with status 400");
    }

    #[test]
    fn test_normalize_unknown_code_uses_status() {
        let err = normalize_error(409, r#"{"error":{"code":"WEIRD","message":"nope"}}"#);
        assert_eq!(err.kind(), ErrorKind::Conflict);
    }

    #[test]
    fn test_build_url_joins_segments() {
        let client = ApiClient::new("https://api.example.com/", HybridStorage::client());
        assert_eq!(
            client.build_url("/users/42"),
            "https://api.example.com/users/42"
        );
        assert_eq!(client.build_url("kudos"), "https://api.example.com/kudos");
    }

    #[test]
    fn test_build_headers_omits_authorization_without_token() {
        let client = ApiClient::new("https://api.example.com", HybridStorage::client());
        let headers = client.build_headers(&[]).unwrap();
        assert!(!headers.contains_key(AUTHORIZATION));
        assert_eq!(headers.get(CONTENT_TYPE).unwrap(), "application/json");
    }

    #[test]
    fn test_build_headers_attaches_bearer_token() {
        let storage = HybridStorage::client();
        storage.set(AUTH_TOKEN_KEY, "tok123");
        let client = ApiClient::new("https://api.example.com", storage);

        let headers = client.build_headers(&[]).unwrap();
        assert_eq!(headers.get(AUTHORIZATION).unwrap(), "Bearer tok123");
    }

    #[test]
    fn test_build_headers_caller_precedence() {
        let client = ApiClient::new("https://api.example.com", HybridStorage::client());
        let headers = client
            .build_headers(&[("content-type", "text/plain")])
            .unwrap();
        assert_eq!(headers.get(CONTENT_TYPE).unwrap(), "text/plain");
    }

    #[test]
    fn test_empty_token_not_sent() {
        let storage = HybridStorage::client();
        storage.set(AUTH_TOKEN_KEY, "");
        let client = ApiClient::new("https://api.example.com", storage);

        let headers = client.build_headers(&[]).unwrap();
        assert!(!headers.contains_key(AUTHORIZATION));
    }
}
