//! API Error - Unified error type for the data-access layer
//!
//! Defines [`ApiError`] struct and [`ApiResult<T>`] type alias. Every
//! failure the HTTP client and repositories can produce is expressed as a
//! single `ApiError` carrying a structured [`ErrorKind`] discriminant and a
//! human-readable message.

use std::borrow::Cow;
use std::error::Error;
use std::fmt;

use super::kind::ErrorKind;

/// Unified API error
///
/// ## Fields
/// * `kind` - structured classification (the only thing callers branch on)
/// * `message` - human-readable, safe to show to the user
/// * `source` - the underlying error, when one exists (debugging only)
///
/// ## Examples
/// ```rust
/// use kernel::error::{api_error::ApiError, kind::ErrorKind};
///
/// let err = ApiError::new(ErrorKind::NotFound, "User not found");
/// assert!(err.is_not_found());
/// ```
pub struct ApiError {
    kind: ErrorKind,
    message: Cow<'static, str>,
    source: Option<Box<dyn Error + Send + Sync + 'static>>,
}

/// Result type alias used throughout the data-access layer
pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    /// Create a new error
    #[inline]
    pub fn new(kind: ErrorKind, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    // ========================================================================
    // Convenience constructors
    // ========================================================================

    /// Malformed request
    #[inline]
    pub fn bad_request(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::BadRequest, message)
    }

    /// Missing or rejected credentials
    #[inline]
    pub fn unauthorized(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::Unauthorized, message)
    }

    /// Resource does not exist
    #[inline]
    pub fn not_found(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::NotFound, message)
    }

    /// Request never completed (transport failure)
    #[inline]
    pub fn network(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::Network, message)
    }

    /// Response arrived but could not be decoded
    #[inline]
    pub fn invalid_response(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::InvalidResponse, message)
    }

    /// Backend-side failure
    #[inline]
    pub fn server(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::ServerError, message)
    }

    /// Generic fallback for a non-success status whose body carried no
    /// recognizable error envelope
    #[inline]
    pub fn status_fallback(status: u16) -> Self {
        Self::new(
            ErrorKind::from_status(status),
            format!("Request failed with status {status}"),
        )
    }

    // ========================================================================
    // Builder methods
    // ========================================================================

    /// Attach the underlying error (debugging only, never user-facing)
    #[inline]
    pub fn with_source<E>(mut self, source: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        self.source = Some(Box::new(source));
        self
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// HTTP status this error maps to, when it has one
    #[inline]
    pub fn status_code(&self) -> Option<u16> {
        self.kind.status_code()
    }

    /// Whether this error means "the resource is absent"
    ///
    /// Repositories convert this case into `Ok(None)` for lookups.
    #[inline]
    pub fn is_not_found(&self) -> bool {
        self.kind == ErrorKind::NotFound
    }

    /// Whether this error means the session token was missing or rejected
    #[inline]
    pub fn is_auth_failure(&self) -> bool {
        self.kind.is_auth_failure()
    }
}

impl fmt::Debug for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut builder = f.debug_struct("ApiError");
        builder.field("kind", &self.kind);
        builder.field("message", &self.message);
        if let Some(source) = &self.source {
            builder.field("source", source);
        }
        builder.finish()
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind, self.message)
    }
}

impl Error for ApiError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn Error + 'static))
    }
}

// ============================================================================
// Result extension traits
// ============================================================================

/// Extension trait converting `Result<T, E>` into `ApiResult<T>`
pub trait ResultExt<T, E> {
    /// Wrap the error with the given kind and message
    fn map_api_err(self, kind: ErrorKind, message: impl Into<Cow<'static, str>>) -> ApiResult<T>
    where
        E: Error + Send + Sync + 'static;
}

impl<T, E> ResultExt<T, E> for Result<T, E> {
    fn map_api_err(self, kind: ErrorKind, message: impl Into<Cow<'static, str>>) -> ApiResult<T>
    where
        E: Error + Send + Sync + 'static,
    {
        self.map_err(|e| ApiError::new(kind, message).with_source(e))
    }
}

/// Extension trait converting `Option<T>` into `ApiResult<T>`
pub trait OptionExt<T> {
    /// Return a 404-kinded error when `None`
    fn ok_or_not_found(self, message: impl Into<Cow<'static, str>>) -> ApiResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_not_found(self, message: impl Into<Cow<'static, str>>) -> ApiResult<T> {
        self.ok_or_else(|| ApiError::not_found(message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_error() {
        let err = ApiError::new(ErrorKind::NotFound, "User not found");
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(err.status_code(), Some(404));
        assert_eq!(err.message(), "User not found");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_status_fallback() {
        let err = ApiError::status_fallback(502);
        assert_eq!(err.kind(), ErrorKind::ServerError);
        assert_eq!(err.message(), "Request failed with status 502");
    }

    #[test]
    fn test_with_source() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = ApiError::server("Request failed").with_source(io_err);
        assert!(err.source().is_some());
    }

    #[test]
    fn test_display() {
        let err = ApiError::not_found("User not found");
        assert_eq!(err.to_string(), "[Not Found] User not found");
    }

    #[test]
    fn test_result_ext() {
        let result: Result<i32, std::io::Error> = Err(std::io::Error::other("boom"));
        let api_result = result.map_api_err(ErrorKind::Network, "Connection failed");
        assert_eq!(api_result.unwrap_err().kind(), ErrorKind::Network);
    }

    #[test]
    fn test_option_ext() {
        let none: Option<i32> = None;
        assert!(none.ok_or_not_found("missing").unwrap_err().is_not_found());
        assert_eq!(Some(7).ok_or_not_found("missing").unwrap(), 7);
    }
}
