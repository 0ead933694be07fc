//! Error Kind - Classification of API errors
//!
//! Defines the [`ErrorKind`] enum used as the structured discriminant for
//! every failure raised by the data-access layer. Kinds are derived from the
//! backend's error `code` when it sends one, or from the HTTP status
//! otherwise; callers branch on the kind, never on message text.

use serde::Serialize;

/// API error classification
///
/// Most variants correspond to an HTTP status class; `Network` and
/// `InvalidResponse` cover failures that never produced a usable response.
///
/// ## Examples
/// ```rust
/// use kernel::error::kind::ErrorKind;
///
/// let kind = ErrorKind::from_status(404);
/// assert_eq!(kind, ErrorKind::NotFound);
/// assert_eq!(kind.as_str(), "Not Found");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum ErrorKind {
    /// 400 - the request was malformed
    BadRequest,
    /// 401 - missing or rejected credentials
    Unauthorized,
    /// 403 - authenticated but not allowed
    Forbidden,
    /// 404 - the resource does not exist
    NotFound,
    /// 408 - the backend timed out the request
    RequestTimeout,
    /// 409 - conflicts with current state
    Conflict,
    /// 422 - semantically invalid payload
    UnprocessableEntity,
    /// 429 - rate limit exceeded
    TooManyRequests,
    /// 5xx - backend-side failure
    ServerError,
    /// 503 - backend temporarily unavailable
    ServiceUnavailable,
    /// The request never completed (DNS, connect, TLS, timeout)
    Network,
    /// The response arrived but could not be decoded
    InvalidResponse,
}

impl ErrorKind {
    /// Classify an HTTP status code
    ///
    /// Statuses without a dedicated variant collapse into `BadRequest`
    /// (other 4xx) or `ServerError` (other 5xx / anything unexpected).
    pub const fn from_status(status: u16) -> Self {
        match status {
            400 => ErrorKind::BadRequest,
            401 => ErrorKind::Unauthorized,
            403 => ErrorKind::Forbidden,
            404 => ErrorKind::NotFound,
            408 => ErrorKind::RequestTimeout,
            409 => ErrorKind::Conflict,
            422 => ErrorKind::UnprocessableEntity,
            429 => ErrorKind::TooManyRequests,
            503 => ErrorKind::ServiceUnavailable,
            s if s >= 500 => ErrorKind::ServerError,
            _ => ErrorKind::BadRequest,
        }
    }

    /// Classify a backend error code (the `error.code` envelope field)
    ///
    /// Returns `None` for codes this client does not recognize, letting the
    /// caller fall back to status-based classification.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "BAD_REQUEST" => Some(ErrorKind::BadRequest),
            "UNAUTHORIZED" | "INVALID_TOKEN" | "TOKEN_EXPIRED" => Some(ErrorKind::Unauthorized),
            "FORBIDDEN" => Some(ErrorKind::Forbidden),
            "NOT_FOUND" => Some(ErrorKind::NotFound),
            "CONFLICT" | "ALREADY_EXISTS" => Some(ErrorKind::Conflict),
            "VALIDATION_FAILED" => Some(ErrorKind::UnprocessableEntity),
            "RATE_LIMITED" => Some(ErrorKind::TooManyRequests),
            "INTERNAL_ERROR" => Some(ErrorKind::ServerError),
            _ => None,
        }
    }

    /// HTTP status code this kind maps back to, if it has one
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            ErrorKind::BadRequest => Some(400),
            ErrorKind::Unauthorized => Some(401),
            ErrorKind::Forbidden => Some(403),
            ErrorKind::NotFound => Some(404),
            ErrorKind::RequestTimeout => Some(408),
            ErrorKind::Conflict => Some(409),
            ErrorKind::UnprocessableEntity => Some(422),
            ErrorKind::TooManyRequests => Some(429),
            ErrorKind::ServerError => Some(500),
            ErrorKind::ServiceUnavailable => Some(503),
            ErrorKind::Network | ErrorKind::InvalidResponse => None,
        }
    }

    /// User-facing string representation
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::BadRequest => "Bad Request",
            ErrorKind::Unauthorized => "Unauthorized",
            ErrorKind::Forbidden => "Forbidden",
            ErrorKind::NotFound => "Not Found",
            ErrorKind::RequestTimeout => "Request Timeout",
            ErrorKind::Conflict => "Conflict",
            ErrorKind::UnprocessableEntity => "Unprocessable Entity",
            ErrorKind::TooManyRequests => "Too Many Requests",
            ErrorKind::ServerError => "Server Error",
            ErrorKind::ServiceUnavailable => "Service Unavailable",
            ErrorKind::Network => "Network Error",
            ErrorKind::InvalidResponse => "Invalid Response",
        }
    }

    /// Whether this kind means the credentials were missing or rejected
    #[inline]
    pub const fn is_auth_failure(&self) -> bool {
        matches!(self, ErrorKind::Unauthorized | ErrorKind::Forbidden)
    }

    /// Whether retrying without changes could plausibly succeed
    #[inline]
    pub const fn is_transient(&self) -> bool {
        matches!(
            self,
            ErrorKind::RequestTimeout
                | ErrorKind::TooManyRequests
                | ErrorKind::ServiceUnavailable
                | ErrorKind::Network
        )
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status() {
        assert_eq!(ErrorKind::from_status(400), ErrorKind::BadRequest);
        assert_eq!(ErrorKind::from_status(401), ErrorKind::Unauthorized);
        assert_eq!(ErrorKind::from_status(403), ErrorKind::Forbidden);
        assert_eq!(ErrorKind::from_status(404), ErrorKind::NotFound);
        assert_eq!(ErrorKind::from_status(409), ErrorKind::Conflict);
        assert_eq!(ErrorKind::from_status(422), ErrorKind::UnprocessableEntity);
        assert_eq!(ErrorKind::from_status(429), ErrorKind::TooManyRequests);
        assert_eq!(ErrorKind::from_status(500), ErrorKind::ServerError);
        assert_eq!(ErrorKind::from_status(502), ErrorKind::ServerError);
        assert_eq!(ErrorKind::from_status(503), ErrorKind::ServiceUnavailable);
        // Unmapped 4xx collapses into BadRequest
        assert_eq!(ErrorKind::from_status(418), ErrorKind::BadRequest);
    }

    #[test]
    fn test_from_code() {
        assert_eq!(ErrorKind::from_code("NOT_FOUND"), Some(ErrorKind::NotFound));
        assert_eq!(
            ErrorKind::from_code("TOKEN_EXPIRED"),
            Some(ErrorKind::Unauthorized)
        );
        assert_eq!(
            ErrorKind::from_code("VALIDATION_FAILED"),
            Some(ErrorKind::UnprocessableEntity)
        );
        assert_eq!(ErrorKind::from_code("SOMETHING_ELSE"), None);
    }

    #[test]
    fn test_status_code_round_trip() {
        assert_eq!(ErrorKind::NotFound.status_code(), Some(404));
        assert_eq!(ErrorKind::Network.status_code(), None);
        assert_eq!(ErrorKind::InvalidResponse.status_code(), None);
    }

    #[test]
    fn test_is_auth_failure() {
        assert!(ErrorKind::Unauthorized.is_auth_failure());
        assert!(ErrorKind::Forbidden.is_auth_failure());
        assert!(!ErrorKind::NotFound.is_auth_failure());
    }
}
