//! Auth Boundary Error Types
//!
//! Repositories surface [`kernel::ApiError`] unchanged; the session service
//! absorbs every failure and re-expresses it as an [`AuthFailure`] value so
//! the presentation layer never handles exceptions for expected auth
//! outcomes (bad credentials, expired session).

use kernel::error::api_error::ApiError;
use thiserror::Error;

/// Fallback text for failures that carry no usable message
///
/// Covers backend responses with empty envelopes and any non-descriptive
/// failure value; callers may rely on this literal.
pub const UNKNOWN_ERROR_MESSAGE: &str = "Unknown error occurred";

/// An expected authentication failure, expressed as data
///
/// The session service guarantees this is the only failure shape it ever
/// returns; it is exhaustively matchable and safe to display.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct AuthFailure {
    pub message: String,
}

impl AuthFailure {
    pub fn new(message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            message: if message.trim().is_empty() {
                UNKNOWN_ERROR_MESSAGE.to_string()
            } else {
                message
            },
        }
    }
}

impl From<ApiError> for AuthFailure {
    fn from(err: ApiError) -> Self {
        Self::new(err.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kernel::error::kind::ErrorKind;

    #[test]
    fn test_from_api_error_keeps_message() {
        let failure = AuthFailure::from(ApiError::unauthorized("Invalid credentials"));
        assert_eq!(failure.message, "Invalid credentials");
    }

    #[test]
    fn test_empty_message_uses_fallback() {
        let failure = AuthFailure::from(ApiError::new(ErrorKind::ServerError, ""));
        assert_eq!(failure.message, UNKNOWN_ERROR_MESSAGE);
        assert_eq!(AuthFailure::new("  ").message, UNKNOWN_ERROR_MESSAGE);
    }
}
