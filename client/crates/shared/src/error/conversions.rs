//! Error conversions - From implementations for common error types
//!
//! Provides automatic conversion from common error types to [`ApiError`].

use super::api_error::ApiError;

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_syntax() || err.is_data() || err.is_eof() {
            ApiError::invalid_response("Response body could not be decoded").with_source(err)
        } else {
            ApiError::server("JSON serialization failed").with_source(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::kind::ErrorKind;

    #[test]
    fn test_decode_error_is_invalid_response() {
        let err = serde_json::from_str::<u32>("not json").unwrap_err();
        let api: ApiError = err.into();
        assert_eq!(api.kind(), ErrorKind::InvalidResponse);
    }
}
