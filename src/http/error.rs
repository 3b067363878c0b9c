//! Request error taxonomy and response mapping.

use std::time::Duration;

use axum::http::{header::RETRY_AFTER, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use crate::mail::MailError;
use crate::validation::FieldError;

/// Everything that can terminate a request short of success.
///
/// Gates and the handler all return this, so the short-circuit pipeline
/// (origin → rate limit → validation → dispatch) maps onto plain `Result`
/// flow instead of framework-specific error chaining.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Declared origin is not on the allow-list.
    #[error("origin not allowed")]
    OriginRejected,

    /// Client exceeded the fixed-window budget.
    #[error("rate limit exceeded")]
    RateLimited { retry_after: Duration },

    /// One or more submission fields failed validation.
    #[error("validation failed")]
    Validation(Vec<FieldError>),

    /// The mail transport failed; detail is logged, never returned.
    #[error(transparent)]
    Transport(#[from] MailError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::OriginRejected => {
                (StatusCode::FORBIDDEN, "Origin not allowed by CORS policy").into_response()
            }
            ApiError::RateLimited { retry_after } => (
                StatusCode::TOO_MANY_REQUESTS,
                [(RETRY_AFTER, retry_after.as_secs().max(1).to_string())],
                "Too many submissions from this address, please try again later.",
            )
                .into_response(),
            ApiError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "errors": errors })),
            )
                .into_response(),
            ApiError::Transport(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "message": "Error sending message" })),
            )
                .into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_variants_to_statuses() {
        assert_eq!(
            ApiError::OriginRejected.into_response().status(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            ApiError::RateLimited {
                retry_after: Duration::from_secs(60)
            }
            .into_response()
            .status(),
            StatusCode::TOO_MANY_REQUESTS
        );
        assert_eq!(
            ApiError::Validation(vec![]).into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Transport(MailError::Smtp("down".to_string()))
                .into_response()
                .status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn throttle_response_carries_retry_after() {
        let response = ApiError::RateLimited {
            retry_after: Duration::from_secs(42),
        }
        .into_response();

        assert_eq!(response.headers()[RETRY_AFTER], "42");
    }

    #[test]
    fn retry_after_is_at_least_one_second() {
        let response = ApiError::RateLimited {
            retry_after: Duration::ZERO,
        }
        .into_response();

        assert_eq!(response.headers()[RETRY_AFTER], "1");
    }
}
