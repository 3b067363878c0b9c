//! Route handlers: readiness and submission.

use axum::extract::State;
use axum::http::HeaderMap;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

use crate::http::error::ApiError;
use crate::http::request::X_REQUEST_ID;
use crate::http::server::AppState;
use crate::observability::metrics;
use crate::validation::{Submission, SubmissionForm};

/// `GET /` readiness probe. Never gated by the abuse limiter.
pub async fn readiness() -> &'static str {
    "Contact relay is running"
}

/// `POST /connect` submission handler.
///
/// Runs after the origin gate and rate limiter; validates the form, then
/// hands the submission to the relay for exactly one dispatch attempt.
pub async fn submit(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(form): Json<SubmissionForm>,
) -> Result<impl IntoResponse, ApiError> {
    let request_id = headers
        .get(X_REQUEST_ID)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("unknown")
        .to_string();

    let submission = Submission::parse(form).map_err(|errors| {
        tracing::debug!(
            request_id = %request_id,
            fields = ?errors.iter().map(|e| e.field).collect::<Vec<_>>(),
            "Submission rejected by validation"
        );
        metrics::record_submission(400);
        ApiError::Validation(errors)
    })?;

    match state.relay.dispatch(&submission).await {
        Ok(_transport_id) => {
            metrics::record_submission(200);
            Ok(Json(json!({ "message": "Message sent successfully!" })))
        }
        Err(error) => {
            // Full cause stays server-side; the caller gets a generic 500.
            tracing::error!(request_id = %request_id, %error, "Mail dispatch failed");
            metrics::record_dispatch_failure();
            metrics::record_submission(500);
            Err(ApiError::Transport(error))
        }
    }
}
