//! Origin allow-list gate and CORS headers.

use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::{
        header::{ACCEPT, CONTENT_TYPE, ORIGIN},
        HeaderValue, Method, Request,
    },
    middleware::Next,
    response::Response,
};
use tower_http::cors::CorsLayer;

use crate::config::CorsConfig;
use crate::http::error::ApiError;
use crate::observability::metrics;

/// State for the origin gate.
pub struct OriginGateState {
    allowed: Vec<String>,
}

impl OriginGateState {
    pub fn new(config: &CorsConfig) -> Self {
        Self {
            allowed: config.allowed_origins.clone(),
        }
    }
}

/// Allow-list membership check.
///
/// A request without an `Origin` header is a non-browser client and always
/// passes; a declared origin must match an allow-list entry exactly.
pub fn origin_allowed(origin: Option<&str>, allowed: &[String]) -> bool {
    match origin {
        None => true,
        Some(origin) => allowed.iter().any(|entry| entry == origin),
    }
}

/// Middleware rejecting disallowed origins before any handler logic.
pub async fn origin_gate_middleware(
    State(state): State<Arc<OriginGateState>>,
    request: Request<Body>,
    next: Next,
) -> Result<Response, ApiError> {
    let origin = request
        .headers()
        .get(ORIGIN)
        .and_then(|value| value.to_str().ok());

    if origin_allowed(origin, &state.allowed) {
        Ok(next.run(request).await)
    } else {
        tracing::warn!(origin = ?origin, "Origin rejected");
        metrics::record_origin_rejected();
        Err(ApiError::OriginRejected)
    }
}

/// CORS response-header layer for the allowed origins.
///
/// Credentialed GET/POST from the configured origins; preflight is
/// answered here before the gate or any handler runs.
pub fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE, ACCEPT])
        .allow_credentials(true)
        .allow_origin(origins)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn allowed() -> Vec<String> {
        vec![
            "https://site.example".to_string(),
            "http://localhost:3000".to_string(),
        ]
    }

    #[test]
    fn absent_origin_passes() {
        assert!(origin_allowed(None, &allowed()));
    }

    #[test]
    fn listed_origin_passes() {
        assert!(origin_allowed(Some("http://localhost:3000"), &allowed()));
    }

    #[test]
    fn unlisted_origin_is_rejected() {
        assert!(!origin_allowed(Some("https://evil.example"), &allowed()));
    }

    #[test]
    fn match_is_exact_not_prefix() {
        assert!(!origin_allowed(
            Some("https://site.example.evil.example"),
            &allowed()
        ));
    }

    #[test]
    fn empty_list_rejects_every_browser_origin() {
        assert!(!origin_allowed(Some("https://site.example"), &[]));
        assert!(origin_allowed(None, &[]));
    }
}
