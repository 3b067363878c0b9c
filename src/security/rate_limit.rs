//! Fixed-window rate limiting middleware.

use std::collections::HashMap;
use std::net::{IpAddr, SocketAddr};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use axum::{
    body::Body,
    extract::{ConnectInfo, State},
    http::Request,
    middleware::Next,
    response::Response,
};

use crate::config::RateLimitConfig;
use crate::http::error::ApiError;
use crate::observability::metrics;

/// One client's fixed window: a counter anchored at the first request.
struct FixedWindow {
    started: Instant,
    count: u32,
}

impl FixedWindow {
    fn new(now: Instant) -> Self {
        Self {
            started: now,
            count: 0,
        }
    }

    /// Count one request against the window.
    ///
    /// Resets the counter in place when the window has elapsed. Returns
    /// the time until reset when the request is over budget.
    fn try_admit(&mut self, now: Instant, max_requests: u32, window: Duration) -> Result<(), Duration> {
        if now.duration_since(self.started) >= window {
            self.started = now;
            self.count = 0;
        }

        self.count = self.count.saturating_add(1);
        if self.count > max_requests {
            Err(window.saturating_sub(now.duration_since(self.started)))
        } else {
            Ok(())
        }
    }
}

/// State for the fixed-window rate limiter.
///
/// Windows are created lazily per client identity and never evicted; the
/// map lives for the process and is cleared by a restart.
pub struct RateLimiterState {
    windows: Mutex<HashMap<IpAddr, FixedWindow>>,
    max_requests: u32,
    window: Duration,
}

impl RateLimiterState {
    pub fn new(config: &RateLimitConfig) -> Self {
        Self {
            windows: Mutex::new(HashMap::new()),
            max_requests: config.max_requests,
            window: Duration::from_secs(config.window_secs),
        }
    }

    /// Admit or reject one request from a client identity.
    ///
    /// The whole read-increment-compare runs under one lock acquisition so
    /// concurrent requests from the same identity cannot race past the
    /// limit.
    pub fn check(&self, client: IpAddr) -> Result<(), Duration> {
        let now = Instant::now();
        let mut windows = self.windows.lock().expect("rate limiter mutex poisoned");
        windows
            .entry(client)
            .or_insert_with(|| FixedWindow::new(now))
            .try_admit(now, self.max_requests, self.window)
    }
}

/// Middleware applied to the submission route only.
pub async fn rate_limit_middleware(
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    State(state): State<Arc<RateLimiterState>>,
    request: Request<Body>,
    next: Next,
) -> Result<Response, ApiError> {
    match state.check(addr.ip()) {
        Ok(()) => Ok(next.run(request).await),
        Err(retry_after) => {
            tracing::warn!(client = %addr.ip(), "Rate limit exceeded");
            metrics::record_rate_limited();
            Err(ApiError::RateLimited { retry_after })
        }
    }
}
