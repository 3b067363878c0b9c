//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the relay.
//! Configuration is environment-provided and loaded once at startup; every
//! section carries production-sane defaults so only the mail credentials
//! and recipient are mandatory.

/// Root configuration for the contact relay.
#[derive(Debug, Clone, Default)]
pub struct RelayConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Cross-origin allow-list.
    pub cors: CorsConfig,

    /// Submission rate limiting.
    pub rate_limit: RateLimitConfig,

    /// Outbound mail transport settings.
    pub mail: MailConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Request hardening limits.
    pub security: SecurityConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:5000").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:5000".to_string(),
        }
    }
}

/// Cross-origin allow-list configuration.
///
/// Origins are matched exactly against the request's `Origin` header.
/// An empty list means no browser origin is allowed; requests without an
/// `Origin` header (curl, server-to-server) always pass the gate.
#[derive(Debug, Clone, Default)]
pub struct CorsConfig {
    /// Allowed origins (e.g., "https://example.com").
    pub allowed_origins: Vec<String>,
}

/// Rate limiting configuration for the submission route.
#[derive(Debug, Clone)]
pub struct RateLimitConfig {
    /// Enable rate limiting.
    pub enabled: bool,

    /// Maximum requests per client identity inside one window.
    pub max_requests: u32,

    /// Fixed window length in seconds.
    pub window_secs: u64,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_requests: 10,
            window_secs: 15 * 60,
        }
    }
}

/// Outbound mail transport configuration.
#[derive(Debug, Clone)]
pub struct MailConfig {
    /// SMTP relay hostname.
    pub smtp_host: String,

    /// Operator account used to authenticate and as the From address.
    pub username: String,

    /// App-level secret for the operator account.
    pub password: String,

    /// Fixed recipient for every relayed submission.
    pub recipient: String,

    /// Transport-level timeout for connect/send in seconds.
    pub timeout_secs: u64,
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            smtp_host: "smtp.gmail.com".to_string(),
            username: String::new(),
            password: String::new(),
            recipient: String::new(),
            timeout_secs: 10,
        }
    }
}

/// Timeout configuration for request handling.
#[derive(Debug, Clone)]
pub struct TimeoutConfig {
    /// Request timeout (total time for request/response) in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Request hardening configuration.
#[derive(Debug, Clone)]
pub struct SecurityConfig {
    /// Maximum request body size in bytes.
    pub max_body_size: usize,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            max_body_size: 64 * 1024,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone)]
pub struct ObservabilityConfig {
    /// Enable the Prometheus metrics exporter.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}
