//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → tracing events (structured, request id attached by the server)
//!     → metrics.rs (counters via the metrics facade)
//!
//! Consumers:
//!     → Log aggregation (stdout, EnvFilter-controlled)
//!     → Metrics endpoint (Prometheus scrape, optional)
//! ```
//!
//! # Design Decisions
//! - Logging setup lives in main; this module owns the metrics exporter
//! - Recording without an installed exporter is a cheap no-op

pub mod metrics;
