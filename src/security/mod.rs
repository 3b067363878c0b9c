//! Security subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming request:
//!     → origin.rs (allow-list gate, CORS headers)
//!     → rate_limit.rs (fixed-window per-IP throttle, submission route)
//!     → Pass to validation and the relay
//! ```
//!
//! # Design Decisions
//! - Fail closed: a declared origin must be on the list
//! - Gates run before any handler logic and short-circuit the request
//! - No trust in client input

pub mod origin;
pub mod rate_limit;

pub use origin::{cors_layer, origin_gate_middleware, OriginGateState};
pub use rate_limit::{rate_limit_middleware, RateLimiterState};
