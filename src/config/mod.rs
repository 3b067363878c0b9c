//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! process environment (CORS, EMAIL_*, PORT, ...)
//!     → loader.rs (read & parse)
//!     → validation.rs (semantic checks)
//!     → RelayConfig (validated, immutable)
//!     → shared with the server and transport at startup
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; there is no reload path
//! - All fields have defaults so only credentials are mandatory
//! - Validation separates syntactic (loader) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::ConfigError;
pub use schema::CorsConfig;
pub use schema::MailConfig;
pub use schema::RateLimitConfig;
pub use schema::RelayConfig;
