//! Contact Relay
//!
//! A minimal backend that accepts contact-form submissions over HTTP,
//! validates and sanitizes them, and relays each one as an email to a
//! fixed recipient through an external SMTP provider.
//!
//! # Architecture Overview
//!
//! ```text
//!                    ┌──────────────────────────────────────────────┐
//!                    │                CONTACT RELAY                  │
//!                    │                                               │
//!  POST /connect     │  ┌────────┐   ┌─────────┐   ┌────────────┐   │
//!  ──────────────────┼─▶│ origin │──▶│  rate   │──▶│ validation │   │
//!                    │  │  gate  │   │ limiter │   │ + sanitize │   │
//!                    │  └────────┘   └─────────┘   └─────┬──────┘   │
//!                    │                                    │          │
//!                    │                                    ▼          │
//!  JSON response     │  ┌─────────┐               ┌────────────┐    │
//!  ◀─────────────────┼──│ error / │◀──────────────│ mail relay │────┼──▶ SMTP
//!                    │  │ success │               │ (1 attempt)│    │   provider
//!                    │  └─────────┘               └────────────┘    │
//!                    │                                               │
//!                    │  Cross-cutting: config (env), tracing,        │
//!                    │  metrics, request ids, graceful shutdown      │
//!                    └──────────────────────────────────────────────┘
//! ```
//!
//! Each failing stage short-circuits straight to the response; nothing is
//! persisted and no request outcome affects the process.

pub mod config;
pub mod http;
pub mod mail;
pub mod observability;
pub mod security;
pub mod validation;

pub use config::RelayConfig;
pub use http::HttpServer;
pub use mail::{MailTransport, SmtpMailer};
