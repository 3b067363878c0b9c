//! Mail subsystem.
//!
//! # Data Flow
//! ```text
//! Validated Submission
//!     → relay.rs (compose OutboundMessage, single dispatch)
//!     → transport.rs (MailTransport capability → lettre SMTP)
//!     → external provider (identifier on success, error otherwise)
//!
//! At startup:
//!     transport.rs::spawn_startup_probe
//!     → verify() once, log outcome, never gate serving
//! ```
//!
//! # Design Decisions
//! - The relay depends on the MailTransport trait, not on lettre, so
//!   tests run with a recording fake and no network
//! - No retry and no queuing: a failed dispatch is surfaced to the
//!   caller, who may resubmit

pub mod message;
pub mod relay;
pub mod transport;

pub use message::OutboundMessage;
pub use relay::MailRelay;
pub use transport::{spawn_startup_probe, MailTransport, SmtpMailer};

use thiserror::Error;

/// Errors from composing or dispatching outbound mail.
#[derive(Debug, Error)]
pub enum MailError {
    /// A configured or derived mailbox address did not parse.
    #[error("invalid email address: {0}")]
    InvalidAddress(String),

    /// The outbound message could not be assembled.
    #[error("failed to build message: {0}")]
    Build(String),

    /// The SMTP provider rejected the connection or the message.
    #[error("SMTP error: {0}")]
    Smtp(String),
}
