//! Mail transport: the capability boundary around SMTP.
//!
//! # Responsibilities
//! - Define the [`MailTransport`] capability the relay depends on
//! - Implement it over lettre's pooled async SMTP client
//! - Run the one-time, non-blocking startup connectivity probe
//!
//! # Design Decisions
//! - The relay only ever sees the trait, so tests inject a fake and the
//!   SMTP details stay in this file
//! - Exactly one send attempt per message; no retry or queuing here

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Address, AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::config::MailConfig;
use crate::mail::message::OutboundMessage;
use crate::mail::MailError;

/// Capability interface over the external mail service.
#[async_trait]
pub trait MailTransport: Send + Sync {
    /// Check connectivity and authentication against the provider.
    async fn verify(&self) -> Result<(), MailError>;

    /// Send one message, returning the transport-provided identifier.
    async fn send(&self, message: &OutboundMessage) -> Result<String, MailError>;
}

/// SMTP implementation of [`MailTransport`] backed by lettre.
pub struct SmtpMailer {
    inner: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpMailer {
    /// Build a pooled TLS transport from the mail configuration.
    pub fn from_config(config: &MailConfig) -> Result<Self, MailError> {
        let inner = AsyncSmtpTransport::<Tokio1Executor>::relay(&config.smtp_host)
            .map_err(|e| MailError::Smtp(e.to_string()))?
            .credentials(Credentials::new(
                config.username.clone(),
                config.password.clone(),
            ))
            .timeout(Some(Duration::from_secs(config.timeout_secs)))
            .build();

        Ok(Self { inner })
    }
}

#[async_trait]
impl MailTransport for SmtpMailer {
    async fn verify(&self) -> Result<(), MailError> {
        match self.inner.test_connection().await {
            Ok(true) => Ok(()),
            Ok(false) => Err(MailError::Smtp("server rejected NOOP".to_string())),
            Err(e) => Err(MailError::Smtp(e.to_string())),
        }
    }

    async fn send(&self, message: &OutboundMessage) -> Result<String, MailError> {
        let email = to_lettre(message)?;
        let response = self
            .inner
            .send(email)
            .await
            .map_err(|e| MailError::Smtp(e.to_string()))?;

        let id = response
            .first_line()
            .map(str::to_owned)
            .unwrap_or_else(|| response.code().to_string());
        Ok(id)
    }
}

/// Convert the transport-agnostic message into a lettre [`Message`].
fn to_lettre(message: &OutboundMessage) -> Result<Message, MailError> {
    let from = Mailbox::new(
        Some(message.from_name.clone()),
        parse_address(&message.from_address)?,
    );
    let reply_to = Mailbox::new(None, parse_address(&message.reply_to)?);
    let to = Mailbox::new(None, parse_address(&message.to)?);

    Message::builder()
        .from(from)
        .reply_to(reply_to)
        .to(to)
        .subject(message.subject.clone())
        .header(ContentType::TEXT_HTML)
        .body(message.html_body.clone())
        .map_err(|e| MailError::Build(e.to_string()))
}

fn parse_address(raw: &str) -> Result<Address, MailError> {
    raw.parse()
        .map_err(|_| MailError::InvalidAddress(raw.to_string()))
}

/// Probe transport connectivity at startup without gating traffic.
///
/// Failure is logged and nothing else: routes are registered regardless,
/// and later dispatch attempts report their own errors.
pub fn spawn_startup_probe(transport: Arc<dyn MailTransport>) {
    tokio::spawn(async move {
        match transport.verify().await {
            Ok(()) => tracing::info!("Mail transport verified"),
            Err(error) => tracing::warn!(
                %error,
                "Mail transport verification failed; dispatch will fail until the provider is reachable"
            ),
        }
    });
}
