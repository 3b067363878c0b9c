//! Mail relay: turns validated submissions into dispatched email.

use std::sync::Arc;

use crate::config::MailConfig;
use crate::mail::message::OutboundMessage;
use crate::mail::transport::MailTransport;
use crate::mail::MailError;
use crate::validation::Submission;

/// Dispatches validated submissions through the configured transport.
///
/// Holds the process-scoped operator and recipient addresses; one relay is
/// constructed at startup and shared by every request.
pub struct MailRelay {
    transport: Arc<dyn MailTransport>,
    operator: String,
    recipient: String,
}

impl MailRelay {
    pub fn new(transport: Arc<dyn MailTransport>, config: &MailConfig) -> Self {
        Self {
            transport,
            operator: config.username.clone(),
            recipient: config.recipient.clone(),
        }
    }

    /// Build and send the outbound message. Exactly one attempt.
    ///
    /// The transport identifier is returned for logging; callers surface
    /// failures to the client as a generic error while the cause is logged
    /// with full detail server-side.
    pub async fn dispatch(&self, submission: &Submission) -> Result<String, MailError> {
        let message = OutboundMessage::build(submission, &self.operator, &self.recipient);
        let transport_id = self.transport.send(&message).await?;

        tracing::info!(
            transport_id = %transport_id,
            reply_to = %submission.email,
            "Submission relayed"
        );

        Ok(transport_id)
    }
}
