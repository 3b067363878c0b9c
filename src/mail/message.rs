//! Outbound message construction.

use crate::validation::Submission;

/// A transport-agnostic outbound email.
///
/// Built fresh from a validated [`Submission`] for every accepted request
/// and handed to the transport; holding plain fields keeps test transports
/// able to record and inspect exactly what would be sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundMessage {
    /// Display name on the From header (the submitter).
    pub from_name: String,
    /// Address on the From header (the operator account).
    pub from_address: String,
    /// Reply-To: the submitter's validated address.
    pub reply_to: String,
    /// The fixed configured recipient.
    pub to: String,
    pub subject: String,
    /// Escaped HTML rendering of the submission.
    pub html_body: String,
}

impl OutboundMessage {
    /// Build the outbound message for a submission.
    ///
    /// The From address is always the operator account (SMTP providers
    /// reject forged senders); the submitter lands in the display name and
    /// Reply-To so replying in a mail client just works.
    pub fn build(submission: &Submission, operator: &str, recipient: &str) -> Self {
        Self {
            from_name: submission.name.clone(),
            from_address: operator.to_string(),
            reply_to: submission.email.clone(),
            to: recipient.to_string(),
            subject: format!("New contact form submission from {}", submission.name),
            html_body: render_html(submission),
        }
    }
}

fn render_html(submission: &Submission) -> String {
    let message = escape_html(&submission.message).replace('\n', "<br>\n");
    format!(
        "<h2>New contact form submission</h2>\n\
         <p><strong>Name:</strong> {}</p>\n\
         <p><strong>Email:</strong> {}</p>\n\
         <p><strong>Message:</strong></p>\n\
         <p>{}</p>\n",
        escape_html(&submission.name),
        escape_html(&submission.email),
        message,
    )
}

/// Escape the five HTML-significant characters.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission() -> Submission {
        Submission {
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
            message: "Hello there".to_string(),
        }
    }

    #[test]
    fn builds_headers_from_submission() {
        let message = OutboundMessage::build(&submission(), "op@example.com", "inbox@example.com");

        assert_eq!(message.from_name, "Alice");
        assert_eq!(message.from_address, "op@example.com");
        assert_eq!(message.reply_to, "alice@example.com");
        assert_eq!(message.to, "inbox@example.com");
        assert!(message.subject.contains("Alice"));
    }

    #[test]
    fn escapes_html_in_body() {
        let mut s = submission();
        s.message = "<script>alert('x')</script>".to_string();

        let message = OutboundMessage::build(&s, "op@example.com", "inbox@example.com");
        assert!(!message.html_body.contains("<script>"));
        assert!(message.html_body.contains("&lt;script&gt;"));
    }

    #[test]
    fn renders_newlines_as_breaks() {
        let mut s = submission();
        s.message = "line one\nline two".to_string();

        let message = OutboundMessage::build(&s, "op@example.com", "inbox@example.com");
        assert!(message.html_body.contains("line one<br>"));
    }

    #[test]
    fn escape_covers_all_significant_chars() {
        assert_eq!(escape_html(r#"&<>"'"#), "&amp;&lt;&gt;&quot;&#39;");
    }
}
