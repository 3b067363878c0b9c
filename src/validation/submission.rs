//! Contact-form field validation and sanitization.
//!
//! A [`SubmissionForm`] is what the wire gives us; a [`Submission`] is the
//! only thing the mail relay will accept. The conversion trims and strips
//! dangerous characters first, then checks every field, returning the full
//! list of violations rather than stopping at the first.

use serde::Deserialize;
use serde::Serialize;
use validator::ValidateEmail;

/// Maximum accepted length for the submitter name.
const NAME_MAX_CHARS: usize = 256;

/// Maximum accepted length for the message body.
const MESSAGE_MAX_CHARS: usize = 4096;

/// Raw request body for `POST /connect`.
///
/// Every field defaults to the empty string so a missing JSON key becomes
/// a per-field validation error instead of a deserialization failure.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SubmissionForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// A single field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

impl FieldError {
    fn new(field: &'static str, message: &'static str) -> Self {
        Self { field, message }
    }
}

/// A validated, sanitized contact-form submission.
///
/// Invariants: all fields are non-empty after trimming, `name` contains no
/// CR/LF/NUL, `email` satisfies the address grammar and is lowercased.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl Submission {
    /// Sanitize and validate a raw form.
    ///
    /// Returns every violation at once; any violation means the form is
    /// rejected and the relay is never invoked.
    pub fn parse(form: SubmissionForm) -> Result<Submission, Vec<FieldError>> {
        // Name and email flow into message headers, so line breaks are
        // stripped outright. The message keeps its newlines for the body.
        let name = strip_header_chars(&form.name);
        let email = strip_header_chars(&form.email).to_lowercase();
        let message = strip_nul(form.message.trim());

        let mut errors = Vec::new();

        if name.is_empty() {
            errors.push(FieldError::new("name", "Name is required"));
        } else if name.chars().count() > NAME_MAX_CHARS {
            errors.push(FieldError::new("name", "Name is too long"));
        }

        if !email.validate_email() {
            errors.push(FieldError::new(
                "email",
                "A valid email address is required",
            ));
        }

        if message.is_empty() {
            errors.push(FieldError::new("message", "Message is required"));
        } else if message.chars().count() > MESSAGE_MAX_CHARS {
            errors.push(FieldError::new("message", "Message is too long"));
        }

        if errors.is_empty() {
            Ok(Submission {
                name,
                email,
                message,
            })
        } else {
            Err(errors)
        }
    }
}

/// Trim and remove CR, LF and NUL from a header-bound value.
fn strip_header_chars(input: &str) -> String {
    input
        .trim()
        .chars()
        .filter(|c| !matches!(c, '\r' | '\n' | '\0'))
        .collect()
}

/// Remove NUL and CR while preserving line structure (CRLF becomes LF).
fn strip_nul(input: &str) -> String {
    input.chars().filter(|c| !matches!(c, '\0' | '\r')).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, email: &str, message: &str) -> SubmissionForm {
        SubmissionForm {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn accepts_valid_submission() {
        let submission = Submission::parse(form("Alice", "alice@example.com", "Hello")).unwrap();
        assert_eq!(submission.name, "Alice");
        assert_eq!(submission.email, "alice@example.com");
        assert_eq!(submission.message, "Hello");
    }

    #[test]
    fn trims_surrounding_whitespace() {
        let submission =
            Submission::parse(form("  Alice ", " ALICE@Example.COM ", "  hi  ")).unwrap();
        assert_eq!(submission.name, "Alice");
        assert_eq!(submission.email, "alice@example.com");
        assert_eq!(submission.message, "hi");
    }

    #[test]
    fn rejects_empty_name() {
        let errors = Submission::parse(form("   ", "x@x.com", "hi")).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "name");
    }

    #[test]
    fn rejects_invalid_email() {
        let errors = Submission::parse(form("Alice", "not-an-email", "hi")).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "email");
    }

    #[test]
    fn collects_all_field_errors() {
        let errors = Submission::parse(form("", "", "")).unwrap_err();
        let fields: Vec<&str> = errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["name", "email", "message"]);
    }

    #[test]
    fn strips_line_breaks_from_name() {
        let submission =
            Submission::parse(form("Alice\r\nBcc: spam@spam", "a@b.com", "hi")).unwrap();
        assert_eq!(submission.name, "AliceBcc: spam@spam");
    }

    #[test]
    fn preserves_newlines_in_message() {
        let submission = Submission::parse(form("Alice", "a@b.com", "line one\nline two")).unwrap();
        assert_eq!(submission.message, "line one\nline two");
    }

    #[test]
    fn rejects_overlong_name() {
        let errors = Submission::parse(form(&"x".repeat(257), "a@b.com", "hi")).unwrap_err();
        assert_eq!(errors[0].field, "name");
    }

    #[test]
    fn rejects_overlong_message() {
        let errors = Submission::parse(form("Alice", "a@b.com", &"x".repeat(4097))).unwrap_err();
        assert_eq!(errors[0].field, "message");
    }
}
