//! Input validation subsystem.
//!
//! # Data Flow
//! ```text
//! POST /connect body (JSON)
//!     → SubmissionForm (lenient deserialization, missing keys allowed)
//!     → sanitize (trim, strip header-injection characters)
//!     → validate (presence, length, email grammar)
//!     → Submission (invariants hold) | Vec<FieldError> (terminal 400)
//! ```
//!
//! # Design Decisions
//! - All violations are reported at once, not just the first
//! - Sanitization happens before validation so checks see final values
//! - A `Submission` is only constructible through `parse`

pub mod submission;

pub use submission::{FieldError, Submission, SubmissionForm};
