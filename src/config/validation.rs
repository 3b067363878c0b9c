//! Configuration validation.
//!
//! Semantic checks on a loaded [`RelayConfig`]: the loader handles the
//! syntactic layer, this module verifies that values make sense together.
//! Validation is a pure function and returns all violations, not just the
//! first, so a bad deploy surfaces every problem in one pass.

use std::net::SocketAddr;

use thiserror::Error;
use url::Url;
use validator::ValidateEmail;

use crate::config::schema::RelayConfig;

/// A single semantic violation in the configuration.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("listener bind address {0:?} is not a valid socket address")]
    BindAddress(String),

    #[error("allowed origin {0:?} is not a valid http(s) URL")]
    Origin(String),

    #[error("{field} {value:?} is not a valid email address")]
    MailAddress { field: &'static str, value: String },

    #[error("{0} must be greater than zero")]
    ZeroValue(&'static str),
}

/// Validate a loaded configuration, collecting every violation.
pub fn validate_config(config: &RelayConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::BindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    for origin in &config.cors.allowed_origins {
        let valid = Url::parse(origin)
            .map(|url| matches!(url.scheme(), "http" | "https"))
            .unwrap_or(false);
        if !valid {
            errors.push(ValidationError::Origin(origin.clone()));
        }
    }

    if !config.mail.username.validate_email() {
        errors.push(ValidationError::MailAddress {
            field: "operator address",
            value: config.mail.username.clone(),
        });
    }
    if !config.mail.recipient.validate_email() {
        errors.push(ValidationError::MailAddress {
            field: "recipient address",
            value: config.mail.recipient.clone(),
        });
    }

    if config.rate_limit.enabled && config.rate_limit.max_requests == 0 {
        errors.push(ValidationError::ZeroValue("rate_limit.max_requests"));
    }
    if config.rate_limit.enabled && config.rate_limit.window_secs == 0 {
        errors.push(ValidationError::ZeroValue("rate_limit.window_secs"));
    }
    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroValue("timeouts.request_secs"));
    }
    if config.mail.timeout_secs == 0 {
        errors.push(ValidationError::ZeroValue("mail.timeout_secs"));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> RelayConfig {
        let mut config = RelayConfig::default();
        config.mail.username = "operator@example.com".to_string();
        config.mail.recipient = "inbox@example.com".to_string();
        config.cors.allowed_origins = vec!["https://site.example".to_string()];
        config
    }

    #[test]
    fn accepts_valid_config() {
        assert!(validate_config(&valid_config()).is_ok());
    }

    #[test]
    fn collects_all_violations() {
        let mut config = valid_config();
        config.listener.bind_address = "not-an-address".to_string();
        config.mail.recipient = "not-an-email".to_string();
        config.rate_limit.max_requests = 0;

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn rejects_non_http_origin() {
        let mut config = valid_config();
        config.cors.allowed_origins = vec!["ftp://site.example".to_string()];
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn rejects_bare_host_origin() {
        let mut config = valid_config();
        config.cors.allowed_origins = vec!["site.example".to_string()];
        assert!(validate_config(&config).is_err());
    }
}
