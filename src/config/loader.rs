//! Configuration loading from the environment.

use std::env;

use crate::config::schema::RelayConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    /// A required environment variable is not set.
    Missing(&'static str),
    /// An environment variable is set but could not be parsed.
    Invalid(&'static str, String),
    /// The loaded configuration failed semantic validation.
    Validation(Vec<ValidationError>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Missing(name) => write!(f, "missing environment variable {}", name),
            ConfigError::Invalid(name, reason) => {
                write!(f, "invalid value for {}: {}", name, reason)
            }
            ConfigError::Validation(errors) => {
                write!(f, "validation failed: ")?;
                for (i, err) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", err)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ConfigError {}

fn required(name: &'static str) -> Result<String, ConfigError> {
    env::var(name).map_err(|_| ConfigError::Missing(name))
}

/// Split a comma-separated origin list, dropping empty entries.
pub fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

impl RelayConfig {
    /// Load and validate configuration from the process environment.
    ///
    /// Reads `CORS`, `EMAIL_USER`, `EMAIL_PASS`, `EMAIL_TO`, `PORT`
    /// (default 5000), `SMTP_HOST` (default smtp.gmail.com) and the
    /// optional `METRICS_ADDRESS`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = RelayConfig::default();

        if let Ok(raw) = env::var("CORS") {
            config.cors.allowed_origins = parse_origins(&raw);
        }

        config.mail.username = required("EMAIL_USER")?;
        config.mail.password = required("EMAIL_PASS")?;
        config.mail.recipient = required("EMAIL_TO")?;

        if let Ok(host) = env::var("SMTP_HOST") {
            config.mail.smtp_host = host;
        }

        if let Ok(raw) = env::var("PORT") {
            let port: u16 = raw
                .parse()
                .map_err(|_| ConfigError::Invalid("PORT", raw.clone()))?;
            config.listener.bind_address = format!("0.0.0.0:{}", port);
        }

        if let Ok(addr) = env::var("METRICS_ADDRESS") {
            config.observability.metrics_enabled = true;
            config.observability.metrics_address = addr;
        }

        validate_config(&config).map_err(ConfigError::Validation)?;

        Ok(config)
    }
}
