//! Shared utilities for integration testing.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::net::TcpListener;

use contact_relay::config::RelayConfig;
use contact_relay::http::HttpServer;
use contact_relay::mail::{MailError, MailTransport, OutboundMessage};

/// Transport double that records every message it is asked to send.
pub struct RecordingTransport {
    sent: Mutex<Vec<OutboundMessage>>,
    fail: AtomicBool,
}

impl RecordingTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            sent: Mutex::new(Vec::new()),
            fail: AtomicBool::new(false),
        })
    }

    /// A transport whose every send fails, as if the provider is down.
    #[allow(dead_code)]
    pub fn failing() -> Arc<Self> {
        let transport = Self::new();
        transport.fail.store(true, Ordering::SeqCst);
        transport
    }

    pub fn sent_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }

    #[allow(dead_code)]
    pub fn last_sent(&self) -> Option<OutboundMessage> {
        self.sent.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl MailTransport for RecordingTransport {
    async fn verify(&self) -> Result<(), MailError> {
        Ok(())
    }

    async fn send(&self, message: &OutboundMessage) -> Result<String, MailError> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(MailError::Smtp("connection refused".to_string()));
        }
        self.sent.lock().unwrap().push(message.clone());
        Ok("250 2.0.0 OK".to_string())
    }
}

/// A config wired for tests: one allowed origin, fake operator account.
pub fn test_config() -> RelayConfig {
    let mut config = RelayConfig::default();
    config.cors.allowed_origins = vec!["http://localhost:3000".to_string()];
    config.mail.username = "operator@example.com".to_string();
    config.mail.password = "app-secret".to_string();
    config.mail.recipient = "inbox@example.com".to_string();
    config
}

/// Start a server on an ephemeral port and return its base URL.
pub async fn spawn_app(config: RelayConfig, transport: Arc<RecordingTransport>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let server = HttpServer::new(config, transport);
    tokio::spawn(async move {
        let _ = server.run(listener).await;
    });

    format!("http://{}", addr)
}
