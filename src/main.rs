//! Process entry point for the contact relay.

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use contact_relay::config::RelayConfig;
use contact_relay::http::HttpServer;
use contact_relay::mail::{spawn_startup_probe, MailTransport, SmtpMailer};
use contact_relay::observability::metrics;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "contact_relay=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("contact-relay v0.1.0 starting");

    let config = RelayConfig::from_env()?;

    tracing::info!(
        bind_address = %config.listener.bind_address,
        allowed_origins = config.cors.allowed_origins.len(),
        rate_limit = config.rate_limit.max_requests,
        window_secs = config.rate_limit.window_secs,
        smtp_host = %config.mail.smtp_host,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        if let Ok(addr) = config.observability.metrics_address.parse() {
            metrics::init_metrics(addr);
        } else {
            tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            );
        }
    }

    // One-time connectivity probe; failure is logged, never fatal.
    let transport: Arc<dyn MailTransport> = Arc::new(SmtpMailer::from_config(&config.mail)?);
    spawn_startup_probe(transport.clone());

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        "Listening for connections"
    );

    let server = HttpServer::new(config, transport);
    server.run(listener).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
