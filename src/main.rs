//! Wiring & DI. Entry point: load config, build the delivery client once, serve HTTP.
//! No business logic here.

use anyhow::Context;
use axum::http::HeaderValue;
use contact_relay::adapters::email::{LogOnlyAdapter, ResendAdapter};
use contact_relay::adapters::http;
use contact_relay::ports::{EmailSender, SubmissionPort};
use contact_relay::shared::AppConfig;
use contact_relay::usecases::{DeliveryClient, SubmissionService, DEFAULT_SENDER};
use dotenv::dotenv;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let env_loaded = dotenv();
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match &env_loaded {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(_) => info!(cwd = %cwd.display(), "no .env found (check CWD)"),
    }

    let cfg = AppConfig::load().context("failed to load configuration")?;

    // --- Email capability: Resend when a key is present, log-only otherwise ---
    let sender: Arc<dyn EmailSender> = match cfg.resend_api_key() {
        Some(api_key) => {
            let timeout_secs = cfg.delivery_timeout_secs_or_default();
            info!(
                url = %cfg.resend_api_url_or_default(),
                timeout_secs,
                "email delivery via Resend"
            );
            Arc::new(
                ResendAdapter::new(
                    cfg.resend_api_url_or_default(),
                    api_key,
                    Duration::from_secs(timeout_secs),
                )
                .context("failed to build Resend client")?,
            )
        }
        None => {
            warn!("RESEND_API_KEY not set, notifications will only be logged");
            Arc::new(LogOnlyAdapter::new())
        }
    };

    // --- Delivery client: built once, shared by every request ---
    let delivery = DeliveryClient::new(
        sender,
        DEFAULT_SENDER.to_string(),
        cfg.contact_email_or_default(),
    );
    info!(recipient = %delivery.recipient(), "notifications recipient");
    let submissions: Arc<dyn SubmissionPort> = Arc::new(SubmissionService::new(delivery));

    let allowed_origin = match cfg.allowed_origin.as_deref() {
        Some(origin) => Some(
            HeaderValue::from_str(origin)
                .with_context(|| format!("invalid CONTACT_RELAY_ALLOWED_ORIGIN: {}", origin))?,
        ),
        None => None,
    };

    let app = http::router(submissions, allowed_origin);

    let bind_addr = cfg.bind_addr_or_default();
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;
    info!(addr = %bind_addr, "contact relay listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("contact relay stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
