//! Application configuration. Provider credentials, recipient, listener.

use serde::Deserialize;

/// Inbox that receives notifications when nothing else is configured.
pub const DEFAULT_CONTACT_EMAIL: &str = "hello@example.com";

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

/// Upper bound for one provider call. The relay never retries, so this only
/// caps how long a visitor waits for an answer.
pub const DEFAULT_DELIVERY_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    /// Listen address. Read from CONTACT_RELAY_BIND_ADDR.
    #[serde(default)]
    pub bind_addr: Option<String>,

    // ─────────────────────────────────────────────────────────────────────────
    // Email Provider (Resend)
    // ─────────────────────────────────────────────────────────────────────────
    /// Resend API key. Read from CONTACT_RELAY_RESEND_API_KEY or RESEND_API_KEY.
    #[serde(default)]
    pub resend_api_key: Option<String>,

    /// Send endpoint. Defaults to Resend. Read from CONTACT_RELAY_RESEND_API_URL.
    #[serde(default)]
    pub resend_api_url: Option<String>,

    /// Destination inbox. Read from CONTACT_RELAY_CONTACT_EMAIL or CONTACT_EMAIL.
    #[serde(default)]
    pub contact_email: Option<String>,

    /// Provider request timeout in seconds (default 10). Read from CONTACT_RELAY_DELIVERY_TIMEOUT_SECS.
    #[serde(default)]
    pub delivery_timeout_secs: Option<u64>,

    // ─────────────────────────────────────────────────────────────────────────
    // Browser access
    // ─────────────────────────────────────────────────────────────────────────
    /// Site origin allowed by CORS (e.g. https://www.example.com). Read from CONTACT_RELAY_ALLOWED_ORIGIN.
    #[serde(default)]
    pub allowed_origin: Option<String>,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        let mut c = config::Config::builder();
        c = c.add_source(config::Environment::with_prefix("CONTACT_RELAY"));
        if let Ok(path) = std::env::var("CONTACT_RELAY_CONFIG") {
            c = c.add_source(config::File::with_name(&path));
        }
        c.build()?.try_deserialize()
    }

    /// Returns the listen address. Defaults to DEFAULT_BIND_ADDR.
    pub fn bind_addr_or_default(&self) -> String {
        self.bind_addr
            .clone()
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
    }

    /// Returns the Resend API key from config or RESEND_API_KEY env. Empty counts as unset.
    pub fn resend_api_key(&self) -> Option<String> {
        non_empty_or(
            self.resend_api_key.clone(),
            std::env::var("RESEND_API_KEY").ok(),
        )
    }

    /// Returns the send endpoint. Defaults to the Resend emails endpoint.
    pub fn resend_api_url_or_default(&self) -> String {
        self.resend_api_url
            .clone()
            .unwrap_or_else(|| crate::adapters::email::RESEND_EMAILS_URL.to_string())
    }

    /// Returns the destination inbox from config or CONTACT_EMAIL env, else DEFAULT_CONTACT_EMAIL.
    pub fn contact_email_or_default(&self) -> String {
        non_empty_or(
            self.contact_email.clone(),
            std::env::var("CONTACT_EMAIL").ok(),
        )
        .unwrap_or_else(|| DEFAULT_CONTACT_EMAIL.to_string())
    }

    /// Returns the provider timeout in seconds. Zero counts as unset.
    pub fn delivery_timeout_secs_or_default(&self) -> u64 {
        self.delivery_timeout_secs
            .filter(|secs| *secs > 0)
            .unwrap_or(DEFAULT_DELIVERY_TIMEOUT_SECS)
    }
}

/// Prefixed value first, then the un-prefixed env fallback. Empty counts as unset on both.
fn non_empty_or(primary: Option<String>, fallback: Option<String>) -> Option<String> {
    primary
        .filter(|v| !v.is_empty())
        .or_else(|| fallback.filter(|v| !v.is_empty()))
}
