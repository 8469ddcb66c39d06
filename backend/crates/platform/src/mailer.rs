//! Outbound email delivery
//!
//! Thin client for the HTTP mail relay. Domain crates compose subject and
//! body text themselves and hand a [`MailMessage`] to [`Mailer::send`];
//! this module only owns transport concerns (endpoint, auth, timeout).

use serde::Serialize;
use std::time::Duration;

/// Mail relay configuration
#[derive(Debug, Clone)]
pub struct MailerConfig {
    /// Base URL of the mail relay (no trailing slash)
    pub base_url: String,
    /// API key sent as a bearer token
    pub api_key: String,
    /// Sender address
    pub from_email: String,
    /// Sender display name
    pub from_name: String,
    /// Request timeout
    pub timeout: Duration,
}

impl Default for MailerConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8825".to_string(),
            api_key: String::new(),
            from_email: "no-reply@localhost".to_string(),
            from_name: "CryptoMiner ERP".to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

impl MailerConfig {
    /// Development configuration (local relay, no API key)
    pub fn development() -> Self {
        Self::default()
    }
}

/// A composed email ready for delivery
#[derive(Debug, Clone)]
pub struct MailMessage {
    pub to_email: String,
    pub to_name: String,
    pub subject: String,
    pub html_body: String,
    pub text_body: String,
}

/// JSON payload the relay accepts at POST /messages
#[derive(Serialize)]
struct RelayPayload<'a> {
    from_email: &'a str,
    from_name: &'a str,
    to_email: &'a str,
    to_name: &'a str,
    subject: &'a str,
    html_body: &'a str,
    text_body: &'a str,
}

/// Error during mail delivery
#[derive(Debug, thiserror::Error)]
pub enum MailerError {
    #[error("Mail relay transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Mail relay rejected the message with status {0}")]
    Rejected(u16),
}

/// HTTP mail relay client
#[derive(Debug, Clone)]
pub struct Mailer {
    http: reqwest::Client,
    config: MailerConfig,
}

impl Mailer {
    /// Create a new mailer
    ///
    /// ## Panics
    /// Panics when the underlying HTTP client cannot be constructed,
    /// which only happens with an invalid TLS backend setup. Build the
    /// mailer at startup so misconfiguration fails fast.
    pub fn new(config: MailerConfig) -> Self {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("failed to build mail relay HTTP client");
        Self { http, config }
    }

    /// Sender address this mailer is configured with
    pub fn from_email(&self) -> &str {
        &self.config.from_email
    }

    /// Deliver a single message
    ///
    /// ## Returns
    /// * `Ok(())` - The relay accepted the message
    /// * `Err(MailerError)` - Transport failure or non-2xx relay response
    pub async fn send(&self, message: &MailMessage) -> Result<(), MailerError> {
        let payload = RelayPayload {
            from_email: &self.config.from_email,
            from_name: &self.config.from_name,
            to_email: &message.to_email,
            to_name: &message.to_name,
            subject: &message.subject,
            html_body: &message.html_body,
            text_body: &message.text_body,
        };

        let url = format!("{}/messages", self.config.base_url);
        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(MailerError::Rejected(status.as_u16()));
        }
        Ok(())
    }
}
