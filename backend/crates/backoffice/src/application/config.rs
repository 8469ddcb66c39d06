//! Application Configuration
//!
//! Configuration for the backoffice application layer.

/// Backoffice application configuration
#[derive(Debug, Clone)]
pub struct BackofficeConfig {
    /// Platform name used in owner-facing emails
    pub app_name: String,
    /// Sign-in URL linked from the verification email
    pub login_url: String,
    /// How many recent users the dashboard shows
    pub dashboard_recent_users: i64,
}

impl Default for BackofficeConfig {
    fn default() -> Self {
        Self {
            app_name: "CryptoMiner ERP".to_string(),
            login_url: "http://localhost:3000/login".to_string(),
            dashboard_recent_users: 5,
        }
    }
}

impl BackofficeConfig {
    /// Create config for development
    pub fn development() -> Self {
        Self::default()
    }
}
