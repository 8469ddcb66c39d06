//! Application Configuration
//!
//! Configuration for the ledger application layer.

use std::time::Duration;

/// Ledger application configuration
#[derive(Debug, Clone)]
pub struct LedgerConfig {
    /// Listing page size when the caller does not specify one
    pub default_page_size: u32,
    /// Upper bound on the listing page size
    pub max_page_size: u32,
    /// How many pending outbox rows one drain pass delivers
    pub outbox_drain_limit: i64,
    /// How long delivered outbox rows are kept before purging
    pub outbox_retention: Duration,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            default_page_size: 10,
            max_page_size: 100,
            outbox_drain_limit: 50,
            outbox_retention: Duration::from_secs(7 * 24 * 3600),
        }
    }
}

impl LedgerConfig {
    /// Create config for development
    pub fn development() -> Self {
        Self::default()
    }
}
