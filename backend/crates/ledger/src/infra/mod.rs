//! Infrastructure Layer
//!
//! Database implementations and external service integrations.

pub mod mail;
pub mod postgres;

pub use mail::RelayNotifier;
pub use postgres::PgLedgerRepository;
