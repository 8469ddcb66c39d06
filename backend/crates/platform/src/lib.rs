//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Client identification (fingerprint, IP, device class)
//! - Request-scoped admin context extraction
//! - Hashing utilities
//! - Outbound mail relay client

pub mod client;
pub mod context;
pub mod crypto;
pub mod mailer;
