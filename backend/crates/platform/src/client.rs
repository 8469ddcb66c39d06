//! Client identification utilities
//!
//! Common functions for identifying clients via HTTP headers. The audit
//! trail stores the device class, a truncated browser label and the client
//! IP for every admin action, so those derivations live here.

use axum::http::{HeaderMap, header};
use std::net::IpAddr;

use crate::crypto::sha256;

/// Maximum length of the stored browser label (User-Agent prefix)
pub const BROWSER_LABEL_MAX: usize = 100;

/// Coarse device classification derived from the User-Agent header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(i16)]
pub enum DeviceClass {
    #[default]
    Desktop = 0,
    Mobile = 1,
}

impl DeviceClass {
    /// Classify a User-Agent string
    pub fn classify(user_agent: &str) -> Self {
        let ua = user_agent.to_ascii_lowercase();
        if ua.contains("mobile") || ua.contains("android") || ua.contains("iphone") {
            Self::Mobile
        } else {
            Self::Desktop
        }
    }

    /// Numeric ID for database storage
    #[inline]
    pub const fn id(&self) -> i16 {
        *self as i16
    }

    /// Create from numeric ID
    #[inline]
    pub fn from_id(id: i16) -> Option<Self> {
        match id {
            0 => Some(Self::Desktop),
            1 => Some(Self::Mobile),
            _ => None,
        }
    }

    /// Display label
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Desktop => "Desktop",
            Self::Mobile => "Mobile",
        }
    }
}

impl std::fmt::Display for DeviceClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Client fingerprint derived from request headers
///
/// Identifies the calling client in audit records and diagnostics.
#[derive(Debug, Clone)]
pub struct ClientFingerprint {
    /// SHA-256 hash of the User-Agent header
    pub hash: [u8; 32],
    /// Client IP address (from X-Forwarded-For or direct connection)
    pub ip: Option<IpAddr>,
    /// Original User-Agent string (for logging/display)
    pub user_agent: Option<String>,
}

impl ClientFingerprint {
    /// Create a new fingerprint
    pub fn new(hash: [u8; 32], ip: Option<IpAddr>, user_agent: Option<String>) -> Self {
        Self {
            hash,
            ip,
            user_agent,
        }
    }

    /// Fingerprint for a client that sent no User-Agent
    ///
    /// Audit records must exist even for such clients, so this stands in
    /// where [`extract_fingerprint`] fails.
    pub fn anonymous(ip: Option<IpAddr>) -> Self {
        Self::new(sha256(b""), ip, None)
    }

    /// Get hash as Vec<u8> (for database storage)
    pub fn hash_vec(&self) -> Vec<u8> {
        self.hash.to_vec()
    }

    /// Get IP as string (for database storage)
    pub fn ip_string(&self) -> Option<String> {
        self.ip.map(|ip| ip.to_string())
    }

    /// Device class derived from the User-Agent
    pub fn device_class(&self) -> DeviceClass {
        self.user_agent
            .as_deref()
            .map(DeviceClass::classify)
            .unwrap_or_default()
    }

    /// User-Agent truncated to the audit column width
    ///
    /// Truncation counts characters, not bytes, so multi-byte agents
    /// never split mid-character.
    pub fn browser_label(&self) -> String {
        self.user_agent
            .as_deref()
            .map(|ua| ua.chars().take(BROWSER_LABEL_MAX).collect())
            .unwrap_or_default()
    }
}

/// Error when extracting client fingerprint
#[derive(Debug, Clone, thiserror::Error)]
pub enum FingerprintError {
    #[error("Missing required header: {0}")]
    MissingHeader(String),
}

/// Extract client fingerprint from request headers
///
/// ## Arguments
/// * `headers` - HTTP request headers
/// * `client_ip` - Client IP address (from connection or X-Forwarded-For)
///
/// ## Returns
/// * `Ok(ClientFingerprint)` - Successfully extracted fingerprint
/// * `Err(FingerprintError)` - Missing User-Agent header
pub fn extract_fingerprint(
    headers: &HeaderMap,
    client_ip: Option<IpAddr>,
) -> Result<ClientFingerprint, FingerprintError> {
    let user_agent = headers
        .get(header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| FingerprintError::MissingHeader("User-Agent".to_string()))?;

    let hash = sha256(user_agent.as_bytes());

    Ok(ClientFingerprint::new(
        hash,
        client_ip,
        Some(user_agent.to_string()),
    ))
}

/// Extract client IP address from headers
///
/// Checks X-Forwarded-For header first (for reverse proxy setups),
/// then falls back to direct connection IP.
///
/// ## Arguments
/// * `headers` - HTTP request headers
/// * `direct_ip` - Direct connection IP address
///
/// ## Returns
/// The client IP address, or None if not determinable
pub fn extract_client_ip(headers: &HeaderMap, direct_ip: Option<IpAddr>) -> Option<IpAddr> {
    // Check X-Forwarded-For header (first IP in the list)
    if let Some(xff) = headers.get("x-forwarded-for").and_then(|v| v.to_str().ok()) {
        if let Some(first_ip) = xff.split(',').next() {
            if let Ok(ip) = first_ip.trim().parse::<IpAddr>() {
                return Some(ip);
            }
        }
    }
    direct_ip
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_extract_fingerprint() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::USER_AGENT,
            HeaderValue::from_static("Mozilla/5.0 Test Browser"),
        );

        let fp = extract_fingerprint(&headers, None).unwrap();
        assert_eq!(fp.hash.len(), 32);
        assert_eq!(fp.user_agent, Some("Mozilla/5.0 Test Browser".to_string()));
    }

    #[test]
    fn test_extract_fingerprint_missing_ua() {
        let headers = HeaderMap::new();
        let result = extract_fingerprint(&headers, None);
        assert!(matches!(result, Err(FingerprintError::MissingHeader(_))));
    }

    #[test]
    fn test_extract_client_ip_xff() {
        let mut headers = HeaderMap::new();
        headers.insert(
            "x-forwarded-for",
            HeaderValue::from_static("192.168.1.1, 10.0.0.1"),
        );

        let ip = extract_client_ip(&headers, None);
        assert_eq!(ip, Some("192.168.1.1".parse().unwrap()));
    }

    #[test]
    fn test_extract_client_ip_direct() {
        let headers = HeaderMap::new();
        let direct: IpAddr = "127.0.0.1".parse().unwrap();

        let ip = extract_client_ip(&headers, Some(direct));
        assert_eq!(ip, Some(direct));
    }

    #[test]
    fn test_device_class_classify() {
        assert_eq!(
            DeviceClass::classify("Mozilla/5.0 (Windows NT 10.0; Win64; x64)"),
            DeviceClass::Desktop
        );
        assert_eq!(
            DeviceClass::classify("Mozilla/5.0 (iPhone; CPU iPhone OS 17_0)"),
            DeviceClass::Mobile
        );
        assert_eq!(
            DeviceClass::classify("Mozilla/5.0 (Linux; Android 14) Mobile Safari"),
            DeviceClass::Mobile
        );
    }

    #[test]
    fn test_device_class_ids() {
        assert_eq!(DeviceClass::from_id(0), Some(DeviceClass::Desktop));
        assert_eq!(DeviceClass::from_id(1), Some(DeviceClass::Mobile));
        assert_eq!(DeviceClass::from_id(9), None);
        assert_eq!(DeviceClass::Mobile.id(), 1);
        assert_eq!(DeviceClass::Mobile.to_string(), "Mobile");
    }

    #[test]
    fn test_browser_label_truncation() {
        let long_ua = "x".repeat(300);
        let fp = ClientFingerprint::new([0u8; 32], None, Some(long_ua));
        assert_eq!(fp.browser_label().len(), BROWSER_LABEL_MAX);

        let fp = ClientFingerprint::new([0u8; 32], None, None);
        assert_eq!(fp.browser_label(), "");
        assert_eq!(fp.device_class(), DeviceClass::Desktop);
    }

    #[test]
    fn test_anonymous_fingerprint() {
        let ip: IpAddr = "10.0.0.1".parse().unwrap();
        let fp = ClientFingerprint::anonymous(Some(ip));
        assert_eq!(fp.hash, sha256(b""));
        assert_eq!(fp.ip_string(), Some("10.0.0.1".to_string()));
        assert!(fp.user_agent.is_none());
    }
}
