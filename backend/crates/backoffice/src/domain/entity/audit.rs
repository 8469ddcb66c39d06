//! Admin Activity Entity (audit trail)

use platform::client::{ClientFingerprint, DeviceClass};
use platform::context::RequestContext;
use uuid::Uuid;

/// One admin action, as written to the audit trail
///
/// Inserted in the same database transaction as the mutation it
/// describes, so the trail never records an action that rolled back.
/// The row id and timestamp are store-assigned; the trail is write-only
/// from the application's point of view.
#[derive(Debug, Clone)]
pub struct AuditEntry {
    pub admin_id: i64,
    /// Human-readable description, e.g. "Updated referral 7 to inactive"
    pub action: String,
    pub device_class: DeviceClass,
    pub browser: Option<String>,
    pub ip_address: Option<String>,
    pub correlation_id: Uuid,
}

impl AuditEntry {
    /// Record an action with the caller's identity and client details
    pub fn record(ctx: &RequestContext, client: &ClientFingerprint, action: String) -> Self {
        let label = client.browser_label();
        Self {
            admin_id: ctx.admin_id,
            action,
            device_class: client.device_class(),
            browser: (!label.is_empty()).then_some(label),
            ip_address: client.ip_string(),
            correlation_id: ctx.correlation_id,
        }
    }
}
