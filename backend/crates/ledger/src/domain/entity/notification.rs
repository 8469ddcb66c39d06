//! Email Notification Entity (outbox row)

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A composed owner notification, persisted in the outbox
///
/// The row is inserted in the same database transaction as the settlement
/// it announces; delivery happens after commit and stamps `sent_at`.
/// A row with `sent_at = NULL` is eligible for redelivery (at-least-once).
#[derive(Debug, Clone)]
pub struct EmailNotification {
    pub id: Uuid,
    pub recipient_email: String,
    pub recipient_name: String,
    pub subject: String,
    pub html_body: String,
    pub text_body: String,
    pub created_at: DateTime<Utc>,
    pub sent_at: Option<DateTime<Utc>>,
    pub attempts: i32,
}

impl EmailNotification {
    /// Create a new, not-yet-delivered notification
    pub fn new(
        recipient_email: String,
        recipient_name: String,
        subject: String,
        html_body: String,
        text_body: String,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            recipient_email,
            recipient_name,
            subject,
            html_body,
            text_body,
            created_at: Utc::now(),
            sent_at: None,
            attempts: 0,
        }
    }

    /// Check if delivery already succeeded
    #[inline]
    pub fn is_sent(&self) -> bool {
        self.sent_at.is_some()
    }
}
