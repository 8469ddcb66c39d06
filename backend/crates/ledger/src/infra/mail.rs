//! Mail Relay Notifier Implementation

use crate::domain::entity::EmailNotification;
use crate::domain::notifier::SettlementNotifier;
use platform::mailer::{MailMessage, Mailer};

/// Notifier backed by the platform mail relay client
#[derive(Clone)]
pub struct RelayNotifier {
    mailer: Mailer,
}

impl RelayNotifier {
    pub fn new(mailer: Mailer) -> Self {
        Self { mailer }
    }
}

impl SettlementNotifier for RelayNotifier {
    async fn deliver(&self, notification: &EmailNotification) -> bool {
        let message = MailMessage {
            to_email: notification.recipient_email.clone(),
            to_name: notification.recipient_name.clone(),
            subject: notification.subject.clone(),
            html_body: notification.html_body.clone(),
            text_body: notification.text_body.clone(),
        };

        match self.mailer.send(&message).await {
            Ok(()) => {
                tracing::info!(
                    outbox_id = %notification.id,
                    recipient = %notification.recipient_email,
                    "Notification delivered"
                );
                true
            }
            Err(e) => {
                tracing::warn!(
                    outbox_id = %notification.id,
                    recipient = %notification.recipient_email,
                    error = %e,
                    "Notification delivery failed"
                );
                false
            }
        }
    }
}
