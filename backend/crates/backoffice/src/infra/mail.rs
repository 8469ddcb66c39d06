//! Mail Relay Notifier Implementation

use crate::domain::notifier::{BackofficeNotifier, OutgoingEmail};
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

impl BackofficeNotifier for RelayNotifier {
    async fn deliver(&self, email: &OutgoingEmail) -> bool {
        let message = MailMessage {
            to_email: email.to_email.clone(),
            to_name: email.to_name.clone(),
            subject: email.subject.clone(),
            html_body: email.html_body.clone(),
            text_body: email.text_body.clone(),
        };

        match self.mailer.send(&message).await {
            Ok(()) => {
                tracing::info!(
                    recipient = %email.to_email,
                    subject = %email.subject,
                    "Notification delivered"
                );
                true
            }
            Err(e) => {
                tracing::warn!(
                    recipient = %email.to_email,
                    subject = %email.subject,
                    error = %e,
                    "Notification delivery failed"
                );
                false
            }
        }
    }
}
