//! Notifier Trait
//!
//! Delivery port for moderation and referral emails. Unlike settlement
//! notifications these are not persisted: the mutation commits first and
//! the email is fire-and-forget with a logged warning on failure.

/// A composed email ready for the transport
#[derive(Debug, Clone)]
pub struct OutgoingEmail {
    pub to_email: String,
    pub to_name: String,
    pub subject: String,
    pub html_body: String,
    pub text_body: String,
}

/// Outbound email delivery
#[trait_variant::make(BackofficeNotifier: Send)]
pub trait LocalBackofficeNotifier {
    /// Deliver one email; `true` when the transport accepted it
    async fn deliver(&self, email: &OutgoingEmail) -> bool;
}
