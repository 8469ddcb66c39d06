//! Notifier Trait
//!
//! Delivery port for owner notifications. Implementation is in the
//! infrastructure layer (mail relay); tests substitute a recording double.

use crate::domain::entity::EmailNotification;

/// Outbound notification delivery
#[trait_variant::make(SettlementNotifier: Send)]
pub trait LocalSettlementNotifier {
    /// Deliver one notification
    ///
    /// Returns `true` when the transport accepted the message. A `false`
    /// is a soft failure: the settlement stands, the outbox row stays
    /// pending for redelivery, and the caller reports the degraded outcome.
    /// Implementations log the transport detail themselves.
    async fn deliver(&self, notification: &EmailNotification) -> bool;
}
