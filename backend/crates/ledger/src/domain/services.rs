//! Domain Services
//!
//! Pure settlement wording: the owner notification and the per-outcome
//! operator messages. Keeping these here means every presentation layer
//! and the outbox redelivery path produce identical text.

use crate::domain::entity::{EmailNotification, Transaction};
use crate::domain::value_object::Decision;

/// Compose the owner notification for a settled transaction
///
/// The amount is always shown unsigned; the sign convention is internal
/// to the ledger.
pub fn compose_settlement_email(
    transaction: &Transaction,
    recipient_name: &str,
    recipient_email: &str,
    decision: Decision,
) -> EmailNotification {
    let subject = match decision {
        Decision::Approve => "Your Transaction Has Been Approved",
        Decision::Reject => "Your Transaction Has Been Rejected",
    };

    let tail = match decision {
        Decision::Approve => "The funds have been processed.",
        Decision::Reject => "Please contact support for more information.",
    };

    let text_body = format!(
        "Hello {name},\n\n\
         Your {kind} transaction of ${amount} has been {verb} by an admin. {tail} Thank you!",
        name = recipient_name,
        kind = transaction.transaction_type,
        amount = transaction.absolute_amount(),
        verb = decision.past_tense(),
        tail = tail,
    );

    let html_body = format!(
        "<p>Hello {name},</p>\
         <p>Your {kind} transaction of <strong>${amount}</strong> has been \
         <strong>{verb}</strong> by an admin.</p>\
         <p>{tail}</p>\
         <p>Thank you!</p>",
        name = recipient_name,
        kind = transaction.transaction_type,
        amount = transaction.absolute_amount(),
        verb = decision.past_tense(),
        tail = tail,
    );

    EmailNotification::new(
        recipient_email.to_string(),
        recipient_name.to_string(),
        subject.to_string(),
        html_body,
        text_body,
    )
}

/// Operator message for a settlement whose notification was delivered
pub fn settled_message(decision: Decision) -> String {
    format!(
        "Transaction {} successfully and notification sent!",
        decision.past_tense()
    )
}

/// Operator message for a settlement whose notification could not be sent
pub fn settled_notification_failed_message(decision: Decision) -> String {
    format!(
        "Transaction {}, but failed to send notification email.",
        decision.past_tense()
    )
}
