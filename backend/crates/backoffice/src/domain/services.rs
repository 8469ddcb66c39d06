//! Domain Services
//!
//! Moderation rules and the wording of every email and operator message,
//! kept in one place so each outcome reads identically everywhere.

use crate::domain::entity::UserAccount;
use crate::domain::notifier::OutgoingEmail;
use crate::domain::value_object::{AccountStatus, ModerationAction, ReferralStatus};
use crate::error::BackofficeError;
use kernel::id::{ReferralId, UserId};

/// Check a moderation action against the account's current status
///
/// A conflicting action is rejected before anything is written. Verify on
/// an active account gets its own wording; the other no-op repeats report
/// the status the account is already in.
pub fn moderation_conflict(
    action: ModerationAction,
    current: AccountStatus,
) -> Option<BackofficeError> {
    if !action.conflicts_with(current) {
        return None;
    }
    Some(match action {
        ModerationAction::Verify => BackofficeError::AlreadyVerified,
        ModerationAction::Suspend | ModerationAction::Reinstate => {
            BackofficeError::AlreadyInStatus(current)
        }
    })
}

/// Compose the email announcing a moderation action to the account owner
///
/// Verification has its own wording; suspension and reinstatement share
/// the status-change template, parameterized on the new status.
pub fn compose_moderation_email(
    action: ModerationAction,
    user: &UserAccount,
    app_name: &str,
    login_url: &str,
) -> OutgoingEmail {
    match action {
        ModerationAction::Verify => OutgoingEmail {
            to_email: user.email.clone(),
            to_name: user.full_name.clone(),
            subject: "Your Account Has Been Verified".to_string(),
            html_body: format!(
                "<p>Hello {name},</p>\
                 <p>Your account has been verified by an admin. You can now \
                 <a href=\"{login_url}\">sign in</a> to {app_name}.</p>\
                 <p>Thank you!</p>",
                name = user.full_name,
            ),
            text_body: format!(
                "Hello {name},\n\n\
                 Your account has been verified by an admin. You can now sign in to {app_name}. \
                 Thank you!",
                name = user.full_name,
            ),
        },
        ModerationAction::Suspend | ModerationAction::Reinstate => {
            let status = action.target_status();
            let tail = match status {
                AccountStatus::Active => "You can now sign in.",
                _ => "Please contact support for more information.",
            };
            OutgoingEmail {
                to_email: user.email.clone(),
                to_name: user.full_name.clone(),
                subject: "Your Account Status Has Changed".to_string(),
                html_body: format!(
                    "<p>Hello {name},</p>\
                     <p>Your account status has been changed to \
                     <strong>{status}</strong> by an admin.</p>\
                     <p>{tail}</p>\
                     <p>Thank you!</p>",
                    name = user.full_name,
                ),
                text_body: format!(
                    "Hello {name},\n\n\
                     Your account status has been changed to '{status}' by an admin. {tail} \
                     Thank you!",
                    name = user.full_name,
                ),
            }
        }
    }
}

/// Compose the email announcing a referral status change to the referrer
pub fn compose_referral_email(
    referrer_name: &str,
    referrer_email: &str,
    referred_name: &str,
    status: ReferralStatus,
) -> OutgoingEmail {
    OutgoingEmail {
        to_email: referrer_email.to_string(),
        to_name: referrer_name.to_string(),
        subject: "Referral Status Updated".to_string(),
        html_body: format!(
            "<p>Hello {referrer_name},</p>\
             <p>The referral status for <strong>{referred_name}</strong> has been updated to \
             '<strong>{status}</strong>'.</p>\
             <p>Thank you!</p>",
        ),
        text_body: format!(
            "Hello {referrer_name},\n\n\
             The referral status for {referred_name} has been updated to '{status}'. Thank you!",
        ),
    }
}

/// Operator message for a completed moderation action
pub fn moderated_message(action: ModerationAction, notification_sent: bool) -> String {
    if notification_sent {
        format!(
            "User {} successfully and notification sent!",
            action.past_tense()
        )
    } else {
        format!(
            "User {}, but failed to send notification email.",
            action.past_tense()
        )
    }
}

/// Operator message for a completed referral status change
pub fn referral_updated_message(status: ReferralStatus) -> String {
    format!("Referral status updated to '{status}' successfully!")
}

/// Operator message for a created mining package
pub fn package_added_message() -> &'static str {
    "Mining package added successfully!"
}

/// Audit-trail wording for a moderation action
pub fn moderation_audit_action(action: ModerationAction, user_id: UserId) -> String {
    match action {
        ModerationAction::Verify => format!("Verified user {user_id}"),
        ModerationAction::Suspend => format!("Suspended user {user_id}"),
        ModerationAction::Reinstate => format!("Reinstated user {user_id}"),
    }
}

/// Audit-trail wording for a referral status change
pub fn referral_audit_action(referral_id: ReferralId, status: ReferralStatus) -> String {
    format!("Updated referral {referral_id} to {status}")
}

// ============================================================================
// Tests
// ============================================================================
