//! Human-readable messages for documented operation status codes.
//!
//! The API signals most outcomes through the status code alone; these tables
//! carry the meanings its documentation assigns per operation. Undocumented
//! codes return `None`.

/// Message for a `POST webhooks.json` status code.
pub fn create_webhook_message(status_code: u16) -> Option<&'static str> {
    match status_code {
        200 => Some("Webhook URL registered to provided application."),
        _ => None,
    }
}

/// Message for a `DELETE webhooks/:webhook_id.json` status code.
pub fn delete_webhook_message(status_code: u16) -> Option<&'static str> {
    match status_code {
        204 => Some("Webhook has been removed from provided app."),
        _ => None,
    }
}

/// Message for a `GET webhooks.json` status code.
pub fn get_webhooks_message(status_code: u16) -> Option<&'static str> {
    match status_code {
        200 => Some("All webhooks URLs successfully returned."),
        _ => None,
    }
}

/// Message for a `POST webhooks/:webhook_id/subscriptions.json` status code.
pub fn add_subscription_message(status_code: u16) -> Option<&'static str> {
    match status_code {
        204 => Some("Subscription added for provided user."),
        _ => None,
    }
}

/// Message for a `DELETE webhooks/:webhook_id/subscriptions.json` status code.
pub fn delete_subscription_message(status_code: u16) -> Option<&'static str> {
    match status_code {
        204 => Some("Active subscription for the user has been removed."),
        404 => Some("There is no active subscription for the user."),
        _ => None,
    }
}

/// Message for a `GET webhooks/:webhook_id/subscriptions.json` status code.
pub fn get_subscription_message(status_code: u16) -> Option<&'static str> {
    match status_code {
        204 => Some(
            "User has authorized the app with DM permissions and app has active subscription for the user.",
        ),
        404 => Some(
            "User has authorized the app with DM permissions, but there is no active subscription for the user.",
        ),
        401 => Some(
            "User has not authorized the app or the user has authorized the app without DM permissions. See included Twitter error code and message for details.",
        ),
        _ => None,
    }
}

/// Message for a `PUT webhooks/:webhook_id.json` status code.
pub fn trigger_crc_message(status_code: u16) -> Option<&'static str> {
    match status_code {
        204 => Some("CRC request successful and webhook status set to valid."),
        _ => None,
    }
}
