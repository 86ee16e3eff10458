use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Errors that can occur while delivering a notification to Discord.
#[derive(Error, Debug)]
pub enum DeliveryError {
    /// Discord API call failed.
    ///
    /// Boxed due to large size. Covers unresolvable channels, permission
    /// failures, and transport errors from the Discord HTTP API.
    #[error(transparent)]
    Discord(#[from] Box<serenity::Error>),

    /// Notification timestamp is outside the range Discord accepts.
    #[error("Invalid notification timestamp: {0}")]
    InvalidTimestamp(i64),
}

impl From<serenity::Error> for DeliveryError {
    fn from(err: serenity::Error) -> Self {
        DeliveryError::Discord(Box::new(err))
    }
}

/// Errors surfaced to the webhook HTTP caller.
///
/// Only signature failures and delivery failures escape the webhook pipeline
/// as non-200 responses. Classification failures degrade to a dropped event
/// and audit-log failures are swallowed after delivery, so neither appears
/// here.
#[derive(Error, Debug)]
pub enum WebhookError {
    /// The request's HMAC signature did not match the shared secret.
    ///
    /// Results in 401 Unauthorized. No further processing is performed for
    /// the request.
    #[error("Invalid webhook signature")]
    InvalidSignature,

    /// The notification could not be delivered to the chat channel.
    ///
    /// Results in 500 Internal Server Error so the sender's own retry
    /// mechanism can decide whether to resend. The pipeline never retries.
    #[error(transparent)]
    Delivery(#[from] DeliveryError),
}

/// Converts webhook pipeline errors into HTTP responses.
///
/// # Returns
/// - 401 Unauthorized - For `InvalidSignature`
/// - 500 Internal Server Error - For delivery failures, logged server-side
impl IntoResponse for WebhookError {
    fn into_response(self) -> Response {
        match self {
            Self::InvalidSignature => {
                (StatusCode::UNAUTHORIZED, "Invalid signature").into_response()
            }
            Self::Delivery(err) => {
                tracing::error!("Failed to deliver notification: {}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
            }
        }
    }
}
