//! GitHub webhook endpoint.
//!
//! Orchestrates the notification pipeline for `POST /webhook/github`:
//! verify the signature against the raw body, classify the payload, render
//! a notification, deliver it, record the audit entry, respond. Each stage
//! short-circuits:
//!
//! - signature mismatch: 401, nothing else runs
//! - unrecognized or filtered event: 200 with no side effects
//! - delivery failure: 500, no audit record, no retry (the sender retries)
//! - audit failure: swallowed; the notification is already delivered
//!
//! Requests are handled independently and concurrently; within one request
//! the pipeline is strictly sequential. Duplicate deliveries of the same
//! payload are processed as independent events.

use axum::{body::Bytes, extract::State, http::HeaderMap};

use crate::{
    data::github_event::GithubEventRepository,
    error::webhook::WebhookError,
    service::github_notification::{classify::classify, render::render, signature::verify_signature},
    state::AppState,
};

/// Header naming the event-type tag of the payload.
pub const GITHUB_EVENT_HEADER: &str = "x-github-event";

/// Header carrying the HMAC-SHA256 signature of the body.
pub const GITHUB_SIGNATURE_HEADER: &str = "x-hub-signature-256";

/// Handles an inbound GitHub webhook request.
///
/// # Returns
/// - `200 OK` - Event processed, or recognized-but-filtered (no notification)
/// - `401 Unauthorized` - Signature verification failed
/// - `500 Internal Server Error` - Notification delivery failed
pub async fn github_webhook(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<&'static str, WebhookError> {
    let signature = headers
        .get(GITHUB_SIGNATURE_HEADER)
        .and_then(|value| value.to_str().ok());

    // Verification runs on the raw body bytes, before any parsing
    if !verify_signature(&state.webhook_secret, &body, signature) {
        tracing::warn!("Rejected webhook with invalid signature");
        return Err(WebhookError::InvalidSignature);
    }

    let Some(event_type) = headers
        .get(GITHUB_EVENT_HEADER)
        .and_then(|value| value.to_str().ok())
    else {
        tracing::debug!("Dropping webhook without an event type header");
        return Ok("OK");
    };

    let payload: serde_json::Value = match serde_json::from_slice(&body) {
        Ok(payload) => payload,
        Err(err) => {
            tracing::warn!("Dropping '{}' webhook with unparseable body: {}", event_type, err);
            return Ok("OK");
        }
    };

    let event = classify(event_type, &payload);
    if event.is_unknown() {
        tracing::debug!("No notification for '{}' event", event_type);
        return Ok("OK");
    }

    // render returns None only for Unknown, which was dropped above
    let Some(notification) = render(&event) else {
        return Ok("OK");
    };

    let message_id = state
        .sink
        .send(state.github_channel_id, &notification)
        .await?;

    // Best-effort audit write: the notification is already delivered, and a
    // non-200 here would trigger a webhook retry and a duplicate post
    let repository = GithubEventRepository::new(&state.db);
    if let Err(err) = repository
        .create(
            event_type,
            payload,
            state.github_channel_id,
            Some(message_id),
        )
        .await
    {
        tracing::warn!("Failed to record '{}' event in audit log: {}", event_type, err);
    }

    Ok("OK")
}
