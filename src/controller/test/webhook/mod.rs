use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use hmac::{Hmac, Mac};
use sea_orm::DatabaseConnection;
use serenity::async_trait;
use sha2::Sha256;
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

use crate::controller::webhook::{GITHUB_EVENT_HEADER, GITHUB_SIGNATURE_HEADER};
use crate::data::github_event::GithubEventRepository;
use crate::error::webhook::DeliveryError;
use crate::model::notification::RenderedNotification;
use crate::router::router;
use crate::service::github_notification::posting::NotificationSink;
use crate::state::AppState;
use test_utils::{builder::TestBuilder, fixture::webhook as payload};

mod duplicate;
mod malformed;

const SECRET: &str = "test-webhook-secret";
const CHANNEL_ID: u64 = 900100200;

/// Sink that records deliveries in memory instead of calling Discord.
struct RecordingSink {
    deliveries: Mutex<Vec<(u64, RenderedNotification)>>,
    fail: bool,
}

impl RecordingSink {
    fn new() -> Arc<Self> {
        Arc::new(Self {
            deliveries: Mutex::new(Vec::new()),
            fail: false,
        })
    }

    /// A sink whose every send fails, simulating an unreachable channel.
    fn failing() -> Arc<Self> {
        Arc::new(Self {
            deliveries: Mutex::new(Vec::new()),
            fail: true,
        })
    }

    fn delivery_count(&self) -> usize {
        self.deliveries.lock().unwrap().len()
    }

    fn last_delivery(&self) -> Option<(u64, RenderedNotification)> {
        self.deliveries.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl NotificationSink for RecordingSink {
    async fn send(
        &self,
        channel_id: u64,
        notification: &RenderedNotification,
    ) -> Result<u64, DeliveryError> {
        if self.fail {
            return Err(DeliveryError::InvalidTimestamp(0));
        }

        let mut deliveries = self.deliveries.lock().unwrap();
        deliveries.push((channel_id, notification.clone()));

        Ok(111222000 + deliveries.len() as u64)
    }
}

/// Builds the application router around an in-memory database and the given
/// sink, returning the database handle for audit-log assertions.
async fn test_app(sink: Arc<RecordingSink>) -> (Router, DatabaseConnection) {
    let test = TestBuilder::new()
        .with_github_event_table()
        .build()
        .await
        .unwrap();
    let db = test.db.unwrap();

    let state = AppState::new(db.clone(), sink, SECRET.to_string(), CHANNEL_ID);

    (router().with_state(state), db)
}

/// Computes the signature header GitHub would send for a body.
fn sign(secret: &str, body: &[u8]) -> String {
    let mut mac = Hmac::<Sha256>::new_from_slice(secret.as_bytes()).unwrap();
    mac.update(body);
    format!("sha256={}", hex::encode(mac.finalize().into_bytes()))
}

/// Builds a webhook POST request with an optional signature header.
fn webhook_request(event_type: &str, body: Vec<u8>, signature: Option<String>) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri("/webhook/github")
        .header("content-type", "application/json")
        .header(GITHUB_EVENT_HEADER, event_type);

    if let Some(signature) = signature {
        builder = builder.header(GITHUB_SIGNATURE_HEADER, signature);
    }

    builder.body(Body::from(body)).unwrap()
}

/// Builds a correctly signed webhook POST request.
fn signed_request(event_type: &str, payload: &serde_json::Value) -> Request<Body> {
    let body = serde_json::to_vec(payload).unwrap();
    let signature = sign(SECRET, &body);

    webhook_request(event_type, body, Some(signature))
}
