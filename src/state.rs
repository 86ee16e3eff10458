//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds the shared resources the
//! webhook endpoint needs. The state is initialized once during startup and then
//! cloned for each request handler through Axum's state extraction. There are no
//! ambient globals; everything a request touches flows through this value.

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::service::github_notification::posting::NotificationSink;

/// Application state containing shared resources and dependencies.
///
/// All fields use cheap-to-clone types:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `Arc<dyn NotificationSink>` is a reference-counted pointer
/// - `String` is cloned when needed
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for the event audit log.
    pub db: DatabaseConnection,

    /// Delivery sink for rendered notifications.
    ///
    /// The production sink posts embeds through the Discord HTTP client;
    /// endpoint tests substitute a recording sink.
    pub sink: Arc<dyn NotificationSink>,

    /// Shared secret for webhook signature verification.
    pub webhook_secret: String,

    /// Channel that receives GitHub event notifications.
    pub github_channel_id: u64,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// Called once during server startup after all dependencies have been
    /// initialized; the resulting state is provided to the Axum router.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `sink` - Delivery sink for rendered notifications
    /// - `webhook_secret` - Shared webhook secret
    /// - `github_channel_id` - Notification target channel
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(
        db: DatabaseConnection,
        sink: Arc<dyn NotificationSink>,
        webhook_secret: String,
        github_channel_id: u64,
    ) -> Self {
        Self {
            db,
            sink,
            webhook_secret,
            github_channel_id,
        }
    }
}
