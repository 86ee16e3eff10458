//! GitHub event factory for creating test audit-log entities.
//!
//! This module provides factory methods for creating audit-log records with
//! sensible defaults, reducing boilerplate in tests. The factory supports
//! customization through a builder pattern.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test audit-log records with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::github_event::GithubEventFactory;
///
/// let event = GithubEventFactory::new(&db)
///     .event_type("push")
///     .message_id(Some("111222333".to_string()))
///     .build()
///     .await?;
/// ```
pub struct GithubEventFactory<'a> {
    db: &'a DatabaseConnection,
    event_type: String,
    event_data: serde_json::Value,
    channel_id: String,
    message_id: Option<String>,
}

impl<'a> GithubEventFactory<'a> {
    /// Creates a new GithubEventFactory with default values.
    ///
    /// Defaults:
    /// - event_type: `"issues"`
    /// - event_data: a minimal JSON object with a unique marker
    /// - channel_id: unique per factory instance
    /// - message_id: `Some` unique id
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `GithubEventFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            event_type: "issues".to_string(),
            event_data: serde_json::json!({ "marker": id }),
            channel_id: format!("9000{}", id),
            message_id: Some(format!("7000{}", id)),
        }
    }

    /// Sets the event type.
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn event_type(mut self, event_type: impl Into<String>) -> Self {
        self.event_type = event_type.into();
        self
    }

    /// Sets the raw event payload.
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn event_data(mut self, event_data: serde_json::Value) -> Self {
        self.event_data = event_data;
        self
    }

    /// Sets the channel id.
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn channel_id(mut self, channel_id: impl Into<String>) -> Self {
        self.channel_id = channel_id.into();
        self
    }

    /// Sets the delivered message id.
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn message_id(mut self, message_id: Option<String>) -> Self {
        self.message_id = message_id;
        self
    }

    /// Inserts the audit-log record.
    ///
    /// # Returns
    /// - `Ok(Model)` - The created record
    /// - `Err(DbErr)` - Database error
    pub async fn build(self) -> Result<entity::github_event::Model, DbErr> {
        entity::github_event::ActiveModel {
            event_type: ActiveValue::Set(self.event_type),
            event_data: ActiveValue::Set(self.event_data),
            channel_id: ActiveValue::Set(self.channel_id),
            message_id: ActiveValue::Set(self.message_id),
            processed_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an audit-log record with default values.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(Model)` - The created record
/// - `Err(DbErr)` - Database error
pub async fn create_github_event(
    db: &DatabaseConnection,
) -> Result<entity::github_event::Model, DbErr> {
    GithubEventFactory::new(db).build().await
}
