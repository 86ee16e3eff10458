use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

/// Repository for the append-only GitHub event audit log.
///
/// Records are created once after a notification has been delivered and are
/// never updated or deleted by the application.
pub struct GithubEventRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GithubEventRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new audit record for a processed webhook event.
    ///
    /// # Arguments
    /// - `event_type`: GitHub event-type tag, e.g. "issues"
    /// - `event_data`: Raw webhook payload as received
    /// - `channel_id`: Discord channel the notification was posted to
    /// - `message_id`: Discord message ID of the delivered notification
    ///
    /// # Returns
    /// - `Ok(Model)`: The created audit record
    /// - `Err(DbErr)`: Database error
    pub async fn create(
        &self,
        event_type: &str,
        event_data: serde_json::Value,
        channel_id: u64,
        message_id: Option<u64>,
    ) -> Result<entity::github_event::Model, DbErr> {
        entity::github_event::ActiveModel {
            event_type: ActiveValue::Set(event_type.to_string()),
            event_data: ActiveValue::Set(event_data),
            channel_id: ActiveValue::Set(channel_id.to_string()),
            message_id: ActiveValue::Set(message_id.map(|id| id.to_string())),
            processed_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets all records for an event type, most recent first.
    ///
    /// # Returns
    /// - `Ok(Vec<Model>)`: Matching audit records
    /// - `Err(DbErr)`: Database error
    pub async fn get_by_event_type(
        &self,
        event_type: &str,
    ) -> Result<Vec<entity::github_event::Model>, DbErr> {
        entity::prelude::GithubEvent::find()
            .filter(entity::github_event::Column::EventType.eq(event_type))
            .order_by_desc(entity::github_event::Column::ProcessedAt)
            .all(self.db)
            .await
    }

    /// Counts all audit records.
    ///
    /// # Returns
    /// - `Ok(u64)`: Total number of records
    /// - `Err(DbErr)`: Database error
    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::GithubEvent::find().count(self.db).await
    }
}
