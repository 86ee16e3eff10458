use sea_orm::entity::prelude::*;

/// Audit record for a processed GitHub webhook event.
///
/// Rows are append-only: created once after a notification has been
/// delivered and never updated afterwards.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "github_event")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// GitHub event-type tag, e.g. "issues" or "push".
    pub event_type: String,
    /// Raw webhook payload as received, for audit and diagnosis.
    pub event_data: Json,
    /// Discord channel the notification was posted to.
    pub channel_id: String,
    /// Discord message id of the delivered notification, if delivery
    /// produced one.
    pub message_id: Option<String>,
    pub processed_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
