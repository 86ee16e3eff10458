//! Delivery sink for rendered notifications.
//!
//! The webhook pipeline hands rendered notifications to a [`NotificationSink`]
//! rather than to Discord directly, so endpoint tests can observe deliveries
//! without a live gateway. The production implementation, [`DiscordSink`],
//! converts the notification to a Discord embed and posts it through the
//! shared serenity HTTP client.

use serenity::{
    all::{ChannelId, CreateEmbed, CreateEmbedAuthor, CreateMessage, Timestamp},
    async_trait,
    http::Http,
};
use std::sync::Arc;

use crate::error::webhook::DeliveryError;
use crate::model::notification::RenderedNotification;

/// Destination for rendered notifications.
///
/// Implementations deliver the notification to the given channel and return a
/// durable message identifier. Delivery failures are returned, not retried;
/// the webhook sender's own retry mechanism is the retry authority.
#[async_trait]
pub trait NotificationSink: Send + Sync {
    /// Sends a notification to a channel.
    ///
    /// # Arguments
    /// - `channel_id` - Discord channel to post to
    /// - `notification` - Rendered notification document
    ///
    /// # Returns
    /// - `Ok(u64)` - Discord message id of the delivered notification
    /// - `Err(DeliveryError)` - Channel unresolvable or the remote call failed
    async fn send(
        &self,
        channel_id: u64,
        notification: &RenderedNotification,
    ) -> Result<u64, DeliveryError>;
}

/// Discord-backed notification sink.
pub struct DiscordSink {
    http: Arc<Http>,
}

impl DiscordSink {
    /// Creates a sink posting through the given Discord HTTP client.
    pub fn new(http: Arc<Http>) -> Self {
        Self { http }
    }
}

#[async_trait]
impl NotificationSink for DiscordSink {
    async fn send(
        &self,
        channel_id: u64,
        notification: &RenderedNotification,
    ) -> Result<u64, DeliveryError> {
        let embed = build_embed(notification)?;
        let message = CreateMessage::new().embed(embed);

        let sent = ChannelId::new(channel_id)
            .send_message(&self.http, message)
            .await
            .map_err(Box::new)?;

        Ok(sent.id.get())
    }
}

/// Converts a rendered notification into a Discord embed.
fn build_embed(notification: &RenderedNotification) -> Result<CreateEmbed, DeliveryError> {
    let unix = notification.timestamp.timestamp();
    let timestamp =
        Timestamp::from_unix_timestamp(unix).map_err(|_| DeliveryError::InvalidTimestamp(unix))?;

    let mut embed = CreateEmbed::new()
        .title(&notification.title)
        .color(notification.color.rgb())
        .timestamp(timestamp);

    if let Some(description) = &notification.description {
        embed = embed.description(description);
    }

    if let Some(url) = &notification.url {
        embed = embed.url(url);
    }

    if let Some(author) = &notification.author {
        let mut embed_author = CreateEmbedAuthor::new(&author.name);
        if let Some(icon_url) = &author.icon_url {
            embed_author = embed_author.icon_url(icon_url);
        }
        if let Some(url) = &author.url {
            embed_author = embed_author.url(url);
        }
        embed = embed.author(embed_author);
    }

    for field in &notification.fields {
        embed = embed.field(&field.name, &field.value, field.inline);
    }

    Ok(embed)
}
