//! The bounded notification document handed to the delivery sink.
//!
//! A [`RenderedNotification`] is the structured, size-limited form of a chat
//! notification. Its constructors enforce Discord's documented length limits
//! by truncating deterministically, so a rendered notification can always be
//! posted without the sink rejecting it for oversized content.

use chrono::{DateTime, Utc};

/// Maximum length Discord accepts for an embed title.
pub const TITLE_MAX_LEN: usize = 256;

/// Maximum length Discord accepts for an embed field value.
pub const FIELD_VALUE_MAX_LEN: usize = 1024;

/// Notification severity, mapped to a fixed embed color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationColor {
    /// Routine activity (green)
    Normal,
    /// Activity that may need attention, e.g. a newly opened issue (yellow)
    Warning,
    /// Negative outcome, e.g. a pull request closed without merging (red)
    Error,
}

impl NotificationColor {
    /// RGB value used for the Discord embed color bar.
    pub fn rgb(self) -> u32 {
        match self {
            NotificationColor::Normal => 0x00ff00,
            NotificationColor::Warning => 0xffff00,
            NotificationColor::Error => 0xff0000,
        }
    }
}

/// Attribution line naming the user that triggered the notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthorLine {
    pub name: String,
    /// Avatar URL; absent for push events, which carry no sender avatar
    pub icon_url: Option<String>,
    /// Profile link
    pub url: Option<String>,
}

/// A single name/value pair displayed in the notification body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NotificationField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

/// A rendered, size-bounded chat notification.
///
/// Built by the notification renderer and consumed by the delivery sink.
/// Title and field values never exceed the sink's length limits; oversized
/// input is truncated at construction, never rejected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedNotification {
    pub title: String,
    pub description: Option<String>,
    pub color: NotificationColor,
    pub url: Option<String>,
    pub author: Option<AuthorLine>,
    pub fields: Vec<NotificationField>,
    pub timestamp: DateTime<Utc>,
}

impl RenderedNotification {
    /// Creates a notification with the given title and color, timestamped
    /// now. The title is truncated to [`TITLE_MAX_LEN`].
    pub fn new(title: impl Into<String>, color: NotificationColor) -> Self {
        Self {
            title: truncate_to(title.into(), TITLE_MAX_LEN),
            description: None,
            color,
            url: None,
            author: None,
            fields: Vec::new(),
            timestamp: Utc::now(),
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn author(mut self, author: AuthorLine) -> Self {
        self.author = Some(author);
        self
    }

    /// Appends a field, truncating the value to [`FIELD_VALUE_MAX_LEN`].
    pub fn field(
        mut self,
        name: impl Into<String>,
        value: impl Into<String>,
        inline: bool,
    ) -> Self {
        self.fields.push(NotificationField {
            name: name.into(),
            value: truncate_to(value.into(), FIELD_VALUE_MAX_LEN),
            inline,
        });
        self
    }
}

/// Truncates a string to at most `max` bytes on a char boundary.
///
/// Truncation is deterministic: the same input always yields the same output,
/// and input within the limit is returned unchanged.
pub fn truncate_to(value: String, max: usize) -> String {
    if value.len() <= max {
        return value;
    }

    let mut end = max;
    while !value.is_char_boundary(end) {
        end -= 1;
    }

    value[..end].to_string()
}
