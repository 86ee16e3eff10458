//! Discord bot integration.
//!
//! The bot maintains the gateway connection and reacts to guild events,
//! currently greeting new members in the configured welcome channel. It is
//! initialized during startup and runs in a separate tokio task to avoid
//! blocking the webhook server. The bot's HTTP client is shared with the
//! notification sink and the scheduler so the process keeps a single
//! connection to Discord's API.
//!
//! # Gateway Intents
//!
//! - `GUILDS` - Guild availability events
//! - `GUILD_MESSAGES` - Message events in guilds
//! - `GUILD_MEMBERS` - Member join events (privileged intent)
//!
//! Note: `GUILD_MEMBERS` is a privileged intent and must be explicitly
//! enabled in the Discord Developer Portal for the bot application.

pub mod start;
