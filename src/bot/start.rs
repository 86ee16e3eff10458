use serenity::all::{
    ActivityData, ChannelId, Client, Context, CreateEmbed, CreateMessage, EventHandler,
    GatewayIntents, Member, Mentionable, Ready, Timestamp,
};
use serenity::async_trait;
use serenity::http::Http;
use std::sync::Arc;

use crate::config::Config;
use crate::error::AppError;
use crate::model::notification::NotificationColor;

/// Discord bot event handler
struct Handler {
    /// Channel for welcome embeds; welcomes are skipped when unset
    welcome_channel_id: Option<u64>,
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        tracing::info!("{} is connected to Discord!", ready.user.name);

        ctx.set_activity(Some(ActivityData::watching("the repository")));
    }

    /// Called when a member joins a guild
    async fn guild_member_addition(&self, ctx: Context, new_member: Member) {
        let Some(channel_id) = self.welcome_channel_id else {
            return;
        };

        let embed = CreateEmbed::new()
            .title("Welcome to the Community!")
            .description(format!(
                "Hey {}, welcome to our open-source community! We're excited to have you here.",
                new_member.mention()
            ))
            .field(
                "Get Started",
                "Check out our GitHub repository and contribute to the project!",
                true,
            )
            .field(
                "Join the Discussion",
                "Feel free to ask questions and share your ideas!",
                true,
            )
            .color(NotificationColor::Normal.rgb())
            .thumbnail(new_member.user.face())
            .timestamp(Timestamp::now());

        let message = CreateMessage::new().embed(embed);

        if let Err(e) = ChannelId::new(channel_id)
            .send_message(&ctx.http, message)
            .await
        {
            tracing::error!(
                "Failed to send welcome message for {}: {}",
                new_member.user.name,
                e
            );
            return;
        }

        tracing::info!(
            "New member joined: {} ({})",
            new_member.user.name,
            new_member.user.id
        );
    }
}

/// Initializes the Discord bot client.
///
/// Builds the serenity client with the gateway intents the bot needs and
/// returns it together with its HTTP client handle. The HTTP handle is shared
/// with the notification sink and the scheduler.
///
/// # Arguments
/// - `config` - Application configuration
///
/// # Returns
/// - `Ok((Client, Arc<Http>))` - Initialized bot client and its HTTP handle
/// - `Err(AppError)` - Client construction failed
pub async fn init_bot(config: &Config) -> Result<(Client, Arc<Http>), AppError> {
    // GUILD_MEMBERS is a privileged intent - must be enabled in Discord Developer Portal
    let intents =
        GatewayIntents::GUILDS | GatewayIntents::GUILD_MESSAGES | GatewayIntents::GUILD_MEMBERS;

    let handler = Handler {
        welcome_channel_id: config.welcome_channel_id,
    };

    let client = Client::builder(&config.discord_bot_token, intents)
        .event_handler(handler)
        .await?;

    let http = client.http.clone();

    Ok((client, http))
}

/// Starts the Discord bot in a blocking manner.
///
/// This function should be called from within a tokio::spawn task since it
/// will block until the bot shuts down.
///
/// # Arguments
/// - `client` - Initialized bot client from [`init_bot`]
///
/// # Returns
/// - `Ok(())` if the bot runs until shutdown
/// - `Err(AppError)` if the gateway connection fails
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    tracing::info!("Starting Discord bot...");

    // Blocks until shutdown
    client.start().await?;

    Ok(())
}
