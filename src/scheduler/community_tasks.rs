//! Community engagement jobs.
//!
//! Two cron jobs posting to the general channel:
//! - weekly project status digest (Sundays 09:00 UTC), built from GitHub
//!   repository metadata
//! - daily fun fact (10:00 UTC)
//!
//! Each job run catches and logs its own errors so one failing run never
//! stops the scheduler.

use rand::seq::IndexedRandom;
use serenity::{
    all::{ChannelId, CreateEmbed, CreateMessage, Timestamp},
    http::Http,
};
use std::sync::Arc;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::{
    config::Config,
    error::AppError,
    model::notification::NotificationColor,
    service::github::{GithubClient, RepositoryInfo},
};

const FUN_FACTS: &[&str] = &[
    "Fun fact: The first computer bug was an actual bug, a moth found in a Harvard Mark II computer in 1947!",
    "Fun fact: The term \"debugging\" was coined by Grace Hopper, a pioneering computer scientist!",
    "Fun fact: The first website ever created is still online: http://info.cern.ch/hypertext/WWW/TheProject.html",
    "Fun fact: The first computer mouse was made of wood and had only one button!",
    "Fun fact: The word \"pixel\" is a combination of \"picture\" and \"element\"!",
    "Fun fact: The first video game was \"Tennis for Two\" created in 1958!",
    "Fun fact: The first text message was sent in 1992 and said \"Merry Christmas\"!",
    "Fun fact: The qwerty keyboard layout was designed to slow down typing to prevent typewriter jams!",
];

/// Starts the community task scheduler.
///
/// Registers the weekly status and daily fun fact jobs. Both jobs post to
/// the general channel; when no general channel is configured the scheduler
/// is not started at all. The weekly status additionally needs a configured
/// GitHub repository and is skipped without one.
///
/// # Arguments
/// - `config`: Application configuration (channels, GitHub repository)
/// - `discord_http`: Discord HTTP client for sending messages
pub async fn start_scheduler(config: &Config, discord_http: Arc<Http>) -> Result<(), AppError> {
    let Some(channel_id) = config.general_channel_id else {
        tracing::info!("No general channel configured, community tasks disabled");
        return Ok(());
    };

    let scheduler = JobScheduler::new().await?;

    // Weekly project status summary (every Sunday at 9 AM)
    if let Some(repository) = &config.github_repository {
        let github = GithubClient::new(
            repository.owner.clone(),
            repository.repo.clone(),
            config.github_token.clone(),
        )?;

        let job_http = discord_http.clone();
        let job = Job::new_async("0 0 9 * * Sun", move |_uuid, _lock| {
            let github = github.clone();
            let http = job_http.clone();

            Box::pin(async move {
                if let Err(e) = send_weekly_status(&github, http, channel_id).await {
                    tracing::error!("Error sending weekly status: {}", e);
                }
            })
        })?;

        scheduler.add(job).await?;
    } else {
        tracing::info!("No GitHub repository configured, weekly status disabled");
    }

    // Daily fun fact (every day at 10 AM)
    let job_http = discord_http.clone();
    let job = Job::new_async("0 0 10 * * *", move |_uuid, _lock| {
        let http = job_http.clone();

        Box::pin(async move {
            if let Err(e) = send_daily_fun_fact(http, channel_id).await {
                tracing::error!("Error sending daily fun fact: {}", e);
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Community task scheduler started");

    Ok(())
}

/// Posts the weekly project status embed to the general channel.
async fn send_weekly_status(
    github: &GithubClient,
    discord_http: Arc<Http>,
    channel_id: u64,
) -> Result<(), AppError> {
    let info = github.get_repository_info().await?;
    let embed = build_status_embed(&info);

    ChannelId::new(channel_id)
        .send_message(&discord_http, CreateMessage::new().embed(embed))
        .await?;

    tracing::info!("Weekly status sent");

    Ok(())
}

fn build_status_embed(info: &RepositoryInfo) -> CreateEmbed {
    CreateEmbed::new()
        .title("Weekly Project Status")
        .description("Here's what happened this week in our community!")
        .color(NotificationColor::Normal.rgb())
        .field("Repository Stars", info.stargazers_count.to_string(), true)
        .field("Forks", info.forks_count.to_string(), true)
        .field("Open Issues", info.open_issues_count.to_string(), true)
        .field(
            "Language",
            info.language.clone().unwrap_or_else(|| "Multiple".to_string()),
            true,
        )
        .thumbnail(&info.owner.avatar_url)
        .timestamp(Timestamp::now())
}

/// Posts a random fun fact to the general channel.
async fn send_daily_fun_fact(discord_http: Arc<Http>, channel_id: u64) -> Result<(), AppError> {
    // FUN_FACTS is non-empty, so choose cannot return None
    let fact = FUN_FACTS
        .choose(&mut rand::rng())
        .copied()
        .unwrap_or(FUN_FACTS[0]);

    ChannelId::new(channel_id).say(&discord_http, fact).await?;

    tracing::info!("Daily fun fact sent");

    Ok(())
}
