use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

mod bot;
mod config;
mod controller;
mod data;
mod error;
mod model;
mod router;
mod scheduler;
mod service;
mod startup;
mod state;

use crate::{
    config::Config, error::AppError, scheduler::community_tasks,
    service::github_notification::posting::DiscordSink, state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "repoherald=info,tower_http=info".into()),
        )
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;

    tracing::info!("Starting server");

    // Initialize Discord bot and extract its HTTP client
    let (bot_client, discord_http) = bot::start::init_bot(&config).await?;

    // Start Discord bot in a separate task
    tokio::spawn(async move {
        if let Err(e) = bot::start::start_bot(bot_client).await {
            tracing::error!("Discord bot error: {}", e);
        }
    });

    // Start community task scheduler
    let scheduler_config = config.clone();
    let scheduler_http = discord_http.clone();
    tokio::spawn(async move {
        if let Err(e) = community_tasks::start_scheduler(&scheduler_config, scheduler_http).await {
            tracing::error!("Community task scheduler error: {}", e);
        }
    });

    // Webhook server
    let sink = Arc::new(DiscordSink::new(discord_http));
    let state = AppState::new(
        db,
        sink,
        config.github_webhook_secret.clone(),
        config.github_channel_id,
    );
    let app = router::router().with_state(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.webhook_port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Webhook server running on port {}", config.webhook_port);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        return;
    }

    tracing::info!("Shutting down bot...");
}
