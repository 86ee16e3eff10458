use crate::error::{config::ConfigError, AppError};

/// GitHub repository the community jobs report on.
#[derive(Clone, Debug)]
pub struct GithubRepositoryConfig {
    pub owner: String,
    pub repo: String,
}

/// Application configuration loaded from the environment.
#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub discord_bot_token: String,

    /// Shared secret for webhook signature verification.
    pub github_webhook_secret: String,
    /// Channel that receives GitHub event notifications.
    pub github_channel_id: u64,
    /// Channel for community jobs (weekly status, fun facts). Jobs are
    /// skipped when unset.
    pub general_channel_id: Option<u64>,
    /// Channel for welcome messages. Welcomes are skipped when unset.
    pub welcome_channel_id: Option<u64>,

    /// Repository for the weekly status digest. The digest is skipped when
    /// unset.
    pub github_repository: Option<GithubRepositoryConfig>,
    /// Optional GitHub API token for higher rate limits.
    pub github_token: Option<String>,

    /// Port the webhook HTTP listener binds to.
    pub webhook_port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let github_repository = match (optional_var("GITHUB_OWNER"), optional_var("GITHUB_REPO")) {
            (Some(owner), Some(repo)) => Some(GithubRepositoryConfig { owner, repo }),
            _ => None,
        };

        Ok(Self {
            database_url: required_var("DATABASE_URL")?,
            discord_bot_token: required_var("DISCORD_BOT_TOKEN")?,
            github_webhook_secret: required_var("GITHUB_WEBHOOK_SECRET")?,
            github_channel_id: parse_u64("GITHUB_CHANNEL_ID", required_var("GITHUB_CHANNEL_ID")?)?,
            general_channel_id: optional_channel_id("GENERAL_CHANNEL_ID")?,
            welcome_channel_id: optional_channel_id("WELCOME_CHANNEL_ID")?,
            github_repository,
            github_token: optional_var("GITHUB_TOKEN"),
            webhook_port: webhook_port()?,
        })
    }
}

fn required_var(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn optional_var(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

fn parse_u64(name: &str, value: String) -> Result<u64, ConfigError> {
    value
        .parse::<u64>()
        .map_err(|_| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value,
        })
}

fn optional_channel_id(name: &str) -> Result<Option<u64>, ConfigError> {
    optional_var(name).map(|value| parse_u64(name, value)).transpose()
}

fn webhook_port() -> Result<u16, ConfigError> {
    let Some(value) = optional_var("WEBHOOK_PORT") else {
        return Ok(3001);
    };

    value
        .parse::<u16>()
        .map_err(|_| ConfigError::InvalidEnvVar {
            name: "WEBHOOK_PORT".to_string(),
            value,
        })
}
