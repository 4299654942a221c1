use crate::error::{config::ConfigError, AppError};

const DEFAULT_COMMAND_PREFIX: &str = "f!";
const DEFAULT_DATE_CHANNEL_SCHEDULE: &str = "0 0 0 * * *";

pub struct Config {
    pub database_url: String,
    pub discord_bot_token: String,

    /// Literal prefix every text command starts with.
    pub command_prefix: String,
    /// Cron expression (with seconds) for the daily date channel refresh, evaluated
    /// in the host's local time zone.
    pub date_channel_schedule: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            discord_bot_token: std::env::var("DISCORD_BOT_TOKEN")
                .map_err(|_| ConfigError::MissingEnvVar("DISCORD_BOT_TOKEN".to_string()))?,
            command_prefix: std::env::var("COMMAND_PREFIX")
                .unwrap_or_else(|_| DEFAULT_COMMAND_PREFIX.to_string()),
            date_channel_schedule: std::env::var("DATE_CHANNEL_SCHEDULE")
                .unwrap_or_else(|_| DEFAULT_DATE_CHANNEL_SCHEDULE.to_string()),
        })
    }
}
