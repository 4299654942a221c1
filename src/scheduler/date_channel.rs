use std::sync::Arc;

use chrono::Local;
use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::{
    bot::gateway::{GuildGateway, SerenityGateway},
    command::{registry::CommandRegistry, update_date::UPDATE_DATE, CommandContext, CommandEnv},
    data::stat_channel::StatChannelRepository,
    error::AppError,
    model::stat_channel::StatKind,
};

/// Starts the date channel scheduler
///
/// Runs `updatedate` automatically for every guild with a date channel, on the
/// configured cron schedule evaluated in the host's local time zone (daily at
/// local midnight by default).
///
/// # Arguments
/// - `db`: Database connection
/// - `gateway`: Discord access shared with the bot client
/// - `registry`: Commands, to look up `updatedate`
/// - `prefix`: Command prefix, carried into the command context
/// - `schedule`: Cron expression with a seconds field
pub async fn start_scheduler(
    db: DatabaseConnection,
    gateway: SerenityGateway,
    registry: Arc<CommandRegistry>,
    prefix: String,
    schedule: &str,
) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;

    let job = date_channel_job(schedule, db, Arc::new(gateway), registry, prefix)?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Date channel scheduler started with schedule `{}`", schedule);

    Ok(())
}

/// Builds the cron job refreshing date channels.
///
/// The schedule fires in `Local` time, the same zone `updatedate` reads today's
/// date from, so the rename lands right after the local date changes.
pub fn date_channel_job(
    schedule: &str,
    db: DatabaseConnection,
    gateway: Arc<dyn GuildGateway>,
    registry: Arc<CommandRegistry>,
    prefix: String,
) -> Result<Job, AppError> {
    let job = Job::new_async_tz(schedule, Local, move |_uuid, _lock| {
        let db = db.clone();
        let gateway = gateway.clone();
        let registry = registry.clone();
        let prefix = prefix.clone();

        Box::pin(async move {
            let env = CommandEnv {
                db: &db,
                gateway: &*gateway,
                registry: &registry,
                prefix: &prefix,
            };

            match refresh_date_channels(env).await {
                Ok(count) => tracing::info!("Refreshed date channels of {} guilds", count),
                Err(e) => tracing::error!("Error refreshing date channels: {}", e),
            }
        })
    })?;

    Ok(job)
}

/// Runs `updatedate` automatically for every guild with a date channel.
///
/// A failure in one guild is logged and does not stop the others.
///
/// # Returns
/// - `Ok(usize)` - Number of guilds the command ran for
/// - `Err(AppError)` - Date channel records could not be loaded
pub async fn refresh_date_channels(env: CommandEnv<'_>) -> Result<usize, AppError> {
    let Some(command) = env.registry.find(UPDATE_DATE) else {
        tracing::warn!("`{}` is not registered, skipping date refresh", UPDATE_DATE);
        return Ok(0);
    };

    let date_channels = StatChannelRepository::new(env.db)
        .get_all_by_kind(StatKind::Date)
        .await?;

    for date_channel in &date_channels {
        let ctx = CommandContext::automatic(env, date_channel.guild_id);

        if let Err(e) = command.execute(&ctx).await {
            tracing::error!(
                "Failed to refresh date channel of guild {}: {}",
                date_channel.guild_id,
                e
            );
        }
    }

    Ok(date_channels.len())
}
