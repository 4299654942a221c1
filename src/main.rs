mod bot;
mod command;
mod config;
mod data;
mod error;
mod model;
mod scheduler;
mod service;
mod startup;
mod util;

use std::sync::Arc;

use crate::{
    bot::gateway::SerenityGateway, command::registry::CommandRegistry, config::Config,
    error::AppError, scheduler::date_channel,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;
    let db = startup::connect_to_database(&config).await?;

    let registry = Arc::new(CommandRegistry::load());
    tracing::info!("Loaded {} commands", registry.len());

    let client = bot::start::init_bot(&config, db.clone(), registry.clone()).await?;

    // Start date channel scheduler
    let gateway = SerenityGateway::new(client.http.clone(), client.cache.clone());
    date_channel::start_scheduler(
        db,
        gateway,
        registry,
        config.command_prefix.clone(),
        &config.date_channel_schedule,
    )
    .await?;

    bot::start::start_bot(client).await
}
