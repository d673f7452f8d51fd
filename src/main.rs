mod config;

use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;
use xdigest_ai::claude::ClaudeClient;
use xdigest_bot::DigestBot;
use xdigest_common::command::DigestCommand;
use xdigest_feed::ListClient;
use xdigest_pipeline::{DigestService, Pipeline, Schedule};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = config::Config::new()?;
    config.log_status();

    let schedule = Schedule::new(&config.schedule)?;

    let (digest_tx, digest_rx) = mpsc::channel(32);

    let bot = DigestBot::new(&config.bot, digest_tx.clone());

    let pipeline = Pipeline::new(
        ListClient::new(&config.feed),
        config.feed.list_ids.clone(),
        ClaudeClient::new(&config.ai),
        bot.delivery(),
        schedule.timezone(),
    );

    let service = DigestService::new(pipeline, schedule, config.bot.chat_id, digest_rx);
    let service_handle = tokio::spawn(service.run());

    let bot_handle = tokio::spawn(async move {
        if let Err(error) = bot.run().await {
            tracing::error!(%error, "telegram bot is not running, scheduled digests continue");
        }
    });

    tokio::signal::ctrl_c().await?;
    tracing::warn!("ctrl-c received, shutting down");

    if let Err(error) = digest_tx.send(DigestCommand::Shutdown).await {
        tracing::error!(%error, "digest service already stopped");
    }

    service_handle.await?;

    if let Err(error) = bot_handle.await {
        tracing::error!(%error, "telegram bot task failed");
    }

    Ok(())
}
