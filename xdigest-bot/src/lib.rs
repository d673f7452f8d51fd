mod command;
mod config;
mod delivery;
mod error;
mod handler;
pub mod response;
mod utils;

pub use config::Config;
pub use delivery::{Delivery, TelegramDelivery, dispatch_digest};
pub use error::*;
use teloxide::dispatching::UpdateFilterExt;
use teloxide::prelude::Requester;
use teloxide::utils::command::BotCommands;
use tokio::sync::mpsc;
pub use utils::{format_header, split_message};
use xdigest_common::command::DigestCommand;

use crate::command::Command;

pub struct DigestBot {
    bot: teloxide::prelude::Bot,
    digest_tx: mpsc::Sender<DigestCommand>,
}

impl DigestBot {
    pub fn new(config: &Config, digest_tx: mpsc::Sender<DigestCommand>) -> Self {
        let mut bot = teloxide::prelude::Bot::new(&config.token);

        if let Some(api_url) = &config.api_url {
            match reqwest::Url::parse(api_url) {
                Ok(url) => bot = bot.set_api_url(url),
                Err(error) => tracing::warn!(%error, %api_url, "ignoring invalid bot API url"),
            }
        }

        Self { bot, digest_tx }
    }

    pub fn delivery(&self) -> TelegramDelivery {
        TelegramDelivery::new(self.bot.clone())
    }

    /// Long-poll for commands until ctrl-c.
    ///
    /// Fails without polling when the bot can't identify itself (missing or invalid
    /// token, API unreachable).
    pub async fn run(self) -> BotResult<()> {
        tracing::info!("Starting Telegram bot...");

        let me = self.bot.get_me().await?;
        tracing::info!(username = me.username(), "logged in as bot");

        if let Err(error) = self.bot.set_my_commands(Command::bot_commands()).await {
            tracing::warn!(%error, "failed registering bot commands");
        }

        let handler = teloxide::prelude::Update::filter_message().endpoint(handler::handle_command);

        teloxide::prelude::Dispatcher::builder(self.bot, handler)
            .dependencies(teloxide::prelude::dptree::deps![self.digest_tx])
            .enable_ctrlc_handler()
            .build()
            .dispatch()
            .await;

        tracing::info!("Telegram bot stopped");

        Ok(())
    }
}

#[cfg(test)]
mod tests;
