use std::time::Duration;

use chrono::DateTime;
use chrono_tz::Tz;
use teloxide::payloads::SendMessageSetters;
use teloxide::prelude::Requester;
use teloxide::types::{ChatId, ParseMode};
use xdigest_common::Period;

use crate::BotResult;
use crate::utils::{format_header, split_message};

pub(crate) const CHUNK_DELAY: Duration = Duration::from_secs(1);

pub trait Delivery {
    fn send_text(&self, chat_id: i64, text: String) -> impl Future<Output = BotResult<()>> + Send;
}

#[derive(Clone)]
pub struct TelegramDelivery {
    bot: teloxide::prelude::Bot,
}

impl TelegramDelivery {
    pub fn new(bot: teloxide::prelude::Bot) -> Self {
        Self { bot }
    }
}

impl Delivery for TelegramDelivery {
    // Digests come from the model with legacy Markdown (`*bold*`), not MarkdownV2
    #[allow(deprecated)]
    async fn send_text(&self, chat_id: i64, text: String) -> BotResult<()> {
        self.bot
            .send_message(ChatId(chat_id), text)
            .parse_mode(ParseMode::Markdown)
            .await?;

        Ok(())
    }
}

/// Prepend the period header to `digest` and deliver it, one chunk at a time
pub async fn dispatch_digest<D: Delivery>(
    delivery: &D,
    chat_id: i64,
    period: Period,
    digest: &str,
    now: DateTime<Tz>,
) -> BotResult<()> {
    let full_message = format!("{}{digest}", format_header(period, &now));
    let chunks = split_message(&full_message);
    let total = chunks.len();

    for (i, chunk) in chunks.into_iter().enumerate() {
        if i > 0 {
            tokio::time::sleep(CHUNK_DELAY).await;
        }

        delivery.send_text(chat_id, chunk).await?;

        tracing::info!(%chat_id, %period, part = i + 1, total, "digest part sent");
    }

    Ok(())
}
