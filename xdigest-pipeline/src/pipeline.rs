use chrono::Utc;
use chrono_tz::Tz;
use xdigest_ai::Summarizer;
use xdigest_bot::{Delivery, dispatch_digest};
use xdigest_common::Period;
use xdigest_feed::ListClient;

use crate::PipelineResult;

/// Fetch → summarize → deliver, shared by scheduled and manual runs
pub struct Pipeline<S, D> {
    feed: ListClient,
    list_ids: Vec<String>,
    summarizer: S,
    delivery: D,
    timezone: Tz,
}

impl<S: Summarizer, D: Delivery> Pipeline<S, D> {
    pub fn new(
        feed: ListClient,
        list_ids: Vec<String>,
        summarizer: S,
        delivery: D,
        timezone: Tz,
    ) -> Self {
        Self {
            feed,
            list_ids,
            summarizer,
            delivery,
            timezone,
        }
    }

    pub async fn run(&self, period: Period, chat_id: i64) -> PipelineResult<()> {
        tracing::info!(%period, %chat_id, "starting digest");

        let posts = self.feed.aggregate(&self.list_ids).await;

        let digest = self.summarizer.summarize(&posts).await?;

        let now = Utc::now().with_timezone(&self.timezone);
        dispatch_digest(&self.delivery, chat_id, period, &digest, now).await?;

        tracing::info!(%period, %chat_id, posts = posts.len(), "digest delivered");

        Ok(())
    }
}

#[cfg(test)]
impl<S, D> Pipeline<S, D> {
    pub(crate) fn summarizer(&self) -> &S {
        &self.summarizer
    }

    pub(crate) fn delivery(&self) -> &D {
        &self.delivery
    }
}
