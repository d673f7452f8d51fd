use std::time::Duration;

use xdigest_common::Post;

use crate::models::ListTweetsResponse;
use crate::{Config, Credentials, FeedError, FeedResult};

#[derive(Clone)]
pub struct ListClient {
    client: reqwest::Client,
    base_url: String,
    credentials: Credentials,
    max_results: u32,
    timeout: Duration,
}

impl ListClient {
    pub fn new(config: &Config) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            credentials: config.auth.clone(),
            max_results: config.max_results,
            timeout: Duration::from_secs(config.timeout_secs),
        }
    }

    /// Most recent posts of a list. A failing list yields no posts instead of an error.
    pub async fn fetch(&self, list_id: &str) -> Vec<Post> {
        match self.try_fetch(list_id).await {
            Ok(posts) => {
                tracing::info!(%list_id, count = posts.len(), "fetched list");
                posts
            }
            Err(error) => {
                tracing::warn!(%error, %list_id, "failed reading list");
                Vec::new()
            }
        }
    }

    /// Fetch every list concurrently and concatenate in the given order
    pub async fn aggregate<I>(&self, list_ids: I) -> Vec<Post>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let list_ids: Vec<I::Item> = list_ids.into_iter().collect();

        let results =
            futures::future::join_all(list_ids.iter().map(|id| self.fetch(id.as_ref()))).await;

        let posts: Vec<Post> = results.into_iter().flatten().collect();

        tracing::info!(total = posts.len(), lists = list_ids.len(), "aggregated posts");

        posts
    }

    async fn try_fetch(&self, list_id: &str) -> FeedResult<Vec<Post>> {
        let url = format!("{}/2/lists/{}/tweets", self.base_url, list_id);
        let max_results = self.max_results.to_string();

        let request = self
            .client
            .get(&url)
            .query(&[
                ("max_results", max_results.as_str()),
                ("tweet.fields", "created_at,author_id,text"),
                ("expansions", "author_id"),
                ("user.fields", "username,name"),
            ])
            .timeout(self.timeout);

        let response = self.credentials.apply(request).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(FeedError::Api(format!("{status}: {body}")));
        }

        let response = response.json::<ListTweetsResponse>().await?;

        Ok(response.into_posts())
    }
}
