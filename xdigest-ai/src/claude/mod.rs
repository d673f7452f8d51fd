mod config;
mod models;

pub use config::Config;
use xdigest_common::Post;

use crate::claude::models::{Message, MessagesRequest, MessagesResponse, Role};
use crate::{DigestAiError, DigestAiResult, NO_POSTS_MESSAGE, Summarizer, build_prompt};

pub struct ClaudeClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
    max_tokens: u32,
}

impl ClaudeClient {
    pub fn new(config: &Config) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: config.api_key.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            max_tokens: config.max_tokens,
        }
    }
}

impl Summarizer for ClaudeClient {
    async fn summarize(&self, posts: &[Post]) -> DigestAiResult<String> {
        if posts.is_empty() {
            return Ok(NO_POSTS_MESSAGE.to_string());
        }

        let request = MessagesRequest {
            model: &self.model,
            max_tokens: self.max_tokens,
            messages: [Message {
                role: Role::User,
                content: build_prompt(posts),
            }],
        };

        tracing::info!(posts = posts.len(), model = %self.model, "requesting summary");

        let response = self
            .client
            .post(format!("{}/v1/messages", self.base_url))
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", "2023-06-01")
            .header("content-type", "application/json")
            .json(&request)
            .send()
            .await?;

        // Check status before parsing
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::error!(%status, %body, "Claude API error");
            return Err(DigestAiError::Api(format!("{status}: {body}")));
        }

        let response = response.json::<MessagesResponse>().await?;

        if let Some(error) = response.error {
            return Err(DigestAiError::Api(error.message));
        }

        Ok(response
            .content
            .into_iter()
            .next()
            .and_then(|block| block.text)
            .unwrap_or_else(|| "No se generó ningún resumen.".to_string()))
    }
}
