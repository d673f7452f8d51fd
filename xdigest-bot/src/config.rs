#[derive(Debug, Clone, Default, serde::Deserialize)]
#[serde(default)]
pub struct Config {
    pub token: String,
    /// Chat that receives the scheduled digests
    pub chat_id: Option<i64>,
    /// Self-hosted Bot API server, `https://api.telegram.org` when unset
    pub api_url: Option<String>,
}
