#[derive(Debug, thiserror::Error)]
pub enum DigestAiError {
    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: {0}")]
    Api(String),
}

pub type DigestAiResult<T> = Result<T, DigestAiError>;
