#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: {0}")]
    Api(String),
}

pub type FeedResult<T> = Result<T, FeedError>;
