#[derive(Debug, thiserror::Error)]
pub enum BotError {
    #[error("Telegram request error: {0}")]
    Request(#[from] teloxide::RequestError),
}

pub type BotResult<T> = Result<T, BotError>;
