#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("AI error: {0}")]
    AI(#[from] xdigest_ai::DigestAiError),

    #[error("Delivery error: {0}")]
    Delivery(#[from] xdigest_bot::BotError),

    #[error("No target chat configured for scheduled digests")]
    NoTargetChat,

    #[error("Invalid schedule time {hour:02}:{minute:02}")]
    InvalidSchedule { hour: u32, minute: u32 },
}

pub type PipelineResult<T> = Result<T, PipelineError>;
