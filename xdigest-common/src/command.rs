use tokio::sync::oneshot;

#[derive(Debug)]
pub enum DigestCommand {
    /// Build a digest right now and deliver it to `chat_id`
    Generate {
        chat_id: i64,
        response: oneshot::Sender<Result<(), String>>,
    },

    Shutdown,
}

impl DigestCommand {
    pub fn get_chat_id(&self) -> Option<i64> {
        match self {
            DigestCommand::Generate { chat_id, .. } => Some(*chat_id),
            DigestCommand::Shutdown => None,
        }
    }

    /// Reply to the requester, ignoring a dropped receiver
    pub fn respond(self, result: Result<(), String>) {
        if let DigestCommand::Generate { response, .. } = self {
            let _ = response.send(result);
        }
    }
}
