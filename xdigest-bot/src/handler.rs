use teloxide::prelude::Requester;
use teloxide::utils::command::BotCommands;
use tokio::sync::{mpsc, oneshot};
use xdigest_common::command::DigestCommand;

use crate::command::Command;
use crate::response;

pub async fn handle_command(
    bot: teloxide::prelude::Bot,
    msg: teloxide::prelude::Message,
    me: teloxide::types::Me,
    digest_tx: mpsc::Sender<DigestCommand>,
) -> teloxide::prelude::ResponseResult<()> {
    let Some(text) = msg.text() else {
        return Ok(());
    };

    let response = match BotCommands::parse(text, me.username()) {
        Ok(Command::Start) => Some(response::start()),
        Ok(Command::Help) => Some(response::help()),
        Ok(Command::Resumen) => {
            let chat_id = msg.chat.id;

            tracing::info!(chat_id = chat_id.0, "manual digest requested");

            let acknowledge = async {
                bot.send_message(chat_id, response::generating()).await?;
                Ok::<_, teloxide::RequestError>(())
            };

            request_digest(&digest_tx, chat_id.0, acknowledge).await?
        }
        Err(_) => Some(response::unknown_command()),
    };

    if let Some(response) = response {
        bot.send_message(msg.chat.id, response).await?;
    }

    Ok(())
}

/// Acknowledge the request, then wait for the digest service to run the pipeline.
///
/// Returns the reply to send back, `None` when the delivered digest is the reply.
pub(crate) async fn request_digest<E>(
    digest_tx: &mpsc::Sender<DigestCommand>,
    chat_id: i64,
    acknowledge: impl Future<Output = Result<(), E>>,
) -> Result<Option<String>, E> {
    acknowledge.await?;

    let (tx, rx) = oneshot::channel();
    if let Err(error) = digest_tx
        .send(DigestCommand::Generate {
            chat_id,
            response: tx,
        })
        .await
    {
        tracing::error!(%error, "digest service is not running");
    }

    Ok(match rx.await {
        Ok(Ok(())) => None,
        Ok(Err(error)) => Some(response::pipeline_error(&error)),
        Err(_) => Some(response::internal_server_error()),
    })
}
