use std::sync::Arc;

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use tokio::sync::mpsc;
use tokio::task::JoinSet;
use tokio::time::Instant;
use xdigest_ai::Summarizer;
use xdigest_bot::Delivery;
use xdigest_common::Period;
use xdigest_common::command::DigestCommand;

use crate::{Pipeline, PipelineError, Schedule};

pub struct DigestService<S, D> {
    pipeline: Arc<Pipeline<S, D>>,
    schedule: Schedule,
    default_chat_id: Option<i64>,
    command_rx: mpsc::Receiver<DigestCommand>,
}

impl<S, D> DigestService<S, D>
where
    S: Summarizer + Send + Sync + 'static,
    D: Delivery + Send + Sync + 'static,
{
    pub fn new(
        pipeline: Pipeline<S, D>,
        schedule: Schedule,
        default_chat_id: Option<i64>,
        command_rx: mpsc::Receiver<DigestCommand>,
    ) -> Self {
        Self {
            pipeline: Arc::new(pipeline),
            schedule,
            default_chat_id,
            command_rx,
        }
    }

    pub async fn run(mut self) {
        let mut runs = JoinSet::new();
        let mut announced = None;

        tracing::info!(timezone = %self.schedule.timezone(), "digest service started");

        loop {
            let next = self.schedule.next_after(Utc::now());

            let deadline = next.as_ref().map(|(at, _)| {
                let wait = (at.with_timezone(&Utc) - Utc::now())
                    .to_std()
                    .unwrap_or_default();
                Instant::now() + wait
            });

            if let Some((at, period)) = &next {
                if is_new_deadline(&mut announced, at) {
                    tracing::info!(%period, at = %at.format("%d/%m/%Y %H:%M"), "next scheduled digest");
                }
            }

            tokio::select! {
                cmd = self.command_rx.recv() => {
                    match cmd {
                        None | Some(DigestCommand::Shutdown) => {
                            tracing::warn!("received shutdown command");
                            break;
                        }
                        Some(cmd) => self.handle_command(cmd, &mut runs),
                    }
                }

                _ = tokio::time::sleep_until(deadline.unwrap_or_else(Instant::now)), if deadline.is_some() => {
                    if let Some((_, period)) = next {
                        tracing::info!(%period, "scheduled digest triggered");
                        let pipeline = Arc::clone(&self.pipeline);
                        runs.spawn(run_scheduled(pipeline, period, self.default_chat_id));
                    }
                }

                Some(result) = runs.join_next() => {
                    if let Err(error) = result {
                        tracing::error!(%error, "digest task panicked");
                    }
                }
            }
        }

        tracing::info!(in_flight = runs.len(), "waiting for running digests...");
        while runs.join_next().await.is_some() {}
    }

    fn handle_command(&self, cmd: DigestCommand, runs: &mut JoinSet<()>) {
        let Some(chat_id) = cmd.get_chat_id() else {
            return;
        };

        let pipeline = Arc::clone(&self.pipeline);

        runs.spawn(async move {
            let result = pipeline.run(Period::Manual, chat_id).await;

            if let Err(error) = &result {
                tracing::error!(%error, %chat_id, "manual digest failed");
            }

            cmd.respond(result.map_err(|e| e.to_string()));
        });
    }
}

/// Failures end here: an unattended run must not take the process down
/// True the first time a deadline is seen; the loop wakes for every command and
/// finished run.
pub(crate) fn is_new_deadline(announced: &mut Option<DateTime<Tz>>, at: &DateTime<Tz>) -> bool {
    if announced.as_ref() == Some(at) {
        return false;
    }

    *announced = Some(*at);
    true
}

pub(crate) async fn run_scheduled<S: Summarizer, D: Delivery>(
    pipeline: Arc<Pipeline<S, D>>,
    period: Period,
    chat_id: Option<i64>,
) {
    let result = match chat_id {
        Some(chat_id) => pipeline.run(period, chat_id).await,
        None => Err(PipelineError::NoTargetChat),
    };

    if let Err(error) = result {
        tracing::error!(%error, %period, "scheduled digest failed");
    }
}
