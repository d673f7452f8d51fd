use std::sync::Arc;

use chrono::TimeZone;
use tokio::sync::{mpsc, oneshot};
use wiremock::MockServer;
use xdigest_common::Period;
use xdigest_common::command::DigestCommand;

use crate::service::{is_new_deadline, run_scheduled};
use crate::tests::fakes::{FakeSummarizer, mount_lists, pipeline_for};
use crate::{Config, DigestService, Schedule};

fn no_slots() -> Schedule {
    Schedule::new(&Config {
        slots: vec![],
        ..Default::default()
    })
    .unwrap()
}

#[tokio::test]
async fn test_scheduled_failure_is_swallowed() {
    let server = MockServer::start().await;
    let list_ids = mount_lists(&server, &[Some(1)]).await;

    let pipeline = Arc::new(pipeline_for(
        &server,
        list_ids,
        FakeSummarizer::failing("model down"),
    ));

    // returns normally instead of propagating the error
    run_scheduled(Arc::clone(&pipeline), Period::Morning, Some(10)).await;
    run_scheduled(Arc::clone(&pipeline), Period::Evening, Some(10)).await;

    assert_eq!(pipeline.summarizer_calls().len(), 2);
    assert!(pipeline.sent_messages().is_empty());
}

#[tokio::test]
async fn test_scheduled_without_chat_does_nothing() {
    let server = MockServer::start().await;
    let list_ids = mount_lists(&server, &[Some(1)]).await;

    let pipeline = Arc::new(pipeline_for(&server, list_ids, FakeSummarizer::replying("ok")));

    run_scheduled(Arc::clone(&pipeline), Period::Morning, None).await;

    assert!(pipeline.summarizer_calls().is_empty());
    assert!(pipeline.sent_messages().is_empty());
}

#[tokio::test]
async fn test_manual_command_reports_error() {
    let server = MockServer::start().await;
    let list_ids = mount_lists(&server, &[Some(1)]).await;

    let pipeline = pipeline_for(&server, list_ids, FakeSummarizer::failing("quota exceeded"));

    let (command_tx, command_rx) = mpsc::channel(4);
    let service = DigestService::new(pipeline, no_slots(), Some(1), command_rx);
    let handle = tokio::spawn(service.run());

    let (tx, rx) = oneshot::channel();
    command_tx
        .send(DigestCommand::Generate {
            chat_id: 77,
            response: tx,
        })
        .await
        .unwrap();

    let error = rx.await.unwrap().unwrap_err();
    assert!(error.contains("quota exceeded"));

    command_tx.send(DigestCommand::Shutdown).await.unwrap();
    handle.await.unwrap();
}

#[tokio::test]
async fn test_manual_command_delivers_to_requester() {
    let server = MockServer::start().await;
    let list_ids = mount_lists(&server, &[Some(2)]).await;

    let pipeline = pipeline_for(&server, list_ids, FakeSummarizer::replying("listo"));

    let (command_tx, command_rx) = mpsc::channel(4);
    let service = DigestService::new(pipeline, no_slots(), Some(1), command_rx);
    let handle = tokio::spawn(service.run());

    let (tx, rx) = oneshot::channel();
    command_tx
        .send(DigestCommand::Generate {
            chat_id: 77,
            response: tx,
        })
        .await
        .unwrap();

    assert_eq!(rx.await.unwrap(), Ok(()));

    // closing the channel stops the service
    drop(command_tx);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_service_keeps_running_after_failure() {
    let server = MockServer::start().await;
    let list_ids = mount_lists(&server, &[Some(1)]).await;

    let pipeline = pipeline_for(&server, list_ids, FakeSummarizer::failing("boom"));

    let (command_tx, command_rx) = mpsc::channel(4);
    let service = DigestService::new(pipeline, no_slots(), None, command_rx);
    let handle = tokio::spawn(service.run());

    for _ in 0..2 {
        let (tx, rx) = oneshot::channel();
        command_tx
            .send(DigestCommand::Generate {
                chat_id: 3,
                response: tx,
            })
            .await
            .unwrap();

        assert!(rx.await.unwrap().is_err());
    }

    assert!(!handle.is_finished());

    command_tx.send(DigestCommand::Shutdown).await.unwrap();
    handle.await.unwrap();
}

#[test]
fn test_deadline_announced_once() {
    let tz = chrono_tz::America::Argentina::Buenos_Aires;
    let morning = tz.with_ymd_and_hms(2026, 3, 2, 6, 0, 0).unwrap();
    let evening = tz.with_ymd_and_hms(2026, 3, 2, 18, 0, 0).unwrap();
    let mut announced = None;

    assert!(is_new_deadline(&mut announced, &morning));
    assert!(!is_new_deadline(&mut announced, &morning));
    assert!(!is_new_deadline(&mut announced, &morning));
    assert!(is_new_deadline(&mut announced, &evening));
    assert!(!is_new_deadline(&mut announced, &evening));
}
