//! HTTP adapter failure mapping against the stub trigger API

use axum::http::StatusCode;
use std::time::Duration;

use trigctl_core::domain::{Metadata, MessageQueueTrigger, MessageQueueType};
use trigctl_core::port::TriggerClient;
use trigctl_core::AppError;
use trigctl_integration_tests::StubController;
use trigctl_sdk::{ClientConfig, SdkError, TriggerApiClient};

fn sample(name: &str) -> MessageQueueTrigger {
    MessageQueueTrigger::new(
        name,
        Metadata::named("hello"),
        MessageQueueType::NatsStreaming,
        "orders",
        None,
    )
}

async fn client_for(stub: &StubController) -> TriggerApiClient {
    let url = stub.spawn().await;
    TriggerApiClient::connect(url).unwrap()
}

#[tokio::test]
async fn test_created_metadata_is_returned() {
    let stub = StubController::default();
    let client = client_for(&stub).await;

    let metadata = client.create_trigger(&sample("t1")).await.unwrap();
    assert_eq!(metadata.name, "t1");
    assert_eq!(metadata.uid.as_deref(), Some("uid-t1"));
}

#[tokio::test]
async fn test_conflict_keeps_server_message() {
    let stub = StubController::default();
    stub.insert(sample("t1"));
    let client = client_for(&stub).await;

    let err = client.create_trigger(&sample("t1")).await.unwrap_err();
    match err {
        SdkError::Status { status, message } => {
            assert_eq!(status, 409);
            assert_eq!(message, "trigger 't1' already exists");
        }
        other => panic!("unexpected error: {}", other),
    }
}

#[tokio::test]
async fn test_server_error_becomes_remote_error() {
    let stub = StubController::default();
    stub.fail_with(StatusCode::INTERNAL_SERVER_ERROR, "  storage unavailable\n");
    let client = client_for(&stub).await;

    let err = TriggerClient::list(&client, None).await.unwrap_err();
    assert!(matches!(err, AppError::Remote(_)));
    assert_eq!(
        err.to_string(),
        "Remote error: Server error (500): storage unavailable"
    );
}

#[tokio::test]
async fn test_empty_error_body_uses_reason_phrase() {
    let stub = StubController::default();
    stub.fail_with(StatusCode::SERVICE_UNAVAILABLE, "");
    let client = client_for(&stub).await;

    let err = client.delete_trigger(&Metadata::named("t1")).await.unwrap_err();
    assert!(matches!(
        err,
        SdkError::Status { status: 503, ref message } if message == "Service Unavailable"
    ));
}

#[tokio::test]
async fn test_missing_trigger_is_not_found() {
    let stub = StubController::default();
    let client = client_for(&stub).await;

    let err = TriggerClient::get(&client, &Metadata::named("ghost"))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(ref what) if what.contains("'ghost'")));
}

#[tokio::test]
async fn test_undecodable_body_is_decode_error() {
    let stub = StubController::default();
    stub.fail_with(StatusCode::OK, "not json");
    let client = client_for(&stub).await;

    let err = client.list_triggers(None).await.unwrap_err();
    assert!(matches!(err, SdkError::Decode(_)));
}

#[tokio::test]
async fn test_unreachable_server_is_remote_error() {
    // grab a free port, then close it
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let config =
        ClientConfig::new(format!("http://{}", addr)).with_timeout(Duration::from_secs(2));
    let client = TriggerApiClient::new(config).unwrap();

    let err = TriggerClient::create(&client, &sample("t1")).await.unwrap_err();
    assert!(matches!(err, AppError::Remote(_)));
}
