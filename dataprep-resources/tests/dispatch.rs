//! Invocation envelope tests: JSON in, progress event out.

mod common;

use std::sync::Arc;

use dataprep_resources::invocation::OperationStatus;
use dataprep_resources::{
    HandlerErrorCode, HandlerRequest, MemoryClient, ProgressEvent, ResourceAuditLogger, dispatch,
};
use serde_json::{Value, json};

struct Harness {
    client: Arc<MemoryClient>,
    audit: Arc<ResourceAuditLogger>,
}

impl Harness {
    fn new() -> Self {
        common::init_tracing();
        Self {
            client: Arc::new(MemoryClient::new()),
            audit: Arc::new(ResourceAuditLogger::new_noop()),
        }
    }

    async fn invoke(&self, request: Value) -> ProgressEvent {
        let request: HandlerRequest = serde_json::from_value(request).unwrap();
        dispatch(self.client.clone(), self.audit.clone(), request).await
    }
}

fn dataset_state(name: &str) -> Value {
    json!({
        "Name": name,
        "Input": {"S3InputDefinition": {"Bucket": "b", "Key": "input.json"}}
    })
}

#[tokio::test]
async fn test_create_read_delete_dataset() {
    let harness = Harness::new();

    let created = harness
        .invoke(json!({
            "action": "CREATE",
            "typeName": "DataPrep::Dataset",
            "desiredResourceState": dataset_state("dataset-test")
        }))
        .await;
    assert!(created.is_success(), "{:?}", created);
    let model = created.resource_model.unwrap();
    assert_eq!(model["Name"], "dataset-test");
    assert_eq!(model["Tags"], json!([]));

    let read = harness
        .invoke(json!({
            "action": "READ",
            "typeName": "DataPrep::Dataset",
            "desiredResourceState": {"Name": "dataset-test"}
        }))
        .await;
    assert!(read.is_success());
    let model = read.resource_model.unwrap();
    assert_eq!(model["Input"]["S3InputDefinition"]["Key"], "input.json");

    let deleted = harness
        .invoke(json!({
            "action": "DELETE",
            "typeName": "DataPrep::Dataset",
            "desiredResourceState": {"Name": "dataset-test"}
        }))
        .await;
    assert!(deleted.is_success());
    assert_eq!(deleted.resource_model, None);

    let missing = harness
        .invoke(json!({
            "action": "READ",
            "typeName": "DataPrep::Dataset",
            "desiredResourceState": {"Name": "dataset-test"}
        }))
        .await;
    assert_eq!(missing.status, OperationStatus::Failed);
    assert_eq!(missing.error_code, Some(HandlerErrorCode::NotFound));
    assert_eq!(missing.resource_model, None);
}

#[tokio::test]
async fn test_duplicate_create_reports_already_exists() {
    let harness = Harness::new();
    let request = json!({
        "action": "CREATE",
        "typeName": "DataPrep::Dataset",
        "desiredResourceState": dataset_state("twice")
    });

    assert!(harness.invoke(request.clone()).await.is_success());
    let event = harness.invoke(request).await;
    assert_eq!(event.error_code, Some(HandlerErrorCode::AlreadyExists));
    assert_eq!(event.resource_model, None);
}

#[tokio::test]
async fn test_list_relays_next_token() {
    let harness = Harness::new();
    for name in ["a", "b", "c"] {
        let event = harness
            .invoke(json!({
                "action": "CREATE",
                "typeName": "DataPrep::Schedule",
                "desiredResourceState": {"Name": name, "CronExpression": "cron(0 1 * * ? *)"}
            }))
            .await;
        assert!(event.is_success());
    }

    let event = harness
        .invoke(json!({"action": "LIST", "typeName": "DataPrep::Schedule"}))
        .await;
    let models = event.resource_models.unwrap();
    assert_eq!(models.len(), 3);
    assert_eq!(models[2]["Name"], "c");
    assert_eq!(event.next_token, None);

    let event = harness
        .invoke(json!({
            "action": "LIST",
            "typeName": "DataPrep::Schedule",
            "nextToken": "2"
        }))
        .await;
    assert_eq!(event.resource_models.unwrap().len(), 1);
    assert_eq!(event.next_token.as_deref(), Some("2"));
}

#[tokio::test]
async fn test_unknown_type_is_invalid_request() {
    let harness = Harness::new();

    let event = harness
        .invoke(json!({
            "action": "CREATE",
            "typeName": "DataPrep::Widget",
            "desiredResourceState": {"Name": "w"}
        }))
        .await;
    assert_eq!(event.error_code, Some(HandlerErrorCode::InvalidRequest));
    assert_eq!(harness.client.call_count(), 0);
}

#[tokio::test]
async fn test_malformed_state_is_invalid_request() {
    let harness = Harness::new();

    let event = harness
        .invoke(json!({
            "action": "CREATE",
            "typeName": "DataPrep::Job",
            "desiredResourceState": {"Name": "j", "Type": "STREAMING"}
        }))
        .await;
    assert_eq!(event.error_code, Some(HandlerErrorCode::InvalidRequest));

    let event = harness
        .invoke(json!({"action": "READ", "typeName": "DataPrep::Job"}))
        .await;
    assert_eq!(event.error_code, Some(HandlerErrorCode::InvalidRequest));
    assert_eq!(harness.client.call_count(), 0);
}

#[tokio::test]
async fn test_event_serializes_camel_case() {
    let harness = Harness::new();

    let event = harness
        .invoke(json!({
            "action": "READ",
            "typeName": "DataPrep::Recipe",
            "desiredResourceState": {"Name": "missing"}
        }))
        .await;
    let json = serde_json::to_value(&event).unwrap();
    assert_eq!(json["status"], "FAILED");
    assert_eq!(json["errorCode"], "NotFound");
    assert!(json.get("resourceModel").is_none());
}
