//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use dataprep_resources::model::dataset::Input;
use dataprep_resources::model::{Dataset, S3Location};
use dataprep_resources::{LifecycleHandler, MemoryClient, Resource, ResourceAuditLogger};

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt::try_init();
}

/// Handler for `resource` backed by `client`, with auditing switched off.
pub fn handler<R: Resource>(client: &Arc<MemoryClient>, resource: R) -> LifecycleHandler<R> {
    init_tracing();
    LifecycleHandler::new(
        client.clone(),
        Arc::new(ResourceAuditLogger::new_noop()),
        resource,
    )
}

pub fn s3_location(bucket: &str, key: &str) -> S3Location {
    S3Location {
        bucket: bucket.to_string(),
        key: Some(key.to_string()),
        bucket_owner: None,
    }
}

/// A dataset reading `input.json` from bucket `b`.
pub fn s3_dataset(name: &str) -> Dataset {
    Dataset {
        name: Some(name.to_string()),
        input: Some(Input {
            s3_input_definition: Some(s3_location("b", "input.json")),
            ..Default::default()
        }),
        ..Default::default()
    }
}
