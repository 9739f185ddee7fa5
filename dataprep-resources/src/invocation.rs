//! Invocation envelope and dispatcher.
//!
//! A [`HandlerRequest`] names a resource type and an action and carries the
//! desired state as raw JSON. [`dispatch`] decodes the model for that type,
//! runs the matching lifecycle handler and wraps the outcome in a
//! [`ProgressEvent`].

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

use crate::audit::ResourceAuditLogger;
use crate::handler::{self, Action, HandlerError, HandlerErrorCode, LifecycleHandler, Resource};
use crate::remote::DataPrepClient;
use crate::resources::{
    DatasetResource, JobResource, ProjectResource, RecipeResource, RulesetResource,
    ScheduleResource,
};

/// Resource types the handlers serve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Dataset,
    Job,
    Project,
    Recipe,
    Ruleset,
    Schedule,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 6] = [
        ResourceKind::Dataset,
        ResourceKind::Job,
        ResourceKind::Project,
        ResourceKind::Recipe,
        ResourceKind::Ruleset,
        ResourceKind::Schedule,
    ];

    pub fn type_name(self) -> &'static str {
        match self {
            ResourceKind::Dataset => "DataPrep::Dataset",
            ResourceKind::Job => "DataPrep::Job",
            ResourceKind::Project => "DataPrep::Project",
            ResourceKind::Recipe => "DataPrep::Recipe",
            ResourceKind::Ruleset => "DataPrep::Ruleset",
            ResourceKind::Schedule => "DataPrep::Schedule",
        }
    }

    pub fn from_type_name(type_name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.type_name() == type_name)
    }
}

/// One lifecycle invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HandlerRequest {
    pub action: Action,
    pub type_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desired_resource_state: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OperationStatus {
    Success,
    Failed,
}

/// Outcome of one invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressEvent {
    pub status: OperationStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_code: Option<HandlerErrorCode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_model: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_models: Option<Vec<Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

impl ProgressEvent {
    fn success() -> Self {
        Self {
            status: OperationStatus::Success,
            error_code: None,
            message: None,
            resource_model: None,
            resource_models: None,
            next_token: None,
        }
    }

    pub fn with_model(model: Value) -> Self {
        Self {
            resource_model: Some(model),
            ..Self::success()
        }
    }

    pub fn with_models(models: Vec<Value>, next_token: Option<String>) -> Self {
        Self {
            resource_models: Some(models),
            next_token,
            ..Self::success()
        }
    }

    pub fn empty() -> Self {
        Self::success()
    }

    /// A failure carries a code and message, never a model.
    pub fn failed(err: HandlerError) -> Self {
        Self {
            status: OperationStatus::Failed,
            error_code: Some(err.code),
            message: Some(err.message),
            ..Self::success()
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == OperationStatus::Success
    }
}

/// Run one invocation against `client`.
pub async fn dispatch(
    client: Arc<dyn DataPrepClient>,
    audit: Arc<ResourceAuditLogger>,
    request: HandlerRequest,
) -> ProgressEvent {
    let Some(kind) = ResourceKind::from_type_name(&request.type_name) else {
        return ProgressEvent::failed(HandlerError::invalid_request(format!(
            "Unknown resource type {}",
            request.type_name
        )));
    };

    let result = match kind {
        ResourceKind::Dataset => {
            run(LifecycleHandler::new(client, audit, DatasetResource), request).await
        }
        ResourceKind::Job => run(LifecycleHandler::new(client, audit, JobResource), request).await,
        ResourceKind::Project => {
            run(LifecycleHandler::new(client, audit, ProjectResource), request).await
        }
        ResourceKind::Recipe => {
            run(LifecycleHandler::new(client, audit, RecipeResource), request).await
        }
        ResourceKind::Ruleset => {
            run(LifecycleHandler::new(client, audit, RulesetResource), request).await
        }
        ResourceKind::Schedule => {
            run(LifecycleHandler::new(client, audit, ScheduleResource), request).await
        }
    };

    match result {
        Ok(event) => event,
        Err(err) => ProgressEvent::failed(err),
    }
}

async fn run<R>(
    handler: LifecycleHandler<R>,
    request: HandlerRequest,
) -> handler::Result<ProgressEvent>
where
    R: Resource,
    R::Model: Serialize + DeserializeOwned,
{
    info!(type_name = %request.type_name, action = %request.action, "Dispatching");

    match request.action {
        Action::Create => {
            let model = handler.create(desired_state(&request)?).await?;
            Ok(ProgressEvent::with_model(to_value(&model)?))
        }
        Action::Read => {
            let model = handler.read(&desired_state(&request)?).await?;
            Ok(ProgressEvent::with_model(to_value(&model)?))
        }
        Action::Update => {
            let model = handler.update(desired_state(&request)?).await?;
            Ok(ProgressEvent::with_model(to_value(&model)?))
        }
        Action::Delete => {
            handler.delete(&desired_state(&request)?).await?;
            Ok(ProgressEvent::empty())
        }
        Action::List => {
            let page = handler.list(request.next_token).await?;
            let models = page
                .models
                .iter()
                .map(to_value)
                .collect::<handler::Result<Vec<_>>>()?;
            Ok(ProgressEvent::with_models(models, page.next_token))
        }
    }
}

fn desired_state<M: DeserializeOwned>(request: &HandlerRequest) -> handler::Result<M> {
    let state = request
        .desired_resource_state
        .clone()
        .ok_or_else(|| HandlerError::invalid_request("desiredResourceState is required"))?;
    serde_json::from_value(state)
        .map_err(|e| HandlerError::invalid_request(format!("Malformed resource model: {}", e)))
}

fn to_value<M: Serialize>(model: &M) -> handler::Result<Value> {
    serde_json::to_value(model).map_err(|e| {
        HandlerError::new(
            HandlerErrorCode::ServiceInternalError,
            format!("Failed to encode resource model: {}", e),
        )
    })
}
