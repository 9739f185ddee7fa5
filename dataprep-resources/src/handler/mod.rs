//! Generic lifecycle handler.
//!
//! One [`LifecycleHandler`] drives Create, Read, Update, Delete and List for
//! every entity type. The entity-specific parts (request construction,
//! structural preconditions, the remote call, response mapping) live behind
//! the [`Resource`] trait, implemented once per entity in
//! [`crate::resources`].
//!
//! Every invocation walks `Validating -> Executing -> MappingResult -> Done`
//! and drops to `Failed` from wherever it stops. A failure never carries a
//! model.

pub mod error;

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::audit::ResourceAuditLogger;
use crate::model::ResourceModel;
use crate::remote::{self, DataPrepClient, ListRequest, ServiceError};

pub use error::{HandlerError, HandlerErrorCode, translate};

/// Page size requested from the service on every List.
pub const PAGE_SIZE: i32 = 100;

/// Result type for lifecycle operations.
pub type Result<T> = std::result::Result<T, HandlerError>;

/// Lifecycle action requested by the control plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Action {
    Create,
    Read,
    Update,
    Delete,
    List,
}

impl Action {
    pub fn as_str(self) -> &'static str {
        match self {
            Action::Create => "CREATE",
            Action::Read => "READ",
            Action::Update => "UPDATE",
            Action::Delete => "DELETE",
            Action::List => "LIST",
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Invocation phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Validating,
    Executing,
    MappingResult,
    Done,
    Failed,
}

/// Capabilities one entity type plugs into the lifecycle handler.
#[async_trait]
pub trait Resource: Send + Sync {
    /// Declarative model.
    type Model: ResourceModel + Clone + Send + Sync;
    type CreateRequest: Send;
    type UpdateRequest: Send;
    /// Full service description returned by a read.
    type Remote: Send;
    /// Service listing entry.
    type Summary: Send;

    /// Entity name used in logs and audit records.
    const KIND: &'static str;

    /// Check create preconditions and build the service request.
    fn create_request(&self, model: &Self::Model) -> Result<Self::CreateRequest>;

    /// Check update preconditions and build the service request.
    fn update_request(&self, model: &Self::Model) -> Result<Self::UpdateRequest>;

    /// Full model from a read.
    fn read_model(&self, remote: Self::Remote) -> Self::Model;

    /// Projected model from a listing entry.
    fn list_model(&self, item: Self::Summary) -> Self::Model;

    async fn send_create(
        &self,
        client: &dyn DataPrepClient,
        request: Self::CreateRequest,
    ) -> remote::Result<()>;

    async fn send_read(&self, client: &dyn DataPrepClient, name: &str)
    -> remote::Result<Self::Remote>;

    async fn send_update(
        &self,
        client: &dyn DataPrepClient,
        request: Self::UpdateRequest,
    ) -> remote::Result<()>;

    async fn send_delete(&self, client: &dyn DataPrepClient, name: &str) -> remote::Result<()>;

    async fn send_list(
        &self,
        client: &dyn DataPrepClient,
        request: ListRequest,
    ) -> remote::Result<Vec<Self::Summary>>;
}

/// One page of a List.
#[derive(Debug, Clone, PartialEq)]
pub struct ListPage<M> {
    pub models: Vec<M>,
    /// The cursor the caller passed in, relayed unchanged.
    pub next_token: Option<String>,
}

/// Require an optional field, failing with `InvalidRequest`.
pub(crate) fn required<'a, T: ?Sized>(value: Option<&'a T>, field: &str) -> Result<&'a T> {
    value.ok_or_else(|| HandlerError::invalid_request(format!("{} is required", field)))
}

/// Require the identity field.
pub(crate) fn required_name<M: ResourceModel>(model: &M) -> Result<&str> {
    required(model.name(), "Name")
}

/// Phase bookkeeping for a single invocation.
struct Progress {
    kind: &'static str,
    action: Action,
    name: Option<String>,
    phase: Phase,
}

impl Progress {
    fn start(kind: &'static str, action: Action, name: Option<&str>) -> Self {
        let progress = Self {
            kind,
            action,
            name: name.map(str::to_string),
            phase: Phase::Validating,
        };
        debug!(
            kind,
            action = %action,
            name = progress.name(),
            phase = ?progress.phase,
            "Handler invoked"
        );
        progress
    }

    fn name(&self) -> &str {
        self.name.as_deref().unwrap_or("-")
    }

    fn advance(&mut self, next: Phase) {
        debug!(
            kind = self.kind,
            action = %self.action,
            name = self.name(),
            from = ?self.phase,
            to = ?next,
            "Phase transition"
        );
        self.phase = next;
    }

    fn fail(&mut self, err: HandlerError) -> HandlerError {
        warn!(
            kind = self.kind,
            action = %self.action,
            name = self.name(),
            phase = ?self.phase,
            code = %err.code,
            error = %err.message,
            "Handler failed"
        );
        self.advance(Phase::Failed);
        err
    }

    fn remote_failure(&mut self, err: ServiceError) -> HandlerError {
        let translated = HandlerError::from_service(self.action, &err);
        self.fail(translated)
    }
}

/// Lifecycle handler for one entity type.
pub struct LifecycleHandler<R: Resource> {
    client: Arc<dyn DataPrepClient>,
    audit: Arc<ResourceAuditLogger>,
    resource: R,
}

impl<R: Resource> LifecycleHandler<R> {
    pub fn new(
        client: Arc<dyn DataPrepClient>,
        audit: Arc<ResourceAuditLogger>,
        resource: R,
    ) -> Self {
        Self {
            client,
            audit,
            resource,
        }
    }

    /// Create the resource. Returns the input model, with an empty tag list
    /// when none was supplied.
    pub async fn create(&self, mut model: R::Model) -> Result<R::Model> {
        let mut progress = Progress::start(R::KIND, Action::Create, model.name());

        let request = self
            .resource
            .create_request(&model)
            .map_err(|e| progress.fail(e))?;

        progress.advance(Phase::Executing);
        self.resource
            .send_create(self.client.as_ref(), request)
            .await
            .map_err(|e| progress.remote_failure(e))?;

        progress.advance(Phase::MappingResult);
        let tags = model.tags_mut();
        if tags.is_none() {
            *tags = Some(Vec::new());
        }

        progress.advance(Phase::Done);
        self.audit.resource_created(R::KIND, progress.name());
        info!(kind = R::KIND, name = progress.name(), "Resource created");
        Ok(model)
    }

    /// Describe the resource and map the full response.
    pub async fn read(&self, model: &R::Model) -> Result<R::Model> {
        let mut progress = Progress::start(R::KIND, Action::Read, model.name());

        let name = required_name(model).map_err(|e| progress.fail(e))?;

        progress.advance(Phase::Executing);
        let remote = self
            .resource
            .send_read(self.client.as_ref(), name)
            .await
            .map_err(|e| progress.remote_failure(e))?;

        progress.advance(Phase::MappingResult);
        let current = self.resource.read_model(remote);

        progress.advance(Phase::Done);
        Ok(current)
    }

    /// Update the resource. The service answer is only acknowledged; the
    /// input model is returned unchanged.
    pub async fn update(&self, model: R::Model) -> Result<R::Model> {
        let mut progress = Progress::start(R::KIND, Action::Update, model.name());

        let request = self
            .resource
            .update_request(&model)
            .map_err(|e| progress.fail(e))?;

        progress.advance(Phase::Executing);
        self.resource
            .send_update(self.client.as_ref(), request)
            .await
            .map_err(|e| progress.remote_failure(e))?;

        progress.advance(Phase::MappingResult);
        progress.advance(Phase::Done);
        self.audit.resource_updated(R::KIND, progress.name());
        info!(kind = R::KIND, name = progress.name(), "Resource updated");
        Ok(model)
    }

    /// Delete the resource.
    pub async fn delete(&self, model: &R::Model) -> Result<()> {
        let mut progress = Progress::start(R::KIND, Action::Delete, model.name());

        let name = required_name(model).map_err(|e| progress.fail(e))?;

        progress.advance(Phase::Executing);
        self.resource
            .send_delete(self.client.as_ref(), name)
            .await
            .map_err(|e| progress.remote_failure(e))?;

        progress.advance(Phase::MappingResult);
        progress.advance(Phase::Done);
        self.audit.resource_deleted(R::KIND, progress.name());
        info!(kind = R::KIND, name = progress.name(), "Resource deleted");
        Ok(())
    }

    /// List one page. The cursor is never interpreted, only relayed.
    pub async fn list(&self, next_token: Option<String>) -> Result<ListPage<R::Model>> {
        let mut progress = Progress::start(R::KIND, Action::List, None);

        let request = ListRequest {
            max_results: PAGE_SIZE,
            next_token: next_token.clone(),
        };

        progress.advance(Phase::Executing);
        let items = self
            .resource
            .send_list(self.client.as_ref(), request)
            .await
            .map_err(|e| progress.remote_failure(e))?;

        progress.advance(Phase::MappingResult);
        let models: Vec<R::Model> = items
            .into_iter()
            .take(PAGE_SIZE as usize)
            .map(|item| self.resource.list_model(item))
            .collect();

        progress.advance(Phase::Done);
        debug!(kind = R::KIND, count = models.len(), "Listed resources");
        Ok(ListPage { models, next_token })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Schedule;

    #[test]
    fn test_required_reports_field() {
        let err = required::<str>(None, "RoleArn").unwrap_err();
        assert_eq!(err.code, HandlerErrorCode::InvalidRequest);
        assert_eq!(err.message, "RoleArn is required");

        assert_eq!(required(Some("x"), "Name").unwrap(), "x");
    }

    #[test]
    fn test_required_name() {
        let schedule = Schedule::default();
        assert!(required_name(&schedule).is_err());

        let schedule = Schedule {
            name: Some("nightly".into()),
            ..Default::default()
        };
        assert_eq!(required_name(&schedule).unwrap(), "nightly");
    }

    #[test]
    fn test_action_serializes_uppercase() {
        assert_eq!(serde_json::to_string(&Action::Delete).unwrap(), "\"DELETE\"");
        let action: Action = serde_json::from_str("\"LIST\"").unwrap();
        assert_eq!(action, Action::List);
    }
}
