//! Lifecycle handlers for data-preparation service resources.
//!
//! Each resource type (dataset, job, project, recipe, ruleset, schedule)
//! gets Create, Read, Update, Delete and List against the remote service.
//! The handlers translate between the declarative models in [`model`] and
//! the service shapes in [`remote`], and turn every service failure into a
//! [`handler::HandlerErrorCode`].

pub mod audit;
pub mod config;
pub mod handler;
pub mod invocation;
pub mod mapping;
pub mod model;
pub mod remote;
pub mod resources;

pub use audit::ResourceAuditLogger;
pub use config::{ClientConfig, ConfigError};
pub use handler::{Action, HandlerError, HandlerErrorCode, LifecycleHandler, ListPage, Resource};
pub use invocation::{HandlerRequest, ProgressEvent, ResourceKind, dispatch};
pub use remote::{DataPrepClient, HttpClient, MemoryClient, ServiceError};
