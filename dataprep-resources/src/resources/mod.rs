//! Per-entity bindings for the lifecycle handler.

mod dataset;
mod job;
mod project;
mod recipe;
mod ruleset;
mod schedule;

pub use dataset::DatasetResource;
pub use job::{JobCreateRequest, JobResource, JobUpdateRequest, resolve_job_type};
pub use project::ProjectResource;
pub use recipe::RecipeResource;
pub use ruleset::RulesetResource;
pub use schedule::ScheduleResource;
