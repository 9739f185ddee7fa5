//! Remote service seam.
//!
//! The lifecycle handlers only see these traits. Two implementations ship
//! with the crate:
//! - [`HttpClient`]: REST-JSON client for a real (or emulated) service
//! - [`MemoryClient`]: in-process service used by tests and `--dev`

pub mod common;
pub mod dataset;
pub mod error;
pub mod http;
pub mod job;
pub mod memory;
pub mod project;
pub mod recipe;
pub mod ruleset;
pub mod schedule;

use async_trait::async_trait;

pub use common::{ListRequest, Tags};
pub use error::{Result, ServiceError};
pub use http::HttpClient;
pub use memory::MemoryClient;

use dataset::{CreateDatasetRequest, Dataset, ListDatasetsResponse, UpdateDatasetRequest};
use job::{
    CreateProfileJobRequest, CreateRecipeJobRequest, Job, ListJobsResponse,
    UpdateProfileJobRequest, UpdateRecipeJobRequest,
};
use project::{CreateProjectRequest, ListProjectsResponse, Project, UpdateProjectRequest};
use recipe::{CreateRecipeRequest, ListRecipesResponse, Recipe, UpdateRecipeRequest};
use ruleset::{CreateRulesetRequest, ListRulesetsResponse, Ruleset, UpdateRulesetRequest};
use schedule::{CreateScheduleRequest, ListSchedulesResponse, Schedule, UpdateScheduleRequest};

// =============================================================================
// Per-resource APIs
// =============================================================================

/// Dataset operations.
#[async_trait]
pub trait DatasetApi: Send + Sync {
    async fn create_dataset(&self, req: CreateDatasetRequest) -> Result<()>;

    async fn describe_dataset(&self, name: &str) -> Result<Dataset>;

    async fn update_dataset(&self, req: UpdateDatasetRequest) -> Result<()>;

    async fn delete_dataset(&self, name: &str) -> Result<()>;

    async fn list_datasets(&self, req: ListRequest) -> Result<ListDatasetsResponse>;
}

/// Job operations. Profile and recipe jobs are created and updated
/// through separate calls.
#[async_trait]
pub trait JobApi: Send + Sync {
    async fn create_profile_job(&self, req: CreateProfileJobRequest) -> Result<()>;

    async fn create_recipe_job(&self, req: CreateRecipeJobRequest) -> Result<()>;

    async fn describe_job(&self, name: &str) -> Result<Job>;

    async fn update_profile_job(&self, req: UpdateProfileJobRequest) -> Result<()>;

    async fn update_recipe_job(&self, req: UpdateRecipeJobRequest) -> Result<()>;

    async fn delete_job(&self, name: &str) -> Result<()>;

    async fn list_jobs(&self, req: ListRequest) -> Result<ListJobsResponse>;
}

/// Project operations.
#[async_trait]
pub trait ProjectApi: Send + Sync {
    async fn create_project(&self, req: CreateProjectRequest) -> Result<()>;

    async fn describe_project(&self, name: &str) -> Result<Project>;

    async fn update_project(&self, req: UpdateProjectRequest) -> Result<()>;

    async fn delete_project(&self, name: &str) -> Result<()>;

    async fn list_projects(&self, req: ListRequest) -> Result<ListProjectsResponse>;
}

/// Recipe operations. Reads and deletes address a single recipe version.
#[async_trait]
pub trait RecipeApi: Send + Sync {
    async fn create_recipe(&self, req: CreateRecipeRequest) -> Result<()>;

    async fn describe_recipe(&self, name: &str, recipe_version: Option<&str>) -> Result<Recipe>;

    async fn update_recipe(&self, req: UpdateRecipeRequest) -> Result<()>;

    async fn delete_recipe_version(&self, name: &str, recipe_version: &str) -> Result<()>;

    async fn list_recipes(&self, req: ListRequest) -> Result<ListRecipesResponse>;
}

/// Ruleset operations.
#[async_trait]
pub trait RulesetApi: Send + Sync {
    async fn create_ruleset(&self, req: CreateRulesetRequest) -> Result<()>;

    async fn describe_ruleset(&self, name: &str) -> Result<Ruleset>;

    async fn update_ruleset(&self, req: UpdateRulesetRequest) -> Result<()>;

    async fn delete_ruleset(&self, name: &str) -> Result<()>;

    async fn list_rulesets(&self, req: ListRequest) -> Result<ListRulesetsResponse>;
}

/// Schedule operations.
#[async_trait]
pub trait ScheduleApi: Send + Sync {
    async fn create_schedule(&self, req: CreateScheduleRequest) -> Result<()>;

    async fn describe_schedule(&self, name: &str) -> Result<Schedule>;

    async fn update_schedule(&self, req: UpdateScheduleRequest) -> Result<()>;

    async fn delete_schedule(&self, name: &str) -> Result<()>;

    async fn list_schedules(&self, req: ListRequest) -> Result<ListSchedulesResponse>;
}

// =============================================================================
// Composite client
// =============================================================================

/// Composite client combining every resource API.
///
/// Handlers hold an `Arc<dyn DataPrepClient>` built once at process start.
pub trait DataPrepClient:
    DatasetApi + JobApi + ProjectApi + RecipeApi + RulesetApi + ScheduleApi + Send + Sync
{
}

impl<T> DataPrepClient for T where
    T: DatasetApi + JobApi + ProjectApi + RecipeApi + RulesetApi + ScheduleApi + Send + Sync
{
}
