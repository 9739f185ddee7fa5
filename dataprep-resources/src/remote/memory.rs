//! In-process data-preparation service.
//!
//! Keeps every entity in memory and answers the same way the real service
//! does for the cases the handlers care about: duplicate names conflict,
//! unknown names are not found, listings are paged with opaque tokens, and
//! a dataset still referenced by a job or project cannot be deleted.
//!
//! Faults can be queued with [`MemoryClient::fail_next`]; the next call
//! of any kind fails with the queued error.

use std::collections::{BTreeMap, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::{Mutex, MutexGuard};
use tracing::debug;

use super::dataset::{
    CreateDatasetRequest, Dataset, Input, ListDatasetsResponse, UpdateDatasetRequest,
};
use super::job::{
    CreateProfileJobRequest, CreateRecipeJobRequest, Job, ListJobsResponse,
    UpdateProfileJobRequest, UpdateRecipeJobRequest,
};
use super::project::{CreateProjectRequest, ListProjectsResponse, Project, UpdateProjectRequest};
use super::recipe::{
    CreateRecipeRequest, LATEST_WORKING_VERSION, ListRecipesResponse, Recipe, UpdateRecipeRequest,
};
use super::ruleset::{
    CreateRulesetRequest, ListRulesetsResponse, Ruleset, RulesetItem, UpdateRulesetRequest,
};
use super::schedule::{
    CreateScheduleRequest, ListSchedulesResponse, Schedule, UpdateScheduleRequest,
};
use super::{
    DatasetApi, JobApi, ListRequest, ProjectApi, RecipeApi, Result, RulesetApi, ScheduleApi,
    ServiceError,
};

/// Largest page the service hands out.
const MAX_PAGE_SIZE: usize = 100;

const ARN_PREFIX: &str = "arn:dataprep:local:000000000000";

#[derive(Debug, Default)]
struct ServiceState {
    datasets: BTreeMap<String, Dataset>,
    jobs: BTreeMap<String, Job>,
    projects: BTreeMap<String, Project>,
    recipes: BTreeMap<String, Recipe>,
    rulesets: BTreeMap<String, Ruleset>,
    schedules: BTreeMap<String, Schedule>,
    faults: VecDeque<ServiceError>,
}

/// In-memory implementation of every service API.
#[derive(Debug, Default)]
pub struct MemoryClient {
    state: Mutex<ServiceState>,
    calls: AtomicUsize,
}

impl MemoryClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the next call fail with `err`. Faults queue up in order.
    pub async fn fail_next(&self, err: ServiceError) {
        self.state.lock().await.faults.push_back(err);
    }

    /// Number of service calls made so far, failed ones included.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    async fn begin(&self, operation: &str) -> Result<MutexGuard<'_, ServiceState>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let mut state = self.state.lock().await;
        if let Some(err) = state.faults.pop_front() {
            debug!(operation, error = %err, "Injected fault");
            return Err(err);
        }
        debug!(operation, "Memory service call");
        Ok(state)
    }
}

// =============================================================================
// Helpers
// =============================================================================

fn now() -> Option<String> {
    Some(Utc::now().to_rfc3339())
}

fn arn(kind: &str, name: &str) -> Option<String> {
    Some(format!("{}:{}/{}", ARN_PREFIX, kind, name))
}

fn insert<T>(map: &mut BTreeMap<String, T>, kind: &str, name: &str, value: T) -> Result<()> {
    if map.contains_key(name) {
        return Err(ServiceError::Conflict(format!(
            "{} {} already exists",
            kind, name
        )));
    }
    map.insert(name.to_string(), value);
    Ok(())
}

fn not_found(kind: &str, name: &str) -> ServiceError {
    ServiceError::ResourceNotFound(format!("{} {} wasn't found", kind, name))
}

fn lookup<'a, T>(map: &'a BTreeMap<String, T>, kind: &str, name: &str) -> Result<&'a T> {
    map.get(name).ok_or_else(|| not_found(kind, name))
}

fn lookup_mut<'a, T>(
    map: &'a mut BTreeMap<String, T>,
    kind: &str,
    name: &str,
) -> Result<&'a mut T> {
    map.get_mut(name).ok_or_else(|| not_found(kind, name))
}

fn remove<T>(map: &mut BTreeMap<String, T>, kind: &str, name: &str) -> Result<T> {
    map.remove(name).ok_or_else(|| not_found(kind, name))
}

/// One page of `items` (already in name order) and the token of the next.
fn paginate<T>(items: Vec<T>, request: &ListRequest) -> Result<(Vec<T>, Option<String>)> {
    let start = match request.next_token.as_deref() {
        None => 0,
        Some(token) => token
            .parse::<usize>()
            .map_err(|_| ServiceError::Validation(format!("Invalid NextToken: {}", token)))?,
    };
    let size = usize::try_from(request.max_results)
        .unwrap_or(0)
        .clamp(1, MAX_PAGE_SIZE);

    let total = items.len();
    let page = items.into_iter().skip(start).take(size).collect();
    let end = start.saturating_add(size);
    let next = (end < total).then(|| end.to_string());
    Ok((page, next))
}

/// The service reports where a dataset's data comes from.
fn dataset_source(input: &Input) -> Option<String> {
    let source = if input.data_catalog_input_definition.is_some() {
        "DATA-CATALOG"
    } else if input.database_input_definition.is_some() {
        "DATABASE"
    } else {
        "S3"
    };
    Some(source.to_string())
}

fn job_of_type<'a>(
    jobs: &'a mut BTreeMap<String, Job>,
    name: &str,
    job_type: &str,
) -> Result<&'a mut Job> {
    let job = lookup_mut(jobs, "Job", name)?;
    if job.job_type.as_deref() != Some(job_type) {
        return Err(ServiceError::Validation(format!(
            "Job {} is not a {} job",
            name, job_type
        )));
    }
    Ok(job)
}

// =============================================================================
// Datasets
// =============================================================================

#[async_trait]
impl DatasetApi for MemoryClient {
    async fn create_dataset(&self, req: CreateDatasetRequest) -> Result<()> {
        let mut state = self.begin("CreateDataset").await?;
        let dataset = Dataset {
            name: req.name.clone(),
            format: req.format,
            format_options: req.format_options,
            source: dataset_source(&req.input),
            input: Some(req.input),
            path_options: req.path_options,
            tags: req.tags,
            resource_arn: arn("dataset", &req.name),
            create_date: now(),
            last_modified_date: None,
        };
        insert(&mut state.datasets, "Dataset", &req.name, dataset)
    }

    async fn describe_dataset(&self, name: &str) -> Result<Dataset> {
        let state = self.begin("DescribeDataset").await?;
        lookup(&state.datasets, "Dataset", name).cloned()
    }

    async fn update_dataset(&self, req: UpdateDatasetRequest) -> Result<()> {
        let mut state = self.begin("UpdateDataset").await?;
        let dataset = lookup_mut(&mut state.datasets, "Dataset", &req.name)?;
        dataset.format = req.format;
        dataset.format_options = req.format_options;
        dataset.source = dataset_source(&req.input);
        dataset.input = Some(req.input);
        dataset.path_options = req.path_options;
        dataset.last_modified_date = now();
        Ok(())
    }

    async fn delete_dataset(&self, name: &str) -> Result<()> {
        let mut state = self.begin("DeleteDataset").await?;
        let referenced = state
            .jobs
            .values()
            .any(|j| j.dataset_name.as_deref() == Some(name))
            || state
                .projects
                .values()
                .any(|p| p.dataset_name.as_deref() == Some(name));
        if referenced && state.datasets.contains_key(name) {
            return Err(ServiceError::Conflict(format!(
                "Dataset {} is used by a job or project",
                name
            )));
        }
        remove(&mut state.datasets, "Dataset", name).map(|_| ())
    }

    async fn list_datasets(&self, req: ListRequest) -> Result<ListDatasetsResponse> {
        let state = self.begin("ListDatasets").await?;
        let (datasets, next_token) = paginate(state.datasets.values().cloned().collect(), &req)?;
        Ok(ListDatasetsResponse {
            datasets,
            next_token,
        })
    }
}

// =============================================================================
// Jobs
// =============================================================================

#[async_trait]
impl JobApi for MemoryClient {
    async fn create_profile_job(&self, req: CreateProfileJobRequest) -> Result<()> {
        let mut state = self.begin("CreateProfileJob").await?;
        let job = Job {
            name: req.name.clone(),
            job_type: Some("PROFILE".to_string()),
            dataset_name: Some(req.dataset_name),
            encryption_key_arn: req.encryption_key_arn,
            encryption_mode: req.encryption_mode,
            log_subscription: req.log_subscription,
            max_capacity: req.max_capacity,
            max_retries: req.max_retries,
            timeout: req.timeout,
            role_arn: Some(req.role_arn),
            output_location: Some(req.output_location),
            job_sample: req.job_sample,
            profile_configuration: req.configuration,
            validation_configurations: req.validation_configurations,
            tags: req.tags,
            resource_arn: arn("job", &req.name),
            create_date: now(),
            ..Default::default()
        };
        insert(&mut state.jobs, "Job", &req.name, job)
    }

    async fn create_recipe_job(&self, req: CreateRecipeJobRequest) -> Result<()> {
        let mut state = self.begin("CreateRecipeJob").await?;
        if req.dataset_name.is_none() && req.project_name.is_none() {
            return Err(ServiceError::Validation(
                "A recipe job needs a dataset or a project".to_string(),
            ));
        }
        let job = Job {
            name: req.name.clone(),
            job_type: Some("RECIPE".to_string()),
            dataset_name: req.dataset_name,
            encryption_key_arn: req.encryption_key_arn,
            encryption_mode: req.encryption_mode,
            log_subscription: req.log_subscription,
            max_capacity: req.max_capacity,
            max_retries: req.max_retries,
            timeout: req.timeout,
            role_arn: Some(req.role_arn),
            outputs: req.outputs,
            data_catalog_outputs: req.data_catalog_outputs,
            database_outputs: req.database_outputs,
            project_name: req.project_name,
            recipe_reference: req.recipe_reference,
            tags: req.tags,
            resource_arn: arn("job", &req.name),
            create_date: now(),
            ..Default::default()
        };
        insert(&mut state.jobs, "Job", &req.name, job)
    }

    async fn describe_job(&self, name: &str) -> Result<Job> {
        let state = self.begin("DescribeJob").await?;
        lookup(&state.jobs, "Job", name).cloned()
    }

    async fn update_profile_job(&self, req: UpdateProfileJobRequest) -> Result<()> {
        let mut state = self.begin("UpdateProfileJob").await?;
        let job = job_of_type(&mut state.jobs, &req.name, "PROFILE")?;
        job.profile_configuration = req.configuration;
        job.encryption_key_arn = req.encryption_key_arn;
        job.encryption_mode = req.encryption_mode;
        job.log_subscription = req.log_subscription;
        job.max_capacity = req.max_capacity;
        job.max_retries = req.max_retries;
        if req.output_location.is_some() {
            job.output_location = req.output_location;
        }
        job.validation_configurations = req.validation_configurations;
        if req.role_arn.is_some() {
            job.role_arn = req.role_arn;
        }
        job.timeout = req.timeout;
        job.job_sample = req.job_sample;
        Ok(())
    }

    async fn update_recipe_job(&self, req: UpdateRecipeJobRequest) -> Result<()> {
        let mut state = self.begin("UpdateRecipeJob").await?;
        let job = job_of_type(&mut state.jobs, &req.name, "RECIPE")?;
        job.encryption_key_arn = req.encryption_key_arn;
        job.encryption_mode = req.encryption_mode;
        job.log_subscription = req.log_subscription;
        job.max_capacity = req.max_capacity;
        job.max_retries = req.max_retries;
        job.outputs = req.outputs;
        job.data_catalog_outputs = req.data_catalog_outputs;
        job.database_outputs = req.database_outputs;
        if req.role_arn.is_some() {
            job.role_arn = req.role_arn;
        }
        job.timeout = req.timeout;
        Ok(())
    }

    async fn delete_job(&self, name: &str) -> Result<()> {
        let mut state = self.begin("DeleteJob").await?;
        remove(&mut state.jobs, "Job", name).map(|_| ())
    }

    async fn list_jobs(&self, req: ListRequest) -> Result<ListJobsResponse> {
        let state = self.begin("ListJobs").await?;
        let (jobs, next_token) = paginate(state.jobs.values().cloned().collect(), &req)?;
        Ok(ListJobsResponse { jobs, next_token })
    }
}

// =============================================================================
// Projects
// =============================================================================

#[async_trait]
impl ProjectApi for MemoryClient {
    async fn create_project(&self, req: CreateProjectRequest) -> Result<()> {
        let mut state = self.begin("CreateProject").await?;
        let project = Project {
            name: req.name.clone(),
            dataset_name: Some(req.dataset_name),
            recipe_name: Some(req.recipe_name),
            role_arn: Some(req.role_arn),
            sample: req.sample,
            tags: req.tags,
            resource_arn: arn("project", &req.name),
            create_date: now(),
        };
        insert(&mut state.projects, "Project", &req.name, project)
    }

    async fn describe_project(&self, name: &str) -> Result<Project> {
        let state = self.begin("DescribeProject").await?;
        lookup(&state.projects, "Project", name).cloned()
    }

    async fn update_project(&self, req: UpdateProjectRequest) -> Result<()> {
        let mut state = self.begin("UpdateProject").await?;
        let project = lookup_mut(&mut state.projects, "Project", &req.name)?;
        project.role_arn = Some(req.role_arn);
        project.sample = req.sample;
        Ok(())
    }

    async fn delete_project(&self, name: &str) -> Result<()> {
        let mut state = self.begin("DeleteProject").await?;
        remove(&mut state.projects, "Project", name).map(|_| ())
    }

    async fn list_projects(&self, req: ListRequest) -> Result<ListProjectsResponse> {
        let state = self.begin("ListProjects").await?;
        let (projects, next_token) = paginate(state.projects.values().cloned().collect(), &req)?;
        Ok(ListProjectsResponse {
            projects,
            next_token,
        })
    }
}

// =============================================================================
// Recipes
// =============================================================================

#[async_trait]
impl RecipeApi for MemoryClient {
    async fn create_recipe(&self, req: CreateRecipeRequest) -> Result<()> {
        let mut state = self.begin("CreateRecipe").await?;
        let recipe = Recipe {
            name: req.name.clone(),
            description: req.description,
            steps: Some(req.steps),
            tags: req.tags,
            recipe_version: Some(LATEST_WORKING_VERSION.to_string()),
            resource_arn: arn("recipe", &req.name),
            create_date: now(),
        };
        insert(&mut state.recipes, "Recipe", &req.name, recipe)
    }

    async fn describe_recipe(&self, name: &str, recipe_version: Option<&str>) -> Result<Recipe> {
        let state = self.begin("DescribeRecipe").await?;
        let recipe = lookup(&state.recipes, "Recipe", name)?;
        match recipe_version {
            Some(version) if recipe.recipe_version.as_deref() != Some(version) => {
                Err(not_found("Recipe", &format!("{} version {}", name, version)))
            }
            _ => Ok(recipe.clone()),
        }
    }

    async fn update_recipe(&self, req: UpdateRecipeRequest) -> Result<()> {
        let mut state = self.begin("UpdateRecipe").await?;
        let recipe = lookup_mut(&mut state.recipes, "Recipe", &req.name)?;
        recipe.description = req.description;
        recipe.steps = req.steps;
        Ok(())
    }

    async fn delete_recipe_version(&self, name: &str, recipe_version: &str) -> Result<()> {
        let mut state = self.begin("DeleteRecipeVersion").await?;
        let recipe = lookup(&state.recipes, "Recipe", name)?;
        if recipe.recipe_version.as_deref() != Some(recipe_version) {
            return Err(not_found(
                "Recipe",
                &format!("{} version {}", name, recipe_version),
            ));
        }
        remove(&mut state.recipes, "Recipe", name).map(|_| ())
    }

    async fn list_recipes(&self, req: ListRequest) -> Result<ListRecipesResponse> {
        let state = self.begin("ListRecipes").await?;
        let (recipes, next_token) = paginate(state.recipes.values().cloned().collect(), &req)?;
        Ok(ListRecipesResponse {
            recipes,
            next_token,
        })
    }
}

// =============================================================================
// Rulesets
// =============================================================================

#[async_trait]
impl RulesetApi for MemoryClient {
    async fn create_ruleset(&self, req: CreateRulesetRequest) -> Result<()> {
        let mut state = self.begin("CreateRuleset").await?;
        let ruleset = Ruleset {
            name: req.name.clone(),
            description: req.description,
            target_arn: Some(req.target_arn),
            rules: req.rules,
            tags: req.tags,
            resource_arn: arn("ruleset", &req.name),
            create_date: now(),
        };
        insert(&mut state.rulesets, "Ruleset", &req.name, ruleset)
    }

    async fn describe_ruleset(&self, name: &str) -> Result<Ruleset> {
        let state = self.begin("DescribeRuleset").await?;
        lookup(&state.rulesets, "Ruleset", name).cloned()
    }

    async fn update_ruleset(&self, req: UpdateRulesetRequest) -> Result<()> {
        let mut state = self.begin("UpdateRuleset").await?;
        let ruleset = lookup_mut(&mut state.rulesets, "Ruleset", &req.name)?;
        ruleset.description = req.description;
        ruleset.rules = req.rules;
        Ok(())
    }

    async fn delete_ruleset(&self, name: &str) -> Result<()> {
        let mut state = self.begin("DeleteRuleset").await?;
        remove(&mut state.rulesets, "Ruleset", name).map(|_| ())
    }

    async fn list_rulesets(&self, req: ListRequest) -> Result<ListRulesetsResponse> {
        let state = self.begin("ListRulesets").await?;
        let items = state
            .rulesets
            .values()
            .map(|r| RulesetItem {
                name: r.name.clone(),
                description: r.description.clone(),
                target_arn: r.target_arn.clone().unwrap_or_default(),
                rule_count: i32::try_from(r.rules.len()).ok(),
                tags: r.tags.clone(),
            })
            .collect();
        let (rulesets, next_token) = paginate(items, &req)?;
        Ok(ListRulesetsResponse {
            rulesets,
            next_token,
        })
    }
}

// =============================================================================
// Schedules
// =============================================================================

#[async_trait]
impl ScheduleApi for MemoryClient {
    async fn create_schedule(&self, req: CreateScheduleRequest) -> Result<()> {
        let mut state = self.begin("CreateSchedule").await?;
        let schedule = Schedule {
            name: req.name.clone(),
            job_names: req.job_names,
            cron_expression: Some(req.cron_expression),
            tags: req.tags,
            resource_arn: arn("schedule", &req.name),
            create_date: now(),
        };
        insert(&mut state.schedules, "Schedule", &req.name, schedule)
    }

    async fn describe_schedule(&self, name: &str) -> Result<Schedule> {
        let state = self.begin("DescribeSchedule").await?;
        lookup(&state.schedules, "Schedule", name).cloned()
    }

    async fn update_schedule(&self, req: UpdateScheduleRequest) -> Result<()> {
        let mut state = self.begin("UpdateSchedule").await?;
        let schedule = lookup_mut(&mut state.schedules, "Schedule", &req.name)?;
        schedule.job_names = req.job_names;
        schedule.cron_expression = Some(req.cron_expression);
        Ok(())
    }

    async fn delete_schedule(&self, name: &str) -> Result<()> {
        let mut state = self.begin("DeleteSchedule").await?;
        remove(&mut state.schedules, "Schedule", name).map(|_| ())
    }

    async fn list_schedules(&self, req: ListRequest) -> Result<ListSchedulesResponse> {
        let state = self.begin("ListSchedules").await?;
        let (schedules, next_token) = paginate(state.schedules.values().cloned().collect(), &req)?;
        Ok(ListSchedulesResponse {
            schedules,
            next_token,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::remote::common::S3Location;

    fn dataset_request(name: &str) -> CreateDatasetRequest {
        CreateDatasetRequest {
            name: name.to_string(),
            input: Input {
                s3_input_definition: Some(S3Location {
                    bucket: "b".into(),
                    key: Some("input.json".into()),
                    bucket_owner: None,
                }),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    fn list(max_results: i32, next_token: Option<&str>) -> ListRequest {
        ListRequest {
            max_results,
            next_token: next_token.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn test_create_and_describe() {
        let client = MemoryClient::new();
        client.create_dataset(dataset_request("sales")).await.unwrap();

        let dataset = client.describe_dataset("sales").await.unwrap();
        assert_eq!(dataset.source.as_deref(), Some("S3"));
        assert!(dataset.resource_arn.unwrap().ends_with(":dataset/sales"));
        assert!(dataset.create_date.is_some());
    }

    #[tokio::test]
    async fn test_duplicate_name_conflicts() {
        let client = MemoryClient::new();
        client.create_dataset(dataset_request("sales")).await.unwrap();

        match client.create_dataset(dataset_request("sales")).await {
            Err(ServiceError::Conflict(msg)) => assert!(msg.contains("sales")),
            other => panic!("expected conflict, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_missing_is_not_found() {
        let client = MemoryClient::new();
        assert!(matches!(
            client.describe_schedule("nope").await,
            Err(ServiceError::ResourceNotFound(_))
        ));
        assert!(matches!(
            client.delete_ruleset("nope").await,
            Err(ServiceError::ResourceNotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_pagination() {
        let client = MemoryClient::new();
        for i in 0..5 {
            client
                .create_dataset(dataset_request(&format!("ds-{}", i)))
                .await
                .unwrap();
        }

        let first = client.list_datasets(list(2, None)).await.unwrap();
        assert_eq!(first.datasets.len(), 2);
        assert_eq!(first.next_token.as_deref(), Some("2"));

        let last = client.list_datasets(list(2, Some("4"))).await.unwrap();
        assert_eq!(last.datasets.len(), 1);
        assert_eq!(last.datasets[0].name, "ds-4");
        assert_eq!(last.next_token, None);

        assert!(matches!(
            client.list_datasets(list(2, Some("bogus"))).await,
            Err(ServiceError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn test_page_size_is_capped() {
        let client = MemoryClient::new();
        for i in 0..120 {
            client
                .create_schedule(CreateScheduleRequest {
                    name: format!("s-{:03}", i),
                    cron_expression: "cron(0 * * * ? *)".into(),
                    ..Default::default()
                })
                .await
                .unwrap();
        }

        let page = client.list_schedules(list(500, None)).await.unwrap();
        assert_eq!(page.schedules.len(), MAX_PAGE_SIZE);
        assert_eq!(page.next_token.as_deref(), Some("100"));
    }

    #[tokio::test]
    async fn test_cursor_past_the_end_is_an_empty_page() {
        let client = MemoryClient::new();
        client
            .create_schedule(CreateScheduleRequest {
                name: "s-000".into(),
                cron_expression: "cron(0 * * * ? *)".into(),
                ..Default::default()
            })
            .await
            .unwrap();

        let cursor = usize::MAX.to_string();
        let page = client
            .list_schedules(list(100, Some(cursor.as_str())))
            .await
            .unwrap();
        assert!(page.schedules.is_empty());
        assert_eq!(page.next_token, None);
    }

    #[tokio::test]
    async fn test_fault_injection_and_call_count() {
        let client = MemoryClient::new();
        client
            .fail_next(ServiceError::AccessDenied("no".into()))
            .await;

        assert!(matches!(
            client.list_jobs(list(10, None)).await,
            Err(ServiceError::AccessDenied(_))
        ));
        assert!(client.list_jobs(list(10, None)).await.is_ok());
        assert_eq!(client.call_count(), 2);
    }

    #[tokio::test]
    async fn test_referenced_dataset_cannot_be_deleted() {
        let client = MemoryClient::new();
        client.create_dataset(dataset_request("sales")).await.unwrap();
        client
            .create_project(CreateProjectRequest {
                name: "p".into(),
                dataset_name: "sales".into(),
                recipe_name: "r".into(),
                role_arn: "arn:role".into(),
                ..Default::default()
            })
            .await
            .unwrap();

        assert!(matches!(
            client.delete_dataset("sales").await,
            Err(ServiceError::Conflict(_))
        ));

        client.delete_project("p").await.unwrap();
        client.delete_dataset("sales").await.unwrap();
    }

    #[tokio::test]
    async fn test_recipe_version_qualifier() {
        let client = MemoryClient::new();
        client
            .create_recipe(CreateRecipeRequest {
                name: "cleanup".into(),
                ..Default::default()
            })
            .await
            .unwrap();

        assert!(client.describe_recipe("cleanup", Some("1.0")).await.is_err());
        let recipe = client
            .describe_recipe("cleanup", Some(LATEST_WORKING_VERSION))
            .await
            .unwrap();
        assert_eq!(recipe.recipe_version.as_deref(), Some(LATEST_WORKING_VERSION));

        client
            .delete_recipe_version("cleanup", LATEST_WORKING_VERSION)
            .await
            .unwrap();
        assert!(client.describe_recipe("cleanup", None).await.is_err());
    }

    #[tokio::test]
    async fn test_update_wrong_job_kind() {
        let client = MemoryClient::new();
        client
            .create_recipe_job(CreateRecipeJobRequest {
                name: "clean".into(),
                project_name: Some("p".into()),
                role_arn: "arn:role".into(),
                ..Default::default()
            })
            .await
            .unwrap();

        let result = client
            .update_profile_job(UpdateProfileJobRequest {
                name: "clean".into(),
                ..Default::default()
            })
            .await;
        assert!(matches!(result, Err(ServiceError::Validation(_))));
    }
}
