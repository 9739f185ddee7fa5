//! REST-JSON client for the data-preparation service.
//!
//! Requests are not signed; point the endpoint at a signing proxy or a
//! local emulator. Each call is a single attempt bounded by the configured
//! timeout.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::dataset::{CreateDatasetRequest, Dataset, ListDatasetsResponse, UpdateDatasetRequest};
use super::job::{
    CreateProfileJobRequest, CreateRecipeJobRequest, Job, ListJobsResponse,
    UpdateProfileJobRequest, UpdateRecipeJobRequest,
};
use super::project::{CreateProjectRequest, ListProjectsResponse, Project, UpdateProjectRequest};
use super::recipe::{CreateRecipeRequest, ListRecipesResponse, Recipe, UpdateRecipeRequest};
use super::ruleset::{CreateRulesetRequest, ListRulesetsResponse, Ruleset, UpdateRulesetRequest};
use super::schedule::{
    CreateScheduleRequest, ListSchedulesResponse, Schedule, UpdateScheduleRequest,
};
use super::{
    DatasetApi, JobApi, ListRequest, ProjectApi, RecipeApi, Result, RulesetApi, ScheduleApi,
    ServiceError,
};
use crate::config::{ClientConfig, ConfigError};

/// Header carrying the service's error type name.
const ERROR_TYPE_HEADER: &str = "x-amzn-errortype";

#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(rename = "__type")]
    error_type: Option<String>,
    #[serde(alias = "Message")]
    message: Option<String>,
}

/// Map a status code to an error when the response names no error type.
fn error_from_status(status: StatusCode, message: String) -> ServiceError {
    match status {
        StatusCode::FORBIDDEN => ServiceError::AccessDenied(message),
        StatusCode::NOT_FOUND => ServiceError::ResourceNotFound(message),
        StatusCode::CONFLICT => ServiceError::Conflict(message),
        StatusCode::BAD_REQUEST => ServiceError::Validation(message),
        StatusCode::PAYMENT_REQUIRED => ServiceError::ServiceQuotaExceeded(message),
        s if s.is_server_error() => ServiceError::InternalServer(message),
        s => ServiceError::Unexpected {
            kind: format!("HTTP {}", s.as_u16()),
            message,
        },
    }
}

async fn error_from_response(response: Response) -> ServiceError {
    let status = response.status();
    let header_type = response
        .headers()
        .get(ERROR_TYPE_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let body: ErrorBody = response.json().await.unwrap_or_default();

    let message = body.message.unwrap_or_else(|| status.to_string());
    match header_type.or(body.error_type) {
        Some(error_type) => ServiceError::from_error_type(&error_type, message),
        None => error_from_status(status, message),
    }
}

fn transport(err: reqwest::Error) -> ServiceError {
    ServiceError::Transport(err.to_string())
}

fn list_query(req: &ListRequest) -> Vec<(&'static str, String)> {
    let mut query = vec![("maxResults", req.max_results.to_string())];
    if let Some(token) = &req.next_token {
        query.push(("nextToken", token.clone()));
    }
    query
}

/// HTTP implementation of every service API.
#[derive(Debug, Clone)]
pub struct HttpClient {
    http: Client,
    base: Url,
}

impl HttpClient {
    pub fn new(config: &ClientConfig) -> std::result::Result<Self, ConfigError> {
        let base = config.validate()?;
        let http = Client::builder()
            .timeout(config.attempt_timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| ConfigError::Client(e.to_string()))?;
        Ok(Self { http, base })
    }

    /// Endpoint URL with `segments` appended. Each segment is percent-encoded.
    fn url(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| {
                ServiceError::Transport(format!("endpoint {} is not a base URL", self.base))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn execute(&self, operation: &str, request: RequestBuilder) -> Result<Response> {
        let response = request.send().await.map_err(transport)?;
        let status = response.status();
        debug!(operation, status = status.as_u16(), "Service call");
        if status.is_success() {
            Ok(response)
        } else {
            Err(error_from_response(response).await)
        }
    }

    async fn get<T: DeserializeOwned>(
        &self,
        operation: &str,
        url: Url,
        query: &[(&str, String)],
    ) -> Result<T> {
        let response = self
            .execute(operation, self.http.get(url).query(query))
            .await?;
        response.json().await.map_err(transport)
    }

    async fn post<B: Serialize + Sync>(&self, operation: &str, url: Url, body: &B) -> Result<()> {
        self.execute(operation, self.http.post(url).json(body))
            .await
            .map(|_| ())
    }

    async fn put<B: Serialize + Sync>(&self, operation: &str, url: Url, body: &B) -> Result<()> {
        self.execute(operation, self.http.put(url).json(body))
            .await
            .map(|_| ())
    }

    async fn delete(&self, operation: &str, url: Url) -> Result<()> {
        self.execute(operation, self.http.delete(url))
            .await
            .map(|_| ())
    }
}

#[async_trait]
impl DatasetApi for HttpClient {
    async fn create_dataset(&self, req: CreateDatasetRequest) -> Result<()> {
        self.post("CreateDataset", self.url(&["datasets"])?, &req).await
    }

    async fn describe_dataset(&self, name: &str) -> Result<Dataset> {
        self.get("DescribeDataset", self.url(&["datasets", name])?, &[])
            .await
    }

    async fn update_dataset(&self, req: UpdateDatasetRequest) -> Result<()> {
        self.put("UpdateDataset", self.url(&["datasets", req.name.as_str()])?, &req)
            .await
    }

    async fn delete_dataset(&self, name: &str) -> Result<()> {
        self.delete("DeleteDataset", self.url(&["datasets", name])?)
            .await
    }

    async fn list_datasets(&self, req: ListRequest) -> Result<ListDatasetsResponse> {
        self.get("ListDatasets", self.url(&["datasets"])?, &list_query(&req))
            .await
    }
}

#[async_trait]
impl JobApi for HttpClient {
    async fn create_profile_job(&self, req: CreateProfileJobRequest) -> Result<()> {
        self.post("CreateProfileJob", self.url(&["profileJobs"])?, &req)
            .await
    }

    async fn create_recipe_job(&self, req: CreateRecipeJobRequest) -> Result<()> {
        self.post("CreateRecipeJob", self.url(&["recipeJobs"])?, &req)
            .await
    }

    async fn describe_job(&self, name: &str) -> Result<Job> {
        self.get("DescribeJob", self.url(&["jobs", name])?, &[]).await
    }

    async fn update_profile_job(&self, req: UpdateProfileJobRequest) -> Result<()> {
        self.put("UpdateProfileJob", self.url(&["profileJobs", req.name.as_str()])?, &req)
            .await
    }

    async fn update_recipe_job(&self, req: UpdateRecipeJobRequest) -> Result<()> {
        self.put("UpdateRecipeJob", self.url(&["recipeJobs", req.name.as_str()])?, &req)
            .await
    }

    async fn delete_job(&self, name: &str) -> Result<()> {
        self.delete("DeleteJob", self.url(&["jobs", name])?).await
    }

    async fn list_jobs(&self, req: ListRequest) -> Result<ListJobsResponse> {
        self.get("ListJobs", self.url(&["jobs"])?, &list_query(&req))
            .await
    }
}

#[async_trait]
impl ProjectApi for HttpClient {
    async fn create_project(&self, req: CreateProjectRequest) -> Result<()> {
        self.post("CreateProject", self.url(&["projects"])?, &req).await
    }

    async fn describe_project(&self, name: &str) -> Result<Project> {
        self.get("DescribeProject", self.url(&["projects", name])?, &[])
            .await
    }

    async fn update_project(&self, req: UpdateProjectRequest) -> Result<()> {
        self.put("UpdateProject", self.url(&["projects", req.name.as_str()])?, &req)
            .await
    }

    async fn delete_project(&self, name: &str) -> Result<()> {
        self.delete("DeleteProject", self.url(&["projects", name])?)
            .await
    }

    async fn list_projects(&self, req: ListRequest) -> Result<ListProjectsResponse> {
        self.get("ListProjects", self.url(&["projects"])?, &list_query(&req))
            .await
    }
}

#[async_trait]
impl RecipeApi for HttpClient {
    async fn create_recipe(&self, req: CreateRecipeRequest) -> Result<()> {
        self.post("CreateRecipe", self.url(&["recipes"])?, &req).await
    }

    async fn describe_recipe(&self, name: &str, recipe_version: Option<&str>) -> Result<Recipe> {
        let query: Vec<(&str, String)> = recipe_version
            .map(|v| vec![("recipeVersion", v.to_string())])
            .unwrap_or_default();
        self.get("DescribeRecipe", self.url(&["recipes", name])?, &query)
            .await
    }

    async fn update_recipe(&self, req: UpdateRecipeRequest) -> Result<()> {
        self.put("UpdateRecipe", self.url(&["recipes", req.name.as_str()])?, &req)
            .await
    }

    async fn delete_recipe_version(&self, name: &str, recipe_version: &str) -> Result<()> {
        let url = self.url(&["recipes", name, "recipeVersion", recipe_version])?;
        self.delete("DeleteRecipeVersion", url).await
    }

    async fn list_recipes(&self, req: ListRequest) -> Result<ListRecipesResponse> {
        self.get("ListRecipes", self.url(&["recipes"])?, &list_query(&req))
            .await
    }
}

#[async_trait]
impl RulesetApi for HttpClient {
    async fn create_ruleset(&self, req: CreateRulesetRequest) -> Result<()> {
        self.post("CreateRuleset", self.url(&["rulesets"])?, &req).await
    }

    async fn describe_ruleset(&self, name: &str) -> Result<Ruleset> {
        self.get("DescribeRuleset", self.url(&["rulesets", name])?, &[])
            .await
    }

    async fn update_ruleset(&self, req: UpdateRulesetRequest) -> Result<()> {
        self.put("UpdateRuleset", self.url(&["rulesets", req.name.as_str()])?, &req)
            .await
    }

    async fn delete_ruleset(&self, name: &str) -> Result<()> {
        self.delete("DeleteRuleset", self.url(&["rulesets", name])?)
            .await
    }

    async fn list_rulesets(&self, req: ListRequest) -> Result<ListRulesetsResponse> {
        self.get("ListRulesets", self.url(&["rulesets"])?, &list_query(&req))
            .await
    }
}

#[async_trait]
impl ScheduleApi for HttpClient {
    async fn create_schedule(&self, req: CreateScheduleRequest) -> Result<()> {
        self.post("CreateSchedule", self.url(&["schedules"])?, &req).await
    }

    async fn describe_schedule(&self, name: &str) -> Result<Schedule> {
        self.get("DescribeSchedule", self.url(&["schedules", name])?, &[])
            .await
    }

    async fn update_schedule(&self, req: UpdateScheduleRequest) -> Result<()> {
        self.put("UpdateSchedule", self.url(&["schedules", req.name.as_str()])?, &req)
            .await
    }

    async fn delete_schedule(&self, name: &str) -> Result<()> {
        self.delete("DeleteSchedule", self.url(&["schedules", name])?)
            .await
    }

    async fn list_schedules(&self, req: ListRequest) -> Result<ListSchedulesResponse> {
        self.get("ListSchedules", self.url(&["schedules"])?, &list_query(&req))
            .await
    }
}
