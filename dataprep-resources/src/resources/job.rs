//! Job binding.
//!
//! A job is either a profile job or a recipe job. The declared `Type`
//! decides which service call is made and which fields are allowed; a
//! field belonging to the other type is rejected before any remote call.

use async_trait::async_trait;

use crate::handler::{HandlerError, Resource, Result, required, required_name};
use crate::mapping::{enum_from_remote, enum_to_remote, map_list, tags};
use crate::model::{Job, JobType};
use crate::remote::job::{
    CreateProfileJobRequest, CreateRecipeJobRequest, UpdateProfileJobRequest,
    UpdateRecipeJobRequest,
};
use crate::remote::{self, DataPrepClient, ListRequest};

/// Create call selected by the job type.
#[derive(Debug, Clone, PartialEq)]
pub enum JobCreateRequest {
    Profile(CreateProfileJobRequest),
    Recipe(CreateRecipeJobRequest),
}

/// Update call selected by the job type.
#[derive(Debug, Clone, PartialEq)]
pub enum JobUpdateRequest {
    Profile(UpdateProfileJobRequest),
    Recipe(UpdateRecipeJobRequest),
}

/// Resolve the declared job type and check that no field of the other
/// type is set.
pub fn resolve_job_type(job: &Job) -> Result<JobType> {
    let job_type = *required(job.job_type.as_ref(), "Type")?;

    let foreign: Vec<(&str, bool)> = match job_type {
        JobType::Recipe => vec![
            ("JobSample", job.job_sample.is_some()),
            ("OutputLocation", job.output_location.is_some()),
            ("ProfileConfiguration", job.profile_configuration.is_some()),
            ("ValidationConfigurations", job.validation_configurations.is_some()),
        ],
        JobType::Profile => vec![
            ("Outputs", job.outputs.is_some()),
            ("DataCatalogOutputs", job.data_catalog_outputs.is_some()),
            ("DatabaseOutputs", job.database_outputs.is_some()),
            ("Recipe", job.recipe.is_some()),
            ("ProjectName", job.project_name.is_some()),
        ],
    };

    match foreign.iter().find(|(_, set)| *set) {
        Some((field, _)) => Err(HandlerError::invalid_request(format!(
            "{} is not valid for a {} job",
            field, job_type
        ))),
        None => Ok(job_type),
    }
}

fn profile_create_request(
    job: &Job,
    name: &str,
    role_arn: &str,
) -> Result<CreateProfileJobRequest> {
    let dataset_name = required(job.dataset_name.as_deref(), "DatasetName")?;
    let output_location = required(job.output_location.as_ref(), "OutputLocation")?;

    Ok(CreateProfileJobRequest {
        name: name.to_string(),
        dataset_name: dataset_name.to_string(),
        encryption_key_arn: job.encryption_key_arn.clone(),
        encryption_mode: enum_to_remote(job.encryption_mode),
        log_subscription: enum_to_remote(job.log_subscription),
        max_capacity: job.max_capacity,
        max_retries: job.max_retries,
        output_location: output_location.clone().into(),
        configuration: job.profile_configuration.clone().map(Into::into),
        validation_configurations: map_list(job.validation_configurations.clone()),
        role_arn: role_arn.to_string(),
        tags: tags::to_mapping(job.tags.as_deref()),
        timeout: job.timeout,
        job_sample: job.job_sample.clone().map(Into::into),
    })
}

fn recipe_create_request(job: &Job, name: &str, role_arn: &str) -> CreateRecipeJobRequest {
    CreateRecipeJobRequest {
        name: name.to_string(),
        dataset_name: job.dataset_name.clone(),
        encryption_key_arn: job.encryption_key_arn.clone(),
        encryption_mode: enum_to_remote(job.encryption_mode),
        log_subscription: enum_to_remote(job.log_subscription),
        max_capacity: job.max_capacity,
        max_retries: job.max_retries,
        outputs: map_list(job.outputs.clone()),
        data_catalog_outputs: map_list(job.data_catalog_outputs.clone()),
        database_outputs: map_list(job.database_outputs.clone()),
        project_name: job.project_name.clone(),
        recipe_reference: job.recipe.clone().map(Into::into),
        role_arn: role_arn.to_string(),
        tags: tags::to_mapping(job.tags.as_deref()),
        timeout: job.timeout,
    }
}

pub struct JobResource;

#[async_trait]
impl Resource for JobResource {
    type Model = Job;
    type CreateRequest = JobCreateRequest;
    type UpdateRequest = JobUpdateRequest;
    type Remote = remote::job::Job;
    type Summary = remote::job::Job;

    const KIND: &'static str = "Job";

    fn create_request(&self, model: &Job) -> Result<JobCreateRequest> {
        let name = required_name(model)?;
        let job_type = resolve_job_type(model)?;
        let role_arn = required(model.role_arn.as_deref(), "RoleArn")?;

        match job_type {
            JobType::Profile => Ok(JobCreateRequest::Profile(profile_create_request(
                model, name, role_arn,
            )?)),
            JobType::Recipe => Ok(JobCreateRequest::Recipe(recipe_create_request(
                model, name, role_arn,
            ))),
        }
    }

    fn update_request(&self, model: &Job) -> Result<JobUpdateRequest> {
        let name = required_name(model)?.to_string();
        let job_type = resolve_job_type(model)?;

        let request = match job_type {
            JobType::Profile => JobUpdateRequest::Profile(UpdateProfileJobRequest {
                name,
                configuration: model.profile_configuration.clone().map(Into::into),
                encryption_key_arn: model.encryption_key_arn.clone(),
                encryption_mode: enum_to_remote(model.encryption_mode),
                log_subscription: enum_to_remote(model.log_subscription),
                max_capacity: model.max_capacity,
                max_retries: model.max_retries,
                output_location: model.output_location.clone().map(Into::into),
                validation_configurations: map_list(model.validation_configurations.clone()),
                role_arn: model.role_arn.clone(),
                timeout: model.timeout,
                job_sample: model.job_sample.clone().map(Into::into),
            }),
            JobType::Recipe => JobUpdateRequest::Recipe(UpdateRecipeJobRequest {
                name,
                encryption_key_arn: model.encryption_key_arn.clone(),
                encryption_mode: enum_to_remote(model.encryption_mode),
                log_subscription: enum_to_remote(model.log_subscription),
                max_capacity: model.max_capacity,
                max_retries: model.max_retries,
                outputs: map_list(model.outputs.clone()),
                data_catalog_outputs: map_list(model.data_catalog_outputs.clone()),
                database_outputs: map_list(model.database_outputs.clone()),
                role_arn: model.role_arn.clone(),
                timeout: model.timeout,
            }),
        };
        Ok(request)
    }

    fn read_model(&self, remote: remote::job::Job) -> Job {
        remote.into()
    }

    fn list_model(&self, item: remote::job::Job) -> Job {
        Job {
            name: Some(item.name),
            job_type: enum_from_remote(item.job_type),
            dataset_name: item.dataset_name,
            project_name: item.project_name,
            role_arn: item.role_arn,
            ..Default::default()
        }
    }

    async fn send_create(
        &self,
        client: &dyn DataPrepClient,
        request: JobCreateRequest,
    ) -> remote::Result<()> {
        match request {
            JobCreateRequest::Profile(req) => client.create_profile_job(req).await,
            JobCreateRequest::Recipe(req) => client.create_recipe_job(req).await,
        }
    }

    async fn send_read(
        &self,
        client: &dyn DataPrepClient,
        name: &str,
    ) -> remote::Result<remote::job::Job> {
        client.describe_job(name).await
    }

    async fn send_update(
        &self,
        client: &dyn DataPrepClient,
        request: JobUpdateRequest,
    ) -> remote::Result<()> {
        match request {
            JobUpdateRequest::Profile(req) => client.update_profile_job(req).await,
            JobUpdateRequest::Recipe(req) => client.update_recipe_job(req).await,
        }
    }

    async fn send_delete(&self, client: &dyn DataPrepClient, name: &str) -> remote::Result<()> {
        client.delete_job(name).await
    }

    async fn send_list(
        &self,
        client: &dyn DataPrepClient,
        request: ListRequest,
    ) -> remote::Result<Vec<remote::job::Job>> {
        Ok(client.list_jobs(request).await?.jobs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handler::HandlerErrorCode;
    use crate::model::S3Location;
    use crate::model::job::{JobSample, Output, RecipeReference, SampleMode};

    fn profile_job() -> Job {
        Job {
            name: Some("profile".into()),
            job_type: Some(JobType::Profile),
            dataset_name: Some("sales".into()),
            role_arn: Some("arn:aws:iam::123456789012:role/brew".into()),
            output_location: Some(S3Location::new("out", "profiles/")),
            job_sample: Some(JobSample {
                mode: Some(SampleMode::FullDataset),
                size: Some(20000),
            }),
            ..Default::default()
        }
    }

    fn recipe_job() -> Job {
        Job {
            name: Some("recipe".into()),
            job_type: Some(JobType::Recipe),
            project_name: Some("cleanup".into()),
            role_arn: Some("arn:aws:iam::123456789012:role/brew".into()),
            outputs: Some(vec![Output {
                location: S3Location::new("out", "clean/"),
                ..Default::default()
            }]),
            recipe: Some(RecipeReference {
                name: "cleanup-recipe".into(),
                version: Some("1.0".into()),
            }),
            ..Default::default()
        }
    }

    #[test]
    fn test_missing_type_is_rejected() {
        let mut job = profile_job();
        job.job_type = None;
        let err = resolve_job_type(&job).unwrap_err();
        assert_eq!(err.code, HandlerErrorCode::InvalidRequest);
        assert_eq!(err.message, "Type is required");
    }

    #[test]
    fn test_recipe_job_with_sample_is_rejected() {
        let mut job = recipe_job();
        job.job_sample = Some(JobSample::default());
        let err = resolve_job_type(&job).unwrap_err();
        assert_eq!(err.code, HandlerErrorCode::InvalidRequest);
        assert_eq!(err.message, "JobSample is not valid for a RECIPE job");
    }

    #[test]
    fn test_profile_job_with_outputs_is_rejected() {
        let mut job = profile_job();
        job.outputs = Some(vec![]);
        let err = JobResource.create_request(&job).unwrap_err();
        assert_eq!(err.code, HandlerErrorCode::InvalidRequest);
    }

    #[test]
    fn test_profile_create_request() {
        let request = JobResource.create_request(&profile_job()).unwrap();
        let JobCreateRequest::Profile(req) = request else {
            panic!("expected profile job request");
        };
        assert_eq!(req.dataset_name, "sales");
        assert_eq!(req.output_location.bucket, "out");
        assert_eq!(req.job_sample.unwrap().size, None);
    }

    #[test]
    fn test_profile_create_requires_output_location() {
        let mut job = profile_job();
        job.output_location = None;
        let err = JobResource.create_request(&job).unwrap_err();
        assert_eq!(err.message, "OutputLocation is required");
    }

    #[test]
    fn test_create_requires_role() {
        let mut job = recipe_job();
        job.role_arn = None;
        let err = JobResource.create_request(&job).unwrap_err();
        assert_eq!(err.message, "RoleArn is required");
    }

    #[test]
    fn test_recipe_create_request() {
        let request = JobResource.create_request(&recipe_job()).unwrap();
        match request {
            JobCreateRequest::Recipe(req) => {
                let reference = req.recipe_reference.unwrap();
                assert_eq!(reference.name, "cleanup-recipe");
                assert_eq!(reference.recipe_version.as_deref(), Some("1.0"));
                assert_eq!(req.outputs.unwrap().len(), 1);
            }
            other => panic!("expected recipe job request, got {:?}", other),
        }
    }

    #[test]
    fn test_update_routes_by_type() {
        let request = JobResource.update_request(&profile_job()).unwrap();
        match request {
            JobUpdateRequest::Profile(req) => {
                assert_eq!(req.name, "profile");
                let sample = req.job_sample.unwrap();
                assert_eq!(sample.mode.as_deref(), Some("FULL_DATASET"));
                assert_eq!(sample.size, None);
            }
            other => panic!("expected profile job update, got {:?}", other),
        }

        let request = JobResource.update_request(&recipe_job()).unwrap();
        assert!(matches!(request, JobUpdateRequest::Recipe(_)));
    }

    #[test]
    fn test_list_projection() {
        let item = remote::job::Job {
            name: "recipe".into(),
            job_type: Some("RECIPE".into()),
            project_name: Some("cleanup".into()),
            role_arn: Some("arn:role".into()),
            timeout: Some(2880),
            ..Default::default()
        };
        let job = JobResource.list_model(item);
        assert_eq!(job.job_type, Some(JobType::Recipe));
        assert_eq!(job.project_name.as_deref(), Some("cleanup"));
        assert_eq!(job.timeout, None);
    }
}
