use async_trait::async_trait;

use crate::handler::{Resource, Result, required, required_name};
use crate::mapping::tags;
use crate::model::Project;
use crate::remote::project::{CreateProjectRequest, UpdateProjectRequest};
use crate::remote::{self, DataPrepClient, ListRequest};

pub struct ProjectResource;

#[async_trait]
impl Resource for ProjectResource {
    type Model = Project;
    type CreateRequest = CreateProjectRequest;
    type UpdateRequest = UpdateProjectRequest;
    type Remote = remote::project::Project;
    type Summary = remote::project::Project;

    const KIND: &'static str = "Project";

    fn create_request(&self, model: &Project) -> Result<CreateProjectRequest> {
        let name = required_name(model)?;
        let dataset_name = required(model.dataset_name.as_deref(), "DatasetName")?;
        let recipe_name = required(model.recipe_name.as_deref(), "RecipeName")?;
        let role_arn = required(model.role_arn.as_deref(), "RoleArn")?;

        Ok(CreateProjectRequest {
            name: name.to_string(),
            dataset_name: dataset_name.to_string(),
            recipe_name: recipe_name.to_string(),
            role_arn: role_arn.to_string(),
            sample: model.sample.clone().map(Into::into),
            tags: tags::to_mapping(model.tags.as_deref()),
        })
    }

    fn update_request(&self, model: &Project) -> Result<UpdateProjectRequest> {
        let name = required_name(model)?;
        let role_arn = required(model.role_arn.as_deref(), "RoleArn")?;

        Ok(UpdateProjectRequest {
            name: name.to_string(),
            role_arn: role_arn.to_string(),
            sample: model.sample.clone().map(Into::into),
        })
    }

    fn read_model(&self, remote: remote::project::Project) -> Project {
        remote.into()
    }

    fn list_model(&self, item: remote::project::Project) -> Project {
        item.into()
    }

    async fn send_create(
        &self,
        client: &dyn DataPrepClient,
        request: CreateProjectRequest,
    ) -> remote::Result<()> {
        client.create_project(request).await
    }

    async fn send_read(
        &self,
        client: &dyn DataPrepClient,
        name: &str,
    ) -> remote::Result<remote::project::Project> {
        client.describe_project(name).await
    }

    async fn send_update(
        &self,
        client: &dyn DataPrepClient,
        request: UpdateProjectRequest,
    ) -> remote::Result<()> {
        client.update_project(request).await
    }

    async fn send_delete(&self, client: &dyn DataPrepClient, name: &str) -> remote::Result<()> {
        client.delete_project(name).await
    }

    async fn send_list(
        &self,
        client: &dyn DataPrepClient,
        request: ListRequest,
    ) -> remote::Result<Vec<remote::project::Project>> {
        Ok(client.list_projects(request).await?.projects)
    }
}
