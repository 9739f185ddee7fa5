//! Recipe binding. Reads and deletes address the working version.

use async_trait::async_trait;

use crate::handler::{Resource, Result, required_name};
use crate::mapping::{map_list, tags};
use crate::model::Recipe;
use crate::remote::recipe::{CreateRecipeRequest, LATEST_WORKING_VERSION, UpdateRecipeRequest};
use crate::remote::{self, DataPrepClient, ListRequest};

pub struct RecipeResource;

#[async_trait]
impl Resource for RecipeResource {
    type Model = Recipe;
    type CreateRequest = CreateRecipeRequest;
    type UpdateRequest = UpdateRecipeRequest;
    type Remote = remote::recipe::Recipe;
    type Summary = remote::recipe::Recipe;

    const KIND: &'static str = "Recipe";

    fn create_request(&self, model: &Recipe) -> Result<CreateRecipeRequest> {
        let name = required_name(model)?;

        Ok(CreateRecipeRequest {
            name: name.to_string(),
            description: model.description.clone(),
            steps: map_list(model.steps.clone()).unwrap_or_default(),
            tags: tags::to_mapping(model.tags.as_deref()),
        })
    }

    fn update_request(&self, model: &Recipe) -> Result<UpdateRecipeRequest> {
        let name = required_name(model)?;

        Ok(UpdateRecipeRequest {
            name: name.to_string(),
            description: model.description.clone(),
            steps: map_list(model.steps.clone()),
        })
    }

    fn read_model(&self, remote: remote::recipe::Recipe) -> Recipe {
        remote.into()
    }

    fn list_model(&self, item: remote::recipe::Recipe) -> Recipe {
        item.into()
    }

    async fn send_create(
        &self,
        client: &dyn DataPrepClient,
        request: CreateRecipeRequest,
    ) -> remote::Result<()> {
        client.create_recipe(request).await
    }

    async fn send_read(
        &self,
        client: &dyn DataPrepClient,
        name: &str,
    ) -> remote::Result<remote::recipe::Recipe> {
        client
            .describe_recipe(name, Some(LATEST_WORKING_VERSION))
            .await
    }

    async fn send_update(
        &self,
        client: &dyn DataPrepClient,
        request: UpdateRecipeRequest,
    ) -> remote::Result<()> {
        client.update_recipe(request).await
    }

    async fn send_delete(&self, client: &dyn DataPrepClient, name: &str) -> remote::Result<()> {
        client
            .delete_recipe_version(name, LATEST_WORKING_VERSION)
            .await
    }

    async fn send_list(
        &self,
        client: &dyn DataPrepClient,
        request: ListRequest,
    ) -> remote::Result<Vec<remote::recipe::Recipe>> {
        Ok(client.list_recipes(request).await?.recipes)
    }
}
