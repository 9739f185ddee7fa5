use async_trait::async_trait;

use crate::handler::{Resource, Result, required, required_name};
use crate::mapping::tags;
use crate::model::Schedule;
use crate::remote::schedule::{CreateScheduleRequest, UpdateScheduleRequest};
use crate::remote::{self, DataPrepClient, ListRequest};

pub struct ScheduleResource;

#[async_trait]
impl Resource for ScheduleResource {
    type Model = Schedule;
    type CreateRequest = CreateScheduleRequest;
    type UpdateRequest = UpdateScheduleRequest;
    type Remote = remote::schedule::Schedule;
    type Summary = remote::schedule::Schedule;

    const KIND: &'static str = "Schedule";

    fn create_request(&self, model: &Schedule) -> Result<CreateScheduleRequest> {
        let name = required_name(model)?;
        let cron_expression = required(model.cron_expression.as_deref(), "CronExpression")?;

        Ok(CreateScheduleRequest {
            name: name.to_string(),
            job_names: model.job_names.clone(),
            cron_expression: cron_expression.to_string(),
            tags: tags::to_mapping(model.tags.as_deref()),
        })
    }

    fn update_request(&self, model: &Schedule) -> Result<UpdateScheduleRequest> {
        let name = required_name(model)?;
        let cron_expression = required(model.cron_expression.as_deref(), "CronExpression")?;

        Ok(UpdateScheduleRequest {
            name: name.to_string(),
            job_names: model.job_names.clone(),
            cron_expression: cron_expression.to_string(),
        })
    }

    fn read_model(&self, remote: remote::schedule::Schedule) -> Schedule {
        remote.into()
    }

    fn list_model(&self, item: remote::schedule::Schedule) -> Schedule {
        item.into()
    }

    async fn send_create(
        &self,
        client: &dyn DataPrepClient,
        request: CreateScheduleRequest,
    ) -> remote::Result<()> {
        client.create_schedule(request).await
    }

    async fn send_read(
        &self,
        client: &dyn DataPrepClient,
        name: &str,
    ) -> remote::Result<remote::schedule::Schedule> {
        client.describe_schedule(name).await
    }

    async fn send_update(
        &self,
        client: &dyn DataPrepClient,
        request: UpdateScheduleRequest,
    ) -> remote::Result<()> {
        client.update_schedule(request).await
    }

    async fn send_delete(&self, client: &dyn DataPrepClient, name: &str) -> remote::Result<()> {
        client.delete_schedule(name).await
    }

    async fn send_list(
        &self,
        client: &dyn DataPrepClient,
        request: ListRequest,
    ) -> remote::Result<Vec<remote::schedule::Schedule>> {
        Ok(client.list_schedules(request).await?.schedules)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Tag;

    #[test]
    fn test_create_request() {
        let schedule = Schedule {
            name: Some("nightly".into()),
            job_names: Some(vec!["profile".into()]),
            cron_expression: Some("cron(0 2 * * ? *)".into()),
            tags: Some(vec![Tag::new("env", "prod")]),
        };
        let request = ScheduleResource.create_request(&schedule).unwrap();
        assert_eq!(request.cron_expression, "cron(0 2 * * ? *)");
        assert_eq!(request.tags.unwrap()["env"], "prod");
    }

    #[test]
    fn test_create_requires_cron() {
        let schedule = Schedule {
            name: Some("nightly".into()),
            ..Default::default()
        };
        let err = ScheduleResource.create_request(&schedule).unwrap_err();
        assert_eq!(err.message, "CronExpression is required");
    }
}
