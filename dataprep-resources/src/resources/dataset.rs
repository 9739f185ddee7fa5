//! Dataset binding.

use async_trait::async_trait;

use crate::handler::{Resource, Result, required, required_name};
use crate::mapping::{enum_from_remote, enum_to_remote, tags};
use crate::model::Dataset;
use crate::remote::dataset::{CreateDatasetRequest, UpdateDatasetRequest};
use crate::remote::{self, DataPrepClient, ListRequest};

pub struct DatasetResource;

#[async_trait]
impl Resource for DatasetResource {
    type Model = Dataset;
    type CreateRequest = CreateDatasetRequest;
    type UpdateRequest = UpdateDatasetRequest;
    type Remote = remote::dataset::Dataset;
    type Summary = remote::dataset::Dataset;

    const KIND: &'static str = "Dataset";

    fn create_request(&self, model: &Dataset) -> Result<CreateDatasetRequest> {
        let name = required_name(model)?;
        let input = required(model.input.as_ref(), "Input")?;

        Ok(CreateDatasetRequest {
            name: name.to_string(),
            format: enum_to_remote(model.format),
            format_options: model.format_options.clone().map(Into::into),
            input: input.clone().into(),
            path_options: model.path_options.clone().map(Into::into),
            tags: tags::to_mapping(model.tags.as_deref()),
        })
    }

    fn update_request(&self, model: &Dataset) -> Result<UpdateDatasetRequest> {
        let name = required_name(model)?;
        let input = required(model.input.as_ref(), "Input")?;

        Ok(UpdateDatasetRequest {
            name: name.to_string(),
            format: enum_to_remote(model.format),
            format_options: model.format_options.clone().map(Into::into),
            input: input.clone().into(),
            path_options: model.path_options.clone().map(Into::into),
        })
    }

    fn read_model(&self, remote: remote::dataset::Dataset) -> Dataset {
        remote.into()
    }

    /// Listing keeps name, format, input and source.
    fn list_model(&self, item: remote::dataset::Dataset) -> Dataset {
        Dataset {
            name: Some(item.name),
            format: enum_from_remote(item.format),
            input: item.input.map(Into::into),
            source: enum_from_remote(item.source),
            ..Default::default()
        }
    }

    async fn send_create(
        &self,
        client: &dyn DataPrepClient,
        request: CreateDatasetRequest,
    ) -> remote::Result<()> {
        client.create_dataset(request).await
    }

    async fn send_read(
        &self,
        client: &dyn DataPrepClient,
        name: &str,
    ) -> remote::Result<remote::dataset::Dataset> {
        client.describe_dataset(name).await
    }

    async fn send_update(
        &self,
        client: &dyn DataPrepClient,
        request: UpdateDatasetRequest,
    ) -> remote::Result<()> {
        client.update_dataset(request).await
    }

    async fn send_delete(&self, client: &dyn DataPrepClient, name: &str) -> remote::Result<()> {
        client.delete_dataset(name).await
    }

    async fn send_list(
        &self,
        client: &dyn DataPrepClient,
        request: ListRequest,
    ) -> remote::Result<Vec<remote::dataset::Dataset>> {
        Ok(client.list_datasets(request).await?.datasets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handler::HandlerErrorCode;
    use crate::model::S3Location;
    use crate::model::dataset::{DatasetSource, ExcelOptions, FormatOptions, Input, InputFormat};
    use crate::model::Tag;

    fn dataset() -> Dataset {
        Dataset {
            name: Some("dataset-test".into()),
            format: Some(InputFormat::Excel),
            format_options: Some(FormatOptions {
                excel: Some(ExcelOptions {
                    sheet_indexes: Some(vec![1]),
                    sheet_names: Some(vec!["x".into()]),
                    header_row: Some(true),
                }),
                ..Default::default()
            }),
            input: Some(Input {
                s3_input_definition: Some(S3Location::new("b", "input.xlsx")),
                ..Default::default()
            }),
            tags: Some(vec![Tag::new("team", "data")]),
            ..Default::default()
        }
    }

    #[test]
    fn test_create_request() {
        let request = DatasetResource.create_request(&dataset()).unwrap();
        assert_eq!(request.name, "dataset-test");
        assert_eq!(request.format.as_deref(), Some("EXCEL"));
        assert_eq!(request.input.s3_input_definition.unwrap().bucket, "b");

        let excel = request.format_options.unwrap().excel.unwrap();
        assert_eq!(excel.sheet_indexes, Some(vec![1]));
        assert_eq!(excel.sheet_names, None);

        assert_eq!(request.tags.unwrap()["team"], "data");
    }

    #[test]
    fn test_create_requires_input() {
        let mut model = dataset();
        model.input = None;
        let err = DatasetResource.create_request(&model).unwrap_err();
        assert_eq!(err.code, HandlerErrorCode::InvalidRequest);
    }

    #[test]
    fn test_update_requires_name() {
        let mut model = dataset();
        model.name = None;
        let err = DatasetResource.update_request(&model).unwrap_err();
        assert_eq!(err.code, HandlerErrorCode::InvalidRequest);
    }

    #[test]
    fn test_list_projection() {
        let item = remote::dataset::Dataset {
            name: "sales".into(),
            format: Some("CSV".into()),
            source: Some("DATA-CATALOG".into()),
            tags: Some([("k".to_string(), "v".to_string())].into()),
            ..Default::default()
        };
        let model = DatasetResource.list_model(item);
        assert_eq!(model.name.as_deref(), Some("sales"));
        assert_eq!(model.format, Some(InputFormat::Csv));
        assert_eq!(model.source, Some(DatasetSource::DataCatalog));
        assert_eq!(model.tags, None);
    }
}
