//! Dataset value-object mappers, including the format-options and
//! input-source resolvers.

use std::collections::HashMap;

use tracing::debug;

use super::{enum_from_remote, enum_to_remote, tags};
use crate::model::dataset::{
    CsvOptions, DataCatalogInputDefinition, Dataset, DatabaseInputDefinition, DatasetParameter,
    DatetimeOptions, ExcelOptions, FilesLimit, FormatOptions, Input, JsonOptions, Metadata,
    ParameterType, PathOptions, PathParameter,
};
use crate::model::ServiceEnum;
use crate::remote::dataset as remote;

// =============================================================================
// Format options
// =============================================================================

impl From<FormatOptions> for remote::FormatOptions {
    fn from(value: FormatOptions) -> Self {
        Self {
            json: value.json.map(Into::into),
            excel: value.excel.and_then(resolve_excel),
            csv: value.csv.map(Into::into),
        }
    }
}

impl From<remote::FormatOptions> for FormatOptions {
    fn from(value: remote::FormatOptions) -> Self {
        Self {
            json: value.json.map(Into::into),
            excel: value.excel.map(Into::into),
            csv: value.csv.map(Into::into),
        }
    }
}

/// Pick exactly one sheet selector for the service.
///
/// A non-empty `SheetIndexes` wins, then a non-empty `SheetNames`. With
/// neither, the excel options are left out of the request entirely.
pub fn resolve_excel(excel: ExcelOptions) -> Option<remote::ExcelOptions> {
    match (excel.sheet_indexes, excel.sheet_names) {
        (Some(indexes), _) if !indexes.is_empty() => Some(remote::ExcelOptions {
            sheet_indexes: Some(indexes),
            sheet_names: None,
            header_row: excel.header_row,
        }),
        (_, Some(names)) if !names.is_empty() => Some(remote::ExcelOptions {
            sheet_indexes: None,
            sheet_names: Some(names),
            header_row: excel.header_row,
        }),
        _ => {
            debug!("Excel options carry no sheet selector, omitting");
            None
        }
    }
}

impl From<remote::ExcelOptions> for ExcelOptions {
    fn from(value: remote::ExcelOptions) -> Self {
        Self {
            sheet_indexes: value.sheet_indexes,
            sheet_names: value.sheet_names,
            header_row: value.header_row,
        }
    }
}

impl From<JsonOptions> for remote::JsonOptions {
    fn from(value: JsonOptions) -> Self {
        Self {
            multi_line: value.multi_line,
        }
    }
}

impl From<remote::JsonOptions> for JsonOptions {
    fn from(value: remote::JsonOptions) -> Self {
        Self {
            multi_line: value.multi_line,
        }
    }
}

impl From<CsvOptions> for remote::CsvOptions {
    fn from(value: CsvOptions) -> Self {
        Self {
            delimiter: value.delimiter,
            header_row: value.header_row,
        }
    }
}

impl From<remote::CsvOptions> for CsvOptions {
    fn from(value: remote::CsvOptions) -> Self {
        Self {
            delimiter: value.delimiter,
            header_row: value.header_row,
        }
    }
}

// =============================================================================
// Input
// =============================================================================

// Each source is copied as-is. Whether exactly one is set is the
// service's call.
impl From<Input> for remote::Input {
    fn from(value: Input) -> Self {
        Self {
            s3_input_definition: value.s3_input_definition.map(Into::into),
            data_catalog_input_definition: value.data_catalog_input_definition.map(Into::into),
            database_input_definition: value.database_input_definition.map(Into::into),
            metadata: value.metadata.map(Into::into),
        }
    }
}

impl From<remote::Input> for Input {
    fn from(value: remote::Input) -> Self {
        Self {
            s3_input_definition: value.s3_input_definition.map(Into::into),
            data_catalog_input_definition: value.data_catalog_input_definition.map(Into::into),
            database_input_definition: value.database_input_definition.map(Into::into),
            metadata: value.metadata.map(Into::into),
        }
    }
}

impl From<DataCatalogInputDefinition> for remote::DataCatalogInputDefinition {
    fn from(value: DataCatalogInputDefinition) -> Self {
        Self {
            catalog_id: value.catalog_id,
            database_name: value.database_name,
            table_name: value.table_name,
            temp_directory: value.temp_directory.map(Into::into),
        }
    }
}

impl From<remote::DataCatalogInputDefinition> for DataCatalogInputDefinition {
    fn from(value: remote::DataCatalogInputDefinition) -> Self {
        Self {
            catalog_id: value.catalog_id,
            database_name: value.database_name,
            table_name: value.table_name,
            temp_directory: value.temp_directory.map(Into::into),
        }
    }
}

impl From<DatabaseInputDefinition> for remote::DatabaseInputDefinition {
    fn from(value: DatabaseInputDefinition) -> Self {
        Self {
            glue_connection_name: value.glue_connection_name,
            database_table_name: value.database_table_name,
            temp_directory: value.temp_directory.map(Into::into),
            query_string: value.query_string,
        }
    }
}

impl From<remote::DatabaseInputDefinition> for DatabaseInputDefinition {
    fn from(value: remote::DatabaseInputDefinition) -> Self {
        Self {
            glue_connection_name: value.glue_connection_name,
            database_table_name: value.database_table_name,
            temp_directory: value.temp_directory.map(Into::into),
            query_string: value.query_string,
        }
    }
}

impl From<Metadata> for remote::Metadata {
    fn from(value: Metadata) -> Self {
        Self {
            source_arn: value.source_arn,
        }
    }
}

impl From<remote::Metadata> for Metadata {
    fn from(value: remote::Metadata) -> Self {
        Self {
            source_arn: value.source_arn,
        }
    }
}

// =============================================================================
// Path options
// =============================================================================

impl From<PathOptions> for remote::PathOptions {
    fn from(value: PathOptions) -> Self {
        Self {
            files_limit: value.files_limit.map(Into::into),
            last_modified_date_condition: value.last_modified_date_condition.map(Into::into),
            parameters: value.parameters.map(parameters_to_remote),
        }
    }
}

impl From<remote::PathOptions> for PathOptions {
    fn from(value: remote::PathOptions) -> Self {
        Self {
            files_limit: value.files_limit.map(Into::into),
            last_modified_date_condition: value.last_modified_date_condition.map(Into::into),
            parameters: value.parameters.map(parameters_from_remote),
        }
    }
}

impl From<FilesLimit> for remote::FilesLimit {
    fn from(value: FilesLimit) -> Self {
        Self {
            max_files: value.max_files,
            ordered_by: enum_to_remote(value.ordered_by),
            order: enum_to_remote(value.order),
        }
    }
}

impl From<remote::FilesLimit> for FilesLimit {
    fn from(value: remote::FilesLimit) -> Self {
        Self {
            max_files: value.max_files,
            ordered_by: enum_from_remote(value.ordered_by),
            order: enum_from_remote(value.order),
        }
    }
}

/// Parameter list to mapping keyed by path parameter name.
fn parameters_to_remote(params: Vec<PathParameter>) -> HashMap<String, remote::DatasetParameter> {
    params
        .into_iter()
        .map(|p| (p.path_parameter_name, p.dataset_parameter.into()))
        .collect()
}

/// Mapping to parameter list, ordered by name. Parameters of an unknown
/// type are dropped.
fn parameters_from_remote(params: HashMap<String, remote::DatasetParameter>) -> Vec<PathParameter> {
    let mut list: Vec<PathParameter> = params
        .into_iter()
        .filter_map(|(path_parameter_name, parameter)| {
            dataset_parameter_from_remote(parameter).map(|dataset_parameter| PathParameter {
                path_parameter_name,
                dataset_parameter,
            })
        })
        .collect();
    list.sort_by(|a, b| a.path_parameter_name.cmp(&b.path_parameter_name));
    list
}

impl From<DatasetParameter> for remote::DatasetParameter {
    fn from(value: DatasetParameter) -> Self {
        Self {
            name: value.name,
            parameter_type: value.parameter_type.as_str().to_string(),
            datetime_options: value.datetime_options.map(Into::into),
            create_column: value.create_column,
            filter: value.filter.map(Into::into),
        }
    }
}

fn dataset_parameter_from_remote(value: remote::DatasetParameter) -> Option<DatasetParameter> {
    let parameter_type = ParameterType::from_service_str(&value.parameter_type)?;
    Some(DatasetParameter {
        name: value.name,
        parameter_type,
        datetime_options: value.datetime_options.map(Into::into),
        create_column: value.create_column,
        filter: value.filter.map(Into::into),
    })
}

impl From<DatetimeOptions> for remote::DatetimeOptions {
    fn from(value: DatetimeOptions) -> Self {
        Self {
            format: value.format,
            timezone_offset: value.timezone_offset,
            locale_code: value.locale_code,
        }
    }
}

impl From<remote::DatetimeOptions> for DatetimeOptions {
    fn from(value: remote::DatetimeOptions) -> Self {
        Self {
            format: value.format,
            timezone_offset: value.timezone_offset,
            locale_code: value.locale_code,
        }
    }
}

// =============================================================================
// Dataset
// =============================================================================

impl From<remote::Dataset> for Dataset {
    fn from(value: remote::Dataset) -> Self {
        Self {
            name: Some(value.name),
            format: enum_from_remote(value.format),
            format_options: value.format_options.map(Into::into),
            input: value.input.map(Into::into),
            path_options: value.path_options.map(Into::into),
            source: enum_from_remote(value.source),
            tags: tags::to_list(value.tags.as_ref()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::common::{FilterExpression, FilterValue, S3Location};
    use crate::model::dataset::{Order, OrderedBy};

    fn excel(indexes: Option<Vec<i32>>, names: Option<Vec<&str>>) -> ExcelOptions {
        ExcelOptions {
            sheet_indexes: indexes,
            sheet_names: names.map(|n| n.into_iter().map(String::from).collect()),
            header_row: Some(true),
        }
    }

    #[test]
    fn test_excel_prefers_indexes() {
        let resolved = resolve_excel(excel(Some(vec![1]), Some(vec!["x"]))).unwrap();
        assert_eq!(resolved.sheet_indexes, Some(vec![1]));
        assert_eq!(resolved.sheet_names, None);
        assert_eq!(resolved.header_row, Some(true));
    }

    #[test]
    fn test_excel_names_only() {
        let resolved = resolve_excel(excel(None, Some(vec!["x"]))).unwrap();
        assert_eq!(resolved.sheet_indexes, None);
        assert_eq!(resolved.sheet_names, Some(vec!["x".to_string()]));
    }

    #[test]
    fn test_excel_empty_indexes_fall_back_to_names() {
        let resolved = resolve_excel(excel(Some(vec![]), Some(vec!["x"]))).unwrap();
        assert_eq!(resolved.sheet_indexes, None);
        assert_eq!(resolved.sheet_names, Some(vec!["x".to_string()]));
    }

    #[test]
    fn test_excel_without_selector_is_omitted() {
        assert!(resolve_excel(excel(None, None)).is_none());
        assert!(resolve_excel(excel(Some(vec![]), Some(vec![]))).is_none());

        let options = FormatOptions {
            excel: Some(excel(None, None)),
            ..Default::default()
        };
        let wire = remote::FormatOptions::from(options);
        assert!(wire.excel.is_none());
    }

    #[test]
    fn test_format_options_round_trip() {
        let options = FormatOptions {
            json: None,
            excel: Some(excel(None, Some(vec!["Sheet1", "Sheet2"]))),
            csv: Some(CsvOptions {
                delimiter: Some(";".into()),
                header_row: Some(false),
            }),
        };
        let back = FormatOptions::from(remote::FormatOptions::from(options.clone()));
        assert_eq!(back, options);
    }

    #[test]
    fn test_input_copies_whichever_source_is_set() {
        let input = Input {
            data_catalog_input_definition: Some(DataCatalogInputDefinition {
                catalog_id: Some("123456789012".into()),
                database_name: "db".into(),
                table_name: "events".into(),
                temp_directory: Some(S3Location::new("tmp-bucket", "tmp/")),
            }),
            ..Default::default()
        };
        let wire = remote::Input::from(input.clone());
        assert!(wire.s3_input_definition.is_none());
        assert!(wire.database_input_definition.is_none());
        assert!(wire.metadata.is_none());
        assert_eq!(Input::from(wire), input);
    }

    #[test]
    fn test_path_options_round_trip() {
        let options = PathOptions {
            files_limit: Some(FilesLimit {
                max_files: 10,
                ordered_by: Some(OrderedBy::LastModifiedDate),
                order: Some(Order::Descending),
            }),
            last_modified_date_condition: Some(FilterExpression {
                expression: "AFTER :date1".into(),
                values_map: vec![FilterValue::new(":date1", "2024-01-01T00:00:00Z")],
            }),
            parameters: Some(vec![
                PathParameter {
                    path_parameter_name: "country".into(),
                    dataset_parameter: DatasetParameter {
                        name: "country".into(),
                        parameter_type: ParameterType::String,
                        datetime_options: None,
                        create_column: Some(true),
                        filter: None,
                    },
                },
                PathParameter {
                    path_parameter_name: "day".into(),
                    dataset_parameter: DatasetParameter {
                        name: "day".into(),
                        parameter_type: ParameterType::Datetime,
                        datetime_options: Some(DatetimeOptions {
                            format: "yyyy-MM-dd".into(),
                            timezone_offset: None,
                            locale_code: None,
                        }),
                        create_column: None,
                        filter: None,
                    },
                },
            ]),
        };

        let wire = remote::PathOptions::from(options.clone());
        let params = wire.parameters.as_ref().unwrap();
        assert_eq!(params["day"].parameter_type, "Datetime");
        assert_eq!(
            wire.files_limit.as_ref().unwrap().ordered_by.as_deref(),
            Some("LAST_MODIFIED_DATE")
        );

        assert_eq!(PathOptions::from(wire), options);
    }

    #[test]
    fn test_unknown_parameter_type_is_dropped() {
        let wire = remote::PathOptions {
            parameters: Some(HashMap::from([(
                "p".to_string(),
                remote::DatasetParameter {
                    name: "p".into(),
                    parameter_type: "Geo".into(),
                    ..Default::default()
                },
            )])),
            ..Default::default()
        };
        assert_eq!(PathOptions::from(wire).parameters, Some(vec![]));
    }

    #[test]
    fn test_dataset_from_remote() {
        let wire = remote::Dataset {
            name: "sales".into(),
            format: Some("CSV".into()),
            source: Some("S3".into()),
            input: Some(remote::Input {
                s3_input_definition: Some(crate::remote::common::S3Location {
                    bucket: "b".into(),
                    key: Some("input.csv".into()),
                    bucket_owner: None,
                }),
                ..Default::default()
            }),
            tags: Some(HashMap::from([("team".to_string(), "data".to_string())])),
            ..Default::default()
        };

        let model = Dataset::from(wire);
        assert_eq!(model.name.as_deref(), Some("sales"));
        assert_eq!(model.format, Some(crate::model::dataset::InputFormat::Csv));
        assert_eq!(model.source, Some(crate::model::dataset::DatasetSource::S3));
        assert_eq!(
            model.input.unwrap().s3_input_definition,
            Some(S3Location::new("b", "input.csv"))
        );
        assert_eq!(model.tags.unwrap()[0].key, "team");
    }
}
