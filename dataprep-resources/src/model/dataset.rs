//! Dataset resource model.

use serde::{Deserialize, Serialize};

use super::common::{FilterExpression, S3Location, Tag};

service_enum! {
    /// File format of the dataset's source data.
    InputFormat {
        Csv => "CSV",
        Json => "JSON",
        Parquet => "PARQUET",
        Excel => "EXCEL",
        Orc => "ORC",
    }
}

service_enum! {
    /// Where the dataset's data lives. Reported by the service, never sent.
    DatasetSource {
        S3 => "S3",
        DataCatalog => "DATA-CATALOG",
        Database => "DATABASE",
    }
}

service_enum! {
    OrderedBy {
        LastModifiedDate => "LAST_MODIFIED_DATE",
    }
}

service_enum! {
    Order {
        Descending => "DESCENDING",
        Ascending => "ASCENDING",
    }
}

service_enum! {
    ParameterType {
        Datetime => "Datetime",
        Number => "Number",
        String => "String",
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Dataset {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<InputFormat>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format_options: Option<FormatOptions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input: Option<Input>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path_options: Option<PathOptions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<DatasetSource>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
}

/// Format-specific parsing options. At most one member is meaningful,
/// matching the dataset's [`InputFormat`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FormatOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub json: Option<JsonOptions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excel: Option<ExcelOptions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub csv: Option<CsvOptions>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct JsonOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub multi_line: Option<bool>,
}

/// Excel sheets to load, either by position or by name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ExcelOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sheet_indexes: Option<Vec<i32>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sheet_names: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header_row: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CsvOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delimiter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header_row: Option<bool>,
}

/// Source of the dataset. Exactly one member is expected to be set; the
/// service enforces that, not the mapper.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Input {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub s3_input_definition: Option<S3Location>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_catalog_input_definition: Option<DataCatalogInputDefinition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database_input_definition: Option<DatabaseInputDefinition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DataCatalogInputDefinition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog_id: Option<String>,
    pub database_name: String,
    pub table_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temp_directory: Option<S3Location>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DatabaseInputDefinition {
    pub glue_connection_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database_table_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temp_directory: Option<S3Location>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query_string: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Metadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_arn: Option<String>,
}

/// Options for datasets whose input key is a path pattern.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PathOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub files_limit: Option<FilesLimit>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_modified_date_condition: Option<FilterExpression>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Vec<PathParameter>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FilesLimit {
    pub max_files: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ordered_by: Option<OrderedBy>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<Order>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PathParameter {
    pub path_parameter_name: String,
    pub dataset_parameter: DatasetParameter,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DatasetParameter {
    pub name: String,
    #[serde(rename = "Type")]
    pub parameter_type: ParameterType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub datetime_options: Option<DatetimeOptions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_column: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<FilterExpression>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DatetimeOptions {
    pub format: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone_offset: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale_code: Option<String>,
}
