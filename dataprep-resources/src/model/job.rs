//! Job resource model.
//!
//! A job is either a profile job or a recipe job. [`JobType`] decides which
//! half of the fields is meaningful:
//!
//! - `PROFILE`: `OutputLocation`, `JobSample`, `ProfileConfiguration`,
//!   `ValidationConfigurations`
//! - `RECIPE`: `Outputs`, `DataCatalogOutputs`, `DatabaseOutputs`,
//!   `Recipe`, `ProjectName`

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::common::{ColumnSelector, S3Location, Tag};

service_enum! {
    JobType {
        Profile => "PROFILE",
        Recipe => "RECIPE",
    }
}

service_enum! {
    EncryptionMode {
        SseKms => "SSE-KMS",
        SseS3 => "SSE-S3",
    }
}

service_enum! {
    LogSubscription {
        Enable => "ENABLE",
        Disable => "DISABLE",
    }
}

service_enum! {
    CompressionFormat {
        Gzip => "GZIP",
        Lz4 => "LZ4",
        Snappy => "SNAPPY",
        Bzip2 => "BZIP2",
        Deflate => "DEFLATE",
        Lzo => "LZO",
        Brotli => "BROTLI",
        Zstd => "ZSTD",
        Zlib => "ZLIB",
    }
}

service_enum! {
    OutputFormat {
        Csv => "CSV",
        Json => "JSON",
        Parquet => "PARQUET",
        GlueParquet => "GLUEPARQUET",
        Avro => "AVRO",
        Orc => "ORC",
        Xml => "XML",
        TableauHyper => "TABLEAUHYPER",
    }
}

service_enum! {
    /// How much of the dataset a profile job reads.
    SampleMode {
        FullDataset => "FULL_DATASET",
        CustomRows => "CUSTOM_ROWS",
    }
}

service_enum! {
    ValidationMode {
        CheckAll => "CHECK_ALL",
    }
}

service_enum! {
    DatabaseOutputMode {
        NewTable => "NEW_TABLE",
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Job {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "Type", default, skip_serializing_if = "Option::is_none")]
    pub job_type: Option<JobType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dataset_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encryption_key_arn: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encryption_mode: Option<EncryptionMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_subscription: Option<LogSubscription>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_capacity: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_retries: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role_arn: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outputs: Option<Vec<Output>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_catalog_outputs: Option<Vec<DataCatalogOutput>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database_outputs: Option<Vec<DatabaseOutput>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipe: Option<RecipeReference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_location: Option<S3Location>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_sample: Option<JobSample>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_configuration: Option<ProfileConfiguration>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation_configurations: Option<Vec<ValidationConfiguration>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
}

/// Object-store output of a recipe job.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Output {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compression_format: Option<CompressionFormat>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<OutputFormat>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format_options: Option<OutputFormatOptions>,
    pub location: S3Location,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overwrite: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partition_columns: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_output_files: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OutputFormatOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub csv: Option<CsvOutputOptions>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CsvOutputOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delimiter: Option<String>,
}

/// Catalog table output of a recipe job.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DataCatalogOutput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog_id: Option<String>,
    pub database_name: String,
    pub table_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub s3_options: Option<S3TableOutputOptions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database_options: Option<DatabaseTableOutputOptions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overwrite: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct S3TableOutputOptions {
    pub location: S3Location,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DatabaseTableOutputOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temp_directory: Option<S3Location>,
    pub table_name: String,
}

/// Database output of a recipe job, through a catalog connection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DatabaseOutput {
    pub glue_connection_name: String,
    pub database_options: DatabaseTableOutputOptions,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database_output_mode: Option<DatabaseOutputMode>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RecipeReference {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

/// Sample a profile job runs on. `Size` only applies to `CUSTOM_ROWS`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct JobSample {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<SampleMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProfileConfiguration {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dataset_statistics_configuration: Option<StatisticsConfiguration>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_columns: Option<Vec<ColumnSelector>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column_statistics_configurations: Option<Vec<ColumnStatisticsConfiguration>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_detector_configuration: Option<EntityDetectorConfiguration>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StatisticsConfiguration {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub included_statistics: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overrides: Option<Vec<StatisticOverride>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StatisticOverride {
    pub statistic: String,
    #[serde(default)]
    pub parameters: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ColumnStatisticsConfiguration {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selectors: Option<Vec<ColumnSelector>>,
    pub statistics: StatisticsConfiguration,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EntityDetectorConfiguration {
    pub entity_types: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed_statistics: Option<AllowedStatistics>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AllowedStatistics {
    pub statistics: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ValidationConfiguration {
    pub ruleset_arn: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation_mode: Option<ValidationMode>,
}
