//! Job value-object mappers.

use super::{enum_from_remote, enum_to_remote, map_list, tags};
use crate::model::job::{
    AllowedStatistics, ColumnStatisticsConfiguration, CsvOutputOptions, DataCatalogOutput,
    DatabaseOutput, DatabaseTableOutputOptions, EntityDetectorConfiguration, Job, JobSample,
    JobType, Output, OutputFormatOptions, ProfileConfiguration, RecipeReference, SampleMode,
    S3TableOutputOptions, StatisticOverride, StatisticsConfiguration, ValidationConfiguration,
};
use crate::remote::job as remote;

// =============================================================================
// Recipe job outputs
// =============================================================================

impl From<Output> for remote::Output {
    fn from(value: Output) -> Self {
        Self {
            compression_format: enum_to_remote(value.compression_format),
            format: enum_to_remote(value.format),
            format_options: value.format_options.map(Into::into),
            location: value.location.into(),
            overwrite: value.overwrite,
            partition_columns: value.partition_columns,
            max_output_files: value.max_output_files,
        }
    }
}

impl From<remote::Output> for Output {
    fn from(value: remote::Output) -> Self {
        Self {
            compression_format: enum_from_remote(value.compression_format),
            format: enum_from_remote(value.format),
            format_options: value.format_options.map(Into::into),
            location: value.location.into(),
            overwrite: value.overwrite,
            partition_columns: value.partition_columns,
            max_output_files: value.max_output_files,
        }
    }
}

impl From<OutputFormatOptions> for remote::OutputFormatOptions {
    fn from(value: OutputFormatOptions) -> Self {
        Self {
            csv: value.csv.map(|csv| remote::CsvOutputOptions {
                delimiter: csv.delimiter,
            }),
        }
    }
}

impl From<remote::OutputFormatOptions> for OutputFormatOptions {
    fn from(value: remote::OutputFormatOptions) -> Self {
        Self {
            csv: value.csv.map(|csv| CsvOutputOptions {
                delimiter: csv.delimiter,
            }),
        }
    }
}

impl From<DataCatalogOutput> for remote::DataCatalogOutput {
    fn from(value: DataCatalogOutput) -> Self {
        Self {
            catalog_id: value.catalog_id,
            database_name: value.database_name,
            table_name: value.table_name,
            s3_options: value.s3_options.map(|o| remote::S3TableOutputOptions {
                location: o.location.into(),
            }),
            database_options: value.database_options.map(Into::into),
            overwrite: value.overwrite,
        }
    }
}

impl From<remote::DataCatalogOutput> for DataCatalogOutput {
    fn from(value: remote::DataCatalogOutput) -> Self {
        Self {
            catalog_id: value.catalog_id,
            database_name: value.database_name,
            table_name: value.table_name,
            s3_options: value.s3_options.map(|o| S3TableOutputOptions {
                location: o.location.into(),
            }),
            database_options: value.database_options.map(Into::into),
            overwrite: value.overwrite,
        }
    }
}

impl From<DatabaseTableOutputOptions> for remote::DatabaseTableOutputOptions {
    fn from(value: DatabaseTableOutputOptions) -> Self {
        Self {
            temp_directory: value.temp_directory.map(Into::into),
            table_name: value.table_name,
        }
    }
}

impl From<remote::DatabaseTableOutputOptions> for DatabaseTableOutputOptions {
    fn from(value: remote::DatabaseTableOutputOptions) -> Self {
        Self {
            temp_directory: value.temp_directory.map(Into::into),
            table_name: value.table_name,
        }
    }
}

impl From<DatabaseOutput> for remote::DatabaseOutput {
    fn from(value: DatabaseOutput) -> Self {
        Self {
            glue_connection_name: value.glue_connection_name,
            database_options: value.database_options.into(),
            database_output_mode: enum_to_remote(value.database_output_mode),
        }
    }
}

impl From<remote::DatabaseOutput> for DatabaseOutput {
    fn from(value: remote::DatabaseOutput) -> Self {
        Self {
            glue_connection_name: value.glue_connection_name,
            database_options: value.database_options.into(),
            database_output_mode: enum_from_remote(value.database_output_mode),
        }
    }
}

impl From<RecipeReference> for remote::RecipeReference {
    fn from(value: RecipeReference) -> Self {
        Self {
            name: value.name,
            recipe_version: value.version,
        }
    }
}

impl From<remote::RecipeReference> for RecipeReference {
    fn from(value: remote::RecipeReference) -> Self {
        Self {
            name: value.name,
            version: value.recipe_version,
        }
    }
}

// =============================================================================
// Profile job configuration
// =============================================================================

/// `Size` is only sent for modes other than `FULL_DATASET`.
impl From<JobSample> for remote::JobSample {
    fn from(value: JobSample) -> Self {
        let size = match value.mode {
            Some(SampleMode::FullDataset) => None,
            _ => value.size,
        };
        Self {
            mode: enum_to_remote(value.mode),
            size,
        }
    }
}

impl From<remote::JobSample> for JobSample {
    fn from(value: remote::JobSample) -> Self {
        Self {
            mode: enum_from_remote(value.mode),
            size: value.size,
        }
    }
}

impl From<ProfileConfiguration> for remote::ProfileConfiguration {
    fn from(value: ProfileConfiguration) -> Self {
        Self {
            dataset_statistics_configuration: value
                .dataset_statistics_configuration
                .map(Into::into),
            profile_columns: map_list(value.profile_columns),
            column_statistics_configurations: map_list(value.column_statistics_configurations),
            entity_detector_configuration: value.entity_detector_configuration.map(Into::into),
        }
    }
}

impl From<remote::ProfileConfiguration> for ProfileConfiguration {
    fn from(value: remote::ProfileConfiguration) -> Self {
        Self {
            dataset_statistics_configuration: value
                .dataset_statistics_configuration
                .map(Into::into),
            profile_columns: map_list(value.profile_columns),
            column_statistics_configurations: map_list(value.column_statistics_configurations),
            entity_detector_configuration: value.entity_detector_configuration.map(Into::into),
        }
    }
}

impl From<StatisticsConfiguration> for remote::StatisticsConfiguration {
    fn from(value: StatisticsConfiguration) -> Self {
        Self {
            included_statistics: value.included_statistics,
            overrides: map_list(value.overrides),
        }
    }
}

impl From<remote::StatisticsConfiguration> for StatisticsConfiguration {
    fn from(value: remote::StatisticsConfiguration) -> Self {
        Self {
            included_statistics: value.included_statistics,
            overrides: map_list(value.overrides),
        }
    }
}

impl From<StatisticOverride> for remote::StatisticOverride {
    fn from(value: StatisticOverride) -> Self {
        Self {
            statistic: value.statistic,
            parameters: value.parameters.into_iter().collect(),
        }
    }
}

impl From<remote::StatisticOverride> for StatisticOverride {
    fn from(value: remote::StatisticOverride) -> Self {
        Self {
            statistic: value.statistic,
            parameters: value.parameters.into_iter().collect(),
        }
    }
}

impl From<ColumnStatisticsConfiguration> for remote::ColumnStatisticsConfiguration {
    fn from(value: ColumnStatisticsConfiguration) -> Self {
        Self {
            selectors: map_list(value.selectors),
            statistics: value.statistics.into(),
        }
    }
}

impl From<remote::ColumnStatisticsConfiguration> for ColumnStatisticsConfiguration {
    fn from(value: remote::ColumnStatisticsConfiguration) -> Self {
        Self {
            selectors: map_list(value.selectors),
            statistics: value.statistics.into(),
        }
    }
}

// The service models allowed statistics as a list; only the first entry
// is meaningful.
impl From<EntityDetectorConfiguration> for remote::EntityDetectorConfiguration {
    fn from(value: EntityDetectorConfiguration) -> Self {
        Self {
            entity_types: value.entity_types,
            allowed_statistics: value.allowed_statistics.map(|a| {
                vec![remote::AllowedStatistics {
                    statistics: a.statistics,
                }]
            }),
        }
    }
}

impl From<remote::EntityDetectorConfiguration> for EntityDetectorConfiguration {
    fn from(value: remote::EntityDetectorConfiguration) -> Self {
        Self {
            entity_types: value.entity_types,
            allowed_statistics: value
                .allowed_statistics
                .and_then(|list| list.into_iter().next())
                .map(|a| AllowedStatistics {
                    statistics: a.statistics,
                }),
        }
    }
}

impl From<ValidationConfiguration> for remote::ValidationConfiguration {
    fn from(value: ValidationConfiguration) -> Self {
        Self {
            ruleset_arn: value.ruleset_arn,
            validation_mode: enum_to_remote(value.validation_mode),
        }
    }
}

impl From<remote::ValidationConfiguration> for ValidationConfiguration {
    fn from(value: remote::ValidationConfiguration) -> Self {
        Self {
            ruleset_arn: value.ruleset_arn,
            validation_mode: enum_from_remote(value.validation_mode),
        }
    }
}

// =============================================================================
// Job
// =============================================================================

/// Rebuild a job from its description. Only the field group belonging to
/// the reported type is copied; an unknown type copies neither.
impl From<remote::Job> for Job {
    fn from(value: remote::Job) -> Self {
        let job_type: Option<JobType> = enum_from_remote(value.job_type);
        let mut job = Job {
            name: Some(value.name),
            job_type,
            dataset_name: value.dataset_name,
            encryption_key_arn: value.encryption_key_arn,
            encryption_mode: enum_from_remote(value.encryption_mode),
            log_subscription: enum_from_remote(value.log_subscription),
            max_capacity: value.max_capacity,
            max_retries: value.max_retries,
            timeout: value.timeout,
            role_arn: value.role_arn,
            tags: tags::to_list(value.tags.as_ref()),
            ..Default::default()
        };

        match job_type {
            Some(JobType::Profile) => {
                job.output_location = value.output_location.map(Into::into);
                job.job_sample = value.job_sample.map(Into::into);
                job.profile_configuration = value.profile_configuration.map(Into::into);
                job.validation_configurations = map_list(value.validation_configurations);
            }
            Some(JobType::Recipe) => {
                job.outputs = map_list(value.outputs);
                job.data_catalog_outputs = map_list(value.data_catalog_outputs);
                job.database_outputs = map_list(value.database_outputs);
                job.project_name = value.project_name;
                job.recipe = value.recipe_reference.map(Into::into);
            }
            None => {}
        }

        job
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::common::{ColumnSelector, S3Location};
    use crate::model::job::{CompressionFormat, OutputFormat, ValidationMode};
    use std::collections::BTreeMap;

    #[test]
    fn test_full_dataset_sample_omits_size() {
        let sample = JobSample {
            mode: Some(SampleMode::FullDataset),
            size: Some(5000),
        };
        let wire = remote::JobSample::from(sample);
        assert_eq!(wire.mode.as_deref(), Some("FULL_DATASET"));
        assert_eq!(wire.size, None);
    }

    #[test]
    fn test_custom_rows_sample_keeps_size() {
        let sample = JobSample {
            mode: Some(SampleMode::CustomRows),
            size: Some(5000),
        };
        let wire = remote::JobSample::from(sample.clone());
        assert_eq!(wire.size, Some(5000));
        assert_eq!(JobSample::from(wire), sample);
    }

    #[test]
    fn test_output_round_trip() {
        let output = Output {
            compression_format: Some(CompressionFormat::Gzip),
            format: Some(OutputFormat::Csv),
            format_options: Some(OutputFormatOptions {
                csv: Some(CsvOutputOptions {
                    delimiter: Some("|".into()),
                }),
            }),
            location: S3Location::new("out", "results/"),
            overwrite: Some(true),
            partition_columns: Some(vec!["year".into()]),
            max_output_files: Some(4),
        };
        let wire = remote::Output::from(output.clone());
        assert_eq!(wire.compression_format.as_deref(), Some("GZIP"));
        assert_eq!(Output::from(wire), output);
    }

    #[test]
    fn test_profile_configuration_round_trip() {
        let config = ProfileConfiguration {
            dataset_statistics_configuration: Some(StatisticsConfiguration {
                included_statistics: Some(vec!["CORRELATION".into()]),
                overrides: Some(vec![StatisticOverride {
                    statistic: "CORRELATION".into(),
                    parameters: BTreeMap::from([("columnNumber".into(), "5".into())]),
                }]),
            }),
            profile_columns: Some(vec![ColumnSelector {
                regex: Some("col.*".into()),
                name: None,
            }]),
            column_statistics_configurations: None,
            entity_detector_configuration: Some(EntityDetectorConfiguration {
                entity_types: vec!["USA_ALL".into()],
                allowed_statistics: Some(AllowedStatistics {
                    statistics: vec!["AGGREGATED_GROUP".into()],
                }),
            }),
        };

        let wire = remote::ProfileConfiguration::from(config.clone());
        let detector = wire.entity_detector_configuration.as_ref().unwrap();
        assert_eq!(detector.allowed_statistics.as_ref().unwrap().len(), 1);

        assert_eq!(ProfileConfiguration::from(wire), config);
    }

    #[test]
    fn test_profile_job_from_remote_keeps_profile_fields_only() {
        let wire = remote::Job {
            name: "profile".into(),
            job_type: Some("PROFILE".into()),
            dataset_name: Some("sales".into()),
            role_arn: Some("arn:aws:iam::123456789012:role/brew".into()),
            output_location: Some(crate::remote::common::S3Location {
                bucket: "out".into(),
                key: None,
                bucket_owner: None,
            }),
            job_sample: Some(remote::JobSample {
                mode: Some("CUSTOM_ROWS".into()),
                size: Some(100),
            }),
            validation_configurations: Some(vec![remote::ValidationConfiguration {
                ruleset_arn: "arn:ruleset".into(),
                validation_mode: Some("CHECK_ALL".into()),
            }]),
            project_name: Some("stale".into()),
            ..Default::default()
        };

        let job = Job::from(wire);
        assert_eq!(job.job_type, Some(JobType::Profile));
        assert_eq!(job.output_location.unwrap().bucket, "out");
        assert_eq!(job.job_sample.unwrap().size, Some(100));
        assert_eq!(
            job.validation_configurations.unwrap()[0].validation_mode,
            Some(ValidationMode::CheckAll)
        );
        assert_eq!(job.project_name, None);
        assert_eq!(job.tags, None);
    }

    #[test]
    fn test_unknown_job_type_drops_type_specific_fields() {
        let wire = remote::Job {
            name: "odd".into(),
            job_type: Some("STREAMING".into()),
            project_name: Some("p".into()),
            job_sample: Some(remote::JobSample::default()),
            ..Default::default()
        };

        let job = Job::from(wire);
        assert_eq!(job.job_type, None);
        assert_eq!(job.project_name, None);
        assert_eq!(job.job_sample, None);
    }
}
