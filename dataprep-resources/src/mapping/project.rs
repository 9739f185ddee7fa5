//! Project mappers.

use super::tags;
use crate::model::ServiceEnum;
use crate::model::project::{Project, Sample, SampleType};
use crate::remote::project as remote;

impl From<Sample> for remote::Sample {
    fn from(value: Sample) -> Self {
        Self {
            size: value.size,
            sample_type: value.sample_type.as_str().to_string(),
        }
    }
}

/// Sample reported by the service. An unknown sample type drops the sample.
pub fn sample_from_remote(value: remote::Sample) -> Option<Sample> {
    let sample_type = super::enum_from_remote::<SampleType>(Some(value.sample_type))?;
    Some(Sample {
        size: value.size,
        sample_type,
    })
}

impl From<remote::Project> for Project {
    fn from(value: remote::Project) -> Self {
        Self {
            name: Some(value.name),
            dataset_name: value.dataset_name,
            recipe_name: value.recipe_name,
            role_arn: value.role_arn,
            sample: value.sample.and_then(sample_from_remote),
            tags: tags::to_list(value.tags.as_ref()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_sample_to_remote() {
        let sample = Sample {
            size: Some(500),
            sample_type: SampleType::FirstN,
        };
        let wire = remote::Sample::from(sample);
        assert_eq!(wire.sample_type, "FIRST_N");
        assert_eq!(wire.size, Some(500));
    }

    #[test]
    fn test_unknown_sample_type_drops_sample() {
        let wire = remote::Sample {
            size: Some(10),
            sample_type: "MIDDLE_N".into(),
        };
        assert_eq!(sample_from_remote(wire), None);
    }

    #[test]
    fn test_project_from_remote() {
        let wire = remote::Project {
            name: "cleanup".into(),
            dataset_name: Some("sales".into()),
            recipe_name: Some("cleanup-recipe".into()),
            role_arn: Some("arn:aws:iam::123456789012:role/brew".into()),
            sample: Some(remote::Sample {
                size: None,
                sample_type: "RANDOM".into(),
            }),
            tags: Some(HashMap::from([("team".into(), "data".into())])),
            resource_arn: Some("arn:project/cleanup".into()),
            create_date: None,
        };

        let project = Project::from(wire);
        assert_eq!(project.name.as_deref(), Some("cleanup"));
        assert_eq!(project.sample.unwrap().sample_type, SampleType::Random);
        assert_eq!(project.tags.unwrap()[0].key, "team");
    }
}
