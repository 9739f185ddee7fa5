//! Mappers for value objects shared across resource types.

use std::collections::HashMap;

use crate::model::common::{ColumnSelector, FilterExpression, FilterValue, S3Location};
use crate::remote::common as remote;

impl From<S3Location> for remote::S3Location {
    fn from(value: S3Location) -> Self {
        Self {
            bucket: value.bucket,
            key: value.key,
            bucket_owner: value.bucket_owner,
        }
    }
}

impl From<remote::S3Location> for S3Location {
    fn from(value: remote::S3Location) -> Self {
        Self {
            bucket: value.bucket,
            key: value.key,
            bucket_owner: value.bucket_owner,
        }
    }
}

impl From<ColumnSelector> for remote::ColumnSelector {
    fn from(value: ColumnSelector) -> Self {
        Self {
            regex: value.regex,
            name: value.name,
        }
    }
}

impl From<remote::ColumnSelector> for ColumnSelector {
    fn from(value: remote::ColumnSelector) -> Self {
        Self {
            regex: value.regex,
            name: value.name,
        }
    }
}

impl From<FilterExpression> for remote::FilterExpression {
    fn from(value: FilterExpression) -> Self {
        Self {
            expression: value.expression,
            values_map: values_to_map(value.values_map),
        }
    }
}

impl From<remote::FilterExpression> for FilterExpression {
    fn from(value: remote::FilterExpression) -> Self {
        Self {
            expression: value.expression,
            values_map: values_from_map(value.values_map),
        }
    }
}

/// Binding list to mapping keyed by value reference. Last entry wins.
pub fn values_to_map(values: Vec<FilterValue>) -> HashMap<String, String> {
    values
        .into_iter()
        .map(|v| (v.value_reference, v.value))
        .collect()
}

/// Mapping to binding list, ordered by value reference.
pub fn values_from_map(values: HashMap<String, String>) -> Vec<FilterValue> {
    let mut list: Vec<FilterValue> = values
        .into_iter()
        .map(|(value_reference, value)| FilterValue {
            value_reference,
            value,
        })
        .collect();
    list.sort_by(|a, b| a.value_reference.cmp(&b.value_reference));
    list
}
