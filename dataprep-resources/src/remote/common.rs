//! Service-side value objects shared by several resource types.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Tags as the service keeps them: a key-unique mapping.
pub type Tags = HashMap<String, String>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct S3Location {
    pub bucket: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bucket_owner: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ColumnSelector {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub regex: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FilterExpression {
    pub expression: String,
    #[serde(default)]
    pub values_map: HashMap<String, String>,
}

/// Paging parameters for every list operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRequest {
    pub max_results: i32,
    pub next_token: Option<String>,
}
