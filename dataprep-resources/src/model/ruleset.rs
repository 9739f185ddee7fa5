//! Ruleset resource model.

use serde::{Deserialize, Serialize};

use super::common::{ColumnSelector, FilterValue, Tag};

service_enum! {
    ThresholdType {
        GreaterThanOrEqual => "GREATER_THAN_OR_EQUAL",
        LessThanOrEqual => "LESS_THAN_OR_EQUAL",
        GreaterThan => "GREATER_THAN",
        LessThan => "LESS_THAN",
    }
}

service_enum! {
    ThresholdUnit {
        Count => "COUNT",
        Percentage => "PERCENTAGE",
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Ruleset {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_arn: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rules: Option<Vec<Rule>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
}

/// A data quality check evaluated against the target dataset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Rule {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
    pub check_expression: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub substitution_map: Option<Vec<FilterValue>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threshold: Option<Threshold>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column_selectors: Option<Vec<ColumnSelector>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Threshold {
    pub value: f64,
    #[serde(rename = "Type", default, skip_serializing_if = "Option::is_none")]
    pub threshold_type: Option<ThresholdType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<ThresholdUnit>,
}
