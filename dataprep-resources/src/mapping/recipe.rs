//! Recipe mappers.
//!
//! Action parameter keys differ in case between the two sides: the
//! declarative model uses `SourceColumn`, the service `sourceColumn`.
//! Only the first character changes, so the transform round-trips for
//! every key whose first character has a single-character case mapping.

use std::collections::{BTreeMap, HashMap};

use super::tags;
use crate::model::recipe::{ConditionExpression, Recipe, RecipeAction, RecipeStep};
use crate::remote::recipe as remote;

/// Upper-case the first character.
pub fn upper_first(key: &str) -> String {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Lower-case the first character.
pub fn lower_first(key: &str) -> String {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Declarative parameters to service parameters. An empty bag is omitted.
fn parameters_to_remote(params: BTreeMap<String, String>) -> Option<HashMap<String, String>> {
    if params.is_empty() {
        return None;
    }
    Some(
        params
            .into_iter()
            .map(|(key, value)| (lower_first(&key), value))
            .collect(),
    )
}

fn parameters_from_remote(params: Option<HashMap<String, String>>) -> BTreeMap<String, String> {
    params
        .unwrap_or_default()
        .into_iter()
        .map(|(key, value)| (upper_first(&key), value))
        .collect()
}

impl From<RecipeAction> for remote::RecipeAction {
    fn from(value: RecipeAction) -> Self {
        Self {
            operation: value.operation,
            parameters: parameters_to_remote(value.parameters),
        }
    }
}

impl From<remote::RecipeAction> for RecipeAction {
    fn from(value: remote::RecipeAction) -> Self {
        Self {
            operation: value.operation,
            parameters: parameters_from_remote(value.parameters),
        }
    }
}

impl From<ConditionExpression> for remote::ConditionExpression {
    fn from(value: ConditionExpression) -> Self {
        Self {
            condition: value.condition,
            value: value.value,
            target_column: value.target_column,
        }
    }
}

impl From<remote::ConditionExpression> for ConditionExpression {
    fn from(value: remote::ConditionExpression) -> Self {
        Self {
            condition: value.condition,
            value: value.value,
            target_column: value.target_column,
        }
    }
}

impl From<RecipeStep> for remote::RecipeStep {
    fn from(value: RecipeStep) -> Self {
        Self {
            action: value.action.into(),
            condition_expressions: super::map_list(value.condition_expressions),
        }
    }
}

impl From<remote::RecipeStep> for RecipeStep {
    fn from(value: remote::RecipeStep) -> Self {
        Self {
            action: value.action.into(),
            condition_expressions: super::map_list(value.condition_expressions),
        }
    }
}

impl From<remote::Recipe> for Recipe {
    fn from(value: remote::Recipe) -> Self {
        Self {
            name: Some(value.name),
            description: value.description,
            steps: super::map_list(value.steps),
            tags: tags::to_list(value.tags.as_ref()),
        }
    }
}
