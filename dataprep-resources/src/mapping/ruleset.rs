//! Ruleset mappers.

use super::common::{values_from_map, values_to_map};
use super::{enum_from_remote, enum_to_remote, map_list, tags};
use crate::model::ruleset::{Rule, Ruleset, Threshold};
use crate::remote::ruleset as remote;

impl From<Threshold> for remote::Threshold {
    fn from(value: Threshold) -> Self {
        Self {
            value: value.value,
            threshold_type: enum_to_remote(value.threshold_type),
            unit: enum_to_remote(value.unit),
        }
    }
}

impl From<remote::Threshold> for Threshold {
    fn from(value: remote::Threshold) -> Self {
        Self {
            value: value.value,
            threshold_type: enum_from_remote(value.threshold_type),
            unit: enum_from_remote(value.unit),
        }
    }
}

impl From<Rule> for remote::Rule {
    fn from(value: Rule) -> Self {
        Self {
            name: value.name,
            disabled: value.disabled,
            check_expression: value.check_expression,
            substitution_map: value.substitution_map.map(values_to_map),
            threshold: value.threshold.map(Into::into),
            column_selectors: map_list(value.column_selectors),
        }
    }
}

impl From<remote::Rule> for Rule {
    fn from(value: remote::Rule) -> Self {
        Self {
            name: value.name,
            disabled: value.disabled,
            check_expression: value.check_expression,
            substitution_map: value.substitution_map.map(values_from_map),
            threshold: value.threshold.map(Into::into),
            column_selectors: map_list(value.column_selectors),
        }
    }
}

impl From<remote::Ruleset> for Ruleset {
    fn from(value: remote::Ruleset) -> Self {
        Self {
            name: Some(value.name),
            description: value.description,
            target_arn: value.target_arn,
            rules: Some(value.rules.into_iter().map(Into::into).collect()),
            tags: tags::to_list(value.tags.as_ref()),
        }
    }
}

/// Listing entries carry no rules.
impl From<remote::RulesetItem> for Ruleset {
    fn from(value: remote::RulesetItem) -> Self {
        Self {
            name: Some(value.name),
            description: value.description,
            target_arn: Some(value.target_arn),
            rules: None,
            tags: tags::to_list(value.tags.as_ref()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::common::{ColumnSelector, FilterValue};
    use crate::model::ruleset::{ThresholdType, ThresholdUnit};

    fn rule() -> Rule {
        Rule {
            name: "no-nulls".into(),
            disabled: Some(false),
            check_expression: ":col1 is_not_null".into(),
            substitution_map: Some(vec![FilterValue::new(":col1", "`id`")]),
            threshold: Some(Threshold {
                value: 99.5,
                threshold_type: Some(ThresholdType::GreaterThanOrEqual),
                unit: Some(ThresholdUnit::Percentage),
            }),
            column_selectors: Some(vec![ColumnSelector {
                regex: None,
                name: Some("id".into()),
            }]),
        }
    }

    #[test]
    fn test_rule_to_remote() {
        let wire = remote::Rule::from(rule());
        assert_eq!(wire.substitution_map.as_ref().unwrap()[":col1"], "`id`");
        let threshold = wire.threshold.as_ref().unwrap();
        assert_eq!(threshold.threshold_type.as_deref(), Some("GREATER_THAN_OR_EQUAL"));
        assert_eq!(threshold.unit.as_deref(), Some("PERCENTAGE"));
    }

    #[test]
    fn test_rule_round_trip() {
        let back = Rule::from(remote::Rule::from(rule()));
        assert_eq!(back, rule());
    }

    #[test]
    fn test_unknown_threshold_unit_is_dropped() {
        let wire = remote::Threshold {
            value: 1.0,
            threshold_type: Some("LESS_THAN".into()),
            unit: Some("PERMILLE".into()),
        };
        let threshold = Threshold::from(wire);
        assert_eq!(threshold.threshold_type, Some(ThresholdType::LessThan));
        assert_eq!(threshold.unit, None);
    }

    #[test]
    fn test_listing_item_has_no_rules() {
        let item = remote::RulesetItem {
            name: "quality".into(),
            description: None,
            target_arn: "arn:dataset/sales".into(),
            rule_count: Some(3),
            tags: None,
        };
        let ruleset = Ruleset::from(item);
        assert_eq!(ruleset.target_arn.as_deref(), Some("arn:dataset/sales"));
        assert_eq!(ruleset.rules, None);
    }
}
