//! Ruleset binding.

use async_trait::async_trait;

use crate::handler::{HandlerError, Resource, Result, required, required_name};
use crate::mapping::tags;
use crate::model::ruleset::Rule;
use crate::model::Ruleset;
use crate::remote::ruleset::{CreateRulesetRequest, RulesetItem, UpdateRulesetRequest};
use crate::remote::{self, DataPrepClient, ListRequest};

/// A ruleset must carry at least one rule.
fn required_rules(model: &Ruleset) -> Result<Vec<remote::ruleset::Rule>> {
    match model.rules.as_deref() {
        Some(rules) if !rules.is_empty() => Ok(rules.iter().cloned().map(Rule::into).collect()),
        _ => Err(HandlerError::invalid_request("Rules must not be empty")),
    }
}

pub struct RulesetResource;

#[async_trait]
impl Resource for RulesetResource {
    type Model = Ruleset;
    type CreateRequest = CreateRulesetRequest;
    type UpdateRequest = UpdateRulesetRequest;
    type Remote = remote::ruleset::Ruleset;
    type Summary = RulesetItem;

    const KIND: &'static str = "Ruleset";

    fn create_request(&self, model: &Ruleset) -> Result<CreateRulesetRequest> {
        let name = required_name(model)?;
        let target_arn = required(model.target_arn.as_deref(), "TargetArn")?;
        let rules = required_rules(model)?;

        Ok(CreateRulesetRequest {
            name: name.to_string(),
            description: model.description.clone(),
            target_arn: target_arn.to_string(),
            rules,
            tags: tags::to_mapping(model.tags.as_deref()),
        })
    }

    fn update_request(&self, model: &Ruleset) -> Result<UpdateRulesetRequest> {
        let name = required_name(model)?;
        let rules = required_rules(model)?;

        Ok(UpdateRulesetRequest {
            name: name.to_string(),
            description: model.description.clone(),
            rules,
        })
    }

    fn read_model(&self, remote: remote::ruleset::Ruleset) -> Ruleset {
        remote.into()
    }

    /// Listing keeps name, description and target.
    fn list_model(&self, item: RulesetItem) -> Ruleset {
        Ruleset {
            name: Some(item.name),
            description: item.description,
            target_arn: Some(item.target_arn),
            ..Default::default()
        }
    }

    async fn send_create(
        &self,
        client: &dyn DataPrepClient,
        request: CreateRulesetRequest,
    ) -> remote::Result<()> {
        client.create_ruleset(request).await
    }

    async fn send_read(
        &self,
        client: &dyn DataPrepClient,
        name: &str,
    ) -> remote::Result<remote::ruleset::Ruleset> {
        client.describe_ruleset(name).await
    }

    async fn send_update(
        &self,
        client: &dyn DataPrepClient,
        request: UpdateRulesetRequest,
    ) -> remote::Result<()> {
        client.update_ruleset(request).await
    }

    async fn send_delete(&self, client: &dyn DataPrepClient, name: &str) -> remote::Result<()> {
        client.delete_ruleset(name).await
    }

    async fn send_list(
        &self,
        client: &dyn DataPrepClient,
        request: ListRequest,
    ) -> remote::Result<Vec<RulesetItem>> {
        Ok(client.list_rulesets(request).await?.rulesets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handler::HandlerErrorCode;

    fn ruleset(rules: Option<Vec<Rule>>) -> Ruleset {
        Ruleset {
            name: Some("quality".into()),
            description: Some("sales checks".into()),
            target_arn: Some("arn:dataset/sales".into()),
            rules,
            tags: None,
        }
    }

    fn rule() -> Rule {
        Rule {
            name: "rows".into(),
            check_expression: "AGG(ROW_COUNT) > :val1".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_create_request() {
        let request = RulesetResource.create_request(&ruleset(Some(vec![rule()]))).unwrap();
        assert_eq!(request.target_arn, "arn:dataset/sales");
        assert_eq!(request.rules.len(), 1);
        assert_eq!(request.rules[0].check_expression, "AGG(ROW_COUNT) > :val1");
    }

    #[test]
    fn test_empty_or_missing_rules_rejected() {
        for rules in [None, Some(vec![])] {
            let err = RulesetResource.create_request(&ruleset(rules.clone())).unwrap_err();
            assert_eq!(err.code, HandlerErrorCode::InvalidRequest);

            let err = RulesetResource.update_request(&ruleset(rules)).unwrap_err();
            assert_eq!(err.code, HandlerErrorCode::InvalidRequest);
        }
    }

    #[test]
    fn test_create_requires_target() {
        let mut model = ruleset(Some(vec![rule()]));
        model.target_arn = None;
        let err = RulesetResource.create_request(&model).unwrap_err();
        assert_eq!(err.message, "TargetArn is required");
    }

    #[test]
    fn test_update_does_not_require_target() {
        let mut model = ruleset(Some(vec![rule()]));
        model.target_arn = None;
        let request = RulesetResource.update_request(&model).unwrap();
        assert_eq!(request.rules.len(), 1);
    }

    #[test]
    fn test_list_projection() {
        let item = RulesetItem {
            name: "quality".into(),
            description: Some("sales checks".into()),
            target_arn: "arn:dataset/sales".into(),
            rule_count: Some(4),
            tags: Some(Default::default()),
        };
        let model = RulesetResource.list_model(item);
        assert_eq!(model.description.as_deref(), Some("sales checks"));
        assert_eq!(model.rules, None);
        assert_eq!(model.tags, None);
    }
}
