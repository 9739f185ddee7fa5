use super::tags;
use crate::model::schedule::Schedule;
use crate::remote::schedule as remote;

impl From<remote::Schedule> for Schedule {
    fn from(value: remote::Schedule) -> Self {
        Self {
            name: Some(value.name),
            job_names: value.job_names,
            cron_expression: value.cron_expression,
            tags: tags::to_list(value.tags.as_ref()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_schedule_from_remote() {
        let wire = remote::Schedule {
            name: "nightly".into(),
            job_names: Some(vec!["profile".into()]),
            cron_expression: Some("cron(0 2 * * ? *)".into()),
            tags: Some(HashMap::new()),
            ..Default::default()
        };
        let schedule = Schedule::from(wire);
        assert_eq!(schedule.name.as_deref(), Some("nightly"));
        assert_eq!(schedule.cron_expression.as_deref(), Some("cron(0 2 * * ? *)"));
        assert_eq!(schedule.tags, Some(vec![]));
    }
}
