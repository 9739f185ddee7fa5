use std::sync::Arc;

use tracing::info;

/// Audit logger for resource lifecycle changes.
///
/// Records go to the `audit` tracing target so a subscriber can route them
/// separately from operational logs.
pub struct ResourceAuditLogger {
    component: String,
    enabled: bool,
}

impl ResourceAuditLogger {
    pub fn new(component: &str) -> Self {
        Self {
            component: component.to_string(),
            enabled: true,
        }
    }

    pub fn new_noop() -> Self {
        Self {
            component: String::new(),
            enabled: false,
        }
    }

    fn log(&self, message: String, object_ids: Vec<String>) {
        if !self.enabled {
            return;
        }
        info!(
            target: "audit",
            component = %self.component,
            objects = ?object_ids,
            "{}",
            message
        );
    }

    pub fn resource_created(&self, kind: &str, name: &str) {
        self.log(
            format!("{} created: {}", kind, name),
            vec![object_id(kind, name)],
        );
    }

    pub fn resource_updated(&self, kind: &str, name: &str) {
        self.log(
            format!("{} updated: {}", kind, name),
            vec![object_id(kind, name)],
        );
    }

    pub fn resource_deleted(&self, kind: &str, name: &str) {
        self.log(
            format!("{} deleted: {}", kind, name),
            vec![object_id(kind, name)],
        );
    }
}

fn object_id(kind: &str, name: &str) -> String {
    format!("{}/{}", kind.to_lowercase(), name)
}

pub fn create_audit_logger(component: &str) -> Arc<ResourceAuditLogger> {
    Arc::new(ResourceAuditLogger::new(component))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noop_logger_doesnt_panic() {
        let logger = ResourceAuditLogger::new_noop();

        logger.resource_created("Dataset", "sales");
        logger.resource_updated("Dataset", "sales");
        logger.resource_deleted("Dataset", "sales");
    }

    #[test]
    fn test_object_id() {
        assert_eq!(object_id("Ruleset", "quality"), "ruleset/quality");
    }

    #[test]
    fn test_enabled_logger_without_subscriber() {
        let logger = create_audit_logger("handler");
        logger.resource_created("Job", "nightly-profile");
    }
}
