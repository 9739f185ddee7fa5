//! Lifecycle error taxonomy and the service error translator.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::Action;
use crate::remote::ServiceError;

/// Closed set of failure codes a lifecycle invocation can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HandlerErrorCode {
    AccessDenied,
    AlreadyExists,
    NotFound,
    InvalidRequest,
    ServiceLimitExceeded,
    ResourceConflict,
    ServiceInternalError,
}

impl HandlerErrorCode {
    pub fn as_str(self) -> &'static str {
        match self {
            HandlerErrorCode::AccessDenied => "AccessDenied",
            HandlerErrorCode::AlreadyExists => "AlreadyExists",
            HandlerErrorCode::NotFound => "NotFound",
            HandlerErrorCode::InvalidRequest => "InvalidRequest",
            HandlerErrorCode::ServiceLimitExceeded => "ServiceLimitExceeded",
            HandlerErrorCode::ResourceConflict => "ResourceConflict",
            HandlerErrorCode::ServiceInternalError => "ServiceInternalError",
        }
    }
}

impl std::fmt::Display for HandlerErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A failed lifecycle invocation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{code}: {message}")]
pub struct HandlerError {
    pub code: HandlerErrorCode,
    pub message: String,
}

impl HandlerError {
    pub fn new(code: HandlerErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Structural precondition violation, detected before any remote call.
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(HandlerErrorCode::InvalidRequest, message)
    }

    /// Translate a service error raised while performing `action`.
    pub fn from_service(action: Action, err: &ServiceError) -> Self {
        Self::new(translate(action, err), err.to_string())
    }
}

/// Map a service error to its lifecycle code.
///
/// A conflict means "already exists" on create and "in use" on delete;
/// anywhere else it is unexpected.
pub fn translate(action: Action, err: &ServiceError) -> HandlerErrorCode {
    match err {
        ServiceError::AccessDenied(_) => HandlerErrorCode::AccessDenied,
        ServiceError::Conflict(_) => match action {
            Action::Create => HandlerErrorCode::AlreadyExists,
            Action::Delete => HandlerErrorCode::ResourceConflict,
            _ => HandlerErrorCode::ServiceInternalError,
        },
        ServiceError::ResourceNotFound(_) => HandlerErrorCode::NotFound,
        ServiceError::Validation(_) => HandlerErrorCode::InvalidRequest,
        ServiceError::ServiceQuotaExceeded(_) => HandlerErrorCode::ServiceLimitExceeded,
        ServiceError::InternalServer(_)
        | ServiceError::Unexpected { .. }
        | ServiceError::Transport(_) => HandlerErrorCode::ServiceInternalError,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ACTIONS: [Action; 5] = [
        Action::Create,
        Action::Read,
        Action::Update,
        Action::Delete,
        Action::List,
    ];

    #[test]
    fn test_action_independent_codes() {
        for action in ACTIONS {
            assert_eq!(
                translate(action, &ServiceError::AccessDenied("x".into())),
                HandlerErrorCode::AccessDenied
            );
            assert_eq!(
                translate(action, &ServiceError::ResourceNotFound("x".into())),
                HandlerErrorCode::NotFound
            );
            assert_eq!(
                translate(action, &ServiceError::Validation("x".into())),
                HandlerErrorCode::InvalidRequest
            );
            assert_eq!(
                translate(action, &ServiceError::ServiceQuotaExceeded("x".into())),
                HandlerErrorCode::ServiceLimitExceeded
            );
            assert_eq!(
                translate(action, &ServiceError::InternalServer("x".into())),
                HandlerErrorCode::ServiceInternalError
            );
        }
    }

    #[test]
    fn test_conflict_depends_on_action() {
        let conflict = ServiceError::Conflict("exists".into());
        assert_eq!(translate(Action::Create, &conflict), HandlerErrorCode::AlreadyExists);
        assert_eq!(translate(Action::Delete, &conflict), HandlerErrorCode::ResourceConflict);
        assert_eq!(translate(Action::Update, &conflict), HandlerErrorCode::ServiceInternalError);
        assert_eq!(translate(Action::Read, &conflict), HandlerErrorCode::ServiceInternalError);
        assert_eq!(translate(Action::List, &conflict), HandlerErrorCode::ServiceInternalError);
    }

    #[test]
    fn test_unknown_errors_fall_through() {
        let unexpected = ServiceError::Unexpected {
            kind: "ThrottlingException".into(),
            message: "slow down".into(),
        };
        assert_eq!(
            translate(Action::Read, &unexpected),
            HandlerErrorCode::ServiceInternalError
        );
        assert_eq!(
            translate(Action::Create, &ServiceError::Transport("timed out".into())),
            HandlerErrorCode::ServiceInternalError
        );
    }

    #[test]
    fn test_from_service_keeps_message() {
        let err = HandlerError::from_service(
            Action::Create,
            &ServiceError::Conflict("Dataset sales already exists".into()),
        );
        assert_eq!(err.code, HandlerErrorCode::AlreadyExists);
        assert_eq!(err.message, "conflict: Dataset sales already exists");
        assert_eq!(
            err.to_string(),
            "AlreadyExists: conflict: Dataset sales already exists"
        );
    }

    #[test]
    fn test_code_serializes_as_name() {
        let json = serde_json::to_string(&HandlerErrorCode::ServiceLimitExceeded).unwrap();
        assert_eq!(json, "\"ServiceLimitExceeded\"");
    }
}
