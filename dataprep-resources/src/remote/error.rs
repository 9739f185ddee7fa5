//! Remote service error types.

use thiserror::Error;

/// Errors reported by the data-preparation service, or raised while
/// talking to it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// Caller lacks permission for the operation.
    #[error("access denied: {0}")]
    AccessDenied(String),

    /// Name already taken, or the resource is in use.
    #[error("conflict: {0}")]
    Conflict(String),

    /// Named resource does not exist.
    #[error("resource not found: {0}")]
    ResourceNotFound(String),

    /// Request shape or content rejected by the service.
    #[error("validation failed: {0}")]
    Validation(String),

    /// Account quota exhausted.
    #[error("service quota exceeded: {0}")]
    ServiceQuotaExceeded(String),

    /// Service-side failure.
    #[error("internal server error: {0}")]
    InternalServer(String),

    /// An error type the client does not know.
    #[error("{kind}: {message}")]
    Unexpected { kind: String, message: String },

    /// Connection, timeout or decoding failure before a service answer.
    #[error("transport: {0}")]
    Transport(String),
}

impl ServiceError {
    /// Build from the service's error type name (e.g. `ConflictException`).
    ///
    /// Accepts the `Name:namespace` form some gateways send.
    pub fn from_error_type(error_type: &str, message: impl Into<String>) -> Self {
        let message = message.into();
        let kind = error_type.split(':').next().unwrap_or_default().trim();
        match kind {
            "AccessDeniedException" => ServiceError::AccessDenied(message),
            "ConflictException" => ServiceError::Conflict(message),
            "ResourceNotFoundException" => ServiceError::ResourceNotFound(message),
            "ValidationException" => ServiceError::Validation(message),
            "ServiceQuotaExceededException" => ServiceError::ServiceQuotaExceeded(message),
            "InternalServerException" => ServiceError::InternalServer(message),
            _ => ServiceError::Unexpected {
                kind: kind.to_string(),
                message,
            },
        }
    }

    /// The service's error type name for this error.
    pub fn error_type(&self) -> &str {
        match self {
            ServiceError::AccessDenied(_) => "AccessDeniedException",
            ServiceError::Conflict(_) => "ConflictException",
            ServiceError::ResourceNotFound(_) => "ResourceNotFoundException",
            ServiceError::Validation(_) => "ValidationException",
            ServiceError::ServiceQuotaExceeded(_) => "ServiceQuotaExceededException",
            ServiceError::InternalServer(_) => "InternalServerException",
            ServiceError::Unexpected { kind, .. } => kind,
            ServiceError::Transport(_) => "TransportError",
        }
    }
}

/// Result type for remote client operations.
pub type Result<T> = std::result::Result<T, ServiceError>;
