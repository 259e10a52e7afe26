use thiserror::Error;

use crate::PermissionId;

/// Errors raised while turning permissions into a route table.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NavError {
    #[error("parent permission {parent} not found for permission {id}")]
    UnresolvedParent { id: PermissionId, parent: PermissionId },

    #[error("parent chain of permission {0} does not terminate")]
    ParentCycle(PermissionId),

    #[error("duplicate permission id: {0}")]
    DuplicatePermission(PermissionId),

    #[error("duplicate route key: {0}")]
    DuplicateRouteKey(String),

    #[error("no value for dynamic parameter '{param}' in route {key}")]
    MissingParam { key: String, param: String },

    #[error("serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for NavError {
    fn from(e: serde_json::Error) -> Self {
        NavError::Serialization(e.to_string())
    }
}
