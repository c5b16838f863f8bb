use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub title: String,
    pub description: String,
}

impl FieldError {
    pub fn new(field: &str, title: impl Into<String>, description: impl Into<String>) -> Self {
        FieldError {
            field: field.to_string(),
            title: title.into(),
            description: description.into(),
        }
    }
}

/// Failure reported by the remote group/metadata service.
#[derive(Error, Debug, Clone, Serialize, PartialEq, Eq)]
pub enum ApiError {
    #[error("{0}")]
    Rejected(String),
    #[error("remote service unreachable: {0}")]
    Unreachable(String),
}

#[derive(Error, Debug, Clone, Serialize, PartialEq, Eq)]
pub enum SettingsError {
    #[error("Invalid input for field `{0}`: {1:?}")]
    InvalidInput(String, FieldError),
    #[error("Ship {0} may not change this group's settings")]
    Unauthorized(String),
    #[error("Invalid resource path: {0}")]
    InvalidResourcePath(String),
    #[error("Invalid ship name: {0}")]
    InvalidShip(String),
    #[error("Group {0} not found")]
    GroupNotFound(String),
    #[error("Association {0} not found")]
    AssociationNotFound(String),
    // Phase errors display the remote message verbatim.
    #[error("{0}")]
    MetadataUpdateFailed(String),
    #[error("{0}")]
    PolicyChangeFailed(String),
    #[error("Remote service error: {0}")]
    Remote(#[from] ApiError),
    #[error("Logging error: {0}")]
    LoggingError(String),
    #[error("Invalid token: {0}")]
    InvalidToken(String),
    #[error("Internal server error: {0}")]
    InternalServerError(String),
}

impl SettingsError {
    pub fn invalid_input(field: &str, title: impl Into<String>, description: impl Into<String>) -> Self {
        SettingsError::InvalidInput(field.to_string(), FieldError::new(field, title, description))
    }

    /// Single human-readable line for the status channel.
    pub fn user_message(&self) -> String {
        match self {
            SettingsError::InvalidInput(_, field_error) => field_error.description.clone(),
            other => other.to_string(),
        }
    }
}
