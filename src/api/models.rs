use crate::core::errors::SettingsError;
use crate::core::models::{EditableFields, Policy};
use crate::core::status::CommitStatus;
use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
pub struct SubmitSettingsRequest {
    /// Snapshot the form was opened with. Derived from the current group
    /// state when absent.
    pub previous: Option<EditableFields>,
    pub fields: EditableFields,
}

#[derive(Serialize)]
pub struct SubmitSettingsResponse {
    pub status: CommitStatus,
    pub policy: Option<Policy>,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

// Newtype wrapper for SettingsError to implement IntoResponse
pub struct ApiResponseError(pub SettingsError);

impl From<SettingsError> for ApiResponseError {
    fn from(err: SettingsError) -> Self {
        ApiResponseError(err)
    }
}

impl IntoResponse for ApiResponseError {
    fn into_response(self) -> axum::response::Response {
        let status = match &self.0 {
            SettingsError::InvalidInput(..)
            | SettingsError::InvalidResourcePath(_)
            | SettingsError::InvalidShip(_) => StatusCode::BAD_REQUEST,
            // Suppressed surfaces look the same as missing ones.
            SettingsError::Unauthorized(_)
            | SettingsError::GroupNotFound(_)
            | SettingsError::AssociationNotFound(_) => StatusCode::NOT_FOUND,
            SettingsError::InvalidToken(_) => StatusCode::UNAUTHORIZED,
            SettingsError::MetadataUpdateFailed(_)
            | SettingsError::PolicyChangeFailed(_)
            | SettingsError::Remote(_) => StatusCode::BAD_GATEWAY,
            SettingsError::LoggingError(_) | SettingsError::InternalServerError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        let error = match &self.0 {
            SettingsError::Unauthorized(_) => "Group settings not found".to_string(),
            other => other.user_message(),
        };
        (status, Json(ErrorResponse { error })).into_response()
    }
}
