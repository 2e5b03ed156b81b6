use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Failures surfaced to API clients as plain-text bodies
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("Unable to parse form")]
    UnparseableForm,

    #[error("Unable to get file")]
    MissingFile,

    #[error("Missing airport name")]
    MissingName,

    #[error("Failed to upload to S3")]
    UploadFailed,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::UnparseableForm | ApiError::MissingFile | ApiError::MissingName => {
                StatusCode::BAD_REQUEST
            }
            ApiError::UploadFailed => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), self.to_string()).into_response()
    }
}
