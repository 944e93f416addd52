use crate::utils::error::SentimentError;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

pub const CLASSIFICATION_FAILED: &str = "Classification failed";

#[derive(Debug, Serialize)]
struct ErrorBody {
    detail: String,
}

/// Errors as seen by HTTP clients.
#[derive(Debug)]
pub enum ApiError {
    /// Bad request body or headline; answered with 422.
    Validation(String),
    /// Anything that went wrong past validation; answered with a fixed 500.
    ClassificationFailed,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::ClassificationFailed => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<SentimentError> for ApiError {
    fn from(err: SentimentError) -> Self {
        match err {
            SentimentError::ValidationError { message, .. } => ApiError::Validation(message),
            _ => ApiError::ClassificationFailed,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Validation(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let detail = match self {
            ApiError::Validation(message) => message,
            ApiError::ClassificationFailed => CLASSIFICATION_FAILED.to_string(),
        };
        (status, Json(ErrorBody { detail })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_maps_to_422() {
        let err = ApiError::from(SentimentError::ValidationError {
            field: "headline".to_string(),
            message: "headline cannot be empty or whitespace-only".to_string(),
        });
        assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn test_everything_else_maps_to_500() {
        let errors = [
            SentimentError::ClassificationFailed,
            SentimentError::InferenceError {
                message: "Model error".to_string(),
            },
            SentimentError::ConfigError {
                message: "oops".to_string(),
            },
        ];
        for err in errors {
            assert_eq!(ApiError::from(err).status(), StatusCode::INTERNAL_SERVER_ERROR);
        }
    }
}
