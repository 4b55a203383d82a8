use crate::domain::PredictError;
use crate::presentation::rest::dto::ErrorResponse;
use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};

pub const ENVIRONMENT_MISSING: &str = "Model runtime environment not available. Please ensure a model interpreter is installed and accessible.";
pub const SCRIPT_FAILED: &str = "Model prediction script encountered an error.";
pub const UNREADABLE_REPLY: &str = "Model runtime returned an unreadable response.";
pub const INTERNAL: &str = "Internal server error during prediction";

/// API error type
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
    pub details: Option<String>,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
            details: None,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        ApiError {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        let details = details.into();
        if !details.trim().is_empty() {
            self.details = Some(details);
        }
        self
    }
}

impl From<PredictError> for ApiError {
    fn from(err: PredictError) -> Self {
        match err {
            PredictError::Validation(e) => ApiError::bad_request(e.to_string()),
            PredictError::RuntimeUnavailable {
                environment_missing: true,
                cause,
                ..
            } => ApiError::internal(ENVIRONMENT_MISSING).with_details(cause),
            PredictError::RuntimeUnavailable {
                cause,
                last_stdout,
                last_stderr,
                ..
            } => {
                let details = [last_stderr, last_stdout]
                    .into_iter()
                    .find(|text| !text.trim().is_empty())
                    .unwrap_or(cause);
                ApiError::internal(SCRIPT_FAILED).with_details(details)
            }
            PredictError::RuntimeProtocol {
                reason, raw_output, ..
            } => ApiError::internal(UNREADABLE_REPLY)
                .with_details(format!("{}; output: {}", reason, raw_output.trim())),
            PredictError::Internal(detail) => ApiError::internal(INTERNAL).with_details(detail),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::bad_request("Invalid JSON request body").with_details(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(ErrorResponse::new(self.message, self.details));
        (self.status, body).into_response()
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "API Error {}: {}", self.status.as_u16(), self.message)
    }
}

impl std::error::Error for ApiError {}
