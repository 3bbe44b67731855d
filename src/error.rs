use axum::{
    Json,
    extract::{FromRequest, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use validator::ValidationErrors;
use viralcarrot_shared::Error;

const GENERIC_MESSAGE: &str = "Something went wrong while preparing your recipes. Please try again.";

/// JSON error returned by the `/api` endpoints.
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    Internal {
        message: String,
        /// Only set in development mode.
        details: Option<String>,
    },
}

/// `Json` extractor whose rejections use the API error body.
#[derive(Debug, FromRequest)]
#[from_request(via(Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!(err = %rejection, "Rejected request body");
        ApiError::BadRequest(rejection.body_text())
    }
}

/// First user-facing message of a validation failure.
fn validation_message(errors: &ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    fields
        .into_iter()
        .flat_map(|(_, errors)| errors.iter())
        .find_map(|error| error.message.as_ref().map(|m| m.to_string()))
        .unwrap_or_else(|| "Invalid request".to_string())
}

impl ApiError {
    pub fn from_error(err: Error, development: bool) -> Self {
        match err {
            Error::Validate(errors) => ApiError::BadRequest(validation_message(&errors)),
            Error::User(message) => ApiError::BadRequest(message),
            Error::Server(message) => {
                tracing::error!(err = message, "Recipe pipeline failed");
                ApiError::internal(message, development)
            }
            Error::Unknown(err) => {
                tracing::error!(err = %err, "Unexpected recipe pipeline error");
                ApiError::internal(format!("{err:#}"), development)
            }
        }
    }

    fn internal(details: String, development: bool) -> Self {
        ApiError::Internal {
            message: GENERIC_MESSAGE.to_string(),
            details: development.then_some(details),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BadRequest(message) => {
                let error_response = serde_json::json!({
                    "success": false,
                    "error": message,
                });

                (StatusCode::BAD_REQUEST, Json(error_response)).into_response()
            }
            ApiError::Internal { message, details } => {
                let mut error_response = serde_json::json!({
                    "success": false,
                    "error": message,
                });
                if let Some(details) = details {
                    error_response["details"] = details.into();
                }

                (StatusCode::INTERNAL_SERVER_ERROR, Json(error_response)).into_response()
            }
        }
    }
}
