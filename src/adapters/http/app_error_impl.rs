use crate::app_error::AppError;
use axum::Json;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Log the error before it gets converted into a status response.
        tracing::error!(error = ?self, "Request failed");

        match self {
            AppError::Validation(details) => (
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({
                    "error": "Invalid request data",
                    "details": details,
                })),
            )
                .into_response(),
            AppError::DuplicateEmail => (
                StatusCode::CONFLICT,
                Json(serde_json::json!({ "error": "This email is already on the waitlist" })),
            )
                .into_response(),
            // Storage detail stays in the logs; the client gets a generic message.
            AppError::Conflict(_) | AppError::Database(_) | AppError::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({ "error": "Failed to process request" })),
            )
                .into_response(),
        }
    }
}
