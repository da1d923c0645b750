use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::any::Any;
use std::collections::BTreeMap;
use validator::ValidationErrors;

/// Field name -> human readable violations for that field.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// Every failure a handler can report.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Body did not match the request schema (400).
    #[error("{message}")]
    Validation {
        message: &'static str,
        errors: FieldErrors,
    },
    /// Path id was not an integer (400).
    #[error("Invalid {} ID", .kind.to_lowercase())]
    InvalidId { kind: &'static str },
    /// No row with that id (404).
    #[error("{kind} not found")]
    NotFound { kind: &'static str },
    /// Client exceeded the contact form rate limit (429).
    #[error("Too many requests, please try again later")]
    RateLimited,
    /// Anything else (500). The detail is logged, never sent to the client.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn validation(message: &'static str, errors: &ValidationErrors) -> Self {
        ApiError::Validation {
            message,
            errors: field_errors(errors),
        }
    }

    /// A body that could not be decoded at all: bad JSON, missing field, wrong type.
    pub fn malformed_body(message: &'static str, detail: String) -> Self {
        let mut errors = FieldErrors::new();
        errors.insert("body".to_string(), vec![detail]);
        ApiError::Validation { message, errors }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation { .. } | ApiError::InvalidId { .. } => StatusCode::BAD_REQUEST,
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::RateLimited => StatusCode::TOO_MANY_REQUESTS,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self {
            ApiError::Validation { message, errors } => {
                json!({ "message": message, "errors": errors })
            }
            ApiError::InvalidId { .. } | ApiError::NotFound { .. } | ApiError::RateLimited => {
                json!({ "message": self.to_string() })
            }
            ApiError::Internal(detail) => {
                tracing::error!("Request failed: {}", detail);
                json!({ "message": "Internal server error" })
            }
        };
        (status, Json(body)).into_response()
    }
}

/// Flatten validator output into `field -> [messages]`, falling back to the
/// rule code when a rule carries no message.
fn field_errors(errors: &ValidationErrors) -> FieldErrors {
    errors
        .field_errors()
        .into_iter()
        .map(|(field, violations)| {
            let messages = violations
                .iter()
                .map(|v| match &v.message {
                    Some(message) => message.to_string(),
                    None => v.code.to_string(),
                })
                .collect();
            (field.to_string(), messages)
        })
        .collect()
}

/// Panic hook for `CatchPanicLayer`: log and answer with a plain 500.
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "handler panicked".to_string()
    };
    ApiError::Internal(detail).into_response()
}
