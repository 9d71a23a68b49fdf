use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use derive_more::Display;
use serde_json::json;
use strum_macros::IntoStaticStr;
use tracing::error;

/// Every record-store operation fails with exactly one of these.
/// The variant name is the tag clients see in the error body.
#[derive(Debug, Display, IntoStaticStr, PartialEq, Eq)]
pub enum ServiceError {
    #[display(fmt = "{}", _0)]
    NotFound(String),

    #[display(fmt = "{}", _0)]
    InvalidPayload(String),

    /// Database or decode failure; the detail is logged, never returned.
    #[display(fmt = "storage failure: {}", _0)]
    Storage(String),
}

impl ServiceError {
    pub fn employee_not_found(id: &str) -> Self {
        ServiceError::NotFound(format!("employee with id={} not found", id))
    }

    pub fn attendance_not_found(id: &str) -> Self {
        ServiceError::NotFound(format!("attendance with id={} not found", id))
    }

    pub fn payroll_not_found(id: &str) -> Self {
        ServiceError::NotFound(format!("payroll with id={} not found", id))
    }
}

impl From<sqlx::Error> for ServiceError {
    fn from(e: sqlx::Error) -> Self {
        ServiceError::Storage(e.to_string())
    }
}

impl From<serde_json::Error> for ServiceError {
    fn from(e: serde_json::Error) -> Self {
        ServiceError::Storage(e.to_string())
    }
}

impl From<validator::ValidationErrors> for ServiceError {
    fn from(e: validator::ValidationErrors) -> Self {
        ServiceError::InvalidPayload(e.to_string())
    }
}

impl ResponseError for ServiceError {
    fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
            ServiceError::InvalidPayload(_) => StatusCode::BAD_REQUEST,
            ServiceError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let tag: &'static str = self.into();
        let message = match self {
            ServiceError::Storage(detail) => {
                error!(error = %detail, "Storage operation failed");
                "Something went wrong, Contact with system admin".to_string()
            }
            other => other.to_string(),
        };

        HttpResponse::build(self.status_code()).json(json!({ tag: message }))
    }
}
