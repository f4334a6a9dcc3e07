use actix_web::error::BlockingError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use schoolfinder_core::{Error, ValidationError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Core(#[from] Error),

    #[error("Blocking task failed: {0}")]
    Blocking(#[from] BlockingError),
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        ApiError::Core(Error::Validation(e))
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Core(Error::Validation(_)) => StatusCode::BAD_REQUEST,
            ApiError::Core(Error::Duplicate { .. }) => StatusCode::CONFLICT,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            ApiError::Core(Error::Validation(e)) => HttpResponse::BadRequest().json(serde_json::json!({
                "error": "ValidationError",
                "details": e,
            })),
            ApiError::Core(Error::Duplicate { name, address }) => HttpResponse::Conflict().json(serde_json::json!({
                "error": "Conflict",
                "details": { "name": name, "address": address },
            })),
            _ => {
                // storage detail stays in the log
                tracing::error!(error = %self, "request failed");
                HttpResponse::InternalServerError().json(serde_json::json!({
                    "error": "InternalServerError"
                }))
            }
        }
    }
}
