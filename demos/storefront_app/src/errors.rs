// demos/storefront_app/src/errors.rs

use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

use giftfields::ExtensionError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation Error: {0}")]
    Validation(String),

    #[error("Resource Not Found: {0}")]
    NotFound(String),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Extension Error: {source}")]
    Extension {
        #[from] // Allows conversion from giftfields::ExtensionError
        source: ExtensionError,
    },

    #[error("Internal Server Error: {0}")]
    Internal(String), // For miscellaneous errors
}

// Allow anyhow::Error to be converted into AppError::Internal for convenience
// in handlers using `?` on functions returning anyhow::Result.
impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        // Log the full error when it's turned into a response
        tracing::error!(application_error = %self, "Responding with error");
        match self {
            AppError::Validation(m) => HttpResponse::BadRequest().json(json!({"error": m})),
            AppError::NotFound(m) => HttpResponse::NotFound().json(json!({"error": m})),
            AppError::Config(m) => HttpResponse::InternalServerError()
                .json(json!({"error": "Configuration issue", "detail": m})),
            AppError::Extension { source } => {
                tracing::error!(extension_error_source = ?source, "Extension error details");
                HttpResponse::InternalServerError()
                    .json(json!({"error": "Extension processing error", "detail": source.to_string()}))
            }
            AppError::Internal(m) => HttpResponse::InternalServerError()
                .json(json!({"error": "An internal error occurred", "detail": m})),
        }
    }
}

// Define a Result type alias for the application
pub type Result<T, E = AppError> = std::result::Result<T, E>;
