use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

use crate::constants::MAX_QUESTION_COUNT;

#[derive(Debug, Clone, Error)]
pub enum AppError {
    #[error("The maximum number of questions is {}.", MAX_QUESTION_COUNT)]
    CountTooLarge(u32),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Empty response from AI model")]
    EmptyModelResponse,

    #[error("Model request failed: {0}")]
    ModelUnavailable(String),

    #[error("Failed to parse questions: {details}")]
    ParseFailure { details: String, raw_response: String },

    #[error("Generated questions failed validation: {details}")]
    SchemaInvalid { details: String, raw_response: String },

    #[error("Internal server error: {0}")]
    InternalError(String),
}

/// Diagnostic payload returned for parse/schema failures so clients can see
/// what the model actually produced.
#[derive(Debug, Serialize)]
pub struct GenerationErrorResponse {
    pub error: String,
    pub details: String,
    #[serde(rename = "rawResponse")]
    pub raw_response: String,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::CountTooLarge(_) => StatusCode::BAD_REQUEST,
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::EmptyModelResponse => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::ModelUnavailable(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::ParseFailure { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::SchemaInvalid { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::ParseFailure {
                details,
                raw_response,
            } => HttpResponse::build(self.status_code()).json(GenerationErrorResponse {
                error: "Failed to parse questions".to_string(),
                details: details.clone(),
                raw_response: raw_response.clone(),
            }),
            AppError::SchemaInvalid {
                details,
                raw_response,
            } => HttpResponse::build(self.status_code()).json(GenerationErrorResponse {
                error: "Generated questions failed validation".to_string(),
                details: details.clone(),
                raw_response: raw_response.clone(),
            }),
            _ => HttpResponse::build(self.status_code())
                .content_type("text/plain; charset=utf-8")
                .body(self.to_string()),
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::ValidationError(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
