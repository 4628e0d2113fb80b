use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::fmt;
use tracing::error;

use crate::{calculator::PricingError, models::ErrorResponse};

pub const MISSING_FIELDS_MESSAGE: &str = "Pizza size and cost are required";
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal Server Error";
pub const PAYLOAD_TOO_LARGE_MESSAGE: &str = "Request body too large";

/// Application error types
#[derive(Debug)]
pub enum AppError {
    /// Pizza size or cost missing, null or zero
    MissingRequiredField,
    /// A field holds something other than a number
    InvalidField(&'static str),
    /// Calculator rejected the input
    InvalidInput(PricingError),
    /// Body larger than the configured limit
    PayloadTooLarge,
    /// Unreadable request body
    MalformedRequest(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingRequiredField => write!(f, "{}", MISSING_FIELDS_MESSAGE),
            Self::InvalidField(field) => write!(f, "{} must be a number", field),
            Self::InvalidInput(err) => write!(f, "{}", err),
            Self::PayloadTooLarge => write!(f, "{}", PAYLOAD_TOO_LARGE_MESSAGE),
            Self::MalformedRequest(msg) => write!(f, "Malformed request: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match &self {
            Self::MissingRequiredField => {
                (StatusCode::BAD_REQUEST, MISSING_FIELDS_MESSAGE.to_string())
            }
            Self::InvalidField(_) | Self::InvalidInput(_) => {
                (StatusCode::BAD_REQUEST, self.to_string())
            }
            Self::PayloadTooLarge => (
                StatusCode::PAYLOAD_TOO_LARGE,
                PAYLOAD_TOO_LARGE_MESSAGE.to_string(),
            ),
            Self::MalformedRequest(_) => {
                // Detail stays in the logs
                error!(error = %self, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    INTERNAL_ERROR_MESSAGE.to_string(),
                )
            }
        };

        crate::metrics::record_error(error_type_name(&self));

        (status, Json(ErrorResponse { error: error_message })).into_response()
    }
}

pub fn error_type_name(error: &AppError) -> &'static str {
    match error {
        AppError::MissingRequiredField => "missing_required_field",
        AppError::InvalidField(_) => "invalid_field",
        AppError::InvalidInput(err) => err.kind(),
        AppError::PayloadTooLarge => "payload_too_large",
        AppError::MalformedRequest(_) => "malformed_request",
    }
}

impl From<PricingError> for AppError {
    fn from(err: PricingError) -> Self {
        Self::InvalidInput(err)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::MalformedRequest(format!("JSON error: {}", err))
    }
}
