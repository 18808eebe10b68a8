//! API error-handling module

use std::fmt;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::forms::errors::ValidationError;

/// The body of every form endpoint response
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct MessageResponse {
    /// Whether the request succeeded
    #[schema(example = false)]
    pub success: bool,

    /// A message for the submitter
    #[schema(example = "All fields are required.")]
    pub message: String,
}

impl MessageResponse {
    /// A successful response
    pub fn success(message: &str) -> Self {
        Self {
            success: true,
            message: message.to_string(),
        }
    }

    /// A failed response
    pub fn failure(message: &str) -> Self {
        Self {
            success: false,
            message: message.to_string(),
        }
    }
}

/// An error raised in the API
#[derive(Debug)]
pub struct ApiError {
    /// The status code
    pub status: StatusCode,

    /// The error message
    pub message: String,
}

impl ApiError {
    /// Create a new API error
    pub fn new(status: StatusCode, message: &str) -> Self {
        Self {
            status,
            message: message.to_string(),
        }
    }

    /// Create a new bad request error
    pub fn new_400(message: &str) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    /// Create new internal server error
    pub fn new_500(message: &str) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(MessageResponse::failure(&self.message))).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::MissingField(_) => ApiError::new_400("All fields are required."),
            ValidationError::InvalidEmailAddress(_) => {
                ApiError::new_400("Please provide a valid email address.")
            }
        }
    }
}
