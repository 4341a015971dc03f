//! Error responses of the HTTP API.

use crate::error::CalcError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use colored::Colorize;
use serde::{Deserialize, Serialize};

/// JSON body of every error response: `{"error": "..."}`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ErrorBody {
    pub error: String,
}

/// A request the API refuses, with the status to answer it with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> ApiError {
        ApiError {
            status,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> ApiError {
        ApiError::new(StatusCode::BAD_REQUEST, message)
    }
}

impl From<CalcError> for ApiError {
    fn from(e: CalcError) -> Self {
        log::debug!("calculation refused: {kind}", kind = e.kind());
        ApiError::bad_request(e.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        log::warn!(
            "{rejected} {status}: {message}",
            rejected = "rejected".on_red(),
            status = self.status,
            message = self.message
        );
        (
            self.status,
            Json(ErrorBody {
                error: self.message,
            }),
        )
            .into_response()
    }
}
