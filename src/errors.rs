use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use std::fmt;

/// A request the tracker refuses, rendered as a plain-text error response.
#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    /// A sort request naming a header the table does not have.
    pub fn unknown_column(header: &str) -> Self {
        Self::bad_request(format!("unknown sort column: {header}"))
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.message, self.status.as_u16())
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::debug!(status = %self.status, "rejecting request: {}", self.message);
        (self.status, self.message).into_response()
    }
}
