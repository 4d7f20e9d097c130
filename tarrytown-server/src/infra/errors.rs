use axum::{
    Json,
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::fmt;

use tarrytown_core::ArchiveError;
use tarrytown_model::{ErrorBody, ErrorKind};

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub kind: ErrorKind,
    pub message: String,
}

impl AppError {
    pub fn new(
        status: StatusCode,
        kind: ErrorKind,
        message: impl Into<String>,
    ) -> Self {
        Self {
            status,
            kind,
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            ErrorKind::Internal,
            message,
        )
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, ErrorKind::InvalidInput, message)
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(StatusCode::FORBIDDEN, ErrorKind::PathEscape, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, ErrorKind::NotFound, message)
    }

    pub fn body(&self) -> ErrorBody {
        ErrorBody::new(self.kind, self.status.as_u16(), self.message.clone())
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = Json(self.body());
        (self.status, body).into_response()
    }
}

impl From<ArchiveError> for AppError {
    fn from(err: ArchiveError) -> Self {
        match err {
            ArchiveError::InvalidInput(msg) => Self::bad_request(msg),
            ArchiveError::NotFound(what) => {
                Self::not_found(format!("folder '{what}' does not exist"))
            }
            ArchiveError::PathEscape(_) => {
                Self::forbidden("path is outside the video archive")
            }
            err @ (ArchiveError::Io { .. } | ArchiveError::Metadata { .. }) => {
                tracing::error!(error = %err, "archive read failed");
                // Host paths stay in the log, not the response.
                Self::internal("failed to read the video archive")
            }
        }
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        tracing::debug!(error = %rejection, "rejected listing query");
        Self::bad_request(rejection.body_text())
    }
}
