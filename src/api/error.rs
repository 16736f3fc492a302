//! Translation of service errors into HTTP responses.

use crate::error::ErrorKind;
use crate::machine::services::MachineRegistryError;
use crate::reservation::services::ReservationLedgerError;
use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors returned by request handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Machine registry failure.
    #[error(transparent)]
    Registry(#[from] MachineRegistryError),

    /// Reservation ledger failure.
    #[error(transparent)]
    Ledger(#[from] ReservationLedgerError),

    /// The body, path or query string could not be decoded.
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

/// JSON body of every error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Error classification, e.g. `not_found`.
    pub error: String,
    /// Human-readable detail.
    pub message: String,
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::InvalidRequest(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::InvalidRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::InvalidRequest(rejection.body_text())
    }
}

impl ApiError {
    /// Classifies the error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Registry(err) => err.kind(),
            Self::Ledger(err) => err.kind(),
            Self::InvalidRequest(_) => ErrorKind::InvalidInput,
        }
    }

    /// Returns the response status.
    ///
    /// A duplicate machine id answers 400 while a double-booked slot answers
    /// 409; clients of the registry endpoint rely on the former.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match (self, self.kind()) {
            (_, ErrorKind::NotFound) => StatusCode::NOT_FOUND,
            (Self::Ledger(_), ErrorKind::Conflict) => StatusCode::CONFLICT,
            (_, ErrorKind::Conflict | ErrorKind::InvalidInput) => StatusCode::BAD_REQUEST,
            (_, ErrorKind::Internal) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Returns a message safe to show clients.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self.kind() {
            ErrorKind::Internal => "internal server error".to_owned(),
            _ => self.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let kind = self.kind();
        match kind {
            ErrorKind::Internal => tracing::error!(error = %self, "internal service error"),
            ErrorKind::Conflict => tracing::warn!(error = %self, "conflict"),
            ErrorKind::NotFound | ErrorKind::InvalidInput => {
                tracing::debug!(error = %self, "client error");
            }
        }

        let body = ErrorBody {
            error: kind.as_str().to_owned(),
            message: self.user_message(),
        };
        (self.status_code(), Json(body)).into_response()
    }
}
