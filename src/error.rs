use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::modules::shared::schema::ErrorResponse;

/// Failures raised by the repository layer.
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("{0} already exists")]
    AlreadyExists(&'static str),

    #[error("invalid {entity} status")]
    InvalidStatus {
        entity: &'static str,
        allowed: &'static [&'static str],
    },

    #[error("invalid user role")]
    InvalidRole,

    #[error("no fields to update")]
    NothingToUpdate,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Errors surfaced to HTTP clients as `{"error": ...}`.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    Forbidden(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized(message.into())
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<RepoError> for ApiError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(entity) => Self::NotFound(format!("{} not found", capitalize(entity))),
            RepoError::AlreadyExists(what) => Self::BadRequest(format!("{} is already registered", capitalize(what))),
            RepoError::InvalidStatus { entity, allowed } => Self::BadRequest(invalid_status_message(entity, allowed)),
            RepoError::InvalidRole => {
                Self::BadRequest("Invalid user role, must be one of 'admin', 'donor' or 'user'".to_string())
            }
            RepoError::NothingToUpdate => Self::BadRequest("No updatable fields were supplied".to_string()),
            RepoError::Database(e) => {
                tracing::error!(error = %e, "database operation failed");
                Self::Internal("Internal server error".to_string())
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status_code(), Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}

/// Fixed client-facing text for a status outside the allow-list.
pub fn invalid_status_message(entity: &str, allowed: &[&str]) -> String {
    let quoted: Vec<String> = allowed.iter().map(|s| format!("'{}'", s)).collect();
    let choices = match quoted.split_last() {
        Some((last, [])) => last.clone(),
        Some((last, rest)) => format!("{} or {}", rest.join(", "), last),
        None => String::new(),
    };
    format!("Invalid {} status, must be one of {}", entity, choices)
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
