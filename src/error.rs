use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("username already exists")]
    DuplicateUsername,

    #[error("user not found")]
    NotFound,

    #[error("invalid username or password")]
    InvalidCredentials,

    #[error("invalid token signature")]
    InvalidSignature,

    #[error("token expired")]
    Expired,

    #[error("malformed token")]
    Malformed,

    #[error("authorization header missing")]
    MissingCredential,

    #[error("malformed authorization header")]
    MalformedCredential,

    #[error("token has been revoked")]
    Revoked,

    #[error("invalid or expired token")]
    Unauthenticated,

    #[error("failed to hash password")]
    Hashing,

    #[error("configuration error: {0}")]
    Config(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::DuplicateUsername => StatusCode::BAD_REQUEST,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::InvalidCredentials
            | AppError::InvalidSignature
            | AppError::Expired
            | AppError::Malformed
            | AppError::MissingCredential
            | AppError::MalformedCredential
            | AppError::Revoked
            | AppError::Unauthenticated => StatusCode::UNAUTHORIZED,
            AppError::Hashing | AppError::Config(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();

        HttpResponse::build(status).json(serde_json::json!({
            "error": self.to_string(),
            "status": status.as_u16(),
        }))
    }
}
