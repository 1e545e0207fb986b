/// Profile handlers for the authenticated user
use actix_web::{web, HttpResponse};
use serde::Serialize;

use crate::error::AppError;
use crate::middleware::AuthSession;
use crate::models::{UpdateProfileRequest, User};
use crate::security::password;
use crate::AppState;

/// Outward profile shape; the password hash never leaves the directory.
#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub id: u64,
    pub username: String,
    pub email: String,
}

impl From<User> for ProfileResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
        }
    }
}

/// Profile endpoint handler
pub async fn get_profile(
    state: web::Data<AppState>,
    session: AuthSession,
) -> Result<HttpResponse, AppError> {
    let user = state.directory.get_by_username(&session.claims.username)?;

    Ok(HttpResponse::Ok().json(ProfileResponse::from(user)))
}

/// Profile update handler. Fields that are absent or empty are left
/// untouched; an update supplying nothing succeeds and changes nothing.
pub async fn update_profile(
    state: web::Data<AppState>,
    session: AuthSession,
    payload: web::Json<UpdateProfileRequest>,
) -> Result<HttpResponse, AppError> {
    // Re-hash outside the directory lock, same as registration.
    let password_hash = match payload.password.as_deref() {
        Some(password) if !password.is_empty() => Some(password::hash_password(password)?),
        _ => None,
    };

    let user = state.directory.update(
        &session.claims.username,
        payload.email.as_deref(),
        password_hash.as_deref(),
    )?;

    tracing::info!(username = %user.username, "profile updated");

    Ok(HttpResponse::Ok().json(ProfileResponse::from(user)))
}

/// Profile delete handler
pub async fn delete_profile(
    state: web::Data<AppState>,
    session: AuthSession,
) -> Result<HttpResponse, AppError> {
    state
        .directory
        .delete_by_username(&session.claims.username)?;

    tracing::info!(username = %session.claims.username, "user deleted");

    Ok(HttpResponse::NoContent().finish())
}
