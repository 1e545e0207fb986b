/// Authentication handlers
use actix_web::{web, HttpResponse};
use serde::Serialize;

use crate::error::AppError;
use crate::middleware::AuthSession;
use crate::models::{LoginRequest, RegisterRequest};
use crate::security::password;
use crate::AppState;

/// Register/login response with the session token
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub id: u64,
    pub username: String,
    pub email: String,
    pub token: String,
}

/// Logout response
#[derive(Debug, Serialize)]
pub struct LogoutResponse {
    pub message: String,
}

/// Register endpoint handler
pub async fn register(
    state: web::Data<AppState>,
    payload: web::Json<RegisterRequest>,
) -> Result<HttpResponse, AppError> {
    if payload.username.is_empty() || payload.email.is_empty() || payload.password.is_empty() {
        return Err(AppError::InvalidCredentials);
    }

    // Hash before touching the directory: the write lock is never held
    // across a hash, and a hashing failure leaves the directory untouched.
    let password_hash = password::hash_password(&payload.password)?;
    let user = state
        .directory
        .create(&payload.username, &payload.email, &password_hash)?;

    let token = state.tokens.issue(&user.username)?;

    tracing::info!(username = %user.username, id = user.id, "user registered");

    Ok(HttpResponse::Created().json(AuthResponse {
        id: user.id,
        username: user.username,
        email: user.email,
        token,
    }))
}

/// Login endpoint handler
pub async fn login(
    state: web::Data<AppState>,
    payload: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    if payload.username.is_empty() || payload.password.is_empty() {
        return Err(AppError::InvalidCredentials);
    }

    // An unknown username and a wrong password are indistinguishable to
    // the caller.
    let user = state
        .directory
        .get_by_username(&payload.username)
        .map_err(|_| AppError::InvalidCredentials)?;

    if !password::verify_password(&payload.password, &user.password_hash) {
        return Err(AppError::InvalidCredentials);
    }

    let token = state.tokens.issue(&user.username)?;

    tracing::info!(username = %user.username, "user logged in");

    Ok(HttpResponse::Ok().json(AuthResponse {
        id: user.id,
        username: user.username,
        email: user.email,
        token,
    }))
}

/// Logout endpoint handler: revokes the exact token presented on this
/// request for the remainder of the process lifetime.
pub async fn logout(
    state: web::Data<AppState>,
    session: AuthSession,
) -> Result<HttpResponse, AppError> {
    state.revocations.revoke(&session.token);

    tracing::info!(username = %session.claims.username, "session revoked");

    Ok(HttpResponse::Ok().json(LogoutResponse {
        message: "logged out successfully".to_string(),
    }))
}
