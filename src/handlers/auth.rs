// src/handlers/auth.rs

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use ecowear_api::{
    AuthResponse, LoginRequest, MeResponse, MessageResponse, RefreshTokenRequest,
    RefreshTokenResponse, RegisterRequest,
};
use std::sync::Arc;

use crate::auth::extractors::AuthClaims;
use crate::auth::services::AuthService;
use crate::error::AppError;
use crate::response::AppResponse;

/// POST /api/auth/register
/// Inscription d'un nouvel utilisateur
pub async fn register(
    State(auth_service): State<Arc<AuthService>>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<AppResponse<AuthResponse>, AppError> {
    let Json(payload) = payload?;
    let response = auth_service.register(payload)?;
    Ok(AppResponse::created(response))
}

/// POST /api/auth/login
/// Connexion d'un utilisateur
pub async fn login(
    State(auth_service): State<Arc<AuthService>>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<AppResponse<AuthResponse>, AppError> {
    let Json(payload) = payload?;
    let response = auth_service.login(&payload)?;
    Ok(AppResponse::ok(response))
}

/// POST /api/auth/refresh
/// Rafraîchissement des tokens (nouvelle paire à chaque appel)
pub async fn refresh_token(
    State(auth_service): State<Arc<AuthService>>,
    payload: Result<Json<RefreshTokenRequest>, JsonRejection>,
) -> Result<AppResponse<RefreshTokenResponse>, AppError> {
    let Json(payload) = payload?;
    let tokens = auth_service.refresh_token(&payload.refresh_token)?;
    Ok(AppResponse::ok(RefreshTokenResponse { tokens }))
}

/// POST /api/auth/logout
/// Sans état côté serveur: le client jette ses tokens
pub async fn logout(claims: Option<AuthClaims>) -> AppResponse<MessageResponse> {
    if let Some(claims) = claims {
        tracing::info!(user_id = %claims.user_id, email = %claims.email, "User logged out");
    }
    AppResponse::ok(MessageResponse::new("Logged out successfully"))
}

/// GET /api/auth/me
/// Récupère le profil de l'utilisateur courant
pub async fn me(
    claims: AuthClaims,
    State(auth_service): State<Arc<AuthService>>,
) -> Result<AppResponse<MeResponse>, AppError> {
    let user = auth_service.get_current_user(claims.user_id)?;
    Ok(AppResponse::ok(MeResponse { user }))
}
