// src/error.rs

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use ecowear_api::ErrorResponse;

use crate::auth::jwt::JwtError;
use crate::auth::password::PasswordError;
use crate::db::error::{LedgerError, RepositoryError};

#[derive(Debug, Clone, thiserror::Error)]
pub enum AppError {
    // === Erreurs Repository ===
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Store error: {0}")]
    StoreError(String),

    // === Erreurs d'Authentification ===
    #[error("User not found")]
    UserNotFound,
    #[error("Invalid password")]
    InvalidPassword,
    #[error("Email already exists")]
    UserAlreadyExists,
    #[error("Invalid email format")]
    InvalidEmail,
    #[error("Password too weak: {0}")]
    WeakPassword(String),
    #[error("Missing token: {0}")]
    MissingToken(String),
    #[error("Invalid or expired token")]
    InvalidToken,
    #[error("Invalid refresh token")]
    InvalidRefreshToken,

    // === Erreurs de Hashing/Cryptographie ===
    #[error("Password hashing failed: {0}")]
    PasswordHashingFailed(String),
    #[error("Token generation failed: {0}")]
    TokenGenerationFailed(String),

    // === Erreurs de Validation ===
    #[error("Validation error: {0}")]
    ValidationError(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Request body too large")]
    PayloadTooLarge,
    #[error("Unsupported media type")]
    UnsupportedMediaType,

    // === Erreurs métier ===
    #[error("Insufficient points: required {required}, current {current}")]
    InsufficientPoints { required: u64, current: u64 },
    #[error("Offer has expired: {0}")]
    OfferExpired(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_code, message, internal_detail) = self.get_error_info();

        if let Some(ref detail) = internal_detail {
            tracing::error!(error_code, %status, detail, "Internal server error");
        }

        let mut body = ErrorResponse::new(message, error_code);
        if let Some(suggestion) = self.suggestion() {
            body = body.with_suggestion(suggestion);
        }
        if let AppError::InsufficientPoints { required, current } = self {
            body = body.with_balance(required, current);
        }

        (status, Json(body)).into_response()
    }
}

impl AppError {
    /// Récupère les informations d'erreur formatées pour la réponse HTTP
    fn get_error_info(&self) -> (StatusCode, &'static str, String, Option<String>) {
        match self {
            // 404 Not Found
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg.clone(), None),
            AppError::UserNotFound => (
                StatusCode::NOT_FOUND,
                "user_not_found",
                "No account found with this email address. Would you like to create an account?"
                    .to_string(),
                None,
            ),

            // 409 Conflict
            AppError::UserAlreadyExists => (
                StatusCode::CONFLICT,
                "user_exists",
                "User with this email already exists".to_string(),
                None,
            ),

            // 401 Unauthorized
            AppError::InvalidPassword => (
                StatusCode::UNAUTHORIZED,
                "wrong_password",
                "Incorrect password. Please check your password and try again.".to_string(),
                None,
            ),
            AppError::MissingToken(msg) => {
                (StatusCode::UNAUTHORIZED, "unauthorized", msg.clone(), None)
            }

            // 403 Forbidden
            AppError::InvalidToken => (
                StatusCode::FORBIDDEN,
                "invalid_token",
                "Invalid or expired token".to_string(),
                None,
            ),
            AppError::InvalidRefreshToken => (
                StatusCode::FORBIDDEN,
                "invalid_token",
                "Invalid refresh token".to_string(),
                None,
            ),

            // 400 Bad Request
            AppError::InvalidEmail => (
                StatusCode::BAD_REQUEST,
                "invalid_email",
                "Invalid email format".to_string(),
                None,
            ),
            AppError::WeakPassword(msg) => {
                (StatusCode::BAD_REQUEST, "weak_password", msg.clone(), None)
            }
            AppError::ValidationError(msg) => {
                (StatusCode::BAD_REQUEST, "validation", msg.clone(), None)
            }
            AppError::InvalidInput(msg) => {
                (StatusCode::BAD_REQUEST, "invalid_input", msg.clone(), None)
            }

            // 413 / 415
            AppError::PayloadTooLarge => (
                StatusCode::PAYLOAD_TOO_LARGE,
                "payload_too_large",
                "Request body too large".to_string(),
                None,
            ),
            AppError::UnsupportedMediaType => (
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
                "unsupported_media_type",
                "Content-Type must be application/json".to_string(),
                None,
            ),
            AppError::InsufficientPoints { .. } => (
                StatusCode::BAD_REQUEST,
                "insufficient_points",
                "Insufficient points".to_string(),
                None,
            ),
            AppError::OfferExpired(_) => (
                StatusCode::BAD_REQUEST,
                "offer_expired",
                "Offer has expired".to_string(),
                None,
            ),

            // 500 Internal Server Error
            AppError::PasswordHashingFailed(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "hashing_error",
                "An error occurred while processing your request".to_string(),
                Some(msg.clone()),
            ),
            AppError::TokenGenerationFailed(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "token_error",
                "An error occurred while generating token".to_string(),
                Some(msg.clone()),
            ),
            AppError::StoreError(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "store_error",
                "An error occurred while accessing stored data".to_string(),
                Some(msg.clone()),
            ),
        }
    }

    fn suggestion(&self) -> Option<&'static str> {
        match self {
            AppError::UserNotFound => Some("signup"),
            AppError::InvalidPassword => Some("reset_password"),
            _ => None,
        }
    }

    // === Constructeurs helpers ===
    pub fn not_found(msg: impl Into<String>) -> Self {
        AppError::NotFound(msg.into())
    }

    pub fn store(msg: impl Into<String>) -> Self {
        AppError::StoreError(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::ValidationError(msg.into())
    }

    pub fn invalid_input(msg: impl Into<String>) -> Self {
        AppError::InvalidInput(msg.into())
    }

    pub fn missing_token(msg: impl Into<String>) -> Self {
        AppError::MissingToken(msg.into())
    }

    /// Retourne le code de statut HTTP
    #[cfg(test)]
    pub fn status_code(&self) -> StatusCode {
        self.get_error_info().0
    }
}

// === Conversions automatiques depuis d'autres types d'erreurs ===

impl From<RepositoryError> for AppError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::UniqueViolation(_) => AppError::UserAlreadyExists,
            RepositoryError::LockPoisoned(msg) => AppError::store(msg),
        }
    }
}

impl From<LedgerError> for AppError {
    fn from(err: LedgerError) -> Self {
        match err {
            LedgerError::InsufficientPoints {
                available,
                required,
            } => AppError::InsufficientPoints {
                required,
                current: available,
            },
            LedgerError::Repository(e) => e.into(),
        }
    }
}

impl From<JwtError> for AppError {
    fn from(err: JwtError) -> Self {
        match err {
            JwtError::GenerationFailed(e) => AppError::TokenGenerationFailed(e.to_string()),
            JwtError::VerificationFailed(_) | JwtError::WrongTokenType { .. } => {
                AppError::InvalidToken
            }
        }
    }
}

impl From<PasswordError> for AppError {
    fn from(err: PasswordError) -> Self {
        AppError::PasswordHashingFailed(err.to_string())
    }
}

// Depuis axum::extract::rejection::JsonRejection
impl From<JsonRejection> for AppError {
    fn from(err: JsonRejection) -> Self {
        match err {
            JsonRejection::MissingJsonContentType(_) => AppError::UnsupportedMediaType,
            JsonRejection::BytesRejection(e) if e.status() == StatusCode::PAYLOAD_TOO_LARGE => {
                AppError::PayloadTooLarge
            }
            other => AppError::invalid_input(format!("Invalid JSON: {other}")),
        }
    }
}
