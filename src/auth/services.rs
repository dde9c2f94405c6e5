// src/auth/services.rs

use std::sync::Arc;

use ecowear_api::{AuthResponse, AuthTokens, LoginRequest, RegisterRequest, UserResponse};
use uuid::Uuid;

use super::jwt::JwtManager;
use super::password::PasswordManager;
use crate::db::models::user::{NewUser, User};
use crate::db::repositories::UserRepository;
use crate::error::AppError;

const MIN_PASSWORD_LENGTH: usize = 6;

pub struct AuthService {
    jwt_manager: JwtManager,
    users: Arc<dyn UserRepository>,
}

impl AuthService {
    pub fn new(jwt_manager: JwtManager, users: Arc<dyn UserRepository>) -> Self {
        Self { jwt_manager, users }
    }

    /// Inscription d'un nouvel utilisateur
    pub fn register(&self, request: RegisterRequest) -> Result<AuthResponse, AppError> {
        let email = Self::normalize_email(&request.email);
        let name = request.name.trim();

        if email.is_empty() || request.password.is_empty() || name.is_empty() {
            return Err(AppError::validation(
                "Email, password, and name are required",
            ));
        }

        if !Self::is_valid_email(&email) {
            return Err(AppError::InvalidEmail);
        }

        if request.password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(AppError::WeakPassword(format!(
                "Password must be at least {MIN_PASSWORD_LENGTH} characters"
            )));
        }

        // Vérifier que l'email n'existe pas
        if self.users.find_by_email(&email)?.is_some() {
            return Err(AppError::UserAlreadyExists);
        }

        let password_hash = PasswordManager::hash(&request.password)?;

        // The repository re-checks uniqueness atomically
        let user = self.users.create(NewUser {
            email,
            name: name.to_string(),
            password_hash,
        })?;

        tracing::info!(user_id = %user.id, "User registered");
        self.issue(user)
    }

    /// Connexion d'un utilisateur
    pub fn login(&self, request: &LoginRequest) -> Result<AuthResponse, AppError> {
        if request.email.trim().is_empty() || request.password.is_empty() {
            return Err(AppError::validation("Email and password are required"));
        }

        let email = Self::normalize_email(&request.email);
        let user = self
            .users
            .find_by_email(&email)?
            .ok_or(AppError::UserNotFound)?;

        if !PasswordManager::verify(&request.password, &user.password_hash)? {
            tracing::warn!(user_id = %user.id, "Login rejected: wrong password");
            return Err(AppError::InvalidPassword);
        }

        tracing::info!(user_id = %user.id, "User logged in");
        self.issue(user)
    }

    /// Rafraîchit les tokens: vérifie le refresh token et émet une nouvelle paire
    pub fn refresh_token(&self, refresh_token: &str) -> Result<AuthTokens, AppError> {
        if refresh_token.trim().is_empty() {
            return Err(AppError::missing_token("Refresh token required"));
        }

        let claims = self
            .jwt_manager
            .verify_refresh_token(refresh_token)
            .map_err(|e| {
                tracing::warn!("Refresh rejected: {e}");
                AppError::InvalidRefreshToken
            })?;

        let user = self
            .users
            .find_by_id(claims.user_id)?
            .ok_or_else(|| AppError::not_found("User not found"))?;

        self.tokens_for(&user)
    }

    /// Récupère l'utilisateur courant
    pub fn get_current_user(&self, user_id: Uuid) -> Result<UserResponse, AppError> {
        self.users
            .find_by_id(user_id)?
            .map(UserResponse::from)
            .ok_or_else(|| AppError::not_found("User not found"))
    }

    fn issue(&self, user: User) -> Result<AuthResponse, AppError> {
        let tokens = self.tokens_for(&user)?;
        Ok(AuthResponse {
            user: user.into(),
            tokens,
        })
    }

    fn tokens_for(&self, user: &User) -> Result<AuthTokens, AppError> {
        let pair = self.jwt_manager.generate_pair(user.id, &user.email)?;
        Ok(AuthTokens {
            access_token: pair.access_token,
            refresh_token: pair.refresh_token,
        })
    }

    // === Helpers de validation ===

    fn normalize_email(email: &str) -> String {
        email.trim().to_lowercase()
    }

    fn is_valid_email(email: &str) -> bool {
        match email.split_once('@') {
            Some((local, domain)) => {
                !local.is_empty() && domain.contains('.') && !domain.starts_with('.')
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::jwt::TokenKind;
    use crate::db::repositories::InMemoryUserRepository;
    use chrono::Duration;

    fn make_jwt_manager() -> JwtManager {
        JwtManager::new(
            "access_secret_for_tests",
            "refresh_secret_for_tests",
            Duration::minutes(15),
            Duration::days(7),
        )
    }

    fn make_service() -> AuthService {
        AuthService::new(make_jwt_manager(), Arc::new(InMemoryUserRepository::new()))
    }

    fn register_request(email: &str) -> RegisterRequest {
        RegisterRequest {
            email: email.to_string(),
            password: "secret1".to_string(),
            name: "Ada".to_string(),
        }
    }

    #[test]
    fn register_succeeds_with_valid_data() {
        let service = make_service();
        let response = service
            .register(register_request("Ada@Example.com"))
            .expect("Registration should succeed");

        assert_eq!(response.user.email, "ada@example.com");
        assert_eq!(response.user.name, "Ada");
        assert!(!response.tokens.access_token.is_empty());
        assert_ne!(response.tokens.access_token, response.tokens.refresh_token);
    }

    #[test]
    fn register_fails_when_email_already_exists() {
        let service = make_service();
        service
            .register(register_request("ada@example.com"))
            .expect("First registration should succeed");

        let result = service.register(register_request("ADA@example.com"));
        assert!(matches!(result, Err(AppError::UserAlreadyExists)));
    }

    #[test]
    fn register_fails_when_password_is_too_short() {
        let service = make_service();
        let mut request = register_request("ada@example.com");
        request.password = "12345".to_string();

        assert!(matches!(
            service.register(request),
            Err(AppError::WeakPassword(_))
        ));
    }

    #[test]
    fn register_fails_when_fields_are_missing() {
        let service = make_service();
        let mut request = register_request("ada@example.com");
        request.name = "   ".to_string();

        assert!(matches!(
            service.register(request),
            Err(AppError::ValidationError(_))
        ));
    }

    #[test]
    fn register_fails_when_email_is_invalid() {
        let service = make_service();

        assert!(matches!(
            service.register(register_request("not-an-email")),
            Err(AppError::InvalidEmail)
        ));
    }

    #[test]
    fn login_succeeds_with_valid_credentials() {
        let service = make_service();
        let registered = service.register(register_request("ada@example.com")).unwrap();

        let response = service
            .login(&LoginRequest {
                email: " ADA@example.com ".to_string(),
                password: "secret1".to_string(),
            })
            .expect("Login should succeed");

        assert_eq!(response.user.id, registered.user.id);
    }

    #[test]
    fn login_fails_with_wrong_password() {
        let service = make_service();
        service.register(register_request("ada@example.com")).unwrap();

        let result = service.login(&LoginRequest {
            email: "ada@example.com".to_string(),
            password: "wrong-password".to_string(),
        });
        assert!(matches!(result, Err(AppError::InvalidPassword)));
    }

    #[test]
    fn login_fails_when_user_not_found() {
        let service = make_service();

        let result = service.login(&LoginRequest {
            email: "nobody@example.com".to_string(),
            password: "secret1".to_string(),
        });
        assert!(matches!(result, Err(AppError::UserNotFound)));
    }

    #[test]
    fn refresh_issues_new_valid_pair() {
        let service = make_service();
        let registered = service.register(register_request("ada@example.com")).unwrap();

        let tokens = service
            .refresh_token(&registered.tokens.refresh_token)
            .expect("Refresh should succeed");

        let claims = make_jwt_manager()
            .verify_access_token(&tokens.access_token)
            .expect("New access token should verify");
        assert_eq!(claims.user_id, registered.user.id);
    }

    #[test]
    fn refresh_rejects_access_token() {
        let service = make_service();
        let registered = service.register(register_request("ada@example.com")).unwrap();

        let result = service.refresh_token(&registered.tokens.access_token);
        assert!(matches!(result, Err(AppError::InvalidRefreshToken)));
    }

    #[test]
    fn refresh_rejects_expired_token() {
        let service = make_service();
        let registered = service.register(register_request("ada@example.com")).unwrap();
        let expired = make_jwt_manager()
            .generate_token(
                TokenKind::Refresh,
                registered.user.id,
                &registered.user.email,
                Duration::minutes(-10),
            )
            .unwrap();

        let result = service.refresh_token(&expired);
        assert!(matches!(result, Err(AppError::InvalidRefreshToken)));
    }

    #[test]
    fn refresh_requires_a_token() {
        let service = make_service();

        assert!(matches!(
            service.refresh_token(""),
            Err(AppError::MissingToken(_))
        ));
    }

    #[test]
    fn get_current_user_fails_for_unknown_id() {
        let service = make_service();

        assert!(matches!(
            service.get_current_user(Uuid::new_v4()),
            Err(AppError::NotFound(_))
        ));
    }
}
