use axum::extract::{FromRef, FromRequestParts, OptionalFromRequestParts};
use axum::http::{header, request::Parts};

use crate::auth::jwt::{Claims, JwtManager};
use crate::error::AppError;

/// Extracteur d'authentification pour les routes protégées.
/// Valide `Authorization: Bearer <JWT>`, vérifie l'access token via `JwtManager`,
/// et expose les claims utiles.
///
/// Utilisé en `Option<AuthClaims>` pour les routes où l'authentification est facultative:
/// un token absent ou invalide donne alors `None`.
#[derive(Debug, Clone)]
pub struct AuthClaims {
    pub user_id: uuid::Uuid,
    pub email: String,
}

impl From<Claims> for AuthClaims {
    fn from(c: Claims) -> Self {
        Self {
            user_id: c.user_id,
            email: c.email,
        }
    }
}

impl<S> FromRequestParts<S> for AuthClaims
where
    S: Send + Sync,
    JwtManager: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let token =
            bearer_token(parts).ok_or_else(|| AppError::missing_token("Access token required"))?;

        let claims = JwtManager::from_ref(state)
            .verify_access_token(token)
            .map_err(|e| {
                tracing::debug!("Bearer token rejected: {e}");
                AppError::InvalidToken
            })?;

        Ok(AuthClaims::from(claims))
    }
}

impl<S> OptionalFromRequestParts<S> for AuthClaims
where
    S: Send + Sync,
    JwtManager: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> Result<Option<Self>, Self::Rejection> {
        match <Self as FromRequestParts<S>>::from_request_parts(parts, state).await {
            Ok(claims) => Ok(Some(claims)),
            Err(_) => Ok(None),
        }
    }
}

/// Récupère le token du header Authorization (doit être de type Bearer)
fn bearer_token(parts: &Parts) -> Option<&str> {
    const BEARER: &str = "Bearer ";

    let auth_str = parts.headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let token = auth_str.strip_prefix(BEARER)?.trim();
    (!token.is_empty()).then_some(token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;
    use chrono::Duration;
    use uuid::Uuid;

    fn jwt() -> JwtManager {
        JwtManager::new("access", "refresh", Duration::minutes(15), Duration::days(7))
    }

    fn parts_with_auth(value: Option<&str>) -> Parts {
        let mut builder = Request::builder().uri("/");
        if let Some(v) = value {
            builder = builder.header(header::AUTHORIZATION, v);
        }
        builder.body(()).unwrap().into_parts().0
    }

    #[tokio::test]
    async fn valid_bearer_token_yields_claims() {
        let jwt = jwt();
        let user_id = Uuid::new_v4();
        let pair = jwt.generate_pair(user_id, "a@b.co").unwrap();
        let mut parts = parts_with_auth(Some(&format!("Bearer {}", pair.access_token)));

        let claims = <AuthClaims as FromRequestParts<JwtManager>>::from_request_parts(&mut parts, &jwt)
            .await
            .expect("claims");

        assert_eq!(claims.user_id, user_id);
        assert_eq!(claims.email, "a@b.co");
    }

    #[tokio::test]
    async fn missing_header_is_rejected_as_missing_token() {
        let mut parts = parts_with_auth(None);

        let result =
            <AuthClaims as FromRequestParts<JwtManager>>::from_request_parts(&mut parts, &jwt()).await;

        assert!(matches!(result, Err(AppError::MissingToken(_))));
    }

    #[tokio::test]
    async fn non_bearer_scheme_is_rejected_as_missing_token() {
        let mut parts = parts_with_auth(Some("Basic dXNlcjpwYXNz"));

        let result =
            <AuthClaims as FromRequestParts<JwtManager>>::from_request_parts(&mut parts, &jwt()).await;

        assert!(matches!(result, Err(AppError::MissingToken(_))));
    }

    #[tokio::test]
    async fn refresh_token_is_not_accepted_as_bearer() {
        let jwt = jwt();
        let pair = jwt.generate_pair(Uuid::new_v4(), "a@b.co").unwrap();
        let mut parts = parts_with_auth(Some(&format!("Bearer {}", pair.refresh_token)));

        let result =
            <AuthClaims as FromRequestParts<JwtManager>>::from_request_parts(&mut parts, &jwt).await;

        assert!(matches!(result, Err(AppError::InvalidToken)));
    }

    #[tokio::test]
    async fn optional_extraction_ignores_invalid_token() {
        let mut parts = parts_with_auth(Some("Bearer garbage"));

        let result =
            <AuthClaims as OptionalFromRequestParts<JwtManager>>::from_request_parts(&mut parts, &jwt())
                .await
                .expect("never rejects");

        assert!(result.is_none());
    }
}
