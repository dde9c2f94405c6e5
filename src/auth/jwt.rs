use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, thiserror::Error)]
pub enum JwtError {
    #[error("Token generation failed: {0}")]
    GenerationFailed(jsonwebtoken::errors::Error),
    #[error("Token verification failed: {0}")]
    VerificationFailed(jsonwebtoken::errors::Error),
    #[error("Wrong token type: expected {expected:?}, got {got:?}")]
    WrongTokenType { expected: TokenKind, got: TokenKind },
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    Access,
    Refresh,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Claims {
    pub user_id: Uuid,
    pub email: String,
    pub typ: TokenKind,
    pub exp: i64,
    pub iat: i64,
}

#[derive(Clone)]
struct KeyPair {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl KeyPair {
    fn from_secret(secret: &str) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_ref()),
            decoding: DecodingKey::from_secret(secret.as_ref()),
        }
    }
}

/// Paire de tokens générée pour un utilisateur
#[derive(Debug, Clone)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

/// Signe et vérifie les JWT. Access et refresh tokens utilisent des secrets distincts.
#[derive(Clone)]
pub struct JwtManager {
    access: KeyPair,
    refresh: KeyPair,
    access_ttl: Duration,
    refresh_ttl: Duration,
}

impl JwtManager {
    pub fn new(
        access_secret: &str,
        refresh_secret: &str,
        access_ttl: Duration,
        refresh_ttl: Duration,
    ) -> Self {
        Self {
            access: KeyPair::from_secret(access_secret),
            refresh: KeyPair::from_secret(refresh_secret),
            access_ttl,
            refresh_ttl,
        }
    }

    /// Génère une paire access (courte durée) + refresh (longue durée)
    pub fn generate_pair(&self, user_id: Uuid, email: &str) -> Result<TokenPair, JwtError> {
        Ok(TokenPair {
            access_token: self.generate_token(TokenKind::Access, user_id, email, self.access_ttl)?,
            refresh_token: self.generate_token(
                TokenKind::Refresh,
                user_id,
                email,
                self.refresh_ttl,
            )?,
        })
    }

    pub fn generate_token(
        &self,
        kind: TokenKind,
        user_id: Uuid,
        email: &str,
        expires_in: Duration,
    ) -> Result<String, JwtError> {
        let now = Utc::now();
        let claims = Claims {
            user_id,
            email: email.to_string(),
            typ: kind,
            exp: (now + expires_in).timestamp(),
            iat: now.timestamp(),
        };

        encode(&Header::default(), &claims, &self.keys(kind).encoding)
            .map_err(JwtError::GenerationFailed)
    }

    pub fn verify_access_token(&self, token: &str) -> Result<Claims, JwtError> {
        self.verify_token(TokenKind::Access, token)
    }

    pub fn verify_refresh_token(&self, token: &str) -> Result<Claims, JwtError> {
        self.verify_token(TokenKind::Refresh, token)
    }

    fn verify_token(&self, kind: TokenKind, token: &str) -> Result<Claims, JwtError> {
        let claims = decode::<Claims>(token, &self.keys(kind).decoding, &Validation::default())
            .map(|data| data.claims)
            .map_err(JwtError::VerificationFailed)?;

        if claims.typ != kind {
            return Err(JwtError::WrongTokenType {
                expected: kind,
                got: claims.typ,
            });
        }
        Ok(claims)
    }

    fn keys(&self, kind: TokenKind) -> &KeyPair {
        match kind {
            TokenKind::Access => &self.access,
            TokenKind::Refresh => &self.refresh,
        }
    }
}
