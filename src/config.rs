use anyhow::Result;
use chrono::Duration;
use std::env;
use std::str::FromStr;

/// Secret minimal exigé en production
const MIN_PRODUCTION_SECRET_LEN: usize = 32;
/// Les images arrivent en base64 dans le body JSON
const DEFAULT_MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    /// Détecte automatiquement l'environnement
    pub fn detect() -> Self {
        // Méthode 1: Vérifier si on est dans AWS Lambda
        if env::var("AWS_LAMBDA_FUNCTION_NAME").is_ok() {
            return Self::Production;
        }

        // Méthode 2: Vérifier la variable APP_ENV
        match env::var("APP_ENV").as_deref() {
            Ok("production" | "prod") => Self::Production,
            _ => Self::Development,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub environment: Environment,
    pub jwt_secret: String,
    pub jwt_refresh_secret: String,
    pub access_token_ttl: Duration,
    pub refresh_token_ttl: Duration,
    pub welcome_bonus_points: u64,
    pub max_body_bytes: usize,
    pub frontend_url: String,
    pub server_host: String,
    pub server_port: u16,
}

impl Config {
    /// Charge la configuration depuis les variables d'environnement
    /// avec détection automatique de l'environnement
    pub fn from_env() -> Result<Self> {
        let environment = Environment::detect();

        tracing::info!(
            "🌍 Environment detected: {}",
            environment.as_str().to_uppercase()
        );

        Self::load_env_file(&environment);

        let jwt_secret = Self::get_secret(
            &environment,
            "JWT_SECRET",
            "dev_access_secret_change_in_production",
        )?;
        let jwt_refresh_secret = Self::get_secret(
            &environment,
            "JWT_REFRESH_SECRET",
            "dev_refresh_secret_change_in_production",
        )?;
        if jwt_secret == jwt_refresh_secret {
            anyhow::bail!("JWT_SECRET and JWT_REFRESH_SECRET must differ");
        }

        let access_minutes = Self::parse_or("JWT_ACCESS_EXPIRATION_MINUTES", 15_i64);
        let refresh_days = Self::parse_or("JWT_REFRESH_EXPIRATION_DAYS", 7_i64);
        let access_token_ttl = Self::token_ttl(
            "JWT_ACCESS_EXPIRATION_MINUTES",
            access_minutes,
            Duration::try_minutes,
        )?;
        let refresh_token_ttl =
            Self::token_ttl("JWT_REFRESH_EXPIRATION_DAYS", refresh_days, Duration::try_days)?;
        let welcome_bonus_points = Self::parse_or("WELCOME_BONUS_POINTS", 0_u64);
        let max_body_bytes = Self::parse_or("MAX_BODY_BYTES", DEFAULT_MAX_BODY_BYTES);
        let frontend_url = Self::get_frontend_url(&environment);
        let server_host = env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let server_port = Self::parse_or("SERVER_PORT", 3000_u16);

        tracing::info!("✅ Configuration loaded successfully");
        tracing::debug!("   Frontend: {}", frontend_url);
        tracing::debug!("   Server: {}:{}", server_host, server_port);
        tracing::debug!(
            "   Tokens: access {}min, refresh {}d",
            access_minutes,
            refresh_days
        );

        Ok(Self {
            environment,
            jwt_secret,
            jwt_refresh_secret,
            access_token_ttl,
            refresh_token_ttl,
            welcome_bonus_points,
            max_body_bytes,
            frontend_url,
            server_host,
            server_port,
        })
    }

    /// Charge le fichier .env en développement
    fn load_env_file(environment: &Environment) {
        // En production (Lambda), les variables sont déjà injectées
        if environment.is_production() {
            tracing::info!("📦 Production mode: using injected environment variables");
            return;
        }

        tracing::info!("📦 Development mode: loading .env file");
        match dotenvy::dotenv() {
            Ok(path) => tracing::debug!("   Loaded: {}", path.display()),
            Err(e) if e.not_found() => {
                tracing::warn!("   .env file not found, using environment variables");
            }
            Err(e) => tracing::warn!("   Failed to load .env: {e}"),
        }
    }

    /// Récupère un secret JWT avec validation
    fn get_secret(environment: &Environment, key: &str, dev_default: &str) -> Result<String> {
        let secret = match env::var(key) {
            Ok(s) => s,
            Err(_) if environment.is_production() => {
                tracing::error!("❌ {key} not set in production!");
                anyhow::bail!("{key} is required in production");
            }
            Err(_) => {
                tracing::warn!("⚠️  {key} not set, using default (DEVELOPMENT ONLY!)");
                dev_default.to_string()
            }
        };

        // Valider la longueur du secret en production
        if environment.is_production() && secret.len() < MIN_PRODUCTION_SECRET_LEN {
            anyhow::bail!(
                "{key} must be at least {MIN_PRODUCTION_SECRET_LEN} characters in production (current: {})",
                secret.len()
            );
        }

        Ok(secret)
    }

    /// Récupère FRONTEND_URL avec fallback
    fn get_frontend_url(environment: &Environment) -> String {
        env::var("FRONTEND_URL").unwrap_or_else(|_| {
            if environment.is_production() {
                "https://ecowear.app".to_string()
            } else {
                "http://localhost:8080".to_string()
            }
        })
    }

    /// Durée de vie d'un token: strictement positive et représentable
    fn token_ttl(
        key: &str,
        value: i64,
        to_duration: fn(i64) -> Option<Duration>,
    ) -> Result<Duration> {
        if value <= 0 {
            anyhow::bail!("{key} must be positive (current: {value})");
        }
        to_duration(value)
            .ok_or_else(|| anyhow::anyhow!("{key} is out of range (current: {value})"))
    }

    fn parse_or<T: FromStr>(key: &str, default: T) -> T {
        match env::var(key) {
            Ok(raw) => raw.parse().unwrap_or_else(|_| {
                tracing::warn!("⚠️  {key}={raw} is invalid, using default");
                default
            }),
            Err(_) => default,
        }
    }

    /// Retourne true si on est en mode production
    pub fn is_production(&self) -> bool {
        self.environment.is_production()
    }
}
