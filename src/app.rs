// src/app.rs

use axum::{
    Router,
    extract::{DefaultBodyLimit, FromRef},
    http::{HeaderValue, Method, header},
    routing::{get, post},
};
use chrono::Utc;
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::auth::jwt::JwtManager;
use crate::auth::services::AuthService;
use crate::config::Config;
use crate::db::repositories::{
    InMemoryStatsRepository, InMemoryUserRepository, StatsRepository, UserRepository,
};
use crate::handlers::analysis::analyze_image;
use crate::handlers::auth::{login, logout, me, refresh_token, register};
use crate::handlers::health::{health, ping};
use crate::handlers::offers::{list_offers, redeem_offer};
use crate::handlers::rewards::eco_rewards;
use crate::offers::{OffersCatalog, OffersService};
use crate::rewards::{ClothingClassifier, HeuristicClassifier, RewardsService};

/// État partagé de l'application, injecté dans les handlers via `State`
#[derive(Clone)]
pub struct AppState {
    jwt_manager: JwtManager,
    auth_service: Arc<AuthService>,
    rewards_service: Arc<RewardsService>,
    offers_service: Arc<OffersService>,
}

impl AppState {
    /// Construit l'état avec les repositories en mémoire et l'heuristique locale
    pub fn new(config: &Config) -> Self {
        let jwt_manager = JwtManager::new(
            &config.jwt_secret,
            &config.jwt_refresh_secret,
            config.access_token_ttl,
            config.refresh_token_ttl,
        );

        Self::with_components(
            jwt_manager,
            Arc::new(InMemoryUserRepository::new()),
            Arc::new(InMemoryStatsRepository::new(config.welcome_bonus_points)),
            Arc::new(HeuristicClassifier),
            OffersCatalog::new(Utc::now()),
        )
    }

    pub fn with_components(
        jwt_manager: JwtManager,
        users: Arc<dyn UserRepository>,
        stats: Arc<dyn StatsRepository>,
        classifier: Arc<dyn ClothingClassifier>,
        catalog: OffersCatalog,
    ) -> Self {
        Self {
            auth_service: Arc::new(AuthService::new(jwt_manager.clone(), users)),
            rewards_service: Arc::new(RewardsService::new(stats.clone(), classifier)),
            offers_service: Arc::new(OffersService::new(catalog, stats)),
            jwt_manager,
        }
    }
}

macro_rules! impl_from_ref {
    ($($field:ident: $ty:ty),+ $(,)?) => {$(
        impl FromRef<AppState> for $ty {
            fn from_ref(state: &AppState) -> Self {
                state.$field.clone()
            }
        }
    )+};
}

impl_from_ref!(
    jwt_manager: JwtManager,
    auth_service: Arc<AuthService>,
    rewards_service: Arc<RewardsService>,
    offers_service: Arc<OffersService>,
);

/// Configure les routes d'authentification
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/refresh", post(refresh_token))
        .route("/logout", post(logout))
        .route("/me", get(me))
}

/// Routes métier: analyse, eco-points, offres
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/ping", get(ping))
        .route("/health", get(health))
        .nest("/auth", auth_routes())
        .route("/analyze-image", post(analyze_image))
        .route("/eco-rewards", get(eco_rewards))
        .route("/offers", get(list_offers))
        .route("/redeem-offer", post(redeem_offer))
}

/// Construit l'application complète
pub fn build_router(state: AppState, config: &Config) -> Router {
    let mut router = Router::new()
        .nest("/api", api_routes())
        .with_state(state)
        .layer(DefaultBodyLimit::max(config.max_body_bytes));

    if let Some(cors) = cors_layer(&config.frontend_url) {
        router = router.layer(cors);
    }

    // Middleware global de tracing
    router.layer(TraceLayer::new_for_http())
}

fn cors_layer(frontend_url: &str) -> Option<CorsLayer> {
    match HeaderValue::from_str(frontend_url) {
        Ok(origin) => Some(
            CorsLayer::new()
                .allow_origin(AllowOrigin::exact(origin))
                .allow_methods([Method::GET, Method::POST])
                .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE]),
        ),
        Err(e) => {
            tracing::warn!("FRONTEND_URL is not a valid origin ({e}), CORS disabled");
            None
        }
    }
}
