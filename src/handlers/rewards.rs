use axum::extract::State;
use ecowear_api::EcoRewardsResponse;
use std::sync::Arc;

use crate::auth::extractors::AuthClaims;
use crate::error::AppError;
use crate::response::AppResponse;
use crate::rewards::RewardsService;

/// GET /api/eco-rewards
pub async fn eco_rewards(
    claims: AuthClaims,
    State(rewards): State<Arc<RewardsService>>,
) -> Result<AppResponse<EcoRewardsResponse>, AppError> {
    let response = rewards.eco_rewards(claims.user_id)?;
    Ok(AppResponse::ok(response))
}
