use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use ecowear_api::{AnalyzeImageRequest, ImageAnalysisResponse};
use std::sync::Arc;

use crate::auth::extractors::AuthClaims;
use crate::error::AppError;
use crate::response::AppResponse;
use crate::rewards::RewardsService;

/// POST /api/analyze-image
/// Authentification facultative: seuls les utilisateurs connectés sont crédités
pub async fn analyze_image(
    claims: Option<AuthClaims>,
    State(rewards): State<Arc<RewardsService>>,
    payload: Result<Json<AnalyzeImageRequest>, JsonRejection>,
) -> Result<AppResponse<ImageAnalysisResponse>, AppError> {
    let Json(payload) = payload?;
    let user_id = claims.map(|c| c.user_id);
    let response = rewards.analyze_image(user_id, &payload.image_data)?;
    Ok(AppResponse::ok(response))
}
