use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use ecowear_api::{OffersResponse, RedeemOfferRequest, RedeemOfferResponse};
use std::sync::Arc;

use crate::auth::extractors::AuthClaims;
use crate::error::AppError;
use crate::offers::OffersService;
use crate::response::AppResponse;

/// GET /api/offers
pub async fn list_offers(
    claims: AuthClaims,
    State(offers): State<Arc<OffersService>>,
) -> Result<AppResponse<OffersResponse>, AppError> {
    let response = offers.list_offers(claims.user_id)?;
    Ok(AppResponse::ok(response))
}

/// POST /api/redeem-offer
pub async fn redeem_offer(
    claims: AuthClaims,
    State(offers): State<Arc<OffersService>>,
    payload: Result<Json<RedeemOfferRequest>, JsonRejection>,
) -> Result<AppResponse<RedeemOfferResponse>, AppError> {
    let Json(payload) = payload?;
    let response = offers.redeem(claims.user_id, &payload.offer_id)?;
    Ok(AppResponse::ok(response))
}
