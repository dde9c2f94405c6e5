use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// -------- AUTH --------

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct AuthTokens {
    pub access_token: String,
    pub refresh_token: String,
}

/// Returned by register and login.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AuthResponse {
    pub user: UserResponse,
    pub tokens: AuthTokens,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RefreshTokenResponse {
    pub tokens: AuthTokens,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct MeResponse {
    pub user: UserResponse,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

// -------- ANALYSIS --------

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ClothingItem {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    /// kg CO2
    pub carbon_footprint: f64,
    /// 0-1
    pub confidence: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ImageAnalysisResponse {
    pub items: Vec<ClothingItem>,
    pub total_carbon_footprint: f64,
    pub eco_reward_points: u64,
    pub analysis_id: String,
    /// Set when no clothing was detected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

// -------- REWARDS --------

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct EcoRewardsResponse {
    pub total_points: u64,
    pub total_carbon_saved: f64,
    pub analyses_count: u64,
    pub level: String,
    pub next_level_points: u64,
}

// -------- OFFERS --------

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Offer {
    pub id: String,
    pub title: String,
    pub description: String,
    pub points_cost: u64,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct OffersResponse {
    pub available_offers: Vec<Offer>,
    pub user_points: u64,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RedeemOfferResponse {
    pub success: bool,
    pub message: String,
    pub points_deducted: u64,
    pub remaining_points: u64,
    pub redemption_id: String,
    pub coupon_code: String,
}
