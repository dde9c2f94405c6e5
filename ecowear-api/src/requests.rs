use serde::{Deserialize, Serialize};

// -------- REQUEST DTOs --------
//
// Missing fields deserialize to empty strings so the service can answer with
// its own validation messages instead of a JSON rejection.

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String, // Plain text
    pub name: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct LoginRequest {
    pub email: String,
    pub password: String, // Plain text
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}

/// Image to analyze, usually a `data:image/...;base64,` URL.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct AnalyzeImageRequest {
    pub image_data: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct RedeemOfferRequest {
    pub offer_id: String,
}
