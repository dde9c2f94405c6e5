use std::sync::Arc;

use ecowear_api::{ClothingItem, EcoRewardsResponse, ImageAnalysisResponse};
use uuid::Uuid;

use super::analysis::{ClothingClassifier, round_one_decimal};
use super::levels::Level;
use crate::db::repositories::StatsRepository;
use crate::error::AppError;

/// Points par vêtement analysé
const POINTS_PER_ITEM: f64 = 50.0;
/// Bonus par kg CO2 sous le plafond
const LOW_CARBON_BONUS_PER_KG: f64 = 5.0;
const LOW_CARBON_CEILING_KG: f64 = 20.0;
/// Points accordés quand aucun vêtement n'est détecté
const NO_ITEMS_POINTS: u64 = 10;

const NO_ITEMS_MESSAGE: &str = "No clothing items detected in this image. Please try uploading \
     an image with clothing like shirts, pants, dresses, or jackets.";

pub struct RewardsService {
    stats: Arc<dyn StatsRepository>,
    classifier: Arc<dyn ClothingClassifier>,
}

impl RewardsService {
    pub fn new(stats: Arc<dyn StatsRepository>, classifier: Arc<dyn ClothingClassifier>) -> Self {
        Self { stats, classifier }
    }

    /// Analyse une image et crédite l'utilisateur s'il est authentifié.
    ///
    /// Une analyse sans vêtement détecté n'est jamais créditée: les points
    /// de consolation ne figurent que dans la réponse.
    pub fn analyze_image(
        &self,
        user_id: Option<Uuid>,
        image_data: &str,
    ) -> Result<ImageAnalysisResponse, AppError> {
        if image_data.trim().is_empty() {
            return Err(AppError::validation("Image data is required"));
        }

        let items = self.classifier.classify(image_data);
        let total_carbon = round_one_decimal(items.iter().map(|i| i.carbon_footprint).sum());
        let points = Self::reward_points(&items, total_carbon);

        if let Some(user_id) = user_id.filter(|_| !items.is_empty()) {
            let stats = self.stats.earn(user_id, points, total_carbon)?;
            tracing::info!(
                %user_id,
                points,
                total_points = stats.total_points,
                "Analysis credited"
            );
        }

        Ok(ImageAnalysisResponse {
            message: items.is_empty().then(|| NO_ITEMS_MESSAGE.to_string()),
            items,
            total_carbon_footprint: total_carbon,
            eco_reward_points: points,
            analysis_id: format!("analysis_{}", Uuid::new_v4().simple()),
        })
    }

    /// Solde et niveau de l'utilisateur
    pub fn eco_rewards(&self, user_id: Uuid) -> Result<EcoRewardsResponse, AppError> {
        let stats = self.stats.get(user_id)?;

        Ok(EcoRewardsResponse {
            total_points: stats.total_points,
            total_carbon_saved: round_one_decimal(stats.total_carbon_saved),
            analyses_count: stats.analyses_count,
            level: Level::from_points(stats.total_points).as_str().to_string(),
            next_level_points: Level::next_level_points(stats.total_points),
        })
    }

    /// 50 points par vêtement, plus un bonus pour une faible empreinte totale
    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    pub fn reward_points(items: &[ClothingItem], total_carbon: f64) -> u64 {
        if items.is_empty() {
            return NO_ITEMS_POINTS;
        }

        let base = items.len() as f64 * POINTS_PER_ITEM;
        let bonus = ((LOW_CARBON_CEILING_KG - total_carbon) * LOW_CARBON_BONUS_PER_KG).max(0.0);

        (base + bonus).floor() as u64
    }
}
