use std::sync::Arc;

use chrono::Utc;
use ecowear_api::{OffersResponse, RedeemOfferResponse};
use uuid::Uuid;

use super::catalog::OffersCatalog;
use super::coupon::generate_coupon_code;
use crate::db::repositories::StatsRepository;
use crate::error::AppError;

pub struct OffersService {
    catalog: OffersCatalog,
    stats: Arc<dyn StatsRepository>,
}

impl OffersService {
    pub fn new(catalog: OffersCatalog, stats: Arc<dyn StatsRepository>) -> Self {
        Self { catalog, stats }
    }

    /// Liste les offres et le solde courant
    pub fn list_offers(&self, user_id: Uuid) -> Result<OffersResponse, AppError> {
        let stats = self.stats.get(user_id)?;

        Ok(OffersResponse {
            available_offers: self.catalog.all().to_vec(),
            user_points: stats.total_points,
        })
    }

    /// Échange des points contre une offre.
    ///
    /// Le débit est atomique: un solde insuffisant n'est jamais modifié.
    pub fn redeem(&self, user_id: Uuid, offer_id: &str) -> Result<RedeemOfferResponse, AppError> {
        let offer_id = offer_id.trim();
        if offer_id.is_empty() {
            return Err(AppError::validation("Offer ID is required"));
        }

        let offer = self
            .catalog
            .find(offer_id)
            .ok_or_else(|| AppError::not_found("Offer not found"))?;

        if offer.expires_at.is_some_and(|expiry| expiry <= Utc::now()) {
            return Err(AppError::OfferExpired(offer.id.clone()));
        }

        let remaining = self.stats.deduct(user_id, offer.points_cost).map_err(|e| {
            tracing::info!(%user_id, offer_id, "Redemption rejected: {e}");
            AppError::from(e)
        })?;

        tracing::info!(
            %user_id,
            offer_id,
            points = offer.points_cost,
            remaining,
            "Offer redeemed"
        );

        Ok(RedeemOfferResponse {
            success: true,
            message: format!("Successfully redeemed: {}", offer.title),
            points_deducted: offer.points_cost,
            remaining_points: remaining,
            redemption_id: format!("redemption_{}", Uuid::new_v4().simple()),
            coupon_code: generate_coupon_code(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repositories::InMemoryStatsRepository;
    use chrono::Duration;
    use ecowear_api::Offer;

    fn service(welcome_points: u64) -> OffersService {
        OffersService::new(
            OffersCatalog::default(),
            Arc::new(InMemoryStatsRepository::new(welcome_points)),
        )
    }

    #[test]
    fn list_offers_reports_user_points() {
        let service = service(1250);
        let response = service.list_offers(Uuid::new_v4()).unwrap();

        assert_eq!(response.user_points, 1250);
        assert_eq!(response.available_offers.len(), 8);
    }

    #[test]
    fn redeem_deducts_exact_cost() {
        let service = service(1250);
        let user = Uuid::new_v4();

        let response = service.redeem(user, "eco_tshirt_discount").expect("redeem");

        assert!(response.success);
        assert_eq!(response.points_deducted, 500);
        assert_eq!(response.remaining_points, 750);
        assert!(response.coupon_code.starts_with("ECO-"));
        assert_eq!(service.list_offers(user).unwrap().user_points, 750);
    }

    #[test]
    fn redeem_with_insufficient_points_leaves_balance() {
        let service = service(200);
        let user = Uuid::new_v4();

        let result = service.redeem(user, "eco_workshop");

        assert!(matches!(
            result,
            Err(AppError::InsufficientPoints {
                required: 300,
                current: 200
            })
        ));
        assert_eq!(service.list_offers(user).unwrap().user_points, 200);
    }

    #[test]
    fn redeem_unknown_offer_is_not_found() {
        let service = service(5000);

        assert!(matches!(
            service.redeem(Uuid::new_v4(), "free_lunch"),
            Err(AppError::NotFound(_))
        ));
    }

    #[test]
    fn redeem_requires_offer_id() {
        let service = service(5000);

        assert!(matches!(
            service.redeem(Uuid::new_v4(), " "),
            Err(AppError::ValidationError(_))
        ));
    }

    #[test]
    fn redeem_expired_offer_is_rejected_without_charge() {
        let expired = Offer {
            id: "old_deal".to_string(),
            title: "Old deal".to_string(),
            description: String::new(),
            points_cost: 100,
            category: "discount".to_string(),
            image_url: None,
            expires_at: Some(Utc::now() - Duration::days(1)),
        };
        let service = OffersService::new(
            OffersCatalog::from_offers(vec![expired]),
            Arc::new(InMemoryStatsRepository::new(500)),
        );
        let user = Uuid::new_v4();

        assert!(matches!(
            service.redeem(user, "old_deal"),
            Err(AppError::OfferExpired(_))
        ));
        assert_eq!(service.list_offers(user).unwrap().user_points, 500);
    }
}
