use chrono::{DateTime, Duration, Utc};
use ecowear_api::Offer;

struct OfferSeed {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    points_cost: u64,
    category: &'static str,
    /// Durée de validité en jours à partir du démarrage
    valid_days: Option<i64>,
}

const OFFER_SEEDS: &[OfferSeed] = &[
    OfferSeed {
        id: "eco_tshirt_discount",
        title: "20% Off Organic Cotton T-Shirt",
        description: "Get 20% off your next purchase of an organic cotton t-shirt from our sustainable fashion partners.",
        points_cost: 500,
        category: "discount",
        valid_days: Some(30),
    },
    OfferSeed {
        id: "bamboo_fiber_discount",
        title: "Bamboo Fiber Clothing - 15% Off",
        description: "Sustainable bamboo fiber clothing with natural antibacterial properties.",
        points_cost: 750,
        category: "discount",
        valid_days: Some(45),
    },
    OfferSeed {
        id: "eco_workshop",
        title: "Sustainable Fashion Workshop",
        description: "Join our online workshop on sustainable fashion choices and eco-friendly clothing care.",
        points_cost: 300,
        category: "experience",
        valid_days: Some(60),
    },
    OfferSeed {
        id: "plant_tree",
        title: "Plant a Tree in Your Name",
        description: "We'll plant a tree in your name and send you a certificate with GPS coordinates.",
        points_cost: 1000,
        category: "eco-product",
        valid_days: None,
    },
    OfferSeed {
        id: "recycled_bag",
        title: "Recycled Ocean Plastic Tote Bag",
        description: "Stylish tote bag made from recycled ocean plastic. Free shipping included.",
        points_cost: 800,
        category: "eco-product",
        valid_days: Some(90),
    },
    OfferSeed {
        id: "upcycling_kit",
        title: "DIY Upcycling Kit",
        description: "Complete kit with tools and instructions to upcycle your old clothing into new pieces.",
        points_cost: 600,
        category: "eco-product",
        valid_days: None,
    },
    OfferSeed {
        id: "sustainable_brand_voucher",
        title: "$25 Sustainable Fashion Voucher",
        description: "Voucher valid at any of our 50+ partner sustainable fashion brands.",
        points_cost: 1200,
        category: "discount",
        valid_days: Some(365),
    },
    OfferSeed {
        id: "carbon_offset",
        title: "Carbon Offset - 1 Ton CO₂",
        description: "Offset 1 ton of CO₂ through verified reforestation projects.",
        points_cost: 1500,
        category: "eco-product",
        valid_days: None,
    },
];

/// Catalogue statique, immuable après construction.
#[derive(Debug, Clone)]
pub struct OffersCatalog {
    offers: Vec<Offer>,
}

impl OffersCatalog {
    /// Construit le catalogue par défaut; les dates d'expiration partent de `now`
    pub fn new(now: DateTime<Utc>) -> Self {
        let offers = OFFER_SEEDS
            .iter()
            .map(|seed| Offer {
                id: seed.id.to_string(),
                title: seed.title.to_string(),
                description: seed.description.to_string(),
                points_cost: seed.points_cost,
                category: seed.category.to_string(),
                image_url: None,
                expires_at: seed.valid_days.map(|days| now + Duration::days(days)),
            })
            .collect();

        Self { offers }
    }

    #[cfg(test)]
    pub fn from_offers(offers: Vec<Offer>) -> Self {
        Self { offers }
    }

    pub fn all(&self) -> &[Offer] {
        &self.offers
    }

    pub fn find(&self, offer_id: &str) -> Option<&Offer> {
        self.offers.iter().find(|o| o.id == offer_id)
    }
}

impl Default for OffersCatalog {
    fn default() -> Self {
        Self::new(Utc::now())
    }
}
