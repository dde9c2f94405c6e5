use chrono::Utc;
use ecowear_api::ClothingItem;
use rand::Rng;

/// Détecte les vêtements présents dans une image.
///
/// Implémenté par l'heuristique locale; un client d'inférence externe peut
/// être injecté à la place dans `RewardsService`.
pub trait ClothingClassifier: Send + Sync {
    /// Retourne une liste vide si aucun vêtement n'est reconnu.
    fn classify(&self, image_data: &str) -> Vec<ClothingItem>;
}

/// Empreinte carbone d'un type de vêtement
#[derive(Debug, Clone, Copy)]
pub struct GarmentFootprint {
    pub key: &'static str,
    pub name: &'static str,
    pub kind: &'static str,
    /// kg CO2 par pièce
    pub carbon_per_item: f64,
}

const fn garment(
    key: &'static str,
    name: &'static str,
    kind: &'static str,
    carbon_per_item: f64,
) -> GarmentFootprint {
    GarmentFootprint {
        key,
        name,
        kind,
        carbon_per_item,
    }
}

/// Vêtements uniquement (ni chaussures ni accessoires)
pub const CLOTHING_CARBON_TABLE: &[GarmentFootprint] = &[
    garment("t-shirt", "T-Shirt", "shirt", 5.0),
    garment("dress shirt", "Dress Shirt", "shirt", 7.0),
    garment("polo shirt", "Polo Shirt", "shirt", 5.5),
    garment("tank top", "Tank Top", "shirt", 3.5),
    garment("blouse", "Blouse", "shirt", 6.5),
    garment("shirt", "Shirt", "shirt", 6.0),
    garment("jeans", "Jeans", "pants", 10.0),
    garment("pants", "Pants", "pants", 8.0),
    garment("trousers", "Trousers", "pants", 8.5),
    garment("chinos", "Chinos", "pants", 7.5),
    garment("leggings", "Leggings", "pants", 4.5),
    garment("shorts", "Shorts", "shorts", 4.0),
    garment("dress", "Dress", "dress", 12.0),
    garment("skirt", "Skirt", "skirt", 6.0),
    garment("sweater", "Sweater", "sweater", 9.0),
    garment("hoodie", "Hoodie", "sweater", 11.0),
    garment("cardigan", "Cardigan", "sweater", 8.5),
    garment("sweatshirt", "Sweatshirt", "sweater", 9.5),
    garment("jacket", "Jacket", "outerwear", 15.0),
    garment("coat", "Coat", "outerwear", 18.0),
    garment("blazer", "Blazer", "outerwear", 13.0),
    garment("windbreaker", "Windbreaker", "outerwear", 8.0),
];

/// Candidats retenus par l'heuristique
const COMMON_GARMENTS: [&str; 8] = [
    "t-shirt", "jeans", "dress", "sweater", "jacket", "pants", "shirt", "hoodie",
];

/// En dessous, l'image est trop petite pour contenir un vêtement
const MIN_PAYLOAD_LEN: usize = 1000;
/// Nombre de caractères utilisés pour l'empreinte de l'image
const HASH_PREFIX_LEN: usize = 100;

pub fn lookup_garment(key: &str) -> Option<&'static GarmentFootprint> {
    CLOTHING_CARBON_TABLE.iter().find(|g| g.key == key)
}

/// Heuristique déterministe: la même image donne les mêmes types de vêtements.
/// Seules l'empreinte carbone (±10 %) et la confiance (0.80-0.95) varient.
#[derive(Debug, Default, Clone, Copy)]
pub struct HeuristicClassifier;

impl HeuristicClassifier {
    /// Retire le préfixe `data:image/<fmt>;base64,` s'il est présent
    pub fn strip_data_url(image_data: &str) -> &str {
        image_data
            .strip_prefix("data:image/")
            .and_then(|rest| rest.split_once(";base64,"))
            .filter(|(format, _)| {
                !format.is_empty() && format.bytes().all(|b| b.is_ascii_lowercase())
            })
            .map_or(image_data, |(_, payload)| payload)
    }

    /// Hash glissant 32 bits (`h * 31 + c`) sur le début du payload
    pub fn fingerprint(payload: &str) -> i32 {
        payload
            .bytes()
            .take(HASH_PREFIX_LEN)
            .fold(0i32, |hash, b| {
                hash.wrapping_shl(5)
                    .wrapping_sub(hash)
                    .wrapping_add(i32::from(b))
            })
    }

    /// Sélectionne 1 ou 2 vêtements distincts à partir de l'empreinte
    pub fn select_garments(hash: i32) -> Vec<&'static str> {
        let count = 1 + (hash.unsigned_abs() >> 8) % 2;
        let len = COMMON_GARMENTS.len();
        let mut used: Vec<usize> = Vec::with_capacity(2);

        for i in 0..count {
            let mut index = (i64::from(hash) + i64::from(i)).unsigned_abs() as usize % len;
            while used.contains(&index) {
                index = (index + 1) % len;
            }
            used.push(index);
        }

        used.into_iter().map(|i| COMMON_GARMENTS[i]).collect()
    }
}

impl ClothingClassifier for HeuristicClassifier {
    fn classify(&self, image_data: &str) -> Vec<ClothingItem> {
        let payload = Self::strip_data_url(image_data);
        if payload.len() < MIN_PAYLOAD_LEN {
            return Vec::new();
        }

        let stamp = Utc::now().timestamp_millis();
        let mut rng = rand::rng();

        Self::select_garments(Self::fingerprint(payload))
            .into_iter()
            .filter_map(lookup_garment)
            .enumerate()
            .map(|(n, garment)| {
                let carbon = garment.carbon_per_item * rng.random_range(0.9..1.1);
                ClothingItem {
                    id: format!("item_{}_{stamp}", n + 1),
                    name: garment.name.to_string(),
                    kind: garment.kind.to_string(),
                    carbon_footprint: round_one_decimal(carbon),
                    confidence: rng.random_range(0.80..0.95),
                }
            })
            .collect()
    }
}

pub fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
