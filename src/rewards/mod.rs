//! Eco-points: analyse d'image, niveaux de fidélité et crédit du ledger.

pub mod analysis;
pub mod levels;
pub mod services;

pub use analysis::{ClothingClassifier, HeuristicClassifier};
pub use services::RewardsService;
