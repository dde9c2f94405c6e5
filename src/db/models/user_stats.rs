/// Compteurs eco-points d'un utilisateur.
///
/// `total_points` est un `u64`: le solde ne peut jamais devenir négatif.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct UserStats {
    pub total_points: u64,
    /// kg CO2
    pub total_carbon_saved: f64,
    pub analyses_count: u64,
}

impl UserStats {
    pub fn with_points(total_points: u64) -> Self {
        Self {
            total_points,
            ..Default::default()
        }
    }
}
