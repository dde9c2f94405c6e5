use crate::db::error::LedgerError;
use crate::db::models::user_stats::UserStats;
use std::collections::HashMap;
use std::sync::Mutex;
use uuid::Uuid;

/// Ledger des eco-points, une entrée par utilisateur.
///
/// Les entrées sont créées à la première lecture ou écriture.
pub trait StatsRepository: Send + Sync {
    /// Lit les compteurs de l'utilisateur
    fn get(&self, user_id: Uuid) -> Result<UserStats, LedgerError>;

    /// Crédite des points et du carbone, incrémente le nombre d'analyses
    fn earn(&self, user_id: Uuid, points: u64, carbon: f64) -> Result<UserStats, LedgerError>;

    /// Débite `points` si le solde le permet, sinon laisse le solde intact.
    /// Retourne le solde restant.
    fn deduct(&self, user_id: Uuid, points: u64) -> Result<u64, LedgerError>;
}

pub struct InMemoryStatsRepository {
    stats: Mutex<HashMap<Uuid, UserStats>>,
    welcome_points: u64,
}

impl InMemoryStatsRepository {
    pub fn new(welcome_points: u64) -> Self {
        Self {
            stats: Mutex::new(HashMap::new()),
            welcome_points,
        }
    }
}

impl Default for InMemoryStatsRepository {
    fn default() -> Self {
        Self::new(0)
    }
}

impl StatsRepository for InMemoryStatsRepository {
    fn get(&self, user_id: Uuid) -> Result<UserStats, LedgerError> {
        let mut stats = self.stats.lock()?;
        let entry = stats
            .entry(user_id)
            .or_insert_with(|| UserStats::with_points(self.welcome_points));
        Ok(*entry)
    }

    fn earn(&self, user_id: Uuid, points: u64, carbon: f64) -> Result<UserStats, LedgerError> {
        let mut stats = self.stats.lock()?;
        let entry = stats
            .entry(user_id)
            .or_insert_with(|| UserStats::with_points(self.welcome_points));

        entry.total_points = entry.total_points.saturating_add(points);
        entry.total_carbon_saved += carbon;
        entry.analyses_count += 1;
        Ok(*entry)
    }

    fn deduct(&self, user_id: Uuid, points: u64) -> Result<u64, LedgerError> {
        // Check and subtract under the same lock
        let mut stats = self.stats.lock()?;
        let entry = stats
            .entry(user_id)
            .or_insert_with(|| UserStats::with_points(self.welcome_points));

        if entry.total_points < points {
            return Err(LedgerError::InsufficientPoints {
                available: entry.total_points,
                required: points,
            });
        }

        entry.total_points -= points;
        Ok(entry.total_points)
    }
}
