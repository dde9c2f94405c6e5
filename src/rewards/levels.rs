/// Niveau de fidélité dérivé du solde de points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Bronze,
    Silver,
    Gold,
    Platinum,
}

/// Bonus de points entre deux paliers une fois Platinum atteint
const PLATINUM_MILESTONE: u64 = 2000;

impl Level {
    pub fn from_points(points: u64) -> Self {
        match points {
            0..500 => Self::Bronze,
            500..1500 => Self::Silver,
            1500..3000 => Self::Gold,
            _ => Self::Platinum,
        }
    }

    /// Points à atteindre pour le prochain palier
    pub fn next_level_points(points: u64) -> u64 {
        match Self::from_points(points) {
            Self::Bronze => 500,
            Self::Silver => 1500,
            Self::Gold => 3000,
            Self::Platinum => points.saturating_add(PLATINUM_MILESTONE),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bronze => "Bronze",
            Self::Silver => "Silver",
            Self::Gold => "Gold",
            Self::Platinum => "Platinum",
        }
    }
}
