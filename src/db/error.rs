/// Repository layer errors
#[derive(Debug, Clone, thiserror::Error)]
pub enum RepositoryError {
    #[error("Store lock poisoned: {0}")]
    LockPoisoned(String),
    #[error("Unique constraint violation: {0}")]
    UniqueViolation(String),
}

impl<T> From<std::sync::PoisonError<T>> for RepositoryError {
    fn from(err: std::sync::PoisonError<T>) -> Self {
        RepositoryError::LockPoisoned(err.to_string())
    }
}

/// Ledger errors (points balance)
#[derive(Debug, Clone, thiserror::Error)]
pub enum LedgerError {
    #[error("Insufficient points: available {available}, required {required}")]
    InsufficientPoints { available: u64, required: u64 },
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl<T> From<std::sync::PoisonError<T>> for LedgerError {
    fn from(err: std::sync::PoisonError<T>) -> Self {
        LedgerError::Repository(err.into())
    }
}
