pub mod stats_repository;
pub mod user_repository;

pub use stats_repository::{InMemoryStatsRepository, StatsRepository};
pub use user_repository::{InMemoryUserRepository, UserRepository};
