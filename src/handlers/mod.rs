pub mod analysis;
pub mod auth;
pub mod health;
pub mod offers;
pub mod rewards;
