pub mod catalog;
pub mod coupon;
pub mod services;

pub use catalog::OffersCatalog;
pub use services::OffersService;
