//! # ecowear-api
//!
//! Shared API types for the EcoWear service.
//! This crate is designed to be WASM-compatible and can be used in both
//! backend (Rust) and frontend (WASM/TypeScript via wasm-bindgen) applications.
//!
//! ## Features
//!
//! - Request DTOs (RegisterRequest, LoginRequest, RedeemOfferRequest, etc.)
//! - Response DTOs (AuthResponse, EcoRewardsResponse, OffersResponse, etc.)
//! - Error response format (ErrorResponse)
//! - Generic response wrapper (AppResponse)
//!
//! All JSON field names are camelCase.
//!
//! ## Example
//!
//! ```rust
//! use ecowear_api::LoginRequest;
//!
//! let request = LoginRequest {
//!     email: "user@example.com".to_string(),
//!     password: "password123".to_string(),
//! };
//! ```

pub mod error;
pub mod requests;
pub mod responses;
pub mod result;

// Re-exports for convenient access
pub use error::ErrorResponse;
pub use requests::*;
pub use responses::*;
pub use result::{AppResponse, StatusCode};
