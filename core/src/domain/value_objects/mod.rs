//! Value objects used across services.

pub mod auth_response;
pub mod offer_filter;

pub use auth_response::AuthResponse;
pub use offer_filter::OfferFilter;
