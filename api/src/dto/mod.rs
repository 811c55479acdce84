//! Wire DTOs mapped to and from the domain entities.

pub mod auth;
pub mod category;
pub mod counter_offer;
pub mod file;
pub mod offer;
pub mod rental;
pub mod role;
