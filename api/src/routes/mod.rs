//! Route handlers, one module per resource.

pub mod auth;
pub mod categories;
pub mod counter_offers;
pub mod files;
pub mod offers;
pub mod rentals;
pub mod roles;
pub mod users;
