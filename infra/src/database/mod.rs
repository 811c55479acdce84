//! Database module - MySQL implementations using SQLx

pub mod connection;
pub mod mysql;

pub use connection::{create_pool, run_migrations};
pub use mysql::{
    MySqlCategoryRepository, MySqlCounterOfferRepository, MySqlOfferRepository,
    MySqlRentalRepository, MySqlRoleRepository, MySqlUserRepository,
    MySqlVerificationTokenRepository,
};
