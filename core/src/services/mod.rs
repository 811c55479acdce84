//! Business services built on the repository contracts.

pub mod auth;
pub mod category;
pub mod cleanup;
pub mod counter_offer;
pub mod offer;
pub mod rental;
pub mod role;
pub mod token;

pub use auth::{AuthService, EmailSender, RegisterUser};
pub use category::CategoryService;
pub use cleanup::{CleanupResult, CleanupService};
pub use counter_offer::CounterOfferService;
pub use offer::OfferService;
pub use rental::RentalService;
pub use role::RoleService;
pub use token::TokenIssuer;
