//! Application state holding the shared services.
//!
//! The services keep their generic-over-repository shape from the core; the
//! state pins them to trait objects so handlers stay free of type
//! parameters and tests can swap in the in-memory repositories.

use std::sync::Arc;

use bb_core::repositories::{
    CategoryRepository, CounterOfferRepository, FileStore, OfferRepository, RentalRepository,
    RoleRepository, UserRepository, VerificationTokenRepository,
};
use bb_core::services::auth::EmailSender;
use bb_core::services::{
    AuthService, CategoryService, CounterOfferService, OfferService, RentalService, RoleService,
    TokenIssuer,
};

/// The account service over trait-object repositories
pub type SharedAuthService = AuthService<
    dyn UserRepository,
    dyn RoleRepository,
    dyn VerificationTokenRepository,
    dyn EmailSender,
>;

/// Shared services injected into every handler
pub struct AppState {
    pub offers: Arc<OfferService<dyn OfferRepository>>,
    pub counter_offers: Arc<CounterOfferService<dyn CounterOfferRepository>>,
    pub rentals: Arc<RentalService<dyn RentalRepository>>,
    pub categories: Arc<CategoryService<dyn CategoryRepository>>,
    pub roles: Arc<RoleService<dyn RoleRepository>>,
    pub auth: Arc<SharedAuthService>,
    pub token_issuer: Arc<TokenIssuer>,
    pub files: Arc<dyn FileStore>,
}
