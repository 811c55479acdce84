//! Domain entities.
//!
//! Every entity carries `id: Option<Uuid>` — `None` until the store assigns
//! an identifier on insert. Cross-entity references are plain `Uuid` ids:
//! non-owning, never cascaded, and not checked for integrity by the core.

pub mod category;
pub mod counter_offer;
pub mod offer;
pub mod rental;
pub mod role;
pub mod stored_file;
pub mod token;
pub mod user;
pub mod verification_token;

pub use category::Category;
pub use counter_offer::CounterOffer;
pub use offer::Offer;
pub use rental::Rental;
pub use role::{Role, ROLE_ADMIN, ROLE_USER};
pub use stored_file::StoredFile;
pub use token::Claims;
pub use user::User;
pub use verification_token::VerificationToken;
