//! MySQL repository implementations.

mod category_repository_impl;
mod counter_offer_repository_impl;
mod offer_repository_impl;
mod rental_repository_impl;
mod role_repository_impl;
mod user_repository_impl;
mod verification_token_repository_impl;

pub use category_repository_impl::MySqlCategoryRepository;
pub use counter_offer_repository_impl::MySqlCounterOfferRepository;
pub use offer_repository_impl::MySqlOfferRepository;
pub use rental_repository_impl::MySqlRentalRepository;
pub use role_repository_impl::MySqlRoleRepository;
pub use user_repository_impl::MySqlUserRepository;
pub use verification_token_repository_impl::MySqlVerificationTokenRepository;

use sqlx::mysql::MySqlRow;
use sqlx::Row;
use uuid::Uuid;

use bb_core::errors::RepositoryError;

/// Read a column, wrapping decode failures into a storage error
pub(crate) fn column<'r, T>(row: &'r MySqlRow, name: &str) -> Result<T, RepositoryError>
where
    T: sqlx::Decode<'r, sqlx::MySql> + sqlx::Type<sqlx::MySql>,
{
    row.try_get(name).map_err(|e| RepositoryError::Storage {
        message: format!("failed to get {}: {}", name, e),
    })
}

/// Parse a CHAR(36) column into a Uuid
pub(crate) fn parse_uuid(value: &str, column: &str) -> Result<Uuid, RepositoryError> {
    Uuid::parse_str(value).map_err(|e| RepositoryError::Storage {
        message: format!("invalid UUID in {}: {}", column, e),
    })
}
