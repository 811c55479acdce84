//! Offer repository trait defining the interface for offer persistence.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::entities::offer::Offer;
use crate::domain::value_objects::offer_filter::OfferFilter;
use crate::errors::RepositoryError;

/// Repository contract for Offer entities.
///
/// Implementations must assign the id on `create`, upsert by id on `save`,
/// and treat `delete` of a missing id as a no-op (matching the reference
/// store's delete-by-id semantics). All list operations may return an empty
/// vector; that is never an error.
#[async_trait]
pub trait OfferRepository: Send + Sync {
    /// Insert a new offer; the store assigns the id
    async fn create(&self, offer: Offer) -> Result<Offer, RepositoryError>;

    /// Upsert an offer by its id
    ///
    /// # Errors
    /// Fails with [`RepositoryError::Storage`] when the offer has no id.
    async fn save(&self, offer: Offer) -> Result<Offer, RepositoryError>;

    /// Find an offer by its unique identifier
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Offer>, RepositoryError>;

    /// Unordered full scan
    async fn find_all(&self) -> Result<Vec<Offer>, RepositoryError>;

    /// Delete an offer by id; deleting a missing id is a no-op
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;

    /// All offers with exactly the given book title
    async fn find_by_book_title(&self, title: &str) -> Result<Vec<Offer>, RepositoryError>;

    /// All offers with exactly the given book publisher
    async fn find_by_book_publisher(&self, publisher: &str)
        -> Result<Vec<Offer>, RepositoryError>;

    /// All offers located in exactly the given city
    async fn find_by_city(&self, city: &str) -> Result<Vec<Offer>, RepositoryError>;

    /// All offers located in exactly the given voivodeship
    async fn find_by_voivodeship(&self, voivodeship: &str)
        -> Result<Vec<Offer>, RepositoryError>;

    /// All offers owned by the given user
    async fn find_by_owner(&self, owner: Uuid) -> Result<Vec<Offer>, RepositoryError>;

    /// All offers created within the closed interval `[start, end]`
    async fn find_created_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Offer>, RepositoryError>;

    /// All offers with `expires >= cutoff`
    async fn find_not_expired(&self, cutoff: DateTime<Utc>)
        -> Result<Vec<Offer>, RepositoryError>;

    /// All offers matching the fuzzy filter template
    async fn find_by_filter(&self, filter: &OfferFilter) -> Result<Vec<Offer>, RepositoryError>;
}
