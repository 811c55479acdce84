//! Rental repository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::entities::rental::Rental;
use crate::errors::RepositoryError;

/// Repository contract for Rental entities.
///
/// At most one rental exists per offer: `create` fails with
/// [`RepositoryError::Duplicate`] when a rental for the same offer is
/// already stored.
#[async_trait]
pub trait RentalRepository: Send + Sync {
    /// Insert a new rental; the store assigns the id
    async fn create(&self, rental: Rental) -> Result<Rental, RepositoryError>;

    /// Upsert a rental by its id
    async fn save(&self, rental: Rental) -> Result<Rental, RepositoryError>;

    /// Find a rental by its unique identifier
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Rental>, RepositoryError>;

    /// Unordered full scan
    async fn find_all(&self) -> Result<Vec<Rental>, RepositoryError>;

    /// Delete a rental by id; deleting a missing id is a no-op
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;

    /// The rental for the given offer, if any
    async fn find_by_offer(&self, offer: Uuid) -> Result<Option<Rental>, RepositoryError>;

    /// The rental created from the given counter-offer, if any
    async fn find_by_counter_offer(
        &self,
        counter_offer: Uuid,
    ) -> Result<Option<Rental>, RepositoryError>;

    /// All rentals held by the given user
    async fn find_by_user(&self, user: Uuid) -> Result<Vec<Rental>, RepositoryError>;

    /// All rentals with `expires >= cutoff`
    async fn find_not_expired(&self, cutoff: DateTime<Utc>)
        -> Result<Vec<Rental>, RepositoryError>;
}
