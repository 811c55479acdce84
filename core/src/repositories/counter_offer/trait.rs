//! Counter-offer repository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::entities::counter_offer::CounterOffer;
use crate::errors::RepositoryError;

/// Repository contract for CounterOffer entities
#[async_trait]
pub trait CounterOfferRepository: Send + Sync {
    /// Insert a new counter-offer; the store assigns the id
    async fn create(&self, counter_offer: CounterOffer) -> Result<CounterOffer, RepositoryError>;

    /// Upsert a counter-offer by its id
    async fn save(&self, counter_offer: CounterOffer) -> Result<CounterOffer, RepositoryError>;

    /// Find a counter-offer by its unique identifier
    async fn find_by_id(&self, id: Uuid) -> Result<Option<CounterOffer>, RepositoryError>;

    /// Unordered full scan
    async fn find_all(&self) -> Result<Vec<CounterOffer>, RepositoryError>;

    /// Delete a counter-offer by id; deleting a missing id is a no-op
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;

    /// All counter-offers referencing the given offer
    async fn find_by_offer(&self, offer: Uuid) -> Result<Vec<CounterOffer>, RepositoryError>;

    /// All counter-offers proposed by the given user
    async fn find_by_user(&self, user: Uuid) -> Result<Vec<CounterOffer>, RepositoryError>;

    /// All counter-offers whose expiry lies within `[after, before]`
    async fn find_expires_between(
        &self,
        after: DateTime<Utc>,
        before: DateTime<Utc>,
    ) -> Result<Vec<CounterOffer>, RepositoryError>;
}
