//! Mock implementation of OfferRepository for testing

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::offer::Offer;
use crate::domain::value_objects::offer_filter::OfferFilter;
use crate::errors::RepositoryError;

use super::trait_::OfferRepository;

/// Mock offer repository for testing
pub struct MockOfferRepository {
    offers: Arc<RwLock<HashMap<Uuid, Offer>>>,
}

impl MockOfferRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            offers: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Number of stored offers
    pub async fn len(&self) -> usize {
        self.offers.read().await.len()
    }

    /// Whether the store is empty
    pub async fn is_empty(&self) -> bool {
        self.offers.read().await.is_empty()
    }
}

impl Default for MockOfferRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl OfferRepository for MockOfferRepository {
    async fn create(&self, mut offer: Offer) -> Result<Offer, RepositoryError> {
        let id = Uuid::new_v4();
        offer.id = Some(id);
        self.offers.write().await.insert(id, offer.clone());
        Ok(offer)
    }

    async fn save(&self, offer: Offer) -> Result<Offer, RepositoryError> {
        let id = offer.id.ok_or_else(|| RepositoryError::Storage {
            message: "cannot save an offer without an id".to_string(),
        })?;
        self.offers.write().await.insert(id, offer.clone());
        Ok(offer)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Offer>, RepositoryError> {
        Ok(self.offers.read().await.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Offer>, RepositoryError> {
        Ok(self.offers.read().await.values().cloned().collect())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        self.offers.write().await.remove(&id);
        Ok(())
    }

    async fn find_by_book_title(&self, title: &str) -> Result<Vec<Offer>, RepositoryError> {
        Ok(self
            .offers
            .read()
            .await
            .values()
            .filter(|o| o.book_title == title)
            .cloned()
            .collect())
    }

    async fn find_by_book_publisher(
        &self,
        publisher: &str,
    ) -> Result<Vec<Offer>, RepositoryError> {
        Ok(self
            .offers
            .read()
            .await
            .values()
            .filter(|o| o.book_publisher == publisher)
            .cloned()
            .collect())
    }

    async fn find_by_city(&self, city: &str) -> Result<Vec<Offer>, RepositoryError> {
        Ok(self
            .offers
            .read()
            .await
            .values()
            .filter(|o| o.city == city)
            .cloned()
            .collect())
    }

    async fn find_by_voivodeship(
        &self,
        voivodeship: &str,
    ) -> Result<Vec<Offer>, RepositoryError> {
        Ok(self
            .offers
            .read()
            .await
            .values()
            .filter(|o| o.voivodeship == voivodeship)
            .cloned()
            .collect())
    }

    async fn find_by_owner(&self, owner: Uuid) -> Result<Vec<Offer>, RepositoryError> {
        Ok(self
            .offers
            .read()
            .await
            .values()
            .filter(|o| o.offer_owner == owner)
            .cloned()
            .collect())
    }

    async fn find_created_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Offer>, RepositoryError> {
        Ok(self
            .offers
            .read()
            .await
            .values()
            .filter(|o| o.created_at >= start && o.created_at <= end)
            .cloned()
            .collect())
    }

    async fn find_not_expired(
        &self,
        cutoff: DateTime<Utc>,
    ) -> Result<Vec<Offer>, RepositoryError> {
        Ok(self
            .offers
            .read()
            .await
            .values()
            .filter(|o| o.expires >= cutoff)
            .cloned()
            .collect())
    }

    async fn find_by_filter(&self, filter: &OfferFilter) -> Result<Vec<Offer>, RepositoryError> {
        Ok(self
            .offers
            .read()
            .await
            .values()
            .filter(|o| filter.matches(o))
            .cloned()
            .collect())
    }
}
