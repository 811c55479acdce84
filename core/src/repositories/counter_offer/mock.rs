//! Mock implementation of CounterOfferRepository for testing

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::counter_offer::CounterOffer;
use crate::errors::RepositoryError;

use super::trait_::CounterOfferRepository;

/// Mock counter-offer repository for testing
pub struct MockCounterOfferRepository {
    counter_offers: Arc<RwLock<HashMap<Uuid, CounterOffer>>>,
}

impl MockCounterOfferRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            counter_offers: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for MockCounterOfferRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CounterOfferRepository for MockCounterOfferRepository {
    async fn create(&self, mut counter_offer: CounterOffer) -> Result<CounterOffer, RepositoryError> {
        let id = Uuid::new_v4();
        counter_offer.id = Some(id);
        self.counter_offers
            .write()
            .await
            .insert(id, counter_offer.clone());
        Ok(counter_offer)
    }

    async fn save(&self, counter_offer: CounterOffer) -> Result<CounterOffer, RepositoryError> {
        let id = counter_offer.id.ok_or_else(|| RepositoryError::Storage {
            message: "cannot save a counter-offer without an id".to_string(),
        })?;
        self.counter_offers
            .write()
            .await
            .insert(id, counter_offer.clone());
        Ok(counter_offer)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<CounterOffer>, RepositoryError> {
        Ok(self.counter_offers.read().await.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<CounterOffer>, RepositoryError> {
        Ok(self.counter_offers.read().await.values().cloned().collect())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        self.counter_offers.write().await.remove(&id);
        Ok(())
    }

    async fn find_by_offer(&self, offer: Uuid) -> Result<Vec<CounterOffer>, RepositoryError> {
        Ok(self
            .counter_offers
            .read()
            .await
            .values()
            .filter(|c| c.offer == offer)
            .cloned()
            .collect())
    }

    async fn find_by_user(&self, user: Uuid) -> Result<Vec<CounterOffer>, RepositoryError> {
        Ok(self
            .counter_offers
            .read()
            .await
            .values()
            .filter(|c| c.user == user)
            .cloned()
            .collect())
    }

    async fn find_expires_between(
        &self,
        after: DateTime<Utc>,
        before: DateTime<Utc>,
    ) -> Result<Vec<CounterOffer>, RepositoryError> {
        Ok(self
            .counter_offers
            .read()
            .await
            .values()
            .filter(|c| c.expires >= after && c.expires <= before)
            .cloned()
            .collect())
    }
}
