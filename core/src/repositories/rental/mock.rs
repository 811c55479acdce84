//! Mock implementation of RentalRepository for testing

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::rental::Rental;
use crate::errors::RepositoryError;

use super::trait_::RentalRepository;

/// Mock rental repository for testing
pub struct MockRentalRepository {
    rentals: Arc<RwLock<HashMap<Uuid, Rental>>>,
}

impl MockRentalRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            rentals: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for MockRentalRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RentalRepository for MockRentalRepository {
    async fn create(&self, mut rental: Rental) -> Result<Rental, RepositoryError> {
        let mut rentals = self.rentals.write().await;

        // At most one rental per offer
        if rentals.values().any(|r| r.offer == rental.offer) {
            return Err(RepositoryError::Duplicate {
                field: "offer".to_string(),
            });
        }

        let id = Uuid::new_v4();
        rental.id = Some(id);
        rentals.insert(id, rental.clone());
        Ok(rental)
    }

    async fn save(&self, rental: Rental) -> Result<Rental, RepositoryError> {
        let id = rental.id.ok_or_else(|| RepositoryError::Storage {
            message: "cannot save a rental without an id".to_string(),
        })?;
        self.rentals.write().await.insert(id, rental.clone());
        Ok(rental)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Rental>, RepositoryError> {
        Ok(self.rentals.read().await.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Rental>, RepositoryError> {
        Ok(self.rentals.read().await.values().cloned().collect())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        self.rentals.write().await.remove(&id);
        Ok(())
    }

    async fn find_by_offer(&self, offer: Uuid) -> Result<Option<Rental>, RepositoryError> {
        Ok(self
            .rentals
            .read()
            .await
            .values()
            .find(|r| r.offer == offer)
            .cloned())
    }

    async fn find_by_counter_offer(
        &self,
        counter_offer: Uuid,
    ) -> Result<Option<Rental>, RepositoryError> {
        Ok(self
            .rentals
            .read()
            .await
            .values()
            .find(|r| r.counter_offer == Some(counter_offer))
            .cloned())
    }

    async fn find_by_user(&self, user: Uuid) -> Result<Vec<Rental>, RepositoryError> {
        Ok(self
            .rentals
            .read()
            .await
            .values()
            .filter(|r| r.user == user)
            .cloned()
            .collect())
    }

    async fn find_not_expired(
        &self,
        cutoff: DateTime<Utc>,
    ) -> Result<Vec<Rental>, RepositoryError> {
        Ok(self
            .rentals
            .read()
            .await
            .values()
            .filter(|r| r.expires >= cutoff)
            .cloned()
            .collect())
    }
}
