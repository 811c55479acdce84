//! Counter-offer service implementation.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::entities::counter_offer::CounterOffer;
use crate::errors::{ServiceError, ServiceResult};
use crate::repositories::CounterOfferRepository;

/// Service governing proposals against offers
pub struct CounterOfferService<R: CounterOfferRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: CounterOfferRepository + ?Sized> CounterOfferService<R> {
    /// Create a new counter-offer service
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Get a single counter-offer by id; a missing one is a GetFailure
    pub async fn get_by_id(&self, id: Uuid) -> ServiceResult<CounterOffer> {
        self.repository
            .find_by_id(id)
            .await
            .map_err(|e| ServiceError::Get {
                message: format!("could not get counter-offer {}: {}", id, e),
            })?
            .ok_or_else(|| ServiceError::Get {
                message: format!("counter-offer {} not found", id),
            })
    }

    /// Unordered full scan
    pub async fn get_all(&self) -> ServiceResult<Vec<CounterOffer>> {
        self.repository
            .find_all()
            .await
            .map_err(|e| ServiceError::Get {
                message: format!("could not get counter-offers: {}", e),
            })
    }

    /// Insert a new counter-offer; the store assigns the id
    pub async fn add(&self, counter_offer: CounterOffer) -> ServiceResult<CounterOffer> {
        self.repository
            .create(counter_offer)
            .await
            .map_err(|e| ServiceError::Add {
                message: format!("could not add counter-offer: {}", e),
            })
    }

    /// Upsert a counter-offer by id; the id must be present
    pub async fn modify(&self, counter_offer: CounterOffer) -> ServiceResult<CounterOffer> {
        if counter_offer.id.is_none() {
            return Err(ServiceError::Modify {
                message: "counter-offer id is required for modify".to_string(),
            });
        }
        self.repository
            .save(counter_offer)
            .await
            .map_err(|e| ServiceError::Modify {
                message: format!("could not modify counter-offer: {}", e),
            })
    }

    /// Delete a counter-offer by id; deleting a missing id is not an error
    pub async fn delete(&self, id: Uuid) -> ServiceResult<()> {
        self.repository
            .delete(id)
            .await
            .map_err(|e| ServiceError::Delete {
                message: format!("could not delete counter-offer {}: {}", id, e),
            })
    }

    /// All counter-offers referencing the given offer
    pub async fn get_all_by_offer(&self, offer: Uuid) -> ServiceResult<Vec<CounterOffer>> {
        self.repository
            .find_by_offer(offer)
            .await
            .map_err(|e| ServiceError::Get {
                message: format!("could not get counter-offers by offer: {}", e),
            })
    }

    /// All counter-offers proposed by the given user
    pub async fn get_all_by_user(&self, user: Uuid) -> ServiceResult<Vec<CounterOffer>> {
        self.repository
            .find_by_user(user)
            .await
            .map_err(|e| ServiceError::Get {
                message: format!("could not get counter-offers by user: {}", e),
            })
    }

    /// All counter-offers whose expiry lies within `[after, before]`
    pub async fn get_all_between_dates(
        &self,
        after: DateTime<Utc>,
        before: DateTime<Utc>,
    ) -> ServiceResult<Vec<CounterOffer>> {
        self.repository
            .find_expires_between(after, before)
            .await
            .map_err(|e| ServiceError::Get {
                message: format!("could not get counter-offers between dates: {}", e),
            })
    }
}
