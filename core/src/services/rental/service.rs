//! Rental service implementation.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::entities::rental::Rental;
use crate::errors::{ServiceError, ServiceResult};
use crate::repositories::RentalRepository;

/// Service governing the terminal state of the offer lifecycle.
///
/// Creating a rental does not delete or flag the source counter-offer or
/// offer — callers are responsible for any such bookkeeping.
pub struct RentalService<R: RentalRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: RentalRepository + ?Sized> RentalService<R> {
    /// Create a new rental service
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Get a single rental by id; a missing rental is a GetFailure
    pub async fn get_by_id(&self, id: Uuid) -> ServiceResult<Rental> {
        self.repository
            .find_by_id(id)
            .await
            .map_err(|e| ServiceError::Get {
                message: format!("could not get rental {}: {}", id, e),
            })?
            .ok_or_else(|| ServiceError::Get {
                message: format!("rental {} not found", id),
            })
    }

    /// Unordered full scan
    pub async fn get_all(&self) -> ServiceResult<Vec<Rental>> {
        self.repository
            .find_all()
            .await
            .map_err(|e| ServiceError::Get {
                message: format!("could not get rentals: {}", e),
            })
    }

    /// Insert a new rental; the store assigns the id.
    ///
    /// A second rental for the same offer is rejected by the repository and
    /// surfaces as an AddFailure.
    pub async fn add(&self, rental: Rental) -> ServiceResult<Rental> {
        self.repository
            .create(rental)
            .await
            .map_err(|e| ServiceError::Add {
                message: format!("could not add rental: {}", e),
            })
    }

    /// Upsert a rental by id; the id must be present
    pub async fn modify(&self, rental: Rental) -> ServiceResult<Rental> {
        if rental.id.is_none() {
            return Err(ServiceError::Modify {
                message: "rental id is required for modify".to_string(),
            });
        }
        self.repository
            .save(rental)
            .await
            .map_err(|e| ServiceError::Modify {
                message: format!("could not modify rental: {}", e),
            })
    }

    /// Delete a rental by id; deleting a missing id is not an error
    pub async fn delete(&self, id: Uuid) -> ServiceResult<()> {
        self.repository
            .delete(id)
            .await
            .map_err(|e| ServiceError::Delete {
                message: format!("could not delete rental {}: {}", id, e),
            })
    }

    /// The rental for the given offer; absence is a GetFailure
    pub async fn get_by_offer(&self, offer: Uuid) -> ServiceResult<Rental> {
        self.repository
            .find_by_offer(offer)
            .await
            .map_err(|e| ServiceError::Get {
                message: format!("could not get rental by offer: {}", e),
            })?
            .ok_or_else(|| ServiceError::Get {
                message: format!("no rental found for offer {}", offer),
            })
    }

    /// The rental created from the given counter-offer; absence is a
    /// GetFailure
    pub async fn get_by_counter_offer(&self, counter_offer: Uuid) -> ServiceResult<Rental> {
        self.repository
            .find_by_counter_offer(counter_offer)
            .await
            .map_err(|e| ServiceError::Get {
                message: format!("could not get rental by counter-offer: {}", e),
            })?
            .ok_or_else(|| ServiceError::Get {
                message: format!("no rental found for counter-offer {}", counter_offer),
            })
    }

    /// All rentals held by the given user
    pub async fn get_all_by_user(&self, user: Uuid) -> ServiceResult<Vec<Rental>> {
        self.repository
            .find_by_user(user)
            .await
            .map_err(|e| ServiceError::Get {
                message: format!("could not get rentals by user: {}", e),
            })
    }

    /// All rentals with `expires >= cutoff`
    pub async fn get_all_by_not_expired(
        &self,
        cutoff: DateTime<Utc>,
    ) -> ServiceResult<Vec<Rental>> {
        self.repository
            .find_not_expired(cutoff)
            .await
            .map_err(|e| ServiceError::Get {
                message: format!("could not get not-expired rentals: {}", e),
            })
    }
}
