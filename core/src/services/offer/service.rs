//! Offer lifecycle service implementation.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::entities::offer::Offer;
use crate::domain::value_objects::offer_filter::OfferFilter;
use crate::errors::{ServiceError, ServiceResult};
use crate::repositories::OfferRepository;

/// Service governing creation, modification, filtering, and deletion of
/// offers.
///
/// Every storage failure is wrapped into one of the four service failure
/// kinds with a message naming the failed operation. An empty result set is
/// never an error.
pub struct OfferService<R: OfferRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: OfferRepository + ?Sized> OfferService<R> {
    /// Create a new offer service
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Get a single offer by id; a missing offer is a GetFailure
    pub async fn get_by_id(&self, id: Uuid) -> ServiceResult<Offer> {
        self.repository
            .find_by_id(id)
            .await
            .map_err(|e| ServiceError::Get {
                message: format!("could not get offer {}: {}", id, e),
            })?
            .ok_or_else(|| ServiceError::Get {
                message: format!("offer {} not found", id),
            })
    }

    /// Unordered full scan
    pub async fn get_all(&self) -> ServiceResult<Vec<Offer>> {
        self.repository
            .find_all()
            .await
            .map_err(|e| ServiceError::Get {
                message: format!("could not get offers: {}", e),
            })
    }

    /// Insert a new offer; the store assigns the id
    pub async fn add(&self, offer: Offer) -> ServiceResult<Offer> {
        self.repository
            .create(offer)
            .await
            .map_err(|e| ServiceError::Add {
                message: format!("could not add offer: {}", e),
            })
    }

    /// Upsert an offer by id.
    ///
    /// The id must be present; this is checked before any store call.
    pub async fn modify(&self, offer: Offer) -> ServiceResult<Offer> {
        if offer.id.is_none() {
            return Err(ServiceError::Modify {
                message: "offer id is required for modify".to_string(),
            });
        }
        self.repository
            .save(offer)
            .await
            .map_err(|e| ServiceError::Modify {
                message: format!("could not modify offer: {}", e),
            })
    }

    /// Delete an offer by id; deleting a missing id is not an error
    pub async fn delete(&self, id: Uuid) -> ServiceResult<()> {
        self.repository
            .delete(id)
            .await
            .map_err(|e| ServiceError::Delete {
                message: format!("could not delete offer {}: {}", id, e),
            })
    }

    /// All offers with exactly the given book title
    pub async fn get_all_by_book_title(&self, title: &str) -> ServiceResult<Vec<Offer>> {
        self.repository
            .find_by_book_title(title)
            .await
            .map_err(|e| ServiceError::Get {
                message: format!("could not get offers by book title: {}", e),
            })
    }

    /// All offers with exactly the given book publisher
    pub async fn get_all_by_book_publisher(&self, publisher: &str) -> ServiceResult<Vec<Offer>> {
        self.repository
            .find_by_book_publisher(publisher)
            .await
            .map_err(|e| ServiceError::Get {
                message: format!("could not get offers by book publisher: {}", e),
            })
    }

    /// All offers located in exactly the given city
    pub async fn get_all_by_city(&self, city: &str) -> ServiceResult<Vec<Offer>> {
        self.repository
            .find_by_city(city)
            .await
            .map_err(|e| ServiceError::Get {
                message: format!("could not get offers by city: {}", e),
            })
    }

    /// All offers located in exactly the given voivodeship
    pub async fn get_all_by_voivodeship(&self, voivodeship: &str) -> ServiceResult<Vec<Offer>> {
        self.repository
            .find_by_voivodeship(voivodeship)
            .await
            .map_err(|e| ServiceError::Get {
                message: format!("could not get offers by voivodeship: {}", e),
            })
    }

    /// All offers owned by the given user
    pub async fn get_all_by_offer_owner(&self, owner: Uuid) -> ServiceResult<Vec<Offer>> {
        self.repository
            .find_by_owner(owner)
            .await
            .map_err(|e| ServiceError::Get {
                message: format!("could not get offers by owner: {}", e),
            })
    }

    /// All offers created within the closed interval `[start, end]`
    pub async fn get_all_between_dates(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> ServiceResult<Vec<Offer>> {
        self.repository
            .find_created_between(start, end)
            .await
            .map_err(|e| ServiceError::Get {
                message: format!("could not get offers between dates: {}", e),
            })
    }

    /// All offers with `expires >= cutoff`
    pub async fn get_all_not_expired(&self, cutoff: DateTime<Utc>) -> ServiceResult<Vec<Offer>> {
        self.repository
            .find_not_expired(cutoff)
            .await
            .map_err(|e| ServiceError::Get {
                message: format!("could not get not-expired offers: {}", e),
            })
    }

    /// All offers matching the fuzzy filter template
    pub async fn get_by_filter(&self, filter: &OfferFilter) -> ServiceResult<Vec<Offer>> {
        self.repository
            .find_by_filter(filter)
            .await
            .map_err(|e| ServiceError::Get {
                message: format!("could not get offers by filter: {}", e),
            })
    }
}
