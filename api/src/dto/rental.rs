//! Rental DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use bb_core::domain::entities::rental::Rental;

/// Request body for POST /rentals: accept a counter-offer.
///
/// The rental window defaults to the counter-offer's expiry when no explicit
/// `expires` is given.
#[derive(Debug, Deserialize)]
pub struct CreateRentalRequest {
    pub counter_offer: Uuid,
    pub expires: Option<DateTime<Utc>>,
}

/// Optional cutoff lookup for GET /rentals
#[derive(Debug, Deserialize)]
pub struct RentalQuery {
    pub not_expired_after: Option<DateTime<Utc>>,
}

/// Public view of a rental
#[derive(Debug, Serialize)]
pub struct RentalResponse {
    pub id: Uuid,
    pub offer: Uuid,
    pub user: Uuid,
    pub counter_offer: Option<Uuid>,
    pub start_date: DateTime<Utc>,
    pub expires: DateTime<Utc>,
}

impl From<Rental> for RentalResponse {
    fn from(rental: Rental) -> Self {
        Self {
            id: rental.id.unwrap_or_default(),
            offer: rental.offer,
            user: rental.user,
            counter_offer: rental.counter_offer,
            start_date: rental.start_date,
            expires: rental.expires,
        }
    }
}
