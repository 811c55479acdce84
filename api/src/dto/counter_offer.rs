//! Counter-offer DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use bb_core::domain::entities::counter_offer::CounterOffer;

/// Request body for POST /counter-offers
#[derive(Debug, Deserialize)]
pub struct CreateCounterOfferRequest {
    /// The offer the proposal targets
    pub offer: Uuid,
    pub expires: DateTime<Utc>,
}

/// Request body for PUT /counter-offers/{id}; only the expiry is mutable
#[derive(Debug, Deserialize)]
pub struct UpdateCounterOfferRequest {
    pub id: Uuid,
    pub expires: DateTime<Utc>,
}

/// Optional expiry-range lookup for GET /counter-offers
#[derive(Debug, Deserialize)]
pub struct CounterOfferQuery {
    pub expires_after: Option<DateTime<Utc>>,
    pub expires_before: Option<DateTime<Utc>>,
}

/// Public view of a counter-offer
#[derive(Debug, Serialize)]
pub struct CounterOfferResponse {
    pub id: Uuid,
    pub offer: Uuid,
    pub user: Uuid,
    pub created_at: DateTime<Utc>,
    pub expires: DateTime<Utc>,
}

impl From<CounterOffer> for CounterOfferResponse {
    fn from(counter_offer: CounterOffer) -> Self {
        Self {
            id: counter_offer.id.unwrap_or_default(),
            offer: counter_offer.offer,
            user: counter_offer.user,
            created_at: counter_offer.created_at,
            expires: counter_offer.expires,
        }
    }
}
