//! Offer DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use bb_core::domain::entities::offer::Offer;

use super::category::CategoryResponse;

/// Request body for POST /offers
#[derive(Debug, Deserialize, Validate)]
pub struct CreateOfferRequest {
    #[validate(length(min = 1, max = 255))]
    pub offer_name: String,

    #[validate(length(min = 1, max = 255))]
    pub book_title: String,

    #[validate(length(min = 1, max = 16))]
    pub book_release_year: String,

    #[validate(length(min = 1, max = 255))]
    pub book_publisher: String,

    #[serde(default)]
    pub description: String,

    pub expires: DateTime<Utc>,

    #[validate(length(min = 1, max = 128))]
    pub city: String,

    #[validate(length(min = 1, max = 128))]
    pub voivodeship: String,

    pub category_id: Option<Uuid>,

    pub file_id: Option<String>,

    #[serde(default)]
    pub active: bool,
}

/// Request body for PUT /offers/{id}; the id must equal the path id
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateOfferRequest {
    pub id: Uuid,

    #[validate(length(min = 1, max = 255))]
    pub offer_name: String,

    #[validate(length(min = 1, max = 255))]
    pub book_title: String,

    #[validate(length(min = 1, max = 16))]
    pub book_release_year: String,

    #[validate(length(min = 1, max = 255))]
    pub book_publisher: String,

    #[serde(default)]
    pub description: String,

    pub expires: DateTime<Utc>,

    #[validate(length(min = 1, max = 128))]
    pub city: String,

    #[validate(length(min = 1, max = 128))]
    pub voivodeship: String,

    pub category_id: Option<Uuid>,

    pub file_id: Option<String>,

    pub active: bool,
}

/// Optional single-field lookups for GET /offers
#[derive(Debug, Deserialize)]
pub struct OfferQuery {
    pub book_title: Option<String>,
    pub book_publisher: Option<String>,
    pub city: Option<String>,
    pub voivodeship: Option<String>,
    pub owner: Option<Uuid>,
    pub created_after: Option<DateTime<Utc>>,
    pub created_before: Option<DateTime<Utc>>,
    pub not_expired_after: Option<DateTime<Utc>>,
}

/// Public view of an offer
#[derive(Debug, Serialize)]
pub struct OfferResponse {
    pub id: Uuid,
    pub offer_name: String,
    pub book_title: String,
    pub book_release_year: String,
    pub book_publisher: String,
    pub offer_owner: Uuid,
    pub category: Option<CategoryResponse>,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub expires: DateTime<Utc>,
    pub active: bool,
    pub city: String,
    pub voivodeship: String,
    pub file_id: Option<String>,
}

impl From<Offer> for OfferResponse {
    fn from(offer: Offer) -> Self {
        Self {
            id: offer.id.unwrap_or_default(),
            offer_name: offer.offer_name,
            book_title: offer.book_title,
            book_release_year: offer.book_release_year,
            book_publisher: offer.book_publisher,
            offer_owner: offer.offer_owner,
            category: offer.category.map(CategoryResponse::from),
            description: offer.description,
            created_at: offer.created_at,
            expires: offer.expires,
            active: offer.active,
            city: offer.city,
            voivodeship: offer.voivodeship,
            file_id: offer.file_id,
        }
    }
}
