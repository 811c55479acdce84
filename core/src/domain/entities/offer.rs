//! Offer entity: a lending/rental listing created by a user for a book.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::category::Category;

/// A book-lending listing.
///
/// `offer_owner` is set at creation and immutable afterwards (the controller
/// layer rejects attempts to reassign it). `active` defaults to `false` until
/// explicitly activated. `expires >= created_at` is expected but not enforced
/// here. The category is carried as the loaded value, not a bare id, so the
/// filter can match on its name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Offer {
    /// Store-assigned identifier; `None` until persisted
    pub id: Option<Uuid>,

    /// Title of the offered book
    pub book_title: String,

    /// Release year, kept textual to support prefix search
    pub book_release_year: String,

    /// Publisher of the offered book
    pub book_publisher: String,

    /// Display name of the offer
    pub offer_name: String,

    /// Owning user; immutable after creation
    pub offer_owner: Uuid,

    /// Optional classification
    pub category: Option<Category>,

    /// Free-form description
    pub description: String,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Expiry timestamp
    pub expires: DateTime<Utc>,

    /// Whether the offer is visible to other users
    pub active: bool,

    /// City where the book is available
    pub city: String,

    /// Voivodeship (administrative region) where the book is available
    pub voivodeship: String,

    /// Reference to a stored attachment, if any
    pub file_id: Option<String>,
}

impl Offer {
    /// Creates a new, inactive, not-yet-persisted offer owned by `offer_owner`
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        offer_name: impl Into<String>,
        book_title: impl Into<String>,
        book_release_year: impl Into<String>,
        book_publisher: impl Into<String>,
        offer_owner: Uuid,
        description: impl Into<String>,
        expires: DateTime<Utc>,
        city: impl Into<String>,
        voivodeship: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            book_title: book_title.into(),
            book_release_year: book_release_year.into(),
            book_publisher: book_publisher.into(),
            offer_name: offer_name.into(),
            offer_owner,
            category: None,
            description: description.into(),
            created_at: Utc::now(),
            expires,
            active: false,
            city: city.into(),
            voivodeship: voivodeship.into(),
            file_id: None,
        }
    }

    /// Attaches a classification
    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    /// Attaches a stored file reference
    pub fn with_file(mut self, file_id: impl Into<String>) -> Self {
        self.file_id = Some(file_id.into());
        self
    }

    /// Makes the offer visible to other users
    pub fn activate(&mut self) {
        self.active = true;
    }

    /// Hides the offer
    pub fn deactivate(&mut self) {
        self.active = false;
    }

    /// Whether the offer is past its expiry at the given instant
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires < now
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn sample_offer() -> Offer {
        Offer::new(
            "Wiedzmin w dobrym stanie",
            "Wiedzmin",
            "1993",
            "SuperNowa",
            Uuid::new_v4(),
            "Lekko zuzyty egzemplarz",
            Utc::now() + Duration::days(14),
            "Lodz",
            "lodzkie",
        )
    }

    #[test]
    fn test_new_offer_is_inactive() {
        let offer = sample_offer();
        assert_eq!(offer.id, None);
        assert!(!offer.active);
        assert!(offer.category.is_none());
        assert!(offer.file_id.is_none());
    }

    #[test]
    fn test_activation() {
        let mut offer = sample_offer();
        offer.activate();
        assert!(offer.active);
        offer.deactivate();
        assert!(!offer.active);
    }

    #[test]
    fn test_is_expired() {
        let mut offer = sample_offer();
        assert!(!offer.is_expired(Utc::now()));
        offer.expires = Utc::now() - Duration::days(1);
        assert!(offer.is_expired(Utc::now()));
    }

    #[test]
    fn test_with_category_and_file() {
        let offer = sample_offer()
            .with_category(Category::new("Fantasy"))
            .with_file("file-123");
        assert_eq!(offer.category.unwrap().name, "Fantasy");
        assert_eq!(offer.file_id.unwrap(), "file-123");
    }
}
