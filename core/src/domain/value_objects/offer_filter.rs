//! Fuzzy offer filter: a query by a partially-populated template where unset
//! fields act as wildcards and set fields apply a per-field comparison
//! strategy.
//!
//! The match-mode table, applied field by field and combined with logical
//! AND:
//!
//! | field             | match mode                   |
//! |-------------------|------------------------------|
//! | city              | case-insensitive substring   |
//! | voivodeship       | case-insensitive substring   |
//! | offer_name        | case-insensitive prefix      |
//! | book_title        | case-insensitive substring   |
//! | book_publisher    | case-insensitive substring   |
//! | book_release_year | case-sensitive prefix        |
//! | category_name     | case-insensitive substring   |
//! | active            | equality                     |
//! | offer_owner       | equality                     |
//!
//! [`OfferFilter::matches`] is the single definition of these semantics: the
//! in-memory repository applies it directly and the MySQL repository mirrors
//! it with `LIKE` clauses.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::offer::Offer;

/// A partially-populated offer template; `None` fields match everything
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OfferFilter {
    pub city: Option<String>,
    pub voivodeship: Option<String>,
    pub offer_name: Option<String>,
    pub book_title: Option<String>,
    pub book_publisher: Option<String>,
    pub book_release_year: Option<String>,
    pub category_name: Option<String>,
    pub active: Option<bool>,
    pub offer_owner: Option<Uuid>,
}

impl OfferFilter {
    /// Creates an empty filter that matches every offer
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    pub fn with_voivodeship(mut self, voivodeship: impl Into<String>) -> Self {
        self.voivodeship = Some(voivodeship.into());
        self
    }

    pub fn with_offer_name(mut self, offer_name: impl Into<String>) -> Self {
        self.offer_name = Some(offer_name.into());
        self
    }

    pub fn with_book_title(mut self, book_title: impl Into<String>) -> Self {
        self.book_title = Some(book_title.into());
        self
    }

    pub fn with_book_publisher(mut self, book_publisher: impl Into<String>) -> Self {
        self.book_publisher = Some(book_publisher.into());
        self
    }

    pub fn with_book_release_year(mut self, year: impl Into<String>) -> Self {
        self.book_release_year = Some(year.into());
        self
    }

    pub fn with_category_name(mut self, category_name: impl Into<String>) -> Self {
        self.category_name = Some(category_name.into());
        self
    }

    pub fn with_active(mut self, active: bool) -> Self {
        self.active = Some(active);
        self
    }

    pub fn with_offer_owner(mut self, owner: Uuid) -> Self {
        self.offer_owner = Some(owner);
        self
    }

    /// Whether no field is set, i.e. the filter matches every offer
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Applies the match-mode table to a single offer
    pub fn matches(&self, offer: &Offer) -> bool {
        if let Some(city) = &self.city {
            if !contains_ignore_case(&offer.city, city) {
                return false;
            }
        }
        if let Some(voivodeship) = &self.voivodeship {
            if !contains_ignore_case(&offer.voivodeship, voivodeship) {
                return false;
            }
        }
        if let Some(offer_name) = &self.offer_name {
            if !starts_with_ignore_case(&offer.offer_name, offer_name) {
                return false;
            }
        }
        if let Some(book_title) = &self.book_title {
            if !contains_ignore_case(&offer.book_title, book_title) {
                return false;
            }
        }
        if let Some(book_publisher) = &self.book_publisher {
            if !contains_ignore_case(&offer.book_publisher, book_publisher) {
                return false;
            }
        }
        if let Some(year) = &self.book_release_year {
            if !offer.book_release_year.starts_with(year.as_str()) {
                return false;
            }
        }
        if let Some(category_name) = &self.category_name {
            match &offer.category {
                Some(category) => {
                    if !contains_ignore_case(&category.name, category_name) {
                        return false;
                    }
                }
                None => return false,
            }
        }
        if let Some(active) = self.active {
            if offer.active != active {
                return false;
            }
        }
        if let Some(owner) = self.offer_owner {
            if offer.offer_owner != owner {
                return false;
            }
        }
        true
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

fn starts_with_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().starts_with(&needle.to_lowercase())
}
