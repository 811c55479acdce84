//! MySQL implementation of the OfferRepository trait.
//!
//! Offers join their category on load so the entity carries the resolved
//! `Category` value. The fuzzy filter is translated into `LIKE` clauses
//! reproducing the match-mode table defined on `OfferFilter`.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::mysql::MySqlRow;
use sqlx::{MySql, MySqlPool, QueryBuilder};
use uuid::Uuid;

use bb_core::domain::entities::category::Category;
use bb_core::domain::entities::offer::Offer;
use bb_core::domain::value_objects::offer_filter::OfferFilter;
use bb_core::errors::RepositoryError;
use bb_core::repositories::OfferRepository;

use super::{column, parse_uuid};

const SELECT_OFFER: &str = r#"
    SELECT o.id, o.book_title, o.book_release_year, o.book_publisher, o.offer_name,
           o.offer_owner, o.description, o.created_at, o.expires, o.active,
           o.city, o.voivodeship, o.file_id,
           c.id AS category_id, c.name AS category_name
    FROM offers o
    LEFT JOIN categories c ON c.id = o.category_id
"#;

/// MySQL implementation of OfferRepository
pub struct MySqlOfferRepository {
    pool: MySqlPool,
}

impl MySqlOfferRepository {
    /// Create a new MySQL offer repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert a joined database row to an Offer entity
    fn row_to_offer(row: &MySqlRow) -> Result<Offer, RepositoryError> {
        let id: String = column(row, "id")?;
        let owner: String = column(row, "offer_owner")?;

        let category_id: Option<String> = column(row, "category_id")?;
        let category_name: Option<String> = column(row, "category_name")?;
        let category = match (category_id, category_name) {
            (Some(category_id), Some(name)) => Some(Category {
                id: Some(parse_uuid(&category_id, "category_id")?),
                name,
            }),
            _ => None,
        };

        Ok(Offer {
            id: Some(parse_uuid(&id, "id")?),
            book_title: column(row, "book_title")?,
            book_release_year: column(row, "book_release_year")?,
            book_publisher: column(row, "book_publisher")?,
            offer_name: column(row, "offer_name")?,
            offer_owner: parse_uuid(&owner, "offer_owner")?,
            category,
            description: column(row, "description")?,
            created_at: column::<DateTime<Utc>>(row, "created_at")?,
            expires: column::<DateTime<Utc>>(row, "expires")?,
            active: column(row, "active")?,
            city: column(row, "city")?,
            voivodeship: column(row, "voivodeship")?,
            file_id: column(row, "file_id")?,
        })
    }

    fn rows_to_offers(rows: Vec<MySqlRow>) -> Result<Vec<Offer>, RepositoryError> {
        rows.iter().map(Self::row_to_offer).collect()
    }

    async fn fetch_where(
        &self,
        condition: &str,
        bind: &str,
    ) -> Result<Vec<Offer>, RepositoryError> {
        let query = format!("{} WHERE {}", SELECT_OFFER, condition);
        let rows = sqlx::query(&query)
            .bind(bind)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage {
                message: format!("failed to query offers: {}", e),
            })?;
        Self::rows_to_offers(rows)
    }
}

#[async_trait]
impl OfferRepository for MySqlOfferRepository {
    async fn create(&self, mut offer: Offer) -> Result<Offer, RepositoryError> {
        let id = Uuid::new_v4();
        offer.id = Some(id);

        let query = r#"
            INSERT INTO offers (
                id, book_title, book_release_year, book_publisher, offer_name,
                offer_owner, category_id, description, created_at, expires,
                active, city, voivodeship, file_id
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(id.to_string())
            .bind(&offer.book_title)
            .bind(&offer.book_release_year)
            .bind(&offer.book_publisher)
            .bind(&offer.offer_name)
            .bind(offer.offer_owner.to_string())
            .bind(
                offer
                    .category
                    .as_ref()
                    .and_then(|c| c.id)
                    .map(|id| id.to_string()),
            )
            .bind(&offer.description)
            .bind(offer.created_at)
            .bind(offer.expires)
            .bind(offer.active)
            .bind(&offer.city)
            .bind(&offer.voivodeship)
            .bind(&offer.file_id)
            .execute(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage {
                message: format!("failed to insert offer: {}", e),
            })?;

        Ok(offer)
    }

    async fn save(&self, offer: Offer) -> Result<Offer, RepositoryError> {
        let id = offer.id.ok_or_else(|| RepositoryError::Storage {
            message: "cannot save an offer without an id".to_string(),
        })?;

        let query = r#"
            INSERT INTO offers (
                id, book_title, book_release_year, book_publisher, offer_name,
                offer_owner, category_id, description, created_at, expires,
                active, city, voivodeship, file_id
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            ON DUPLICATE KEY UPDATE
                book_title = VALUES(book_title),
                book_release_year = VALUES(book_release_year),
                book_publisher = VALUES(book_publisher),
                offer_name = VALUES(offer_name),
                offer_owner = VALUES(offer_owner),
                category_id = VALUES(category_id),
                description = VALUES(description),
                created_at = VALUES(created_at),
                expires = VALUES(expires),
                active = VALUES(active),
                city = VALUES(city),
                voivodeship = VALUES(voivodeship),
                file_id = VALUES(file_id)
        "#;

        sqlx::query(query)
            .bind(id.to_string())
            .bind(&offer.book_title)
            .bind(&offer.book_release_year)
            .bind(&offer.book_publisher)
            .bind(&offer.offer_name)
            .bind(offer.offer_owner.to_string())
            .bind(
                offer
                    .category
                    .as_ref()
                    .and_then(|c| c.id)
                    .map(|id| id.to_string()),
            )
            .bind(&offer.description)
            .bind(offer.created_at)
            .bind(offer.expires)
            .bind(offer.active)
            .bind(&offer.city)
            .bind(&offer.voivodeship)
            .bind(&offer.file_id)
            .execute(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage {
                message: format!("failed to save offer: {}", e),
            })?;

        Ok(offer)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Offer>, RepositoryError> {
        let query = format!("{} WHERE o.id = ? LIMIT 1", SELECT_OFFER);
        let row = sqlx::query(&query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage {
                message: format!("failed to find offer by id: {}", e),
            })?;

        row.map(|r| Self::row_to_offer(&r)).transpose()
    }

    async fn find_all(&self) -> Result<Vec<Offer>, RepositoryError> {
        let rows = sqlx::query(SELECT_OFFER)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage {
                message: format!("failed to list offers: {}", e),
            })?;
        Self::rows_to_offers(rows)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        // Deleting a missing id affects zero rows and is not an error
        sqlx::query("DELETE FROM offers WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage {
                message: format!("failed to delete offer: {}", e),
            })?;
        Ok(())
    }

    async fn find_by_book_title(&self, title: &str) -> Result<Vec<Offer>, RepositoryError> {
        self.fetch_where("o.book_title = ?", title).await
    }

    async fn find_by_book_publisher(
        &self,
        publisher: &str,
    ) -> Result<Vec<Offer>, RepositoryError> {
        self.fetch_where("o.book_publisher = ?", publisher).await
    }

    async fn find_by_city(&self, city: &str) -> Result<Vec<Offer>, RepositoryError> {
        self.fetch_where("o.city = ?", city).await
    }

    async fn find_by_voivodeship(
        &self,
        voivodeship: &str,
    ) -> Result<Vec<Offer>, RepositoryError> {
        self.fetch_where("o.voivodeship = ?", voivodeship).await
    }

    async fn find_by_owner(&self, owner: Uuid) -> Result<Vec<Offer>, RepositoryError> {
        self.fetch_where("o.offer_owner = ?", &owner.to_string())
            .await
    }

    async fn find_created_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Offer>, RepositoryError> {
        let query = format!(
            "{} WHERE o.created_at >= ? AND o.created_at <= ?",
            SELECT_OFFER
        );
        let rows = sqlx::query(&query)
            .bind(start)
            .bind(end)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage {
                message: format!("failed to query offers between dates: {}", e),
            })?;
        Self::rows_to_offers(rows)
    }

    async fn find_not_expired(
        &self,
        cutoff: DateTime<Utc>,
    ) -> Result<Vec<Offer>, RepositoryError> {
        let query = format!("{} WHERE o.expires >= ?", SELECT_OFFER);
        let rows = sqlx::query(&query)
            .bind(cutoff)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage {
                message: format!("failed to query not-expired offers: {}", e),
            })?;
        Self::rows_to_offers(rows)
    }

    async fn find_by_filter(&self, filter: &OfferFilter) -> Result<Vec<Offer>, RepositoryError> {
        // Mirror of OfferFilter::matches: unset fields are wildcards, set
        // fields AND together with their per-field match mode.
        let mut builder: QueryBuilder<MySql> =
            QueryBuilder::new(format!("{} WHERE 1 = 1", SELECT_OFFER));

        if let Some(city) = &filter.city {
            builder
                .push(" AND LOWER(o.city) LIKE ")
                .push_bind(contains_pattern(city));
        }
        if let Some(voivodeship) = &filter.voivodeship {
            builder
                .push(" AND LOWER(o.voivodeship) LIKE ")
                .push_bind(contains_pattern(voivodeship));
        }
        if let Some(offer_name) = &filter.offer_name {
            builder
                .push(" AND LOWER(o.offer_name) LIKE ")
                .push_bind(prefix_pattern(offer_name));
        }
        if let Some(book_title) = &filter.book_title {
            builder
                .push(" AND LOWER(o.book_title) LIKE ")
                .push_bind(contains_pattern(book_title));
        }
        if let Some(book_publisher) = &filter.book_publisher {
            builder
                .push(" AND LOWER(o.book_publisher) LIKE ")
                .push_bind(contains_pattern(book_publisher));
        }
        if let Some(year) = &filter.book_release_year {
            // Case-sensitive prefix, unlike every other text field
            builder
                .push(" AND o.book_release_year LIKE BINARY ")
                .push_bind(format!("{}%", year));
        }
        if let Some(category_name) = &filter.category_name {
            builder
                .push(" AND LOWER(c.name) LIKE ")
                .push_bind(contains_pattern(category_name));
        }
        if let Some(active) = filter.active {
            builder.push(" AND o.active = ").push_bind(active);
        }
        if let Some(owner) = filter.offer_owner {
            builder
                .push(" AND o.offer_owner = ")
                .push_bind(owner.to_string());
        }

        let rows = builder
            .build()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage {
                message: format!("failed to query offers by filter: {}", e),
            })?;
        Self::rows_to_offers(rows)
    }
}

fn contains_pattern(needle: &str) -> String {
    format!("%{}%", needle.to_lowercase())
}

fn prefix_pattern(needle: &str) -> String {
    format!("{}%", needle.to_lowercase())
}
