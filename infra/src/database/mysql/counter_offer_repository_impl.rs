//! MySQL implementation of the CounterOfferRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::mysql::MySqlRow;
use sqlx::MySqlPool;
use uuid::Uuid;

use bb_core::domain::entities::counter_offer::CounterOffer;
use bb_core::errors::RepositoryError;
use bb_core::repositories::CounterOfferRepository;

use super::{column, parse_uuid};

const SELECT_COUNTER_OFFER: &str = r#"
    SELECT id, offer_id, user_id, created_at, expires
    FROM counter_offers
"#;

/// MySQL implementation of CounterOfferRepository
pub struct MySqlCounterOfferRepository {
    pool: MySqlPool,
}

impl MySqlCounterOfferRepository {
    /// Create a new MySQL counter-offer repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_counter_offer(row: &MySqlRow) -> Result<CounterOffer, RepositoryError> {
        let id: String = column(row, "id")?;
        let offer: String = column(row, "offer_id")?;
        let user: String = column(row, "user_id")?;

        Ok(CounterOffer {
            id: Some(parse_uuid(&id, "id")?),
            offer: parse_uuid(&offer, "offer_id")?,
            user: parse_uuid(&user, "user_id")?,
            created_at: column::<DateTime<Utc>>(row, "created_at")?,
            expires: column::<DateTime<Utc>>(row, "expires")?,
        })
    }

    fn rows_to_counter_offers(rows: Vec<MySqlRow>) -> Result<Vec<CounterOffer>, RepositoryError> {
        rows.iter().map(Self::row_to_counter_offer).collect()
    }
}

#[async_trait]
impl CounterOfferRepository for MySqlCounterOfferRepository {
    async fn create(
        &self,
        mut counter_offer: CounterOffer,
    ) -> Result<CounterOffer, RepositoryError> {
        let id = Uuid::new_v4();
        counter_offer.id = Some(id);

        sqlx::query(
            r#"
            INSERT INTO counter_offers (id, offer_id, user_id, created_at, expires)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(id.to_string())
        .bind(counter_offer.offer.to_string())
        .bind(counter_offer.user.to_string())
        .bind(counter_offer.created_at)
        .bind(counter_offer.expires)
        .execute(&self.pool)
        .await
        .map_err(|e| RepositoryError::Storage {
            message: format!("failed to insert counter-offer: {}", e),
        })?;

        Ok(counter_offer)
    }

    async fn save(&self, counter_offer: CounterOffer) -> Result<CounterOffer, RepositoryError> {
        let id = counter_offer.id.ok_or_else(|| RepositoryError::Storage {
            message: "cannot save a counter-offer without an id".to_string(),
        })?;

        sqlx::query(
            r#"
            INSERT INTO counter_offers (id, offer_id, user_id, created_at, expires)
            VALUES (?, ?, ?, ?, ?)
            ON DUPLICATE KEY UPDATE
                offer_id = VALUES(offer_id),
                user_id = VALUES(user_id),
                created_at = VALUES(created_at),
                expires = VALUES(expires)
            "#,
        )
        .bind(id.to_string())
        .bind(counter_offer.offer.to_string())
        .bind(counter_offer.user.to_string())
        .bind(counter_offer.created_at)
        .bind(counter_offer.expires)
        .execute(&self.pool)
        .await
        .map_err(|e| RepositoryError::Storage {
            message: format!("failed to save counter-offer: {}", e),
        })?;

        Ok(counter_offer)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<CounterOffer>, RepositoryError> {
        let query = format!("{} WHERE id = ? LIMIT 1", SELECT_COUNTER_OFFER);
        let row = sqlx::query(&query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage {
                message: format!("failed to find counter-offer by id: {}", e),
            })?;

        row.map(|r| Self::row_to_counter_offer(&r)).transpose()
    }

    async fn find_all(&self) -> Result<Vec<CounterOffer>, RepositoryError> {
        let rows = sqlx::query(SELECT_COUNTER_OFFER)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage {
                message: format!("failed to list counter-offers: {}", e),
            })?;
        Self::rows_to_counter_offers(rows)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM counter_offers WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage {
                message: format!("failed to delete counter-offer: {}", e),
            })?;
        Ok(())
    }

    async fn find_by_offer(&self, offer: Uuid) -> Result<Vec<CounterOffer>, RepositoryError> {
        let query = format!("{} WHERE offer_id = ?", SELECT_COUNTER_OFFER);
        let rows = sqlx::query(&query)
            .bind(offer.to_string())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage {
                message: format!("failed to query counter-offers by offer: {}", e),
            })?;
        Self::rows_to_counter_offers(rows)
    }

    async fn find_by_user(&self, user: Uuid) -> Result<Vec<CounterOffer>, RepositoryError> {
        let query = format!("{} WHERE user_id = ?", SELECT_COUNTER_OFFER);
        let rows = sqlx::query(&query)
            .bind(user.to_string())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage {
                message: format!("failed to query counter-offers by user: {}", e),
            })?;
        Self::rows_to_counter_offers(rows)
    }

    async fn find_expires_between(
        &self,
        after: DateTime<Utc>,
        before: DateTime<Utc>,
    ) -> Result<Vec<CounterOffer>, RepositoryError> {
        let query = format!(
            "{} WHERE expires >= ? AND expires <= ?",
            SELECT_COUNTER_OFFER
        );
        let rows = sqlx::query(&query)
            .bind(after)
            .bind(before)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage {
                message: format!("failed to query counter-offers between dates: {}", e),
            })?;
        Self::rows_to_counter_offers(rows)
    }
}
