//! MySQL implementation of the RentalRepository trait.
//!
//! The `rentals` table carries a UNIQUE KEY on `offer_id`; the insert-time
//! existence check below surfaces the duplicate as a typed error instead of
//! a bare constraint violation.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::mysql::MySqlRow;
use sqlx::MySqlPool;
use uuid::Uuid;

use bb_core::domain::entities::rental::Rental;
use bb_core::errors::RepositoryError;
use bb_core::repositories::RentalRepository;

use super::{column, parse_uuid};

const SELECT_RENTAL: &str = r#"
    SELECT id, offer_id, user_id, counter_offer_id, start_date, expires
    FROM rentals
"#;

/// MySQL implementation of RentalRepository
pub struct MySqlRentalRepository {
    pool: MySqlPool,
}

impl MySqlRentalRepository {
    /// Create a new MySQL rental repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_rental(row: &MySqlRow) -> Result<Rental, RepositoryError> {
        let id: String = column(row, "id")?;
        let offer: String = column(row, "offer_id")?;
        let user: String = column(row, "user_id")?;
        let counter_offer: Option<String> = column(row, "counter_offer_id")?;

        Ok(Rental {
            id: Some(parse_uuid(&id, "id")?),
            offer: parse_uuid(&offer, "offer_id")?,
            user: parse_uuid(&user, "user_id")?,
            counter_offer: counter_offer
                .map(|c| parse_uuid(&c, "counter_offer_id"))
                .transpose()?,
            start_date: column::<DateTime<Utc>>(row, "start_date")?,
            expires: column::<DateTime<Utc>>(row, "expires")?,
        })
    }

    fn rows_to_rentals(rows: Vec<MySqlRow>) -> Result<Vec<Rental>, RepositoryError> {
        rows.iter().map(Self::row_to_rental).collect()
    }
}

#[async_trait]
impl RentalRepository for MySqlRentalRepository {
    async fn create(&self, mut rental: Rental) -> Result<Rental, RepositoryError> {
        // At most one rental per offer
        let existing = sqlx::query(
            "SELECT EXISTS(SELECT 1 FROM rentals WHERE offer_id = ?) AS present",
        )
        .bind(rental.offer.to_string())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| RepositoryError::Storage {
            message: format!("failed to check rental existence: {}", e),
        })?;
        let present: i8 = column(&existing, "present")?;
        if present == 1 {
            return Err(RepositoryError::Duplicate {
                field: "offer".to_string(),
            });
        }

        let id = Uuid::new_v4();
        rental.id = Some(id);

        sqlx::query(
            r#"
            INSERT INTO rentals (id, offer_id, user_id, counter_offer_id, start_date, expires)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(id.to_string())
        .bind(rental.offer.to_string())
        .bind(rental.user.to_string())
        .bind(rental.counter_offer.map(|c| c.to_string()))
        .bind(rental.start_date)
        .bind(rental.expires)
        .execute(&self.pool)
        .await
        .map_err(|e| RepositoryError::Storage {
            message: format!("failed to insert rental: {}", e),
        })?;

        Ok(rental)
    }

    async fn save(&self, rental: Rental) -> Result<Rental, RepositoryError> {
        let id = rental.id.ok_or_else(|| RepositoryError::Storage {
            message: "cannot save a rental without an id".to_string(),
        })?;

        sqlx::query(
            r#"
            INSERT INTO rentals (id, offer_id, user_id, counter_offer_id, start_date, expires)
            VALUES (?, ?, ?, ?, ?, ?)
            ON DUPLICATE KEY UPDATE
                offer_id = VALUES(offer_id),
                user_id = VALUES(user_id),
                counter_offer_id = VALUES(counter_offer_id),
                start_date = VALUES(start_date),
                expires = VALUES(expires)
            "#,
        )
        .bind(id.to_string())
        .bind(rental.offer.to_string())
        .bind(rental.user.to_string())
        .bind(rental.counter_offer.map(|c| c.to_string()))
        .bind(rental.start_date)
        .bind(rental.expires)
        .execute(&self.pool)
        .await
        .map_err(|e| RepositoryError::Storage {
            message: format!("failed to save rental: {}", e),
        })?;

        Ok(rental)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Rental>, RepositoryError> {
        let query = format!("{} WHERE id = ? LIMIT 1", SELECT_RENTAL);
        let row = sqlx::query(&query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage {
                message: format!("failed to find rental by id: {}", e),
            })?;

        row.map(|r| Self::row_to_rental(&r)).transpose()
    }

    async fn find_all(&self) -> Result<Vec<Rental>, RepositoryError> {
        let rows = sqlx::query(SELECT_RENTAL)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage {
                message: format!("failed to list rentals: {}", e),
            })?;
        Self::rows_to_rentals(rows)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM rentals WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage {
                message: format!("failed to delete rental: {}", e),
            })?;
        Ok(())
    }

    async fn find_by_offer(&self, offer: Uuid) -> Result<Option<Rental>, RepositoryError> {
        let query = format!("{} WHERE offer_id = ? LIMIT 1", SELECT_RENTAL);
        let row = sqlx::query(&query)
            .bind(offer.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage {
                message: format!("failed to find rental by offer: {}", e),
            })?;

        row.map(|r| Self::row_to_rental(&r)).transpose()
    }

    async fn find_by_counter_offer(
        &self,
        counter_offer: Uuid,
    ) -> Result<Option<Rental>, RepositoryError> {
        let query = format!("{} WHERE counter_offer_id = ? LIMIT 1", SELECT_RENTAL);
        let row = sqlx::query(&query)
            .bind(counter_offer.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage {
                message: format!("failed to find rental by counter-offer: {}", e),
            })?;

        row.map(|r| Self::row_to_rental(&r)).transpose()
    }

    async fn find_by_user(&self, user: Uuid) -> Result<Vec<Rental>, RepositoryError> {
        let query = format!("{} WHERE user_id = ?", SELECT_RENTAL);
        let rows = sqlx::query(&query)
            .bind(user.to_string())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage {
                message: format!("failed to query rentals by user: {}", e),
            })?;
        Self::rows_to_rentals(rows)
    }

    async fn find_not_expired(
        &self,
        cutoff: DateTime<Utc>,
    ) -> Result<Vec<Rental>, RepositoryError> {
        let query = format!("{} WHERE expires >= ?", SELECT_RENTAL);
        let rows = sqlx::query(&query)
            .bind(cutoff)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage {
                message: format!("failed to query not-expired rentals: {}", e),
            })?;
        Self::rows_to_rentals(rows)
    }
}
