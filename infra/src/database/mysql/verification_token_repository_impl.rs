//! MySQL implementation of the VerificationTokenRepository trait.
//!
//! Only the SHA-256 hash of a token is ever stored; lookups go through the
//! unique `token_hash` column.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::mysql::MySqlRow;
use sqlx::MySqlPool;
use uuid::Uuid;

use bb_core::domain::entities::verification_token::VerificationToken;
use bb_core::errors::RepositoryError;
use bb_core::repositories::VerificationTokenRepository;

use super::{column, parse_uuid};

const SELECT_TOKEN: &str = r#"
    SELECT id, token_hash, user_id, expires
    FROM verification_tokens
"#;

/// MySQL implementation of VerificationTokenRepository
pub struct MySqlVerificationTokenRepository {
    pool: MySqlPool,
}

impl MySqlVerificationTokenRepository {
    /// Create a new MySQL verification token repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_token(row: &MySqlRow) -> Result<VerificationToken, RepositoryError> {
        let id: String = column(row, "id")?;
        let user: String = column(row, "user_id")?;

        Ok(VerificationToken {
            id: Some(parse_uuid(&id, "id")?),
            token_hash: column(row, "token_hash")?,
            user: parse_uuid(&user, "user_id")?,
            expires: column::<DateTime<Utc>>(row, "expires")?,
        })
    }
}

#[async_trait]
impl VerificationTokenRepository for MySqlVerificationTokenRepository {
    async fn create(
        &self,
        mut token: VerificationToken,
    ) -> Result<VerificationToken, RepositoryError> {
        let id = Uuid::new_v4();
        token.id = Some(id);

        sqlx::query(
            r#"
            INSERT INTO verification_tokens (id, token_hash, user_id, expires)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(id.to_string())
        .bind(&token.token_hash)
        .bind(token.user.to_string())
        .bind(token.expires)
        .execute(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                RepositoryError::Duplicate {
                    field: "token".to_string(),
                }
            }
            _ => RepositoryError::Storage {
                message: format!("failed to insert verification token: {}", e),
            },
        })?;

        Ok(token)
    }

    async fn find_by_token_hash(
        &self,
        token_hash: &str,
    ) -> Result<Option<VerificationToken>, RepositoryError> {
        let query = format!("{} WHERE token_hash = ? LIMIT 1", SELECT_TOKEN);
        let row = sqlx::query(&query)
            .bind(token_hash)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage {
                message: format!("failed to find verification token: {}", e),
            })?;

        row.map(|r| Self::row_to_token(&r)).transpose()
    }

    async fn find_expired(
        &self,
        now: DateTime<Utc>,
    ) -> Result<Vec<VerificationToken>, RepositoryError> {
        let query = format!("{} WHERE expires < ?", SELECT_TOKEN);
        let rows = sqlx::query(&query)
            .bind(now)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage {
                message: format!("failed to query expired verification tokens: {}", e),
            })?;

        rows.iter().map(Self::row_to_token).collect()
    }

    async fn find_all(&self) -> Result<Vec<VerificationToken>, RepositoryError> {
        let rows = sqlx::query(SELECT_TOKEN)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage {
                message: format!("failed to list verification tokens: {}", e),
            })?;

        rows.iter().map(Self::row_to_token).collect()
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM verification_tokens WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage {
                message: format!("failed to delete verification token: {}", e),
            })?;
        Ok(())
    }
}
