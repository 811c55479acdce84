//! MySQL implementation of the UserRepository trait.
//!
//! Roles live in a `user_roles` join table and are loaded with each user,
//! mirroring how the document store resolved role references on load.

use async_trait::async_trait;
use sqlx::mysql::MySqlRow;
use sqlx::MySqlPool;
use uuid::Uuid;

use bb_core::domain::entities::role::Role;
use bb_core::domain::entities::user::User;
use bb_core::errors::RepositoryError;
use bb_core::repositories::UserRepository;

use super::{column, parse_uuid};

const SELECT_USER: &str = r#"
    SELECT id, name, last_name, login, password_hash, email, enabled
    FROM users
"#;

/// MySQL implementation of UserRepository
pub struct MySqlUserRepository {
    pool: MySqlPool,
}

impl MySqlUserRepository {
    /// Create a new MySQL user repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    async fn load_roles(&self, user_id: Uuid) -> Result<Vec<Role>, RepositoryError> {
        let rows = sqlx::query(
            r#"
            SELECT r.id, r.name
            FROM roles r
            JOIN user_roles ur ON ur.role_id = r.id
            WHERE ur.user_id = ?
            "#,
        )
        .bind(user_id.to_string())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepositoryError::Storage {
            message: format!("failed to load roles: {}", e),
        })?;

        rows.iter()
            .map(|row| {
                let id: String = column(row, "id")?;
                Ok(Role {
                    id: Some(parse_uuid(&id, "role id")?),
                    name: column(row, "name")?,
                })
            })
            .collect()
    }

    async fn row_to_user(&self, row: &MySqlRow) -> Result<User, RepositoryError> {
        let id: String = column(row, "id")?;
        let user_id = parse_uuid(&id, "id")?;

        Ok(User {
            id: Some(user_id),
            name: column(row, "name")?,
            last_name: column(row, "last_name")?,
            login: column(row, "login")?,
            password_hash: column(row, "password_hash")?,
            email: column(row, "email")?,
            roles: self.load_roles(user_id).await?,
            enabled: column(row, "enabled")?,
        })
    }

    async fn replace_roles(&self, user: &User, user_id: Uuid) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM user_roles WHERE user_id = ?")
            .bind(user_id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage {
                message: format!("failed to clear roles: {}", e),
            })?;

        for role in &user.roles {
            let role_id = role.id.ok_or_else(|| RepositoryError::Storage {
                message: format!("role '{}' has no id", role.name),
            })?;
            sqlx::query("INSERT INTO user_roles (user_id, role_id) VALUES (?, ?)")
                .bind(user_id.to_string())
                .bind(role_id.to_string())
                .execute(&self.pool)
                .await
                .map_err(|e| RepositoryError::Storage {
                    message: format!("failed to assign role: {}", e),
                })?;
        }
        Ok(())
    }

    async fn exists_where(&self, condition: &str, value: &str) -> Result<bool, RepositoryError> {
        let query = format!(
            "SELECT EXISTS(SELECT 1 FROM users WHERE {}) AS present",
            condition
        );
        let row = sqlx::query(&query)
            .bind(value)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage {
                message: format!("failed to check user existence: {}", e),
            })?;
        let present: i8 = column(&row, "present")?;
        Ok(present == 1)
    }
}

#[async_trait]
impl UserRepository for MySqlUserRepository {
    async fn create(&self, mut user: User) -> Result<User, RepositoryError> {
        if self.exists_where("login = ?", &user.login).await? {
            return Err(RepositoryError::Duplicate {
                field: "login".to_string(),
            });
        }
        if self.exists_where("email = ?", &user.email).await? {
            return Err(RepositoryError::Duplicate {
                field: "email".to_string(),
            });
        }

        let id = Uuid::new_v4();
        user.id = Some(id);

        sqlx::query(
            r#"
            INSERT INTO users (id, name, last_name, login, password_hash, email, enabled)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(id.to_string())
        .bind(&user.name)
        .bind(&user.last_name)
        .bind(&user.login)
        .bind(&user.password_hash)
        .bind(&user.email)
        .bind(user.enabled)
        .execute(&self.pool)
        .await
        .map_err(|e| RepositoryError::Storage {
            message: format!("failed to insert user: {}", e),
        })?;

        self.replace_roles(&user, id).await?;
        Ok(user)
    }

    async fn save(&self, user: User) -> Result<User, RepositoryError> {
        let id = user.id.ok_or_else(|| RepositoryError::Storage {
            message: "cannot save a user without an id".to_string(),
        })?;

        sqlx::query(
            r#"
            INSERT INTO users (id, name, last_name, login, password_hash, email, enabled)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            ON DUPLICATE KEY UPDATE
                name = VALUES(name),
                last_name = VALUES(last_name),
                login = VALUES(login),
                password_hash = VALUES(password_hash),
                email = VALUES(email),
                enabled = VALUES(enabled)
            "#,
        )
        .bind(id.to_string())
        .bind(&user.name)
        .bind(&user.last_name)
        .bind(&user.login)
        .bind(&user.password_hash)
        .bind(&user.email)
        .bind(user.enabled)
        .execute(&self.pool)
        .await
        .map_err(|e| RepositoryError::Storage {
            message: format!("failed to save user: {}", e),
        })?;

        self.replace_roles(&user, id).await?;
        Ok(user)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, RepositoryError> {
        let query = format!("{} WHERE id = ? LIMIT 1", SELECT_USER);
        let row = sqlx::query(&query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage {
                message: format!("failed to find user by id: {}", e),
            })?;

        match row {
            Some(row) => Ok(Some(self.row_to_user(&row).await?)),
            None => Ok(None),
        }
    }

    async fn find_by_login(&self, login: &str) -> Result<Option<User>, RepositoryError> {
        let query = format!("{} WHERE login = ? LIMIT 1", SELECT_USER);
        let row = sqlx::query(&query)
            .bind(login)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage {
                message: format!("failed to find user by login: {}", e),
            })?;

        match row {
            Some(row) => Ok(Some(self.row_to_user(&row).await?)),
            None => Ok(None),
        }
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError> {
        let query = format!("{} WHERE email = ? LIMIT 1", SELECT_USER);
        let row = sqlx::query(&query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage {
                message: format!("failed to find user by email: {}", e),
            })?;

        match row {
            Some(row) => Ok(Some(self.row_to_user(&row).await?)),
            None => Ok(None),
        }
    }

    async fn find_all(&self) -> Result<Vec<User>, RepositoryError> {
        let rows = sqlx::query(SELECT_USER)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage {
                message: format!("failed to list users: {}", e),
            })?;

        let mut users = Vec::with_capacity(rows.len());
        for row in &rows {
            users.push(self.row_to_user(row).await?);
        }
        Ok(users)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM user_roles WHERE user_id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage {
                message: format!("failed to delete user roles: {}", e),
            })?;

        sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage {
                message: format!("failed to delete user: {}", e),
            })?;
        Ok(())
    }
}
