use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::user::{CreateUserRequest, UpdateUserRequest};
use crate::error::{Result, StorageError};
use crate::models::User;

pub struct UserRepository<'a> {
    pool: &'a PgPool,
}

/// Opaque bearer token handed to a member
fn generate_access_key() -> String {
    Uuid::new_v4().simple().to_string()
}

impl<'a> UserRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List members, optionally restricted to one role
    pub async fn list(&self, role: Option<&str>) -> Result<Vec<User>> {
        let users = sqlx::query_as::<_, User>(
            r#"
            SELECT user_id, display_name, email, role, access_key, created_at
            FROM users
            WHERE ($1::text IS NULL OR role = $1)
            ORDER BY display_name, created_at
            "#,
        )
        .bind(role)
        .fetch_all(self.pool)
        .await?;

        Ok(users)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT user_id, display_name, email, role, access_key, created_at
            FROM users
            WHERE user_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(user)
    }

    /// Resolve a bearer token to its owner, `None` if no member holds it
    pub async fn find_by_access_key(&self, access_key: &str) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT user_id, display_name, email, role, access_key, created_at
            FROM users
            WHERE access_key = $1
            "#,
        )
        .bind(access_key)
        .fetch_optional(self.pool)
        .await?;

        Ok(user)
    }

    pub async fn create(&self, req: &CreateUserRequest) -> Result<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (display_name, email, role, access_key)
            VALUES ($1, $2, $3, $4)
            RETURNING user_id, display_name, email, role, access_key, created_at
            "#,
        )
        .bind(&req.display_name)
        .bind(&req.email)
        .bind(&req.role)
        .bind(generate_access_key())
        .fetch_one(self.pool)
        .await
        .map_err(|e| StorageError::from(e).into_constraint("User with this email"))?;

        Ok(user)
    }

    /// Update an existing member; absent fields keep their stored value
    pub async fn update(&self, existing: &User, req: &UpdateUserRequest) -> Result<User> {
        let display_name = req.display_name.as_ref().unwrap_or(&existing.display_name);
        let email = req.email.as_ref().or(existing.email.as_ref());
        let role = req.role.as_ref().unwrap_or(&existing.role);

        let user = sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET display_name = $2,
                email = $3,
                role = $4
            WHERE user_id = $1
            RETURNING user_id, display_name, email, role, access_key, created_at
            "#,
        )
        .bind(existing.user_id)
        .bind(display_name)
        .bind(email)
        .bind(role)
        .fetch_optional(self.pool)
        .await
        .map_err(|e| StorageError::from(e).into_constraint("User with this email"))?
        .ok_or(StorageError::NotFound)?;

        Ok(user)
    }

    /// Replace a member's access key, invalidating the old one
    pub async fn rotate_access_key(&self, id: Uuid) -> Result<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET access_key = $2
            WHERE user_id = $1
            RETURNING user_id, display_name, email, role, access_key, created_at
            "#,
        )
        .bind(id)
        .bind(generate_access_key())
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(user)
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM users WHERE user_id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_keys_are_unique_and_opaque() {
        let first = generate_access_key();
        let second = generate_access_key();

        assert_eq!(first.len(), 32);
        assert!(first.chars().all(|c| c.is_ascii_hexdigit()));
        assert_ne!(first, second);
    }
}
