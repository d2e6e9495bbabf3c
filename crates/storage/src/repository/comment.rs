use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{Result, StorageError};
use crate::models::CoachComment;

pub struct CommentRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> CommentRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Comments left for a member, newest first
    pub async fn list_for_user(&self, user_id: Uuid, limit: u32) -> Result<Vec<CoachComment>> {
        let comments = sqlx::query_as::<_, CoachComment>(
            r#"
            SELECT comment_id, user_id, coach_id, body, created_at
            FROM coach_comments
            WHERE user_id = $1
            ORDER BY created_at DESC, comment_id DESC
            LIMIT $2
            "#,
        )
        .bind(user_id)
        .bind(i64::from(limit))
        .fetch_all(self.pool)
        .await?;

        Ok(comments)
    }

    pub async fn find_by_id(&self, comment_id: Uuid) -> Result<CoachComment> {
        let comment = sqlx::query_as::<_, CoachComment>(
            r#"
            SELECT comment_id, user_id, coach_id, body, created_at
            FROM coach_comments
            WHERE comment_id = $1
            "#,
        )
        .bind(comment_id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(comment)
    }

    pub async fn create(
        &self,
        user_id: Uuid,
        coach_id: Option<Uuid>,
        body: &str,
    ) -> Result<CoachComment> {
        let comment = sqlx::query_as::<_, CoachComment>(
            r#"
            INSERT INTO coach_comments (user_id, coach_id, body)
            VALUES ($1, $2, $3)
            RETURNING comment_id, user_id, coach_id, body, created_at
            "#,
        )
        .bind(user_id)
        .bind(coach_id)
        .bind(body)
        .fetch_one(self.pool)
        .await
        .map_err(|e| StorageError::from(e).into_constraint("Comment"))?;

        Ok(comment)
    }

    pub async fn delete(&self, comment_id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM coach_comments WHERE comment_id = $1")
            .bind(comment_id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}
