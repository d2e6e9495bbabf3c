use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::training::{CreateTrainingRequest, UpdateTrainingRequest};
use crate::error::{Result, StorageError};
use crate::models::Training;

pub struct TrainingRepository<'a> {
    pool: &'a PgPool,
}

/// Logged and attended training counts for one member
#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::FromRow)]
pub struct AttendanceTotals {
    pub total: i64,
    pub attended: i64,
}

impl<'a> TrainingRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<Training>> {
        let trainings = sqlx::query_as::<_, Training>(
            r#"
            SELECT training_id, user_id, coach_id, training_date, title, notes, attended, created_at
            FROM trainings
            WHERE user_id = $1
            ORDER BY training_date DESC, created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(self.pool)
        .await?;

        Ok(trainings)
    }

    pub async fn find_by_id(&self, training_id: Uuid) -> Result<Training> {
        let training = sqlx::query_as::<_, Training>(
            r#"
            SELECT training_id, user_id, coach_id, training_date, title, notes, attended, created_at
            FROM trainings
            WHERE training_id = $1
            "#,
        )
        .bind(training_id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(training)
    }

    /// Number of trainings the member actually attended
    pub async fn count_attended(&self, user_id: Uuid) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*)::bigint FROM trainings WHERE user_id = $1 AND attended",
        )
        .bind(user_id)
        .fetch_one(self.pool)
        .await?;

        Ok(count)
    }

    pub async fn attendance_totals(&self, user_id: Uuid) -> Result<AttendanceTotals> {
        let totals = sqlx::query_as::<_, AttendanceTotals>(
            r#"
            SELECT COUNT(*)::bigint AS total,
                   COUNT(*) FILTER (WHERE attended)::bigint AS attended
            FROM trainings
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_one(self.pool)
        .await?;

        Ok(totals)
    }

    pub async fn create(
        &self,
        user_id: Uuid,
        coach_id: Option<Uuid>,
        req: &CreateTrainingRequest,
    ) -> Result<Training> {
        let training = sqlx::query_as::<_, Training>(
            r#"
            INSERT INTO trainings (user_id, coach_id, training_date, title, notes, attended)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING training_id, user_id, coach_id, training_date, title, notes, attended, created_at
            "#,
        )
        .bind(user_id)
        .bind(coach_id)
        .bind(req.training_date)
        .bind(&req.title)
        .bind(&req.notes)
        .bind(req.attended)
        .fetch_one(self.pool)
        .await
        .map_err(|e| StorageError::from(e).into_constraint("Training"))?;

        Ok(training)
    }

    pub async fn update(
        &self,
        existing: &Training,
        req: &UpdateTrainingRequest,
    ) -> Result<Training> {
        let attended = req.attended.unwrap_or(existing.attended);
        let notes = req.notes.as_ref().or(existing.notes.as_ref());

        let training = sqlx::query_as::<_, Training>(
            r#"
            UPDATE trainings
            SET attended = $2,
                notes = $3
            WHERE training_id = $1
            RETURNING training_id, user_id, coach_id, training_date, title, notes, attended, created_at
            "#,
        )
        .bind(existing.training_id)
        .bind(attended)
        .bind(notes)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(training)
    }

    pub async fn delete(&self, training_id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM trainings WHERE training_id = $1")
            .bind(training_id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}
