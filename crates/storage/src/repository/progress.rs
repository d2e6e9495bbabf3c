use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::progress::CreateProgressRequest;
use crate::error::{Result, StorageError};
use crate::models::ProgressSnapshot;

pub struct ProgressRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ProgressRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Most recent snapshot, which is what "current" means for scoring
    pub async fn latest_for_user(&self, user_id: Uuid) -> Result<Option<ProgressSnapshot>> {
        let snapshot = sqlx::query_as::<_, ProgressSnapshot>(
            r#"
            SELECT snapshot_id, user_id,
                   energy_level, stress_level, sleep_quality, nutrition_quality,
                   emotions_level, intimacy_level,
                   weight, body_fat_percentage, plank_time, punches_per_minute,
                   note, created_at
            FROM progress_snapshots
            WHERE user_id = $1
            ORDER BY created_at DESC, snapshot_id DESC
            LIMIT 1
            "#,
        )
        .bind(user_id)
        .fetch_optional(self.pool)
        .await?;

        Ok(snapshot)
    }

    /// Snapshots newest first
    pub async fn list_for_user(
        &self,
        user_id: Uuid,
        limit: u32,
        offset: i64,
    ) -> Result<Vec<ProgressSnapshot>> {
        let snapshots = sqlx::query_as::<_, ProgressSnapshot>(
            r#"
            SELECT snapshot_id, user_id,
                   energy_level, stress_level, sleep_quality, nutrition_quality,
                   emotions_level, intimacy_level,
                   weight, body_fat_percentage, plank_time, punches_per_minute,
                   note, created_at
            FROM progress_snapshots
            WHERE user_id = $1
            ORDER BY created_at DESC, snapshot_id DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(user_id)
        .bind(i64::from(limit))
        .bind(offset)
        .fetch_all(self.pool)
        .await?;

        Ok(snapshots)
    }

    pub async fn count_for_user(&self, user_id: Uuid) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*)::bigint FROM progress_snapshots WHERE user_id = $1",
        )
        .bind(user_id)
        .fetch_one(self.pool)
        .await?;

        Ok(count)
    }

    pub async fn append(
        &self,
        user_id: Uuid,
        req: &CreateProgressRequest,
    ) -> Result<ProgressSnapshot> {
        let m = &req.metrics;

        let snapshot = sqlx::query_as::<_, ProgressSnapshot>(
            r#"
            INSERT INTO progress_snapshots (
                user_id,
                energy_level, stress_level, sleep_quality, nutrition_quality,
                emotions_level, intimacy_level,
                weight, body_fat_percentage, plank_time, punches_per_minute,
                note
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            RETURNING snapshot_id, user_id,
                      energy_level, stress_level, sleep_quality, nutrition_quality,
                      emotions_level, intimacy_level,
                      weight, body_fat_percentage, plank_time, punches_per_minute,
                      note, created_at
            "#,
        )
        .bind(user_id)
        .bind(m.energy_level)
        .bind(m.stress_level)
        .bind(m.sleep_quality)
        .bind(m.nutrition_quality)
        .bind(m.emotions_level)
        .bind(m.intimacy_level)
        .bind(m.weight)
        .bind(m.body_fat_percentage)
        .bind(m.plank_time)
        .bind(m.punches_per_minute)
        .bind(&req.note)
        .fetch_one(self.pool)
        .await
        .map_err(|e| StorageError::from(e).into_constraint("Progress snapshot"))?;

        Ok(snapshot)
    }
}
