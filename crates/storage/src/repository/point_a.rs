use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::point_a::UpsertPointARequest;
use crate::error::{Result, StorageError};
use crate::models::PointA;

pub struct PointARepository<'a> {
    pool: &'a PgPool,
}

impl<'a> PointARepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_user(&self, user_id: Uuid) -> Result<Option<PointA>> {
        let point_a = sqlx::query_as::<_, PointA>(
            r#"
            SELECT user_id,
                   energy_level, stress_level, sleep_quality, nutrition_quality,
                   emotions_level, intimacy_level,
                   weight, body_fat_percentage, plank_time, punches_per_minute,
                   goal, created_at, updated_at
            FROM point_a
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(self.pool)
        .await?;

        Ok(point_a)
    }

    /// Insert or fully replace the member's baseline
    pub async fn upsert(&self, user_id: Uuid, req: &UpsertPointARequest) -> Result<PointA> {
        let m = &req.metrics;

        let point_a = sqlx::query_as::<_, PointA>(
            r#"
            INSERT INTO point_a (
                user_id,
                energy_level, stress_level, sleep_quality, nutrition_quality,
                emotions_level, intimacy_level,
                weight, body_fat_percentage, plank_time, punches_per_minute,
                goal
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            ON CONFLICT (user_id)
            DO UPDATE SET
                energy_level = EXCLUDED.energy_level,
                stress_level = EXCLUDED.stress_level,
                sleep_quality = EXCLUDED.sleep_quality,
                nutrition_quality = EXCLUDED.nutrition_quality,
                emotions_level = EXCLUDED.emotions_level,
                intimacy_level = EXCLUDED.intimacy_level,
                weight = EXCLUDED.weight,
                body_fat_percentage = EXCLUDED.body_fat_percentage,
                plank_time = EXCLUDED.plank_time,
                punches_per_minute = EXCLUDED.punches_per_minute,
                goal = EXCLUDED.goal,
                updated_at = CURRENT_TIMESTAMP
            RETURNING user_id,
                      energy_level, stress_level, sleep_quality, nutrition_quality,
                      emotions_level, intimacy_level,
                      weight, body_fat_percentage, plank_time, punches_per_minute,
                      goal, created_at, updated_at
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
        .bind(&req.goal)
        .fetch_one(self.pool)
        .await
        .map_err(|e| StorageError::from(e).into_constraint("Point A"))?;

        Ok(point_a)
    }
}
