use sqlx::PgPool;
use storage::{
    dto::point_a::UpsertPointARequest,
    error::{Result, StorageError},
    models::PointA,
    repository::{point_a::PointARepository, user::UserRepository},
};
use uuid::Uuid;

pub async fn get_point_a(pool: &PgPool, user_id: Uuid) -> Result<PointA> {
    let repo = PointARepository::new(pool);
    repo.find_by_user(user_id)
        .await?
        .ok_or(StorageError::NotFound)
}

/// Create or replace the member's baseline
pub async fn upsert_point_a(
    pool: &PgPool,
    user_id: Uuid,
    request: &UpsertPointARequest,
) -> Result<PointA> {
    UserRepository::new(pool).find_by_id(user_id).await?;

    let repo = PointARepository::new(pool);
    repo.upsert(user_id, request).await
}
