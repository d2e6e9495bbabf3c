use sqlx::PgPool;
use storage::{
    dto::{common::PaginationParams, progress::CreateProgressRequest},
    error::{Result, StorageError},
    models::ProgressSnapshot,
    repository::{point_a::PointARepository, progress::ProgressRepository, user::UserRepository},
    services::{
        metric_comparison::{MetricComparison, compare_metrics},
        progress_scoring::compute_overall_progress,
    },
};
use uuid::Uuid;

pub async fn append_snapshot(
    pool: &PgPool,
    user_id: Uuid,
    request: &CreateProgressRequest,
) -> Result<ProgressSnapshot> {
    UserRepository::new(pool).find_by_id(user_id).await?;

    let repo = ProgressRepository::new(pool);
    repo.append(user_id, request).await
}

/// One page of snapshots, newest first, with the member's total count
pub async fn list_snapshots(
    pool: &PgPool,
    user_id: Uuid,
    pagination: &PaginationParams,
) -> Result<(Vec<ProgressSnapshot>, i64)> {
    let repo = ProgressRepository::new(pool);

    let snapshots = repo
        .list_for_user(user_id, pagination.limit(), pagination.offset())
        .await?;
    let total = repo.count_for_user(user_id).await?;

    Ok((snapshots, total))
}

pub async fn latest_snapshot(pool: &PgPool, user_id: Uuid) -> Result<ProgressSnapshot> {
    let repo = ProgressRepository::new(pool);
    repo.latest_for_user(user_id)
        .await?
        .ok_or(StorageError::NotFound)
}

/// Point A against the latest snapshot. Zero until both exist.
pub async fn overall_progress(pool: &PgPool, user_id: Uuid) -> Result<f64> {
    let point_a = PointARepository::new(pool).find_by_user(user_id).await?;
    let latest = ProgressRepository::new(pool).latest_for_user(user_id).await?;

    let progress = match (point_a, latest) {
        (Some(point_a), Some(latest)) => {
            compute_overall_progress(&point_a.metrics, &latest.metrics)
        }
        _ => 0.0,
    };

    Ok(progress)
}

/// Per-metric view of Point A against the latest snapshot.
///
/// Fails with `NotFound` without a Point A. A member with no snapshots yet
/// gets every row back with `has_data == false`.
pub async fn comparison(pool: &PgPool, user_id: Uuid) -> Result<Vec<MetricComparison>> {
    let point_a = PointARepository::new(pool)
        .find_by_user(user_id)
        .await?
        .ok_or(StorageError::NotFound)?;

    let current = ProgressRepository::new(pool)
        .latest_for_user(user_id)
        .await?
        .map(|snapshot| snapshot.metrics)
        .unwrap_or_default();

    Ok(compare_metrics(&point_a.metrics, &current))
}
