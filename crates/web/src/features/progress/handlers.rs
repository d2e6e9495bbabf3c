use axum::{
    Extension, Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::{
        common::{PaginatedResponse, PaginationParams},
        progress::{CreateProgressRequest, ProgressSnapshotResponse},
        scoring::{MetricComparisonResponse, OverallProgressResponse},
    },
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;
use crate::middleware::auth::Caller;

use super::services;

#[utoipa::path(
    post,
    path = "/api/users/{id}/progress",
    params(
        ("id" = Uuid, Path, description = "Member id")
    ),
    request_body = CreateProgressRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Snapshot recorded", body = ProgressSnapshotResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Not your record"),
        (status = 404, description = "Member not found")
    ),
    tag = "progress"
)]
pub async fn create_snapshot(
    State(db): State<Database>,
    Extension(caller): Extension<Caller>,
    Path(id): Path<Uuid>,
    Json(req): Json<CreateProgressRequest>,
) -> Result<Response, WebError> {
    caller.require_access(id)?;
    req.validate()?;

    let snapshot = services::append_snapshot(db.pool(), id, &req).await?;

    Ok((
        StatusCode::CREATED,
        Json(ProgressSnapshotResponse::from(snapshot)),
    )
        .into_response())
}

#[utoipa::path(
    get,
    path = "/api/users/{id}/progress",
    params(
        ("id" = Uuid, Path, description = "Member id"),
        PaginationParams
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Snapshots, newest first", body = PaginatedResponse<ProgressSnapshotResponse>),
        (status = 400, description = "Invalid query parameters"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Not your record")
    ),
    tag = "progress"
)]
pub async fn list_snapshots(
    State(db): State<Database>,
    Extension(caller): Extension<Caller>,
    Path(id): Path<Uuid>,
    Query(pagination): Query<PaginationParams>,
) -> Result<Response, WebError> {
    caller.require_access(id)?;
    pagination.validate().map_err(WebError::BadRequest)?;

    let (snapshots, total_items) = services::list_snapshots(db.pool(), id, &pagination).await?;

    let data: Vec<ProgressSnapshotResponse> = snapshots
        .into_iter()
        .map(ProgressSnapshotResponse::from)
        .collect();

    let response = PaginatedResponse::new(
        data,
        pagination.page,
        pagination.page_size,
        total_items,
    );

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/api/users/{id}/progress/latest",
    params(
        ("id" = Uuid, Path, description = "Member id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Most recent snapshot", body = ProgressSnapshotResponse),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Not your record"),
        (status = 404, description = "No snapshots yet")
    ),
    tag = "progress"
)]
pub async fn latest_snapshot(
    State(db): State<Database>,
    Extension(caller): Extension<Caller>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    caller.require_access(id)?;

    let snapshot = services::latest_snapshot(db.pool(), id).await?;

    Ok(Json(ProgressSnapshotResponse::from(snapshot)).into_response())
}

#[utoipa::path(
    get,
    path = "/api/users/{id}/progress/overall",
    params(
        ("id" = Uuid, Path, description = "Member id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Aggregate progress since Point A", body = OverallProgressResponse),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Not your record")
    ),
    tag = "progress"
)]
pub async fn overall_progress(
    State(db): State<Database>,
    Extension(caller): Extension<Caller>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    caller.require_access(id)?;

    let overall_progress = services::overall_progress(db.pool(), id).await?;

    Ok(Json(OverallProgressResponse { overall_progress }).into_response())
}

#[utoipa::path(
    get,
    path = "/api/users/{id}/progress/comparison",
    params(
        ("id" = Uuid, Path, description = "Member id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Point A against the latest snapshot, per metric", body = Vec<MetricComparisonResponse>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Not your record"),
        (status = 404, description = "Point A not recorded yet")
    ),
    tag = "progress"
)]
pub async fn comparison(
    State(db): State<Database>,
    Extension(caller): Extension<Caller>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    caller.require_access(id)?;

    let rows: Vec<MetricComparisonResponse> = services::comparison(db.pool(), id)
        .await?
        .into_iter()
        .map(MetricComparisonResponse::from)
        .collect();

    Ok(Json(rows).into_response())
}
