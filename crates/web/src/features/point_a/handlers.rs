use axum::{
    Extension, Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::point_a::{PointAResponse, UpsertPointARequest},
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;
use crate::middleware::auth::Caller;

use super::services;

#[utoipa::path(
    get,
    path = "/api/users/{id}/point-a",
    params(
        ("id" = Uuid, Path, description = "Member id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Baseline snapshot", body = PointAResponse),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Not your record"),
        (status = 404, description = "Point A not recorded yet")
    ),
    tag = "point-a"
)]
pub async fn get_point_a(
    State(db): State<Database>,
    Extension(caller): Extension<Caller>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    caller.require_access(id)?;

    let point_a = services::get_point_a(db.pool(), id).await?;

    Ok(Json(PointAResponse::from(point_a)).into_response())
}

#[utoipa::path(
    put,
    path = "/api/users/{id}/point-a",
    params(
        ("id" = Uuid, Path, description = "Member id")
    ),
    request_body = UpsertPointARequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Baseline stored", body = PointAResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Not your record"),
        (status = 404, description = "Member not found")
    ),
    tag = "point-a"
)]
pub async fn upsert_point_a(
    State(db): State<Database>,
    Extension(caller): Extension<Caller>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpsertPointARequest>,
) -> Result<Response, WebError> {
    caller.require_access(id)?;
    req.validate()?;

    let point_a = services::upsert_point_a(db.pool(), id, &req).await?;
    tracing::info!(user_id = %id, "Point A stored");

    Ok(Json(PointAResponse::from(point_a)).into_response())
}
