use axum::{
    Extension, Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::comment::{CommentFilter, CommentResponse, CreateCommentRequest},
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;
use crate::middleware::auth::Caller;

use super::services;

#[utoipa::path(
    get,
    path = "/api/users/{id}/comments",
    params(
        ("id" = Uuid, Path, description = "Member id"),
        CommentFilter
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Coach comments, newest first", body = Vec<CommentResponse>),
        (status = 400, description = "Invalid query parameters"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Not your record")
    ),
    tag = "comments"
)]
pub async fn list_comments(
    State(db): State<Database>,
    Extension(caller): Extension<Caller>,
    Path(id): Path<Uuid>,
    Query(filter): Query<CommentFilter>,
) -> Result<Response, WebError> {
    caller.require_access(id)?;
    filter.validate().map_err(WebError::BadRequest)?;

    let comments = services::list_comments(db.pool(), id, filter.limit).await?;

    let response: Vec<CommentResponse> = comments.into_iter().map(CommentResponse::from).collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    post,
    path = "/api/users/{id}/comments",
    params(
        ("id" = Uuid, Path, description = "Member id")
    ),
    request_body = CreateCommentRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Comment left", body = CommentResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Coach or admin only"),
        (status = 404, description = "Member not found")
    ),
    tag = "comments"
)]
pub async fn create_comment(
    State(db): State<Database>,
    Extension(caller): Extension<Caller>,
    Path(id): Path<Uuid>,
    Json(req): Json<CreateCommentRequest>,
) -> Result<Response, WebError> {
    caller.require_staff()?;
    req.validate()?;

    let comment = services::create_comment(db.pool(), id, caller.user_id(), &req.body).await?;

    Ok((StatusCode::CREATED, Json(CommentResponse::from(comment))).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/comments/{id}",
    params(
        ("id" = Uuid, Path, description = "Comment id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 204, description = "Comment deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Only admins or the authoring coach"),
        (status = 404, description = "Comment not found")
    ),
    tag = "comments"
)]
pub async fn delete_comment(
    State(db): State<Database>,
    Extension(caller): Extension<Caller>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    caller.require_staff()?;

    let comment = services::get_comment(db.pool(), id).await?;
    if !services::may_delete(&caller, &comment) {
        return Err(WebError::Forbidden);
    }

    services::delete_comment(db.pool(), id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
