use axum::{
    Extension, Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::user::{
        CreateUserRequest, UpdateUserRequest, UserFilter, UserResponse, UserWithKeyResponse,
    },
    models::Role,
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;
use crate::middleware::auth::Caller;

use super::services;

#[utoipa::path(
    get,
    path = "/api/users",
    params(UserFilter),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "List members", body = Vec<UserResponse>),
        (status = 400, description = "Unknown role filter"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Coach or admin only")
    ),
    tag = "users"
)]
pub async fn list_users(
    State(db): State<Database>,
    Extension(caller): Extension<Caller>,
    Query(filter): Query<UserFilter>,
) -> Result<Response, WebError> {
    caller.require_staff()?;

    let role = filter
        .role
        .as_deref()
        .map(str::parse::<Role>)
        .transpose()
        .map_err(WebError::BadRequest)?;

    let users = services::list_users(db.pool(), role).await?;

    let response: Vec<UserResponse> = users.into_iter().map(UserResponse::from).collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/api/users/me",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "The calling member", body = UserResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Caller is a static admin key without a member record")
    ),
    tag = "users"
)]
pub async fn get_me(
    State(db): State<Database>,
    Extension(caller): Extension<Caller>,
) -> Result<Response, WebError> {
    let user_id = caller.user_id().ok_or(WebError::NotFound)?;

    let user = services::get_user(db.pool(), user_id).await?;

    Ok(Json(UserResponse::from(user)).into_response())
}

#[utoipa::path(
    get,
    path = "/api/users/{id}",
    params(
        ("id" = Uuid, Path, description = "Member id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Member found", body = UserResponse),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Not your record"),
        (status = 404, description = "Member not found")
    ),
    tag = "users"
)]
pub async fn get_user(
    State(db): State<Database>,
    Extension(caller): Extension<Caller>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    caller.require_access(id)?;

    let user = services::get_user(db.pool(), id).await?;

    Ok(Json(UserResponse::from(user)).into_response())
}

#[utoipa::path(
    post,
    path = "/api/users",
    request_body = CreateUserRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Member created, access key included", body = UserWithKeyResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Admin only"),
        (status = 409, description = "Email already registered")
    ),
    tag = "users"
)]
pub async fn create_user(
    State(db): State<Database>,
    Extension(caller): Extension<Caller>,
    Json(req): Json<CreateUserRequest>,
) -> Result<Response, WebError> {
    caller.require_admin()?;
    req.validate()?;

    let user = services::create_user(db.pool(), &req).await?;
    tracing::info!(user_id = %user.user_id, role = %user.role, "Member created");

    Ok((StatusCode::CREATED, Json(UserWithKeyResponse::from(user))).into_response())
}

#[utoipa::path(
    put,
    path = "/api/users/{id}",
    params(
        ("id" = Uuid, Path, description = "Member id")
    ),
    request_body = UpdateUserRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Member updated", body = UserResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Only admins edit other members or change roles"),
        (status = 404, description = "Member not found")
    ),
    tag = "users"
)]
pub async fn update_user(
    State(db): State<Database>,
    Extension(caller): Extension<Caller>,
    Path(id): Path<Uuid>,
    Json(update_req): Json<UpdateUserRequest>,
) -> Result<Response, WebError> {
    let is_self = caller.user_id() == Some(id);
    if !is_self && !caller.is_admin() {
        return Err(WebError::Forbidden);
    }
    if update_req.role.is_some() && !caller.is_admin() {
        return Err(WebError::Forbidden);
    }
    update_req.validate()?;

    let updated = services::update_user(db.pool(), id, &update_req).await?;

    Ok(Json(UserResponse::from(updated)).into_response())
}

#[utoipa::path(
    post,
    path = "/api/users/{id}/access-key",
    params(
        ("id" = Uuid, Path, description = "Member id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "New access key issued", body = UserWithKeyResponse),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Admin only"),
        (status = 404, description = "Member not found")
    ),
    tag = "users"
)]
pub async fn rotate_access_key(
    State(db): State<Database>,
    Extension(caller): Extension<Caller>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    caller.require_admin()?;

    let user = services::rotate_access_key(db.pool(), id).await?;
    tracing::info!(user_id = %id, "Access key rotated");

    Ok(Json(UserWithKeyResponse::from(user)).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    params(
        ("id" = Uuid, Path, description = "Member id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 204, description = "Member and all their records deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Admin only"),
        (status = 404, description = "Member not found")
    ),
    tag = "users"
)]
pub async fn delete_user(
    State(db): State<Database>,
    Extension(caller): Extension<Caller>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    caller.require_admin()?;

    services::delete_user(db.pool(), id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
