use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::{
        dashboard::{AttendanceResponse, DashboardResponse},
        grade::GradeResponse,
        training::{CreateTrainingRequest, TrainingResponse, UpdateTrainingRequest},
    },
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;
use crate::middleware::auth::Caller;

use super::services;

#[utoipa::path(
    post,
    path = "/api/users/{id}/trainings",
    params(
        ("id" = Uuid, Path, description = "Member id")
    ),
    request_body = CreateTrainingRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Training logged", body = TrainingResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Coach or admin only"),
        (status = 404, description = "Member not found")
    ),
    tag = "trainings"
)]
pub async fn log_training(
    State(db): State<Database>,
    Extension(caller): Extension<Caller>,
    Path(id): Path<Uuid>,
    Json(req): Json<CreateTrainingRequest>,
) -> Result<Response, WebError> {
    caller.require_staff()?;
    req.validate()?;

    let training = services::log_training(db.pool(), id, caller.user_id(), &req).await?;
    tracing::info!(
        user_id = %id,
        training_id = %training.training_id,
        attended = training.attended,
        "Training logged"
    );

    Ok((StatusCode::CREATED, Json(TrainingResponse::from(training))).into_response())
}

#[utoipa::path(
    get,
    path = "/api/users/{id}/trainings",
    params(
        ("id" = Uuid, Path, description = "Member id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Trainings, newest first", body = Vec<TrainingResponse>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Not your record")
    ),
    tag = "trainings"
)]
pub async fn list_trainings(
    State(db): State<Database>,
    Extension(caller): Extension<Caller>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    caller.require_access(id)?;

    let trainings = services::list_trainings(db.pool(), id).await?;

    let response: Vec<TrainingResponse> =
        trainings.into_iter().map(TrainingResponse::from).collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    patch,
    path = "/api/trainings/{id}",
    params(
        ("id" = Uuid, Path, description = "Training id")
    ),
    request_body = UpdateTrainingRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Training updated", body = TrainingResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Coach or admin only"),
        (status = 404, description = "Training not found")
    ),
    tag = "trainings"
)]
pub async fn update_training(
    State(db): State<Database>,
    Extension(caller): Extension<Caller>,
    Path(id): Path<Uuid>,
    Json(update_req): Json<UpdateTrainingRequest>,
) -> Result<Response, WebError> {
    caller.require_staff()?;
    update_req.validate()?;

    let updated = services::update_training(db.pool(), id, &update_req).await?;

    Ok(Json(TrainingResponse::from(updated)).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/trainings/{id}",
    params(
        ("id" = Uuid, Path, description = "Training id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 204, description = "Training deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Coach or admin only"),
        (status = 404, description = "Training not found")
    ),
    tag = "trainings"
)]
pub async fn delete_training(
    State(db): State<Database>,
    Extension(caller): Extension<Caller>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    caller.require_staff()?;

    services::delete_training(db.pool(), id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}

#[utoipa::path(
    get,
    path = "/api/users/{id}/grade",
    params(
        ("id" = Uuid, Path, description = "Member id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Current grade and progress to the next one", body = GradeResponse),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Not your record"),
        (status = 404, description = "Member not found")
    ),
    tag = "grades"
)]
pub async fn get_grade(
    State(db): State<Database>,
    Extension(caller): Extension<Caller>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    caller.require_access(id)?;

    let grade = services::grade(db.pool(), id).await?;

    Ok(Json(GradeResponse::from(grade)).into_response())
}

#[utoipa::path(
    get,
    path = "/api/users/{id}/attendance",
    params(
        ("id" = Uuid, Path, description = "Member id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Attendance statistics", body = AttendanceResponse),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Not your record"),
        (status = 404, description = "Member not found")
    ),
    tag = "grades"
)]
pub async fn get_attendance(
    State(db): State<Database>,
    Extension(caller): Extension<Caller>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    caller.require_access(id)?;

    let attendance = services::attendance(db.pool(), id).await?;

    Ok(Json(attendance).into_response())
}

#[utoipa::path(
    get,
    path = "/api/users/{id}/dashboard",
    params(
        ("id" = Uuid, Path, description = "Member id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Member dashboard", body = DashboardResponse),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Not your record"),
        (status = 404, description = "Member not found")
    ),
    tag = "grades"
)]
pub async fn get_dashboard(
    State(db): State<Database>,
    Extension(caller): Extension<Caller>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    caller.require_access(id)?;

    let dashboard = services::dashboard(db.pool(), id).await?;

    Ok(Json(dashboard).into_response())
}
