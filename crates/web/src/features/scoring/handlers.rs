//! Pure scoring endpoints. Nothing here touches the database, so clients
//! can preview scores with the same rules the server applies.

use axum::{
    Json,
    extract::Query,
    response::{IntoResponse, Response},
};
use storage::{
    dto::{
        grade::{GradeQuery, GradeResponse, GradeTablesResponse, GradeTierResponse},
        scoring::{MetricComparisonResponse, OverallProgressResponse, ScoreSnapshotsRequest},
    },
    services::{
        grading::{ATTENDANCE_GRADE_TABLE, DASHBOARD_GRADE_TABLE, grade_info},
        metric_comparison::compare_metrics,
        progress_scoring::compute_overall_progress,
    },
};
use validator::Validate;

use crate::error::WebError;

#[utoipa::path(
    post,
    path = "/api/scoring/overall-progress",
    request_body = ScoreSnapshotsRequest,
    responses(
        (status = 200, description = "Aggregate progress between two snapshots", body = OverallProgressResponse),
        (status = 400, description = "Validation error")
    ),
    tag = "scoring"
)]
pub async fn overall_progress(
    Json(req): Json<ScoreSnapshotsRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let overall_progress = compute_overall_progress(&req.baseline, &req.current);

    Ok(Json(OverallProgressResponse { overall_progress }).into_response())
}

#[utoipa::path(
    post,
    path = "/api/scoring/comparison",
    request_body = ScoreSnapshotsRequest,
    responses(
        (status = 200, description = "Per-metric comparison in display order", body = Vec<MetricComparisonResponse>),
        (status = 400, description = "Validation error")
    ),
    tag = "scoring"
)]
pub async fn comparison(Json(req): Json<ScoreSnapshotsRequest>) -> Result<Response, WebError> {
    req.validate()?;

    let rows: Vec<MetricComparisonResponse> = compare_metrics(&req.baseline, &req.current)
        .into_iter()
        .map(MetricComparisonResponse::from)
        .collect();

    Ok(Json(rows).into_response())
}

#[utoipa::path(
    get,
    path = "/api/scoring/grade",
    params(GradeQuery),
    responses(
        (status = 200, description = "Grade for a number of attended trainings", body = GradeResponse),
        (status = 400, description = "Invalid query")
    ),
    tag = "scoring"
)]
pub async fn grade(Query(query): Query<GradeQuery>) -> Response {
    Json(GradeResponse::from(grade_info(query.attended))).into_response()
}

#[utoipa::path(
    get,
    path = "/api/scoring/grade-tables",
    responses(
        (status = 200, description = "Both grade ladders", body = GradeTablesResponse)
    ),
    tag = "scoring"
)]
pub async fn grade_tables() -> Response {
    Json(GradeTablesResponse {
        attendance: ATTENDANCE_GRADE_TABLE
            .iter()
            .map(GradeTierResponse::from)
            .collect(),
        dashboard: DASHBOARD_GRADE_TABLE
            .iter()
            .map(GradeTierResponse::from)
            .collect(),
    })
    .into_response()
}
