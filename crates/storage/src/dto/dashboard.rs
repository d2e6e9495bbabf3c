use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::comment::CommentResponse;
use super::grade::GradeResponse;
use super::user::UserResponse;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceResponse {
    pub total_trainings: i64,
    pub attended: i64,
    pub missed: i64,
    /// Attended share of logged trainings, one decimal
    pub attendance_rate: f64,
    pub grade: GradeResponse,
}

/// Everything the member dashboard renders in one round trip
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResponse {
    pub user: UserResponse,
    /// Grade on the dashboard ladder
    pub grade: GradeResponse,
    pub overall_progress: f64,
    pub has_point_a: bool,
    pub attendance: AttendanceResponse,
    pub latest_comments: Vec<CommentResponse>,
}
