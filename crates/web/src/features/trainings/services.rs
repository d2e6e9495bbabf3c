use sqlx::PgPool;
use storage::{
    dto::{
        comment::CommentResponse,
        dashboard::{AttendanceResponse, DashboardResponse},
        grade::GradeResponse,
        training::{CreateTrainingRequest, UpdateTrainingRequest},
        user::UserResponse,
    },
    error::Result,
    models::Training,
    repository::{
        comment::CommentRepository,
        point_a::PointARepository,
        training::{AttendanceTotals, TrainingRepository},
        user::UserRepository,
    },
    services::grading::{
        GradeInfo, attendance_count, attendance_rate, dashboard_grade_info, grade_info,
    },
};
use uuid::Uuid;

use crate::features::progress::services::overall_progress;

/// Comments shown on the dashboard
const DASHBOARD_COMMENT_COUNT: u32 = 3;

pub async fn log_training(
    pool: &PgPool,
    user_id: Uuid,
    coach_id: Option<Uuid>,
    request: &CreateTrainingRequest,
) -> Result<Training> {
    UserRepository::new(pool).find_by_id(user_id).await?;

    let repo = TrainingRepository::new(pool);
    repo.create(user_id, coach_id, request).await
}

pub async fn list_trainings(pool: &PgPool, user_id: Uuid) -> Result<Vec<Training>> {
    let repo = TrainingRepository::new(pool);
    repo.list_for_user(user_id).await
}

pub async fn update_training(
    pool: &PgPool,
    training_id: Uuid,
    request: &UpdateTrainingRequest,
) -> Result<Training> {
    let repo = TrainingRepository::new(pool);

    let existing = repo.find_by_id(training_id).await?;
    repo.update(&existing, request).await
}

pub async fn delete_training(pool: &PgPool, training_id: Uuid) -> Result<()> {
    let repo = TrainingRepository::new(pool);
    repo.delete(training_id).await
}

/// Grade on the attendance ladder from the member's attended trainings
pub async fn grade(pool: &PgPool, user_id: Uuid) -> Result<GradeInfo> {
    UserRepository::new(pool).find_by_id(user_id).await?;

    let attended = TrainingRepository::new(pool).count_attended(user_id).await?;

    Ok(grade_info(attendance_count(attended)))
}

pub fn attendance_summary(totals: AttendanceTotals) -> AttendanceResponse {
    AttendanceResponse {
        total_trainings: totals.total,
        attended: totals.attended,
        missed: totals.total - totals.attended,
        attendance_rate: attendance_rate(totals.attended, totals.total),
        grade: GradeResponse::from(grade_info(attendance_count(totals.attended))),
    }
}

pub async fn attendance(pool: &PgPool, user_id: Uuid) -> Result<AttendanceResponse> {
    UserRepository::new(pool).find_by_id(user_id).await?;

    let totals = TrainingRepository::new(pool)
        .attendance_totals(user_id)
        .await?;

    Ok(attendance_summary(totals))
}

/// Everything the member dashboard shows.
///
/// The headline grade uses the dashboard ladder while the nested attendance
/// block keeps the attendance ladder.
pub async fn dashboard(pool: &PgPool, user_id: Uuid) -> Result<DashboardResponse> {
    let user = UserRepository::new(pool).find_by_id(user_id).await?;

    let totals = TrainingRepository::new(pool)
        .attendance_totals(user_id)
        .await?;
    let has_point_a = PointARepository::new(pool)
        .find_by_user(user_id)
        .await?
        .is_some();
    let overall_progress = overall_progress(pool, user_id).await?;
    let latest_comments = CommentRepository::new(pool)
        .list_for_user(user_id, DASHBOARD_COMMENT_COUNT)
        .await?;

    Ok(DashboardResponse {
        user: UserResponse::from(user),
        grade: GradeResponse::from(dashboard_grade_info(attendance_count(totals.attended))),
        overall_progress,
        has_point_a,
        attendance: attendance_summary(totals),
        latest_comments: latest_comments
            .into_iter()
            .map(CommentResponse::from)
            .collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attendance_summary() {
        let summary = attendance_summary(AttendanceTotals {
            total: 24,
            attended: 20,
        });

        assert_eq!(summary.missed, 4);
        assert_eq!(summary.attendance_rate, 83.3);
        assert_eq!(summary.grade.grade.name, "Orange Belt");
        assert_eq!(summary.grade.progress.next, 30);
        assert_eq!(summary.grade.progress.percentage, 67);
    }

    #[test]
    fn test_attendance_summary_without_trainings() {
        let summary = attendance_summary(AttendanceTotals {
            total: 0,
            attended: 0,
        });

        assert_eq!(summary.attendance_rate, 0.0);
        assert_eq!(summary.missed, 0);
        assert_eq!(summary.grade.grade.level, 0);
        assert_eq!(summary.grade.grade.emoji, "🌱");
    }
}
