use sqlx::PgPool;
use storage::{
    error::Result,
    models::CoachComment,
    repository::{comment::CommentRepository, user::UserRepository},
};
use uuid::Uuid;

use crate::middleware::auth::Caller;

pub async fn list_comments(pool: &PgPool, user_id: Uuid, limit: u32) -> Result<Vec<CoachComment>> {
    let repo = CommentRepository::new(pool);
    repo.list_for_user(user_id, limit).await
}

pub async fn create_comment(
    pool: &PgPool,
    user_id: Uuid,
    coach_id: Option<Uuid>,
    body: &str,
) -> Result<CoachComment> {
    UserRepository::new(pool).find_by_id(user_id).await?;

    let repo = CommentRepository::new(pool);
    repo.create(user_id, coach_id, body).await
}

pub async fn get_comment(pool: &PgPool, comment_id: Uuid) -> Result<CoachComment> {
    let repo = CommentRepository::new(pool);
    repo.find_by_id(comment_id).await
}

pub async fn delete_comment(pool: &PgPool, comment_id: Uuid) -> Result<()> {
    let repo = CommentRepository::new(pool);
    repo.delete(comment_id).await
}

/// Admins remove any comment, coaches only their own.
pub fn may_delete(caller: &Caller, comment: &CoachComment) -> bool {
    caller.is_admin() || (comment.coach_id.is_some() && comment.coach_id == caller.user_id())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use storage::models::Role;

    fn comment_by(coach_id: Option<Uuid>) -> CoachComment {
        CoachComment {
            comment_id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            coach_id,
            body: "Keep your guard up".to_string(),
            created_at: NaiveDate::from_ymd_opt(2025, 3, 14)
                .and_then(|d| d.and_hms_opt(18, 30, 0))
                .unwrap(),
        }
    }

    #[test]
    fn test_author_may_delete_own_comment() {
        let coach_id = Uuid::new_v4();
        let coach = Caller::Member {
            user_id: coach_id,
            role: Role::Coach,
        };

        assert!(may_delete(&coach, &comment_by(Some(coach_id))));
        assert!(!may_delete(&coach, &comment_by(Some(Uuid::new_v4()))));
    }

    #[test]
    fn test_orphaned_comment_needs_admin() {
        let coach = Caller::Member {
            user_id: Uuid::new_v4(),
            role: Role::Coach,
        };

        assert!(!may_delete(&coach, &comment_by(None)));
        assert!(may_delete(&Caller::ApiKey, &comment_by(None)));
    }
}
