use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::models::CoachComment;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateCommentRequest {
    #[validate(length(
        min = 1,
        max = 4000,
        message = "Comment must be between 1 and 4000 characters"
    ))]
    pub body: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CommentResponse {
    pub comment_id: Uuid,
    pub user_id: Uuid,
    pub coach_id: Option<Uuid>,
    pub body: String,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct CommentFilter {
    #[serde(default = "default_limit")]
    pub limit: u32,
}

fn default_limit() -> u32 {
    50
}

impl CommentFilter {
    pub fn validate(&self) -> Result<(), String> {
        if self.limit < 1 || self.limit > 100 {
            return Err("limit must be between 1 and 100".to_string());
        }
        Ok(())
    }
}

impl From<CoachComment> for CommentResponse {
    fn from(comment: CoachComment) -> Self {
        Self {
            comment_id: comment.comment_id,
            user_id: comment.user_id,
            coach_id: comment.coach_id,
            body: comment.body,
            created_at: comment.created_at,
        }
    }
}
