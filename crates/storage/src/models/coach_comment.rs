use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct CoachComment {
    pub comment_id: Uuid,
    pub user_id: Uuid,
    /// Null once the authoring coach has been removed
    pub coach_id: Option<Uuid>,
    pub body: String,
    pub created_at: NaiveDateTime,
}
