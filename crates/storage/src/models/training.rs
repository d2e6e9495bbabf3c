use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// A training session logged by a coach for one client.
///
/// Only rows with `attended = true` count towards the grade ladder.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Training {
    pub training_id: Uuid,
    pub user_id: Uuid,
    pub coach_id: Option<Uuid>,
    pub training_date: NaiveDate,
    pub title: String,
    pub notes: Option<String>,
    pub attended: bool,
    pub created_at: NaiveDateTime,
}
