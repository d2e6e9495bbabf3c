use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

use super::Metrics;

/// Baseline questionnaire ("Point A"), one row per user.
///
/// Re-submitting replaces the stored values instead of appending a new row.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct PointA {
    pub user_id: Uuid,
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub metrics: Metrics,
    pub goal: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}
