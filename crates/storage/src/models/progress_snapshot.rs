use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

use super::Metrics;

/// One progress update submission. Append-only; the newest row is "current".
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct ProgressSnapshot {
    pub snapshot_id: Uuid,
    pub user_id: Uuid,
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub metrics: Metrics,
    pub note: Option<String>,
    pub created_at: NaiveDateTime,
}
