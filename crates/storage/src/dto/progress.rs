use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::{Metrics, ProgressSnapshot};

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateProgressRequest {
    #[serde(flatten)]
    #[validate(nested)]
    pub metrics: Metrics,

    #[validate(length(max = 2000))]
    pub note: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProgressSnapshotResponse {
    pub snapshot_id: Uuid,
    pub user_id: Uuid,
    #[serde(flatten)]
    pub metrics: Metrics,
    pub note: Option<String>,
    pub created_at: NaiveDateTime,
}

impl From<ProgressSnapshot> for ProgressSnapshotResponse {
    fn from(snapshot: ProgressSnapshot) -> Self {
        Self {
            snapshot_id: snapshot.snapshot_id,
            user_id: snapshot.user_id,
            metrics: snapshot.metrics,
            note: snapshot.note,
            created_at: snapshot.created_at,
        }
    }
}
