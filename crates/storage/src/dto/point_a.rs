use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::{Metrics, PointA};

/// Point A submission. Re-submitting replaces every stored field.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpsertPointARequest {
    #[serde(flatten)]
    #[validate(nested)]
    pub metrics: Metrics,

    #[validate(length(max = 2000, message = "Goal must be at most 2000 characters"))]
    pub goal: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PointAResponse {
    pub user_id: Uuid,
    #[serde(flatten)]
    pub metrics: Metrics,
    pub goal: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<PointA> for PointAResponse {
    fn from(point_a: PointA) -> Self {
        Self {
            user_id: point_a.user_id,
            metrics: point_a.metrics,
            goal: point_a.goal,
            created_at: point_a.created_at,
            updated_at: point_a.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flattened_fields_deserialize() {
        let req: UpsertPointARequest = serde_json::from_str(
            r#"{"energy_level": 4, "stress_level": 9, "weight": 92.3, "goal": "Lose 10 kg"}"#,
        )
        .unwrap();

        assert_eq!(req.metrics.energy_level, Some(4));
        assert_eq!(req.metrics.stress_level, Some(9));
        assert_eq!(req.goal.as_deref(), Some("Lose 10 kg"));
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_nested_range_is_checked() {
        let req: UpsertPointARequest =
            serde_json::from_str(r#"{"intimacy_level": 12}"#).unwrap();
        assert!(req.validate().is_err());
    }
}
