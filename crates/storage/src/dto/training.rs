use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::Training;

/// Request payload for logging a training session for a client
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateTrainingRequest {
    pub training_date: NaiveDate,

    #[validate(length(
        min = 1,
        max = 255,
        message = "Title must be between 1 and 255 characters"
    ))]
    pub title: String,

    #[validate(length(max = 4000))]
    pub notes: Option<String>,

    #[serde(default = "default_attended")]
    pub attended: bool,
}

/// Request payload for correcting attendance or notes
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateTrainingRequest {
    pub attended: Option<bool>,

    #[validate(length(max = 4000))]
    pub notes: Option<String>,
}

fn default_attended() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TrainingResponse {
    pub training_id: Uuid,
    pub user_id: Uuid,
    pub coach_id: Option<Uuid>,
    pub training_date: NaiveDate,
    pub title: String,
    pub notes: Option<String>,
    pub attended: bool,
    pub created_at: NaiveDateTime,
}

impl From<Training> for TrainingResponse {
    fn from(training: Training) -> Self {
        Self {
            training_id: training.training_id,
            user_id: training.user_id,
            coach_id: training.coach_id,
            training_date: training.training_date,
            title: training.title,
            notes: training.notes,
            attended: training.attended,
            created_at: training.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attended_defaults_to_true() {
        let req: CreateTrainingRequest =
            serde_json::from_str(r#"{"training_date": "2025-03-14", "title": "Sparring"}"#)
                .unwrap();
        assert!(req.attended);
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_empty_title_is_rejected() {
        let req: CreateTrainingRequest =
            serde_json::from_str(r#"{"training_date": "2025-03-14", "title": ""}"#).unwrap();
        assert!(req.validate().is_err());
    }
}
