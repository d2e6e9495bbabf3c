use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::services::grading::{GradeInfo, GradeTier};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GradeSummary {
    pub name: String,
    pub emoji: String,
    pub level: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GradeProgress {
    pub current: u32,
    pub next: u32,
    pub percentage: u32,
}

/// `{ grade: { name, emoji, level }, progress: { current, next, percentage } }`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GradeResponse {
    pub grade: GradeSummary,
    pub progress: GradeProgress,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GradeTierResponse {
    pub level: u8,
    pub name: String,
    pub emoji: String,
    pub min: u32,
    pub max: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GradeTablesResponse {
    pub attendance: Vec<GradeTierResponse>,
    pub dashboard: Vec<GradeTierResponse>,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct GradeQuery {
    /// Number of attended trainings
    pub attended: u32,
}

impl From<GradeInfo> for GradeResponse {
    fn from(info: GradeInfo) -> Self {
        Self {
            grade: GradeSummary {
                name: info.tier.name.to_string(),
                emoji: info.tier.emoji.to_string(),
                level: info.tier.level,
            },
            progress: GradeProgress {
                current: info.progress.current,
                next: info.progress.next,
                percentage: info.progress.percentage,
            },
        }
    }
}

impl From<&GradeTier> for GradeTierResponse {
    fn from(tier: &GradeTier) -> Self {
        Self {
            level: tier.level,
            name: tier.name.to_string(),
            emoji: tier.emoji.to_string(),
            min: tier.min,
            max: tier.max,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::grading::grade_info;
    use serde_json::json;

    #[test]
    fn test_grade_response_shape() {
        let response = GradeResponse::from(grade_info(4));
        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(
            value,
            json!({
                "grade": { "name": "White Belt", "emoji": "⚪", "level": 1 },
                "progress": { "current": 4, "next": 5, "percentage": 80 }
            })
        );
    }
}
