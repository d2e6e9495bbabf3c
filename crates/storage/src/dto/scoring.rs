use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::{Better, Metrics};
use crate::services::metric_comparison::MetricComparison;

/// Two snapshots to score without touching storage
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct ScoreSnapshotsRequest {
    #[validate(nested)]
    pub baseline: Metrics,
    #[validate(nested)]
    pub current: Metrics,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OverallProgressResponse {
    pub overall_progress: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MetricComparisonResponse {
    pub field: String,
    pub label: String,
    pub better: Better,
    pub point_a: Option<f64>,
    pub current: Option<f64>,
    pub improved: bool,
    pub percent_change: f64,
    pub has_data: bool,
}

impl From<MetricComparison> for MetricComparisonResponse {
    fn from(cmp: MetricComparison) -> Self {
        Self {
            field: cmp.metric.field().to_string(),
            label: cmp.metric.label().to_string(),
            better: cmp.metric.better(),
            point_a: cmp.point_a,
            current: cmp.current,
            improved: cmp.improved,
            percent_change: cmp.percent_change,
            has_data: cmp.has_data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::metric_comparison::compare_metrics;

    #[test]
    fn test_comparison_uses_camel_case_keys() {
        let baseline = Metrics {
            plank_time: Some(0),
            ..Default::default()
        };
        let rows: Vec<MetricComparisonResponse> = compare_metrics(&baseline, &Metrics::default())
            .into_iter()
            .map(MetricComparisonResponse::from)
            .collect();

        let plank = serde_json::to_value(&rows[8]).unwrap();
        assert_eq!(plank["field"], "plank_time");
        assert_eq!(plank["label"], "Plank time");
        assert_eq!(plank["pointA"], 0.0);
        assert!(plank["current"].is_null());
        assert_eq!(plank["hasData"], false);
        assert_eq!(plank["percentChange"], 0.0);
        assert_eq!(plank["better"], "higher");
    }

    #[test]
    fn test_overall_progress_key() {
        let value = serde_json::to_value(OverallProgressResponse {
            overall_progress: 44.44,
        })
        .unwrap();
        assert_eq!(value["overallProgress"], 44.44);
    }
}
