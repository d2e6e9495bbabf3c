use crate::models::{Better, Metric, Metrics};

use super::round_half_up;

/// Point A versus current value for one tracked metric.
///
/// `percent_change` is oriented so that a positive number always means the
/// metric moved in its favourable direction.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricComparison {
    pub metric: Metric,
    pub point_a: Option<f64>,
    pub current: Option<f64>,
    pub improved: bool,
    pub percent_change: f64,
    pub has_data: bool,
}

pub fn compare_metric(metric: Metric, baseline: &Metrics, current: &Metrics) -> MetricComparison {
    let point_a = baseline.value(metric);
    let now = current.value(metric);

    let (improved, percent_change, has_data) = match (point_a, now) {
        (Some(base), Some(now)) if base != 0.0 => {
            let (improved, change) = match metric.better() {
                Better::Higher => (now > base, (now - base) / base * 100.0),
                Better::Lower => (now < base, (base - now) / base * 100.0),
            };
            (improved, round_half_up(change, 1), true)
        }
        _ => (false, 0.0, false),
    };

    MetricComparison {
        metric,
        point_a,
        current: now,
        improved,
        percent_change,
        has_data,
    }
}

/// Compares all ten metrics in display order.
///
/// This view is independent of the aggregate progress score.
pub fn compare_metrics(baseline: &Metrics, current: &Metrics) -> Vec<MetricComparison> {
    Metric::ALL
        .iter()
        .map(|&metric| compare_metric(metric, baseline, current))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_higher_is_better_metric() {
        let baseline = Metrics {
            plank_time: Some(60),
            ..Default::default()
        };
        let current = Metrics {
            plank_time: Some(90),
            ..Default::default()
        };

        let cmp = compare_metric(Metric::PlankTime, &baseline, &current);
        assert!(cmp.has_data);
        assert!(cmp.improved);
        assert_eq!(cmp.percent_change, 50.0);
        assert_eq!(cmp.point_a, Some(60.0));
        assert_eq!(cmp.current, Some(90.0));
    }

    #[test]
    fn test_lower_is_better_metric_is_oriented_positive() {
        let baseline = Metrics {
            weight: Some(Decimal::from(90)),
            ..Default::default()
        };
        let current = Metrics {
            weight: Some(Decimal::new(855, 1)),
            ..Default::default()
        };

        let cmp = compare_metric(Metric::Weight, &baseline, &current);
        assert!(cmp.improved);
        assert_eq!(cmp.percent_change, 5.0);
    }

    #[test]
    fn test_regression_is_negative() {
        let baseline = Metrics {
            stress_level: Some(3),
            punches_per_minute: Some(120),
            ..Default::default()
        };
        let current = Metrics {
            stress_level: Some(6),
            punches_per_minute: Some(100),
            ..Default::default()
        };

        let stress = compare_metric(Metric::Stress, &baseline, &current);
        assert!(!stress.improved);
        assert_eq!(stress.percent_change, -100.0);

        let punches = compare_metric(Metric::PunchesPerMinute, &baseline, &current);
        assert!(!punches.improved);
        assert_eq!(punches.percent_change, -16.7);
    }

    #[test]
    fn test_zero_baseline_has_no_data() {
        let baseline = Metrics {
            plank_time: Some(0),
            ..Default::default()
        };
        let current = Metrics {
            plank_time: Some(45),
            ..Default::default()
        };

        let cmp = compare_metric(Metric::PlankTime, &baseline, &current);
        assert!(!cmp.has_data);
        assert!(!cmp.improved);
        assert_eq!(cmp.percent_change, 0.0);
        assert!(cmp.percent_change.is_finite());
        assert_eq!(cmp.point_a, Some(0.0));
    }

    #[test]
    fn test_missing_values_have_no_data() {
        let baseline = Metrics {
            energy_level: Some(5),
            ..Default::default()
        };

        let comparisons = compare_metrics(&baseline, &Metrics::default());
        assert_eq!(comparisons.len(), 10);
        assert!(comparisons.iter().all(|c| !c.has_data && !c.improved));
        assert_eq!(comparisons[0].point_a, Some(5.0));
        assert_eq!(comparisons[0].current, None);
    }

    #[test]
    fn test_unchanged_value_is_not_an_improvement() {
        let metrics = Metrics {
            sleep_quality: Some(6),
            ..Default::default()
        };

        let cmp = compare_metric(Metric::Sleep, &metrics, &metrics);
        assert!(cmp.has_data);
        assert!(!cmp.improved);
        assert_eq!(cmp.percent_change, 0.0);
    }

    #[test]
    fn test_order_follows_display_order() {
        let fields: Vec<&str> = compare_metrics(&Metrics::default(), &Metrics::default())
            .iter()
            .map(|c| c.metric.field())
            .collect();

        assert_eq!(fields.first(), Some(&"energy_level"));
        assert_eq!(fields.last(), Some(&"punches_per_minute"));
    }
}
