//! Aggregate progress score: how far a member has moved from Point A towards
//! a perfect 10 on the six questionnaire scores.

use crate::models::{Metric, Metrics};

use super::round_half_up;

const MAX_SCORE: f64 = 10.0;

/// Stress is the only questionnaire score where lower is better.
fn oriented(metric: Metric, value: f64) -> f64 {
    if metric == Metric::Stress {
        MAX_SCORE + 1.0 - value
    } else {
        value
    }
}

/// Progress before clamping and rounding.
///
/// Returns `None` when no questionnaire score is present in both snapshots.
/// Negative values mean the member is worse off than at Point A.
pub fn unclamped_progress(baseline: &Metrics, current: &Metrics) -> Option<f64> {
    let pairs: Vec<(f64, f64)> = Metric::SUBJECTIVE
        .iter()
        .filter_map(|&metric| {
            let base = baseline.value(metric)?;
            let now = current.value(metric)?;
            Some((oriented(metric, base), oriented(metric, now)))
        })
        .collect();

    if pairs.is_empty() {
        return None;
    }

    let count = pairs.len() as f64;
    let avg_baseline = pairs.iter().map(|(base, _)| base).sum::<f64>() / count;
    let avg_current = pairs.iter().map(|(_, now)| now).sum::<f64>() / count;

    // A saturated baseline leaves no room to improve: report 100 if the
    // member is still at the top, 0 otherwise.
    if avg_baseline >= MAX_SCORE {
        return Some(if avg_current >= MAX_SCORE { 100.0 } else { 0.0 });
    }

    Some((avg_current - avg_baseline) / (MAX_SCORE - avg_baseline) * 100.0)
}

/// Overall progress percentage in `[0, 100]`, rounded to two decimals.
///
/// `current` must be the most recent progress snapshot; this is a two-point
/// comparison, not a trend.
pub fn compute_overall_progress(baseline: &Metrics, current: &Metrics) -> f64 {
    unclamped_progress(baseline, current)
        .map(|progress| round_half_up(progress.clamp(0.0, 100.0), 2))
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn scores(values: [Option<i32>; 6]) -> Metrics {
        Metrics {
            energy_level: values[0],
            stress_level: values[1],
            sleep_quality: values[2],
            nutrition_quality: values[3],
            emotions_level: values[4],
            intimacy_level: values[5],
            ..Default::default()
        }
    }

    fn random_scores(rng: &mut StdRng) -> Metrics {
        let mut values = [None; 6];
        for value in values.iter_mut() {
            if rng.gen_bool(0.75) {
                *value = Some(rng.gen_range(1..=10));
            }
        }
        scores(values)
    }

    #[test]
    fn test_worked_example() {
        let baseline = Metrics {
            energy_level: Some(5),
            stress_level: Some(8),
            sleep_quality: Some(4),
            ..Default::default()
        };
        let current = Metrics {
            energy_level: Some(7),
            stress_level: Some(4),
            sleep_quality: Some(6),
            ..Default::default()
        };

        assert_eq!(compute_overall_progress(&baseline, &current), 44.44);
    }

    #[test]
    fn test_no_shared_fields_is_zero() {
        let baseline = Metrics {
            energy_level: Some(5),
            ..Default::default()
        };
        let current = Metrics {
            sleep_quality: Some(9),
            ..Default::default()
        };

        assert_eq!(unclamped_progress(&baseline, &current), None);
        assert_eq!(compute_overall_progress(&baseline, &current), 0.0);
        assert_eq!(
            compute_overall_progress(&Metrics::default(), &Metrics::default()),
            0.0
        );
    }

    #[test]
    fn test_physical_measures_are_ignored() {
        let baseline = Metrics {
            energy_level: Some(4),
            plank_time: Some(30),
            ..Default::default()
        };
        let current = Metrics {
            energy_level: Some(7),
            plank_time: Some(300),
            ..Default::default()
        };

        assert_eq!(compute_overall_progress(&baseline, &current), 50.0);
    }

    #[test]
    fn test_fields_missing_on_one_side_are_skipped() {
        let baseline = scores([Some(4), None, Some(2), None, None, None]);
        let current = scores([Some(7), Some(9), None, None, None, Some(10)]);

        // Only energy is shared: (7 - 4) / (10 - 4)
        assert_eq!(compute_overall_progress(&baseline, &current), 50.0);
    }

    #[test]
    fn test_worse_stress_is_negative_before_clamping() {
        let baseline = Metrics {
            stress_level: Some(2),
            ..Default::default()
        };
        let current = Metrics {
            stress_level: Some(8),
            ..Default::default()
        };

        let raw = unclamped_progress(&baseline, &current).unwrap();
        assert!(raw < 0.0, "expected negative progress, got {}", raw);
        assert_eq!(compute_overall_progress(&baseline, &current), 0.0);
    }

    #[test]
    fn test_lower_stress_counts_as_improvement() {
        let baseline = Metrics {
            stress_level: Some(8),
            ..Default::default()
        };
        let current = Metrics {
            stress_level: Some(2),
            ..Default::default()
        };

        // 3 -> 9 on the inverted scale: (9 - 3) / (10 - 3)
        assert_eq!(compute_overall_progress(&baseline, &current), 85.71);
    }

    #[test]
    fn test_perfect_current_is_one_hundred() {
        let baseline = scores([Some(3), Some(9), Some(5), Some(4), Some(6), Some(2)]);
        let current = scores([Some(10), Some(1), Some(10), Some(10), Some(10), Some(10)]);

        assert_eq!(compute_overall_progress(&baseline, &current), 100.0);
    }

    #[test]
    fn test_saturated_baseline_does_not_divide_by_zero() {
        let top = scores([Some(10), Some(1), Some(10), Some(10), Some(10), Some(10)]);
        let dropped = scores([Some(8), Some(1), Some(10), Some(10), Some(10), Some(10)]);

        assert_eq!(compute_overall_progress(&top, &top), 100.0);
        assert_eq!(compute_overall_progress(&top, &dropped), 0.0);
        assert!(unclamped_progress(&top, &dropped).unwrap().is_finite());
    }

    #[test]
    fn test_same_snapshot_twice_is_zero() {
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..500 {
            let baseline = random_scores(&mut rng);
            let Some(_) = unclamped_progress(&baseline, &baseline) else {
                continue;
            };
            // The fully saturated baseline is pinned separately above.
            let saturated = Metric::SUBJECTIVE
                .iter()
                .filter_map(|&m| baseline.value(m).map(|v| oriented(m, v)))
                .all(|v| v >= MAX_SCORE);
            if saturated {
                continue;
            }

            assert_eq!(compute_overall_progress(&baseline, &baseline), 0.0);
        }
    }

    #[test]
    fn test_result_is_always_within_bounds() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..2000 {
            let baseline = random_scores(&mut rng);
            let current = random_scores(&mut rng);
            let progress = compute_overall_progress(&baseline, &current);

            assert!(
                (0.0..=100.0).contains(&progress),
                "{:?} vs {:?} gave {}",
                baseline,
                current,
                progress
            );
        }
    }

    #[test]
    fn test_lower_baseline_never_reports_less_progress() {
        let mut rng = StdRng::seed_from_u64(1234);

        for _ in 0..2000 {
            let baseline = random_scores(&mut rng);
            let current = random_scores(&mut rng);

            let Some(energy) = baseline.energy_level else {
                continue;
            };
            if energy <= 1 || current.energy_level.is_none() {
                continue;
            }

            let lowered = Metrics {
                energy_level: Some(energy - 1),
                ..baseline.clone()
            };

            let before = compute_overall_progress(&baseline, &current);
            let after = compute_overall_progress(&lowered, &current);
            assert!(
                after >= before,
                "lowering energy {} -> {} dropped progress {} -> {}",
                energy,
                energy - 1,
                before,
                after
            );
        }
    }

    #[test]
    fn test_maxed_current_grows_as_baseline_drops() {
        let current = scores([Some(10); 6]);
        let mut previous = f64::MIN;

        for level in (1..=9).rev() {
            let baseline = scores([Some(level); 6]);
            let progress = compute_overall_progress(&baseline, &current);
            assert!(progress >= previous, "level {} gave {}", level, progress);
            previous = progress;
        }
    }
}
