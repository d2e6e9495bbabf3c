//! Grade ladders driven by the number of attended trainings.

use super::round_half_up;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GradeTier {
    pub level: u8,
    pub name: &'static str,
    pub emoji: &'static str,
    /// Inclusive lower bound of attended trainings
    pub min: u32,
    /// Inclusive upper bound, `None` for the top tier
    pub max: Option<u32>,
}

impl GradeTier {
    const fn new(level: u8, name: &'static str, emoji: &'static str, min: u32, max: Option<u32>) -> Self {
        Self {
            level,
            name,
            emoji,
            min,
            max,
        }
    }

    pub fn contains(&self, count: u32) -> bool {
        count >= self.min && self.max.is_none_or(|max| count <= max)
    }
}

/// Ladder used by attendance statistics and the grade endpoint.
pub const ATTENDANCE_GRADE_TABLE: [GradeTier; 7] = [
    GradeTier::new(0, "Newcomer", "🌱", 0, Some(0)),
    GradeTier::new(1, "White Belt", "⚪", 1, Some(4)),
    GradeTier::new(2, "Yellow Belt", "🟡", 5, Some(14)),
    GradeTier::new(3, "Orange Belt", "🟠", 15, Some(29)),
    GradeTier::new(4, "Green Belt", "🟢", 30, Some(59)),
    GradeTier::new(5, "Blue Belt", "🔵", 60, Some(99)),
    GradeTier::new(6, "Black Belt", "⚫", 100, None),
];

/// Ladder shown on the member dashboard.
///
/// Its thresholds and names differ from [`ATTENDANCE_GRADE_TABLE`]. The two
/// stay separate until the club settles on a single ladder.
pub const DASHBOARD_GRADE_TABLE: [GradeTier; 6] = [
    GradeTier::new(0, "Rookie", "🐣", 0, Some(9)),
    GradeTier::new(1, "Fighter", "🥊", 10, Some(24)),
    GradeTier::new(2, "Warrior", "⚔️", 25, Some(49)),
    GradeTier::new(3, "Champion", "🏆", 50, Some(74)),
    GradeTier::new(4, "Master", "🥋", 75, Some(99)),
    GradeTier::new(5, "Legend", "🐉", 100, None),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressToNext {
    pub current: u32,
    pub next: u32,
    pub percentage: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GradeInfo {
    pub tier: GradeTier,
    pub progress: ProgressToNext,
}

/// Share of the way to the next tier, measured as `count / next_threshold`.
///
/// This is deliberately not `(count - tier_min) / (next - tier_min)`: the bar
/// does not restart at zero when a tier is reached. Capped at 100.
pub fn progress_as_fraction_of_next_absolute_threshold(count: u32, next_threshold: u32) -> u32 {
    if next_threshold == 0 {
        return 100;
    }

    let percentage = round_half_up(f64::from(count) / f64::from(next_threshold) * 100.0, 0);
    percentage.min(100.0) as u32
}

fn lookup(table: &[GradeTier], count: u32) -> GradeInfo {
    let index = table.iter().position(|tier| tier.contains(count)).unwrap_or(0);
    let tier = table[index];

    let progress = match table.get(index + 1) {
        Some(next) => ProgressToNext {
            current: count,
            next: next.min,
            percentage: progress_as_fraction_of_next_absolute_threshold(count, next.min),
        },
        None => ProgressToNext {
            current: count,
            next: tier.min,
            percentage: 100,
        },
    };

    GradeInfo { tier, progress }
}

/// Grade on the attendance ladder for a number of attended trainings.
pub fn grade_info(attended_trainings: u32) -> GradeInfo {
    lookup(&ATTENDANCE_GRADE_TABLE, attended_trainings)
}

/// Grade on the dashboard ladder for a number of attended trainings.
pub fn dashboard_grade_info(attended_trainings: u32) -> GradeInfo {
    lookup(&DASHBOARD_GRADE_TABLE, attended_trainings)
}

/// Clamps a database count into the range the ladders work with.
pub fn attendance_count(count: i64) -> u32 {
    u32::try_from(count.max(0)).unwrap_or(u32::MAX)
}

/// Attended share of logged trainings in percent, one decimal. Zero when
/// nothing has been logged yet.
pub fn attendance_rate(attended: i64, total: i64) -> f64 {
    if total <= 0 {
        return 0.0;
    }
    round_half_up(attended as f64 / total as f64 * 100.0, 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_contiguous(table: &[GradeTier]) {
        assert_eq!(table[0].min, 0);
        for pair in table.windows(2) {
            let max = pair[0].max.expect("only the last tier is open-ended");
            assert_eq!(max + 1, pair[1].min, "gap or overlap after {}", pair[0].name);
            assert_eq!(pair[0].level + 1, pair[1].level);
        }
        assert!(table.last().unwrap().max.is_none());
    }

    #[test]
    fn test_tables_are_contiguous() {
        assert_contiguous(&ATTENDANCE_GRADE_TABLE);
        assert_contiguous(&DASHBOARD_GRADE_TABLE);
    }

    #[test]
    fn test_attendance_levels() {
        assert_eq!(grade_info(0).tier.level, 0);
        assert_eq!(grade_info(1).tier.level, 1);
        assert_eq!(grade_info(4).tier.level, 1);
        assert_eq!(grade_info(5).tier.level, 2);
        assert_eq!(grade_info(99).tier.level, 5);
        assert_eq!(grade_info(100).tier.level, 6);
        assert_eq!(grade_info(100).tier.name, "Black Belt");
    }

    #[test]
    fn test_adjacent_boundary_tiers() {
        let below = grade_info(29);
        let above = grade_info(30);
        assert_eq!(below.tier.level, 3);
        assert_eq!(above.tier.level, 4);
    }

    #[test]
    fn test_top_tier_is_always_complete() {
        for count in [100, 101, 250, u32::MAX] {
            let info = grade_info(count);
            assert_eq!(info.tier.level, 6);
            assert_eq!(
                info.progress,
                ProgressToNext {
                    current: count,
                    next: 100,
                    percentage: 100,
                }
            );
        }
    }

    #[test]
    fn test_progress_is_fraction_of_absolute_threshold() {
        // 20 attended, next tier at 30: 67%, not (20 - 15) / (30 - 15)
        let info = grade_info(20);
        assert_eq!(info.progress.next, 30);
        assert_eq!(info.progress.percentage, 67);

        let info = grade_info(0);
        assert_eq!(info.progress.next, 1);
        assert_eq!(info.progress.percentage, 0);

        // Entering a tier does not reset the bar
        let info = grade_info(5);
        assert_eq!(info.progress.next, 15);
        assert_eq!(info.progress.percentage, 33);
    }

    #[test]
    fn test_fraction_rounds_half_up_and_caps() {
        assert_eq!(progress_as_fraction_of_next_absolute_threshold(1, 8), 13);
        assert_eq!(progress_as_fraction_of_next_absolute_threshold(3, 2), 100);
        assert_eq!(progress_as_fraction_of_next_absolute_threshold(5, 0), 100);
    }

    #[test]
    fn test_dashboard_ladder_differs() {
        let info = dashboard_grade_info(12);
        assert_eq!(info.tier.name, "Fighter");
        assert_eq!(info.progress.next, 25);
        assert_eq!(info.progress.percentage, 48);

        assert_eq!(dashboard_grade_info(9).tier.level, 0);
        assert_eq!(dashboard_grade_info(100).progress.percentage, 100);
        assert_ne!(grade_info(12).tier.name, dashboard_grade_info(12).tier.name);
    }

    #[test]
    fn test_attendance_rate() {
        assert_eq!(attendance_rate(0, 0), 0.0);
        assert_eq!(attendance_rate(2, 3), 66.7);
        assert_eq!(attendance_rate(5, 5), 100.0);
    }

    #[test]
    fn test_attendance_count_clamps() {
        assert_eq!(attendance_count(-3), 0);
        assert_eq!(attendance_count(42), 42);
        assert_eq!(attendance_count(i64::MAX), u32::MAX);
    }
}
