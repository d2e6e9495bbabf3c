pub mod grading;
pub mod metric_comparison;
pub mod progress_scoring;

/// Rounds to `decimals` places with halves going up (towards +inf).
pub(crate) fn round_half_up(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor + 0.5).floor() / factor
}

#[cfg(test)]
mod tests {
    use super::round_half_up;

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(44.444_444, 2), 44.44);
        assert_eq!(round_half_up(12.345, 1), 12.3);
        assert_eq!(round_half_up(2.5, 0), 3.0);
        assert_eq!(round_half_up(-2.5, 0), -2.0);
        assert_eq!(round_half_up(-12.36, 1), -12.4);
    }
}
