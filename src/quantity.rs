pub mod capacity;
pub mod current;
pub mod percent;
pub mod resistance;
pub mod temperature;
pub mod voltage;

/// Round to two decimals, the precision at which the pipeline reports its metrics.
pub fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_round_to_hundredths() {
        assert_abs_diff_eq!(round_to_hundredths(84.999_4), 85.0);
        assert_abs_diff_eq!(round_to_hundredths(0.005), 0.01);
    }
}
