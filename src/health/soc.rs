use crate::quantity::{percent::Percent, voltage::Volts};

/// Open-circuit voltage to state-of-charge calibration for NMC chemistry,
/// ascending in voltage.
const CALIBRATION: [(f64, f64); 13] = [
    (2.75, 0.0),
    (3.0, 5.0),
    (3.3, 10.0),
    (3.5, 20.0),
    (3.6, 30.0),
    (3.65, 40.0),
    (3.7, 50.0),
    (3.75, 60.0),
    (3.8, 70.0),
    (3.9, 80.0),
    (4.0, 90.0),
    (4.1, 95.0),
    (4.2, 100.0),
];

/// Estimate the state of charge from the cell voltage.
///
/// Linear interpolation between the bracketing calibration points. Voltages beyond
/// the table are extended along the slope of the nearest boundary segment and the
/// result is saturated into `0..=100` – out-of-range input is not an error.
pub fn estimate_soc(voltage: Volts) -> Percent {
    let index = match CALIBRATION.iter().position(|(calibrated, _)| voltage.0 < *calibrated) {
        Some(0) => 0,
        Some(upper) => upper - 1,
        None => CALIBRATION.len() - 2,
    };
    let (voltage_0, soc_0) = CALIBRATION[index];
    let (voltage_1, soc_1) = CALIBRATION[index + 1];
    let slope = (soc_1 - soc_0) / (voltage_1 - voltage_0);
    Percent(soc_0 + (voltage.0 - voltage_0) * slope).saturate()
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_calibration_points_are_exact() {
        for (voltage, soc) in CALIBRATION {
            assert_abs_diff_eq!(estimate_soc(Volts(voltage)).0, soc);
        }
    }

    #[test]
    fn test_interpolates_between_points() {
        // Halfway between 3.7 V → 50% and 3.75 V → 60%.
        assert_abs_diff_eq!(estimate_soc(Volts(3.725)).0, 55.0, epsilon = 1e-9);
    }

    #[test]
    fn test_clamps_extrapolation() {
        assert_abs_diff_eq!(estimate_soc(Volts(2.0)).0, 0.0);
        assert_abs_diff_eq!(estimate_soc(Volts(5.0)).0, 100.0);
    }

    #[test]
    fn test_monotonic_within_table() {
        let mut previous = estimate_soc(Volts(2.75));
        for step in 1..=145 {
            let soc = estimate_soc(Volts(2.75 + f64::from(step) * 0.01));
            assert!(soc >= previous, "SoC decreased at step {step}");
            assert!((0.0..=100.0).contains(&soc.0));
            previous = soc;
        }
    }
}
