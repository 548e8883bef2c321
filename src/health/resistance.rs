use itertools::Itertools;

use crate::quantity::{current::Amperes, resistance::Milliohms, voltage::Volts};

/// Estimate the internal resistance of one cell by fitting `V = V_oc − I·R`
/// over its sample window, with current as the independent variable.
///
/// Open-circuit readings cannot constrain the slope and are dropped first. With
/// fewer than two usable points, or with zero variance in current, the estimate
/// degrades to zero instead of failing, so a sparse window still yields a
/// reportable metric. A negative fit (measurement noise) is floored to zero.
pub fn estimate_internal_resistance(voltages: &[Volts], currents: &[Amperes]) -> Milliohms {
    if voltages.len() < 2 || currents.len() < 2 {
        return Milliohms::ZERO;
    }
    let points = voltages
        .iter()
        .zip(currents)
        .filter(|(_, current)| !current.is_open_circuit())
        .map(|(voltage, current)| (current.0, voltage.0))
        .collect_vec();
    if points.len() < 2 {
        return Milliohms::ZERO;
    }

    // Single-pass ordinary least squares, kept closed-form for reproducibility.
    #[allow(clippy::cast_precision_loss)]
    let n = points.len() as f64;
    let (sum_i, sum_v, sum_ii, sum_iv) = points.iter().fold(
        (0.0, 0.0, 0.0, 0.0),
        |(sum_i, sum_v, sum_ii, sum_iv), (current, voltage)| {
            (
                sum_i + current,
                sum_v + voltage,
                sum_ii + current * current,
                sum_iv + current * voltage,
            )
        },
    );
    let denominator = n * sum_ii - sum_i * sum_i;
    if denominator == 0.0 {
        return Milliohms::ZERO;
    }
    let slope = (n * sum_iv - sum_i * sum_v) / denominator;
    Milliohms((-slope * 1000.0).max(0.0))
}
