use itertools::Itertools;

use crate::quantity::{capacity::AmpereHours, percent::Percent, resistance::Milliohms};

/// Typical resistance of a factory-fresh cell.
const NEW_CELL_RESISTANCE: Milliohms = Milliohms(50.0);

/// Resistance at which a cell is considered fully aged, scoring 70%.
const AGED_CELL_RESISTANCE: Milliohms = Milliohms(150.0);

/// The independent degradation signals. Any subset may be available for a given
/// cell; absent signals simply do not participate in the score.
#[derive(Copy, Clone, Debug, Default)]
pub struct SohInputs {
    /// Currently measured capacity, from a full charge/discharge cycle.
    pub capacity: Option<AmpereHours>,

    /// Internal resistance, usually from the regression over a sample window.
    pub internal_resistance: Option<Milliohms>,

    /// Completed charge cycles, when the pack's cycle counter is known.
    pub cycles: u32,
}

/// Scores the overall state of health of a cell.
#[derive(Copy, Clone, Debug)]
pub struct SohEstimator {
    nominal_capacity: AmpereHours,
}

impl Default for SohEstimator {
    fn default() -> Self {
        Self::new(AmpereHours(50.0))
    }
}

impl SohEstimator {
    pub const fn new(nominal_capacity: AmpereHours) -> Self {
        Self { nominal_capacity }
    }

    /// Combine the supplied degradation signals into a single state-of-health
    /// percentage: the plain arithmetic mean of the available factors, saturated
    /// into `0..=100`. With no signals at all the cell is assumed healthy.
    pub fn estimate(&self, inputs: SohInputs) -> Percent {
        let factors = [
            inputs.capacity.map(|capacity| self.capacity_factor(capacity)),
            inputs.internal_resistance.map(resistance_factor),
            (inputs.cycles > 0).then(|| cycle_factor(inputs.cycles)),
        ];
        let supplied = factors.into_iter().flatten().collect_vec();
        if supplied.is_empty() {
            return Percent::FULL;
        }
        #[allow(clippy::cast_precision_loss)]
        let mean = supplied.iter().sum::<f64>() / supplied.len() as f64;
        Percent(mean).saturate()
    }

    fn capacity_factor(&self, capacity: AmpereHours) -> f64 {
        capacity.0 / self.nominal_capacity.0 * 100.0
    }
}

/// Piecewise linear between the new-cell and aged-cell reference resistances.
fn resistance_factor(resistance: Milliohms) -> f64 {
    if resistance <= NEW_CELL_RESISTANCE {
        100.0
    } else if resistance >= AGED_CELL_RESISTANCE {
        70.0
    } else {
        100.0
            - 30.0 * (resistance.0 - NEW_CELL_RESISTANCE.0)
                / (AGED_CELL_RESISTANCE.0 - NEW_CELL_RESISTANCE.0)
    }
}

/// Roughly 80% health at 2000 cycles, never reported below 70% on its own.
fn cycle_factor(cycles: u32) -> f64 {
    (100.0 - f64::from(cycles) / 2000.0 * 20.0).max(70.0)
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_no_signals_means_healthy() {
        let soh = SohEstimator::default().estimate(SohInputs::default());
        assert_abs_diff_eq!(soh.0, 100.0);
    }

    #[test]
    fn test_resistance_anchors() {
        let estimator = SohEstimator::default();
        let estimate = |resistance| {
            estimator
                .estimate(SohInputs {
                    internal_resistance: Some(Milliohms(resistance)),
                    ..SohInputs::default()
                })
                .0
        };
        assert_abs_diff_eq!(estimate(50.0), 100.0);
        assert_abs_diff_eq!(estimate(100.0), 85.0);
        assert_abs_diff_eq!(estimate(150.0), 70.0);
        // Beyond the aged anchor the factor stays pinned.
        assert_abs_diff_eq!(estimate(400.0), 70.0);
        assert_abs_diff_eq!(estimate(10.0), 100.0);
    }

    #[test]
    fn test_capacity_factor() {
        let soh = SohEstimator::default().estimate(SohInputs {
            capacity: Some(AmpereHours(40.0)),
            ..SohInputs::default()
        });
        assert_abs_diff_eq!(soh.0, 80.0);
    }

    #[test]
    fn test_capacity_factor_is_saturated() {
        // A fresh cell can measure above its nameplate capacity.
        let soh = SohEstimator::default().estimate(SohInputs {
            capacity: Some(AmpereHours(55.0)),
            ..SohInputs::default()
        });
        assert_abs_diff_eq!(soh.0, 100.0);
    }

    #[test]
    fn test_cycle_floor() {
        let estimator = SohEstimator::default();
        let estimate =
            |cycles| estimator.estimate(SohInputs { cycles, ..SohInputs::default() }).0;
        assert_abs_diff_eq!(estimate(1000), 90.0);
        assert_abs_diff_eq!(estimate(2000), 80.0);
        assert_abs_diff_eq!(estimate(10_000), 70.0);
    }

    #[test]
    fn test_factors_are_averaged() {
        // Capacity 80% and resistance 100% → 90%.
        let soh = SohEstimator::default().estimate(SohInputs {
            capacity: Some(AmpereHours(40.0)),
            internal_resistance: Some(Milliohms(50.0)),
            cycles: 0,
        });
        assert_abs_diff_eq!(soh.0, 90.0);
    }
}
