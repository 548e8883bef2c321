use itertools::Itertools;
use serde::Serialize;

use crate::{
    health::{
        resistance::estimate_internal_resistance,
        soc::estimate_soc,
        soh::{SohEstimator, SohInputs},
    },
    measurement::MeasurementSample,
    prelude::*,
    quantity::{
        current::Amperes,
        percent::Percent,
        resistance::Milliohms,
        temperature::Celsius,
        voltage::Volts,
    },
};

/// One cell's derived health indicators for one measurement batch,
/// rounded to the two decimals the reports carry.
#[derive(Copy, Clone, Debug, Serialize)]
pub struct CellHealthMetric {
    pub cell_id: u32,

    #[serde(rename = "soc_percent")]
    pub soc: Percent,

    #[serde(rename = "soh_percent")]
    pub soh: Percent,

    #[serde(rename = "internal_resistance_mohm")]
    pub internal_resistance: Milliohms,

    #[serde(rename = "temperature_c")]
    pub temperature: Celsius,
}

/// Turns a batch of raw samples into per-cell health metrics.
#[derive(Copy, Clone, Debug, Default)]
pub struct HealthProcessor {
    soh_estimator: SohEstimator,
}

impl HealthProcessor {
    pub const fn new(soh_estimator: SohEstimator) -> Self {
        Self { soh_estimator }
    }

    /// Derive one metric per cell. Cells are reported in the order they first
    /// appear in the batch, regardless of how their samples are interleaved.
    #[instrument(skip_all, fields(n_samples = samples.len()))]
    pub fn process(&self, samples: &[MeasurementSample]) -> Vec<CellHealthMetric> {
        let mut groups: Vec<(u32, Vec<&MeasurementSample>)> = Vec::new();
        for sample in samples {
            match groups.iter_mut().find(|(cell_id, _)| *cell_id == sample.cell_id) {
                Some((_, group)) => group.push(sample),
                None => groups.push((sample.cell_id, vec![sample])),
            }
        }
        debug!(n_cells = groups.len(), "grouped the batch");
        groups
            .into_iter()
            .map(|(cell_id, mut group)| {
                // Logs may arrive in arbitrary order; the regression and the
                // averages must not depend on it.
                group.sort_by_key(|sample| sample.timestamp);
                self.process_cell(cell_id, &group)
            })
            .collect()
    }

    fn process_cell(&self, cell_id: u32, group: &[&MeasurementSample]) -> CellHealthMetric {
        let voltages: Vec<Volts> = group.iter().map(|sample| sample.voltage_v).collect_vec();
        let currents: Vec<Amperes> = group.iter().map(|sample| sample.current_a).collect_vec();

        #[allow(clippy::cast_precision_loss)]
        let n = group.len() as f64;
        let average_voltage = Volts(voltages.iter().map(|voltage| voltage.0).sum::<f64>() / n);
        let average_temperature =
            Celsius(group.iter().map(|sample| sample.temperature_c.0).sum::<f64>() / n);

        let soc = estimate_soc(average_voltage);
        let internal_resistance = estimate_internal_resistance(&voltages, &currents);
        // Capacity and cycle data is not carried by measurement logs, so only the
        // resistance signal feeds the score here.
        let soh = self.soh_estimator.estimate(SohInputs {
            capacity: None,
            internal_resistance: Some(internal_resistance),
            cycles: 0,
        });
        debug!(cell_id, ?soc, ?soh, ?internal_resistance, "processed a cell");

        CellHealthMetric {
            cell_id,
            soc: soc.round_to_hundredths(),
            soh: soh.round_to_hundredths(),
            internal_resistance: internal_resistance.round_to_hundredths(),
            temperature: average_temperature.round_to_hundredths(),
        }
    }
}
