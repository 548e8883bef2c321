use std::{collections::BTreeMap, fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::{health::processor::CellHealthMetric, prelude::*};

/// The metric kinds a threshold may be configured for.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricKind {
    Soh,
    Resistance,
    Temperature,
}

/// Acceptable range for one metric kind. Either bound may be left open.
#[derive(Copy, Clone, Debug, Default, Serialize, Deserialize)]
pub struct Bounds {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

/// Immutable snapshot of the configured acceptance thresholds.
///
/// Taken once before a batch is processed, so a configuration change can never
/// split a single run into differently judged halves.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Thresholds(BTreeMap<MetricKind, Bounds>);

impl Thresholds {
    pub fn from_toml(raw: &str) -> Result<Self> {
        toml::from_str(raw).context("failed to parse the thresholds")
    }

    pub fn read_from(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read the thresholds from `{}`", path.display()))?;
        Self::from_toml(&raw)
    }

    /// Judge one metric against the snapshot.
    ///
    /// Only the configured bounds are checked: SoH against its minimum, resistance
    /// and temperature against their maxima. An absent entry, or an entry whose
    /// relevant bound is open, neither passes nor fails. With nothing applicable
    /// the metric passes by default.
    #[must_use]
    pub fn passes(&self, metric: &CellHealthMetric) -> bool {
        let soh_ok = self.min_of(MetricKind::Soh).is_none_or(|min| metric.soh.0 >= min);
        let resistance_ok = self
            .max_of(MetricKind::Resistance)
            .is_none_or(|max| metric.internal_resistance.0 <= max);
        let temperature_ok =
            self.max_of(MetricKind::Temperature).is_none_or(|max| metric.temperature.0 <= max);
        soh_ok && resistance_ok && temperature_ok
    }

    fn min_of(&self, kind: MetricKind) -> Option<f64> {
        self.0.get(&kind).and_then(|bounds| bounds.min)
    }

    fn max_of(&self, kind: MetricKind) -> Option<f64> {
        self.0.get(&kind).and_then(|bounds| bounds.max)
    }
}
