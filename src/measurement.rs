use std::io::Read;

use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, de};

use crate::{
    prelude::*,
    quantity::{current::Amperes, temperature::Celsius, voltage::Volts},
};

/// One parsed row of a measurement log: a single electrical/thermal reading of one cell.
#[derive(Copy, Clone, Debug, Deserialize)]
pub struct MeasurementSample {
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub timestamp: NaiveDateTime,

    pub cell_id: u32,

    pub voltage_v: Volts,

    pub current_a: Amperes,

    pub temperature_c: Celsius,
}

/// The bench loggers emit either RFC 3339 or the space-separated form.
fn deserialize_timestamp<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<NaiveDateTime, D::Error> {
    let raw = String::deserialize(deserializer)?;
    NaiveDateTime::parse_from_str(&raw, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(&raw, "%Y-%m-%d %H:%M:%S%.f"))
        .map_err(de::Error::custom)
}

/// Read one measurement batch from CSV with the header
/// `timestamp,cell_id,voltage_v,current_a,temperature_c`.
///
/// A malformed row rejects the whole batch: metrics derived from a partial series
/// would be silently wrong, so nothing is dropped on the floor.
pub fn read_batch(reader: impl Read) -> Result<Vec<MeasurementSample>> {
    let mut samples = Vec::new();
    for (index, record) in csv::Reader::from_reader(reader).deserialize().enumerate() {
        // The header occupies line 1.
        let sample: MeasurementSample =
            record.with_context(|| format!("malformed measurement on line {}", index + 2))?;
        samples.push(sample);
    }
    Ok(samples)
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_read_batch_ok() -> Result {
        let log = "\
            timestamp,cell_id,voltage_v,current_a,temperature_c\n\
            2024-01-01T10:00:00,1,3.7,0.5,25.0\n\
            2024-01-01 10:00:10,2,3.65,1.0,25.4\n\
        ";
        let samples = read_batch(log.as_bytes())?;
        assert_eq!(samples.len(), 2);
        assert_eq!(samples[0].cell_id, 1);
        assert_abs_diff_eq!(samples[0].voltage_v.0, 3.7);
        assert_abs_diff_eq!(samples[1].current_a.0, 1.0);
        assert_eq!(samples[1].timestamp.to_string(), "2024-01-01 10:00:10");
        Ok(())
    }

    #[test]
    fn test_read_batch_empty() -> Result {
        let log = "timestamp,cell_id,voltage_v,current_a,temperature_c\n";
        assert!(read_batch(log.as_bytes())?.is_empty());
        Ok(())
    }

    #[test]
    fn test_read_batch_rejects_non_numeric_voltage() {
        let log = "\
            timestamp,cell_id,voltage_v,current_a,temperature_c\n\
            2024-01-01T10:00:00,1,3.7,0.5,25.0\n\
            2024-01-01T10:00:10,1,n/a,0.5,25.0\n\
        ";
        let error = read_batch(log.as_bytes()).unwrap_err();
        assert!(error.to_string().contains("line 3"));
    }

    #[test]
    fn test_read_batch_rejects_missing_cell_id() {
        let log = "\
            timestamp,voltage_v,current_a,temperature_c\n\
            2024-01-01T10:00:00,3.7,0.5,25.0\n\
        ";
        assert!(read_batch(log.as_bytes()).is_err());
    }

    #[test]
    fn test_read_batch_rejects_bad_timestamp() {
        let log = "\
            timestamp,cell_id,voltage_v,current_a,temperature_c\n\
            yesterday,1,3.7,0.5,25.0\n\
        ";
        assert!(read_batch(log.as_bytes()).is_err());
    }
}
