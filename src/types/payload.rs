//! Wire-level data structures for the `/current` and `/historic` endpoints.
//!
//! Both endpoints share one response shape: a station header plus a list of
//! per-sensor data blocks, each block carrying a list of field-to-value
//! records. Field names vary by sensor type and firmware, so records are kept
//! as open maps of [`Scalar`] values rather than fixed structs.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single sensor field value.
///
/// The API only ever sends JSON scalars inside data records (`null`, booleans,
/// numbers, strings); this enum makes that explicit instead of passing raw
/// JSON values through the merge engine. Whole numbers deserialize as
/// [`Scalar::Int`], everything else numeric as [`Scalar::Float`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl Scalar {
    /// Returns the value as whole seconds, if it is numeric.
    ///
    /// Used to read the `ts` field of historic records; fractional values are
    /// truncated, non-numeric values yield `None`.
    pub fn as_seconds(&self) -> Option<i64> {
        match self {
            Scalar::Int(v) => Some(*v),
            Scalar::Float(v) if v.is_finite() => Some(*v as i64),
            _ => None,
        }
    }
}

/// One record of a sensor block: field name to value.
///
/// For "current" payloads the record at index 0 is the most recent sample;
/// for "historic" payloads each record carries a `ts` field with its sample
/// timestamp in epoch seconds.
pub type DataEntry = BTreeMap<String, Scalar>;

/// One sensor's contribution to a payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorBlock {
    /// Logical sensor id, stable per installed sensor.
    pub lsid: i64,
    /// Davis sensor type code (e.g. 242 barometer, 512 anemometer).
    pub sensor_type: i64,
    /// Layout revision of the records in `data`.
    pub data_structure_type: i64,
    pub data: Vec<DataEntry>,
}

/// One fetch result from `/current` or `/historic`.
///
/// Owned entirely by the caller; the client never retains a payload beyond
/// the request that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payload {
    pub station_id_uuid: String,
    pub station_id: i64,
    /// Server-side response generation time, epoch seconds.
    pub generated_at: i64,
    pub sensors: Vec<SensorBlock>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn scalar_deserializes_whole_numbers_as_int() {
        let values: Vec<Scalar> =
            serde_json::from_value(json!([null, true, 7, 12.5, "SE"])).unwrap();
        assert_eq!(
            values,
            vec![
                Scalar::Null,
                Scalar::Bool(true),
                Scalar::Int(7),
                Scalar::Float(12.5),
                Scalar::Text("SE".to_string()),
            ]
        );
    }

    #[test]
    fn scalar_as_seconds_truncates_floats_and_rejects_text() {
        assert_eq!(Scalar::Int(1700000000).as_seconds(), Some(1700000000));
        assert_eq!(Scalar::Float(1700000000.9).as_seconds(), Some(1700000000));
        assert_eq!(Scalar::Text("soon".into()).as_seconds(), None);
        assert_eq!(Scalar::Null.as_seconds(), None);
        assert_eq!(Scalar::Float(f64::NAN).as_seconds(), None);
    }

    #[test]
    fn payload_round_trips_the_wire_shape() {
        let body = json!({
            "station_id_uuid": "u1",
            "station_id": 123,
            "generated_at": 1700000000,
            "sensors": [{
                "lsid": 1,
                "sensor_type": 242,
                "data_structure_type": 12,
                "data": [{"ts": 1700000000, "bar_absolute": 29.92, "bar_trend": null}]
            }]
        });
        let payload: Payload = serde_json::from_value(body.clone()).unwrap();
        assert_eq!(payload.sensors.len(), 1);
        assert_eq!(
            payload.sensors[0].data[0].get("bar_absolute"),
            Some(&Scalar::Float(29.92))
        );
        assert_eq!(serde_json::to_value(&payload).unwrap(), body);
    }
}
