use crate::types::payload::Scalar;
use serde::Serialize;
use std::collections::BTreeMap;

/// A denormalized output row of the flatten/merge engine.
///
/// One row per timestamp for historic data, one row total for current
/// conditions. Sensor fields are namespaced as `<sensor_type>_<field>` so two
/// sensors exposing identically named fields (e.g. two anemometers both
/// reporting `wind_speed_last`) never collide.
///
/// Serializes to a single flat JSON object, suitable for line-oriented logs:
///
/// ```
/// use weatherlink::{FlatRow, Scalar};
///
/// let mut row = FlatRow::new(123, "u1");
/// row.generated_at = Some(1700000000);
/// row.fields.insert("512_wind_speed_last".to_string(), Scalar::Float(12.3));
/// let line = serde_json::to_string(&row).unwrap();
/// assert_eq!(
///     line,
///     r#"{"station_id":123,"station_uuid":"u1","generatedAt":1700000000,"512_wind_speed_last":12.3}"#
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlatRow {
    pub station_id: i64,
    pub station_uuid: String,
    /// Response generation time; set for current rows only.
    #[serde(rename = "generatedAt", skip_serializing_if = "Option::is_none")]
    pub generated_at: Option<i64>,
    /// Sample timestamp; set for historic rows only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ts: Option<i64>,
    /// Namespaced sensor fields.
    #[serde(flatten)]
    pub fields: BTreeMap<String, Scalar>,
}

impl FlatRow {
    pub fn new(station_id: i64, station_uuid: impl Into<String>) -> Self {
        Self {
            station_id,
            station_uuid: station_uuid.into(),
            generated_at: None,
            ts: None,
            fields: BTreeMap::new(),
        }
    }
}
