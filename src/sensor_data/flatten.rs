//! Reshaping nested per-sensor payloads into flat, timestamp-keyed rows.
//!
//! This is the one place where cross-sensor data for a moment in time becomes
//! a single denormalized record, the building block a row-oriented log or
//! store needs.

use crate::types::flat_row::FlatRow;
use crate::types::payload::Payload;
use std::collections::BTreeMap;

/// Flattens a `/current` payload into a single row.
///
/// Starts from the payload header (`station_id`, `station_uuid`,
/// `generatedAt`), then takes only the first record of each sensor block (the
/// most recent sample; empty blocks are skipped) and writes every field under
/// the key `"<sensor_type>_<field>"`. The namespace prefix guarantees blocks
/// of different sensor types never overwrite each other.
pub fn flatten_current(payload: &Payload) -> FlatRow {
    let mut row = FlatRow::new(payload.station_id, payload.station_id_uuid.clone());
    row.generated_at = Some(payload.generated_at);

    for block in &payload.sensors {
        let Some(latest) = block.data.first() else {
            continue;
        };
        for (name, value) in latest {
            row.fields
                .insert(format!("{}_{}", block.sensor_type, name), value.clone());
        }
    }
    row
}

/// Merges a `/historic` payload into rows keyed by sample timestamp, sorted
/// ascending by `ts`.
///
/// Every record of every sensor block lands in the row for its `ts` (records
/// without a numeric `ts` are discarded). New rows seed the station header;
/// writes to the same `(sensor_type, field, ts)` key overwrite, which is a
/// legitimate update rather than a collision. Input order of blocks and
/// records does not affect the merged result.
pub fn flatten_historic(payload: &Payload) -> Vec<FlatRow> {
    let mut rows: BTreeMap<i64, FlatRow> = BTreeMap::new();

    for block in &payload.sensors {
        for entry in &block.data {
            let Some(ts) = entry.get("ts").and_then(|v| v.as_seconds()) else {
                continue;
            };
            let row = rows.entry(ts).or_insert_with(|| {
                let mut row = FlatRow::new(payload.station_id, payload.station_id_uuid.clone());
                row.ts = Some(ts);
                row
            });
            for (name, value) in entry {
                if name == "ts" {
                    continue;
                }
                row.fields
                    .insert(format!("{}_{}", block.sensor_type, name), value.clone());
            }
        }
    }

    rows.into_values().collect()
}
