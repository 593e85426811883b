//! Station and sensor metadata structures for the listing endpoints
//! (`/stations`, `/sensors`, `/sensor-activity`).

use serde::{Deserialize, Serialize};

/// The subscription tier attached to a station.
///
/// Several endpoints are tier-gated: `/current` and `/historic` require Pro or
/// Pro+ on the station. Gated requests come back as permission denials, which
/// the client surfaces as absent results rather than errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubscriptionType {
    Basic,
    Pro,
    #[serde(rename = "Pro+")]
    ProPlus,
}

/// One entry of the `/stations` listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationInfo {
    pub station_id: i64,
    /// The canonical station handle; all data-fetch endpoints key on this,
    /// never on the numeric `station_id`.
    pub station_id_uuid: String,
    pub station_name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub elevation: f64,
    /// IANA timezone name, e.g. "Europe/Berlin".
    pub time_zone: String,
    pub subscription_type: SubscriptionType,
}

/// One entry of the `/nodes` listing: a relay node forwarding sensor data to
/// a station.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeInfo {
    pub node_id: i64,
    #[serde(default)]
    pub node_name: Option<String>,
    #[serde(default)]
    pub station_id: Option<i64>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
}

/// One entry of the `/sensors` listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorInfo {
    pub lsid: i64,
    pub sensor_type: i64,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub manufacturer: Option<String>,
    #[serde(default)]
    pub product_name: Option<String>,
    #[serde(default)]
    pub station_id: Option<i64>,
}

/// One entry of the `/sensor-activity` listing: when a sensor last pushed data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SensorActivity {
    pub lsid: i64,
    /// Epoch seconds of the last received record.
    pub time_received: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn subscription_type_reads_the_plus_spelling() {
        let tiers: Vec<SubscriptionType> =
            serde_json::from_value(json!(["Basic", "Pro", "Pro+"])).unwrap();
        assert_eq!(
            tiers,
            vec![
                SubscriptionType::Basic,
                SubscriptionType::Pro,
                SubscriptionType::ProPlus
            ]
        );
    }

    #[test]
    fn node_info_tolerates_sparse_entries() {
        let node: NodeInfo = serde_json::from_value(json!({
            "node_id": 42,
            "node_name": "Orchard relay"
        }))
        .unwrap();
        assert_eq!(node.node_id, 42);
        assert_eq!(node.node_name.as_deref(), Some("Orchard relay"));
        assert_eq!(node.station_id, None);
    }

    #[test]
    fn station_info_parses_a_listing_entry() {
        let station: StationInfo = serde_json::from_value(json!({
            "station_id": 123,
            "station_id_uuid": "7f0eaf4e-4af4-4f64-a1a1-1fb0c1b6f0a1",
            "station_name": "Rooftop",
            "latitude": 52.52,
            "longitude": 13.40,
            "elevation": 34.0,
            "time_zone": "Europe/Berlin",
            "subscription_type": "Pro+"
        }))
        .unwrap();
        assert_eq!(station.station_id, 123);
        assert_eq!(station.subscription_type, SubscriptionType::ProPlus);
    }
}
