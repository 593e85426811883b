//! Listing endpoints and station-handle resolution.

use crate::connection::ApiConnection;
use crate::stations::error::StationError;
use crate::types::station::{NodeInfo, SensorActivity, SensorInfo, StationInfo};
use crate::types::station_ref::StationRef;
use log::{debug, warn};
use serde::de::DeserializeOwned;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct StationsResponse {
    stations: Vec<StationInfo>,
}

#[derive(Debug, Deserialize)]
struct NodesResponse {
    nodes: Vec<NodeInfo>,
}

#[derive(Debug, Deserialize)]
struct SensorsResponse {
    sensors: Vec<SensorInfo>,
}

#[derive(Debug, Deserialize)]
struct SensorActivityResponse {
    sensor_activity: Vec<SensorActivity>,
}

#[derive(Debug, Clone)]
pub(crate) struct StationFetcher {
    conn: ApiConnection,
}

impl StationFetcher {
    pub fn new(conn: ApiConnection) -> Self {
        Self { conn }
    }

    pub async fn get_stations(&self) -> Result<Vec<StationInfo>, StationError> {
        let body: StationsResponse = self.get_json("stations").await?;
        Ok(body.stations)
    }

    pub async fn get_nodes(&self) -> Result<Vec<NodeInfo>, StationError> {
        let body: NodesResponse = self.get_json("nodes").await?;
        Ok(body.nodes)
    }

    pub async fn get_sensors(&self) -> Result<Vec<SensorInfo>, StationError> {
        let body: SensorsResponse = self.get_json("sensors").await?;
        Ok(body.sensors)
    }

    pub async fn get_sensor_activity(&self) -> Result<Vec<SensorActivity>, StationError> {
        let body: SensorActivityResponse = self.get_json("sensor-activity").await?;
        Ok(body.sensor_activity)
    }

    /// Resolves either identifier form to the canonical UUID handle.
    ///
    /// A UUID passes through without a remote call. A numeric id is looked up
    /// in the `/stations` listing; no match is not an error but an absent
    /// result, so callers short-circuit instead of issuing a request the
    /// service would reject.
    pub async fn resolve(&self, station: &StationRef) -> Result<Option<String>, StationError> {
        match station {
            StationRef::Uuid(uuid) => Ok(Some(uuid.clone())),
            StationRef::Id(id) => {
                let stations = self.get_stations().await?;
                match stations.into_iter().find(|s| s.station_id == *id) {
                    Some(found) => Ok(Some(found.station_id_uuid)),
                    None => {
                        warn!("{station} is not in the station listing");
                        Ok(None)
                    }
                }
            }
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, StationError> {
        let url = self.conn.url(path);
        debug!("GET {url}");
        let response = self
            .conn
            .get(&url)
            .send()
            .await
            .map_err(|e| StationError::NetworkRequest(url.clone(), e))?;

        let response = match response.error_for_status() {
            Ok(resp) => resp,
            Err(e) => {
                return Err(if let Some(status) = e.status() {
                    StationError::HttpStatus {
                        url,
                        status,
                        source: e,
                    }
                } else {
                    StationError::NetworkRequest(url, e)
                });
            }
        };

        response
            .json::<T>()
            .await
            .map_err(|e| StationError::ResponseDecode(url, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn station_entry(id: i64, uuid: &str) -> serde_json::Value {
        json!({
            "station_id": id,
            "station_id_uuid": uuid,
            "station_name": format!("station-{id}"),
            "latitude": 52.52,
            "longitude": 13.40,
            "elevation": 34.0,
            "time_zone": "Europe/Berlin",
            "subscription_type": "Pro"
        })
    }

    fn fetcher_for(server: &MockServer) -> StationFetcher {
        StationFetcher::new(ApiConnection::new(
            Some(server.uri()),
            "test-key".to_string(),
            "test-secret".to_string(),
        ))
    }

    #[tokio::test]
    async fn get_stations_attaches_credentials_and_parses_listing() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/stations"))
            .and(query_param("api-key", "test-key"))
            .and(header("X-Api-Secret", "test-secret"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "stations": [station_entry(1, "u1"), station_entry(2, "u2")]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let stations = fetcher_for(&server).get_stations().await.unwrap();
        assert_eq!(stations.len(), 2);
        assert_eq!(stations[0].station_id_uuid, "u1");
    }

    #[tokio::test]
    async fn resolve_passes_uuid_through_without_a_request() {
        let server = MockServer::start().await;
        // No mocks mounted: any request would fail the test via the error path.
        let resolved = fetcher_for(&server)
            .resolve(&StationRef::Uuid("u1".to_string()))
            .await
            .unwrap();
        assert_eq!(resolved.as_deref(), Some("u1"));
        assert!(server.received_requests().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn resolve_looks_up_numeric_ids_in_the_listing() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/stations"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "stations": [station_entry(1, "u1"), station_entry(2, "u2")]
            })))
            .mount(&server)
            .await;

        let resolved = fetcher_for(&server)
            .resolve(&StationRef::Id(2))
            .await
            .unwrap();
        assert_eq!(resolved.as_deref(), Some("u2"));
    }

    #[tokio::test]
    async fn resolve_returns_none_for_an_unknown_id() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/stations"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({ "stations": [station_entry(1, "u1")] })),
            )
            .mount(&server)
            .await;

        let resolved = fetcher_for(&server)
            .resolve(&StationRef::Id(999))
            .await
            .unwrap();
        assert_eq!(resolved, None);
    }

    #[tokio::test]
    async fn unexpected_status_is_a_hard_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/stations"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let err = fetcher_for(&server).get_stations().await.unwrap_err();
        match err {
            StationError::HttpStatus { status, .. } => {
                assert_eq!(status, reqwest::StatusCode::INTERNAL_SERVER_ERROR)
            }
            other => panic!("expected HttpStatus, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn node_listing_parses() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/nodes"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "nodes": [
                    {"node_id": 42, "node_name": "Orchard relay", "station_id": 1},
                    {"node_id": 43}
                ]
            })))
            .mount(&server)
            .await;

        let nodes = fetcher_for(&server).get_nodes().await.unwrap();
        assert_eq!(nodes.len(), 2);
        assert_eq!(nodes[0].node_id, 42);
        assert_eq!(nodes[0].node_name.as_deref(), Some("Orchard relay"));
        assert_eq!(nodes[1].node_name, None);
    }

    #[tokio::test]
    async fn sensor_listings_parse() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/sensors"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "sensors": [{"lsid": 5, "sensor_type": 242, "product_name": "Barometer"}]
            })))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/sensor-activity"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "sensor_activity": [{"lsid": 5, "time_received": 1700000000}]
            })))
            .mount(&server)
            .await;

        let fetcher = fetcher_for(&server);
        let sensors = fetcher.get_sensors().await.unwrap();
        assert_eq!(sensors[0].product_name.as_deref(), Some("Barometer"));
        assert_eq!(sensors[0].category, None);

        let activity = fetcher.get_sensor_activity().await.unwrap();
        assert_eq!(activity, vec![SensorActivity { lsid: 5, time_received: 1700000000 }]);
    }
}
