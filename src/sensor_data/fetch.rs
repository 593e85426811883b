//! The permission-aware fetch against `/current` and `/historic`.

use crate::connection::ApiConnection;
use crate::sensor_data::error::SensorDataError;
use crate::sensor_data::window::TimeWindow;
use crate::types::payload::Payload;
use log::{debug, warn};
use reqwest::StatusCode;

#[derive(Debug, Clone)]
pub(crate) struct SensorDataFetcher {
    conn: ApiConnection,
}

impl SensorDataFetcher {
    pub fn new(conn: ApiConnection) -> Self {
        Self { conn }
    }

    /// Issues exactly one GET for the station's current conditions (no window)
    /// or one historic window.
    ///
    /// A permission denial (HTTP 403) is an expected outcome of the domain:
    /// the account's subscription tier does not include the endpoint for this
    /// station. It maps to `Ok(None)`. Every other failure propagates
    /// unchanged; this layer does not guess at causes and never retries.
    pub async fn fetch(
        &self,
        uuid: &str,
        window: Option<TimeWindow>,
    ) -> Result<Option<Payload>, SensorDataError> {
        let url = match window {
            None => self.conn.url(&format!("current/{uuid}")),
            Some(_) => self.conn.url(&format!("historic/{uuid}")),
        };
        debug!("GET {url} window={window:?}");

        let mut request = self.conn.get(&url);
        if let Some(w) = window {
            request = request.query(&[("start-timestamp", w.start), ("end-timestamp", w.end)]);
        }

        let response = request
            .send()
            .await
            .map_err(|e| SensorDataError::NetworkRequest(url.clone(), e))?;

        if response.status() == StatusCode::FORBIDDEN {
            warn!("subscription tier does not permit this request for station {uuid}");
            return Ok(None);
        }

        let response = match response.error_for_status() {
            Ok(resp) => resp,
            Err(e) => {
                return Err(if let Some(status) = e.status() {
                    SensorDataError::HttpStatus {
                        url,
                        status,
                        source: e,
                    }
                } else {
                    SensorDataError::NetworkRequest(url, e)
                });
            }
        };

        let payload = response
            .json::<Payload>()
            .await
            .map_err(|e| SensorDataError::ResponseDecode(url, e))?;
        Ok(Some(payload))
    }
}
