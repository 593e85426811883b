//! This module provides the main entry point for interacting with the
//! WeatherLink v2 API. It covers station and sensor listings, current
//! conditions and windowed historic data, accepting stations by numeric id
//! or canonical UUID handle.

use crate::connection::ApiConnection;
use crate::error::WeatherlinkError;
use crate::sensor_data::error::SensorDataError;
use crate::sensor_data::fetch::SensorDataFetcher;
use crate::sensor_data::historic::windowed_payloads;
use crate::sensor_data::window::{time_windows, TimeWindow, DEFAULT_WINDOW_SECONDS};
use crate::stations::fetch::StationFetcher;
use crate::types::payload::Payload;
use crate::types::station::{NodeInfo, SensorActivity, SensorInfo, StationInfo};
use crate::types::station_ref::StationRef;
use crate::types::timestamp::Timestamp;
use bon::bon;
use futures_util::Stream;
use std::env;

const API_KEY_VAR: &str = "WEATHERLINK_API_KEY";
const API_SECRET_VAR: &str = "WEATHERLINK_API_SECRET";

/// The main client for the WeatherLink v2 API.
///
/// Every request carries the account's API key and secret; both are attached
/// automatically. Data-fetch operations accept a station either by numeric id
/// or by canonical UUID handle ([`StationRef`]) and resolve the numeric form
/// through the station listing once per call.
///
/// Two outcomes of the remote service are modelled as absent results rather
/// than errors, because they are first-class properties of the domain:
/// a numeric id missing from the listing, and a permission denial for a
/// tier-gated endpoint. Everything else surfaces as a typed error.
///
/// # Examples
///
/// ```
/// use weatherlink::Weatherlink;
///
/// let client = Weatherlink::builder()
///     .api_key("my-key")
///     .api_secret("my-secret")
///     .build();
/// ```
#[derive(Debug, Clone)]
pub struct Weatherlink {
    stations: StationFetcher,
    sensor_data: SensorDataFetcher,
}

#[bon]
impl Weatherlink {
    /// Creates a new client.
    ///
    /// # Arguments
    ///
    /// * `.api_key(...)`: **Required.** The WeatherLink API key (sent as the
    ///   `api-key` query parameter).
    /// * `.api_secret(...)`: **Required.** The API secret (sent as the
    ///   `X-Api-Secret` header).
    /// * `.base_url(...)`: Optional. Overrides the production endpoint
    ///   `https://api.weatherlink.com/v2`; mainly useful for tests.
    #[builder]
    pub fn new(
        #[builder(into)] api_key: String,
        #[builder(into)] api_secret: String,
        #[builder(into)] base_url: Option<String>,
    ) -> Self {
        let conn = ApiConnection::new(base_url, api_key, api_secret);
        Self {
            stations: StationFetcher::new(conn.clone()),
            sensor_data: SensorDataFetcher::new(conn),
        }
    }

    /// Creates a client from the `WEATHERLINK_API_KEY` and
    /// `WEATHERLINK_API_SECRET` environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`WeatherlinkError::MissingCredential`] naming the first
    /// variable that is unset.
    pub fn from_env() -> Result<Self, WeatherlinkError> {
        let api_key =
            env::var(API_KEY_VAR).map_err(|_| WeatherlinkError::MissingCredential(API_KEY_VAR))?;
        let api_secret = env::var(API_SECRET_VAR)
            .map_err(|_| WeatherlinkError::MissingCredential(API_SECRET_VAR))?;
        Ok(Self::builder().api_key(api_key).api_secret(api_secret).build())
    }

    /// Lists the stations visible to this API key.
    ///
    /// # Examples
    ///
    /// ```
    /// # use weatherlink::{Weatherlink, WeatherlinkError};
    /// # async fn run() -> Result<(), WeatherlinkError> {
    /// let client = Weatherlink::from_env()?;
    /// for station in client.get_stations().await? {
    ///     println!("{} ({})", station.station_name, station.station_id_uuid);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get_stations(&self) -> Result<Vec<StationInfo>, WeatherlinkError> {
        Ok(self.stations.get_stations().await?)
    }

    /// Lists the relay nodes attached to the account's stations.
    pub async fn get_nodes(&self) -> Result<Vec<NodeInfo>, WeatherlinkError> {
        Ok(self.stations.get_nodes().await?)
    }

    /// Lists the sensors attached to the account's stations.
    pub async fn get_sensors(&self) -> Result<Vec<SensorInfo>, WeatherlinkError> {
        Ok(self.stations.get_sensors().await?)
    }

    /// Reports when each sensor last pushed data.
    pub async fn get_sensor_activity(&self) -> Result<Vec<SensorActivity>, WeatherlinkError> {
        Ok(self.stations.get_sensor_activity().await?)
    }

    /// Fetches the current conditions of a station.
    ///
    /// # Arguments
    ///
    /// * `station` - Numeric id or canonical UUID handle; numeric ids are
    ///   resolved through the station listing first.
    ///
    /// # Returns
    ///
    /// `Ok(None)` when the station id cannot be resolved or when the
    /// account's subscription tier does not include the `/current` endpoint
    /// for this station; `Ok(Some(payload))` otherwise.
    ///
    /// # Errors
    ///
    /// [`WeatherlinkError::Station`] for listing failures during resolution,
    /// [`WeatherlinkError::SensorData`] for transport failures, unexpected
    /// statuses or undecodable bodies. No retries are attempted.
    ///
    /// # Examples
    ///
    /// ```
    /// # use weatherlink::{flatten_current, Weatherlink, WeatherlinkError};
    /// # async fn run() -> Result<(), WeatherlinkError> {
    /// let client = Weatherlink::from_env()?;
    /// if let Some(payload) = client.get_current("7f0eaf4e-4af4-4f64-a1a1-1fb0c1b6f0a1").await? {
    ///     let row = flatten_current(&payload);
    ///     println!("{}", serde_json::to_string(&row).unwrap());
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get_current(
        &self,
        station: impl Into<StationRef>,
    ) -> Result<Option<Payload>, WeatherlinkError> {
        let station = station.into();
        let Some(uuid) = self.stations.resolve(&station).await? else {
            return Ok(None);
        };
        Ok(self.sensor_data.fetch(&uuid, None).await?)
    }

    /// Fetches one historic window `[start, end)` of a station.
    ///
    /// The endpoint rejects wide ranges; for spans beyond the service's
    /// per-request limit use [`Weatherlink::iter_historic`], which pages the
    /// range for you.
    ///
    /// # Arguments
    ///
    /// * `station` - Numeric id or canonical UUID handle.
    /// * `start`, `end` - Epoch seconds, epoch milliseconds or
    ///   `chrono::DateTime<Utc>` (see [`Timestamp`]).
    ///
    /// # Returns
    ///
    /// `Ok(None)` on an unresolved id or a tier-gated denial, `Ok(Some(_))`
    /// otherwise.
    ///
    /// # Errors
    ///
    /// [`SensorDataError::InvalidRange`] when `end <= start`, raised before
    /// any request is made; otherwise as for [`Weatherlink::get_current`].
    pub async fn get_historic(
        &self,
        station: impl Into<StationRef>,
        start: impl Into<Timestamp>,
        end: impl Into<Timestamp>,
    ) -> Result<Option<Payload>, WeatherlinkError> {
        let (start, end) = (start.into().seconds(), end.into().seconds());
        if end <= start {
            return Err(SensorDataError::InvalidRange { start, end }.into());
        }
        let station = station.into();
        let Some(uuid) = self.stations.resolve(&station).await? else {
            return Ok(None);
        };
        let window = TimeWindow { start, end };
        Ok(self.sensor_data.fetch(&uuid, Some(window)).await?)
    }

    /// Streams historic payloads over `[start, end)`, one fetch per window of
    /// at most `window_seconds` (default one day).
    ///
    /// Windows are fetched strictly sequentially and only on demand: the
    /// stream never reads ahead, and dropping it stops all further fetches.
    /// Tier-gated windows are skipped silently, so a fully gated account
    /// observes a finite, empty stream rather than an error. An unresolved
    /// numeric id likewise produces an empty stream (after a logged warning).
    /// The stream is single-pass; call this method again to restart.
    ///
    /// # Errors
    ///
    /// [`SensorDataError::InvalidRange`] / [`SensorDataError::InvalidWindowSeconds`]
    /// before any request; hard fetch errors end the stream as its final item.
    ///
    /// # Examples
    ///
    /// ```
    /// # use futures_util::{pin_mut, StreamExt};
    /// # use weatherlink::{flatten_historic, Weatherlink, WeatherlinkError};
    /// # async fn run() -> Result<(), WeatherlinkError> {
    /// let client = Weatherlink::from_env()?;
    /// let stream = client
    ///     .iter_historic(123i64, 1700000000i64, 1700259200i64, None)
    ///     .await?;
    /// pin_mut!(stream);
    /// while let Some(payload) = stream.next().await {
    ///     for row in flatten_historic(&payload?) {
    ///         println!("{}", serde_json::to_string(&row).unwrap());
    ///     }
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn iter_historic(
        &self,
        station: impl Into<StationRef>,
        start: impl Into<Timestamp>,
        end: impl Into<Timestamp>,
        window_seconds: Option<i64>,
    ) -> Result<impl Stream<Item = Result<Payload, SensorDataError>> + '_, WeatherlinkError> {
        let windows = time_windows(
            start.into().seconds(),
            end.into().seconds(),
            window_seconds.unwrap_or(DEFAULT_WINDOW_SECONDS),
        )?;
        let station = station.into();
        let uuid = self.stations.resolve(&station).await?;
        Ok(windowed_payloads(&self.sensor_data, uuid, windows))
    }
}
