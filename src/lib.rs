mod connection;
mod error;
mod log_sink;
mod sensor_data;
mod stations;
mod types;
mod weatherlink;

pub use error::WeatherlinkError;
pub use weatherlink::Weatherlink;

pub use sensor_data::error::SensorDataError;
pub use sensor_data::flatten::{flatten_current, flatten_historic};
pub use sensor_data::window::{time_windows, TimeWindow, Windows, DEFAULT_WINDOW_SECONDS};
pub use stations::error::StationError;

pub use log_sink::{JsonlLog, LogSinkError};

pub use types::flat_row::FlatRow;
pub use types::payload::{DataEntry, Payload, Scalar, SensorBlock};
pub use types::station::{NodeInfo, SensorActivity, SensorInfo, StationInfo, SubscriptionType};
pub use types::station_ref::StationRef;
pub use types::timestamp::Timestamp;
