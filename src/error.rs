use crate::log_sink::LogSinkError;
use crate::sensor_data::error::SensorDataError;
use crate::stations::error::StationError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WeatherlinkError {
    #[error(transparent)]
    SensorData(#[from] SensorDataError),

    #[error(transparent)]
    Station(#[from] StationError),

    #[error(transparent)]
    LogSink(#[from] LogSinkError),

    #[error("Environment variable '{0}' is not set")]
    MissingCredential(&'static str),
}
