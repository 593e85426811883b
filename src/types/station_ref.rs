use std::fmt;

/// Either form of station identifier accepted by the public operations.
///
/// The remote service keys every data-fetch endpoint on the canonical UUID
/// handle; numeric ids are only valid in the `/stations` listing. Operations
/// taking an `impl Into<StationRef>` resolve [`StationRef::Id`] through the
/// listing exactly once, at the operation boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StationRef {
    /// Numeric station id, requires resolution against `/stations`.
    Id(i64),
    /// Canonical handle, used as-is.
    Uuid(String),
}

impl From<i64> for StationRef {
    fn from(id: i64) -> Self {
        StationRef::Id(id)
    }
}

impl From<i32> for StationRef {
    fn from(id: i32) -> Self {
        StationRef::Id(id as i64)
    }
}

impl From<&str> for StationRef {
    fn from(uuid: &str) -> Self {
        StationRef::Uuid(uuid.to_string())
    }
}

impl From<String> for StationRef {
    fn from(uuid: String) -> Self {
        StationRef::Uuid(uuid)
    }
}

impl fmt::Display for StationRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StationRef::Id(id) => write!(f, "station id {id}"),
            StationRef::Uuid(uuid) => write!(f, "station {uuid}"),
        }
    }
}
