use chrono::{DateTime, Utc};

/// A point in time in whole seconds since the Unix epoch.
///
/// Historic operations take `impl Into<Timestamp>` so callers can pass epoch
/// seconds, epoch milliseconds or a [`chrono::DateTime<Utc>`]:
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use weatherlink::Timestamp;
///
/// assert_eq!(Timestamp::from(1700000000i64).seconds(), 1700000000);
/// // Values above ~5138 AD in seconds are taken as milliseconds.
/// assert_eq!(Timestamp::from(1700000000000i64).seconds(), 1700000000);
/// let dt = Utc.timestamp_opt(1700000000, 0).unwrap();
/// assert_eq!(Timestamp::from(dt).seconds(), 1700000000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Timestamp(i64);

/// Integer inputs above this bound are interpreted as epoch milliseconds.
const MILLISECOND_CUTOFF: i64 = 100_000_000_000;

impl Timestamp {
    pub fn seconds(self) -> i64 {
        self.0
    }
}

impl From<i64> for Timestamp {
    fn from(value: i64) -> Self {
        if value > MILLISECOND_CUTOFF {
            Timestamp(value / 1000)
        } else {
            Timestamp(value)
        }
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(value: DateTime<Utc>) -> Self {
        Timestamp(value.timestamp())
    }
}
