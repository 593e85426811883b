//! The lazy window-by-window stream over a historic range.

use crate::sensor_data::error::SensorDataError;
use crate::sensor_data::fetch::SensorDataFetcher;
use crate::sensor_data::window::Windows;
use crate::types::payload::Payload;
use async_stream::try_stream;
use futures_util::Stream;
use log::debug;

/// Walks the windows strictly in order, one fetch per window, yielding real
/// payloads and silently skipping permission-denied windows. Tier-gating is a
/// property of the account, not of a window, so a denial never aborts the
/// rest of the range; a fully gated range produces a finite, empty stream.
///
/// The stream is single-pass and fetches nothing ahead of the consumer:
/// dropping it after `n` items means no window beyond the `n`-th fetch was
/// ever requested. `uuid == None` (an unresolved numeric id) yields an
/// already-terminal stream.
pub(crate) fn windowed_payloads<'a>(
    fetcher: &'a SensorDataFetcher,
    uuid: Option<String>,
    windows: Windows,
) -> impl Stream<Item = Result<Payload, SensorDataError>> + 'a {
    try_stream! {
        if let Some(uuid) = uuid {
            for window in windows {
                if let Some(payload) = fetcher.fetch(&uuid, Some(window)).await? {
                    yield payload;
                } else {
                    debug!("window [{}, {}) unavailable, skipping", window.start, window.end);
                }
            }
        }
    }
}
