//! Splitting a requested time span into bounded fetch windows.
//!
//! The `/historic` endpoint rejects overly wide ranges, so a span is walked in
//! sub-windows of at most [`DEFAULT_WINDOW_SECONDS`] (or a caller-chosen
//! width). Windowing is pure: no I/O and no failure modes beyond input
//! validation.

use crate::sensor_data::error::SensorDataError;

/// Default window width: one day.
pub const DEFAULT_WINDOW_SECONDS: i64 = 86_400;

/// A half-open interval `[start, end)` in whole seconds since the epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    pub start: i64,
    pub end: i64,
}

/// Lazy sequence of windows covering `[start, end)` with no gaps and no
/// overlaps. `Clone` restarts the sequence from the beginning.
#[derive(Debug, Clone)]
pub struct Windows {
    cursor: i64,
    end: i64,
    window_seconds: i64,
}

impl Iterator for Windows {
    type Item = TimeWindow;

    fn next(&mut self) -> Option<TimeWindow> {
        if self.cursor >= self.end {
            return None;
        }
        let next = self.end.min(self.cursor + self.window_seconds);
        let window = TimeWindow {
            start: self.cursor,
            end: next,
        };
        self.cursor = next;
        Some(window)
    }
}

/// Splits `[start, end)` into windows of at most `window_seconds` each; the
/// final window is clipped to end exactly at `end`.
///
/// # Errors
///
/// [`SensorDataError::InvalidRange`] when `end <= start`,
/// [`SensorDataError::InvalidWindowSeconds`] when `window_seconds <= 0`.
/// Both are caller contract violations and fire before any remote call.
pub fn time_windows(
    start: i64,
    end: i64,
    window_seconds: i64,
) -> Result<Windows, SensorDataError> {
    if end <= start {
        return Err(SensorDataError::InvalidRange { start, end });
    }
    if window_seconds <= 0 {
        return Err(SensorDataError::InvalidWindowSeconds(window_seconds));
    }
    Ok(Windows {
        cursor: start,
        end,
        window_seconds,
    })
}
