//! Fixation records produced by the dispersion-threshold detector.

use serde::{Deserialize, Serialize};

use crate::sample::TimestampMs;

/// A period of stable gaze.
///
/// `(x, y)` is the mean coordinate of the samples that make up the
/// fixation. The record is immutable once emitted; the time interval
/// `[start_time, end_time]` of consecutive fixations never overlaps.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Fixation {
    /// Timestamp of the first contributing sample (epoch ms).
    pub start_time: TimestampMs,

    /// Timestamp of the last contributing sample (epoch ms).
    pub end_time: TimestampMs,

    /// `end_time - start_time` (ms).
    pub duration: i64,

    /// Mean X of the contributing samples (pixels).
    pub x: f64,

    /// Mean Y of the contributing samples (pixels).
    pub y: f64,
}

impl Fixation {
    /// Build a fixation from its span and mean coordinate.
    pub fn new(start_time: TimestampMs, end_time: TimestampMs, x: f64, y: f64) -> Self {
        Self {
            start_time,
            end_time,
            duration: end_time - start_time,
            x,
            y,
        }
    }

    /// The time interval as a `(start, end)` pair.
    pub fn span(&self) -> (TimestampMs, TimestampMs) {
        (self.start_time, self.end_time)
    }

    /// The mean position as an `(x, y)` pair.
    pub fn position(&self) -> (f64, f64) {
        (self.x, self.y)
    }
}
