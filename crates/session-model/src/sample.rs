//! Gaze sample types for the recorded eye-tracking stream.
//!
//! Samples arrive from the ingestion layer already ordered by timestamp.
//! The analysis code assumes non-decreasing timestamps but does not enforce
//! them and does not deduplicate.

use serde::{Deserialize, Serialize};

/// Unix epoch timestamp in milliseconds, as recorded by the study client.
pub type TimestampMs = i64;

/// A single gaze sample in screen-pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GazeSample {
    /// Epoch milliseconds at sample time.
    pub timestamp: TimestampMs,

    /// Screen X coordinate (pixels).
    pub x: f64,

    /// Screen Y coordinate (pixels).
    pub y: f64,
}

impl GazeSample {
    /// Create a gaze sample.
    pub fn new(timestamp: TimestampMs, x: f64, y: f64) -> Self {
        Self { timestamp, x, y }
    }

    /// The sample position as an `(x, y)` pair.
    pub fn position(&self) -> (f64, f64) {
        (self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_roundtrip() {
        let sample = GazeSample::new(1_733_820_000_123, 512.5, 384.0);
        let json = serde_json::to_string(&sample).unwrap();
        let parsed: GazeSample = serde_json::from_str(&json).unwrap();
        assert_eq!(sample, parsed);
        assert_eq!(parsed.position(), (512.5, 384.0));
    }
}
