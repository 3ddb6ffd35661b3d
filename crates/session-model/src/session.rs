//! The on-disk session log format recorded by the study client.
//!
//! A log is a single JSON document with four sections, all optional:
//! `sessionInfo`, `mapInfo`, `eyeTracking`, and `viewportDwellTime`.
//! The client is a browser app and its output is lossy: camera and angle
//! fields may be absent, `null`, or the literal string `"NaN"`. Those all
//! coerce to `f64::NAN` here rather than failing the parse; downstream
//! metrics skip non-finite values.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Deserializer, Serialize};

use crate::sample::{GazeSample, TimestampMs};

/// A complete parsed session log.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionLog {
    /// Session wall-clock metadata.
    #[serde(default)]
    pub session_info: SessionInfo,

    /// Dimensions of the maze map shown during the session.
    #[serde(default)]
    pub map_info: MapInfo,

    /// Raw gaze stream in screen pixels.
    #[serde(default)]
    pub eye_tracking: Vec<GazeSample>,

    /// Camera/viewport dwell stream.
    #[serde(default, rename = "viewportDwellTime")]
    pub viewport_dwell: Vec<ViewportSample>,
}

/// Wall-clock start and end of a session (epoch ms).
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionInfo {
    #[serde(default)]
    pub start_time: Option<TimestampMs>,
    #[serde(default)]
    pub end_time: Option<TimestampMs>,
}

/// Maze map dimensions, when recorded.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct MapInfo {
    #[serde(default)]
    pub width: Option<f64>,
    #[serde(default)]
    pub height: Option<f64>,
}

/// One entry of the viewport dwell stream.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewportSample {
    /// Epoch milliseconds at sample time.
    pub timestamp: TimestampMs,

    /// World-space camera position.
    #[serde(default)]
    pub camera_pos: CameraPos,

    /// Angles toward the maze start and exit markers (degrees).
    #[serde(default)]
    pub target_angles: TargetAngles,
}

/// World-space camera position; missing axes parse as NaN.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CameraPos {
    #[serde(default = "nan", deserialize_with = "lenient_f64")]
    pub x: f64,
    #[serde(default = "nan", deserialize_with = "lenient_f64")]
    pub y: f64,
    #[serde(default = "nan", deserialize_with = "lenient_f64")]
    pub z: f64,
}

/// Angles toward the start and exit markers; missing values parse as NaN.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TargetAngles {
    #[serde(default = "nan", rename = "Start", deserialize_with = "lenient_f64")]
    pub start: f64,
    #[serde(default = "nan", rename = "Exit", deserialize_with = "lenient_f64")]
    pub exit: f64,
}

impl Default for CameraPos {
    fn default() -> Self {
        Self {
            x: f64::NAN,
            y: f64::NAN,
            z: f64::NAN,
        }
    }
}

impl Default for TargetAngles {
    fn default() -> Self {
        Self {
            start: f64::NAN,
            exit: f64::NAN,
        }
    }
}

impl SessionInfo {
    /// Wall-clock start as a UTC datetime, when recorded.
    pub fn start_datetime(&self) -> Option<chrono::DateTime<chrono::Utc>> {
        self.start_time.and_then(epoch_ms_to_utc)
    }

    /// Wall-clock end as a UTC datetime, when recorded.
    pub fn end_datetime(&self) -> Option<chrono::DateTime<chrono::Utc>> {
        self.end_time.and_then(epoch_ms_to_utc)
    }
}

fn epoch_ms_to_utc(ms: TimestampMs) -> Option<chrono::DateTime<chrono::Utc>> {
    use chrono::TimeZone;
    chrono::Utc.timestamp_millis_opt(ms).single()
}

fn nan() -> f64 {
    f64::NAN
}

/// Accept a JSON number, a numeric string, the literal `"NaN"`, or `null`.
/// Anything unparseable coerces to NaN.
fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        Some(Raw::Number(value)) => value,
        Some(Raw::Text(text)) => text.trim().parse().unwrap_or(f64::NAN),
        None => f64::NAN,
    })
}

impl SessionLog {
    /// Parse a log from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load a log from a file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SessionLogError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| SessionLogError::IoError {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_json_str(&content).map_err(|e| SessionLogError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// The gaze stream.
    pub fn gaze_samples(&self) -> &[GazeSample] {
        &self.eye_tracking
    }

    /// Session duration from wall-clock metadata, when both ends were recorded.
    pub fn duration_ms(&self) -> Option<i64> {
        match (self.session_info.start_time, self.session_info.end_time) {
            (Some(start), Some(end)) => Some(end - start),
            _ => None,
        }
    }
}

/// Errors that can occur when reading session logs.
#[derive(Debug, thiserror::Error)]
pub enum SessionLogError {
    #[error("I/O error at {path}: {source}")]
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Parse error in {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: serde_json::Error,
    },
}
