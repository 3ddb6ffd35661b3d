//! Per-session trajectory summary statistics.
//!
//! Streaming sums over the viewport dwell stream: wall duration, sample
//! count, camera path length in the X-Z plane, and mean absolute angular
//! change between the start and exit markers. Non-finite entries are
//! skipped rather than poisoning the sums.

use fixate_session_model::{SessionInfo, ViewportSample};
use serde::Serialize;

/// Summary statistics for one session's camera trajectory.
#[derive(Debug, Clone, Serialize)]
pub struct TrajectoryMetrics {
    /// Wall duration from session metadata (ms), when both ends were recorded.
    pub duration_ms: Option<i64>,

    /// Number of viewport samples.
    pub n_samples: usize,

    /// Total camera path length in the X-Z plane (world units).
    pub path_length: f64,

    /// Mean of `|exit - start|` over samples where both angles are present.
    pub mean_angle_change: Option<f64>,
}

impl TrajectoryMetrics {
    /// Compute metrics over a session's viewport dwell stream.
    pub fn compute(samples: &[ViewportSample], session: &SessionInfo) -> Self {
        let duration_ms = match (session.start_time, session.end_time) {
            (Some(start), Some(end)) => Some(end - start),
            _ => None,
        };

        let mut path_length = 0.0;
        let mut prev: Option<(f64, f64)> = None;
        for sample in samples {
            let (x, z) = (sample.camera_pos.x, sample.camera_pos.z);
            if x.is_nan() || z.is_nan() {
                continue;
            }
            if let Some((prev_x, prev_z)) = prev {
                path_length += ((x - prev_x).powi(2) + (z - prev_z).powi(2)).sqrt();
            }
            prev = Some((x, z));
        }

        let mut angle_sum = 0.0;
        let mut angle_count = 0usize;
        for sample in samples {
            let delta = (sample.target_angles.exit - sample.target_angles.start).abs();
            if delta.is_nan() {
                continue;
            }
            angle_sum += delta;
            angle_count += 1;
        }
        let mean_angle_change = if angle_count > 0 {
            Some(angle_sum / angle_count as f64)
        } else {
            None
        };

        Self {
            duration_ms,
            n_samples: samples.len(),
            path_length,
            mean_angle_change,
        }
    }

    /// Duration in fractional seconds, when wall-clock metadata exists.
    pub fn duration_secs(&self) -> Option<f64> {
        self.duration_ms.map(|ms| ms as f64 / 1000.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fixate_session_model::{CameraPos, TargetAngles};

    fn viewport_sample(t: i64, pos: (f64, f64, f64), angles: (f64, f64)) -> ViewportSample {
        ViewportSample {
            timestamp: t,
            camera_pos: CameraPos {
                x: pos.0,
                y: pos.1,
                z: pos.2,
            },
            target_angles: TargetAngles {
                start: angles.0,
                exit: angles.1,
            },
        }
    }

    #[test]
    fn test_path_length_sums_xz_steps() {
        let samples = vec![
            viewport_sample(0, (0.0, 1.6, 0.0), (0.0, 90.0)),
            viewport_sample(100, (3.0, 1.6, 4.0), (10.0, 80.0)),
            viewport_sample(200, (3.0, 1.6, 4.0), (20.0, 70.0)),
        ];

        let metrics = TrajectoryMetrics::compute(
            &samples,
            &SessionInfo {
                start_time: Some(1_000),
                end_time: Some(61_000),
            },
        );

        assert_eq!(metrics.n_samples, 3);
        assert_eq!(metrics.duration_ms, Some(60_000));
        assert_eq!(metrics.duration_secs(), Some(60.0));
        assert!((metrics.path_length - 5.0).abs() < 1e-9);
        // |90-0|, |80-10|, |70-20| -> mean 70
        assert!((metrics.mean_angle_change.unwrap() - 70.0).abs() < 1e-9);
    }

    #[test]
    fn test_nan_samples_skip_without_resetting() {
        // The middle sample is dropped but the step from first to last
        // still counts from the last finite point.
        let samples = vec![
            viewport_sample(0, (0.0, 0.0, 0.0), (f64::NAN, f64::NAN)),
            viewport_sample(100, (f64::NAN, 0.0, f64::NAN), (f64::NAN, f64::NAN)),
            viewport_sample(200, (3.0, 0.0, 4.0), (f64::NAN, f64::NAN)),
        ];

        let metrics = TrajectoryMetrics::compute(&samples, &SessionInfo::default());
        assert!((metrics.path_length - 5.0).abs() < 1e-9);
        assert_eq!(metrics.mean_angle_change, None);
        assert_eq!(metrics.duration_ms, None);
    }

    #[test]
    fn test_empty_stream() {
        let metrics = TrajectoryMetrics::compute(&[], &SessionInfo::default());
        assert_eq!(metrics.n_samples, 0);
        assert_eq!(metrics.path_length, 0.0);
        assert_eq!(metrics.mean_angle_change, None);
        assert_eq!(metrics.duration_secs(), None);
    }

    #[test]
    fn test_angle_mean_ignores_partial_nans() {
        let samples = vec![
            viewport_sample(0, (0.0, 0.0, 0.0), (0.0, 30.0)),
            viewport_sample(100, (0.0, 0.0, 0.0), (f64::NAN, 50.0)),
            viewport_sample(200, (0.0, 0.0, 0.0), (10.0, 20.0)),
        ];

        let metrics = TrajectoryMetrics::compute(&samples, &SessionInfo::default());
        // |30-0| and |20-10| -> mean 20; the NaN pair is skipped.
        assert!((metrics.mean_angle_change.unwrap() - 20.0).abs() < 1e-9);
    }
}
