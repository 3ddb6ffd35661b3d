//! Fixation detection: dispersion/duration windowing over the gaze stream.
//!
//! Segments an ordered gaze stream into *fixations*: maximal windows whose
//! bounding-box dispersion stays within a threshold for at least a minimum
//! duration.
//!
//! # Algorithm
//!
//! 1. **Anchor** a window at sample `i` and grow a trial end `j` from `i + 1`.
//! 2. **Dispersion** of the closed window `[i, j]` is
//!    `(max_x − min_x) + (max_y − min_y)` over its samples; a value exactly
//!    at the threshold still counts as inside.
//! 3. **Breach:** on the first strict excess at `j`, the window up to
//!    `j − 1` becomes a fixation if it lasted long enough, and scanning
//!    resumes at `j`. A too-short window instead slides the anchor forward
//!    by one sample and re-examines the rest.
//! 4. **End of stream:** a window that runs out of samples without a breach
//!    is emitted as one final fixation if it lasted long enough.
//!
//! Each scan restart may re-visit samples, so the worst case is O(N²);
//! session-sized logs (thousands of samples) stay well inside that.

use fixate_session_model::{Fixation, GazeSample, TimestampMs};

/// Thresholds for fixation detection.
#[derive(Debug, Clone, Copy)]
pub struct FixationConfig {
    /// Maximum bounding-box dispersion of a window (pixels).
    pub max_dispersion: f64,

    /// Minimum duration of a fixation (milliseconds).
    pub min_duration_ms: i64,
}

impl Default for FixationConfig {
    fn default() -> Self {
        Self {
            max_dispersion: 50.0,
            min_duration_ms: 100,
        }
    }
}

/// The dispersion-threshold fixation detector.
pub struct FixationDetector {
    config: FixationConfig,
}

/// Result of growing one window from an anchor sample.
enum ScanOutcome {
    /// The window breached dispersion after lasting long enough: emit the
    /// fixation and resume scanning at the breaching sample.
    Emit {
        fixation: Fixation,
        next_anchor: usize,
    },

    /// The window breached dispersion before lasting long enough: advance
    /// the anchor by one sample; the breaching sample is re-examined as
    /// part of the shrunk window.
    Slide,

    /// The stream ended without a breach. The remaining window is emitted
    /// only if it lasted long enough; detection terminates either way.
    EndOfStream { fixation: Option<Fixation> },
}

impl FixationDetector {
    /// Create a detector with the given thresholds.
    pub fn new(config: FixationConfig) -> Self {
        Self { config }
    }

    /// Create a detector with default thresholds.
    pub fn with_defaults() -> Self {
        Self::new(FixationConfig::default())
    }

    /// The configured thresholds.
    pub fn config(&self) -> &FixationConfig {
        &self.config
    }

    /// Segment an ordered gaze stream into fixations.
    ///
    /// Emitted fixations are chronologically disjoint, each at least
    /// `min_duration_ms` long, and each window's constituent samples stay
    /// within `max_dispersion`. Fewer than two samples yield no output
    /// since no window can be tested. Samples are assumed ordered by
    /// timestamp; coordinates are taken as-is.
    pub fn detect(&self, samples: &[GazeSample]) -> Vec<Fixation> {
        let mut fixations = Vec::new();
        if samples.len() < 2 {
            return fixations;
        }

        let mut anchor = 0;
        while anchor < samples.len() {
            match self.scan_from(samples, anchor) {
                ScanOutcome::Emit {
                    fixation,
                    next_anchor,
                } => {
                    fixations.push(fixation);
                    anchor = next_anchor;
                }
                ScanOutcome::Slide => anchor += 1,
                ScanOutcome::EndOfStream { fixation } => {
                    fixations.extend(fixation);
                    break;
                }
            }
        }

        tracing::debug!(
            fixations = fixations.len(),
            samples = samples.len(),
            "fixation detection complete"
        );
        fixations
    }

    /// Grow a single window anchored at `anchor` until it breaches
    /// dispersion or runs out of samples.
    fn scan_from(&self, samples: &[GazeSample], anchor: usize) -> ScanOutcome {
        let start_time = samples[anchor].timestamp;
        let mut window = WindowStats::seeded(&samples[anchor]);

        let mut end = anchor + 1;
        while end < samples.len() {
            let candidate = &samples[end];
            if window.dispersion_with(candidate) > self.config.max_dispersion {
                let last_inside = samples[end - 1].timestamp;
                if last_inside - start_time >= self.config.min_duration_ms {
                    // The breaching sample stays outside the emitted span
                    // and outside its mean.
                    return ScanOutcome::Emit {
                        fixation: window.to_fixation(start_time, last_inside),
                        next_anchor: end,
                    };
                }
                return ScanOutcome::Slide;
            }
            window.absorb(candidate);
            end += 1;
        }

        let last = samples[samples.len() - 1].timestamp;
        let fixation = if last - start_time >= self.config.min_duration_ms {
            Some(window.to_fixation(start_time, last))
        } else {
            None
        };
        ScanOutcome::EndOfStream { fixation }
    }
}

/// Running bounding box and coordinate sums for a growing window.
#[derive(Debug, Clone)]
struct WindowStats {
    min_x: f64,
    max_x: f64,
    min_y: f64,
    max_y: f64,
    sum_x: f64,
    sum_y: f64,
    count: usize,
}

impl WindowStats {
    fn seeded(sample: &GazeSample) -> Self {
        Self {
            min_x: sample.x,
            max_x: sample.x,
            min_y: sample.y,
            max_y: sample.y,
            sum_x: sample.x,
            sum_y: sample.y,
            count: 1,
        }
    }

    /// Dispersion of the window if `sample` were included.
    fn dispersion_with(&self, sample: &GazeSample) -> f64 {
        (self.max_x.max(sample.x) - self.min_x.min(sample.x))
            + (self.max_y.max(sample.y) - self.min_y.min(sample.y))
    }

    fn absorb(&mut self, sample: &GazeSample) {
        self.min_x = self.min_x.min(sample.x);
        self.max_x = self.max_x.max(sample.x);
        self.min_y = self.min_y.min(sample.y);
        self.max_y = self.max_y.max(sample.y);
        self.sum_x += sample.x;
        self.sum_y += sample.y;
        self.count += 1;
    }

    fn to_fixation(&self, start_time: TimestampMs, end_time: TimestampMs) -> Fixation {
        let n = self.count as f64;
        Fixation::new(start_time, end_time, self.sum_x / n, self.sum_y / n)
    }
}
