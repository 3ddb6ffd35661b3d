//! Fixate Analysis Core
//!
//! Turns raw gaze streams into reportable results:
//! - **Fixation Detection:** dispersion/duration windowing over the gaze stream
//! - **AOI Classification:** map a fixation's coordinate to a named screen region
//! - **Aggregation:** tabulate fixation counts per region
//! - **Trajectory Metrics:** per-session camera path statistics
//! - **Heatmap:** gaze density grid for inspection
//!
//! This crate is pure computation — no I/O, no platform dependencies.
//! All inputs are data; all outputs are data.

pub mod aggregate;
pub mod aoi;
pub mod fixation;
pub mod heatmap;
pub mod trajectory;

pub use aggregate::FixationSummary;
pub use aoi::{AoiConfig, AoiLabel};
pub use fixation::{FixationConfig, FixationDetector};
