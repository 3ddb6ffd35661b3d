//! Fixate Session Model
//!
//! Defines the core data contracts for Fixate analyses:
//! - **Samples:** Timestamped gaze points in screen-pixel coordinates
//! - **Fixations:** Periods of stable gaze produced by the detector
//! - **Session logs:** The on-disk JSON format recorded by the study client
//!   (session metadata, gaze stream, viewport dwell stream)
//!
//! Timestamps are integer Unix epoch milliseconds as recorded by the
//! browser client; coordinates are screen pixels.

pub mod fixation;
pub mod sample;
pub mod session;

pub use fixation::*;
pub use sample::*;
pub use session::*;
