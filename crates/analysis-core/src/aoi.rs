//! Area-of-interest classification.
//!
//! Maps a fixation's mean coordinate to one of a closed set of named
//! screen regions. Classification is a pure, total function: every real
//! `(x, y)` pair gets a label, including negative, out-of-range, and
//! non-finite coordinates (those fall through to the main viewport).

use fixate_session_model::Fixation;
use serde::{Deserialize, Serialize};

/// Named screen regions that fixations are attributed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AoiLabel {
    /// Minimap panel in the top-left corner.
    Minimap,
    /// Export button in the top-right corner.
    ExportButton,
    /// Everything else on screen.
    MainViewport,
}

impl AoiLabel {
    /// All labels in display order.
    pub const ALL: [AoiLabel; 3] = [
        AoiLabel::Minimap,
        AoiLabel::ExportButton,
        AoiLabel::MainViewport,
    ];

    /// Human-readable name.
    pub fn as_str(&self) -> &'static str {
        match self {
            AoiLabel::Minimap => "Minimap",
            AoiLabel::ExportButton => "ExportButton",
            AoiLabel::MainViewport => "MainViewport",
        }
    }
}

impl std::fmt::Display for AoiLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

/// Screen-region boundaries for AOI classification (pixels).
///
/// The regions are evaluated in priority order: minimap, then export
/// button, then the catch-all main viewport. All comparisons are strict.
#[derive(Debug, Clone, Copy)]
pub struct AoiConfig {
    /// Right edge of the minimap region.
    pub minimap_max_x: f64,

    /// Bottom edge of the minimap region.
    pub minimap_max_y: f64,

    /// Left edge of the export-button region.
    pub export_min_x: f64,

    /// Bottom edge of the export-button region.
    pub export_max_y: f64,
}

impl Default for AoiConfig {
    fn default() -> Self {
        Self {
            minimap_max_x: 300.0,
            minimap_max_y: 200.0,
            export_min_x: 1200.0,
            export_max_y: 150.0,
        }
    }
}

impl AoiConfig {
    /// Classify a screen coordinate; first matching region wins.
    pub fn classify(&self, x: f64, y: f64) -> AoiLabel {
        if x < self.minimap_max_x && y < self.minimap_max_y {
            AoiLabel::Minimap
        } else if x > self.export_min_x && y < self.export_max_y {
            AoiLabel::ExportButton
        } else {
            AoiLabel::MainViewport
        }
    }

    /// Classify a fixation by its mean coordinate.
    pub fn classify_fixation(&self, fixation: &Fixation) -> AoiLabel {
        self.classify(fixation.x, fixation.y)
    }
}
