//! Per-AOI tabulation of detected fixations.

use std::collections::HashMap;

use fixate_session_model::Fixation;
use serde::Serialize;

use crate::aoi::{AoiConfig, AoiLabel};

/// A fixation together with its derived AOI label.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct LabeledFixation {
    #[serde(flatten)]
    pub fixation: Fixation,
    pub aoi: AoiLabel,
}

/// Label every fixation by its mean coordinate.
pub fn label_fixations(fixations: &[Fixation], aoi: &AoiConfig) -> Vec<LabeledFixation> {
    fixations
        .iter()
        .map(|fixation| LabeledFixation {
            fixation: *fixation,
            aoi: aoi.classify_fixation(fixation),
        })
        .collect()
}

/// Fixation counts per AOI, plus the totals a report needs.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FixationSummary {
    /// Fixation count per AOI label; labels with no fixations are absent.
    pub aoi_counts: HashMap<AoiLabel, usize>,

    /// Total number of detected fixations.
    pub total_fixations: usize,

    /// Number of raw gaze samples the detector consumed.
    pub total_samples: usize,
}

impl FixationSummary {
    /// Tabulate already-labeled fixations.
    pub fn from_labeled(labeled: &[LabeledFixation], total_samples: usize) -> Self {
        let mut aoi_counts: HashMap<AoiLabel, usize> = HashMap::new();
        for entry in labeled {
            *aoi_counts.entry(entry.aoi).or_insert(0) += 1;
        }
        Self {
            aoi_counts,
            total_fixations: labeled.len(),
            total_samples,
        }
    }

    /// Label and tabulate in one step.
    pub fn tally(fixations: &[Fixation], aoi: &AoiConfig, total_samples: usize) -> Self {
        Self::from_labeled(&label_fixations(fixations, aoi), total_samples)
    }

    /// Count for a single label (zero when absent).
    pub fn count(&self, label: AoiLabel) -> usize {
        self.aoi_counts.get(&label).copied().unwrap_or(0)
    }

    /// `(label, count)` pairs for every label, in display order.
    pub fn ordered_counts(&self) -> Vec<(AoiLabel, usize)> {
        AoiLabel::ALL
            .iter()
            .map(|label| (*label, self.count(*label)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixation_at(x: f64, y: f64) -> Fixation {
        Fixation::new(0, 150, x, y)
    }

    #[test]
    fn test_counts_sum_to_total() {
        let fixations = vec![
            fixation_at(100.0, 100.0),
            fixation_at(1300.0, 50.0),
            fixation_at(800.0, 500.0),
            fixation_at(120.0, 80.0),
        ];

        let summary = FixationSummary::tally(&fixations, &AoiConfig::default(), 400);

        assert_eq!(summary.total_fixations, 4);
        assert_eq!(summary.total_samples, 400);
        assert_eq!(summary.count(AoiLabel::Minimap), 2);
        assert_eq!(summary.count(AoiLabel::ExportButton), 1);
        assert_eq!(summary.count(AoiLabel::MainViewport), 1);

        let sum: usize = summary.aoi_counts.values().sum();
        assert_eq!(sum, summary.total_fixations);
    }

    #[test]
    fn test_empty_input_yields_zeroed_summary() {
        let summary = FixationSummary::tally(&[], &AoiConfig::default(), 0);
        assert_eq!(summary.total_fixations, 0);
        assert_eq!(summary.total_samples, 0);
        assert!(summary.aoi_counts.is_empty());
        assert!(summary
            .ordered_counts()
            .iter()
            .all(|(_, count)| *count == 0));
    }

    #[test]
    fn test_labeled_fixations_serialize_flat() {
        let labeled = label_fixations(&[fixation_at(100.0, 100.0)], &AoiConfig::default());
        let json = serde_json::to_string(&labeled[0]).unwrap();
        assert!(json.contains("\"start_time\":0"));
        assert!(json.contains("\"aoi\":\"minimap\""));
    }

    #[test]
    fn test_summary_serializes_with_string_keys() {
        let summary = FixationSummary::tally(
            &[fixation_at(100.0, 100.0)],
            &AoiConfig::default(),
            5,
        );
        let json = serde_json::to_string(&summary).unwrap();
        assert!(json.contains("\"minimap\":1"));
        assert!(json.contains("\"total_samples\":5"));
    }
}
