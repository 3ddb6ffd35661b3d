//! Detect fixations in one session log and tabulate AOI counts.

use std::path::PathBuf;

use fixate_analysis_core::aggregate::{label_fixations, FixationSummary, LabeledFixation};
use fixate_analysis_core::aoi::AoiConfig;
use fixate_analysis_core::fixation::{FixationConfig, FixationDetector};
use fixate_analysis_core::heatmap::{GazeHeatmap, HeatmapConfig};
use fixate_session_model::SessionLog;
use serde::Serialize;

/// JSON report written by `--report-json`.
#[derive(Serialize)]
struct AnalysisReport<'a> {
    summary: &'a FixationSummary,
    fixations: &'a [LabeledFixation],
}

pub fn run(
    path: PathBuf,
    fixation: FixationConfig,
    aoi: AoiConfig,
    fixations_csv: Option<PathBuf>,
    report_json: Option<PathBuf>,
    heatmap_csv: Option<PathBuf>,
) -> anyhow::Result<()> {
    println!("Analyzing session log: {}", path.display());

    let log =
        SessionLog::load(&path).map_err(|e| anyhow::anyhow!("Failed to load session log: {e}"))?;

    let samples = log.gaze_samples();
    println!("  Loaded {} gaze samples", samples.len());

    if samples.is_empty() {
        println!("  No eye tracking data found in file.");
        return Ok(());
    }

    let detector = FixationDetector::new(fixation);
    let fixations = detector.detect(samples);

    if fixations.is_empty() {
        println!("  No fixations detected with current parameters.");
    }

    let labeled = label_fixations(&fixations, &aoi);
    let summary = FixationSummary::from_labeled(&labeled, samples.len());

    println!("\nFixation counts per AOI:");
    for (label, count) in summary.ordered_counts() {
        println!("  {:<13} {}", label, count);
    }
    println!("\nTotal raw data points: {}", summary.total_samples);
    println!("Total fixations detected: {}", summary.total_fixations);

    if let Some(csv_path) = fixations_csv {
        crate::report::write_text(&csv_path, &fixations_to_csv(&labeled), "fixation CSV")?;
        println!("Fixations written to: {}", csv_path.display());
    }

    if let Some(json_path) = report_json {
        let report = AnalysisReport {
            summary: &summary,
            fixations: &labeled,
        };
        crate::report::write_text(
            &json_path,
            &serde_json::to_string_pretty(&report)?,
            "JSON report",
        )?;
        println!("Report written to: {}", json_path.display());
    }

    if let Some(grid_path) = heatmap_csv {
        let heatmap = GazeHeatmap::from_samples(samples, HeatmapConfig::default());
        crate::report::write_text(&grid_path, &heatmap.to_csv(), "heatmap grid")?;
        println!("Heatmap grid written to: {}", grid_path.display());
    }

    Ok(())
}

fn fixations_to_csv(labeled: &[LabeledFixation]) -> String {
    let mut out = String::from("start_time,end_time,duration,x,y,aoi\n");
    for entry in labeled {
        let f = &entry.fixation;
        out.push_str(&format!(
            "{},{},{},{},{},{}\n",
            f.start_time, f.end_time, f.duration, f.x, f.y, entry.aoi
        ));
    }
    out
}
