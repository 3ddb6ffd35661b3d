//! Batch-summarize a directory of session logs to a CSV table.

use std::path::{Path, PathBuf};

use fixate_analysis_core::fixation::{FixationConfig, FixationDetector};
use fixate_analysis_core::trajectory::TrajectoryMetrics;
use fixate_common::FixateError;
use fixate_session_model::SessionLog;

const SUMMARY_HEADER: &str = "file,duration_ms,duration_s,n_samples,path_length,\
mean_angle_change,n_gaze_samples,n_fixations,map_width,map_height\n";

pub fn run(
    dir: PathBuf,
    output_csv: PathBuf,
    viewport_csv: bool,
    fixation: FixationConfig,
) -> anyhow::Result<()> {
    if !dir.is_dir() {
        return Err(FixateError::FileNotFound { path: dir }.into());
    }

    let mut paths: Vec<PathBuf> = std::fs::read_dir(&dir)
        .map_err(|e| anyhow::anyhow!("Failed to read directory {}: {e}", dir.display()))?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().map(|ext| ext == "json").unwrap_or(false))
        .collect();
    paths.sort();

    if paths.is_empty() {
        println!("No *.json logs found in {}", dir.display());
        return Ok(());
    }

    let detector = FixationDetector::new(fixation);
    let mut rows = Vec::new();

    for path in &paths {
        let log = match SessionLog::load(path) {
            Ok(log) => log,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Skipping unreadable log");
                continue;
            }
        };

        let metrics = TrajectoryMetrics::compute(&log.viewport_dwell, &log.session_info);
        let fixations = detector.detect(log.gaze_samples());
        rows.push(summary_row(path, &log, &metrics, fixations.len()));

        if viewport_csv {
            let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or("log");
            let out_path = path.with_file_name(format!("{stem}_viewport.csv"));
            crate::report::write_text(&out_path, &viewport_to_csv(&log), "viewport CSV")?;
            println!("  Wrote {}", out_path.display());
        }
    }

    let mut csv = String::from(SUMMARY_HEADER);
    for row in &rows {
        csv.push_str(row);
    }
    crate::report::write_text(&output_csv, &csv, "summary CSV")?;

    println!(
        "Saved summary of {} logs to {}",
        rows.len(),
        output_csv.display()
    );
    Ok(())
}

fn summary_row(
    path: &Path,
    log: &SessionLog,
    metrics: &TrajectoryMetrics,
    n_fixations: usize,
) -> String {
    let file = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("?");

    format!(
        "{},{},{},{},{},{},{},{},{},{}\n",
        file,
        opt_cell(metrics.duration_ms),
        opt_cell(metrics.duration_secs()),
        metrics.n_samples,
        float_cell(metrics.path_length),
        opt_cell(metrics.mean_angle_change),
        log.gaze_samples().len(),
        n_fixations,
        opt_cell(log.map_info.width),
        opt_cell(log.map_info.height),
    )
}

fn viewport_to_csv(log: &SessionLog) -> String {
    let mut out = String::from("timestamp,camera_x,camera_y,camera_z,angle_start,angle_exit\n");
    for entry in &log.viewport_dwell {
        out.push_str(&format!(
            "{},{},{},{},{},{}\n",
            entry.timestamp,
            float_cell(entry.camera_pos.x),
            float_cell(entry.camera_pos.y),
            float_cell(entry.camera_pos.z),
            float_cell(entry.target_angles.start),
            float_cell(entry.target_angles.exit),
        ));
    }
    out
}

/// NaN renders as an empty CSV cell.
fn float_cell(value: f64) -> String {
    if value.is_nan() {
        String::new()
    } else {
        format!("{value}")
    }
}

/// A missing value renders as an empty CSV cell.
fn opt_cell<T: std::fmt::Display>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}
