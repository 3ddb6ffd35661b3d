//! End-to-end pipeline over an inline session log: parse, detect,
//! classify, tabulate.

use fixate_analysis_core::aggregate::{label_fixations, FixationSummary};
use fixate_analysis_core::aoi::{AoiConfig, AoiLabel};
use fixate_analysis_core::fixation::FixationDetector;
use fixate_analysis_core::trajectory::TrajectoryMetrics;
use fixate_session_model::SessionLog;

fn scripted_log() -> SessionLog {
    // 200ms on the minimap, a saccade, 200ms on the export button, and a
    // stray sample that ends mid-flight.
    let raw = r#"{
        "sessionInfo": {"startTime": 1733820000000, "endTime": 1733820001000},
        "mapInfo": {"width": 20, "height": 20},
        "eyeTracking": [
            {"timestamp": 1733820000000, "x": 150.0, "y": 100.0},
            {"timestamp": 1733820000050, "x": 152.0, "y": 101.0},
            {"timestamp": 1733820000100, "x": 149.0, "y": 99.0},
            {"timestamp": 1733820000150, "x": 151.0, "y": 100.0},
            {"timestamp": 1733820000200, "x": 150.0, "y": 100.0},
            {"timestamp": 1733820000250, "x": 1310.0, "y": 60.0},
            {"timestamp": 1733820000300, "x": 1312.0, "y": 61.0},
            {"timestamp": 1733820000350, "x": 1309.0, "y": 59.0},
            {"timestamp": 1733820000400, "x": 1310.0, "y": 60.0},
            {"timestamp": 1733820000450, "x": 640.0, "y": 480.0}
        ],
        "viewportDwellTime": [
            {"timestamp": 1733820000000, "cameraPos": {"x": 0.0, "y": 1.6, "z": 0.0},
             "targetAngles": {"Start": 0.0, "Exit": 90.0}},
            {"timestamp": 1733820000500, "cameraPos": {"x": 3.0, "y": 1.6, "z": 4.0},
             "targetAngles": {"Start": "NaN", "Exit": 45.0}}
        ]
    }"#;

    SessionLog::from_json_str(raw).expect("scripted log should parse")
}

#[test]
fn scripted_session_produces_two_labeled_fixations() {
    let log = scripted_log();
    let samples = log.gaze_samples();

    let fixations = FixationDetector::with_defaults().detect(samples);
    assert_eq!(fixations.len(), 2);

    // First fixation: the minimap dwell, ended by the saccade toward the
    // export button (the breaching sample stays out of the span).
    assert_eq!(fixations[0].span(), (1_733_820_000_000, 1_733_820_000_200));
    assert_eq!(fixations[0].duration, 200);

    // Second fixation: the export-button dwell, ended by the stray sample.
    assert_eq!(fixations[1].span(), (1_733_820_000_250, 1_733_820_000_400));

    let labeled = label_fixations(&fixations, &AoiConfig::default());
    assert_eq!(labeled[0].aoi, AoiLabel::Minimap);
    assert_eq!(labeled[1].aoi, AoiLabel::ExportButton);

    let summary = FixationSummary::from_labeled(&labeled, samples.len());
    assert_eq!(summary.total_fixations, 2);
    assert_eq!(summary.total_samples, 10);
    assert_eq!(summary.count(AoiLabel::Minimap), 1);
    assert_eq!(summary.count(AoiLabel::ExportButton), 1);
    assert_eq!(summary.count(AoiLabel::MainViewport), 0);
}

#[test]
fn scripted_session_trajectory_metrics() {
    let log = scripted_log();
    let metrics = TrajectoryMetrics::compute(&log.viewport_dwell, &log.session_info);

    assert_eq!(metrics.duration_ms, Some(1_000));
    assert_eq!(metrics.n_samples, 2);
    assert!((metrics.path_length - 5.0).abs() < 1e-9);
    // Only the first sample has both angles.
    assert!((metrics.mean_angle_change.unwrap() - 90.0).abs() < 1e-9);
}
