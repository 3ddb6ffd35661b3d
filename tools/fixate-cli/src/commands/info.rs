//! Show session information.

use std::path::PathBuf;

use fixate_session_model::SessionLog;

pub fn run(path: PathBuf) -> anyhow::Result<()> {
    let log =
        SessionLog::load(&path).map_err(|e| anyhow::anyhow!("Failed to load session log: {e}"))?;

    println!("Session log: {}", path.display());
    match log.session_info.start_datetime() {
        Some(start) => println!("  Started: {}", start.to_rfc3339()),
        None => println!("  Started: (not recorded)"),
    }
    match log.session_info.end_datetime() {
        Some(end) => println!("  Ended: {}", end.to_rfc3339()),
        None => println!("  Ended: (not recorded)"),
    }
    match log.duration_ms() {
        Some(ms) => println!("  Duration: {:.1}s", ms as f64 / 1000.0),
        None => println!("  Duration: (unknown)"),
    }
    println!();

    println!("Streams:");
    println!("  Gaze samples: {}", log.gaze_samples().len());
    println!("  Viewport samples: {}", log.viewport_dwell.len());
    println!();

    println!("Map:");
    match (log.map_info.width, log.map_info.height) {
        (Some(width), Some(height)) => println!("  Size: {width} x {height}"),
        _ => println!("  Size: (not recorded)"),
    }

    Ok(())
}
