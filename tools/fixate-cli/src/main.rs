//! Fixate CLI — Command-line interface for gaze session analysis.
//!
//! Usage:
//!   fixate analyze <LOG>    Detect fixations and tabulate AOI counts
//!   fixate batch <DIR>      Summarize every log in a directory to CSV
//!   fixate info <LOG>       Show session information

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use fixate_analysis_core::aoi::AoiConfig;
use fixate_analysis_core::fixation::FixationConfig;

mod commands;
mod report;

#[derive(Parser)]
#[command(
    name = "fixate",
    about = "Gaze fixation detection and AOI analysis for session logs",
    version,
    author
)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Detect fixations in one session log and tabulate AOI counts
    Analyze {
        /// Path to the session log (JSON)
        path: PathBuf,

        /// Maximum window dispersion in pixels [default: 50]
        #[arg(long)]
        max_dispersion: Option<f64>,

        /// Minimum fixation duration in milliseconds [default: 100]
        #[arg(long)]
        min_duration: Option<i64>,

        /// Right edge of the minimap AOI (pixels)
        #[arg(long, default_value = "300.0")]
        minimap_max_x: f64,

        /// Bottom edge of the minimap AOI (pixels)
        #[arg(long, default_value = "200.0")]
        minimap_max_y: f64,

        /// Left edge of the export-button AOI (pixels)
        #[arg(long, default_value = "1200.0")]
        export_min_x: f64,

        /// Bottom edge of the export-button AOI (pixels)
        #[arg(long, default_value = "150.0")]
        export_max_y: f64,

        /// Write the labeled fixation list as CSV
        #[arg(long)]
        fixations_csv: Option<PathBuf>,

        /// Write the full analysis report as JSON
        #[arg(long)]
        report_json: Option<PathBuf>,

        /// Write the gaze density grid as CSV
        #[arg(long)]
        heatmap_csv: Option<PathBuf>,
    },

    /// Summarize every *.json log in a directory to a CSV table
    Batch {
        /// Directory containing session logs
        dir: PathBuf,

        /// Output CSV path
        #[arg(long, default_value = "all_logs_summary.csv")]
        output_csv: PathBuf,

        /// Also write a <name>_viewport.csv beside each log
        #[arg(long)]
        viewport_csv: bool,

        /// Maximum window dispersion in pixels [default: 50]
        #[arg(long)]
        max_dispersion: Option<f64>,

        /// Minimum fixation duration in milliseconds [default: 100]
        #[arg(long)]
        min_duration: Option<i64>,
    },

    /// Show session information
    Info {
        /// Path to the session log (JSON)
        path: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    fixate_common::logging::init_logging(&fixate_common::config::LoggingConfig {
        level: log_level.to_string(),
        json: false,
    });

    // Threshold fallback order: command line, then config file, then built-ins.
    let app_config = fixate_common::config::AppConfig::load();

    match cli.command {
        Commands::Analyze {
            path,
            max_dispersion,
            min_duration,
            minimap_max_x,
            minimap_max_y,
            export_min_x,
            export_max_y,
            fixations_csv,
            report_json,
            heatmap_csv,
        } => {
            let fixation = FixationConfig {
                max_dispersion: max_dispersion.unwrap_or(app_config.analysis.max_dispersion),
                min_duration_ms: min_duration.unwrap_or(app_config.analysis.min_duration_ms),
            };
            let aoi = AoiConfig {
                minimap_max_x,
                minimap_max_y,
                export_min_x,
                export_max_y,
            };
            commands::analyze::run(path, fixation, aoi, fixations_csv, report_json, heatmap_csv)
        }
        Commands::Batch {
            dir,
            output_csv,
            viewport_csv,
            max_dispersion,
            min_duration,
        } => {
            let fixation = FixationConfig {
                max_dispersion: max_dispersion.unwrap_or(app_config.analysis.max_dispersion),
                min_duration_ms: min_duration.unwrap_or(app_config.analysis.min_duration_ms),
            };
            commands::batch::run(dir, output_csv, viewport_csv, fixation)
        }
        Commands::Info { path } => commands::info::run(path),
    }
}
