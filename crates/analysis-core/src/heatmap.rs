//! Gaze heatmap utilities for session inspection.

use fixate_session_model::GazeSample;

/// Grid configuration for heatmap generation.
#[derive(Debug, Clone, Copy)]
pub struct HeatmapConfig {
    pub cols: usize,
    pub rows: usize,
    /// Screen extent covered by the grid (pixels).
    pub width: f64,
    pub height: f64,
}

impl Default for HeatmapConfig {
    fn default() -> Self {
        Self {
            cols: 32,
            rows: 18,
            width: 1600.0,
            height: 900.0,
        }
    }
}

/// A gaze density grid.
#[derive(Debug, Clone)]
pub struct GazeHeatmap {
    pub cols: usize,
    pub rows: usize,
    pub cells: Vec<f64>,
    pub max_density: f64,
}

impl GazeHeatmap {
    /// Bin gaze samples into a density grid. Out-of-range coordinates
    /// clamp into the edge cells; non-finite coordinates are skipped.
    pub fn from_samples(samples: &[GazeSample], config: HeatmapConfig) -> Self {
        let cols = config.cols.max(1);
        let rows = config.rows.max(1);
        let width = config.width.max(1.0);
        let height = config.height.max(1.0);
        let mut cells = vec![0.0; cols * rows];

        for sample in samples {
            if !sample.x.is_finite() || !sample.y.is_finite() {
                continue;
            }

            let px = (sample.x / width).clamp(0.0, 0.999_999);
            let py = (sample.y / height).clamp(0.0, 0.999_999);
            let cx = (px * cols as f64).floor() as usize;
            let cy = (py * rows as f64).floor() as usize;

            cells[cy * cols + cx] += 1.0;
        }

        let max_density = cells.iter().copied().fold(0.0_f64, f64::max);
        Self {
            cols,
            rows,
            cells,
            max_density,
        }
    }

    pub fn cell(&self, col: usize, row: usize) -> Option<f64> {
        if col >= self.cols || row >= self.rows {
            return None;
        }
        Some(self.cells[row * self.cols + col])
    }

    pub fn normalized_cell(&self, col: usize, row: usize) -> Option<f64> {
        let value = self.cell(col, row)?;
        if self.max_density <= 0.0 {
            return Some(0.0);
        }
        Some(value / self.max_density)
    }

    /// Render the grid as CSV, one line per grid row.
    pub fn to_csv(&self) -> String {
        let mut out = String::new();
        for row in 0..self.rows {
            let line = (0..self.cols)
                .map(|col| format!("{}", self.cells[row * self.cols + col]))
                .collect::<Vec<_>>()
                .join(",");
            out.push_str(&line);
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heatmap_tracks_hotspot() {
        let samples = vec![
            GazeSample::new(0, 160.0, 90.0),
            GazeSample::new(16, 160.0, 90.0),
            GazeSample::new(32, 170.0, 92.0),
            GazeSample::new(48, 1440.0, 810.0),
        ];

        let heatmap = GazeHeatmap::from_samples(
            &samples,
            HeatmapConfig {
                cols: 10,
                rows: 10,
                width: 1600.0,
                height: 900.0,
            },
        );

        let top_left = heatmap.cell(1, 1).unwrap();
        let bottom_right = heatmap.cell(9, 9).unwrap();
        assert!(top_left > bottom_right);
        assert!(heatmap.max_density >= top_left);
        assert_eq!(heatmap.normalized_cell(1, 1), Some(1.0));
    }

    #[test]
    fn heatmap_empty_samples_is_zeroed() {
        let heatmap = GazeHeatmap::from_samples(&[], HeatmapConfig::default());
        assert_eq!(heatmap.max_density, 0.0);
        assert!(heatmap.cells.iter().all(|v| *v == 0.0));
        assert_eq!(heatmap.normalized_cell(0, 0), Some(0.0));
    }

    #[test]
    fn heatmap_clamps_out_of_range_points() {
        let samples = vec![
            GazeSample::new(0, -50.0, -50.0),
            GazeSample::new(16, 5000.0, 5000.0),
            GazeSample::new(32, f64::NAN, 100.0),
        ];

        let heatmap = GazeHeatmap::from_samples(
            &samples,
            HeatmapConfig {
                cols: 4,
                rows: 4,
                width: 1600.0,
                height: 900.0,
            },
        );

        assert_eq!(heatmap.cell(0, 0), Some(1.0));
        assert_eq!(heatmap.cell(3, 3), Some(1.0));
        let total: f64 = heatmap.cells.iter().sum();
        assert_eq!(total, 2.0); // the NaN sample is dropped
    }

    #[test]
    fn heatmap_csv_shape() {
        let heatmap = GazeHeatmap::from_samples(
            &[GazeSample::new(0, 0.0, 0.0)],
            HeatmapConfig {
                cols: 3,
                rows: 2,
                width: 100.0,
                height: 100.0,
            },
        );

        let csv = heatmap.to_csv();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].split(',').count(), 3);
        assert_eq!(lines[0], "1,0,0");
    }
}
