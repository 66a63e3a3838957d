//! Chart data and the renderer seam.
//!
//! The log never draws anything itself. It builds finished chart data and
//! hands it to a `ChartRenderer`. Empty input is caught here, before any
//! renderer is called, and reported as `RenderOutcome::NoData`.

use crate::{ActivityLog, Result};
use chrono::NaiveDate;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Categorical bar chart (one bar per label)
#[derive(Clone, Debug, PartialEq)]
pub struct BarChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub bars: Vec<(String, f64)>,
}

/// Time-ordered line chart
#[derive(Clone, Debug, PartialEq)]
pub struct LineChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub points: Vec<(NaiveDate, f64)>,
}

/// Whether a chart was handed to the renderer
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderOutcome {
    Rendered,
    NoData,
}

/// Presentation backend consuming finished chart data
pub trait ChartRenderer {
    fn render_bar(&mut self, chart: &BarChart) -> Result<()>;
    fn render_line(&mut self, chart: &LineChart) -> Result<()>;
}

/// Bar chart of total duration per activity type, or `None` if nothing is logged
pub fn activity_breakdown_chart(log: &ActivityLog) -> Option<BarChart> {
    let totals = log.duration_by_activity_type();
    if totals.is_empty() {
        return None;
    }

    Some(BarChart {
        title: "Total Duration Spent per Activity Type".into(),
        x_label: "Activity Type".into(),
        y_label: "Total Duration (Minutes)".into(),
        bars: totals
            .into_iter()
            .map(|t| (t.activity_type, t.total_duration_min))
            .collect(),
    })
}

/// Line chart of one metric's readings, or `None` if it has none
pub fn metric_history_chart(log: &ActivityLog, metric_name: &str) -> Option<LineChart> {
    let readings = log.get_health_data(metric_name);
    if readings.is_empty() {
        return None;
    }

    Some(LineChart {
        title: format!("{} Progress Over Time", metric_name),
        x_label: "Date".into(),
        y_label: format!("{} Amount", metric_name),
        points: readings.iter().map(|r| (r.date, r.value)).collect(),
    })
}

/// Render the activity-type breakdown, skipping the renderer when empty
pub fn render_activity_breakdown(
    log: &ActivityLog,
    renderer: &mut dyn ChartRenderer,
) -> Result<RenderOutcome> {
    match activity_breakdown_chart(log) {
        Some(chart) => {
            renderer.render_bar(&chart)?;
            Ok(RenderOutcome::Rendered)
        }
        None => {
            tracing::debug!("No activities logged, skipping breakdown chart");
            Ok(RenderOutcome::NoData)
        }
    }
}

/// Render one metric over time, skipping the renderer when empty
pub fn render_metric_history(
    log: &ActivityLog,
    metric_name: &str,
    renderer: &mut dyn ChartRenderer,
) -> Result<RenderOutcome> {
    match metric_history_chart(log, metric_name) {
        Some(chart) => {
            renderer.render_line(&chart)?;
            Ok(RenderOutcome::Rendered)
        }
        None => {
            tracing::debug!("No readings for '{}', skipping history chart", metric_name);
            Ok(RenderOutcome::NoData)
        }
    }
}

// ============================================================================
// CSV export
// ============================================================================

#[derive(Debug, Serialize)]
struct BarRow<'a> {
    label: &'a str,
    value: f64,
}

#[derive(Debug, Serialize)]
struct LineRow {
    date: String,
    value: f64,
}

/// Renderer that writes each chart's data as a CSV file for external plotting
///
/// Files are named after the chart title and overwritten on every render.
pub struct CsvChartWriter {
    dir: PathBuf,
    written: Vec<PathBuf>,
}

impl CsvChartWriter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            written: Vec::new(),
        }
    }

    /// Paths written so far, in render order
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }

    fn prepare(&self, title: &str) -> Result<PathBuf> {
        std::fs::create_dir_all(&self.dir)?;
        Ok(self.dir.join(format!("{}.csv", file_stem(title))))
    }

    fn finish(&mut self, path: &Path) {
        tracing::info!("Wrote chart data to {:?}", path);
        self.written.push(path.to_path_buf());
    }
}

impl ChartRenderer for CsvChartWriter {
    fn render_bar(&mut self, chart: &BarChart) -> Result<()> {
        let path = self.prepare(&chart.title)?;
        let mut writer = csv::Writer::from_path(&path)?;
        for (label, value) in &chart.bars {
            writer.serialize(BarRow {
                label,
                value: *value,
            })?;
        }
        writer.flush()?;
        self.finish(&path);
        Ok(())
    }

    fn render_line(&mut self, chart: &LineChart) -> Result<()> {
        let path = self.prepare(&chart.title)?;
        let mut writer = csv::Writer::from_path(&path)?;
        for (date, value) in &chart.points {
            writer.serialize(LineRow {
                date: date.format("%Y-%m-%d").to_string(),
                value: *value,
            })?;
        }
        writer.flush()?;
        self.finish(&path);
        Ok(())
    }
}

/// Lowercase file stem with every non-alphanumeric run collapsed to `_`
fn file_stem(title: &str) -> String {
    let mut stem = String::with_capacity(title.len());
    for c in title.chars() {
        if c.is_ascii_alphanumeric() {
            stem.push(c.to_ascii_lowercase());
        } else if !stem.ends_with('_') {
            stem.push('_');
        }
    }
    stem.trim_matches('_').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Renderer that records what it was asked to draw
    #[derive(Default)]
    struct RecordingRenderer {
        bars: Vec<BarChart>,
        lines: Vec<LineChart>,
    }

    impl ChartRenderer for RecordingRenderer {
        fn render_bar(&mut self, chart: &BarChart) -> Result<()> {
            self.bars.push(chart.clone());
            Ok(())
        }

        fn render_line(&mut self, chart: &LineChart) -> Result<()> {
            self.lines.push(chart.clone());
            Ok(())
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_log() -> ActivityLog {
        let mut log = ActivityLog::new();
        log.log_activity_on(date(2024, 6, 3), "Running", 30.0, 4.5);
        log.log_activity_on(date(2024, 6, 3), "Cycling", 60.0, 15.0);
        log.log_activity_on(date(2024, 6, 4), "Running", 45.0, 6.0);
        log.log_health_metric_on(date(2024, 6, 3), "Weight_KG", 75.2);
        log.log_health_metric_on(date(2024, 6, 4), "Weight_KG", 74.8);
        log
    }

    #[test]
    fn test_breakdown_groups_by_activity_type() {
        let log = sample_log();
        let mut renderer = RecordingRenderer::default();

        let outcome = render_activity_breakdown(&log, &mut renderer).unwrap();
        assert_eq!(outcome, RenderOutcome::Rendered);
        assert_eq!(renderer.bars.len(), 1);
        assert_eq!(
            renderer.bars[0].bars,
            vec![("Cycling".to_string(), 60.0), ("Running".to_string(), 75.0)]
        );
        assert_eq!(renderer.bars[0].x_label, "Activity Type");
    }

    #[test]
    fn test_empty_breakdown_skips_renderer() {
        let log = ActivityLog::new();
        let mut renderer = RecordingRenderer::default();

        let outcome = render_activity_breakdown(&log, &mut renderer).unwrap();
        assert_eq!(outcome, RenderOutcome::NoData);
        assert!(renderer.bars.is_empty());
    }

    #[test]
    fn test_metric_history_in_logging_order() {
        let log = sample_log();
        let mut renderer = RecordingRenderer::default();

        let outcome = render_metric_history(&log, "Weight_KG", &mut renderer).unwrap();
        assert_eq!(outcome, RenderOutcome::Rendered);
        let chart = &renderer.lines[0];
        assert_eq!(chart.title, "Weight_KG Progress Over Time");
        assert_eq!(
            chart.points,
            vec![(date(2024, 6, 3), 75.2), (date(2024, 6, 4), 74.8)]
        );
    }

    #[test]
    fn test_unknown_metric_skips_renderer() {
        let log = sample_log();
        let mut renderer = RecordingRenderer::default();

        let outcome = render_metric_history(&log, "RestingHR_BPM", &mut renderer).unwrap();
        assert_eq!(outcome, RenderOutcome::NoData);
        assert!(renderer.lines.is_empty());
    }

    #[test]
    fn test_file_stem() {
        assert_eq!(
            file_stem("Total Duration Spent per Activity Type"),
            "total_duration_spent_per_activity_type"
        );
        assert_eq!(
            file_stem("Weight_KG Progress Over Time"),
            "weight_kg_progress_over_time"
        );
        assert_eq!(file_stem("  Heart/Rate  "), "heart_rate");
    }

    #[test]
    fn test_csv_writer_exports_both_charts() {
        let temp_dir = tempfile::tempdir().unwrap();
        let export_dir = temp_dir.path().join("charts");
        let log = sample_log();
        let mut writer = CsvChartWriter::new(&export_dir);

        render_activity_breakdown(&log, &mut writer).unwrap();
        render_metric_history(&log, "Weight_KG", &mut writer).unwrap();
        assert_eq!(writer.written().len(), 2);

        let bar_csv = std::fs::read_to_string(
            export_dir.join("total_duration_spent_per_activity_type.csv"),
        )
        .unwrap();
        assert_eq!(bar_csv, "label,value\nCycling,60.0\nRunning,75.0\n");

        let line_csv =
            std::fs::read_to_string(export_dir.join("weight_kg_progress_over_time.csv")).unwrap();
        assert_eq!(line_csv, "date,value\n2024-06-03,75.2\n2024-06-04,74.8\n");
    }

    #[test]
    fn test_csv_writer_untouched_when_empty() {
        let temp_dir = tempfile::tempdir().unwrap();
        let export_dir = temp_dir.path().join("charts");
        let mut writer = CsvChartWriter::new(&export_dir);

        let outcome = render_activity_breakdown(&ActivityLog::new(), &mut writer).unwrap();
        assert_eq!(outcome, RenderOutcome::NoData);
        assert!(writer.written().is_empty());
        assert!(!export_dir.exists());
    }
}
