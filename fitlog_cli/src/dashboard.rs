//! Interactive menu driving an `ActivityLog`.
//!
//! Reads choices line by line from any `BufRead` and writes to any `Write`,
//! so the loop runs the same against a terminal or an in-memory buffer.
//! End of input is treated like choosing Exit.

use crate::render::TerminalRenderer;
use fitlog_core::{
    render_activity_breakdown, render_metric_history, ActivityLog, CsvChartWriter,
    RenderOutcome, Result, WeeklyReport,
};
use std::io::{BufRead, Write};
use std::path::PathBuf;

/// Presentation settings for the dashboard
#[derive(Clone, Debug)]
pub struct DashboardOptions {
    pub tracked_metric: String,
    pub chart_width: usize,
    pub export_dir: Option<PathBuf>,
}

pub struct Dashboard<'a, R, W> {
    log: &'a mut ActivityLog,
    input: R,
    output: W,
    options: DashboardOptions,
}

impl<'a, R: BufRead, W: Write> Dashboard<'a, R, W> {
    pub fn new(log: &'a mut ActivityLog, input: R, output: W, options: DashboardOptions) -> Self {
        Self {
            log,
            input,
            output,
            options,
        }
    }

    /// Log the sample activities and readings shown on first launch
    pub fn seed_sample_data(&mut self) -> Result<()> {
        writeln!(self.output, "Logging initial sample data...")?;
        self.record_activity("Running", 30.0, 4.5)?;
        self.record_activity("Cycling", 60.0, 15.0)?;
        self.record_activity("Running", 45.0, 6.0)?;
        self.record_metric("Weight_KG", 75.2)?;
        self.record_metric("Weight_KG", 74.8)?;
        writeln!(self.output, "{}", "-".repeat(40))?;
        Ok(())
    }

    /// Run the menu until the user exits or input ends
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.print_menu()?;
            let Some(choice) = self.prompt("Enter your choice (1-6): ")? else {
                writeln!(self.output)?;
                return self.farewell();
            };

            match choice.as_str() {
                "1" => self.log_activity()?,
                "2" => self.log_health_metric()?,
                "3" => self.show_weekly_summary()?,
                "4" => self.show_activity_breakdown()?,
                "5" => self.show_metric_history()?,
                "6" => return self.farewell(),
                other => {
                    tracing::debug!("Rejected menu choice {:?}", other);
                    writeln!(
                        self.output,
                        "Invalid choice. Please enter a number between 1 and 6."
                    )?;
                }
            }
        }
    }

    fn print_menu(&mut self) -> Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "Menu Options:")?;
        writeln!(self.output, "1. Log a new activity")?;
        writeln!(self.output, "2. Log a health metric (e.g., Weight)")?;
        writeln!(self.output, "3. View Weekly Activity Summary")?;
        writeln!(self.output, "4. Visualize Activity Type Breakdown")?;
        writeln!(
            self.output,
            "5. Visualize Health Metric ({}) over time",
            self.options.tracked_metric
        )?;
        writeln!(self.output, "6. Exit")?;
        Ok(())
    }

    fn farewell(&mut self) -> Result<()> {
        writeln!(self.output, "Exiting Fitness Tracker Dashboard. Stay healthy!")?;
        self.output.flush()?;
        Ok(())
    }

    fn log_activity(&mut self) -> Result<()> {
        let Some(activity_type) = self.prompt("Enter Activity Type (e.g., Running, Cycling): ")?
        else {
            return Ok(());
        };
        let Some(duration) = self.prompt_number("Enter Duration in minutes: ", None)? else {
            return Ok(());
        };
        let Some(distance) = self.prompt_number(
            "Enter Distance in KM (optional, enter 0 if N/A): ",
            Some(0.0),
        )?
        else {
            return Ok(());
        };

        self.record_activity(&activity_type, duration, distance)
    }

    fn log_health_metric(&mut self) -> Result<()> {
        let Some(metric_name) =
            self.prompt("Enter Metric Name (e.g., Weight_KG, RestingHR_BPM): ")?
        else {
            return Ok(());
        };
        let label = format!("Enter value for {}: ", metric_name);
        let Some(value) = self.prompt_number(&label, None)? else {
            return Ok(());
        };

        self.record_metric(&metric_name, value)
    }

    fn record_activity(&mut self, activity_type: &str, duration: f64, distance: f64) -> Result<()> {
        let record = self.log.log_activity(activity_type, duration, distance);
        writeln!(
            self.output,
            "\nActivity logged successfully: {} for {} minutes.",
            record.activity_type, record.duration_min
        )?;
        Ok(())
    }

    fn record_metric(&mut self, metric_name: &str, value: f64) -> Result<()> {
        let reading = self.log.log_health_metric(metric_name, value);
        writeln!(
            self.output,
            "Health metric '{}' logged: {}.",
            metric_name, reading.value
        )?;
        Ok(())
    }

    fn show_weekly_summary(&mut self) -> Result<()> {
        let report = self.log.weekly_report();
        write_weekly_report(&mut self.output, &report)
    }

    fn show_activity_breakdown(&mut self) -> Result<()> {
        let mut renderer = TerminalRenderer::new(&mut self.output, self.options.chart_width);
        match render_activity_breakdown(&*self.log, &mut renderer)? {
            RenderOutcome::Rendered => {
                if let Some(dir) = self.options.export_dir.clone() {
                    let mut writer = CsvChartWriter::new(dir);
                    render_activity_breakdown(&*self.log, &mut writer)?;
                    self.report_exports(&writer)?;
                }
            }
            RenderOutcome::NoData => {
                writeln!(self.output, "Not enough data to visualize activity trends.")?;
            }
        }
        Ok(())
    }

    fn show_metric_history(&mut self) -> Result<()> {
        let metric = self.options.tracked_metric.clone();
        let mut renderer = TerminalRenderer::new(&mut self.output, self.options.chart_width);
        match render_metric_history(&*self.log, &metric, &mut renderer)? {
            RenderOutcome::Rendered => {
                if let Some(dir) = self.options.export_dir.clone() {
                    let mut writer = CsvChartWriter::new(dir);
                    render_metric_history(&*self.log, &metric, &mut writer)?;
                    self.report_exports(&writer)?;
                }
            }
            RenderOutcome::NoData => {
                writeln!(self.output, "No {} data logged yet.", metric)?;
            }
        }
        Ok(())
    }

    fn report_exports(&mut self, writer: &CsvChartWriter) -> Result<()> {
        for path in writer.written() {
            writeln!(self.output, "Chart data exported to {}", path.display())?;
        }
        Ok(())
    }

    /// Print `label` and read one trimmed line; `None` at end of input
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Prompt until the answer parses as a number
    ///
    /// A blank answer yields `default` when one is given.
    fn prompt_number(&mut self, label: &str, default: Option<f64>) -> Result<Option<f64>> {
        loop {
            let Some(text) = self.prompt(label)? else {
                return Ok(None);
            };

            if text.is_empty() {
                if let Some(value) = default {
                    return Ok(Some(value));
                }
            }

            match text.parse::<f64>() {
                Ok(value) => return Ok(Some(value)),
                Err(e) => {
                    tracing::debug!("Rejected numeric input {:?}: {}", text, e);
                    writeln!(
                        self.output,
                        "Invalid number '{}'. Please enter a numeric value.",
                        text
                    )?;
                }
            }
        }
    }
}

/// Print the weekly summary table followed by the all-time mean duration
pub fn write_weekly_report<W: Write>(out: &mut W, report: &WeeklyReport) -> Result<()> {
    writeln!(out, "\n--- Weekly Activity Summary ---")?;

    let Some(average) = report.average_duration_min else {
        writeln!(out, "No activities logged yet. Nothing to summarize.")?;
        return Ok(());
    };

    writeln!(
        out,
        "{:<12} {:>10} {:>15} {:>10} {:>14}",
        "Week ending", "Activities", "Duration (min)", "Calories", "Distance (km)"
    )?;
    for week in &report.weeks {
        writeln!(
            out,
            "{:<12} {:>10} {:>15.2} {:>10.2} {:>14.2}",
            week.week_end.format("%Y-%m-%d").to_string(),
            week.activity_count,
            week.total_duration_min,
            week.total_calories_burned,
            week.total_distance_km
        )?;
    }

    writeln!(
        out,
        "\nAverage duration across all logged activities: {:.2} minutes.",
        average
    )?;
    Ok(())
}
