//! Text chart rendering for the terminal.

use fitlog_core::{BarChart, ChartRenderer, LineChart, Result};
use std::io::Write;

/// Draws charts as plain text onto any writer
pub struct TerminalRenderer<'a, W: Write> {
    out: &'a mut W,
    width: usize,
}

impl<'a, W: Write> TerminalRenderer<'a, W> {
    /// `width` is the length in columns of the longest bar
    pub fn new(out: &'a mut W, width: usize) -> Self {
        Self {
            out,
            width: width.max(1),
        }
    }

    fn heading(&mut self, title: &str) -> Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "{}", title)?;
        writeln!(self.out, "{}", "=".repeat(title.chars().count()))?;
        Ok(())
    }
}

impl<W: Write> ChartRenderer for TerminalRenderer<'_, W> {
    fn render_bar(&mut self, chart: &BarChart) -> Result<()> {
        self.heading(&chart.title)?;

        let label_width = chart
            .bars
            .iter()
            .map(|(label, _)| label.chars().count())
            .max()
            .unwrap_or(0)
            .max(chart.x_label.chars().count());
        let max = chart.bars.iter().map(|(_, v)| *v).fold(0.0_f64, f64::max);

        writeln!(self.out, "{:<label_width$} | {}", chart.x_label, chart.y_label)?;
        for (label, value) in &chart.bars {
            let len = scaled(*value, 0.0, max, self.width);
            writeln!(
                self.out,
                "{:<label_width$} | {} {:.1}",
                label,
                "█".repeat(len),
                value
            )?;
        }
        Ok(())
    }

    fn render_line(&mut self, chart: &LineChart) -> Result<()> {
        self.heading(&chart.title)?;

        let min = chart.points.iter().map(|(_, v)| *v).fold(f64::INFINITY, f64::min);
        let max = chart
            .points
            .iter()
            .map(|(_, v)| *v)
            .fold(f64::NEG_INFINITY, f64::max);

        writeln!(self.out, "{:<10} | {}", chart.x_label, chart.y_label)?;
        for (date, value) in &chart.points {
            let offset = scaled(*value, min, max, self.width - 1);
            writeln!(
                self.out,
                "{} | {}● {:.1}",
                date.format("%Y-%m-%d"),
                " ".repeat(offset),
                value
            )?;
        }
        Ok(())
    }
}

/// Position of `value` within `[min, max]` mapped onto `0..=span` columns
fn scaled(value: f64, min: f64, max: f64, span: usize) -> usize {
    let range = max - min;
    if range.is_nan() || range <= 0.0 || !value.is_finite() {
        return 0;
    }
    let fraction = ((value - min) / range).clamp(0.0, 1.0);
    (fraction * span as f64).round() as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn render_bar_to_string(chart: &BarChart, width: usize) -> String {
        let mut buf = Vec::new();
        TerminalRenderer::new(&mut buf, width).render_bar(chart).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_scaled() {
        assert_eq!(scaled(75.0, 0.0, 75.0, 40), 40);
        assert_eq!(scaled(60.0, 0.0, 75.0, 40), 32);
        assert_eq!(scaled(0.0, 0.0, 75.0, 40), 0);
        assert_eq!(scaled(-5.0, 0.0, 75.0, 40), 0);
        assert_eq!(scaled(3.0, 3.0, 3.0, 40), 0);
    }

    #[test]
    fn test_bar_chart_scales_to_width() {
        let chart = BarChart {
            title: "Total Duration Spent per Activity Type".into(),
            x_label: "Activity Type".into(),
            y_label: "Total Duration (Minutes)".into(),
            bars: vec![("Cycling".into(), 60.0), ("Running".into(), 75.0)],
        };

        let text = render_bar_to_string(&chart, 10);
        assert!(text.contains("Total Duration Spent per Activity Type\n"));
        assert!(text.contains(&format!("Cycling       | {} 60.0", "█".repeat(8))));
        assert!(text.contains(&format!("Running       | {} 75.0", "█".repeat(10))));
    }

    #[test]
    fn test_line_chart_lists_points_in_order() {
        let chart = LineChart {
            title: "Weight_KG Progress Over Time".into(),
            x_label: "Date".into(),
            y_label: "Weight_KG Amount".into(),
            points: vec![
                (NaiveDate::from_ymd_opt(2024, 6, 3).unwrap(), 75.2),
                (NaiveDate::from_ymd_opt(2024, 6, 4).unwrap(), 74.8),
            ],
        };

        let mut buf = Vec::new();
        TerminalRenderer::new(&mut buf, 5).render_line(&chart).unwrap();
        let text = String::from_utf8(buf).unwrap();

        let first = text.find("2024-06-03 |     ● 75.2").unwrap();
        let second = text.find("2024-06-04 | ● 74.8").unwrap();
        assert!(first < second);
    }
}
