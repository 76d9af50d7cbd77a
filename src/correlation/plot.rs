use crate::descriptive::to_f64_vec;
use crate::error::{Result, StatsError};
use anyhow::Context;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    symbols::Marker,
    widgets::{Axis, Block, Chart, Dataset, GraphType, Widget},
};
use single_utilities::traits::FloatOps;
use std::io::Write;

pub const PLOT_TITLE: &str = "Remember correlation does not equal causation!";
pub const AXIS_BOUNDS: [f64; 2] = [0.0, 100.0];

pub const DEFAULT_WIDTH: u16 = 64;
pub const DEFAULT_HEIGHT: u16 = 24;

/// Scatter plot of paired observations on fixed `[0, 100]` axes.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterPlot {
    points: Vec<(f64, f64)>,
}

impl ScatterPlot {
    pub fn from_samples<T>(x: &[T], y: &[T]) -> Result<Self>
    where
        T: FloatOps,
    {
        if x.len() != y.len() {
            return Err(StatsError::LengthMismatch {
                x: x.len(),
                y: y.len(),
            });
        }
        let points = to_f64_vec(x)?.into_iter().zip(to_f64_vec(y)?).collect();
        Ok(ScatterPlot { points })
    }

    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    pub fn title(&self) -> &'static str {
        PLOT_TITLE
    }

    /// Draw the plot into an off-screen buffer of the given size.
    pub fn render_to_buffer(&self, width: u16, height: u16) -> Buffer {
        let area = Rect::new(0, 0, width, height);
        let mut buf = Buffer::empty(area);
        Widget::render(self, area, &mut buf);
        buf
    }

    /// Render the plot as text and write it to `out`, one line per buffer row.
    pub fn write_to<W: Write>(&self, out: &mut W, width: u16, height: u16) -> anyhow::Result<()> {
        let buf = self.render_to_buffer(width, height);
        for line in buffer_lines(&buf) {
            writeln!(out, "{}", line.trim_end()).context("failed to write scatter plot")?;
        }
        out.flush().context("failed to flush scatter plot output")?;
        Ok(())
    }
}

impl Widget for &ScatterPlot {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let dataset = Dataset::default()
            .marker(Marker::Dot)
            .graph_type(GraphType::Scatter)
            .style(Style::default().fg(Color::Cyan))
            .data(&self.points);
        let axis_labels = || {
            [
                format!("{:.0}", AXIS_BOUNDS[0]),
                format!("{:.0}", f64::midpoint(AXIS_BOUNDS[0], AXIS_BOUNDS[1])),
                format!("{:.0}", AXIS_BOUNDS[1]),
            ]
        };
        let x_axis = Axis::default()
            .title("x")
            .bounds(AXIS_BOUNDS)
            .labels(axis_labels());
        let y_axis = Axis::default()
            .title("y")
            .bounds(AXIS_BOUNDS)
            .labels(axis_labels());
        let chart = Chart::new(vec![dataset])
            .block(Block::bordered().title(PLOT_TITLE))
            .x_axis(x_axis)
            .y_axis(y_axis);

        Widget::render(chart, area, buf);
    }
}

/// Collect the symbols of each buffer row into a string.
pub fn buffer_lines(buf: &Buffer) -> Vec<String> {
    let area = buf.area;
    (area.top()..area.bottom())
        .map(|y| {
            (area.left()..area.right())
                .map(|x| buf[(x, y)].symbol())
                .collect::<String>()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_plot() -> ScatterPlot {
        ScatterPlot::from_samples(&[10.0, 50.0, 90.0], &[20.0, 50.0, 80.0]).unwrap()
    }

    #[test]
    fn test_title_is_rendered() {
        let buf = sample_plot().render_to_buffer(DEFAULT_WIDTH, DEFAULT_HEIGHT);
        let lines = buffer_lines(&buf);
        assert_eq!(lines.len(), DEFAULT_HEIGHT as usize);
        assert!(lines[0].contains(sample_plot().title()));
    }

    #[test]
    fn test_points_are_drawn() {
        let empty = ScatterPlot::from_samples::<f64>(&[], &[]).unwrap();
        let blank = buffer_lines(&empty.render_to_buffer(DEFAULT_WIDTH, DEFAULT_HEIGHT));
        let drawn = buffer_lines(&sample_plot().render_to_buffer(DEFAULT_WIDTH, DEFAULT_HEIGHT));

        let dots = |lines: &[String]| lines.iter().map(|l| l.matches('•').count()).sum::<usize>();
        assert_eq!(dots(&blank), 0);
        assert!(dots(&drawn) >= 1);
    }

    #[test]
    fn test_write_to_sink() {
        let mut out = Vec::new();
        sample_plot().write_to(&mut out, DEFAULT_WIDTH, DEFAULT_HEIGHT).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), DEFAULT_HEIGHT as usize);
        assert!(text.contains(PLOT_TITLE));
        assert!(text.contains("100"));
    }

    #[test]
    fn test_mismatched_samples() {
        assert!(matches!(
            ScatterPlot::from_samples(&[1.0, 2.0], &[1.0]),
            Err(StatsError::LengthMismatch { x: 2, y: 1 })
        ));
    }
}
