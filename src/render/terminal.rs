use super::Renderer;
use crate::{Figure, PlotConfig};
use anyhow::Result;
use std::io::{self, BufRead, Stdin, StdinLock, Stdout, Write};
use textplots::{Chart, ColorPlot, Shape};

/// Draws braille line charts with `textplots`
pub struct TerminalRenderer<W: Write, R: BufRead> {
    writer: W,
    input: R,
}

impl TerminalRenderer<Stdout, StdinLock<'static>> {
    pub fn stdout() -> Self {
        let stdin: Stdin = io::stdin();
        Self::new(io::stdout(), stdin.lock())
    }
}

impl<W: Write, R: BufRead> TerminalRenderer<W, R> {
    pub fn new(writer: W, input: R) -> Self {
        Self { writer, input }
    }

    pub fn into_inner(self) -> (W, R) {
        (self.writer, self.input)
    }
}

/// Points as textplots draws them, one list per series, and the y-range they span.
///
/// Values that don't fit in an f32 are dropped like NaN. textplots walks every
/// step of a line, so an infinite endpoint would never finish drawing.
fn chart_points(figure: &Figure) -> (Vec<Vec<(f32, f32)>>, Option<(f32, f32)>) {
    let points: Vec<Vec<(f32, f32)>> = figure
        .series
        .iter()
        .map(|series| {
            series
                .points()
                .map(|(x, y)| (x as f32, y as f32))
                .filter(|(_, y)| y.is_finite())
                .collect()
        })
        .collect();

    let y_range = points
        .iter()
        .flatten()
        .map(|&(_, y)| y)
        .fold(None, |range, y| match range {
            None => Some((y, y)),
            Some((lo, hi)) => Some((f32::min(lo, y), f32::max(hi, y))),
        })
        .map(|(lo, hi)| {
            if lo < hi {
                (lo, hi)
            } else {
                let pad = (lo.abs() * 0.05).max(0.5);
                (lo - pad, hi + pad)
            }
        });

    (points, y_range)
}

fn draw(figure: &Figure, config: &PlotConfig) -> Option<String> {
    let (_, x_max) = figure.x_range()?;
    let (points, y_range) = chart_points(figure);
    let (y_min, y_max) = y_range?;
    let shapes: Vec<Shape> = points.iter().map(|p| Shape::Lines(p)).collect();

    let mut chart = Chart::new_with_y_range(
        config.width,
        config.height,
        0.0,
        x_max.max(1) as f32,
        y_min,
        y_max,
    );
    let chart = shapes
        .iter()
        .zip(&figure.series)
        .fold(&mut chart, |chart, (shape, series)| {
            chart.linecolorplot(shape, series.color.rgb())
        });
    chart.axis();
    chart.figures();
    Some(chart.to_string())
}

impl<W: Write, R: BufRead> Renderer for TerminalRenderer<W, R> {
    fn render(&mut self, figure: &Figure, config: &PlotConfig) -> Result<()> {
        config.validate()?;

        writeln!(self.writer, "{}", figure.y_label)?;
        match draw(figure, config) {
            Some(frame) => writeln!(self.writer, "{}", frame)?,
            None => writeln!(self.writer, "(no data)")?,
        }
        let indent = (config.width as usize / 2).saturating_sub(figure.x_label.len() / 2);
        writeln!(self.writer, "{:indent$}{}", "", figure.x_label, indent = indent)?;

        if let Some(legend) = &figure.legend {
            for entry in &legend.entries {
                writeln!(self.writer, "  ── {} ({})", entry.label, entry.color.name())?;
            }
        }

        if config.pause {
            write!(self.writer, "Press Enter to continue...")?;
            self.writer.flush()?;
            let mut line = String::new();
            self.input.read_line(&mut line)?;
        } else {
            self.writer.flush()?;
        }
        Ok(())
    }
}
