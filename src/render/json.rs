use super::Renderer;
use crate::{Figure, PlotConfig};
use anyhow::Result;
use std::io::Write;

/// Writes the figure as pretty JSON, for pipes and notebooks
pub struct JsonRenderer<W: Write> {
    writer: W,
}

impl<W: Write> JsonRenderer<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Renderer for JsonRenderer<W> {
    fn render(&mut self, figure: &Figure, _config: &PlotConfig) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, figure)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
