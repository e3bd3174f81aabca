use super::Renderer;
use crate::{Figure, PlotConfig};
use anyhow::Result;

/// Keeps every figure it is asked to render instead of displaying it
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub figures: Vec<Figure>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<&Figure> {
        self.figures.last()
    }
}

impl Renderer for RecordingRenderer {
    fn render(&mut self, figure: &Figure, _config: &PlotConfig) -> Result<()> {
        self.figures.push(figure.clone());
        Ok(())
    }
}
