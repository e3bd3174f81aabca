mod json;
mod recording;
mod terminal;

pub use json::JsonRenderer;
pub use recording::RecordingRenderer;
pub use terminal::TerminalRenderer;

use crate::{Figure, PlotConfig};
use anyhow::Result;

/// Presents a [`Figure`] to the user. Returns once the figure has been shown.
///
/// `config` carries the display settings (size, pause); renderers that have
/// no use for them ignore them.
pub trait Renderer {
    fn render(&mut self, figure: &Figure, config: &PlotConfig) -> Result<()>;
}

impl<R: Renderer + ?Sized> Renderer for &mut R {
    fn render(&mut self, figure: &Figure, config: &PlotConfig) -> Result<()> {
        (**self).render(figure, config)
    }
}

impl<R: Renderer + ?Sized> Renderer for Box<R> {
    fn render(&mut self, figure: &Figure, config: &PlotConfig) -> Result<()> {
        (**self).render(figure, config)
    }
}
