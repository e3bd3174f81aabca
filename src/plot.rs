use crate::series::LossSeries;
use crate::{Figure, PlotConfig, Renderer, TerminalRenderer};
use anyhow::Result;

/// Plot train loss (red) and test loss (blue) per epoch on stdout.
///
/// Fails if the two series differ in length. Use [`plot_with`] to pick
/// another [`LengthPolicy`](crate::LengthPolicy) or renderer.
pub fn plot(train_loss: LossSeries, test_loss: LossSeries) -> Result<()> {
    plot_with(
        &mut TerminalRenderer::stdout(),
        train_loss,
        test_loss,
        &PlotConfig::default(),
    )
}

pub fn plot_with(
    renderer: &mut impl Renderer,
    train_loss: LossSeries,
    test_loss: LossSeries,
    config: &PlotConfig,
) -> Result<()> {
    let figure = Figure::loss_curves(train_loss, test_loss, config.length_policy)?;
    renderer.render(&figure, config)
}

/// A renderer paired with the config its figures are built with
pub struct Plotter<R: Renderer> {
    renderer: R,
    config: PlotConfig,
}

impl<R: Renderer> Plotter<R> {
    pub fn new(renderer: R) -> Self {
        Self {
            renderer,
            config: PlotConfig::default(),
        }
    }

    pub fn with_config(mut self, config: PlotConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &PlotConfig {
        &self.config
    }

    pub fn figure(&self, train_loss: LossSeries, test_loss: LossSeries) -> Result<Figure> {
        Ok(Figure::loss_curves(
            train_loss,
            test_loss,
            self.config.length_policy,
        )?)
    }

    pub fn plot(&mut self, train_loss: LossSeries, test_loss: LossSeries) -> Result<()> {
        let figure = self.figure(train_loss, test_loss)?;
        self.renderer.render(&figure, &self.config)
    }

    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
