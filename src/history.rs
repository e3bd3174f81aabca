use crate::{plot, plot_with, PlotConfig, Renderer};
use anyhow::Result;

/// Train and test loss recorded one epoch at a time
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LossHistory {
    train: Vec<f64>,
    test: Vec<f64>,
}

impl LossHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, train_loss: f64, test_loss: f64) {
        self.train.push(train_loss);
        self.test.push(test_loss);
    }

    pub fn len(&self) -> usize {
        self.train.len()
    }

    pub fn is_empty(&self) -> bool {
        self.train.is_empty()
    }

    pub fn train(&self) -> &[f64] {
        &self.train
    }

    pub fn test(&self) -> &[f64] {
        &self.test
    }

    /// Epoch with the lowest test loss, ignoring NaN
    pub fn best_test_epoch(&self) -> Option<(usize, f64)> {
        self.test
            .iter()
            .copied()
            .enumerate()
            .filter(|(_, loss)| !loss.is_nan())
            .min_by(|(_, a), (_, b)| a.total_cmp(b))
    }

    pub fn plot(&self) -> Result<()> {
        plot(&self.train, &self.test)
    }

    pub fn plot_with(&self, renderer: &mut impl Renderer, config: &PlotConfig) -> Result<()> {
        plot_with(renderer, &self.train, &self.test, config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RecordingRenderer;

    #[test]
    fn test_record_and_plot() {
        let mut history = LossHistory::new();
        assert!(history.is_empty());
        history.record(0.9, 1.0);
        history.record(0.5, 0.6);
        history.record(0.2, 0.3);
        assert_eq!(history.len(), 3);

        let mut renderer = RecordingRenderer::new();
        history
            .plot_with(&mut renderer, &PlotConfig::default())
            .unwrap();
        let figure = renderer.last().unwrap();
        assert_eq!(figure.series[0].values, history.train());
        assert_eq!(figure.series[1].values, history.test());
        assert_eq!(figure.series[1].epochs, vec![0, 1, 2]);
    }

    #[test]
    fn test_best_test_epoch() {
        let mut history = LossHistory::new();
        assert_eq!(history.best_test_epoch(), None);
        history.record(0.9, 1.0);
        history.record(0.5, f64::NAN);
        history.record(0.2, 0.3);
        history.record(0.1, 0.4);
        assert_eq!(history.best_test_epoch(), Some((2, 0.3)));
    }
}
