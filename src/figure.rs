use crate::series::{epoch_axis, Color, LossSeries, Series};
use crate::{LengthPolicy, PlotError};
use serde::Serialize;

pub const TRAIN_LABEL: &str = "Train loss";
pub const TEST_LABEL: &str = "Test loss";
pub const X_LABEL: &str = "Epoch";
pub const Y_LABEL: &str = "loss";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendEntry {
    pub label: String,
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Legend {
    pub entries: Vec<LegendEntry>,
}

/// Everything a [`Renderer`](crate::Renderer) needs to draw a chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figure {
    pub series: Vec<Series>,
    pub x_label: String,
    pub y_label: String,
    pub legend: Option<Legend>,
}

impl Figure {
    /// Train loss in red and test loss in blue over a shared epoch axis sized by `train`.
    pub fn loss_curves(
        train: LossSeries,
        test: LossSeries,
        policy: LengthPolicy,
    ) -> Result<Self, PlotError> {
        let len = if train.len() == test.len() {
            train.len()
        } else {
            match policy {
                LengthPolicy::Strict => {
                    return Err(PlotError::LengthMismatch {
                        train: train.len(),
                        test: test.len(),
                    })
                }
                LengthPolicy::Truncate => {
                    let len = train.len().min(test.len());
                    log::warn!(
                        "train has {} epochs and test has {}, plotting the first {}",
                        train.len(),
                        test.len(),
                        len
                    );
                    len
                }
            }
        };
        log::debug!("building loss figure over {} epochs", len);

        let series = vec![
            Series::new(TRAIN_LABEL, Color::Red, epoch_axis(len), train[..len].to_vec()),
            Series::new(TEST_LABEL, Color::Blue, epoch_axis(len), test[..len].to_vec()),
        ];
        let legend = Legend {
            entries: series
                .iter()
                .map(|s| LegendEntry {
                    label: s.label.clone(),
                    color: s.color,
                })
                .collect(),
        };

        Ok(Self {
            series,
            x_label: X_LABEL.to_string(),
            y_label: Y_LABEL.to_string(),
            legend: Some(legend),
        })
    }

    pub fn legend_labels(&self) -> Vec<&str> {
        self.legend
            .iter()
            .flat_map(|legend| legend.entries.iter().map(|e| e.label.as_str()))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.series.iter().all(Series::is_empty)
    }

    /// Smallest and largest epoch across all series
    pub fn x_range(&self) -> Option<(usize, usize)> {
        let mut epochs = self.series.iter().flat_map(|s| s.epochs.iter().copied());
        let first = epochs.next()?;
        Some(epochs.fold((first, first), |(lo, hi), x| (lo.min(x), hi.max(x))))
    }

    /// Smallest and largest finite loss across all series
    pub fn y_range(&self) -> Option<(f64, f64)> {
        self.series
            .iter()
            .flat_map(|s| s.values.iter().copied())
            .filter(|y| y.is_finite())
            .fold(None, |range, y| match range {
                None => Some((y, y)),
                Some((lo, hi)) => Some((f64::min(lo, y), f64::max(hi, y))),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loss_curves() {
        let figure =
            Figure::loss_curves(&[0.9, 0.5, 0.2], &[1.0, 0.6, 0.3], LengthPolicy::Strict).unwrap();
        assert_eq!(figure.series.len(), 2);
        assert_eq!(figure.series[0].epochs, vec![0, 1, 2]);
        assert_eq!(figure.series[1].epochs, vec![0, 1, 2]);
        assert_eq!(figure.series[0].values, vec![0.9, 0.5, 0.2]);
        assert_eq!(figure.series[1].values, vec![1.0, 0.6, 0.3]);
        assert_eq!(figure.series[0].color, Color::Red);
        assert_eq!(figure.series[1].color, Color::Blue);
        assert_eq!(figure.x_label, "Epoch");
        assert_eq!(figure.y_label, "loss");
        assert_eq!(figure.legend_labels(), vec!["Train loss", "Test loss"]);
        assert_eq!(figure.x_range(), Some((0, 2)));
        assert_eq!(figure.y_range(), Some((0.2, 1.0)));
    }

    #[test]
    fn test_empty_series() {
        let figure = Figure::loss_curves(&[], &[], LengthPolicy::Strict).unwrap();
        assert!(figure.is_empty());
        assert_eq!(figure.legend_labels().len(), 2);
        assert_eq!(figure.x_range(), None);
        assert_eq!(figure.y_range(), None);
    }

    #[test]
    fn test_strict_length_mismatch() {
        let result = Figure::loss_curves(&[0.9, 0.5], &[1.0], LengthPolicy::Strict);
        assert_eq!(result, Err(PlotError::LengthMismatch { train: 2, test: 1 }));
    }

    #[test]
    fn test_truncate_length_mismatch() {
        let figure =
            Figure::loss_curves(&[0.9, 0.5, 0.2], &[1.0, 0.6], LengthPolicy::Truncate).unwrap();
        assert_eq!(figure.series[0].values, vec![0.9, 0.5]);
        assert_eq!(figure.series[1].values, vec![1.0, 0.6]);
        assert_eq!(figure.series[0].epochs, vec![0, 1]);
        assert_eq!(figure.series[1].epochs, vec![0, 1]);
        assert_eq!(figure.x_range(), Some((0, 1)));

        let figure = Figure::loss_curves(&[0.9], &[1.0, 0.6, 0.3], LengthPolicy::Truncate).unwrap();
        assert_eq!(figure.x_range(), Some((0, 0)));
        assert_eq!(figure.series[1].values, vec![1.0]);
    }

    #[test]
    fn test_y_range_skips_non_finite() {
        let figure =
            Figure::loss_curves(&[f64::NAN, 0.5], &[2.0, f64::INFINITY], LengthPolicy::Strict)
                .unwrap();
        assert_eq!(figure.y_range(), Some((0.5, 2.0)));
    }
}
