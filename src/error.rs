use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlotError {
    #[error("train has {train} epochs but test has {test}; loss series must have the same length")]
    LengthMismatch { train: usize, test: usize },

    #[error("chart of {width}x{height} is too small, need at least 32x3")]
    ChartTooSmall { width: u32, height: u32 },
}
