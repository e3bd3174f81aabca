//! Plot train and test loss per epoch as a labeled line chart.
//!
//! ```no_run
//! loss_plot::plot(&[0.9, 0.5, 0.2], &[1.0, 0.6, 0.3]).unwrap();
//! ```

pub mod config;
pub mod error;
pub mod figure;
pub mod history;
mod plot;
pub mod render;
pub mod series;

pub use config::{LengthPolicy, PlotConfig};
pub use error::PlotError;
pub use figure::{Figure, Legend, LegendEntry};
pub use history::LossHistory;
pub use plot::{plot, plot_with, Plotter};
pub use render::{JsonRenderer, RecordingRenderer, Renderer, TerminalRenderer};
pub use series::{Color, Series};
