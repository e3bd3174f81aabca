use rgb::RGB8;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Blue,
}

impl Color {
    pub fn rgb(&self) -> RGB8 {
        match self {
            Color::Red => RGB8::new(255, 0, 0),
            Color::Blue => RGB8::new(0, 0, 255),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Blue => "blue",
        }
    }
}

/// Loss values, one per epoch
pub type LossSeries<'a> = &'a [f64];

/// Epoch indices `0..len`, the shared x-axis of a figure
pub fn epoch_axis(len: usize) -> Vec<usize> {
    (0..len).collect()
}

/// A labeled line over (epoch, loss) points
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    pub label: String,
    pub color: Color,
    pub epochs: Vec<usize>,
    pub values: Vec<f64>,
}

impl Series {
    pub fn new(label: &str, color: Color, epochs: Vec<usize>, values: Vec<f64>) -> Self {
        debug_assert_eq!(epochs.len(), values.len());
        Self {
            label: label.to_string(),
            color,
            epochs,
            values,
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn points(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.epochs.iter().copied().zip(self.values.iter().copied())
    }
}
