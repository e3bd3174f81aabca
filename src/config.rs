use crate::PlotError;
use serde::Deserialize;

/// What to do when the train and test series have different lengths.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LengthPolicy {
    /// Fail with [`PlotError::LengthMismatch`]
    #[default]
    Strict,
    /// Plot only the epochs both series have
    Truncate,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PlotConfig {
    pub width: u32,
    pub height: u32,
    pub length_policy: LengthPolicy,
    /// Block until Enter is pressed after drawing
    pub pause: bool,
}

impl PlotConfig {
    pub const MIN_WIDTH: u32 = 32;
    pub const MIN_HEIGHT: u32 = 3;

    pub fn validate(&self) -> Result<(), PlotError> {
        if self.width < Self::MIN_WIDTH || self.height < Self::MIN_HEIGHT {
            return Err(PlotError::ChartTooSmall {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            width: 100,
            height: 40,
            length_policy: LengthPolicy::Strict,
            pause: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = PlotConfig::default();
        assert_eq!(config.length_policy, LengthPolicy::Strict);
        assert!(!config.pause);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_too_small_chart() {
        let config = PlotConfig {
            width: 20,
            ..PlotConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(PlotError::ChartTooSmall {
                width: 20,
                height: 40
            })
        );
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let config: PlotConfig = toml::from_str(
            r#"
            width = 64
            length_policy = "truncate"
            "#,
        )
        .unwrap();
        assert_eq!(config.width, 64);
        assert_eq!(config.height, 40);
        assert_eq!(config.length_policy, LengthPolicy::Truncate);
        assert!(!config.pause);
    }
}
