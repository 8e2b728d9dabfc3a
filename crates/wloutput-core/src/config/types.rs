use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::background::DEFAULT_JPEG_QUALITY;
use crate::scale::{DEFAULT_REFERENCE_DENSITY, ScalePolicy};
use crate::screen::ScaleFilter;

/// Contents of `config.toml`. Every section and key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WlOutputConfig {
    pub scale: ScaleConfig,
    pub background: BackgroundConfig,
    pub setup: SetupConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScaleConfig {
    /// Minimum legible density in px/cm; caps scales at `density / reference_density`
    pub reference_density: u32,
    /// Filter for fractional scales (`linear` or `smart`)
    pub smoothing_filter: ScaleFilter,
}

impl Default for ScaleConfig {
    fn default() -> Self {
        Self {
            reference_density: DEFAULT_REFERENCE_DENSITY,
            smoothing_filter: ScaleFilter::Linear,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackgroundConfig {
    pub output_dir: Option<PathBuf>,
    pub jpeg_quality: u8,
}

impl Default for BackgroundConfig {
    fn default() -> Self {
        Self {
            output_dir: None,
            jpeg_quality: DEFAULT_JPEG_QUALITY,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SetupConfig {
    pub path: Option<PathBuf>,
}

impl WlOutputConfig {
    pub fn scale_policy(&self) -> ScalePolicy {
        ScalePolicy::new(self.scale.reference_density, self.scale.smoothing_filter)
    }

    /// Configured segment directory, or `<tmp>/wloutput`
    pub fn output_dir(&self) -> PathBuf {
        self.background
            .output_dir
            .clone()
            .unwrap_or_else(|| std::env::temp_dir().join("wloutput"))
    }
}
