use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::errors::ConfigError;
use super::types::WlOutputConfig;
use crate::screen::ScaleFilter;

/// `WLOUTPUT_CONFIG`, else `<config dir>/wloutput/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    if let Ok(path_str) = std::env::var("WLOUTPUT_CONFIG")
        && !path_str.is_empty()
    {
        return Some(PathBuf::from(path_str));
    }

    dirs::config_dir().map(|dir| dir.join("wloutput").join("config.toml"))
}

/// Load and validate the config file. A missing file yields the defaults.
pub fn load_config(path: &Path) -> Result<WlOutputConfig, ConfigError> {
    if !path.exists() {
        debug!(event = "core.config.not_found", path = %path.display());
        return Ok(WlOutputConfig::default());
    }

    let content = std::fs::read_to_string(path)?;
    let config = parse_config(&content).map_err(|e| match e {
        ConfigError::ConfigParseError { message, .. } => ConfigError::ConfigParseError {
            path: path.display().to_string(),
            message,
        },
        other => other,
    })?;

    info!(event = "core.config.loaded", path = %path.display());
    Ok(config)
}

/// Parse and validate TOML config text
pub fn parse_config(content: &str) -> Result<WlOutputConfig, ConfigError> {
    let config: WlOutputConfig =
        toml::from_str(content).map_err(|e| ConfigError::ConfigParseError {
            path: "<inline>".to_string(),
            message: e.to_string(),
        })?;
    validate_config(&config)?;
    Ok(config)
}

pub fn validate_config(config: &WlOutputConfig) -> Result<(), ConfigError> {
    if config.scale.reference_density == 0 {
        return Err(ConfigError::InvalidConfiguration {
            message: "scale.reference_density must be greater than 0".to_string(),
        });
    }

    if config.scale.smoothing_filter == ScaleFilter::Nearest {
        return Err(ConfigError::InvalidConfiguration {
            message: "scale.smoothing_filter must be 'linear' or 'smart'".to_string(),
        });
    }

    if !(1..=100).contains(&config.background.jpeg_quality) {
        return Err(ConfigError::InvalidConfiguration {
            message: format!(
                "background.jpeg_quality must be between 1 and 100, got {}",
                config.background.jpeg_quality
            ),
        });
    }

    Ok(())
}
