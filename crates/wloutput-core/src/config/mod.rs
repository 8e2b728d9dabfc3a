mod errors;
mod loading;
mod types;

pub use errors::ConfigError;
pub use loading::{default_config_path, load_config, parse_config, validate_config};
pub use types::{BackgroundConfig, ScaleConfig, SetupConfig, WlOutputConfig};
