use std::path::{Path, PathBuf};

use super::errors::SetupError;
use super::types::SavedSetup;
use crate::layout::{Arrangement, LayoutError};

/// Location of the saved setup file.
///
/// `WLOUTPUT_SETUP_FILE` wins, then `<config dir>/wloutput/setup.json`. Falls back to
/// `./.wloutput/setup.json` if no config directory can be determined.
pub fn default_setup_path() -> PathBuf {
    if let Ok(path_str) = std::env::var("WLOUTPUT_SETUP_FILE")
        && !path_str.is_empty()
    {
        return PathBuf::from(path_str);
    }

    match dirs::config_dir() {
        Some(config) => config.join("wloutput").join("setup.json"),
        None => {
            tracing::error!(
                event = "core.setup.config_dir_not_found",
                fallback = ".",
                "Could not determine config directory - using current directory as fallback"
            );
            PathBuf::from(".").join(".wloutput").join("setup.json")
        }
    }
}

/// Load a saved setup. A missing file is an empty setup.
///
/// # Errors
///
/// Returns [`SetupError::LoadFailed`] if the file exists but cannot be read and
/// [`SetupError::ParseFailed`] if it is not a valid setup document.
pub fn load_setup(path: &Path) -> Result<SavedSetup, SetupError> {
    if !path.exists() {
        tracing::debug!(event = "core.setup.not_found", path = %path.display());
        return Ok(SavedSetup::default());
    }

    let content = std::fs::read_to_string(path).map_err(|e| {
        tracing::error!(
            event = "core.setup.load_failed",
            path = %path.display(),
            error = %e
        );
        SetupError::LoadFailed {
            path: path.display().to_string(),
            message: e.to_string(),
        }
    })?;

    let setup: SavedSetup = serde_json::from_str(&content).map_err(|e| {
        tracing::error!(
            event = "core.setup.json_parse_failed",
            path = %path.display(),
            error = %e,
            "Saved setup exists but contains invalid JSON"
        );
        SetupError::ParseFailed {
            path: path.display().to_string(),
            message: e.to_string(),
        }
    })?;

    tracing::info!(
        event = "core.setup.loaded",
        path = %path.display(),
        count = setup.len()
    );

    Ok(setup)
}

/// Save a setup as pretty JSON, creating parent directories as needed
pub fn save_setup(path: &Path, setup: &SavedSetup) -> Result<(), SetupError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| SetupError::SaveFailed {
            message: format!("Failed to create directory ({}): {}", parent.display(), e),
        })?;
    }

    let json = serde_json::to_string_pretty(setup).map_err(|e| SetupError::SaveFailed {
        message: format!("Failed to serialize setup: {}", e),
    })?;

    std::fs::write(path, json).map_err(|e| SetupError::SaveFailed {
        message: format!("Failed to write setup file ({}): {}", path.display(), e),
    })?;

    tracing::info!(
        event = "core.setup.saved",
        path = %path.display(),
        count = setup.len()
    );

    Ok(())
}

/// Replace every screen that has a saved record with that record, then recompute the canvas.
///
/// Screens without a saved record are kept as planned. Saved records for outputs that are
/// not connected are ignored.
pub fn merge_saved(
    arrangement: Arrangement,
    saved: &SavedSetup,
) -> Result<Arrangement, LayoutError> {
    if saved.is_empty() {
        return Ok(arrangement);
    }

    let screens = arrangement
        .into_screens()
        .into_iter()
        .map(|screen| match saved.get(&screen.name) {
            Some(record) => {
                tracing::info!(
                    event = "core.setup.override_applied",
                    output = %screen.name
                );
                record.clone()
            }
            None => screen,
        })
        .collect();

    Arrangement::from_screens(screens)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screen::{Canvas, Geometry, Mode, Rect, Scale, ScaleFilter, Screen};

    #[test]
    fn test_setup_path_env_override() {
        temp_env::with_var("WLOUTPUT_SETUP_FILE", Some("/tmp/wloutput-setup.json"), || {
            assert_eq!(
                default_setup_path(),
                PathBuf::from("/tmp/wloutput-setup.json")
            );
        });
    }

    fn screen(name: &str, position: Rect, hundredths: u32) -> Screen {
        Screen {
            name: name.to_string(),
            mode: Mode::new(1920, 1080, 60000),
            geometry: Geometry::new(48, 27, 40),
            position,
            scale: Scale::from_hundredths(hundredths).unwrap(),
            scale_filter: ScaleFilter::Nearest,
            background: None,
        }
    }

    fn planned() -> Arrangement {
        Arrangement::from_screens(vec![
            screen("DP-1", Rect::new(0, 0, 1920, 1080), 100),
            screen("DP-2", Rect::new(1920, 0, 1920, 1080), 100),
        ])
        .unwrap()
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let setup = load_setup(&dir.path().join("setup.json")).unwrap();
        assert!(setup.is_empty());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("setup.json");
        let setup = SavedSetup::from_screens(planned().screens());

        save_setup(&path, &setup).unwrap();
        assert!(path.exists());

        let loaded = load_setup(&path).unwrap();
        assert_eq!(loaded, setup);
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded.get("DP-2").unwrap().position.x, 1920);
    }

    #[test]
    fn test_load_corrupted_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("setup.json");
        std::fs::write(&path, "{ not json").unwrap();

        let result = load_setup(&path);
        assert!(matches!(result, Err(SetupError::ParseFailed { .. })));
    }

    #[test]
    fn test_merge_replaces_matching_screens() {
        let mut saved = SavedSetup::default();
        saved.outputs.insert(
            "DP-2".to_string(),
            screen("DP-2", Rect::new(1920, 0, 1280, 720), 150),
        );
        saved.outputs.insert(
            "HDMI-A-1".to_string(),
            screen("HDMI-A-1", Rect::new(9000, 0, 100, 100), 100),
        );

        let merged = merge_saved(planned(), &saved).unwrap();
        let screens = merged.screens();

        assert_eq!(screens.len(), 2);
        assert_eq!(screens[0].position, Rect::new(0, 0, 1920, 1080));
        assert_eq!(screens[1].position, Rect::new(1920, 0, 1280, 720));
        assert_eq!(screens[1].scale.to_string(), "1.5");
        assert_eq!(merged.canvas(), Canvas::new(3200, 1080));
    }

    #[test]
    fn test_merge_with_empty_setup_is_identity() {
        let merged = merge_saved(planned(), &SavedSetup::default()).unwrap();
        assert_eq!(merged, planned());
    }
}
