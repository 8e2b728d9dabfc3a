use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;
use wloutput_core::geometry::{read_physical_size, sysfs_physical_size};
use wloutput_core::{Mode, Monitor, PhysicalSize};

/// Physical size as written in the monitors file
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PhysicalCm {
    pub width: u32,
    pub height: u32,
}

/// One entry of the monitors file
#[derive(Debug, Clone, Deserialize)]
pub struct MonitorEntry {
    pub name: String,
    pub modes: Vec<Mode>,
    #[serde(default)]
    pub physical_cm: Option<PhysicalCm>,
    #[serde(default)]
    pub edid: Option<PathBuf>,
}

impl MonitorEntry {
    /// Explicit size first, then the given EDID file, then sysfs
    fn physical_size(&self) -> PhysicalSize {
        if let Some(cm) = self.physical_cm {
            return PhysicalSize::new(cm.width, cm.height);
        }
        if let Some(edid) = &self.edid {
            return read_physical_size(edid);
        }
        sysfs_physical_size(&self.name)
    }

    pub fn into_monitor(self) -> Monitor {
        let physical = self.physical_size();
        debug!(
            event = "cli.monitor_resolved",
            output = %self.name,
            width_cm = physical.width_cm,
            height_cm = physical.height_cm
        );
        Monitor::new(self.name, self.modes, physical)
    }
}

pub fn parse_monitors(content: &str) -> Result<Vec<Monitor>, serde_json::Error> {
    let entries: Vec<MonitorEntry> = serde_json::from_str(content)?;
    Ok(entries.into_iter().map(MonitorEntry::into_monitor).collect())
}

pub fn load_monitors(path: &Path) -> Result<Vec<Monitor>, Box<dyn std::error::Error>> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read monitors file '{}': {}", path.display(), e))?;
    let monitors = parse_monitors(&content)
        .map_err(|e| format!("Invalid monitors file '{}': {}", path.display(), e))?;
    Ok(monitors)
}
