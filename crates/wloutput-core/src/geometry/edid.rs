use std::path::{Path, PathBuf};

use glob::Pattern;
use tracing::{debug, warn};

use crate::screen::PhysicalSize;

const EDID_HEADER: [u8; 8] = [0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x00];
const EDID_BLOCK_LEN: usize = 128;
const HORIZONTAL_SIZE_OFFSET: usize = 21;
const VERTICAL_SIZE_OFFSET: usize = 22;

const DRM_SYSFS_ROOT: &str = "/sys/class/drm";

/// Read the maximum image size (cm) from an EDID base block.
///
/// A truncated block or one with a bad header yields [`PhysicalSize::unknown`].
/// So does a block that encodes an aspect ratio instead of a size (one byte zero).
pub fn physical_size_from_edid(edid: &[u8]) -> PhysicalSize {
    if edid.len() < EDID_BLOCK_LEN || edid[..EDID_HEADER.len()] != EDID_HEADER {
        warn!(
            event = "core.edid.malformed",
            length = edid.len(),
            "EDID block is truncated or has an invalid header"
        );
        return PhysicalSize::unknown();
    }

    let size = PhysicalSize::new(
        u32::from(edid[HORIZONTAL_SIZE_OFFSET]),
        u32::from(edid[VERTICAL_SIZE_OFFSET]),
    );
    if size.is_known() {
        size
    } else {
        PhysicalSize::unknown()
    }
}

/// Read an EDID file and extract the physical size, treating any read failure as unknown
pub fn read_physical_size(path: &Path) -> PhysicalSize {
    match std::fs::read(path) {
        Ok(bytes) => physical_size_from_edid(&bytes),
        Err(e) => {
            warn!(
                event = "core.edid.read_failed",
                path = %path.display(),
                error = %e
            );
            PhysicalSize::unknown()
        }
    }
}

/// Locate the EDID file of a DRM connector named like `card*-<output>*` under `drm_root`
pub fn find_edid_in(drm_root: &Path, output_name: &str) -> Option<PathBuf> {
    let pattern = format!(
        "{}/card*-{}*/edid",
        Pattern::escape(&drm_root.display().to_string()),
        Pattern::escape(output_name)
    );

    let paths = match glob::glob(&pattern) {
        Ok(paths) => paths,
        Err(e) => {
            warn!(
                event = "core.edid.pattern_invalid",
                pattern = %pattern,
                error = %e
            );
            return None;
        }
    };

    let found = paths.filter_map(Result::ok).next();
    debug!(
        event = "core.edid.lookup_completed",
        output = output_name,
        found = ?found
    );
    found
}

/// Physical size of an output as reported by the kernel's DRM sysfs tree
pub fn sysfs_physical_size(output_name: &str) -> PhysicalSize {
    match find_edid_in(Path::new(DRM_SYSFS_ROOT), output_name) {
        Some(path) => read_physical_size(&path),
        None => PhysicalSize::unknown(),
    }
}
