use std::cmp::Ordering;

use tracing::{debug, info, warn};

use super::errors::GeometryError;
use crate::screen::{Geometry, MeasuredScreen, Mode, Monitor, PhysicalSize};

/// Quotients this close to an integer are snapped to it before the ceiling
const DENSITY_EPSILON: f64 = 1e-9;

/// Estimate pixel density (pixels per centimeter) from a panel's physical size and a mode.
///
/// Returns [`Geometry::unknown`] when the physical size is unknown.
pub fn estimate_geometry(physical: PhysicalSize, mode: Mode) -> Geometry {
    if !physical.is_known() {
        return Geometry::unknown();
    }

    let diagonal_cm = f64::from(physical.width_cm).hypot(f64::from(physical.height_cm));
    let diagonal_px = f64::from(mode.width).hypot(f64::from(mode.height));

    let ratio = diagonal_px / diagonal_cm;
    let nearest = ratio.round();
    let ratio = if (ratio - nearest).abs() < DENSITY_EPSILON {
        nearest
    } else {
        ratio
    };

    Geometry::new(physical.width_cm, physical.height_cm, ratio.ceil() as u32)
}

/// Pick the preferred mode: widest, then widest aspect ratio, then fastest refresh.
///
/// Modes with a zero dimension are skipped. Ties keep enumeration order.
///
/// # Errors
///
/// Returns [`GeometryError::MissingModes`] if no usable mode is advertised.
pub fn select_mode(name: &str, modes: &[Mode]) -> Result<Mode, GeometryError> {
    modes
        .iter()
        .copied()
        .filter(Mode::is_usable)
        .min_by(|a, b| compare_modes(b, a))
        .ok_or_else(|| GeometryError::MissingModes {
            name: name.to_string(),
        })
}

fn compare_modes(a: &Mode, b: &Mode) -> Ordering {
    // Aspect ratios compared by cross-multiplication
    let aspect_a = u64::from(a.width) * u64::from(b.height);
    let aspect_b = u64::from(b.width) * u64::from(a.height);

    a.width
        .cmp(&b.width)
        .then(aspect_a.cmp(&aspect_b))
        .then(a.refresh.cmp(&b.refresh))
}

/// Select a mode for the monitor and estimate its geometry at that mode
pub fn measure(monitor: &Monitor) -> Result<MeasuredScreen, GeometryError> {
    let mode = select_mode(&monitor.name, &monitor.modes)?;
    let geometry = estimate_geometry(monitor.physical, mode);

    if geometry.is_known() {
        debug!(
            event = "core.geometry.estimated",
            output = %monitor.name,
            mode = %mode,
            width_cm = geometry.width_cm,
            height_cm = geometry.height_cm,
            density = geometry.density
        );
    } else {
        warn!(
            event = "core.geometry.unknown",
            output = %monitor.name,
            mode = %mode,
            "Physical size unavailable, density treated as unknown"
        );
    }

    Ok(MeasuredScreen {
        name: monitor.name.clone(),
        mode,
        geometry,
    })
}

/// Measure every monitor in enumeration order
pub fn measure_all(monitors: &[Monitor]) -> Result<Vec<MeasuredScreen>, GeometryError> {
    let screens = monitors.iter().map(measure).collect::<Result<Vec<_>, _>>()?;

    info!(event = "core.geometry.measure_completed", count = screens.len());

    Ok(screens)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_estimate_uhd_panel() {
        // sqrt(3840² + 2160²) / sqrt(60² + 34²) = 4405.81 / 68.96 = 63.88
        let geometry = estimate_geometry(PhysicalSize::new(60, 34), Mode::new(3840, 2160, 60000));
        assert_eq!(geometry, Geometry::new(60, 34, 64));
    }

    #[test]
    fn test_estimate_exact_ratio_is_not_bumped() {
        // 1920/48 == 1080/27 == 40
        let geometry = estimate_geometry(PhysicalSize::new(48, 27), Mode::new(1920, 1080, 60000));
        assert_eq!(geometry.density, 40);
    }

    #[test]
    fn test_estimate_unknown_physical_size() {
        let mode = Mode::new(1920, 1080, 60000);
        assert_eq!(
            estimate_geometry(PhysicalSize::unknown(), mode),
            Geometry::unknown()
        );
        assert_eq!(
            estimate_geometry(PhysicalSize::new(0, 30), mode),
            Geometry::unknown()
        );
    }

    #[test]
    fn test_density_zero_iff_physical_size_unknown() {
        let modes = [
            Mode::new(640, 480, 0),
            Mode::new(1920, 1080, 60000),
            Mode::new(5120, 1440, 120000),
        ];
        let sizes = [(1, 1), (30, 20), (60, 34), (120, 70), (0, 0)];
        for mode in modes {
            for (w, h) in sizes {
                let physical = PhysicalSize::new(w, h);
                let geometry = estimate_geometry(physical, mode);
                assert_eq!(geometry.density == 0, !physical.is_known());
            }
        }
    }

    #[test]
    fn test_select_mode_prefers_width_then_aspect_then_refresh() {
        let modes = vec![
            Mode::new(1920, 1080, 60000),
            Mode::new(2560, 1600, 60000),
            Mode::new(2560, 1440, 60000),
            Mode::new(2560, 1440, 144000),
            Mode::new(1280, 720, 240000),
        ];
        assert_eq!(
            select_mode("DP-1", &modes).unwrap(),
            Mode::new(2560, 1440, 144000)
        );
    }

    #[test]
    fn test_select_mode_ties_keep_first() {
        let modes = vec![Mode::new(1920, 1080, 60000), Mode::new(1920, 1080, 60000)];
        let selected = select_mode("HDMI-A-1", &modes).unwrap();
        assert_eq!(selected, Mode::new(1920, 1080, 60000));
    }

    #[test]
    fn test_select_mode_skips_zero_modes() {
        let modes = vec![Mode::new(0, 0, 0), Mode::new(1024, 768, 60000)];
        assert_eq!(
            select_mode("VGA-1", &modes).unwrap(),
            Mode::new(1024, 768, 60000)
        );
    }

    #[test]
    fn test_select_mode_missing() {
        let result = select_mode("DP-2", &[]);
        assert!(matches!(
            result,
            Err(GeometryError::MissingModes { ref name }) if name == "DP-2"
        ));

        let result = select_mode("DP-2", &[Mode::new(0, 1080, 0)]);
        assert!(result.is_err());
    }

    #[test]
    fn test_measure_all_preserves_order() {
        let monitors = vec![
            Monitor::new("B", vec![Mode::new(1920, 1080, 0)], PhysicalSize::new(48, 27)),
            Monitor::new("A", vec![Mode::new(1920, 1080, 0)], PhysicalSize::unknown()),
        ];
        let screens = measure_all(&monitors).unwrap();
        assert_eq!(screens[0].name, "B");
        assert_eq!(screens[0].geometry.density, 40);
        assert_eq!(screens[1].name, "A");
        assert_eq!(screens[1].geometry, Geometry::unknown());
    }

    #[test]
    fn test_measure_all_fails_on_missing_modes() {
        let monitors = vec![
            Monitor::new("A", vec![Mode::new(1920, 1080, 0)], PhysicalSize::unknown()),
            Monitor::new("B", vec![], PhysicalSize::unknown()),
        ];
        assert!(measure_all(&monitors).is_err());
    }
}
