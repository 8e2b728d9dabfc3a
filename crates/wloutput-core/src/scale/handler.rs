use tracing::{debug, info, warn};

use super::types::ScalePolicy;
use crate::screen::{MeasuredScreen, Scale, ScaleFilter, ScaledScreen};

/// Smallest non-zero density, or `None` when no screen has a known density
pub fn min_known_density(screens: &[MeasuredScreen]) -> Option<u32> {
    screens
        .iter()
        .map(|s| s.geometry.density)
        .filter(|&d| d > 0)
        .min()
}

/// Scale for a screen of `density` relative to the least dense screen.
///
/// The density ratio is rounded to the nearest quarter (ties away from zero), then capped at
/// `density / reference_density`. A capped value is rounded to two decimals and is not snapped
/// back to a quarter step. Unknown densities get a scale of 1.
pub fn scale_for_density(density: u32, min_density: u32, reference_density: u32) -> Scale {
    if density == 0 || min_density == 0 {
        return Scale::ONE;
    }

    let density = u64::from(density);
    let min_density = u64::from(min_density);

    // round(4 * density / min_density), ties away from zero
    let quarters = (8 * density + min_density) / (2 * min_density);
    let mut hundredths = quarters * 25;

    if reference_density > 0 {
        let reference = u64::from(reference_density);
        // scale > density / reference
        if hundredths * reference > density * 100 {
            hundredths = ((density * 200 + reference) / (2 * reference)).max(1);
        }
    }

    let hundredths = u32::try_from(hundredths).unwrap_or(u32::MAX);
    Scale::from_hundredths(hundredths).unwrap_or(Scale::ONE)
}

/// `nearest` for integer scales, the policy's smoothing filter otherwise
pub fn filter_for_scale(scale: Scale, smoothing: ScaleFilter) -> ScaleFilter {
    if scale.is_integer() {
        ScaleFilter::Nearest
    } else {
        smoothing
    }
}

/// Assign a scale and scale filter to every screen, normalizing to the least dense one
pub fn plan_scales(screens: Vec<MeasuredScreen>, policy: &ScalePolicy) -> Vec<ScaledScreen> {
    let min_density = min_known_density(&screens);

    match min_density {
        Some(min) => info!(event = "core.scale.reference_density", min_density = min),
        None => warn!(
            event = "core.scale.no_known_density",
            count = screens.len(),
            "No output reports a physical size, all scales default to 1"
        ),
    }

    screens
        .into_iter()
        .map(|screen| {
            let scale = scale_for_density(
                screen.geometry.density,
                min_density.unwrap_or(0),
                policy.reference_density,
            );
            let scale_filter = filter_for_scale(scale, policy.smoothing_filter);

            debug!(
                event = "core.scale.planned",
                output = %screen.name,
                density = screen.geometry.density,
                scale = %scale,
                scale_filter = %scale_filter
            );

            ScaledScreen {
                name: screen.name,
                mode: screen.mode,
                geometry: screen.geometry,
                scale,
                scale_filter,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screen::{Geometry, Mode};

    fn measured(name: &str, density: u32) -> MeasuredScreen {
        MeasuredScreen {
            name: name.to_string(),
            mode: Mode::new(1920, 1080, 60000),
            geometry: Geometry::new(50, 30, density),
        }
    }

    fn hundredths(density: u32, min_density: u32) -> u32 {
        scale_for_density(density, min_density, 30).hundredths()
    }

    #[test]
    fn test_least_dense_screen_gets_one() {
        assert_eq!(hundredths(40, 40), 100);
        assert_eq!(hundredths(90, 90), 100);
    }

    #[test]
    fn test_quarter_step_quantization() {
        // 73 / 40 = 1.825 -> 7.3 quarters -> 7
        assert_eq!(hundredths(73, 40), 175);
        // 64 / 40 = 1.6 -> 6.4 quarters -> 6
        assert_eq!(hundredths(64, 40), 150);
        // 80 / 40 = 2
        assert_eq!(hundredths(80, 40), 200);
    }

    #[test]
    fn test_quarter_tie_rounds_away_from_zero() {
        // 85 / 40 = 2.125 -> 8.5 quarters -> 9
        assert_eq!(hundredths(85, 40), 225);
        // 45 / 40 = 1.125 -> 4.5 quarters -> 5
        assert_eq!(hundredths(45, 40), 125);
    }

    #[test]
    fn test_reference_density_clamp() {
        // 40 / 10 = 4, capped at 40 / 30 = 1.333...
        assert_eq!(hundredths(40, 10), 133);
        // The least dense screen is capped below 1: 10 / 30 = 0.333...
        assert_eq!(hundredths(10, 10), 33);
        // 29 / 30 = 0.9666... rounds to 0.97
        assert_eq!(hundredths(29, 29), 97);
    }

    #[test]
    fn test_clamp_boundary_is_not_applied_when_equal() {
        // 60 / 30 = 2 and quantized scale is exactly 2
        assert_eq!(hundredths(60, 30), 200);
    }

    #[test]
    fn test_unknown_density_falls_back_to_one() {
        assert_eq!(scale_for_density(0, 40, 30), Scale::ONE);
        assert_eq!(scale_for_density(55, 0, 30), Scale::ONE);
    }

    #[test]
    fn test_clamp_disabled_without_reference_density() {
        assert_eq!(scale_for_density(40, 10, 0).hundredths(), 400);
    }

    #[test]
    fn test_scales_positive_and_quarter_steps_before_clamp() {
        for min in 30..=60 {
            for density in min..=240 {
                let scale = scale_for_density(density, min, 0);
                assert!(scale.hundredths() > 0);
                assert_eq!(scale.hundredths() % 25, 0);
            }
        }
    }

    #[test]
    fn test_filter_for_scale() {
        assert_eq!(
            filter_for_scale(Scale::ONE, ScaleFilter::Linear),
            ScaleFilter::Nearest
        );
        let fractional = Scale::from_hundredths(175).unwrap();
        assert_eq!(
            filter_for_scale(fractional, ScaleFilter::Linear),
            ScaleFilter::Linear
        );
        assert_eq!(
            filter_for_scale(fractional, ScaleFilter::Smart),
            ScaleFilter::Smart
        );
    }

    #[test]
    fn test_plan_scales_mixed_density() {
        let screens = vec![measured("A", 73), measured("B", 40)];
        let planned = plan_scales(screens, &ScalePolicy::default());

        assert_eq!(planned[0].name, "A");
        assert_eq!(planned[0].scale.to_string(), "1.75");
        assert_eq!(planned[0].scale_filter, ScaleFilter::Linear);
        assert_eq!(planned[1].scale, Scale::ONE);
        assert_eq!(planned[1].scale_filter, ScaleFilter::Nearest);
    }

    #[test]
    fn test_plan_scales_unknown_density_excluded_from_minimum() {
        let screens = vec![measured("A", 0), measured("B", 80), measured("C", 40)];
        let planned = plan_scales(screens, &ScalePolicy::default());

        assert_eq!(planned[0].scale, Scale::ONE);
        assert_eq!(planned[1].scale.to_string(), "2");
        assert_eq!(planned[2].scale, Scale::ONE);
    }

    #[test]
    fn test_plan_scales_all_unknown() {
        let screens = vec![measured("A", 0), measured("B", 0)];
        let planned = plan_scales(screens, &ScalePolicy::default());
        assert!(planned.iter().all(|s| s.scale == Scale::ONE));
        assert!(
            planned
                .iter()
                .all(|s| s.scale_filter == ScaleFilter::Nearest)
        );
    }

    #[test]
    fn test_min_known_density() {
        let screens = vec![measured("A", 0), measured("B", 64), measured("C", 40)];
        assert_eq!(min_known_density(&screens), Some(40));
        assert_eq!(min_known_density(&[measured("A", 0)]), None);
        assert_eq!(min_known_density(&[]), None);
    }
}
