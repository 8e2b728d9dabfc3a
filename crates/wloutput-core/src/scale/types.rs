use crate::screen::ScaleFilter;

/// Pixel density (px/cm) below which content becomes too small to read
pub const DEFAULT_REFERENCE_DENSITY: u32 = 30;

/// Tunables for the scale planner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScalePolicy {
    /// Scales are capped at `density / reference_density`; 0 disables the cap
    pub reference_density: u32,
    /// Filter used for fractional scales
    pub smoothing_filter: ScaleFilter,
}

impl ScalePolicy {
    pub fn new(reference_density: u32, smoothing_filter: ScaleFilter) -> Self {
        Self {
            reference_density,
            smoothing_filter,
        }
    }
}

impl Default for ScalePolicy {
    fn default() -> Self {
        Self {
            reference_density: DEFAULT_REFERENCE_DENSITY,
            smoothing_filter: ScaleFilter::Linear,
        }
    }
}
