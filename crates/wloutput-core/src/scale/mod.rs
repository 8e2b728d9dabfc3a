mod handler;
mod types;

pub use handler::{filter_for_scale, min_known_density, plan_scales, scale_for_density};
pub use types::{DEFAULT_REFERENCE_DENSITY, ScalePolicy};
