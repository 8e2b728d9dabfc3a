mod errors;
mod handler;
mod types;

pub use errors::BackgroundError;
pub use handler::{composite, cover_fit, crop_region, crop_segments};
pub use types::{CompositeRequest, CoverFit, DEFAULT_JPEG_QUALITY, FitAxis};
