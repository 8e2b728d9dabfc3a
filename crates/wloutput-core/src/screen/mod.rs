mod errors;
mod types;

pub use errors::ParseScaleError;
pub use types::{
    Canvas, Geometry, MeasuredScreen, Mode, Monitor, PhysicalSize, Rect, Scale, ScaleFilter,
    ScaledScreen, Screen,
};
