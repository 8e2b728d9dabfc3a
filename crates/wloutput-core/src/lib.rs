//! Multi-monitor arrangement and background splitting for wlroots compositors.
//!
//! Monitors flow through four stages: [`geometry`] estimates pixel density from physical
//! size, [`scale`] picks a quarter-step scale relative to the least dense monitor, [`layout`]
//! packs the scaled monitors left to right, and [`background`] cover-fits one image to the
//! resulting canvas and cuts a segment per monitor.

pub mod background;
pub mod command;
pub mod config;
pub mod errors;
pub mod events;
pub mod geometry;
pub mod layout;
pub mod pipeline;
pub mod scale;
pub mod screen;
pub mod setup;

pub use errors::{WlOutputError, WlOutputResult};
pub use events::init_logging;
pub use layout::Arrangement;
pub use pipeline::{PipelineError, PipelineOptions, PipelineOutput, plan_layout, run};
pub use screen::{
    Canvas, Geometry, Mode, Monitor, PhysicalSize, Rect, Scale, ScaleFilter, Screen,
};
