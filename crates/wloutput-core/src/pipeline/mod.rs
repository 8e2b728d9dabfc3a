mod errors;
mod handler;
mod types;

pub use errors::PipelineError;
pub use handler::{plan_layout, run};
pub use types::{PipelineOptions, PipelineOutput};
