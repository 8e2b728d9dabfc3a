mod errors;
mod handler;
mod types;

pub use errors::LayoutError;
pub use handler::compose_layout;
pub use types::Arrangement;
