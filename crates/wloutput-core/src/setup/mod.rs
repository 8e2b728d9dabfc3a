mod errors;
mod persistence;
mod types;

pub use errors::SetupError;
pub use persistence::{default_setup_path, load_setup, merge_saved, save_setup};
pub use types::SavedSetup;
