use crate::errors::WlOutputError;

#[derive(Debug, thiserror::Error)]
pub enum SetupError {
    #[error("Failed to read saved setup '{path}': {message}")]
    LoadFailed { path: String, message: String },

    #[error("Saved setup '{path}' is not valid JSON: {message}")]
    ParseFailed { path: String, message: String },

    #[error("Failed to save setup: {message}")]
    SaveFailed { message: String },
}

impl WlOutputError for SetupError {
    fn error_code(&self) -> &'static str {
        match self {
            SetupError::LoadFailed { .. } => "SETUP_LOAD_FAILED",
            SetupError::ParseFailed { .. } => "SETUP_PARSE_FAILED",
            SetupError::SaveFailed { .. } => "SETUP_SAVE_FAILED",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(self, SetupError::ParseFailed { .. })
    }
}
