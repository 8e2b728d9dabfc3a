use crate::errors::WlOutputError;

#[derive(Debug, thiserror::Error)]
pub enum LayoutError {
    #[error("No active outputs to arrange")]
    NoScreens,

    #[error("Arrangement produced a degenerate canvas: {width}x{height}")]
    DegenerateCanvas { width: u32, height: u32 },
}

impl WlOutputError for LayoutError {
    fn error_code(&self) -> &'static str {
        match self {
            LayoutError::NoScreens => "LAYOUT_NO_SCREENS",
            LayoutError::DegenerateCanvas { .. } => "LAYOUT_DEGENERATE_CANVAS",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(self, LayoutError::NoScreens)
    }
}
