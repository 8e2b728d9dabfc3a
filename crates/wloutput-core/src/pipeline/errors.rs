use crate::background::BackgroundError;
use crate::errors::WlOutputError;
use crate::geometry::GeometryError;
use crate::layout::LayoutError;

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Layout(#[from] LayoutError),

    #[error(transparent)]
    Background(#[from] BackgroundError),
}

impl WlOutputError for PipelineError {
    fn error_code(&self) -> &'static str {
        match self {
            PipelineError::Geometry(e) => e.error_code(),
            PipelineError::Layout(e) => e.error_code(),
            PipelineError::Background(e) => e.error_code(),
        }
    }

    fn is_user_error(&self) -> bool {
        match self {
            PipelineError::Geometry(e) => e.is_user_error(),
            PipelineError::Layout(e) => e.is_user_error(),
            PipelineError::Background(e) => e.is_user_error(),
        }
    }
}
