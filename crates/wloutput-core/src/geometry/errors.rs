use crate::errors::WlOutputError;

#[derive(Debug, thiserror::Error)]
pub enum GeometryError {
    #[error("Output '{name}' has no usable modes")]
    MissingModes { name: String },
}

impl WlOutputError for GeometryError {
    fn error_code(&self) -> &'static str {
        match self {
            GeometryError::MissingModes { .. } => "GEOMETRY_MISSING_MODES",
        }
    }
}
