use crate::errors::WlOutputError;

#[derive(Debug, thiserror::Error)]
pub enum BackgroundError {
    #[error("Failed to load image '{path}': {message}")]
    ImageLoadFailed { path: String, message: String },

    #[error("Source image has no area: {width}x{height}")]
    EmptySource { width: u32, height: u32 },

    #[error("Canvas has no area: {width}x{height}")]
    EmptyCanvas { width: u32, height: u32 },

    #[error(
        "Crop for output '{output}' at {x},{y} size {width}x{height} exceeds resized image {image_width}x{image_height}"
    )]
    CropOutOfBounds {
        output: String,
        x: u64,
        y: u64,
        width: u32,
        height: u32,
        image_width: u32,
        image_height: u32,
    },

    #[error("Failed to encode background segment: {0}")]
    EncodingError(String),

    #[error("Failed to save background segment '{path}': {message}")]
    SaveFailed { path: String, message: String },

    #[error("IO error: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },
}

impl WlOutputError for BackgroundError {
    fn error_code(&self) -> &'static str {
        match self {
            BackgroundError::ImageLoadFailed { .. } => "BACKGROUND_IMAGE_LOAD_FAILED",
            BackgroundError::EmptySource { .. } => "BACKGROUND_EMPTY_SOURCE",
            BackgroundError::EmptyCanvas { .. } => "BACKGROUND_EMPTY_CANVAS",
            BackgroundError::CropOutOfBounds { .. } => "BACKGROUND_CROP_OUT_OF_BOUNDS",
            BackgroundError::EncodingError(_) => "BACKGROUND_ENCODING_ERROR",
            BackgroundError::SaveFailed { .. } => "BACKGROUND_SAVE_FAILED",
            BackgroundError::IoError { .. } => "BACKGROUND_IO_ERROR",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(
            self,
            BackgroundError::ImageLoadFailed { .. } | BackgroundError::EmptySource { .. }
        )
    }
}
