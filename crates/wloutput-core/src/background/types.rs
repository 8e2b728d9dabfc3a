use std::path::PathBuf;

/// JPEG quality used for background segments unless configured otherwise
pub const DEFAULT_JPEG_QUALITY: u8 = 90;

/// Which source dimension was matched to the canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FitAxis {
    /// Source width scaled to the canvas width, height overflows
    Width,
    /// Source height scaled to the canvas height, width overflows
    Height,
}

/// Size of the source image after cover-fitting and the offset of the canvas within it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CoverFit {
    pub axis: FitAxis,
    pub width: u32,
    pub height: u32,
    pub x_shift: u32,
    pub y_shift: u32,
}

/// Request to split a background image across an arrangement
#[derive(Debug, Clone)]
pub struct CompositeRequest {
    /// Source image path
    pub source: PathBuf,
    /// Directory receiving one JPEG per output
    pub output_dir: PathBuf,
    /// JPEG quality (1-100)
    pub jpeg_quality: u8,
}

impl CompositeRequest {
    pub fn new(source: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            output_dir: output_dir.into(),
            jpeg_quality: DEFAULT_JPEG_QUALITY,
        }
    }

    /// Set JPEG quality clamped to the valid range (1-100)
    pub fn with_jpeg_quality(mut self, quality: u8) -> Self {
        self.jpeg_quality = quality.clamp(1, 100);
        self
    }
}
