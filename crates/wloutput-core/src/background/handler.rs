use std::io::Cursor;
use std::path::Path;

use image::codecs::jpeg::JpegEncoder;
use image::imageops::{self, FilterType};
use image::{DynamicImage, GenericImageView, ImageEncoder, RgbImage};
use tracing::{debug, info};
use uuid::Uuid;

use super::errors::BackgroundError;
use super::types::{CompositeRequest, CoverFit, FitAxis};
use crate::layout::Arrangement;
use crate::screen::{Canvas, Rect, Screen};

/// Scale a source image so that it covers the canvas in both dimensions, and centre the
/// canvas within the result.
///
/// The width is matched first. If the matched height falls short of the canvas, the height is
/// matched instead. Resized dimensions are truncated, which never drops below the canvas.
///
/// # Errors
///
/// Returns [`BackgroundError::EmptySource`] or [`BackgroundError::EmptyCanvas`] when either
/// side has no area.
pub fn cover_fit(
    source_width: u32,
    source_height: u32,
    canvas: Canvas,
) -> Result<CoverFit, BackgroundError> {
    if source_width == 0 || source_height == 0 {
        return Err(BackgroundError::EmptySource {
            width: source_width,
            height: source_height,
        });
    }
    if canvas.is_degenerate() {
        return Err(BackgroundError::EmptyCanvas {
            width: canvas.width,
            height: canvas.height,
        });
    }

    let (sw, sh) = (u64::from(source_width), u64::from(source_height));
    let (cw, ch) = (u64::from(canvas.width), u64::from(canvas.height));

    let matched_height = sh * cw / sw;
    let (axis, width, height) = if matched_height >= ch {
        (FitAxis::Width, cw, matched_height)
    } else {
        (FitAxis::Height, sw * ch / sh, ch)
    };

    let width = u32::try_from(width).unwrap_or(u32::MAX);
    let height = u32::try_from(height).unwrap_or(u32::MAX);

    Ok(CoverFit {
        axis,
        width,
        height,
        x_shift: width / 2 - canvas.width / 2,
        y_shift: height / 2 - canvas.height / 2,
    })
}

/// Region of the resized image that belongs to `screen`.
///
/// # Errors
///
/// Returns [`BackgroundError::CropOutOfBounds`] if the region leaves the resized image. That
/// only happens when the fit was computed for a different canvas than the screen positions.
pub fn crop_region(fit: &CoverFit, screen: &Screen) -> Result<Rect, BackgroundError> {
    let position = screen.position;
    let x = u64::from(position.x) + u64::from(fit.x_shift);
    let y = u64::from(position.y) + u64::from(fit.y_shift);

    if x + u64::from(position.width) > u64::from(fit.width)
        || y + u64::from(position.height) > u64::from(fit.height)
    {
        return Err(BackgroundError::CropOutOfBounds {
            output: screen.name.clone(),
            x,
            y,
            width: position.width,
            height: position.height,
            image_width: fit.width,
            image_height: fit.height,
        });
    }

    // Both offsets are bounded by the u32 image size checked above
    Ok(Rect::new(x as u32, y as u32, position.width, position.height))
}

/// Cover-fit `source` to the arrangement's canvas and cut one segment per screen, in order.
///
/// Every crop region is validated before any pixel work is done.
pub fn crop_segments(
    source: &DynamicImage,
    arrangement: &Arrangement,
) -> Result<Vec<RgbImage>, BackgroundError> {
    let (source_width, source_height) = source.dimensions();
    let fit = cover_fit(source_width, source_height, arrangement.canvas())?;

    debug!(
        event = "core.background.cover_fit",
        axis = ?fit.axis,
        width = fit.width,
        height = fit.height,
        x_shift = fit.x_shift,
        y_shift = fit.y_shift
    );

    let regions = arrangement
        .screens()
        .iter()
        .map(|screen| crop_region(&fit, screen))
        .collect::<Result<Vec<_>, _>>()?;

    let resized = if (fit.width, fit.height) == (source_width, source_height) {
        source.to_rgb8()
    } else {
        source
            .resize_exact(fit.width, fit.height, FilterType::Lanczos3)
            .to_rgb8()
    };

    let segments = regions
        .iter()
        .map(|r| imageops::crop_imm(&resized, r.x, r.y, r.width, r.height).to_image())
        .collect();

    Ok(segments)
}

/// Split the requested background across the arrangement, writing one JPEG per screen into
/// the output directory and recording each path as that screen's background.
///
/// Segment files are left on disk for the caller to manage.
///
/// # Errors
///
/// Returns [`BackgroundError::ImageLoadFailed`] if the source cannot be decoded,
/// [`BackgroundError::CropOutOfBounds`] on an inconsistent arrangement, and
/// [`BackgroundError::SaveFailed`] / [`BackgroundError::EncodingError`] when writing fails.
pub fn composite(
    arrangement: Arrangement,
    request: &CompositeRequest,
) -> Result<Arrangement, BackgroundError> {
    info!(
        event = "core.background.composite_started",
        source = %request.source.display(),
        output_dir = %request.output_dir.display(),
        canvas = %arrangement.canvas()
    );

    let source = image::open(&request.source).map_err(|e| BackgroundError::ImageLoadFailed {
        path: request.source.display().to_string(),
        message: e.to_string(),
    })?;

    let segments = crop_segments(&source, &arrangement)?;
    drop(source);

    std::fs::create_dir_all(&request.output_dir).map_err(|e| BackgroundError::SaveFailed {
        path: request.output_dir.display().to_string(),
        message: format!("failed to create output directory: {}", e),
    })?;

    let mut paths = Vec::with_capacity(segments.len());
    for (screen, segment) in arrangement.screens().iter().zip(&segments) {
        let path = request
            .output_dir
            .join(format!("{}.jpg", Uuid::new_v4().simple()));
        save_segment(segment, &path, request.jpeg_quality)?;

        debug!(
            event = "core.background.segment_saved",
            output = %screen.name,
            path = %path.display(),
            width = segment.width(),
            height = segment.height()
        );
        paths.push(path);
    }

    info!(
        event = "core.background.composite_completed",
        count = paths.len()
    );

    Ok(arrangement.with_backgrounds(paths))
}

fn save_segment(segment: &RgbImage, path: &Path, quality: u8) -> Result<(), BackgroundError> {
    let mut buffer = Cursor::new(Vec::new());
    JpegEncoder::new_with_quality(&mut buffer, quality)
        .write_image(
            segment.as_raw(),
            segment.width(),
            segment.height(),
            image::ExtendedColorType::Rgb8,
        )
        .map_err(|e| BackgroundError::EncodingError(e.to_string()))?;

    std::fs::write(path, buffer.into_inner()).map_err(|e| BackgroundError::SaveFailed {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}
