use tracing::{debug, info};

use super::errors::LayoutError;
use super::types::Arrangement;
use crate::screen::{Rect, ScaledScreen, Screen};

/// Place screens left to right in enumeration order, vertically centred on the tallest one.
///
/// Each screen occupies its logical size (mode divided by scale, rounded up). The canvas is
/// the sum of logical widths by the tallest logical height.
///
/// # Errors
///
/// Returns [`LayoutError::NoScreens`] if `screens` is empty and
/// [`LayoutError::DegenerateCanvas`] if the canvas ends up with no area.
pub fn compose_layout(screens: Vec<ScaledScreen>) -> Result<Arrangement, LayoutError> {
    if screens.is_empty() {
        return Err(LayoutError::NoScreens);
    }

    let logical: Vec<(u32, u32)> = screens
        .iter()
        .map(|s| {
            (
                s.scale.logical_length(s.mode.width),
                s.scale.logical_length(s.mode.height),
            )
        })
        .collect();

    let max_height = logical.iter().map(|&(_, h)| h).max().unwrap_or(0);

    let mut cursor: u32 = 0;
    let mut placed = Vec::with_capacity(screens.len());
    for (screen, (width, height)) in screens.into_iter().zip(logical) {
        let position = Rect::new(cursor, max_height / 2 - height / 2, width, height);

        debug!(
            event = "core.layout.placed",
            output = %screen.name,
            x = position.x,
            y = position.y,
            width = position.width,
            height = position.height
        );

        cursor = cursor.saturating_add(width);
        placed.push(Screen {
            name: screen.name,
            mode: screen.mode,
            geometry: screen.geometry,
            position,
            scale: screen.scale,
            scale_filter: screen.scale_filter,
            background: None,
        });
    }

    let arrangement = Arrangement::from_screens(placed)?;
    debug_assert_eq!(arrangement.canvas().width, cursor);
    debug_assert_eq!(arrangement.canvas().height, max_height);

    info!(
        event = "core.layout.composed",
        count = arrangement.screens().len(),
        canvas = %arrangement.canvas()
    );

    Ok(arrangement)
}
