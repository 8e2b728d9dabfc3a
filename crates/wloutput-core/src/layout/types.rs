use std::path::PathBuf;

use serde::Serialize;

use super::errors::LayoutError;
use crate::screen::{Canvas, Screen};

/// Placed screens together with the canvas they span
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Arrangement {
    canvas: Canvas,
    screens: Vec<Screen>,
}

impl Arrangement {
    /// Build an arrangement whose canvas is the bounding rectangle of `screens`.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::NoScreens`] for an empty list and
    /// [`LayoutError::DegenerateCanvas`] when the bounding rectangle has no area.
    pub fn from_screens(screens: Vec<Screen>) -> Result<Self, LayoutError> {
        if screens.is_empty() {
            return Err(LayoutError::NoScreens);
        }

        let canvas = Canvas::enclosing(&screens);
        if canvas.is_degenerate() {
            return Err(LayoutError::DegenerateCanvas {
                width: canvas.width,
                height: canvas.height,
            });
        }

        Ok(Self { canvas, screens })
    }

    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    pub fn screens(&self) -> &[Screen] {
        &self.screens
    }

    pub fn into_screens(self) -> Vec<Screen> {
        self.screens
    }

    /// Attach background segments to screens in order; the canvas is unchanged
    pub(crate) fn with_backgrounds(mut self, paths: Vec<PathBuf>) -> Self {
        for (screen, path) in self.screens.iter_mut().zip(paths) {
            screen.background = Some(path);
        }
        self
    }
}
