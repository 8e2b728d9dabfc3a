use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::errors::ParseScaleError;

/// A display timing advertised by a monitor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Mode {
    /// Horizontal resolution in pixels
    pub width: u32,
    /// Vertical resolution in pixels
    pub height: u32,
    /// Refresh rate in milli-Hz, 0 when unknown
    #[serde(default)]
    pub refresh: u32,
}

impl Mode {
    pub fn new(width: u32, height: u32, refresh: u32) -> Self {
        Self {
            width,
            height,
            refresh,
        }
    }

    /// A mode with a zero dimension cannot be laid out
    pub fn is_usable(&self) -> bool {
        self.width > 0 && self.height > 0
    }

    /// Refresh rate truncated to whole Hz
    pub fn refresh_hz(&self) -> u32 {
        self.refresh / 1000
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Physical panel size in centimeters, `(0, 0)` when unknown
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PhysicalSize {
    pub width_cm: u32,
    pub height_cm: u32,
}

impl PhysicalSize {
    pub fn new(width_cm: u32, height_cm: u32) -> Self {
        Self {
            width_cm,
            height_cm,
        }
    }

    pub fn unknown() -> Self {
        Self::default()
    }

    /// Both dimensions must be non-zero for the size to be meaningful
    pub fn is_known(&self) -> bool {
        self.width_cm > 0 && self.height_cm > 0
    }
}

/// Physical size plus the derived pixel density of a monitor at its selected mode.
///
/// A density of 0 means "unknown" and is never used as a divisor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Geometry {
    pub width_cm: u32,
    pub height_cm: u32,
    /// Pixels per centimeter
    pub density: u32,
}

impl Geometry {
    pub fn new(width_cm: u32, height_cm: u32, density: u32) -> Self {
        Self {
            width_cm,
            height_cm,
            density,
        }
    }

    pub fn unknown() -> Self {
        Self::default()
    }

    pub fn is_known(&self) -> bool {
        self.density > 0
    }
}

/// Axis-aligned rectangle in logical canvas pixels
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Exclusive right edge
    pub fn right(&self) -> u64 {
        u64::from(self.x) + u64::from(self.width)
    }

    /// Exclusive bottom edge
    pub fn bottom(&self) -> u64 {
        u64::from(self.y) + u64::from(self.height)
    }

    pub fn overlaps(&self, other: &Rect) -> bool {
        u64::from(self.x) < other.right()
            && u64::from(other.x) < self.right()
            && u64::from(self.y) < other.bottom()
            && u64::from(other.y) < self.bottom()
    }
}

/// Quantized scale factor, stored as an exact number of hundredths.
///
/// Serialized as a trimmed decimal string: `1`, `1.5`, `1.25`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Scale {
    hundredths: u32,
}

impl Scale {
    pub const ONE: Scale = Scale { hundredths: 100 };

    /// Returns `None` for a zero scale
    pub fn from_hundredths(hundredths: u32) -> Option<Self> {
        (hundredths > 0).then_some(Self { hundredths })
    }

    pub fn hundredths(&self) -> u32 {
        self.hundredths
    }

    pub fn as_f64(&self) -> f64 {
        f64::from(self.hundredths) / 100.0
    }

    pub fn is_integer(&self) -> bool {
        self.hundredths % 100 == 0
    }

    /// Logical length of `pixels` native pixels at this scale, rounded up
    pub fn logical_length(&self, pixels: u32) -> u32 {
        let scaled = u64::from(pixels) * 100;
        let divisor = u64::from(self.hundredths);
        // Saturates below 1.0 scales on enormous modes
        u32::try_from(scaled.div_ceil(divisor)).unwrap_or(u32::MAX)
    }
}

impl Default for Scale {
    fn default() -> Self {
        Self::ONE
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.hundredths / 100;
        let fraction = self.hundredths % 100;
        if fraction == 0 {
            write!(f, "{}", whole)
        } else if fraction % 10 == 0 {
            write!(f, "{}.{}", whole, fraction / 10)
        } else {
            write!(f, "{}.{:02}", whole, fraction)
        }
    }
}

impl FromStr for Scale {
    type Err = ParseScaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim();
        if value.is_empty() {
            return Err(ParseScaleError::Empty);
        }

        let invalid = || ParseScaleError::Invalid {
            value: value.to_string(),
        };

        let (whole, fraction) = value.split_once('.').unwrap_or((value, ""));
        if whole.is_empty() || !whole.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        if !fraction.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        if fraction.len() > 2 {
            return Err(ParseScaleError::TooPrecise {
                value: value.to_string(),
            });
        }

        let whole: u32 = whole.parse().map_err(|_| invalid())?;
        let fraction: u32 = match fraction.len() {
            0 => 0,
            1 => fraction.parse::<u32>().map_err(|_| invalid())? * 10,
            _ => fraction.parse().map_err(|_| invalid())?,
        };

        let hundredths = whole
            .checked_mul(100)
            .and_then(|h| h.checked_add(fraction))
            .ok_or_else(invalid)?;

        Scale::from_hundredths(hundredths).ok_or(ParseScaleError::NotPositive)
    }
}

impl Serialize for Scale {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Scale {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Resampling hint handed to the compositor alongside the scale
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScaleFilter {
    #[default]
    Nearest,
    Linear,
    Smart,
}

impl ScaleFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScaleFilter::Nearest => "nearest",
            ScaleFilter::Linear => "linear",
            ScaleFilter::Smart => "smart",
        }
    }
}

impl fmt::Display for ScaleFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An active monitor as reported by the window manager
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Monitor {
    /// Stable output name, e.g. `DP-1`
    pub name: String,
    /// Advertised modes, in enumeration order
    pub modes: Vec<Mode>,
    #[serde(default)]
    pub physical: PhysicalSize,
}

impl Monitor {
    pub fn new(name: impl Into<String>, modes: Vec<Mode>, physical: PhysicalSize) -> Self {
        Self {
            name: name.into(),
            modes,
            physical,
        }
    }
}

/// A monitor with its selected mode and estimated geometry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeasuredScreen {
    pub name: String,
    pub mode: Mode,
    pub geometry: Geometry,
}

/// A measured monitor with its planned scale
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaledScreen {
    pub name: String,
    pub mode: Mode,
    pub geometry: Geometry,
    pub scale: Scale,
    pub scale_filter: ScaleFilter,
}

/// A fully placed monitor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Screen {
    pub name: String,
    pub mode: Mode,
    pub geometry: Geometry,
    /// Logical placement on the canvas
    pub position: Rect,
    pub scale: Scale,
    pub scale_filter: ScaleFilter,
    /// Cropped background segment, set after compositing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<PathBuf>,
}

/// Bounding area of all screen positions, anchored at the origin
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Smallest canvas containing every screen position
    pub fn enclosing(screens: &[Screen]) -> Self {
        let width = screens.iter().map(|s| s.position.right()).max().unwrap_or(0);
        let height = screens
            .iter()
            .map(|s| s.position.bottom())
            .max()
            .unwrap_or(0);
        Self {
            width: u32::try_from(width).unwrap_or(u32::MAX),
            height: u32::try_from(height).unwrap_or(u32::MAX),
        }
    }

    pub fn is_degenerate(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

impl fmt::Display for Canvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}
