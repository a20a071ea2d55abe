use crate::error::SegmentationError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Axis-aligned rectangle in absolute page pixels.
///
/// `x`/`y` is the top-left corner; the covered range on each axis is
/// `[x, x + width)` and `[y, y + height)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge; saturates on boxes with overflowing extents.
    pub fn right(&self) -> i32 {
        self.x.saturating_add(self.width)
    }

    pub fn bottom(&self) -> i32 {
        self.y.saturating_add(self.height)
    }

    /// Area in square pixels, widened to avoid overflow on large pages.
    pub fn area(&self) -> i64 {
        i64::from(self.width.max(0)) * i64::from(self.height.max(0))
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Start coordinate along `axis`.
    pub fn start(&self, axis: Axis) -> i32 {
        match axis {
            Axis::Horizontal => self.y,
            Axis::Vertical => self.x,
        }
    }

    /// Extent along `axis`.
    pub fn size(&self, axis: Axis) -> i32 {
        match axis {
            Axis::Horizontal => self.height,
            Axis::Vertical => self.width,
        }
    }

    /// Projection onto `axis` as a closed interval `[start, start + size]`.
    pub fn project(&self, axis: Axis) -> Span {
        let start = self.start(axis);
        Span::new(start, start.saturating_add(self.size(axis)))
    }

    /// Half-open containment of a point.
    pub fn contains_point(&self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    /// Split the rectangle along `axis` at absolute coordinate `cut`.
    ///
    /// The first part covers `[start, cut)`, the second `[cut, end)`, so the
    /// two halves tile the original exactly.
    pub fn split_at(&self, axis: Axis, cut: i32) -> (Rect, Rect) {
        match axis {
            Axis::Horizontal => (
                Rect::new(self.x, self.y, self.width, cut - self.y),
                Rect::new(self.x, cut, self.width, self.bottom() - cut),
            ),
            Axis::Vertical => (
                Rect::new(self.x, self.y, cut - self.x, self.height),
                Rect::new(cut, self.y, self.right() - cut, self.height),
            ),
        }
    }
}

/// Orientation of a separator.
///
/// A horizontal separator is a horizontal band; its interval is measured on
/// the y axis. A vertical separator is measured on the x axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Horizontal => f.write_str("horizontal"),
            Axis::Vertical => f.write_str("vertical"),
        }
    }
}

/// Closed 1-D interval `[start, end]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    pub start: i32,
    pub end: i32,
}

impl Span {
    pub const fn new(start: i32, end: i32) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> i32 {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.end < self.start
    }
}

/// Per-pass size threshold used by the divisibility rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeThreshold {
    pub width: i32,
    pub height: i32,
}

impl SizeThreshold {
    pub fn new(width: i32, height: i32) -> Result<Self, SegmentationError> {
        if width <= 0 || height <= 0 {
            return Err(SegmentationError::InvalidConfiguration(format!(
                "size threshold must be positive, got {width}x{height}"
            )));
        }
        Ok(Self { width, height })
    }

    pub fn area(&self) -> i64 {
        i64::from(self.width) * i64::from(self.height)
    }
}

impl Default for SizeThreshold {
    fn default() -> Self {
        Self {
            width: 80,
            height: 80,
        }
    }
}

/// Degree of Coherence.
///
/// `1` marks the clearest separation, `11` the weakest. `0` is reserved for a
/// terminal block whose rules did not assign a value.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Doc(u8);

impl Doc {
    pub const UNASSIGNED: Doc = Doc(0);
    pub const MIN: Doc = Doc(1);
    pub const MAX: Doc = Doc(11);

    /// Validated constructor for caller-supplied values in `1..=11`.
    pub fn new(value: i32) -> Result<Self, SegmentationError> {
        if value < i32::from(Self::MIN.0) || value > i32::from(Self::MAX.0) {
            return Err(SegmentationError::InvalidConfiguration(format!(
                "DoC must be between 1 and 11, got {value}"
            )));
        }
        Ok(Doc(value as u8))
    }

    /// Constructor for rule constants; values above 11 are clamped.
    pub(crate) const fn fixed(value: u8) -> Self {
        if value > 11 {
            Doc(11)
        } else {
            Doc(value)
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn is_assigned(self) -> bool {
        self.0 != 0
    }
}

impl fmt::Display for Doc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
