//! Foundation types: the integer rectangle and its clipping primitive.
//!
//! Rectangles are half-open. `(left, top, right, bottom)` covers the pixels
//! `left <= x < right` and `top <= y < bottom`, so `right - left` is the
//! width in pixels. A rectangle with `left >= right` or `top >= bottom` is
//! empty; inverted rectangles are never an error, they just cover nothing.

use core::fmt;
use core::str::FromStr;

use crate::error::CoverageError;

// ============================================================================
// Rect
// ============================================================================

/// An axis-aligned rectangle with `i32` pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Rect {
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Build a rectangle from its top-left corner and size.
    /// The far edges saturate at `i32::MAX`.
    pub fn from_origin_size(x: i32, y: i32, width: u32, height: u32) -> Self {
        let right = (x as i64 + width as i64).min(i32::MAX as i64) as i32;
        let bottom = (y as i64 + height as i64).min(i32::MAX as i64) as i32;
        Self::new(x, y, right, bottom)
    }

    /// Normalize so that left <= right and top <= bottom, swapping if needed.
    pub fn normalize(&mut self) -> &Self {
        if self.left > self.right {
            core::mem::swap(&mut self.left, &mut self.right);
        }
        if self.top > self.bottom {
            core::mem::swap(&mut self.top, &mut self.bottom);
        }
        self
    }

    /// Returns `true` if the rectangle covers no pixels.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.left >= self.right || self.top >= self.bottom
    }

    /// Width in pixels, 0 for empty or inverted rectangles.
    #[inline]
    pub fn width(&self) -> u64 {
        if self.right > self.left {
            (self.right as i64 - self.left as i64) as u64
        } else {
            0
        }
    }

    /// Height in pixels, 0 for empty or inverted rectangles.
    #[inline]
    pub fn height(&self) -> u64 {
        if self.bottom > self.top {
            (self.bottom as i64 - self.top as i64) as u64
        } else {
            0
        }
    }

    /// Number of pixels covered by the rectangle.
    ///
    /// Cannot overflow: both factors are below 2^32.
    #[inline]
    pub fn area(&self) -> u64 {
        self.width() * self.height()
    }

    /// Clip against `other` without touching either operand.
    ///
    /// Returns the clipped rectangle and whether it is non-empty. When the
    /// flag is `false` the returned rectangle is meaningless (it may be
    /// inverted) and must not be used for coverage.
    pub fn intersect(&self, other: &Rect) -> (Rect, bool) {
        let mut r = *self;
        if r.right > other.right {
            r.right = other.right;
        }
        if r.bottom > other.bottom {
            r.bottom = other.bottom;
        }
        if r.left < other.left {
            r.left = other.left;
        }
        if r.top < other.top {
            r.top = other.top;
        }
        (r, !r.is_empty())
    }

    /// Non-empty intersection with `other`, if any.
    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        match self.intersect(other) {
            (r, true) => Some(r),
            _ => None,
        }
    }

    /// Bounding box of both rectangles. Empty operands are ignored.
    pub fn unite(&self, other: &Rect) -> Rect {
        if other.is_empty() {
            return *self;
        }
        if self.is_empty() {
            return *other;
        }
        Rect::new(
            self.left.min(other.left),
            self.top.min(other.top),
            self.right.max(other.right),
            self.bottom.max(other.bottom),
        )
    }

    /// Returns `true` if the two rectangles share at least one pixel.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.intersect(other).1
    }

    /// Returns `true` if every pixel of the non-empty `other` lies in `self`.
    pub fn contains(&self, other: &Rect) -> bool {
        !other.is_empty()
            && other.left >= self.left
            && other.top >= self.top
            && other.right <= self.right
            && other.bottom <= self.bottom
    }

    /// Returns `true` if pixel (x, y) is inside the rectangle.
    pub fn contains_point(&self, x: i32, y: i32) -> bool {
        x >= self.left && x < self.right && y >= self.top && y < self.bottom
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{},{}", self.left, self.top, self.right, self.bottom)
    }
}

impl FromStr for Rect {
    type Err = CoverageError;

    /// Parse `left,top,right,bottom`. Whitespace around values is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CoverageError::InvalidRect {
            input: s.to_string(),
        };
        let mut v = [0i32; 4];
        let mut parts = s.split(',');
        for slot in v.iter_mut() {
            let part = parts.next().ok_or_else(invalid)?;
            *slot = part.trim().parse().map_err(|_| invalid())?;
        }
        if parts.next().is_some() {
            return Err(invalid());
        }
        Ok(Rect::new(v[0], v[1], v[2], v[3]))
    }
}
