//! Pixel coverage of a screen rectangle by a union of rectangles.
//!
//! The pipeline is clip -> decompose -> sweep. [`coverage_pixels`]
//! allocates its working buffers per call; [`CoverageScratch`] keeps them
//! between calls for callers on a per-frame path.
//!
//! # Example
//!
//! ```
//! use rect_coverage::{coverage_pixels, Rect};
//!
//! let screen = Rect::new(0, 0, 10, 10);
//! let rects = [Rect::new(0, 0, 6, 10), Rect::new(4, 0, 10, 10)];
//! assert_eq!(coverage_pixels(&screen, &rects), 100);
//! ```

use log::debug;

use crate::basics::Rect;
use crate::clip::clip_rects;
use crate::segment::{decompose_all, HorizontalSegment, VerticalSegment};
use crate::sweep::sweep;

/// Number of pixels of `screen` covered by the union of `candidates`,
/// each clipped to `screen`.
///
/// Overlaps are counted once. Empty, degenerate, or inverted rectangles
/// contribute nothing. The result is never larger than `screen.area()`.
pub fn coverage_pixels(screen: &Rect, candidates: &[Rect]) -> u64 {
    CoverageScratch::new().coverage_pixels(screen, candidates)
}

/// Reusable working buffers for coverage computation.
///
/// Buffers are cleared at the start of every call, so results never depend
/// on earlier calls. A scratch is borrowed mutably for the duration of a
/// call; give each thread its own.
#[derive(Debug, Default, Clone)]
pub struct CoverageScratch {
    rects: Vec<Rect>,
    edges: Vec<HorizontalSegment>,
    markers: Vec<VerticalSegment>,
}

impl CoverageScratch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-size the buffers for `rects` candidate rectangles.
    pub fn with_capacity(rects: usize) -> Self {
        Self {
            rects: Vec::with_capacity(rects),
            edges: Vec::with_capacity(rects * 2),
            markers: Vec::with_capacity(rects * 2),
        }
    }

    /// Same result as [`coverage_pixels`], reusing this scratch's buffers.
    pub fn coverage_pixels(&mut self, screen: &Rect, candidates: &[Rect]) -> u64 {
        self.rects.clear();
        self.edges.clear();
        self.markers.clear();

        if screen.is_empty() || candidates.is_empty() {
            return 0;
        }

        let clipped = clip_rects(screen, candidates, &mut self.rects);
        if clipped == 0 {
            debug!("coverage of {screen}: no candidate intersects");
            return 0;
        }

        decompose_all(&self.rects, &mut self.edges);
        let coverage = sweep(&mut self.edges, &mut self.markers);

        debug!(
            "coverage of {screen}: {clipped}/{} rects, {} edges, {coverage} px",
            candidates.len(),
            self.edges.len()
        );
        debug_assert!(coverage <= screen.area());
        coverage
    }
}
