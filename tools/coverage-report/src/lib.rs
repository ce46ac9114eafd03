// Copyright 2025. Coverage calculator and cross-check library for rect-coverage.
//
// Provides a brute-force coverage mask used as an oracle, deterministic
// random rectangle generation, and argument parsing helpers.

use std::fmt;

use rect_coverage::{coverage_pixels, CoverageError, Rect};

// ============================================================================
// Coverage Mask
// ============================================================================

/// One flag per screen pixel, set when any rectangle covers it.
#[derive(Clone)]
pub struct CoverageMask {
    pub screen: Rect,
    /// Row-major, top-to-bottom. Length = width * height.
    pub data: Vec<bool>,
}

impl CoverageMask {
    pub fn new(screen: Rect) -> Self {
        Self {
            screen,
            data: vec![false; screen.area() as usize],
        }
    }

    /// Mark every screen pixel inside `r`.
    pub fn fill_rect(&mut self, r: &Rect) {
        let Some(c) = r.intersection(&self.screen) else {
            return;
        };
        let w = self.screen.width() as usize;
        for y in c.top..c.bottom {
            let row = (y - self.screen.top) as usize * w;
            let x0 = row + (c.left - self.screen.left) as usize;
            let x1 = row + (c.right - self.screen.left) as usize;
            self.data[x0..x1].fill(true);
        }
    }

    pub fn count(&self) -> u64 {
        self.data.iter().filter(|&&b| b).count() as u64
    }
}

/// Covered pixel count by rasterizing every rectangle into a mask.
pub fn raster_count(screen: &Rect, rects: &[Rect]) -> u64 {
    let mut mask = CoverageMask::new(*screen);
    for r in rects {
        mask.fill_rect(r);
    }
    mask.count()
}

// ============================================================================
// Comparison Result
// ============================================================================

/// Sweep result next to the raster result for the same input.
#[derive(Debug, Clone)]
pub struct CompareResult {
    pub rects: usize,
    pub sweep: u64,
    pub raster: u64,
}

impl CompareResult {
    pub fn matches(&self) -> bool {
        self.sweep == self.raster
    }
}

impl fmt::Display for CompareResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} rects, sweep {} px, raster {} px",
            if self.matches() { "MATCH" } else { "MISMATCH" },
            self.rects,
            self.sweep,
            self.raster
        )
    }
}

pub fn compare(screen: &Rect, rects: &[Rect]) -> CompareResult {
    CompareResult {
        rects: rects.len(),
        sweep: coverage_pixels(screen, rects),
        raster: raster_count(screen, rects),
    }
}

// ============================================================================
// Random Input
// ============================================================================

/// Xorshift64 generator; deterministic for a given seed.
pub struct Xorshift(u64);

impl Xorshift {
    pub fn new(seed: u64) -> Self {
        // xorshift never leaves the all-zero state
        Self(if seed == 0 { 0x9E37_79B9_7F4A_7C15 } else { seed })
    }

    pub fn next_u64(&mut self) -> u64 {
        let mut s = self.0;
        s ^= s << 13;
        s ^= s >> 7;
        s ^= s << 17;
        self.0 = s;
        s
    }

    /// Uniform-ish value in `lo..hi`. Returns `lo` for an empty range.
    pub fn range(&mut self, lo: i64, hi: i64) -> i64 {
        if hi <= lo {
            return lo;
        }
        let span = hi.abs_diff(lo);
        lo + (self.next_u64() % span) as i64
    }
}

#[inline]
fn clamp_i32(v: i64) -> i32 {
    v.clamp(i32::MIN as i64, i32::MAX as i64) as i32
}

/// `count` random rectangles around `screen`, some partly outside it and
/// some degenerate, for exercising clipping.
///
/// Bounds are computed in `i64` and clamped to the `i32` range, so screens
/// touching the coordinate limits are fine.
pub fn random_rects(screen: &Rect, count: usize, seed: u64) -> Vec<Rect> {
    let mut rng = Xorshift::new(seed);
    let margin = (screen.width().max(screen.height()) / 4).max(1) as i64;
    let (left, top) = (screen.left as i64, screen.top as i64);
    let (right, bottom) = (screen.right as i64, screen.bottom as i64);
    (0..count)
        .map(|_| {
            let l = rng.range(left - margin, right + margin);
            let t = rng.range(top - margin, bottom + margin);
            let r = rng.range(l, right + margin + 1);
            let b = rng.range(t, bottom + margin + 1);
            Rect::new(clamp_i32(l), clamp_i32(t), clamp_i32(r), clamp_i32(b))
        })
        .collect()
}

/// Largest screen, in pixels, that [`raster_count`] is allowed to rasterize.
pub const MAX_RASTER_PIXELS: u64 = 1 << 24;

/// Returns `true` if `screen` is small enough for the brute-force raster.
pub fn raster_fits(screen: &Rect) -> bool {
    screen.area() <= MAX_RASTER_PIXELS
}

// ============================================================================
// Argument Parsing
// ============================================================================

/// Parse `label=left,top,right,bottom`.
pub fn parse_labelled(arg: &str) -> Result<(String, Rect), CoverageError> {
    let (label, rect) = arg.split_once('=').ok_or_else(|| CoverageError::InvalidRect {
        input: arg.to_string(),
    })?;
    Ok((label.to_string(), rect.parse()?))
}

/// Parse every argument as a rectangle.
pub fn parse_rects(args: &[String]) -> Result<Vec<Rect>, CoverageError> {
    args.iter().map(|a| a.parse()).collect()
}
