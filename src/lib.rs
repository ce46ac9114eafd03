//! # rect-coverage
//!
//! Exact pixel coverage of a screen rectangle by the union of a set of
//! axis-aligned rectangles, each clipped to the screen.
//!
//! Typical use is damage or visibility accounting on a compositor path:
//! given the screen and the rectangles of everything drawn on it, how many
//! screen pixels are occupied? Overlaps count once and parts outside the
//! screen count not at all.
//!
//! ## Architecture
//!
//! Coverage is computed in four stages:
//!
//! 1. **Clip** — intersect each candidate with the screen, drop empties
//! 2. **Decompose** — each rectangle becomes a start edge and an end edge
//! 3. **Sweep** — visit edges left to right, keeping the open rectangles'
//!    top/bottom markers in a sorted collection
//! 4. **Union length** — between two edges, the covered height is the 1-D
//!    union of the open spans; times the strip width gives its area
//!
//! The work is O(n log n) for sorting plus O(n·k) for the sweep, where k is
//! the number of rectangles open at once.

// Foundation types
pub mod array;
pub mod basics;
pub mod error;

// Coverage engine
pub mod clip;
pub mod coverage;
pub mod segment;
pub mod sweep;
pub mod union_length;

// Reporting
pub mod report;

pub use basics::Rect;
pub use coverage::{coverage_pixels, CoverageScratch};
pub use error::CoverageError;
pub use report::{percent_of, CoverageEntry, ScreenCoverage};
