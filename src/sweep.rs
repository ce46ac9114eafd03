//! Sweep line over rectangle edges.
//!
//! Edges are visited left to right. Between two consecutive edge positions
//! the set of open rectangles is constant, so the strip's covered area is
//! the union length of their vertical spans times the strip width. The
//! union length is read before the current edge updates the active
//! markers: it describes the strip that ends at this edge.

use log::{error, trace};

use crate::array::{insert_sorted, is_sorted, remove_sorted};
use crate::segment::{HorizontalSegment, SegmentKind, VerticalSegment};
use crate::union_length::union_length;

/// Sorted collection of the markers of all currently open rectangles.
#[derive(Debug)]
pub struct ActiveSpans<'a> {
    markers: &'a mut Vec<VerticalSegment>,
}

impl<'a> ActiveSpans<'a> {
    /// Wrap `markers` as an empty active collection. Any previous content
    /// is discarded.
    pub fn new(markers: &'a mut Vec<VerticalSegment>) -> Self {
        markers.clear();
        Self { markers }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.markers.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    /// Union length of the open spans.
    #[inline]
    pub fn covered_length(&self) -> u64 {
        union_length(self.markers.as_slice())
    }

    /// Open the span of `edge`.
    pub fn open(&mut self, edge: &HorizontalSegment) {
        for m in edge.markers() {
            insert_sorted(&mut *self.markers, m);
        }
    }

    /// Close the span of `edge`. Returns `false` if a marker had no
    /// counterpart, which means the edge bookkeeping is out of sync.
    pub fn close(&mut self, edge: &HorizontalSegment) -> bool {
        let mut found = true;
        for m in edge.markers() {
            found &= remove_sorted(&mut *self.markers, &m);
        }
        found
    }

    /// Apply one edge event.
    pub fn apply(&mut self, edge: &HorizontalSegment) {
        match edge.kind {
            SegmentKind::Start => self.open(edge),
            SegmentKind::End => {
                if !self.close(edge) {
                    error!("no open span matches closing edge {edge:?}");
                    debug_assert!(false, "no open span matches closing edge {edge:?}");
                }
            }
        }
        trace!(
            "{:?} edge at x={} span {}..{}, {} markers open",
            edge.kind,
            edge.x,
            edge.top,
            edge.bottom,
            self.markers.len()
        );
        debug_assert!(self.markers.len() % 2 == 0);
        debug_assert!(is_sorted(self.markers.as_slice()));
    }
}

/// Covered area of the rectangles described by `edges`.
///
/// `edges` is sorted in place; `markers` is used as the active collection
/// and is left empty on return.
pub fn sweep(edges: &mut [HorizontalSegment], markers: &mut Vec<VerticalSegment>) -> u64 {
    edges.sort_unstable();

    let mut active = ActiveSpans::new(markers);
    let mut coverage: u64 = 0;
    let mut prev_x = match edges.first() {
        Some(e) => e.x as i64,
        None => return 0,
    };

    for edge in edges.iter() {
        let x = edge.x as i64;
        let strip = (x - prev_x) as u64;
        if strip > 0 {
            let vertical = active.covered_length();
            coverage += vertical * strip;
            trace!("strip {prev_x}..{x}: vertical {vertical}, total {coverage}");
        }
        active.apply(edge);
        prev_x = x;
    }

    debug_assert!(active.is_empty(), "{} markers left open", active.len());
    coverage
}
