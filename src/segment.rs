//! Sweep events.
//!
//! A clipped rectangle is decomposed into two [`HorizontalSegment`]s, one
//! at its left edge and one at its right edge. While the sweep is between
//! those two edges the rectangle contributes two [`VerticalSegment`]
//! markers (its top and bottom) to the active collection.

use core::cmp::Ordering;

use crate::basics::Rect;

/// Whether an event opens or closes an interval.
///
/// The declaration order is significant: `Start` sorts before `End`, so on
/// coordinate ties an interval opens before another one closes. Rectangles
/// that touch edge to edge are therefore seen as one continuous region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SegmentKind {
    Start,
    End,
}

// ============================================================================
// HorizontalSegment
// ============================================================================

/// A vertical edge of a rectangle, positioned on the x axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HorizontalSegment {
    pub x: i32,
    pub top: i32,
    pub bottom: i32,
    pub kind: SegmentKind,
}

impl HorizontalSegment {
    pub fn new(x: i32, top: i32, bottom: i32, kind: SegmentKind) -> Self {
        Self {
            x,
            top,
            bottom,
            kind,
        }
    }

    /// The top and bottom markers this edge opens or closes.
    #[inline]
    pub fn markers(&self) -> [VerticalSegment; 2] {
        [
            VerticalSegment::new(self.top, SegmentKind::Start),
            VerticalSegment::new(self.bottom, SegmentKind::End),
        ]
    }
}

/// Sweep order: by `x`, then `Start` before `End`. The span only breaks
/// remaining ties so that the order is total.
impl Ord for HorizontalSegment {
    fn cmp(&self, other: &Self) -> Ordering {
        self.x
            .cmp(&other.x)
            .then(self.kind.cmp(&other.kind))
            .then(self.top.cmp(&other.top))
            .then(self.bottom.cmp(&other.bottom))
    }
}

impl PartialOrd for HorizontalSegment {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// ============================================================================
// VerticalSegment
// ============================================================================

/// A horizontal boundary of an open rectangle, positioned on the y axis.
///
/// Ordered by `(y, kind)`; two markers with equal fields are
/// interchangeable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VerticalSegment {
    pub y: i32,
    pub kind: SegmentKind,
}

impl VerticalSegment {
    pub fn new(y: i32, kind: SegmentKind) -> Self {
        Self { y, kind }
    }
}

// ============================================================================
// Edge decomposition
// ============================================================================

/// Split a rectangle into its start (left) and end (right) edges.
#[inline]
pub fn decompose(r: &Rect) -> [HorizontalSegment; 2] {
    [
        HorizontalSegment::new(r.left, r.top, r.bottom, SegmentKind::Start),
        HorizontalSegment::new(r.right, r.top, r.bottom, SegmentKind::End),
    ]
}

/// Append the edges of every rectangle in `rects` to `edges`.
///
/// The rectangles must already be clipped and non-empty; exactly two
/// edges are produced per rectangle.
pub fn decompose_all(rects: &[Rect], edges: &mut Vec<HorizontalSegment>) {
    edges.reserve(rects.len() * 2);
    for r in rects {
        debug_assert!(!r.is_empty(), "decomposing empty rectangle {r:?}");
        edges.extend_from_slice(&decompose(r));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_order() {
        assert!(SegmentKind::Start < SegmentKind::End);
    }

    #[test]
    fn test_decompose() {
        let [s, e] = decompose(&Rect::new(1, 2, 3, 4));
        assert_eq!(s, HorizontalSegment::new(1, 2, 4, SegmentKind::Start));
        assert_eq!(e, HorizontalSegment::new(3, 2, 4, SegmentKind::End));
    }

    #[test]
    fn test_decompose_all_count() {
        let rects = [Rect::new(0, 0, 1, 1), Rect::new(2, 2, 5, 5)];
        let mut edges = Vec::new();
        decompose_all(&rects, &mut edges);
        assert_eq!(edges.len(), 4);
    }

    #[test]
    fn test_edge_order_start_before_end_on_tie() {
        let end = HorizontalSegment::new(5, 0, 10, SegmentKind::End);
        let start = HorizontalSegment::new(5, 0, 10, SegmentKind::Start);
        let later = HorizontalSegment::new(6, 0, 1, SegmentKind::Start);
        let mut v = vec![later, end, start];
        v.sort_unstable();
        assert_eq!(v, vec![start, end, later]);
    }

    #[test]
    fn test_marker_order() {
        let a = VerticalSegment::new(5, SegmentKind::End);
        let b = VerticalSegment::new(5, SegmentKind::Start);
        let c = VerticalSegment::new(4, SegmentKind::End);
        let mut v = vec![a, b, c];
        v.sort();
        assert_eq!(v, vec![c, b, a]);
    }

    #[test]
    fn test_markers_from_edge() {
        let e = HorizontalSegment::new(0, 3, 7, SegmentKind::End);
        let [top, bottom] = e.markers();
        assert_eq!(top, VerticalSegment::new(3, SegmentKind::Start));
        assert_eq!(bottom, VerticalSegment::new(7, SegmentKind::End));
    }
}
