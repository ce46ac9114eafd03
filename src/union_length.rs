//! 1-D union length of a sorted multiset of interval endpoints.
//!
//! A nesting counter tracks how many intervals are open. Length is only
//! charged when the counter crosses the 0 -> 1 boundary (start of a union
//! run) and the 1 -> 0 boundary (end of the run); everything in between is
//! already inside the run.

use crate::segment::{SegmentKind, VerticalSegment};

/// Total length covered by the intervals described by `markers`.
///
/// `markers` must be sorted by `(y, kind)` and balanced, as the sweep's
/// active collection always is. Overlapping intervals are counted once.
pub fn union_length(markers: &[VerticalSegment]) -> u64 {
    let mut depth: u32 = 0;
    let mut start: i64 = 0;
    let mut length: u64 = 0;

    for m in markers {
        match m.kind {
            SegmentKind::Start => {
                if depth == 0 {
                    start = m.y as i64;
                }
                depth += 1;
            }
            SegmentKind::End => {
                debug_assert!(depth > 0, "unbalanced marker {m:?}");
                if depth == 1 {
                    length += (m.y as i64 - start) as u64;
                }
                depth = depth.saturating_sub(1);
            }
        }
    }
    length
}
