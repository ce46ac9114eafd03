//! Clipping stage: restrict candidates to the bounding rectangle.

use crate::basics::Rect;

/// Append `c ∩ bounds` to `out` for every candidate `c` whose intersection
/// with `bounds` is non-empty. Returns the number of rectangles appended.
///
/// Candidates are read only; clipped copies go to `out`. Relative order of
/// the survivors is preserved.
pub fn clip_rects(bounds: &Rect, candidates: &[Rect], out: &mut Vec<Rect>) -> usize {
    if bounds.is_empty() {
        return 0;
    }
    let before = out.len();
    out.extend(candidates.iter().filter_map(|c| c.intersection(bounds)));
    out.len() - before
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clip_discards_outside_and_degenerate() {
        let bounds = Rect::new(0, 0, 10, 10);
        let candidates = [
            Rect::new(-5, -5, 5, 5),
            Rect::new(20, 20, 30, 30),
            Rect::new(3, 3, 3, 8),
            Rect::new(8, 2, 4, 6),
            Rect::new(10, 0, 15, 10),
            Rect::new(2, 2, 4, 4),
        ];
        let mut out = Vec::new();
        assert_eq!(clip_rects(&bounds, &candidates, &mut out), 2);
        assert_eq!(out, vec![Rect::new(0, 0, 5, 5), Rect::new(2, 2, 4, 4)]);
    }

    #[test]
    fn test_clip_empty_bounds() {
        let mut out = Vec::new();
        let n = clip_rects(&Rect::new(0, 0, 0, 10), &[Rect::new(0, 0, 5, 5)], &mut out);
        assert_eq!(n, 0);
        assert!(out.is_empty());
    }

    #[test]
    fn test_clip_appends() {
        let mut out = vec![Rect::new(1, 1, 2, 2)];
        let n = clip_rects(&Rect::new(0, 0, 4, 4), &[Rect::new(-1, -1, 9, 9)], &mut out);
        assert_eq!(n, 1);
        assert_eq!(out, vec![Rect::new(1, 1, 2, 2), Rect::new(0, 0, 4, 4)]);
    }
}
