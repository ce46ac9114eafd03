//! Screen coverage reporting.
//!
//! Summarizes how much of a screen is occupied by a set of labelled
//! rectangles (for example one per visible view, labelled by the content it
//! shows): an overall percentage of the union, plus one percentage per
//! rectangle that is at least partly on screen.

use crate::basics::Rect;
use crate::coverage::CoverageScratch;
use crate::error::CoverageError;

/// `part * 100 / whole`, truncated.
///
/// Fails with [`CoverageError::EmptyScreen`] when `whole` is 0.
pub fn percent_of(part: u64, whole: u64) -> Result<u32, CoverageError> {
    if whole == 0 {
        return Err(CoverageError::EmptyScreen);
    }
    Ok(percent(part, whole))
}

/// `part * 100 / whole`, truncated. `whole` must be non-zero.
#[inline]
fn percent(part: u64, whole: u64) -> u32 {
    debug_assert!(whole > 0);
    let p = part as u128 * 100 / whole as u128;
    p.min(u32::MAX as u128) as u32
}

/// Share of the screen taken by one on-screen rectangle.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CoverageEntry<L> {
    pub label: L,
    /// The rectangle clipped to the screen.
    pub visible: Rect,
    pub percent: u32,
}

/// Coverage summary for one screen.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScreenCoverage<L> {
    /// Percentage of the screen covered by the union of all rectangles.
    pub global_percent: u32,
    /// One entry per rectangle that intersects the screen, in input order.
    /// Labels may repeat.
    pub entries: Vec<CoverageEntry<L>>,
}

impl<L> Default for ScreenCoverage<L> {
    fn default() -> Self {
        Self {
            global_percent: 0,
            entries: Vec::new(),
        }
    }
}

impl<L> ScreenCoverage<L> {
    /// Build a report for `screen` from labelled rectangles.
    ///
    /// A zero-area screen yields an empty report. Rectangles that miss the
    /// screen get no entry.
    pub fn compute<I>(screen: &Rect, items: I) -> Self
    where
        I: IntoIterator<Item = (L, Rect)>,
    {
        Self::compute_with(&mut CoverageScratch::new(), screen, items)
    }

    /// Same as [`ScreenCoverage::compute`], reusing `scratch`.
    pub fn compute_with<I>(scratch: &mut CoverageScratch, screen: &Rect, items: I) -> Self
    where
        I: IntoIterator<Item = (L, Rect)>,
    {
        let screen_area = screen.area();
        if screen_area == 0 {
            return Self::default();
        }

        let mut entries = Vec::new();
        let mut visible = Vec::new();
        for (label, rect) in items {
            if let Some(v) = rect.intersection(screen) {
                entries.push(CoverageEntry {
                    label,
                    visible: v,
                    percent: percent(v.area(), screen_area),
                });
                visible.push(v);
            }
        }

        let covered = scratch.coverage_pixels(screen, &visible);
        Self {
            global_percent: percent(covered, screen_area),
            entries,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn labels(&self) -> impl Iterator<Item = &L> {
        self.entries.iter().map(|e| &e.label)
    }

    pub fn percents(&self) -> impl Iterator<Item = u32> + '_ {
        self.entries.iter().map(|e| e.percent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_of() {
        assert_eq!(percent_of(50, 100), Ok(50));
        assert_eq!(percent_of(1, 3), Ok(33));
        assert_eq!(percent_of(2, 3), Ok(66));
        assert_eq!(percent_of(0, 7), Ok(0));
        assert_eq!(percent_of(5, 0), Err(CoverageError::EmptyScreen));
    }

    #[test]
    fn test_percent_of_large_values() {
        assert_eq!(percent_of(u64::MAX, u64::MAX), Ok(100));
        assert_eq!(percent_of(u64::MAX / 2, u64::MAX), Ok(49));
    }

    #[test]
    fn test_percent_matches_percent_of() {
        for (part, whole) in [(0, 1), (1, 3), (99, 100), (100, 100), (7, 9)] {
            assert_eq!(Ok(percent(part, whole)), percent_of(part, whole));
        }
    }

    #[test]
    fn test_report_overlapping() {
        let screen = Rect::new(0, 0, 10, 10);
        let r = ScreenCoverage::compute(
            &screen,
            [
                ("https", Rect::new(0, 0, 6, 10)),
                ("file", Rect::new(4, 0, 10, 10)),
            ],
        );
        assert_eq!(r.global_percent, 100);
        assert_eq!(r.labels().copied().collect::<Vec<_>>(), vec!["https", "file"]);
        assert_eq!(r.percents().collect::<Vec<_>>(), vec![60, 60]);
    }

    #[test]
    fn test_report_skips_offscreen_and_clips() {
        let screen = Rect::new(0, 0, 10, 10);
        let r = ScreenCoverage::compute(
            &screen,
            [
                ("a", Rect::new(-5, -5, 5, 5)),
                ("b", Rect::new(20, 20, 30, 30)),
                ("a", Rect::new(0, 0, 0, 0)),
            ],
        );
        assert_eq!(r.entries.len(), 1);
        assert_eq!(r.entries[0].visible, Rect::new(0, 0, 5, 5));
        assert_eq!(r.entries[0].percent, 25);
        assert_eq!(r.global_percent, 25);
    }

    #[test]
    fn test_report_repeated_labels() {
        let screen = Rect::new(0, 0, 10, 10);
        let r = ScreenCoverage::compute(
            &screen,
            [("x", Rect::new(0, 0, 3, 10)), ("x", Rect::new(0, 0, 3, 10))],
        );
        assert_eq!(r.entries.len(), 2);
        assert_eq!(r.global_percent, 30);
    }

    #[test]
    fn test_report_zero_area_screen() {
        let r = ScreenCoverage::compute(&Rect::new(0, 0, 0, 100), [(1, Rect::new(0, 0, 10, 10))]);
        assert!(r.is_empty());
        assert_eq!(r.global_percent, 0);
    }

    #[test]
    fn test_report_truncates() {
        let screen = Rect::new(0, 0, 3, 1);
        let r = ScreenCoverage::compute(&screen, [((), Rect::new(0, 0, 2, 1))]);
        assert_eq!(r.entries[0].percent, 66);
        assert_eq!(r.global_percent, 66);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        let screen = Rect::new(0, 0, 10, 10);
        let r = ScreenCoverage::compute(
            &screen,
            [
                ("https".to_string(), Rect::new(-5, -5, 5, 5)),
                ("file".to_string(), Rect::new(5, 5, 10, 10)),
            ],
        );
        let json = serde_json::to_string(&r).unwrap();
        let back: ScreenCoverage<String> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, r);
        assert_eq!(back.global_percent, 50);
        assert_eq!(back.entries[0].visible, Rect::new(0, 0, 5, 5));
    }
}
