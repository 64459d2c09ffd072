//! Scroll-progress arithmetic: offset → ratio and offset → page indexes.

use crate::{PageIndex, ScrollMetrics};

/// A scroll position translated into page units.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollProgress {
    /// `offset_x / content_width`. Nominally `0.0..=1.0`, transiently outside during overscroll.
    pub ratio: f64,
    /// `offset_x / viewport_width`, i.e. the fractional page under the viewport's leading edge.
    pub position: f64,
    /// Page touching the leading edge of the viewport (may be out of bounds).
    pub floor_index: i64,
    /// Page touching the trailing edge of the viewport (may be out of bounds).
    pub ceil_index: i64,
}

impl ScrollProgress {
    /// Translates raw metrics. Returns `None` while content is not laid out yet
    /// (`content_width <= 0`), the viewport is degenerate, or any value is not finite.
    pub fn from_metrics(metrics: ScrollMetrics) -> Option<Self> {
        let ratio = ratio(metrics.offset_x, metrics.content_width)?;
        let position = page_position(metrics.offset_x, metrics.viewport_width)?;
        Some(Self {
            ratio,
            position,
            floor_index: floor_i64(position),
            ceil_index: ceil_i64(position),
        })
    }

    pub fn is_page_aligned(&self) -> bool {
        self.floor_index == self.ceil_index
    }

    /// `(floor_index, ceil_index)` clamped into `0..page_count`.
    pub fn clamped_indices(&self, page_count: usize) -> (PageIndex, PageIndex) {
        (
            clamp_index(self.floor_index, page_count),
            clamp_index(self.ceil_index, page_count),
        )
    }
}

/// `offset_x / content_width`, or `None` when there is no content to scroll yet.
pub fn ratio(offset_x: f64, content_width: f64) -> Option<f64> {
    if content_width <= 0.0 || !content_width.is_finite() || !offset_x.is_finite() {
        return None;
    }
    Some(offset_x / content_width)
}

/// `offset_x / viewport_width`, or `None` for a degenerate viewport.
pub fn page_position(offset_x: f64, viewport_width: f64) -> Option<f64> {
    if viewport_width <= 0.0 || !viewport_width.is_finite() || !offset_x.is_finite() {
        return None;
    }
    Some(offset_x / viewport_width)
}

/// The page whose leading edge is at or before `offset_x`, clamped into `0..page_count`.
///
/// Used to pick the page that must stay under the viewport across a resize.
pub fn anchor_index(offset_x: f64, viewport_width: f64, page_count: usize) -> Option<PageIndex> {
    let position = page_position(offset_x, viewport_width)?;
    Some(clamp_index(floor_i64(position), page_count))
}

/// The content offset that puts page `index` under the viewport.
pub fn page_offset(index: PageIndex, viewport_width: f64) -> f64 {
    viewport_width * index as f64
}

pub(crate) fn clamp_index(index: i64, page_count: usize) -> PageIndex {
    let last = page_count.saturating_sub(1) as i64;
    index.clamp(0, last) as PageIndex
}

// `f64::floor`/`f64::ceil` live in `std`; these keep the crate usable under `no_std`.
// Inputs beyond the `i64` range saturate, which is far outside any realistic page count.
fn floor_i64(x: f64) -> i64 {
    let t = x as i64;
    if (t as f64) > x { t.saturating_sub(1) } else { t }
}

fn ceil_i64(x: f64) -> i64 {
    let t = x as i64;
    if (t as f64) < x { t.saturating_add(1) } else { t }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn zero_content_width_has_no_progress() {
        assert_eq!(ScrollProgress::from_metrics(ScrollMetrics::new(10.0, 100.0, 0.0)), None);
        assert_eq!(ratio(10.0, -1.0), None);
        assert_eq!(ratio(f64::NAN, 100.0), None);
    }

    #[test]
    fn degenerate_viewport_has_no_progress() {
        assert_eq!(
            ScrollProgress::from_metrics(ScrollMetrics::new(10.0, 0.0, 500.0)),
            None
        );
    }

    #[test]
    fn page_aligned_offset_has_equal_indices() {
        let p = ScrollProgress::from_metrics(ScrollMetrics::new(200.0, 100.0, 500.0)).unwrap();
        assert_eq!(p.floor_index, 2);
        assert_eq!(p.ceil_index, 2);
        assert!(p.is_page_aligned());
        assert_eq!(p.ratio, 0.4);
    }

    #[test]
    fn straddling_offset_spans_two_pages() {
        let p = ScrollProgress::from_metrics(ScrollMetrics::new(250.0, 100.0, 500.0)).unwrap();
        assert_eq!((p.floor_index, p.ceil_index), (2, 3));
        assert!(!p.is_page_aligned());
    }

    #[test]
    fn negative_overscroll_floors_below_zero() {
        let p = ScrollProgress::from_metrics(ScrollMetrics::new(-30.0, 100.0, 500.0)).unwrap();
        assert_eq!((p.floor_index, p.ceil_index), (-1, 0));
        assert_eq!(p.clamped_indices(5), (0, 0));
    }

    #[test]
    fn huge_offsets_saturate_instead_of_overflowing() {
        let two_pow_63 = 9_223_372_036_854_775_808.0;
        for x in [f64::MAX, 1.0e300, two_pow_63, -two_pow_63, -1.0e300, f64::MIN] {
            assert_eq!(floor_i64(x), x.floor() as i64, "x={x}");
            assert_eq!(ceil_i64(x), x.ceil() as i64, "x={x}");
        }

        let p = ScrollProgress::from_metrics(ScrollMetrics::new(f64::MAX, 100.0, 500.0)).unwrap();
        assert_eq!((p.floor_index, p.ceil_index), (i64::MAX, i64::MAX));
        assert_eq!(p.clamped_indices(5), (4, 4));

        let p = ScrollProgress::from_metrics(ScrollMetrics::new(-1.0e300, 100.0, 500.0)).unwrap();
        assert_eq!((p.floor_index, p.ceil_index), (i64::MIN, i64::MIN));
        assert_eq!(p.clamped_indices(5), (0, 0));
    }

    #[test]
    fn anchor_index_is_clamped_past_the_end() {
        assert_eq!(anchor_index(990.0, 100.0, 5), Some(4));
        assert_eq!(anchor_index(150.0, 100.0, 5), Some(1));
        assert_eq!(anchor_index(150.0, 0.0, 5), None);
    }

    #[test]
    fn six_pages_report_exact_ratios() {
        let width = 320.0;
        let content = width * 6.0;
        assert_eq!(ratio(page_offset(5, width), content), Some(5.0 / 6.0));
        assert_eq!(ratio(page_offset(3, width), content), Some(0.5));
    }

    proptest! {
        #[test]
        fn floor_and_ceil_match_std(x in -1.0e6f64..1.0e6) {
            prop_assert_eq!(floor_i64(x), x.floor() as i64);
            prop_assert_eq!(ceil_i64(x), x.ceil() as i64);
        }

        #[test]
        fn floor_and_ceil_saturate_like_std(x in -1.0e300f64..1.0e300) {
            prop_assert_eq!(floor_i64(x), x.floor() as i64);
            prop_assert_eq!(ceil_i64(x), x.ceil() as i64);
            prop_assert!(floor_i64(x) <= ceil_i64(x));
        }

        #[test]
        fn ceil_is_floor_or_next(offset in -500.0f64..5000.0, width in 1.0f64..800.0) {
            let p = ScrollProgress::from_metrics(ScrollMetrics::new(offset, width, width * 8.0))
                .unwrap();
            prop_assert!(p.ceil_index == p.floor_index || p.ceil_index == p.floor_index + 1);
            let (floor, ceil) = p.clamped_indices(8);
            prop_assert!(floor <= ceil);
            prop_assert!(ceil < 8);
        }
    }
}
