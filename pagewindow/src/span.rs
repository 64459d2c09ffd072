//! Boundary policy for the materialized window.
//!
//! Every index computation that mixes floor/ceil offsets with clamping at the sequence bounds
//! lives here, so the engine only ever deals with already-valid ranges.

use crate::{ChildrenRange, PageIndex};

/// How many pages are kept attached ahead of and behind the page under the viewport.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Spans {
    pub forward: usize,
    pub backward: usize,
}

impl Spans {
    /// Splits `max_children` around the current page.
    ///
    /// `forward + backward + 1 == max_children` for every `max_children >= 1`. Even sizes put
    /// the extra page on the forward side (e.g. 4 → 2 ahead, 1 behind).
    pub fn new(max_children: usize) -> Self {
        let forward = max_children / 2;
        let backward = if max_children % 2 == 0 {
            (max_children / 2).saturating_sub(1)
        } else {
            max_children / 2
        };
        Self { forward, backward }
    }

    pub fn width(&self) -> usize {
        self.forward + self.backward + 1
    }
}

/// Clamps a raw (possibly out-of-bounds) window into `0..page_count`.
///
/// The result is never narrower than `min(max_children, page_count)`: a window cut by the
/// lower bound grows upward, a window cut by the upper bound grows downward. A raw window that
/// is already wider (e.g. while straddling two pages) is only clamped. An inverted raw window
/// (`low_raw > high_raw`) collapses onto `low_raw` before widening.
///
/// `page_count` must be non-zero.
pub fn clamp_window(
    low_raw: i64,
    high_raw: i64,
    page_count: usize,
    max_children: usize,
) -> ChildrenRange {
    debug_assert!(page_count > 0, "clamp_window: empty sequence");
    let last = page_count.saturating_sub(1) as i64;
    let width = max_children.clamp(1, page_count.max(1)) as i64;

    // Both ends in `0..=last`, `low <= high`, so the width arithmetic cannot overflow.
    let mut low = low_raw.clamp(0, last);
    let mut high = high_raw.clamp(low, last);

    if high - low + 1 < width {
        if low == 0 {
            high = (width - 1).min(last);
        } else {
            // Grow downward, then upward if the lower bound stops it.
            low = (high + 1 - width).max(0);
            high = (low + width - 1).min(last);
        }
    }

    ChildrenRange {
        low: low as PageIndex,
        high: high as PageIndex,
    }
}

/// The materialized window for a viewport resting on page `center`.
pub fn window_around(
    center: PageIndex,
    spans: Spans,
    page_count: usize,
    max_children: usize,
) -> ChildrenRange {
    let center = center as i64;
    clamp_window(
        center - spans.backward as i64,
        center + spans.forward as i64,
        page_count,
        max_children,
    )
}

/// The materialized window for a viewport showing pages `floor_index..=ceil_index`.
///
/// Indexes may be out of bounds (overscroll); the result is always valid.
pub fn window_between(
    floor_index: i64,
    ceil_index: i64,
    spans: Spans,
    page_count: usize,
    max_children: usize,
) -> ChildrenRange {
    clamp_window(
        floor_index.saturating_sub(spans.backward as i64),
        ceil_index.saturating_add(spans.forward as i64),
        page_count,
        max_children,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// Brute force: slide a `width`-wide window over every start position and keep the one
    /// that covers the most of the raw window, preferring the raw window itself.
    fn reference_window(center: usize, spans: Spans, page_count: usize) -> (usize, usize) {
        let width = spans.width().min(page_count);
        let want_low = center as i64 - spans.backward as i64;
        let mut best = (0usize, width - 1);
        let mut best_dist = i64::MAX;
        for low in 0..=(page_count - width) {
            let dist = (low as i64 - want_low).abs();
            if dist < best_dist {
                best_dist = dist;
                best = (low, low + width - 1);
            }
        }
        best
    }

    #[test]
    fn spans_split_odd_sizes_evenly() {
        assert_eq!(Spans::new(1), Spans { forward: 0, backward: 0 });
        assert_eq!(Spans::new(3), Spans { forward: 1, backward: 1 });
        assert_eq!(Spans::new(5), Spans { forward: 2, backward: 2 });
    }

    #[test]
    fn spans_skew_even_sizes_forward() {
        assert_eq!(Spans::new(2), Spans { forward: 1, backward: 0 });
        assert_eq!(Spans::new(4), Spans { forward: 2, backward: 1 });
        assert_eq!(Spans::new(6), Spans { forward: 3, backward: 2 });
    }

    #[test]
    fn window_slides_inward_at_both_ends() {
        let spans = Spans::new(3);
        assert_eq!(
            window_around(0, spans, 5, 3),
            ChildrenRange { low: 0, high: 2 }
        );
        assert_eq!(
            window_around(2, spans, 5, 3),
            ChildrenRange { low: 1, high: 3 }
        );
        assert_eq!(
            window_around(4, spans, 5, 3),
            ChildrenRange { low: 2, high: 4 }
        );
    }

    #[test]
    fn window_covers_everything_when_max_equals_count() {
        for center in 0..4 {
            assert_eq!(
                window_around(center, Spans::new(4), 4, 4),
                ChildrenRange { low: 0, high: 3 }
            );
        }
    }

    #[test]
    fn single_child_window_is_the_page_itself() {
        for center in 0..7 {
            assert_eq!(
                window_around(center, Spans::new(1), 7, 1),
                ChildrenRange {
                    low: center,
                    high: center
                }
            );
        }
    }

    #[test]
    fn straddling_window_keeps_both_pages() {
        // Between pages 1 and 2 with a single child: both are on screen.
        assert_eq!(
            window_between(1, 2, Spans::new(1), 5, 1),
            ChildrenRange { low: 1, high: 2 }
        );
    }

    #[test]
    fn overscroll_is_clamped() {
        let spans = Spans::new(3);
        assert_eq!(
            window_between(-1, 0, spans, 5, 3),
            ChildrenRange { low: 0, high: 2 }
        );
        assert_eq!(
            window_between(4, 5, spans, 5, 3),
            ChildrenRange { low: 2, high: 4 }
        );
        assert_eq!(
            window_between(40, 41, spans, 5, 3),
            ChildrenRange { low: 2, high: 4 }
        );
        assert_eq!(
            window_between(-40, -39, spans, 5, 3),
            ChildrenRange { low: 0, high: 2 }
        );
    }

    #[test]
    fn extreme_raw_windows_stay_in_bounds() {
        let spans = Spans::new(3);
        for (floor_index, ceil_index) in [
            (i64::MAX, i64::MAX),
            (i64::MIN, i64::MIN),
            (i64::MAX, i64::MIN),
        ] {
            let got = window_between(floor_index, ceil_index, spans, 5, 3);
            assert!(got.low <= got.high && got.high < 5, "{got:?}");
            assert_eq!(got.width(), 3);
        }
        assert_eq!(
            clamp_window(i64::MAX - 1, i64::MAX, 5, 3),
            ChildrenRange { low: 2, high: 4 }
        );
        assert_eq!(
            clamp_window(i64::MIN, i64::MIN + 1, 5, 3),
            ChildrenRange { low: 0, high: 2 }
        );
        assert_eq!(clamp_window(3, 1, 5, 1), ChildrenRange { low: 3, high: 3 });
    }

    proptest! {
        #[test]
        fn clamp_window_is_in_bounds_for_any_raw_window(
            page_count in 1usize..40,
            max_seed in 0usize..40,
            low_raw in any::<i64>(),
            high_raw in any::<i64>(),
        ) {
            let max_children = 1 + max_seed % page_count;
            let got = clamp_window(low_raw, high_raw, page_count, max_children);
            prop_assert!(got.low <= got.high);
            prop_assert!(got.high < page_count);
            prop_assert!(got.width() >= max_children);
        }

        #[test]
        fn spans_always_sum_to_max(max_children in 1usize..64) {
            prop_assert_eq!(Spans::new(max_children).width(), max_children);
        }

        #[test]
        fn window_around_matches_reference(
            page_count in 1usize..40,
            max_seed in 0usize..40,
            center_seed in 0usize..40,
        ) {
            let max_children = 1 + max_seed % page_count;
            let center = center_seed % page_count;
            let spans = Spans::new(max_children);

            let got = window_around(center, spans, page_count, max_children);
            let (low, high) = reference_window(center, spans, page_count);
            prop_assert_eq!(got, ChildrenRange { low, high });
            prop_assert!(got.contains(center));
            prop_assert_eq!(got.width(), max_children.min(page_count));
        }

        #[test]
        fn window_between_is_in_bounds_and_wide_enough(
            page_count in 1usize..40,
            max_seed in 0usize..40,
            floor_index in -50i64..90,
            straddling in any::<bool>(),
        ) {
            let max_children = 1 + max_seed % page_count;
            let ceil_index = floor_index + i64::from(straddling);
            let got = window_between(
                floor_index,
                ceil_index,
                Spans::new(max_children),
                page_count,
                max_children,
            );
            prop_assert!(got.low <= got.high);
            prop_assert!(got.high < page_count);
            let width = got.width();
            prop_assert!(width >= max_children.min(page_count));
            prop_assert!(width <= (max_children + 1).min(page_count));
            if !straddling {
                prop_assert_eq!(width, max_children.min(page_count));
            }
        }
    }
}
