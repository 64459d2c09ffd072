use crate::{EdgeInsets, PageFrame, PageIndex, ScrollMetrics};

/// Lifecycle notifications delivered to each page of a [`crate::Pager`].
///
/// Every method is optional and defaults to a no-op.
pub trait Pageable {
    /// The page at `index` entered the visible window.
    fn did_appear(&mut self, index: PageIndex) {
        let _ = index;
    }

    /// The page at `index` left the visible window.
    fn did_disappear(&mut self, index: PageIndex) {
        let _ = index;
    }

    /// The insets of the area not covered by system chrome, sent when the page is attached and
    /// whenever the insets or the viewport size change.
    fn safe_area_changed(&mut self, insets: EdgeInsets) {
        let _ = insets;
    }
}

/// Receives continuous scroll progress from a [`crate::Pager`].
///
/// The pager holds its observer weakly (see [`crate::Pager::set_scroll_observer`]).
pub trait ScrollObserver {
    /// `ratio` is `offset_x / content_width`: nominally `0.0..=1.0`, transiently outside
    /// during overscroll.
    fn did_scroll(&self, ratio: f64) {
        let _ = ratio;
    }
}

/// The rendering substrate that owns the page views.
///
/// The pager never holds a host; it is borrowed for the duration of each call.
pub trait PageHost {
    /// Attaches page `index` to the scrollable content at `frame`.
    fn attach(&mut self, index: PageIndex, frame: PageFrame);

    /// Detaches page `index` from the scrollable content.
    fn detach(&mut self, index: PageIndex);

    /// Moves/resizes an attached page.
    fn set_frame(&mut self, index: PageIndex, frame: PageFrame);
}

/// The horizontally scrolling, page-snapping viewport.
///
/// Implementations must not call back into the pager synchronously from these methods; scroll
/// ticks are delivered to [`crate::Pager::on_scroll`] by the adapter.
pub trait Viewport {
    fn metrics(&self) -> ScrollMetrics;

    /// Requests a new content offset. With `animated == true` the viewport is expected to
    /// report the intermediate offsets through later scroll ticks.
    fn set_content_offset(&mut self, offset_x: f64, animated: bool);

    fn set_content_width(&mut self, content_width: f64);
}
