use alloc::sync::{Arc, Weak};
use alloc::vec::Vec;

use crate::diff::{Change, diff_windows};
use crate::progress::{self, ScrollProgress};
use crate::span::{self, Spans};
use crate::{
    ChildrenRange, EdgeInsets, PageFrame, PageHost, PageIndex, PageSequence, PageSize, Pageable,
    PagerConfig, PagerError, PagerState, Result, ScrollMetrics, ScrollObserver, TransitionPhase,
    Viewport, VisibleRange,
};

/// A headless windowed-paging engine.
///
/// The pager keeps two windows over a fixed sequence of pages laid out side by side in a
/// horizontally scrolling, page-snapping viewport:
/// - the *children* window: pages attached to the [`PageHost`], kept around the current scroll
///   position and clamped at the sequence bounds;
/// - the *visible* window: pages that received [`Pageable::did_appear`] but not yet
///   [`Pageable::did_disappear`].
///
/// It holds no UI objects. Your adapter reports scroll ticks through [`Self::on_scroll`] and
/// lends the viewport/page host for the duration of each call.
///
/// For a headless viewport and animated paging, see the `pagewindow-adapter` crate.
pub struct Pager<P> {
    pages: PageSequence<P>,
    config: PagerConfig,
    spans: Spans,

    children: ChildrenRange,
    visible: VisibleRange,
    phase: TransitionPhase,

    page_size: PageSize,
    safe_area: EdgeInsets,
    ratio: Option<f64>,
    loaded: bool,

    observer: Option<Weak<dyn ScrollObserver>>,
}

impl<P: Pageable> Pager<P> {
    /// Creates a pager over `pages`.
    ///
    /// Fails with [`PagerError::InvalidConfiguration`] when `pages` is empty, when
    /// `config.max_children` is outside `1..=pages.len()` or when `config.initial_index` is not
    /// a page index.
    pub fn new(pages: impl IntoIterator<Item = P>, config: PagerConfig) -> Result<Self> {
        let pages: Vec<P> = pages.into_iter().collect();
        config.validate(pages.len())?;
        let Some(pages) = PageSequence::new(pages) else {
            return Err(PagerError::InvalidConfiguration {
                page_count: 0,
                max_children: config.max_children,
                initial_index: config.initial_index,
            });
        };

        let spans = config.spans();
        let children = span::window_around(
            config.initial_index,
            spans,
            pages.len(),
            config.max_children,
        );
        pdebug!(
            page_count = pages.len(),
            max_children = config.max_children,
            initial_index = config.initial_index,
            children_low = children.low,
            children_high = children.high,
            "Pager::new"
        );

        Ok(Self {
            pages,
            config,
            spans,
            children,
            visible: VisibleRange::at(config.initial_index),
            phase: TransitionPhase::Idle,
            page_size: PageSize::default(),
            safe_area: EdgeInsets::ZERO,
            ratio: None,
            loaded: false,
            observer: None,
        })
    }

    /// Registers the scroll observer. Only a weak reference is kept: dropping the last `Arc`
    /// silently unsubscribes it.
    pub fn set_scroll_observer<O: ScrollObserver + 'static>(&mut self, observer: &Arc<O>) {
        let observer: Weak<O> = Arc::downgrade(observer);
        self.observer = Some(observer as Weak<dyn ScrollObserver>);
    }

    pub fn clear_scroll_observer(&mut self) {
        self.observer = None;
    }

    pub fn config(&self) -> &PagerConfig {
        &self.config
    }

    pub fn spans(&self) -> Spans {
        self.spans
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn pages(&self) -> &PageSequence<P> {
        &self.pages
    }

    pub fn page(&self, index: PageIndex) -> Option<&P> {
        self.pages.get(index)
    }

    pub fn page_mut(&mut self, index: PageIndex) -> Option<&mut P> {
        self.pages.get_mut(index)
    }

    pub fn into_pages(self) -> PageSequence<P> {
        self.pages
    }

    pub fn children(&self) -> ChildrenRange {
        self.children
    }

    pub fn is_attached(&self, index: PageIndex) -> bool {
        self.loaded && self.children.contains(index)
    }

    pub fn visible(&self) -> VisibleRange {
        self.visible
    }

    /// The distinct pages of the visible window (one while at rest, two while straddling).
    pub fn visible_pages(&self) -> impl Iterator<Item = (PageIndex, &P)> + '_ {
        self.visible
            .iter()
            .filter_map(|i| self.pages.get(i).map(|p| (i, p)))
    }

    pub fn phase(&self) -> TransitionPhase {
        self.phase
    }

    pub fn is_transitioning(&self) -> bool {
        self.phase.is_transitioning()
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// The last reported `offset_x / content_width`, if content has been laid out.
    pub fn scroll_ratio(&self) -> Option<f64> {
        self.ratio
    }

    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    pub fn safe_area_insets(&self) -> EdgeInsets {
        self.safe_area
    }

    /// The frame page `index` gets when attached at the current page size.
    pub fn frame_for(&self, index: PageIndex) -> PageFrame {
        PageFrame::for_page(index, self.page_size)
    }

    /// Returns a lightweight snapshot of the window bookkeeping.
    pub fn state(&self) -> PagerState {
        PagerState {
            children: self.children,
            visible: self.visible,
            phase: self.phase,
            ratio: self.ratio,
        }
    }

    /// Performs the initial layout.
    ///
    /// Sizes the content to `size.width * page_count`, moves the viewport to the initial page,
    /// reports the initial progress and attaches every page of the initial children window.
    /// Until this has been called, scroll ticks only report progress. Calling it again is a
    /// no-op.
    pub fn load(&mut self, size: PageSize, viewport: &mut impl Viewport, host: &mut impl PageHost) {
        if self.loaded {
            pwarn!("Pager::load called twice");
            return;
        }
        self.loaded = true;
        self.page_size = size;

        let count = self.pages.len();
        viewport.set_content_width(size.width * count as f64);
        viewport.set_content_offset(progress::page_offset(self.visible.forward, size.width), false);

        let metrics = viewport.metrics();
        if let Some(ratio) = progress::ratio(metrics.offset_x, metrics.content_width) {
            self.emit_progress(ratio);
        }

        pdebug!(
            width = size.width,
            height = size.height,
            children_low = self.children.low,
            children_high = self.children.high,
            "Pager::load"
        );
        for i in self.children.iter() {
            self.attach(i, host);
        }
    }

    /// Forwards the container's own appearance to every page of the visible window.
    pub fn did_appear(&mut self) {
        for i in self.visible.iter() {
            if let Some(page) = self.pages.get_mut(i) {
                page.did_appear(i);
            }
        }
    }

    /// Forwards the container's own disappearance to every page of the visible window.
    pub fn did_disappear(&mut self) {
        for i in self.visible.iter() {
            if let Some(page) = self.pages.get_mut(i) {
                page.did_disappear(i);
            }
        }
    }

    /// Updates the safe-area insets and notifies every page when they changed.
    pub fn set_safe_area_insets(&mut self, insets: EdgeInsets) {
        if self.safe_area == insets {
            return;
        }
        self.safe_area = insets;
        for page in self.pages.iter_mut() {
            page.safe_area_changed(insets);
        }
    }

    /// Handles a scroll tick from the viewport.
    ///
    /// 1. No-op until content is laid out (`content_width <= 0`).
    /// 2. Reports `offset_x / content_width` to the scroll observer.
    /// 3. Before [`Self::load`] or while a size transition is in progress, stops here.
    /// 4. Updates the visible window, sending `did_appear`/`did_disappear`.
    /// 5. Updates the children window, attaching/detaching pages (only when fewer children than
    ///    pages are allowed).
    pub fn on_scroll(&mut self, metrics: ScrollMetrics, host: &mut impl PageHost) {
        let Some(ratio) = progress::ratio(metrics.offset_x, metrics.content_width) else {
            return;
        };
        self.emit_progress(ratio);

        if !self.loaded {
            ptrace!(offset_x = metrics.offset_x, "on_scroll: not loaded");
            return;
        }
        if self.phase.is_transitioning() {
            ptrace!(offset_x = metrics.offset_x, "on_scroll: transitioning");
            return;
        }

        let Some(progress) = ScrollProgress::from_metrics(metrics) else {
            return;
        };
        ptrace!(
            offset_x = metrics.offset_x,
            floor_index = progress.floor_index,
            ceil_index = progress.ceil_index,
            "on_scroll"
        );

        self.page_size.width = metrics.viewport_width;
        self.update_visible(&progress);
        self.update_children(&progress, host);
    }

    /// Scrolls the viewport so page `index` is shown.
    ///
    /// Without animation the windows are updated before this returns. With animation, the
    /// viewport is expected to report the intermediate offsets through [`Self::on_scroll`]; a
    /// later call simply redirects the target.
    pub fn scroll_to_page(
        &mut self,
        index: PageIndex,
        animated: bool,
        viewport: &mut impl Viewport,
        host: &mut impl PageHost,
    ) -> Result<()> {
        self.check_index(index)?;
        let width = viewport.metrics().viewport_width;
        viewport.set_content_offset(progress::page_offset(index, width), animated);
        if !animated {
            self.on_scroll(viewport.metrics(), host);
        }
        Ok(())
    }

    /// Starts (or restarts) a viewport size transition, e.g. a rotation.
    ///
    /// The page under the viewport at the old width stays under it at `new_size`: the content
    /// is resized, the offset repositioned and every attached page moved to its new frame.
    /// Which pages are attached does not change. Lifecycle and attach/detach updates are
    /// suspended until [`Self::end_transition`].
    ///
    /// Ignored while the viewport has no width.
    pub fn begin_transition(
        &mut self,
        new_size: PageSize,
        viewport: &mut impl Viewport,
        host: &mut impl PageHost,
    ) {
        let metrics = viewport.metrics();
        let count = self.pages.len();
        let old_width = metrics.viewport_width;
        let offset_x = metrics.offset_x.min(old_width * count as f64);
        let Some(anchor) = progress::anchor_index(offset_x, old_width, count) else {
            pdebug!(old_width, "begin_transition: ignored (no width)");
            return;
        };

        let interrupted = self.phase.begin(anchor);
        if interrupted.is_some() {
            pdebug!(anchor, "begin_transition: restarting an active transition");
        }
        pdebug!(
            anchor,
            old_width,
            new_width = new_size.width,
            "begin_transition"
        );

        self.page_size = new_size;
        let content_width = new_size.width * count as f64;
        if metrics.content_width != content_width {
            viewport.set_content_width(content_width);
            viewport.set_content_offset(progress::page_offset(anchor, new_size.width), false);
        }

        let insets = self.safe_area;
        let loaded = self.loaded;
        let children = self.children;
        for (i, page) in self.pages.iter_mut().enumerate() {
            page.safe_area_changed(insets);
            if loaded && children.contains(i) {
                host.set_frame(i, PageFrame::for_page(i, new_size));
            }
        }
    }

    /// Completes the transition and reconciles both windows once with the viewport's final
    /// metrics. No-op when no transition is in progress.
    pub fn end_transition(&mut self, viewport: &mut impl Viewport, host: &mut impl PageHost) {
        let Some(anchor) = self.phase.end() else {
            return;
        };
        pdebug!(anchor, "end_transition");
        self.on_scroll(viewport.metrics(), host);
    }

    /// Call after the viewport was laid out. Unless a transition is running or the user is
    /// interacting with the viewport, snaps the offset back onto the leading visible page.
    pub fn did_layout(
        &mut self,
        interacting: bool,
        viewport: &mut impl Viewport,
        host: &mut impl PageHost,
    ) {
        if self.phase.is_transitioning() || interacting {
            return;
        }
        let metrics = viewport.metrics();
        let target = progress::page_offset(self.visible.forward, metrics.viewport_width);
        if metrics.offset_x == target {
            return;
        }
        viewport.set_content_offset(target, false);
        self.on_scroll(viewport.metrics(), host);
    }

    fn check_index(&self, index: PageIndex) -> Result<()> {
        if index < self.pages.len() {
            return Ok(());
        }
        pwarn!(
            index,
            page_count = self.pages.len(),
            "scroll_to_page: index out of range"
        );
        Err(PagerError::IndexOutOfRange {
            index,
            page_count: self.pages.len(),
        })
    }

    fn emit_progress(&mut self, ratio: f64) {
        self.ratio = Some(ratio);
        if let Some(observer) = self.observer.as_ref().and_then(Weak::upgrade) {
            observer.did_scroll(ratio);
        }
    }

    fn update_visible(&mut self, progress: &ScrollProgress) {
        let (floor, ceil) = progress.clamped_indices(self.pages.len());
        let next = VisibleRange {
            backward: floor,
            forward: ceil,
        };
        let prev = self.visible;
        if next == prev {
            return;
        }

        let pages = &mut self.pages;
        diff_windows(
            (prev.backward, prev.forward),
            (next.backward, next.forward),
            |change| match change {
                Change::Enter(i) => {
                    ptrace!(index = i, "did_appear");
                    if let Some(page) = pages.get_mut(i) {
                        page.did_appear(i);
                    }
                }
                Change::Leave(i) => {
                    ptrace!(index = i, "did_disappear");
                    if let Some(page) = pages.get_mut(i) {
                        page.did_disappear(i);
                    }
                }
            },
        );
        self.visible = next;
    }

    fn update_children(&mut self, progress: &ScrollProgress, host: &mut impl PageHost) {
        let count = self.pages.len();
        if !self.config.is_windowed(count) {
            return;
        }

        let next = span::window_between(
            progress.floor_index,
            progress.ceil_index,
            self.spans,
            count,
            self.config.max_children,
        );
        let prev = self.children;
        if next == prev {
            return;
        }

        let size = self.page_size;
        let insets = self.safe_area;
        let pages = &mut self.pages;
        diff_windows((prev.low, prev.high), (next.low, next.high), |change| {
            match change {
                Change::Enter(i) => {
                    ptrace!(index = i, "attach");
                    if let Some(page) = pages.get_mut(i) {
                        page.safe_area_changed(insets);
                    }
                    host.attach(i, PageFrame::for_page(i, size));
                }
                Change::Leave(i) => {
                    ptrace!(index = i, "detach");
                    host.detach(i);
                }
            }
        });
        self.children = next;
    }

    fn attach(&mut self, index: PageIndex, host: &mut impl PageHost) {
        if let Some(page) = self.pages.get_mut(index) {
            page.safe_area_changed(self.safe_area);
        }
        host.attach(index, PageFrame::for_page(index, self.page_size));
    }
}

impl<P> core::fmt::Debug for Pager<P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Pager")
            .field("page_count", &self.pages.len())
            .field("config", &self.config)
            .field("children", &self.children)
            .field("visible", &self.visible)
            .field("phase", &self.phase)
            .field("page_size", &self.page_size)
            .field("ratio", &self.ratio)
            .field("loaded", &self.loaded)
            .finish_non_exhaustive()
    }
}
