use alloc::sync::{Arc, Weak};
use alloc::vec::Vec;
use core::cell::RefCell;

use pagewindow::{
    EdgeInsets, PageHost, PageIndex, PageSize, Pageable, Pager, PagerConfig, ScrollObserver,
};

use crate::{Controller, Easing};

/// A cell of a [`TabStrip`].
pub trait TabCell {
    /// `ratio` is `1.0` when the cell's page fills the viewport, fading to `0.0` one page away.
    fn update_highlight_ratio(&mut self, ratio: f64);
}

/// Highlight of cell `index` out of `count` equally wide cells for a scroll `ratio`
/// (`offset_x / content_width`).
pub fn highlight_ratio(index: usize, count: usize, ratio: f64) -> f64 {
    if count == 0 {
        return 0.0;
    }
    let cell = 1.0 / count as f64;
    let distance = (index as f64 * cell - ratio).abs();
    (1.0 - distance / cell).max(0.0)
}

/// A row of tab cells, one per page, highlighted by scroll progress.
#[derive(Clone, Debug)]
pub struct TabStrip<C> {
    cells: Vec<C>,
}

impl<C: TabCell> TabStrip<C> {
    pub fn new(cells: impl IntoIterator<Item = C>) -> Self {
        Self {
            cells: cells.into_iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cells(&self) -> &[C] {
        &self.cells
    }

    pub fn cell(&self, index: usize) -> Option<&C> {
        self.cells.get(index)
    }

    pub fn cell_mut(&mut self, index: usize) -> Option<&mut C> {
        self.cells.get_mut(index)
    }

    pub fn highlight_ratios(&self, ratio: f64) -> impl Iterator<Item = f64> + '_ {
        let count = self.cells.len();
        (0..count).map(move |i| highlight_ratio(i, count, ratio))
    }

    pub fn highlight(&mut self, ratio: f64) {
        let count = self.cells.len();
        for (i, cell) in self.cells.iter_mut().enumerate() {
            cell.update_highlight_ratio(highlight_ratio(i, count, ratio));
        }
    }
}

#[derive(Debug, Default)]
struct ProgressRelay {
    pending: RefCell<Vec<f64>>,
}

impl ScrollObserver for ProgressRelay {
    fn did_scroll(&self, ratio: f64) {
        self.pending.borrow_mut().push(ratio);
    }
}

/// A tab strip composed with an animated pager.
///
/// Every scroll ratio the pager reports is applied to the strip and re-forwarded to this
/// composite's own scroll observer. Tapping a tab scrolls to its page with animation.
#[derive(Debug)]
pub struct TabPager<P, C> {
    controller: Controller<P>,
    strip: TabStrip<C>,
    relay: Arc<ProgressRelay>,
    observer: Option<Weak<dyn ScrollObserver>>,
}

impl<P: Pageable, C: TabCell> TabPager<P, C> {
    /// Builds a tab pager from `(page, tab cell)` pairs.
    pub fn new(
        components: impl IntoIterator<Item = (P, C)>,
        config: PagerConfig,
        viewport_width: f64,
    ) -> pagewindow::Result<Self> {
        let (pages, cells): (Vec<P>, Vec<C>) = components.into_iter().unzip();
        let controller = Controller::new(pages, config, viewport_width)?;
        Ok(Self::from_parts(controller, TabStrip::new(cells)))
    }

    fn from_parts(mut controller: Controller<P>, strip: TabStrip<C>) -> Self {
        let relay = Arc::new(ProgressRelay::default());
        controller.set_scroll_observer(&relay);
        Self {
            controller,
            strip,
            relay,
            observer: None,
        }
    }

    /// Sets the duration and easing used when a tab is tapped.
    pub fn with_animation(mut self, duration_ms: u64, easing: Easing) -> Self {
        self.controller = self.controller.with_animation(duration_ms, easing);
        self
    }

    pub fn controller(&self) -> &Controller<P> {
        &self.controller
    }

    pub fn pager(&self) -> &Pager<P> {
        self.controller.pager()
    }

    pub fn strip(&self) -> &TabStrip<C> {
        &self.strip
    }

    pub fn strip_mut(&mut self) -> &mut TabStrip<C> {
        &mut self.strip
    }

    /// Registers the observer receiving every re-forwarded scroll ratio. Held weakly.
    pub fn set_scroll_observer<O: ScrollObserver + 'static>(&mut self, observer: &Arc<O>) {
        let observer: Weak<O> = Arc::downgrade(observer);
        self.observer = Some(observer as Weak<dyn ScrollObserver>);
    }

    pub fn load(&mut self, size: PageSize, host: &mut impl PageHost) {
        self.controller.load(size, host);
        self.forward_progress();
    }

    pub fn did_appear(&mut self) {
        self.controller.did_appear();
    }

    pub fn did_disappear(&mut self) {
        self.controller.did_disappear();
    }

    pub fn set_safe_area_insets(&mut self, insets: EdgeInsets) {
        self.controller.set_safe_area_insets(insets);
    }

    pub fn on_scroll(&mut self, offset_x: f64, host: &mut impl PageHost) {
        self.controller.on_scroll(offset_x, host);
        self.forward_progress();
    }

    pub fn tick(&mut self, now_ms: u64, host: &mut impl PageHost) -> Option<f64> {
        let offset = self.controller.tick(now_ms, host);
        self.forward_progress();
        offset
    }

    /// Handles a tap on tab `index`: an animated scroll to the matching page.
    pub fn select_tab(
        &mut self,
        index: PageIndex,
        now_ms: u64,
        host: &mut impl PageHost,
    ) -> pagewindow::Result<f64> {
        pdebug!(index, "select_tab");
        self.scroll_to_page(index, true, now_ms, host)
    }

    pub fn scroll_to_page(
        &mut self,
        index: PageIndex,
        animated: bool,
        now_ms: u64,
        host: &mut impl PageHost,
    ) -> pagewindow::Result<f64> {
        let target = self
            .controller
            .scroll_to_page(index, animated, now_ms, host);
        self.forward_progress();
        target
    }

    pub fn begin_transition(&mut self, new_size: PageSize, host: &mut impl PageHost) {
        self.controller.begin_transition(new_size, host);
        self.forward_progress();
    }

    pub fn end_transition(&mut self, host: &mut impl PageHost) {
        self.controller.end_transition(host);
        self.forward_progress();
    }

    pub fn did_layout(&mut self, interacting: bool, host: &mut impl PageHost) {
        self.controller.did_layout(interacting, host);
        self.forward_progress();
    }

    /// Re-applies the last scroll ratio to the strip, e.g. after the strip was resized.
    pub fn relayout_tabs(&mut self) {
        if let Some(ratio) = self.controller.pager().scroll_ratio() {
            self.strip.highlight(ratio);
        }
    }

    fn forward_progress(&mut self) {
        let ratios = core::mem::take(&mut *self.relay.pending.borrow_mut());
        if ratios.is_empty() {
            return;
        }
        let observer = self.observer.as_ref().and_then(Weak::upgrade);
        for ratio in ratios {
            self.strip.highlight(ratio);
            if let Some(observer) = &observer {
                observer.did_scroll(ratio);
            }
        }
    }
}
