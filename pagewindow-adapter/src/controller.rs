use alloc::sync::Arc;

use pagewindow::{
    EdgeInsets, PageHost, PageIndex, PageSize, Pageable, Pager, PagerConfig, ScrollObserver,
    Viewport,
};

use crate::{Easing, HeadlessViewport, Tween};

/// A framework-neutral controller that wraps a [`pagewindow::Pager`] together with a
/// [`HeadlessViewport`] and provides tween-driven animated paging.
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `on_scroll` when the user drags the real scroll container
/// - `tick(now_ms)` each frame/timer tick while [`Self::is_animating`]
///
/// The offset returned by `tick()` is meant to be applied to the real scroll container (if any),
/// while the pager state is kept in sync.
#[derive(Debug)]
pub struct Controller<P> {
    pager: Pager<P>,
    viewport: HeadlessViewport,
    tween: Option<Tween>,
    duration_ms: u64,
    easing: Easing,
}

impl<P: Pageable> Controller<P> {
    pub const DEFAULT_DURATION_MS: u64 = 300;

    pub fn new(
        pages: impl IntoIterator<Item = P>,
        config: PagerConfig,
        viewport_width: f64,
    ) -> pagewindow::Result<Self> {
        let pager = Pager::new(pages, config)?;
        Ok(Self::from_pager(pager, HeadlessViewport::new(viewport_width)))
    }

    pub fn from_pager(pager: Pager<P>, viewport: HeadlessViewport) -> Self {
        Self {
            pager,
            viewport,
            tween: None,
            duration_ms: Self::DEFAULT_DURATION_MS,
            easing: Easing::default(),
        }
    }

    /// Sets the duration and easing used by animated page scrolls.
    pub fn with_animation(mut self, duration_ms: u64, easing: Easing) -> Self {
        self.duration_ms = duration_ms;
        self.easing = easing;
        self
    }

    pub fn pager(&self) -> &Pager<P> {
        &self.pager
    }

    pub fn pager_mut(&mut self) -> &mut Pager<P> {
        &mut self.pager
    }

    pub fn viewport(&self) -> &HeadlessViewport {
        &self.viewport
    }

    pub fn into_pager(self) -> Pager<P> {
        self.pager
    }

    pub fn set_scroll_observer<O: ScrollObserver + 'static>(&mut self, observer: &Arc<O>) {
        self.pager.set_scroll_observer(observer);
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    pub fn animation(&self) -> Option<Tween> {
        self.tween
    }

    pub fn cancel_animation(&mut self) {
        self.tween = None;
    }

    /// Performs the initial layout with pages of `size`.
    pub fn load(&mut self, size: PageSize, host: &mut impl PageHost) {
        self.viewport.set_viewport_width(size.width);
        self.pager.load(size, &mut self.viewport, host);
    }

    pub fn did_appear(&mut self) {
        self.pager.did_appear();
    }

    pub fn did_disappear(&mut self) {
        self.pager.did_disappear();
    }

    pub fn set_safe_area_insets(&mut self, insets: EdgeInsets) {
        self.pager.set_safe_area_insets(insets);
    }

    /// Call this when the UI reports a scroll offset change (e.g. user drag).
    ///
    /// This cancels any active tween.
    pub fn on_scroll(&mut self, offset_x: f64, host: &mut impl PageHost) {
        self.cancel_animation();
        self.viewport.set_offset(offset_x);
        self.pager.on_scroll(self.viewport.metrics(), host);
    }

    /// Scrolls to page `index`.
    ///
    /// Without animation the pager is updated before this returns. With animation a tween is
    /// started, or the running one is retargeted from its current offset, and the pager follows
    /// on each [`Self::tick`].
    ///
    /// Returns the target offset.
    pub fn scroll_to_page(
        &mut self,
        index: PageIndex,
        animated: bool,
        now_ms: u64,
        host: &mut impl PageHost,
    ) -> pagewindow::Result<f64> {
        if !animated {
            self.cancel_animation();
            self.pager
                .scroll_to_page(index, false, &mut self.viewport, host)?;
            return Ok(self.viewport.offset_x());
        }

        self.pager
            .scroll_to_page(index, true, &mut self.viewport, host)?;
        let Some(to) = self.viewport.take_animation_target() else {
            return Ok(self.viewport.offset_x());
        };

        match self.tween.as_mut() {
            Some(tween) => {
                pdebug!(index, from = tween.sample(now_ms), to, "retarget page animation");
                tween.retarget(now_ms, to, self.duration_ms);
            }
            None => {
                pdebug!(index, from = self.viewport.offset_x(), to, "start page animation");
                self.tween = Some(Tween::new(
                    self.viewport.offset_x(),
                    to,
                    now_ms,
                    self.duration_ms,
                    self.easing,
                ));
            }
        }
        Ok(to)
    }

    /// Advances the controller.
    ///
    /// If a tween is active, moves the viewport, reports the tick to the pager and returns the
    /// new offset. Otherwise returns `None`.
    pub fn tick(&mut self, now_ms: u64, host: &mut impl PageHost) -> Option<f64> {
        let tween = self.tween?;

        let offset = tween.sample(now_ms);
        ptrace!(now_ms, offset, "tick");
        self.viewport.set_offset(offset);
        if tween.is_done(now_ms) {
            self.tween = None;
        }
        self.pager.on_scroll(self.viewport.metrics(), host);
        Some(offset)
    }

    /// Starts a viewport size transition. Cancels any active tween.
    pub fn begin_transition(&mut self, new_size: PageSize, host: &mut impl PageHost) {
        self.cancel_animation();
        self.pager
            .begin_transition(new_size, &mut self.viewport, host);
        if self.pager.is_transitioning() {
            self.viewport.set_viewport_width(new_size.width);
        }
    }

    pub fn end_transition(&mut self, host: &mut impl PageHost) {
        self.pager.end_transition(&mut self.viewport, host);
    }

    pub fn did_layout(&mut self, interacting: bool, host: &mut impl PageHost) {
        if self.is_animating() {
            return;
        }
        self.pager.did_layout(interacting, &mut self.viewport, host);
    }
}
