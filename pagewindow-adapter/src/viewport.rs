use pagewindow::{ScrollMetrics, Viewport};

/// A framework-neutral scroll viewport that only keeps numbers.
///
/// Non-animated offset requests are applied immediately. Animated requests are parked as an
/// animation target for the adapter (see [`crate::Controller`]) to drive.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HeadlessViewport {
    offset_x: f64,
    viewport_width: f64,
    content_width: f64,
    animation_target: Option<f64>,
}

impl HeadlessViewport {
    pub fn new(viewport_width: f64) -> Self {
        Self {
            viewport_width,
            ..Self::default()
        }
    }

    pub fn offset_x(&self) -> f64 {
        self.offset_x
    }

    pub fn viewport_width(&self) -> f64 {
        self.viewport_width
    }

    pub fn content_width(&self) -> f64 {
        self.content_width
    }

    /// Moves the viewport, e.g. in response to a drag. Drops any parked animation target.
    pub fn set_offset(&mut self, offset_x: f64) {
        self.offset_x = offset_x;
        self.animation_target = None;
    }

    pub fn set_viewport_width(&mut self, viewport_width: f64) {
        self.viewport_width = viewport_width;
    }

    pub fn animation_target(&self) -> Option<f64> {
        self.animation_target
    }

    pub fn take_animation_target(&mut self) -> Option<f64> {
        self.animation_target.take()
    }
}

impl Viewport for HeadlessViewport {
    fn metrics(&self) -> ScrollMetrics {
        ScrollMetrics::new(self.offset_x, self.viewport_width, self.content_width)
    }

    fn set_content_offset(&mut self, offset_x: f64, animated: bool) {
        if animated {
            self.animation_target = Some(offset_x);
        } else {
            self.set_offset(offset_x);
        }
    }

    fn set_content_width(&mut self, content_width: f64) {
        self.content_width = content_width;
    }
}
