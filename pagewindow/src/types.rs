/// A type that represents the index of a page in a [`crate::PageSequence`].
pub type PageIndex = usize;

/// The inclusive range of page indexes currently attached to the page host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChildrenRange {
    pub low: PageIndex,
    pub high: PageIndex, // inclusive
}

impl ChildrenRange {
    /// Number of attached pages.
    pub fn width(&self) -> usize {
        self.high + 1 - self.low
    }

    pub fn contains(&self, index: PageIndex) -> bool {
        (self.low..=self.high).contains(&index)
    }

    pub fn iter(&self) -> core::ops::RangeInclusive<PageIndex> {
        self.low..=self.high
    }
}

/// The inclusive range of page indexes that received `did_appear` but not yet `did_disappear`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisibleRange {
    pub backward: PageIndex,
    pub forward: PageIndex, // inclusive
}

impl VisibleRange {
    pub fn at(index: PageIndex) -> Self {
        Self {
            backward: index,
            forward: index,
        }
    }

    pub fn contains(&self, index: PageIndex) -> bool {
        (self.backward..=self.forward).contains(&index)
    }

    pub fn iter(&self) -> core::ops::RangeInclusive<PageIndex> {
        self.backward..=self.forward
    }
}

/// Scroll geometry reported by the viewport on every scroll tick.
///
/// All values are in the same unit (points, pixels, cells...). `content_width` is normally
/// `viewport_width * page_count`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollMetrics {
    pub offset_x: f64,
    pub viewport_width: f64,
    pub content_width: f64,
}

impl ScrollMetrics {
    pub fn new(offset_x: f64, viewport_width: f64, content_width: f64) -> Self {
        Self {
            offset_x,
            viewport_width,
            content_width,
        }
    }
}

/// Size of the viewport (and therefore of every page).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageSize {
    pub width: f64,
    pub height: f64,
}

impl PageSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Position and size of an attached page inside the scrollable content.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageFrame {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl PageFrame {
    /// The frame of page `index` laid out side by side at `size`.
    pub fn for_page(index: PageIndex, size: PageSize) -> Self {
        Self {
            x: size.width * index as f64,
            y: 0.0,
            width: size.width,
            height: size.height,
        }
    }
}

/// Insets of the area that is not covered by bars or other system chrome.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EdgeInsets {
    pub top: f64,
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
}

impl EdgeInsets {
    pub const ZERO: Self = Self {
        top: 0.0,
        left: 0.0,
        bottom: 0.0,
        right: 0.0,
    };

    pub fn new(top: f64, left: f64, bottom: f64, right: f64) -> Self {
        Self {
            top,
            left,
            bottom,
            right,
        }
    }
}
