use crate::span::Spans;
use crate::{PageIndex, PagerError, Result};

/// Configuration for [`crate::Pager`].
///
/// The configuration is fixed for the lifetime of a pager. To change the window size or the
/// pages, build a new pager.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PagerConfig {
    /// Maximum number of pages attached to the page host while the viewport rests on a page.
    ///
    /// While the viewport straddles two pages, the straddled neighbour is attached as well.
    /// When this equals the page count, every page stays attached and no attach/detach churn
    /// ever happens.
    pub max_children: usize,

    /// The page shown when the pager is first laid out.
    pub initial_index: PageIndex,
}

impl Default for PagerConfig {
    fn default() -> Self {
        Self {
            max_children: 1,
            initial_index: 0,
        }
    }
}

impl PagerConfig {
    /// Creates a configuration with a single attached page, starting at page 0.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_children(mut self, max_children: usize) -> Self {
        self.max_children = max_children;
        self
    }

    pub fn with_initial_index(mut self, initial_index: PageIndex) -> Self {
        self.initial_index = initial_index;
        self
    }

    /// Checks the configuration against a sequence of `page_count` pages.
    pub fn validate(&self, page_count: usize) -> Result<()> {
        let ok = page_count > 0
            && (1..=page_count).contains(&self.max_children)
            && self.initial_index < page_count;
        if ok {
            return Ok(());
        }
        pwarn!(
            page_count,
            max_children = self.max_children,
            initial_index = self.initial_index,
            "PagerConfig: invalid configuration"
        );
        Err(PagerError::InvalidConfiguration {
            page_count,
            max_children: self.max_children,
            initial_index: self.initial_index,
        })
    }

    /// Whether scrolling attaches and detaches pages at all.
    pub fn is_windowed(&self, page_count: usize) -> bool {
        self.max_children < page_count
    }

    pub fn spans(&self) -> Spans {
        Spans::new(self.max_children)
    }
}
