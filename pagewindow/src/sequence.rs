use alloc::vec::Vec;

use crate::PageIndex;

/// A fixed, non-empty, ordered list of pages.
///
/// Pages are addressed by index only; the sequence never grows or shrinks after construction.
#[derive(Clone, Debug)]
pub struct PageSequence<P> {
    pages: Vec<P>,
}

impl<P> PageSequence<P> {
    /// Returns `None` for an empty list.
    pub fn new(pages: impl IntoIterator<Item = P>) -> Option<Self> {
        let pages: Vec<P> = pages.into_iter().collect();
        (!pages.is_empty()).then_some(Self { pages })
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn last_index(&self) -> PageIndex {
        self.pages.len() - 1
    }

    pub fn get(&self, index: PageIndex) -> Option<&P> {
        self.pages.get(index)
    }

    pub fn get_mut(&mut self, index: PageIndex) -> Option<&mut P> {
        self.pages.get_mut(index)
    }

    pub fn iter(&self) -> core::slice::Iter<'_, P> {
        self.pages.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> core::slice::IterMut<'_, P> {
        self.pages.iter_mut()
    }

    pub fn into_vec(self) -> Vec<P> {
        self.pages
    }
}
