use crate::PageIndex;

pub type Result<T, E = PagerError> = core::result::Result<T, E>;

/// Contract violations reported by [`crate::Pager`].
///
/// Both variants describe programmer errors (an impossible configuration or an out-of-range
/// index), not runtime conditions. Transient states such as a zero content width are silently
/// ignored instead.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PagerError {
    #[error(
        "invalid configuration: max_children ({max_children}) must be within 1..={page_count} and \
         initial_index ({initial_index}) within 0..{page_count}"
    )]
    InvalidConfiguration {
        page_count: usize,
        max_children: usize,
        initial_index: PageIndex,
    },

    #[error("page index {index} out of range (page_count: {page_count})")]
    IndexOutOfRange {
        index: PageIndex,
        page_count: usize,
    },
}
