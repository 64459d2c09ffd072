use crate::PageIndex;

/// Whether the viewport is in the middle of a size change (e.g. a rotation).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TransitionPhase {
    #[default]
    Idle,
    /// Lifecycle and attach/detach updates are suspended; `anchor` is the page kept under the
    /// viewport across the size change.
    Transitioning { anchor: PageIndex },
}

impl TransitionPhase {
    pub fn is_transitioning(&self) -> bool {
        matches!(self, Self::Transitioning { .. })
    }

    pub fn anchor(&self) -> Option<PageIndex> {
        match self {
            Self::Idle => None,
            Self::Transitioning { anchor } => Some(*anchor),
        }
    }

    /// Enters (or restarts) a transition. Returns the previous anchor when one was interrupted.
    pub(crate) fn begin(&mut self, anchor: PageIndex) -> Option<PageIndex> {
        let interrupted = self.anchor();
        *self = Self::Transitioning { anchor };
        interrupted
    }

    /// Returns to `Idle`. Returns the anchor of the transition that ended, if any.
    pub(crate) fn end(&mut self) -> Option<PageIndex> {
        let anchor = self.anchor();
        *self = Self::Idle;
        anchor
    }
}
