use crate::{ChildrenRange, TransitionPhase, VisibleRange};

/// A lightweight snapshot of a pager's window bookkeeping.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`. It is meant for
/// debugging overlays, logging and tests; a pager cannot be restored from it.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PagerState {
    pub children: ChildrenRange,
    pub visible: VisibleRange,
    pub phase: TransitionPhase,
    /// The last reported scroll ratio, if content has been laid out.
    pub ratio: Option<f64>,
}
