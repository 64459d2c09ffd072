//! A headless windowed-paging engine.
//!
//! For adapter-level utilities (a headless viewport, animated paging, tab strips), see the
//! `pagewindow-adapter` crate.
//!
//! Given a fixed sequence of pages laid out side by side in a horizontally scrolling,
//! page-snapping viewport, this crate keeps a bounded window of pages attached around the
//! current scroll position, attaches/detaches pages lazily while scrolling, and sends
//! appear/disappear notifications plus continuous scroll progress.
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide:
//! - a [`Viewport`] (scroll offset, viewport width, content width)
//! - a [`PageHost`] that attaches/detaches page views
//! - pages implementing [`Pageable`] (all methods optional)
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod config;
mod diff;
mod error;
mod observer;
mod pager;
mod sequence;
mod state;
mod transition;
mod types;

pub mod progress;
pub mod span;


pub use config::PagerConfig;
pub use error::{PagerError, Result};
pub use observer::{PageHost, Pageable, ScrollObserver, Viewport};
pub use pager::Pager;
pub use progress::ScrollProgress;
pub use sequence::PageSequence;
pub use span::Spans;
pub use state::PagerState;
pub use transition::TransitionPhase;
pub use types::{
    ChildrenRange, EdgeInsets, PageFrame, PageIndex, PageSize, ScrollMetrics, VisibleRange,
};
