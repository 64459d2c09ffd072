//! Adapter utilities for the `pagewindow` crate.
//!
//! The `pagewindow` crate is UI-agnostic and focuses on the windowing math and state. This crate
//! provides small, framework-neutral helpers commonly needed by adapters:
//!
//! - A headless scroll viewport that only keeps numbers
//! - Tween-driven animated paging (adapter-driven via `tick(now_ms)`)
//! - A tab strip highlighted by scroll progress, composed with a pager
//!
//! This crate is intentionally framework-agnostic (no ratatui/egui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod controller;
mod tabs;
mod tween;
mod viewport;


pub use controller::Controller;
pub use tabs::{TabCell, TabPager, TabStrip, highlight_ratio};
pub use tween::{Easing, Tween};
pub use viewport::HeadlessViewport;
