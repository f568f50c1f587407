//! Adapter utilities for the `carousel` crate.
//!
//! The `carousel` crate is UI-agnostic and focuses on the core state machines. This crate
//! provides small, framework-neutral helpers commonly needed by adapters:
//!
//! - Direction-aware slide transition offsets and a per-frame slide animator
//! - A category bar controller (selection, arrow enablement, smooth page scrolling)
//! - A timestamped event queue that replays UI input against autoplay deadlines
//! - Tween helpers (adapter-driven)
//!
//! This crate is intentionally framework-agnostic (no DOM/egui/ratatui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod category_bar;
mod queue;
mod transition;
mod tween;

#[cfg(test)]
mod tests;

pub use category_bar::{CategoryBar, DEFAULT_SMOOTH_SCROLL_MS, OnSelectCallback};
pub use queue::{CarouselEvent, Change, EventQueue, apply};
pub use transition::{DEFAULT_TRANSITION_MS, SlideAnimator, SlideFrame, SlideTransition};
pub use tween::{Easing, Tween};
