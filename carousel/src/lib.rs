//! A headless banner carousel and scroll-bounds engine.
//!
//! For adapter-level utilities (transition offsets, tweens, the category bar, event replay), see
//! the `carousel-adapter` crate.
//!
//! This crate holds the small amount of real state behind a storefront home page: the banner
//! carousel's autoplay / swipe / direction-aware navigation, and the arithmetic that decides
//! whether a horizontally scrolling bar can move left or right and by how much.
//!
//! It is UI-agnostic. A TUI/GUI/DOM layer is expected to provide:
//! - a monotonic clock (`now_ms`) on every event and frame
//! - pointer/touch x coordinates
//! - viewport measurements (content extent, visible extent, scroll offset)
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod carousel;
mod gesture;
mod index;
mod options;
mod scroll;
mod state;
mod timer;
mod types;


pub use carousel::Carousel;
pub use gesture::SwipeDetector;
pub use index::SlideIndex;
pub use options::{
    CarouselOptions, DEFAULT_INTERVAL_MS, DEFAULT_PAGE_FRACTION, DEFAULT_SCROLL_EPSILON,
    DEFAULT_SWIPE_THRESHOLD, OnChangeCallback, ScrollOptions,
};
pub use scroll::{ScrollTracker, measure, page_offset};
pub use state::{CarouselState, ViewportMetrics};
pub use timer::AutoplayTimer;
pub use types::{Direction, Indicator, NavigationSource, ScrollBounds, Slide, SlideId, Swipe};
