use alloc::sync::Arc;

use crate::{CarouselState, NavigationSource};

/// Default autoplay interval.
pub const DEFAULT_INTERVAL_MS: u64 = 5_000;
/// Default minimum horizontal drag distance for a swipe.
pub const DEFAULT_SWIPE_THRESHOLD: f32 = 40.0;
/// Default tolerance for sub-pixel rounding at the scroll edges.
pub const DEFAULT_SCROLL_EPSILON: f32 = 4.0;
/// Default fraction of the visible extent scrolled by one page action.
pub const DEFAULT_PAGE_FRACTION: f32 = 0.5;

/// A callback fired after every slide transition.
pub type OnChangeCallback = Arc<dyn Fn(CarouselState, NavigationSource) + Send + Sync>;

/// Configuration for [`crate::Carousel`].
///
/// Cheap to clone: the callback is stored in an `Arc`.
pub struct CarouselOptions {
    /// Whether the autoplay timer runs while the carousel is mounted.
    pub autoplay: bool,
    /// Time between automatic advances.
    pub interval_ms: u64,
    /// A drag must travel strictly further than this to count as a swipe.
    pub swipe_threshold: f32,
    /// Index shown on mount. Wrapped into range.
    pub initial_index: usize,
    /// Optional callback fired after every transition.
    pub on_change: Option<OnChangeCallback>,
}

impl Default for CarouselOptions {
    fn default() -> Self {
        Self {
            autoplay: true,
            interval_ms: DEFAULT_INTERVAL_MS,
            swipe_threshold: DEFAULT_SWIPE_THRESHOLD,
            initial_index: 0,
            on_change: None,
        }
    }
}

impl Clone for CarouselOptions {
    fn clone(&self) -> Self {
        Self {
            autoplay: self.autoplay,
            interval_ms: self.interval_ms,
            swipe_threshold: self.swipe_threshold,
            initial_index: self.initial_index,
            on_change: self.on_change.clone(),
        }
    }
}

impl CarouselOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_autoplay(mut self, autoplay: bool) -> Self {
        self.autoplay = autoplay;
        self
    }

    pub fn with_interval_ms(mut self, interval_ms: u64) -> Self {
        self.interval_ms = interval_ms;
        self
    }

    pub fn with_swipe_threshold(mut self, swipe_threshold: f32) -> Self {
        self.swipe_threshold = swipe_threshold;
        self
    }

    pub fn with_initial_index(mut self, initial_index: usize) -> Self {
        self.initial_index = initial_index;
        self
    }

    pub fn with_on_change(
        mut self,
        on_change: Option<impl Fn(CarouselState, NavigationSource) + Send + Sync + 'static>,
    ) -> Self {
        self.on_change = on_change.map(|f| Arc::new(f) as _);
        self
    }
}

impl core::fmt::Debug for CarouselOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CarouselOptions")
            .field("autoplay", &self.autoplay)
            .field("interval_ms", &self.interval_ms)
            .field("swipe_threshold", &self.swipe_threshold)
            .field("initial_index", &self.initial_index)
            .finish_non_exhaustive()
    }
}

/// Configuration for [`crate::ScrollTracker`] and the free scroll functions.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollOptions {
    /// Distance from an edge that still counts as "at the edge".
    pub epsilon: f32,
    /// Fraction of the visible extent moved by one page scroll.
    pub page_fraction: f32,
}

impl Default for ScrollOptions {
    fn default() -> Self {
        Self {
            epsilon: DEFAULT_SCROLL_EPSILON,
            page_fraction: DEFAULT_PAGE_FRACTION,
        }
    }
}

impl ScrollOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_epsilon(mut self, epsilon: f32) -> Self {
        self.epsilon = epsilon;
        self
    }

    pub fn with_page_fraction(mut self, page_fraction: f32) -> Self {
        self.page_fraction = page_fraction;
        self
    }
}
