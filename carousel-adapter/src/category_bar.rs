use alloc::sync::Arc;
use alloc::vec::Vec;

use carousel::{Direction, ScrollBounds, ScrollOptions, ScrollTracker, ViewportMetrics};

use crate::{Easing, Tween};

/// Default smooth-scroll duration for a page action.
pub const DEFAULT_SMOOTH_SCROLL_MS: u64 = 300;

/// A callback fired when a category is selected. Receives the index and the item.
pub type OnSelectCallback<C> = Arc<dyn Fn(usize, &C) + Send + Sync>;

/// A framework-neutral controller for a horizontally scrolling category bar.
///
/// It tracks the selected item, keeps the arrow buttons' enabled state in sync with the
/// viewport, and drives page scrolling with a tween. It does not hold any UI objects. Adapters
/// drive it by calling:
/// - `on_resize` on mount and on container resize
/// - `on_scroll` when the UI reports a scroll offset change (user wheel/drag)
/// - `tick(now_ms)` each frame while [`CategoryBar::is_animating`], writing the returned offset
///   to the real scroll container
pub struct CategoryBar<C> {
    items: Vec<C>,
    selected: Option<usize>,
    tracker: ScrollTracker,
    tween: Option<Tween>,
    smooth_scroll_ms: u64,
    easing: Easing,
    on_select: Option<OnSelectCallback<C>>,
}

impl<C> CategoryBar<C> {
    pub fn new(items: Vec<C>, options: ScrollOptions) -> Self {
        Self {
            items,
            selected: None,
            tracker: ScrollTracker::new(options),
            tween: None,
            smooth_scroll_ms: DEFAULT_SMOOTH_SCROLL_MS,
            easing: Easing::SmoothStep,
            on_select: None,
        }
    }

    /// `0` jumps straight to the target.
    pub fn with_smooth_scroll_ms(mut self, duration_ms: u64) -> Self {
        self.smooth_scroll_ms = duration_ms;
        self
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn with_on_select(
        mut self,
        on_select: Option<impl Fn(usize, &C) + Send + Sync + 'static>,
    ) -> Self {
        self.on_select = on_select.map(|f| Arc::new(f) as _);
        self
    }

    pub fn items(&self) -> &[C] {
        &self.items
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected(&self) -> Option<&C> {
        self.items.get(self.selected?)
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selected == Some(index)
    }

    /// Selects an item and fires `on_select`.
    ///
    /// Returns `None` (and leaves the selection unchanged) if `index` is out of range.
    pub fn select(&mut self, index: usize) -> Option<&C> {
        let item = self.items.get(index)?;
        self.selected = Some(index);
        if let Some(cb) = &self.on_select {
            cb(index, item);
        }
        Some(item)
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn tracker(&self) -> &ScrollTracker {
        &self.tracker
    }

    pub fn metrics(&self) -> ViewportMetrics {
        self.tracker.metrics()
    }

    pub fn bounds(&self) -> ScrollBounds {
        self.tracker.bounds()
    }

    pub fn can_scroll_left(&self) -> bool {
        self.tracker.bounds().can_scroll_left
    }

    pub fn can_scroll_right(&self) -> bool {
        self.tracker.bounds().can_scroll_right
    }

    pub fn offset(&self) -> f32 {
        self.tracker.offset()
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    pub fn cancel_animation(&mut self) {
        self.tween = None;
    }

    /// Returns `true` if the arrow enablement changed.
    pub fn on_resize(&mut self, content_extent: f32, visible_extent: f32) -> bool {
        let changed = self.tracker.on_resize(content_extent, visible_extent);
        if let Some(tween) = &mut self.tween {
            tween.to = self.tracker.metrics().clamp_offset(tween.to);
        }
        changed
    }

    /// Call this when the UI reports a scroll offset change (e.g. user wheel/drag).
    ///
    /// This cancels any active smooth scroll. Returns `true` if the arrow enablement changed.
    pub fn on_scroll(&mut self, offset: f32) -> bool {
        self.cancel_animation();
        self.tracker.on_scroll(offset)
    }

    /// Starts a smooth scroll by one page in `direction`.
    ///
    /// Returns the clamped target offset, or `None` when that arrow is disabled. Pressing again
    /// mid-animation pages on from the pending target.
    pub fn scroll_page(&mut self, direction: Direction, now_ms: u64) -> Option<f32> {
        if !self.tracker.can_scroll(direction) && self.tween.is_none() {
            return None;
        }
        let from_metrics = match self.tween {
            Some(t) => ViewportMetrics {
                offset: t.to,
                ..self.tracker.metrics()
            },
            None => self.tracker.metrics(),
        };
        let target = carousel::page_offset(from_metrics, direction, self.tracker.options());
        if target == from_metrics.offset {
            return None;
        }
        atrace!(
            ?direction,
            from = from_metrics.offset,
            target,
            now_ms,
            "CategoryBar::scroll_page"
        );
        if self.smooth_scroll_ms == 0 {
            self.tween = None;
            self.tracker.on_scroll(target);
            return Some(target);
        }
        match &mut self.tween {
            Some(t) => t.retarget(now_ms, target, self.smooth_scroll_ms),
            None => {
                self.tween = Some(Tween::new(
                    self.tracker.offset(),
                    target,
                    now_ms,
                    self.smooth_scroll_ms,
                    self.easing,
                ));
            }
        }
        Some(target)
    }

    /// Advances an active smooth scroll.
    ///
    /// Returns the new offset while animating, `None` otherwise.
    pub fn tick(&mut self, now_ms: u64) -> Option<f32> {
        let tween = self.tween?;
        let off = tween.sample(now_ms);
        self.tracker.on_scroll(off);
        if tween.is_done(now_ms) {
            self.tween = None;
        }
        Some(self.tracker.offset())
    }
}

impl<C: core::fmt::Debug> core::fmt::Debug for CategoryBar<C> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CategoryBar")
            .field("items", &self.items)
            .field("selected", &self.selected)
            .field("tracker", &self.tracker)
            .field("tween", &self.tween)
            .field("smooth_scroll_ms", &self.smooth_scroll_ms)
            .field("easing", &self.easing)
            .finish_non_exhaustive()
    }
}
