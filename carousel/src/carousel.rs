use alloc::vec::Vec;

use crate::gesture::SwipeDetector;
use crate::index::SlideIndex;
use crate::timer::AutoplayTimer;
use crate::{
    CarouselOptions, CarouselState, Direction, Indicator, NavigationSource, Slide, SlideId, Swipe,
};

/// A headless banner carousel.
///
/// This type is UI-agnostic:
/// - It does not hold any UI objects or real timers.
/// - Your adapter drives it with a clock (`now_ms`), pointer coordinates and navigation commands.
/// - Rendering reads [`Carousel::state`] (index + direction) and [`Carousel::indicators`].
///
/// Lifecycle: call [`Carousel::mount`] when the view appears and [`Carousel::unmount`] when it is
/// torn down. While unmounted, ticks and navigation are ignored, so a late timer callback can
/// never move a disposed carousel.
///
/// Manual navigation (arrows, swipes, indicator clicks) restarts the autoplay interval. Because
/// the restart happens before the adapter next calls [`Carousel::tick`], a tick that was due at
/// the same instant as a manual action does not also fire.
#[derive(Clone, Debug)]
pub struct Carousel {
    slides: Vec<Slide>,
    options: CarouselOptions,
    index: SlideIndex,
    timer: AutoplayTimer,
    gesture: SwipeDetector,
    mounted: bool,
}

impl Carousel {
    pub fn new(slides: Vec<Slide>, options: CarouselOptions) -> Self {
        cdebug!(
            slides = slides.len(),
            autoplay = options.autoplay,
            interval_ms = options.interval_ms,
            "Carousel::new"
        );
        debug_assert!(
            {
                let mut ids: Vec<_> = slides.iter().map(|s| s.id).collect();
                ids.sort_unstable();
                ids.windows(2).all(|w| w[0] != w[1])
            },
            "Carousel::new: slide ids must be unique"
        );
        Self {
            index: SlideIndex::new(slides.len(), options.initial_index),
            timer: AutoplayTimer::new(options.interval_ms),
            gesture: SwipeDetector::new(options.swipe_threshold),
            slides,
            options,
            mounted: false,
        }
    }

    pub fn options(&self) -> &CarouselOptions {
        &self.options
    }

    /// Replaces the options.
    ///
    /// The slide position is kept; interval and autoplay changes take effect from `now_ms`.
    pub fn set_options(&mut self, options: CarouselOptions, now_ms: u64) {
        let autoplay = options.autoplay;
        let interval_ms = options.interval_ms;
        self.gesture.set_threshold(options.swipe_threshold);
        self.options = options;
        cdebug!(autoplay, interval_ms, "Carousel::set_options");
        if self.timer.interval_ms() != interval_ms.max(1) {
            self.timer.set_interval_ms(interval_ms, now_ms);
        }
        self.sync_autoplay(now_ms);
    }

    /// Clones the current options, applies `f`, then delegates to `set_options`.
    pub fn update_options(&mut self, f: impl FnOnce(&mut CarouselOptions), now_ms: u64) {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next, now_ms);
    }

    pub fn set_autoplay(&mut self, autoplay: bool, now_ms: u64) {
        if self.options.autoplay == autoplay {
            return;
        }
        self.options.autoplay = autoplay;
        self.sync_autoplay(now_ms);
    }

    pub fn set_interval_ms(&mut self, interval_ms: u64, now_ms: u64) {
        self.options.interval_ms = interval_ms;
        self.timer.set_interval_ms(interval_ms, now_ms);
    }

    pub fn set_swipe_threshold(&mut self, threshold: f32) {
        self.options.swipe_threshold = threshold;
        self.gesture.set_threshold(threshold);
    }

    pub fn set_on_change(
        &mut self,
        on_change: Option<impl Fn(CarouselState, NavigationSource) + Send + Sync + 'static>,
    ) {
        self.options.on_change = on_change.map(|f| alloc::sync::Arc::new(f) as _);
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn state(&self) -> CarouselState {
        self.index.state()
    }

    pub fn index(&self) -> usize {
        self.index.index()
    }

    pub fn direction(&self) -> Direction {
        self.index.direction()
    }

    pub fn current_slide(&self) -> Option<&Slide> {
        self.slides.get(self.index.index())
    }

    /// The slide a forward move would show next (useful for preloading).
    pub fn upcoming_slide(&self) -> Option<&Slide> {
        self.slides.get(self.index.peek_next())
    }

    pub fn is_autoplaying(&self) -> bool {
        self.timer.is_running()
    }

    /// When the next automatic advance is due, if autoplay is running.
    pub fn next_tick_at(&self) -> Option<u64> {
        self.timer.due_ms()
    }

    /// Fraction of the autoplay interval elapsed at `now_ms`, for filling the active indicator.
    pub fn autoplay_progress(&self, now_ms: u64) -> f32 {
        self.timer.progress(now_ms)
    }

    /// One indicator per slide, in order; exactly one is active unless there are no slides.
    pub fn indicators(&self) -> impl Iterator<Item = Indicator> + '_ {
        let current = self.index.index();
        self.slides
            .iter()
            .enumerate()
            .map(move |(index, slide)| Indicator {
                index,
                id: slide.id,
                active: index == current,
            })
    }

    /// Starts a fresh session: initial slide, forward direction, timer armed from `now_ms`.
    pub fn mount(&mut self, now_ms: u64) {
        cdebug!(now_ms, "Carousel::mount");
        self.index.reset(self.options.initial_index);
        self.gesture.on_cancel();
        self.mounted = true;
        self.timer.stop();
        self.sync_autoplay(now_ms);
    }

    /// Stops the timer and discards gesture state.
    pub fn unmount(&mut self) {
        cdebug!("Carousel::unmount");
        self.mounted = false;
        self.timer.stop();
        self.gesture.on_cancel();
    }

    /// Advances the autoplay timer.
    ///
    /// Returns `true` if a tick fired and the carousel moved forward.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        if !self.mounted {
            return false;
        }
        if !self.timer.poll(now_ms) {
            return false;
        }
        self.navigate(NavigationSource::Autoplay, now_ms, |i| i.next())
    }

    /// "Next" arrow.
    pub fn next(&mut self, now_ms: u64) -> bool {
        self.navigate(NavigationSource::User, now_ms, |i| i.next())
    }

    /// "Previous" arrow.
    pub fn previous(&mut self, now_ms: u64) -> bool {
        self.navigate(NavigationSource::User, now_ms, |i| i.previous())
    }

    /// Jumps to a slide (e.g. indicator click), taking the shortest way around.
    ///
    /// `index` is wrapped into range. Returns `false` if it is already current.
    pub fn go_to(&mut self, index: usize, now_ms: u64) -> bool {
        self.check_target(index);
        self.navigate(NavigationSource::User, now_ms, |i| i.go_to(index))
    }

    /// Jumps to a slide with an explicit transition direction.
    pub fn go_to_with_direction(&mut self, index: usize, direction: Direction, now_ms: u64) -> bool {
        self.check_target(index);
        self.navigate(NavigationSource::User, now_ms, |i| {
            i.go_to_with_direction(index, direction)
        })
    }

    /// Jumps to the slide with the given id.
    pub fn go_to_id(&mut self, id: SlideId, now_ms: u64) -> bool {
        match self.slides.iter().position(|s| s.id == id) {
            Some(index) => self.go_to(index, now_ms),
            None => false,
        }
    }

    pub fn touch_start(&mut self, x: f32) {
        if !self.mounted {
            return;
        }
        self.gesture.on_start(x);
    }

    pub fn touch_move(&mut self, x: f32) {
        self.gesture.on_move(x);
    }

    /// Ends a touch interaction and applies the resulting swipe, if any.
    pub fn touch_end(&mut self, now_ms: u64) -> Option<Swipe> {
        let swipe = self.gesture.on_end()?;
        let moved = match swipe {
            Swipe::Left => self.navigate(NavigationSource::Swipe, now_ms, |i| i.next()),
            Swipe::Right => self.navigate(NavigationSource::Swipe, now_ms, |i| i.previous()),
        };
        moved.then_some(swipe)
    }

    pub fn touch_cancel(&mut self) {
        self.gesture.on_cancel();
    }

    pub fn is_touching(&self) -> bool {
        self.gesture.is_tracking()
    }

    fn check_target(&self, index: usize) {
        if index >= self.slides.len() {
            cwarn!(index, count = self.slides.len(), "Carousel: go_to target wrapped into range");
        }
    }

    fn navigate(
        &mut self,
        source: NavigationSource,
        now_ms: u64,
        f: impl FnOnce(&mut SlideIndex) -> bool,
    ) -> bool {
        if !self.mounted {
            ctrace!(?source, "Carousel: ignored navigation while unmounted");
            return false;
        }
        if !f(&mut self.index) {
            return false;
        }
        if source.resets_timer() && self.timer.is_running() {
            self.timer.reset(now_ms);
        }
        let state = self.index.state();
        ctrace!(
            index = state.index,
            direction = ?state.direction,
            ?source,
            now_ms,
            "Carousel: transition"
        );
        if let Some(cb) = &self.options.on_change {
            cb(state, source);
        }
        true
    }

    fn sync_autoplay(&mut self, now_ms: u64) {
        let should_run = self.mounted && self.options.autoplay && !self.slides.is_empty();
        if should_run && !self.timer.is_running() {
            self.timer.start(now_ms);
        } else if !should_run && self.timer.is_running() {
            self.timer.stop();
        }
    }
}
