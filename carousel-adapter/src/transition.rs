use carousel::{CarouselState, Direction};

use crate::{Easing, Tween};

/// Default slide transition duration.
pub const DEFAULT_TRANSITION_MS: u64 = 800;

/// Where the incoming slide starts and the outgoing slide ends, along the slide axis.
///
/// Offsets are relative to the resting position (`0.0`). Positive values lie toward the trailing
/// edge (right in a left-to-right layout).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SlideTransition {
    pub enter_from: f32,
    pub exit_to: f32,
}

impl SlideTransition {
    /// Forward enters from the trailing edge and exits toward the leading edge. Backward is the
    /// mirror.
    pub fn for_direction(direction: Direction, extent: f32) -> Self {
        let extent = if extent.is_finite() { extent.max(0.0) } else { 0.0 };
        let s = direction.sign();
        Self {
            enter_from: s * extent,
            exit_to: -s * extent,
        }
    }

    /// Offsets of the incoming and outgoing slide at eased progress `t` in `[0, 1]`.
    pub fn sample(&self, t: f32) -> (f32, f32) {
        let t = t.clamp(0.0, 1.0);
        (self.enter_from * (1.0 - t), self.exit_to * t)
    }
}

/// What to draw for one frame of the banner.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SlideFrame {
    pub incoming: usize,
    pub incoming_offset: f32,
    /// The slide being replaced, while a transition is running.
    pub outgoing: Option<usize>,
    pub outgoing_offset: f32,
    /// Eased transition progress; `1.0` when at rest.
    pub progress: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct Active {
    from: usize,
    transition: SlideTransition,
    tween: Tween,
}

/// Turns discrete carousel state changes into per-frame slide offsets.
///
/// Call [`SlideAnimator::observe`] with the carousel state after handling input, then
/// [`SlideAnimator::frame`] when drawing. A change that arrives mid-transition restarts the
/// animation from the slide currently shown.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SlideAnimator {
    extent: f32,
    duration_ms: u64,
    easing: Easing,
    shown: Option<usize>,
    active: Option<Active>,
}

impl SlideAnimator {
    pub fn new(extent: f32) -> Self {
        Self {
            extent,
            duration_ms: DEFAULT_TRANSITION_MS,
            easing: Easing::EaseInOut,
            shown: None,
            active: None,
        }
    }

    pub fn with_duration_ms(mut self, duration_ms: u64) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// The slide width (or height, for vertical carousels). Takes effect for new transitions.
    pub fn set_extent(&mut self, extent: f32) {
        self.extent = extent;
    }

    pub fn is_animating(&self, now_ms: u64) -> bool {
        self.active.is_some_and(|a| !a.tween.is_done(now_ms))
    }

    /// Records the carousel state. Starts a transition when the index changed.
    ///
    /// Returns `true` if a transition started.
    pub fn observe(&mut self, state: CarouselState, now_ms: u64) -> bool {
        let Some(shown) = self.shown else {
            self.shown = Some(state.index);
            return false;
        };
        if shown == state.index {
            return false;
        }
        self.shown = Some(state.index);
        self.active = Some(Active {
            from: shown,
            transition: SlideTransition::for_direction(state.direction, self.extent),
            tween: Tween::new(0.0, 1.0, now_ms, self.duration_ms, self.easing),
        });
        true
    }

    /// Drops any running transition and forgets the shown slide (e.g. on unmount).
    pub fn reset(&mut self) {
        self.shown = None;
        self.active = None;
    }

    /// Returns `None` until the first [`SlideAnimator::observe`].
    pub fn frame(&mut self, now_ms: u64) -> Option<SlideFrame> {
        let incoming = self.shown?;
        let Some(active) = self.active else {
            return Some(SlideFrame::at_rest(incoming));
        };
        if active.tween.is_done(now_ms) {
            self.active = None;
            return Some(SlideFrame::at_rest(incoming));
        }
        let t = active.tween.sample(now_ms);
        let (incoming_offset, outgoing_offset) = active.transition.sample(t);
        Some(SlideFrame {
            incoming,
            incoming_offset,
            outgoing: Some(active.from),
            outgoing_offset,
            progress: t,
        })
    }
}

impl SlideFrame {
    fn at_rest(index: usize) -> Self {
        Self {
            incoming: index,
            incoming_offset: 0.0,
            outgoing: None,
            outgoing_offset: 0.0,
            progress: 1.0,
        }
    }
}
