use crate::Swipe;
use crate::options::DEFAULT_SWIPE_THRESHOLD;

/// Turns a touch/pointer interaction into at most one [`Swipe`].
///
/// Feed it `on_start` / `on_move` / `on_end` from your UI layer. Only the horizontal coordinate
/// matters. The recorded coordinates are discarded after every `on_end` or `on_cancel`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SwipeDetector {
    threshold: f32,
    start_x: Option<f32>,
    current_x: Option<f32>,
}

impl Default for SwipeDetector {
    fn default() -> Self {
        Self::new(DEFAULT_SWIPE_THRESHOLD)
    }
}

impl SwipeDetector {
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold: sanitize_threshold(threshold),
            start_x: None,
            current_x: None,
        }
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    pub fn set_threshold(&mut self, threshold: f32) {
        self.threshold = sanitize_threshold(threshold);
    }

    /// Whether an interaction is in progress.
    pub fn is_tracking(&self) -> bool {
        self.start_x.is_some()
    }

    /// Signed drag distance so far (`start - current`), if tracking and moved.
    pub fn distance(&self) -> Option<f32> {
        Some(self.start_x? - self.current_x?)
    }

    pub fn on_start(&mut self, x: f32) {
        if !x.is_finite() {
            cwarn!(x, "SwipeDetector::on_start: non-finite coordinate ignored");
            return;
        }
        self.start_x = Some(x);
        self.current_x = None;
    }

    /// Records the latest coordinate. Ignored when no interaction has started.
    pub fn on_move(&mut self, x: f32) {
        if self.start_x.is_none() || !x.is_finite() {
            return;
        }
        self.current_x = Some(x);
    }

    /// Finishes the interaction and resolves it.
    ///
    /// Returns `None` when the drag did not travel strictly further than the threshold, or when
    /// `on_start` was never called.
    pub fn on_end(&mut self) -> Option<Swipe> {
        let distance = self.distance();
        self.clear();
        let distance = distance?;
        let swipe = if distance > self.threshold {
            Some(Swipe::Left)
        } else if distance < -self.threshold {
            Some(Swipe::Right)
        } else {
            None
        };
        ctrace!(distance, threshold = self.threshold, ?swipe, "SwipeDetector::on_end");
        swipe
    }

    /// Discards an aborted interaction.
    pub fn on_cancel(&mut self) {
        self.clear();
    }

    fn clear(&mut self) {
        self.start_x = None;
        self.current_x = None;
    }
}

fn sanitize_threshold(threshold: f32) -> f32 {
    if threshold.is_finite() && threshold >= 0.0 {
        threshold
    } else {
        cwarn!(threshold, "invalid swipe threshold, using default");
        DEFAULT_SWIPE_THRESHOLD
    }
}
