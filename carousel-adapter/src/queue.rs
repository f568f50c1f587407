use alloc::collections::VecDeque;
use alloc::vec::Vec;

use carousel::{Carousel, CarouselState, NavigationSource};

/// An input for the banner carousel, as delivered by a UI event loop.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CarouselEvent {
    Mount,
    Unmount,
    Next,
    Previous,
    GoTo(usize),
    TouchStart(f32),
    TouchMove(f32),
    TouchEnd,
    TouchCancel,
}

/// A slide transition produced while replaying the queue.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Change {
    pub at_ms: u64,
    pub state: CarouselState,
    pub source: NavigationSource,
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct Queued {
    at_ms: u64,
    event: CarouselEvent,
}

/// A single-threaded event queue for a [`Carousel`].
///
/// UI events are pushed with the timestamp at which they happened; [`EventQueue::run_until`]
/// then interleaves them with the carousel's autoplay deadlines in time order, exactly as a
/// cooperative event loop would:
/// - events with equal timestamps run in push order;
/// - a UI event and a timer deadline at the same instant run UI first, so the manual action
///   re-arms the timer and the stale tick never fires;
/// - time never runs backwards: a late event is applied at the latest time already processed.
#[derive(Clone, Debug, Default)]
pub struct EventQueue {
    events: VecDeque<Queued>,
    clock_ms: u64,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Latest timestamp processed so far.
    pub fn clock_ms(&self) -> u64 {
        self.clock_ms
    }

    pub fn push(&mut self, at_ms: u64, event: CarouselEvent) {
        let pos = self.events.partition_point(|q| q.at_ms <= at_ms);
        self.events.insert(pos, Queued { at_ms, event });
    }

    /// Processes every queued event and timer deadline up to and including `now_ms`.
    ///
    /// Returns the slide transitions in the order they happened.
    pub fn run_until(&mut self, carousel: &mut Carousel, now_ms: u64) -> Vec<Change> {
        let mut out = Vec::new();
        loop {
            let event_at = self
                .events
                .front()
                .map(|q| q.at_ms.max(self.clock_ms))
                .filter(|&t| t <= now_ms);
            let due = carousel.next_tick_at().filter(|&d| d <= now_ms);

            match (event_at, due) {
                (None, None) => break,
                (Some(t), Some(d)) if d < t => {
                    if !self.fire_tick(carousel, d, &mut out) {
                        break;
                    }
                }
                (None, Some(d)) => {
                    if !self.fire_tick(carousel, d, &mut out) {
                        break;
                    }
                }
                (Some(t), _) => {
                    let Some(q) = self.events.pop_front() else {
                        break;
                    };
                    self.clock_ms = t;
                    atrace!(at_ms = t, event = ?q.event, "EventQueue: apply");
                    if let Some(change) = apply(carousel, q.event, t) {
                        out.push(change);
                    }
                }
            }
        }
        self.clock_ms = self.clock_ms.max(now_ms);
        out
    }

    fn fire_tick(&mut self, carousel: &mut Carousel, due_ms: u64, out: &mut Vec<Change>) -> bool {
        let at_ms = due_ms.max(self.clock_ms);
        self.clock_ms = at_ms;
        if carousel.tick(at_ms) {
            atrace!(at_ms, index = carousel.index(), "EventQueue: autoplay tick");
            out.push(Change {
                at_ms,
                state: carousel.state(),
                source: NavigationSource::Autoplay,
            });
            return true;
        }
        // A deadline that did not fire must have moved, or the loop would spin.
        carousel.next_tick_at() != Some(due_ms)
    }
}

/// Applies one event at `at_ms`. Returns the transition it caused, if any.
pub fn apply(carousel: &mut Carousel, event: CarouselEvent, at_ms: u64) -> Option<Change> {
    let (moved, source) = match event {
        CarouselEvent::Mount => {
            carousel.mount(at_ms);
            (false, NavigationSource::User)
        }
        CarouselEvent::Unmount => {
            carousel.unmount();
            (false, NavigationSource::User)
        }
        CarouselEvent::Next => (carousel.next(at_ms), NavigationSource::User),
        CarouselEvent::Previous => (carousel.previous(at_ms), NavigationSource::User),
        CarouselEvent::GoTo(index) => (carousel.go_to(index, at_ms), NavigationSource::User),
        CarouselEvent::TouchStart(x) => {
            carousel.touch_start(x);
            (false, NavigationSource::Swipe)
        }
        CarouselEvent::TouchMove(x) => {
            carousel.touch_move(x);
            (false, NavigationSource::Swipe)
        }
        CarouselEvent::TouchEnd => (
            carousel.touch_end(at_ms).is_some(),
            NavigationSource::Swipe,
        ),
        CarouselEvent::TouchCancel => {
            carousel.touch_cancel();
            (false, NavigationSource::Swipe)
        }
    };
    moved.then(|| Change {
        at_ms,
        state: carousel.state(),
        source,
    })
}
