use crate::{CarouselState, Direction};

/// Current slide index plus the direction of the last move, over a ring of `count` slides.
///
/// All transitions wrap. With `count == 0` every transition is a no-op and the index stays `0`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SlideIndex {
    index: usize,
    count: usize,
    direction: Direction,
}

impl SlideIndex {
    pub fn new(count: usize, initial_index: usize) -> Self {
        Self {
            index: wrap(initial_index, count),
            count,
            direction: Direction::Forward,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn state(&self) -> CarouselState {
        CarouselState {
            index: self.index,
            direction: self.direction,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Index that `next()` would move to.
    pub fn peek_next(&self) -> usize {
        if self.count == 0 {
            return 0;
        }
        if self.index + 1 == self.count {
            0
        } else {
            self.index + 1
        }
    }

    /// Index that `previous()` would move to.
    pub fn peek_previous(&self) -> usize {
        if self.count == 0 {
            return 0;
        }
        if self.index == 0 {
            self.count - 1
        } else {
            self.index - 1
        }
    }

    /// Advances one slide. Returns `false` only when there are no slides.
    pub fn next(&mut self) -> bool {
        if self.count == 0 {
            return false;
        }
        self.index = self.peek_next();
        self.direction = Direction::Forward;
        true
    }

    /// Steps back one slide. Returns `false` only when there are no slides.
    pub fn previous(&mut self) -> bool {
        if self.count == 0 {
            return false;
        }
        self.index = self.peek_previous();
        self.direction = Direction::Backward;
        true
    }

    /// Jumps to `target` (wrapped), inferring the direction from the shortest way around the
    /// ring. Ties go forward.
    ///
    /// Returns `false` if the target is already current.
    pub fn go_to(&mut self, target: usize) -> bool {
        if self.count == 0 {
            return false;
        }
        let target = wrap(target, self.count);
        if target == self.index {
            return false;
        }
        let forward = (target + self.count - self.index) % self.count;
        let backward = self.count - forward;
        let direction = if forward <= backward {
            Direction::Forward
        } else {
            Direction::Backward
        };
        self.index = target;
        self.direction = direction;
        true
    }

    /// Jumps to `target` (wrapped) with an explicit direction.
    ///
    /// Returns `false` if the target is already current.
    pub fn go_to_with_direction(&mut self, target: usize, direction: Direction) -> bool {
        if self.count == 0 {
            return false;
        }
        let target = wrap(target, self.count);
        if target == self.index {
            return false;
        }
        self.index = target;
        self.direction = direction;
        true
    }

    /// Moves one step in `direction`.
    pub fn step(&mut self, direction: Direction) -> bool {
        match direction {
            Direction::Forward => self.next(),
            Direction::Backward => self.previous(),
        }
    }

    /// Resets to `index` (wrapped) with a forward direction, as on a fresh mount.
    pub fn reset(&mut self, index: usize) {
        self.index = wrap(index, self.count);
        self.direction = Direction::Forward;
    }
}

fn wrap(index: usize, count: usize) -> usize {
    if count == 0 { 0 } else { index % count }
}
