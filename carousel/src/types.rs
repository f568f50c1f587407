use alloc::string::String;

/// Stable identity of a slide (its ordering key in the original sequence).
pub type SlideId = u64;

/// The direction of the last navigation.
///
/// Renderers use it to pick enter/exit animation offsets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    #[default]
    Forward,
    Backward,
}

impl Direction {
    pub fn reversed(self) -> Self {
        match self {
            Self::Forward => Self::Backward,
            Self::Backward => Self::Forward,
        }
    }

    /// `1.0` for `Forward`, `-1.0` for `Backward`.
    pub fn sign(self) -> f32 {
        match self {
            Self::Forward => 1.0,
            Self::Backward => -1.0,
        }
    }
}

/// One carousel panel.
///
/// `image` is an opaque resource handle (URL, asset path, texture name...). The carousel never
/// interprets it.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Slide {
    pub id: SlideId,
    pub image: String,
    pub alt: String,
}

impl Slide {
    pub fn new(id: SlideId, image: impl Into<String>, alt: impl Into<String>) -> Self {
        Self {
            id,
            image: image.into(),
            alt: alt.into(),
        }
    }
}

/// A discrete horizontal swipe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Swipe {
    /// Content dragged toward the leading edge. Advances to the next slide.
    Left,
    /// Content dragged toward the trailing edge. Goes back to the previous slide.
    Right,
}

impl Swipe {
    /// The navigation direction this swipe maps to.
    pub fn direction(self) -> Direction {
        match self {
            Self::Left => Direction::Forward,
            Self::Right => Direction::Backward,
        }
    }
}

/// What caused a slide transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NavigationSource {
    /// The autoplay timer fired.
    Autoplay,
    /// An arrow, indicator or programmatic navigation.
    User,
    /// A completed swipe gesture.
    Swipe,
}

impl NavigationSource {
    /// Whether this transition restarts the autoplay interval.
    pub fn resets_timer(self) -> bool {
        !matches!(self, Self::Autoplay)
    }
}

/// A progress indicator ("dot") for one slide.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Indicator {
    pub index: usize,
    pub id: SlideId,
    pub active: bool,
}

/// Which of the scroll buttons are usable for the current viewport.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollBounds {
    pub can_scroll_left: bool,
    pub can_scroll_right: bool,
}

impl ScrollBounds {
    pub fn can_scroll(&self, direction: Direction) -> bool {
        match direction {
            Direction::Forward => self.can_scroll_right,
            Direction::Backward => self.can_scroll_left,
        }
    }

    pub fn overflows(&self) -> bool {
        self.can_scroll_left || self.can_scroll_right
    }
}
