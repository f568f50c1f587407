use crate::Direction;

/// A lightweight, serializable snapshot of the carousel position.
///
/// This is the only thing a renderer needs to decide which slide is visible and which transition
/// to play. With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CarouselState {
    pub index: usize,
    pub direction: Direction,
}

/// Scrollable viewport geometry along the scroll axis, as measured by the UI layer.
///
/// For a horizontal bar this is `scrollWidth`, `clientWidth` and `scrollLeft`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewportMetrics {
    pub content_extent: f32,
    pub visible_extent: f32,
    pub offset: f32,
}

impl ViewportMetrics {
    pub fn new(content_extent: f32, visible_extent: f32, offset: f32) -> Self {
        Self {
            content_extent,
            visible_extent,
            offset,
        }
    }

    /// Replaces non-finite or negative values with `0.0`.
    pub fn sanitized(self) -> Self {
        Self {
            content_extent: finite_non_negative(self.content_extent),
            visible_extent: finite_non_negative(self.visible_extent),
            offset: finite_non_negative(self.offset),
        }
    }

    /// The largest valid offset. Never negative.
    pub fn max_offset(&self) -> f32 {
        let m = self.sanitized();
        (m.content_extent - m.visible_extent).max(0.0)
    }

    pub fn clamp_offset(&self, offset: f32) -> f32 {
        finite_non_negative(offset).min(self.max_offset())
    }

    /// Same metrics with the offset clamped into `[0, max_offset]`.
    pub fn clamped(self) -> Self {
        let mut m = self.sanitized();
        m.offset = m.offset.min(m.max_offset());
        m
    }
}

pub(crate) fn finite_non_negative(v: f32) -> f32 {
    if v.is_finite() && v > 0.0 { v } else { 0.0 }
}
