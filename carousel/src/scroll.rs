use crate::{Direction, ScrollBounds, ScrollOptions, ViewportMetrics};

/// Computes which scroll buttons are usable for `metrics`.
///
/// Pure and idempotent. A viewport whose content fits (`visible >= content`) can scroll neither
/// way, whatever its offset.
pub fn measure(metrics: ViewportMetrics, options: &ScrollOptions) -> ScrollBounds {
    let m = metrics.sanitized();
    let epsilon = sanitize_epsilon(options.epsilon);
    if m.visible_extent >= m.content_extent {
        return ScrollBounds::default();
    }
    ScrollBounds {
        can_scroll_left: m.offset > epsilon,
        can_scroll_right: m.offset + m.visible_extent < m.content_extent - epsilon,
    }
}

/// Target offset for a one-page scroll in `direction`, clamped to `[0, content - visible]`.
pub fn page_offset(metrics: ViewportMetrics, direction: Direction, options: &ScrollOptions) -> f32 {
    let m = metrics.clamped();
    let step = m.visible_extent * sanitize_fraction(options.page_fraction);
    let target = m.offset + direction.sign() * step;
    m.clamp_offset(target)
}

fn sanitize_epsilon(epsilon: f32) -> f32 {
    if epsilon.is_finite() && epsilon >= 0.0 { epsilon } else { 0.0 }
}

fn sanitize_fraction(fraction: f32) -> f32 {
    if fraction.is_finite() && fraction > 0.0 {
        fraction
    } else {
        crate::options::DEFAULT_PAGE_FRACTION
    }
}

/// Tracks a scrollable viewport and keeps its [`ScrollBounds`] current.
///
/// Adapters call [`ScrollTracker::on_resize`] on mount and whenever the container resizes, and
/// [`ScrollTracker::on_scroll`] on every scroll event. Each call recomputes the bounds from the
/// latest metrics and reports whether they changed, so a UI can skip redundant re-renders.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollTracker {
    options: ScrollOptions,
    metrics: ViewportMetrics,
    bounds: ScrollBounds,
}

impl ScrollTracker {
    pub fn new(options: ScrollOptions) -> Self {
        Self {
            options,
            metrics: ViewportMetrics::default(),
            bounds: ScrollBounds::default(),
        }
    }

    pub fn options(&self) -> &ScrollOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: ScrollOptions) -> bool {
        self.options = options;
        self.recompute()
    }

    pub fn metrics(&self) -> ViewportMetrics {
        self.metrics
    }

    pub fn bounds(&self) -> ScrollBounds {
        self.bounds
    }

    pub fn offset(&self) -> f32 {
        self.metrics.offset
    }

    pub fn max_offset(&self) -> f32 {
        self.metrics.max_offset()
    }

    /// Replaces all metrics at once (offset clamped into range). Returns `true` if the bounds
    /// changed.
    pub fn set_metrics(&mut self, metrics: ViewportMetrics) -> bool {
        if !(metrics.content_extent.is_finite()
            && metrics.visible_extent.is_finite()
            && metrics.offset.is_finite())
        {
            cwarn!(?metrics, "ScrollTracker: non-finite metrics sanitized");
        }
        self.metrics = metrics.clamped();
        self.recompute()
    }

    /// Container or content resized. Returns `true` if the bounds changed.
    pub fn on_resize(&mut self, content_extent: f32, visible_extent: f32) -> bool {
        self.set_metrics(ViewportMetrics {
            content_extent,
            visible_extent,
            offset: self.metrics.offset,
        })
    }

    /// Scroll position changed. Returns `true` if the bounds changed.
    pub fn on_scroll(&mut self, offset: f32) -> bool {
        self.set_metrics(ViewportMetrics {
            offset,
            ..self.metrics
        })
    }

    /// Clamped target offset for a page scroll, without applying it.
    pub fn page_offset(&self, direction: Direction) -> f32 {
        page_offset(self.metrics, direction, &self.options)
    }

    pub fn can_scroll(&self, direction: Direction) -> bool {
        self.bounds.can_scroll(direction)
    }

    fn recompute(&mut self) -> bool {
        let bounds = measure(self.metrics, &self.options);
        let changed = bounds != self.bounds;
        if changed {
            ctrace!(
                can_scroll_left = bounds.can_scroll_left,
                can_scroll_right = bounds.can_scroll_right,
                offset = self.metrics.offset,
                "ScrollTracker: bounds changed"
            );
        }
        self.bounds = bounds;
        changed
    }
}
