//! Scroll surface capability

/// Read-only view of a scrollable surface.
///
/// Implemented once per surface kind (whole viewport, nested scroll area);
/// the navigator only ever asks how far the visible area is from either end.
pub trait ScrollSurface {
    /// Distance already scrolled from the start of the content
    fn distance_from_top(&self) -> f32;

    /// Remaining scrollable distance below the visible area
    fn distance_from_bottom(&self) -> f32;

    fn at_top(&self, threshold: f32) -> bool {
        self.distance_from_top() <= threshold
    }

    fn at_bottom(&self, threshold: f32) -> bool {
        self.distance_from_bottom() <= threshold
    }
}

/// Plain scroll geometry in logical pixels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollMetrics {
    /// Current scroll offset from the start
    pub offset: f32,
    /// Height of the visible area
    pub viewport: f32,
    /// Total height of the content
    pub content: f32,
}

impl ScrollMetrics {
    pub fn new(offset: f32, viewport: f32, content: f32) -> Self {
        Self {
            offset,
            viewport,
            content,
        }
    }
}

impl ScrollSurface for ScrollMetrics {
    fn distance_from_top(&self) -> f32 {
        self.offset.max(0.0)
    }

    fn distance_from_bottom(&self) -> f32 {
        (self.content - self.offset - self.viewport).max(0.0)
    }
}

impl<T: ScrollSurface + ?Sized> ScrollSurface for &T {
    fn distance_from_top(&self) -> f32 {
        (**self).distance_from_top()
    }

    fn distance_from_bottom(&self) -> f32 {
        (**self).distance_from_bottom()
    }
}
