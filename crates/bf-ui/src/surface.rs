//! Scroll surfaces backed by egui scroll areas

use ahash::AHashMap;
use bf_core::{ScrollMetrics, ScrollSurface};
use egui::containers::scroll_area::ScrollAreaOutput;
use egui::{Id, Rect, Vec2};

/// Name of the main page scroll area, used when no other surface is selected
pub const PAGE_SURFACE: &str = "page";

/// Geometry of a vertical `ScrollArea` as of its last frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollAreaSurface {
    pub id: Id,
    pub metrics: ScrollMetrics,
}

impl ScrollAreaSurface {
    pub fn from_output<R>(output: &ScrollAreaOutput<R>) -> Self {
        Self::from_parts(output.id, output.state.offset, output.inner_rect, output.content_size)
    }

    pub fn from_parts(id: Id, offset: Vec2, inner_rect: Rect, content_size: Vec2) -> Self {
        Self {
            id,
            metrics: ScrollMetrics::new(offset.y, inner_rect.height(), content_size.y),
        }
    }
}

impl ScrollSurface for ScrollAreaSurface {
    fn distance_from_top(&self) -> f32 {
        self.metrics.distance_from_top()
    }

    fn distance_from_bottom(&self) -> f32 {
        self.metrics.distance_from_bottom()
    }
}

/// Scroll areas drawn in the last frame, keyed by the name they were shown under
#[derive(Debug, Clone, Default)]
pub struct SurfaceRegistry {
    surfaces: AHashMap<String, ScrollAreaSurface>,
}

impl SurfaceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.surfaces.clear();
    }

    /// Record a scroll area; a later record under the same name wins
    pub fn record(&mut self, name: impl Into<String>, surface: ScrollAreaSurface) {
        self.surfaces.insert(name.into(), surface);
    }

    pub fn get(&self, name: &str) -> Option<&ScrollAreaSurface> {
        self.surfaces.get(name)
    }

    /// Surface named by `selector`, falling back to the page when the name is
    /// absent or was not drawn
    pub fn resolve(&self, selector: Option<&str>) -> Option<&ScrollAreaSurface> {
        selector
            .and_then(|name| self.get(name))
            .or_else(|| self.get(PAGE_SURFACE))
    }
}
